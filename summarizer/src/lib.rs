// Copyright 2023 Xayn AG
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Summarize a text by extracting its most relevant sentences.
//!
//! Sentences are scored by the mean term frequency times inverse sentence frequency of their
//! content-bearing lemmas. The best scoring sentences are kept in their original order, their
//! number is controlled by the summary ratio and the threshold factor of the [`Config`].
//!
//! Segmentation, stopword detection and lemmatization are provided by a [`Segmenter`], the
//! [`UnicodeSegmenter`] is used by default.

#![forbid(unsafe_op_in_unsafe_fn)]
#![forbid(unsafe_code)]
#![deny(
    clippy::pedantic,
    noop_method_call,
    rust_2018_idioms,
    unused_qualifications
)]
#![warn(unreachable_pub, rustdoc::missing_crate_level_docs)]
#![allow(
    clippy::items_after_statements,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

mod config;
pub mod load_config;
pub mod logging;
pub mod nlp;
mod preprocess;
pub mod scorer;
pub mod selector;
mod stats;
mod summarizer;

pub use crate::{
    config::{Config, ConfigError, Configured, Parameter},
    nlp::{unicode::UnicodeSegmenter, SegmentError, Segmenter, Sentence, Token},
    preprocess::preprocess,
    scorer::Scores,
    stats::Statistics,
    summarizer::{Error, Session, Summarizer, Summary},
};

/// Summarizes a text with the default [`UnicodeSegmenter`].
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// use xayn_text_summarizer::{summarize, Config};
///
/// let summary = summarize(
///     "Lorem ipsum dolor sit amet. Consectetur adipiscing elit.",
///     &Config::default(),
/// )
/// .unwrap();
/// assert_eq!(summary.stats.original_sentences, 2);
/// assert_eq!(summary.stats.summary_sentences, 1);
/// ```
pub fn summarize(text: &str, config: &Config) -> Result<Summary, Error> {
    Summarizer::new(UnicodeSegmenter::default()).summarize(text, config)
}
