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

use displaydoc::Display;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    config::{Config, ConfigError, Parameter},
    nlp::{unicode::UnicodeSegmenter, SegmentError, Segmenter},
    preprocess::preprocess,
    scorer::Scores,
    selector::select,
    stats::Statistics,
};

/// The potential errors of the [`Summarizer`].
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Failed to analyze the text: {0}
    Segment(#[from] SegmentError),
}

/// A summary together with its statistics.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Summary {
    #[serde(rename = "summary")]
    pub text: String,
    pub stats: Statistics,
}

/// Extracts the best scoring sentences of a text.
#[derive(Clone, Debug, Default)]
pub struct Summarizer<S> {
    segmenter: S,
}

impl<S> Summarizer<S>
where
    S: Segmenter,
{
    pub fn new(segmenter: S) -> Self {
        Self { segmenter }
    }

    /// Summarizes the text.
    ///
    /// The selected sentences are joined by a single space in their original order. Empty or
    /// whitespace only texts result in an empty summary with zeroed statistics.
    #[instrument(skip_all, fields(len = text.len()))]
    pub fn summarize(&self, text: &str, config: &Config) -> Result<Summary, Error> {
        let text = preprocess(text);
        if text.is_empty() {
            return Ok(Summary::default());
        }

        let sentences = self.segmenter.segment(&text)?;
        if sentences.is_empty() {
            return Ok(Summary::default());
        }

        let scores = Scores::compute(&sentences);
        let selected = select(&scores, config.summary_ratio(), config.threshold_factor());
        debug!(
            sentences = sentences.len(),
            selected = selected.len(),
            "selected sentences",
        );

        let text = selected
            .into_iter()
            .map(|index| sentences[index].text.as_str())
            .join(" ");
        if text.is_empty() {
            return Ok(Summary::default());
        }

        let summary = self.segmenter.segment(&text)?;
        let stats = Statistics::compute(&sentences, &summary);

        Ok(Summary { text, stats })
    }
}

/// A summarizer which keeps its configuration and the statistics of its last summary.
///
/// Exclusive access is required for configuring and summarizing, use one session per concurrent
/// caller.
#[derive(Clone, Debug)]
pub struct Session<S> {
    summarizer: Summarizer<S>,
    config: Config,
    stats: Statistics,
}

impl Default for Session<UnicodeSegmenter> {
    fn default() -> Self {
        Self::new(UnicodeSegmenter::default())
    }
}

impl<S> Session<S>
where
    S: Segmenter,
{
    /// Creates a session with the default configuration.
    pub fn new(segmenter: S) -> Self {
        Self {
            summarizer: Summarizer::new(segmenter),
            config: Config::default(),
            stats: Statistics::zero(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Updates the configuration with raw values and returns the rejected ones.
    ///
    /// See [`Config::configure()`].
    pub fn configure(
        &mut self,
        summary_ratio: Option<Parameter>,
        threshold_factor: Option<Parameter>,
    ) -> Vec<ConfigError> {
        let configured = self.config.configure(summary_ratio, threshold_factor);
        self.config = configured.config;

        configured.rejected
    }

    /// Summarizes the text and keeps the statistics of the summary.
    pub fn summarize(&mut self, text: &str) -> Result<String, Error> {
        self.stats = Statistics::zero();
        let summary = self.summarizer.summarize(text, &self.config)?;
        self.stats = summary.stats;

        Ok(summary.text)
    }

    /// The statistics of the last summary.
    pub fn statistics(&self) -> Statistics {
        self.stats
    }
}
