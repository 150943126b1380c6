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

use serde::{Deserialize, Serialize};

use crate::nlp::{word_count, Sentence};

/// Statistics of a summary compared to its original text.
///
/// Words are all tokens except punctuation and whitespace, stopwords are counted as well.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Statistics {
    pub original_sentences: usize,
    pub summary_sentences: usize,
    pub original_words: usize,
    pub summary_words: usize,
    /// The reduction of the word count in percent.
    pub compression_ratio: f64,
}

impl Statistics {
    /// The statistics if no summary has been produced.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Computes the statistics of the segmented original text and summary.
    pub fn compute(original: &[Sentence], summary: &[Sentence]) -> Self {
        if original.is_empty() || summary.is_empty() {
            return Self::zero();
        }

        let original_words = word_count(original);
        let summary_words = word_count(summary);

        Self {
            original_sentences: original.len(),
            summary_sentences: summary.len(),
            original_words,
            summary_words,
            compression_ratio: Self::compression_ratio(original_words, summary_words),
        }
    }

    /// Computes the reduction of the word count in percent, rounded to two decimals.
    ///
    /// Exact ties are rounded to the even neighbor, e.g. `90.625` becomes `90.62`.
    ///
    /// The ratio is negative if the summary has more words than the original text and it is zero
    /// if the original text has no words.
    pub fn compression_ratio(original_words: usize, summary_words: usize) -> f64 {
        if original_words == 0 {
            return 0.;
        }

        #[allow(clippy::cast_precision_loss)]
        let ratio = (1. - summary_words as f64 / original_words as f64) * 100.;
        format!("{ratio:.2}").parse().unwrap_or(ratio)
    }
}

#[cfg(test)]
mod tests {
    use xayn_test_utils::assert_approx_eq;

    use super::*;
    use crate::nlp::Token;

    fn sentence(words: usize) -> Sentence {
        let mut tokens = vec![Token::stopword("a"), Token::whitespace(" ")];
        tokens.extend((1..words).map(|i| Token::word(format!("w{i}"))));
        tokens.push(Token::punctuation("."));
        Sentence::new("", tokens)
    }

    #[test]
    fn test_zero() {
        assert_eq!(
            Statistics::zero(),
            Statistics {
                original_sentences: 0,
                summary_sentences: 0,
                original_words: 0,
                summary_words: 0,
                compression_ratio: 0.,
            },
        );
    }

    #[test]
    fn test_compute_without_summary() {
        assert_eq!(Statistics::compute(&[sentence(3)], &[]), Statistics::zero());
        assert_eq!(Statistics::compute(&[], &[sentence(3)]), Statistics::zero());
    }

    #[test]
    fn test_compute() {
        let original = [sentence(4), sentence(2), sentence(6)];
        let summary = [sentence(4)];
        let stats = Statistics::compute(&original, &summary);
        assert_eq!(stats.original_sentences, 3);
        assert_eq!(stats.summary_sentences, 1);
        assert_eq!(stats.original_words, 12);
        assert_eq!(stats.summary_words, 4);
        assert_approx_eq!(f64, stats.compression_ratio, 66.67);
    }

    #[test]
    fn test_compression_ratio() {
        assert_approx_eq!(f64, Statistics::compression_ratio(0, 0), 0.);
        assert_approx_eq!(f64, Statistics::compression_ratio(4, 1), 75.);
        assert_approx_eq!(f64, Statistics::compression_ratio(3, 1), 66.67);
        assert_approx_eq!(f64, Statistics::compression_ratio(3, 3), 0.);
        assert_approx_eq!(f64, Statistics::compression_ratio(7, 2), 71.43);
    }

    #[test]
    fn test_compression_ratio_ties_to_even() {
        assert_approx_eq!(f64, Statistics::compression_ratio(32, 3), 90.62);
        assert_approx_eq!(f64, Statistics::compression_ratio(32, 7), 78.12);
        assert_approx_eq!(f64, Statistics::compression_ratio(32, 1), 96.88);
    }

    #[test]
    fn test_compression_ratio_not_clamped() {
        assert_approx_eq!(f64, Statistics::compression_ratio(2, 3), -50.);
    }

    #[test]
    fn test_serialize() {
        let stats = Statistics {
            original_sentences: 2,
            summary_sentences: 1,
            original_words: 8,
            summary_words: 4,
            compression_ratio: 50.,
        };
        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            serde_json::json!({
                "original_sentences": 2,
                "summary_sentences": 1,
                "original_words": 8,
                "summary_words": 4,
                "compression_ratio": 50.0,
            }),
        );
    }
}
