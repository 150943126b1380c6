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

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};
use unicode_segmentation::UnicodeSegmentation;

use crate::nlp::{SegmentError, Segmenter, Sentence, Token};

/// A segmenter based on the unicode text segmentation rules.
///
/// Sentence and word boundaries follow [UAX #29](https://unicode.org/reports/tr29/), lemmas are
/// the lowercased words and stopwords are looked up in a stopword list, english by default.
#[derive(Clone, Debug)]
pub struct UnicodeSegmenter {
    stopwords: HashSet<String>,
}

impl Default for UnicodeSegmenter {
    fn default() -> Self {
        Self::new(get(LANGUAGE::English))
    }
}

impl UnicodeSegmenter {
    /// Creates a segmenter with the given stopwords.
    pub fn new(stopwords: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self {
            stopwords: HashSet::new(),
        }
        .with_stopwords(stopwords)
    }

    /// Adds stopwords to the segmenter.
    pub fn with_stopwords(mut self, stopwords: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        self.stopwords.extend(
            stopwords
                .into_iter()
                .map(|stopword| stopword.as_ref().to_lowercase()),
        );
        self
    }

    /// Checks if the lowercased word is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    fn token(&self, word: &str) -> Token {
        let lemma = word.to_lowercase();
        if word.chars().all(char::is_whitespace) {
            Token::whitespace(lemma)
        } else if !word.chars().any(char::is_alphanumeric) {
            Token::punctuation(lemma)
        } else if self.stopwords.contains(&lemma) {
            Token::stopword(lemma)
        } else {
            Token::word(lemma)
        }
    }

    fn sentence(&self, span: &str) -> Option<Sentence> {
        let text = span.trim_end();
        if text.trim_start().is_empty() {
            return None;
        }
        let tokens = text
            .split_word_bounds()
            .map(|word| self.token(word))
            .collect();

        Some(Sentence::new(text, tokens))
    }
}

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Sentence>, SegmentError> {
        Ok(text
            .split_sentence_bounds()
            .filter_map(|span| self.sentence(span))
            .collect())
    }
}
