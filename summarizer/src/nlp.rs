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

//! The natural language capabilities the summarizer depends on.
//!
//! A [`Segmenter`] splits a text into [`Sentence`]s of [`Token`]s, each token carrying its lemma
//! and whether it is a stopword, punctuation or whitespace. Any tokenizer and lemmatizer can be
//! plugged in by implementing the trait.

pub mod unicode;

use displaydoc::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The smallest unit of analysis.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The normalized base form.
    pub lemma: String,
    pub is_stopword: bool,
    pub is_punctuation: bool,
    pub is_whitespace: bool,
}

impl Token {
    /// Creates a content-bearing token.
    pub fn word(lemma: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            is_stopword: false,
            is_punctuation: false,
            is_whitespace: false,
        }
    }

    /// Creates a stopword token.
    pub fn stopword(lemma: impl Into<String>) -> Self {
        Self {
            is_stopword: true,
            ..Self::word(lemma)
        }
    }

    /// Creates a punctuation token.
    pub fn punctuation(lemma: impl Into<String>) -> Self {
        Self {
            is_punctuation: true,
            ..Self::word(lemma)
        }
    }

    /// Creates a whitespace token.
    pub fn whitespace(lemma: impl Into<String>) -> Self {
        Self {
            is_whitespace: true,
            ..Self::word(lemma)
        }
    }

    /// Checks if the token is neither a stopword, punctuation nor whitespace.
    pub fn is_content(&self) -> bool {
        !self.is_stopword && self.is_word()
    }

    /// Checks if the token counts as a word, stopwords included.
    pub fn is_word(&self) -> bool {
        !self.is_punctuation && !self.is_whitespace
    }
}

/// A contiguous span of a text.
///
/// The ordinal index of a sentence is its position in the sequence returned by the
/// [`Segmenter`].
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// The display text.
    pub text: String,
    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }

    /// Iterates over the lemmas of the content-bearing tokens.
    pub fn content_lemmas(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|token| token.is_content())
            .map(|token| token.lemma.as_str())
    }

    /// Counts the words of the sentence, stopwords included.
    pub fn word_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_word()).count()
    }
}

/// Counts the words of all sentences, stopwords included.
pub fn word_count(sentences: &[Sentence]) -> usize {
    sentences.iter().map(Sentence::word_count).sum()
}

/// Failed to segment the text: {0}
#[derive(Debug, Display, Error)]
pub struct SegmentError(#[from] Box<dyn std::error::Error + Send + Sync + 'static>);

impl SegmentError {
    pub fn new(error: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self(error.into())
    }
}

/// Splits a text into sentences of lemmatized tokens.
///
/// Implementations must be deterministic and must keep the sentences in the order in which they
/// appear in the text.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Result<Vec<Sentence>, SegmentError>;
}

impl<S> Segmenter for &S
where
    S: Segmenter + ?Sized,
{
    fn segment(&self, text: &str) -> Result<Vec<Sentence>, SegmentError> {
        (**self).segment(text)
    }
}

impl<S> Segmenter for Box<S>
where
    S: Segmenter + ?Sized,
{
    fn segment(&self, text: &str) -> Result<Vec<Sentence>, SegmentError> {
        (**self).segment(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_flags() {
        assert!(Token::word("summary").is_content());
        assert!(Token::word("summary").is_word());
        assert!(!Token::stopword("the").is_content());
        assert!(Token::stopword("the").is_word());
        assert!(!Token::punctuation(".").is_content());
        assert!(!Token::punctuation(".").is_word());
        assert!(!Token::whitespace(" ").is_content());
        assert!(!Token::whitespace(" ").is_word());
    }

    #[test]
    fn test_sentence_counts() {
        let sentence = Sentence::new(
            "The cat sat.",
            vec![
                Token::stopword("the"),
                Token::whitespace(" "),
                Token::word("cat"),
                Token::whitespace(" "),
                Token::word("sit"),
                Token::punctuation("."),
            ],
        );
        assert_eq!(sentence.content_lemmas().collect::<Vec<_>>(), ["cat", "sit"]);
        assert_eq!(sentence.word_count(), 3);
        assert_eq!(word_count(&[sentence.clone(), sentence]), 6);
    }

    #[test]
    fn test_segment_error_message() {
        let error = SegmentError::new("model unavailable");
        assert_eq!(
            error.to_string(),
            "Failed to segment the text: model unavailable",
        );
    }
}
