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

//! Sentence scoring by term frequency and inverse sentence frequency.

use std::collections::{HashMap, HashSet};

use derive_more::Deref;

use crate::nlp::Sentence;

/// The scores of the sentences of a text, indexed like the sentences.
#[derive(Clone, Debug, Default, Deref, PartialEq)]
pub struct Scores(Vec<f64>);

impl Scores {
    /// Scores each sentence by the mean tf-isf weight of its content-bearing tokens.
    ///
    /// Repeated lemmas within a sentence contribute repeatedly. A sentence without
    /// content-bearing tokens scores zero.
    pub fn compute(sentences: &[Sentence]) -> Self {
        let tf = term_frequencies(sentences);
        let isf = inverse_sentence_frequencies(sentences);

        let scores = sentences
            .iter()
            .map(|sentence| {
                let (sum, count) = sentence.content_lemmas().fold(
                    (0., 0_usize),
                    |(sum, count), lemma| {
                        let weight = tf.get(lemma).copied().unwrap_or_default()
                            * isf.get(lemma).copied().unwrap_or_default();
                        (sum + weight, count + 1)
                    },
                );
                if count > 0 {
                    #[allow(clippy::cast_precision_loss)]
                    let count = count as f64;
                    sum / count
                } else {
                    0.
                }
            })
            .collect();

        Self(scores)
    }
}

/// Computes the normalized frequency of each content-bearing lemma.
///
/// The raw counts over the whole text are divided by the maximum count, hence each frequency
/// ranges in the interval `(0, 1]`.
pub fn term_frequencies(sentences: &[Sentence]) -> HashMap<&str, f64> {
    let mut counts = HashMap::<&str, usize>::new();
    for lemma in sentences.iter().flat_map(Sentence::content_lemmas) {
        *counts.entry(lemma).or_default() += 1;
    }

    // arbitrary to allow for division since there are no counts
    let max = counts.values().copied().max().unwrap_or(1);
    #[allow(clippy::cast_precision_loss)]
    let max = max as f64;

    counts
        .into_iter()
        .map(|(lemma, count)| {
            #[allow(clippy::cast_precision_loss)]
            let count = count as f64;
            (lemma, count / max)
        })
        .collect()
}

/// Counts for each content-bearing lemma the number of sentences containing it.
pub fn sentence_frequencies(sentences: &[Sentence]) -> HashMap<&str, usize> {
    let mut frequencies = HashMap::<&str, usize>::new();
    for sentence in sentences {
        for lemma in sentence.content_lemmas().collect::<HashSet<_>>() {
            *frequencies.entry(lemma).or_default() += 1;
        }
    }

    frequencies
}

/// Computes the smoothed inverse sentence frequency of each content-bearing lemma.
///
/// The frequency is `ln(S / (df + 1)) + 1` for `S` sentences of which `df` contain the lemma.
pub fn inverse_sentence_frequencies(sentences: &[Sentence]) -> HashMap<&str, f64> {
    #[allow(clippy::cast_precision_loss)]
    let len = sentences.len() as f64;

    sentence_frequencies(sentences)
        .into_iter()
        .map(|(lemma, frequency)| {
            #[allow(clippy::cast_precision_loss)]
            let frequency = frequency as f64;
            (lemma, (len / (frequency + 1.)).ln() + 1.)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use xayn_test_utils::assert_approx_eq;

    use super::*;
    use crate::nlp::Token;

    fn sentence(tokens: &[Token]) -> Sentence {
        Sentence::new("", tokens.to_vec())
    }

    fn words(lemmas: &[&str]) -> Sentence {
        sentence(&lemmas.iter().map(|lemma| Token::word(*lemma)).collect::<Vec<_>>())
    }

    #[test]
    fn test_term_frequencies() {
        let sentences = [
            words(&["cat", "dog", "cat"]),
            sentence(&[
                Token::word("cat"),
                Token::stopword("the"),
                Token::punctuation("."),
                Token::whitespace(" "),
            ]),
            words(&["bird"]),
        ];
        let tf = term_frequencies(&sentences);
        assert_eq!(tf.len(), 3);
        assert_approx_eq!(f64, tf["cat"], 1.);
        assert_approx_eq!(f64, tf["dog"], 1. / 3.);
        assert_approx_eq!(f64, tf["bird"], 1. / 3.);
    }

    #[test]
    fn test_term_frequencies_without_content() {
        let sentences = [sentence(&[Token::stopword("a"), Token::punctuation("!")])];
        assert!(term_frequencies(&sentences).is_empty());
    }

    #[test]
    fn test_sentence_frequencies_count_once_per_sentence() {
        let sentences = [
            words(&["cat", "cat", "cat"]),
            words(&["cat", "dog"]),
            words(&["dog"]),
            words(&["bird"]),
        ];
        let df = sentence_frequencies(&sentences);
        assert_eq!(df.len(), 3);
        assert_eq!(df["cat"], 2);
        assert_eq!(df["dog"], 2);
        assert_eq!(df["bird"], 1);
    }

    #[test]
    fn test_inverse_sentence_frequencies() {
        let sentences = [words(&["cat", "dog"]), words(&["cat"]), words(&["cat"])];
        let isf = inverse_sentence_frequencies(&sentences);
        // present in every sentence, still positive
        assert_approx_eq!(f64, isf["cat"], (3_f64 / 4.).ln() + 1.);
        assert_approx_eq!(f64, isf["dog"], (3_f64 / 2.).ln() + 1.);
        assert!(isf["cat"] > 0.);
    }

    #[test]
    fn test_scores() {
        let sentences = [
            words(&["cat", "dog", "cat"]),
            sentence(&[Token::word("cat"), Token::stopword("the")]),
            words(&["bird"]),
        ];
        let scores = Scores::compute(&sentences);

        let isf_cat = (3_f64 / 3.).ln() + 1.;
        let isf_once = (3_f64 / 2.).ln() + 1.;
        let tf_once = 1. / 3.;
        assert_approx_eq!(
            f64,
            scores.as_slice(),
            [
                (2. * isf_cat + tf_once * isf_once) / 3.,
                isf_cat,
                tf_once * isf_once,
            ],
            epsilon = 1e-12,
        );
    }

    #[test]
    fn test_scores_single_sentence_without_content() {
        let sentences = [sentence(&[
            Token::stopword("it"),
            Token::stopword("is"),
            Token::punctuation("."),
        ])];
        assert_eq!(Scores::compute(&sentences).as_slice(), [0.]);
    }

    #[test]
    fn test_scores_no_sentences() {
        assert!(Scores::compute(&[]).is_empty());
    }

    #[test]
    fn test_scores_are_non_negative() {
        let sentences = [
            words(&["alpha", "beta"]),
            words(&["alpha", "beta", "gamma"]),
            words(&["alpha"]),
            words(&["beta", "alpha"]),
        ];
        assert!(Scores::compute(&sentences).iter().all(|score| *score >= 0.));
    }
}
