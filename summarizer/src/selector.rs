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

//! Selection of the best scoring sentences.

use itertools::Itertools;

/// Computes the number of sentences to keep out of `total` sentences.
///
/// The count is `max(1, floor(total * ratio * threshold_factor))` and may exceed `total`, since
/// the product of ratio and threshold factor is not capped.
pub fn target_count(total: usize, ratio: f64, threshold_factor: f64) -> usize {
    let adjusted_ratio = ratio * threshold_factor;
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    let count = (total as f64 * adjusted_ratio).floor() as usize;

    count.max(1)
}

/// Selects the indices of the best scoring sentences in their original order.
///
/// Sentences are ranked by descending score, ties are ranked by ascending index. If the target
/// count exceeds the number of sentences, then all sentences are selected.
pub fn select(scores: &[f64], ratio: f64, threshold_factor: f64) -> Vec<usize> {
    if scores.is_empty() {
        return Vec::new();
    }

    let count = target_count(scores.len(), ratio, threshold_factor);
    (0..scores.len())
        .sorted_by(|&i, &j| scores[j].total_cmp(&scores[i]))
        .take(count)
        .sorted()
        .collect()
}
