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

use itertools::Itertools;

/// Normalizes the whitespace of a raw text.
///
/// Every run of whitespace, including line breaks, collapses into a single space and the text is
/// trimmed. The result is empty iff the text is empty or consists of whitespace only.
pub fn preprocess(text: &str) -> String {
    text.split_whitespace().join(" ")
}
