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

use std::{error::Error, iter::successors};

/// Error which panics when created.
///
/// Useful for using `?` in tests which will panic on error anyway, the panic message contains
/// the whole chain of error sources.
#[derive(Debug)]
pub enum Panic {}

impl<E> From<E> for Panic
where
    E: Error,
{
    fn from(error: E) -> Self {
        let message = successors(Some(&error as &dyn Error), |&error| error.source())
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\nCaused By: ");
        panic!("{message}");
    }
}
