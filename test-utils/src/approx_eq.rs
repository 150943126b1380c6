// Copyright 2021 Xayn AG
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

/// Compares two "things" with approximate equality.
///
/// # Examples
///
/// This can be used to compare two floating point numbers:
///
/// ```
/// use xayn_test_utils::assert_approx_eq;
/// assert_approx_eq!(f64, 0.1 + 0.2, 0.3);
/// ```
///
/// Or (nested) containers of such:
///
/// ```
/// use xayn_test_utils::assert_approx_eq;
/// assert_approx_eq!(f64, &[[1., 2.], [3., 4.]], vec![[1., 2.], [3., 4.]]);
/// ```
///
/// The number of `ulps` defaults to `2` and `epsilon` to `0` if not specified.
///
/// # NaN Handling
///
/// Two NaN values are treated as "approximately" equal, since the assertion checks if something
/// has an expected outcome and not if two values are semantically the same.
#[macro_export]
macro_rules! assert_approx_eq {
    ($t:ty, $left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($t, $left, $right, epsilon = 0., ulps = 2)
    };
    ($t:ty, $left:expr, $right:expr, ulps = $ulps:expr $(,)?) => {
        $crate::assert_approx_eq!($t, $left, $right, epsilon = 0., ulps = $ulps)
    };
    ($t:ty, $left:expr, $right:expr, epsilon = $epsilon:expr $(,)?) => {
        $crate::assert_approx_eq!($t, $left, $right, epsilon = $epsilon, ulps = 2)
    };
    ($t:ty, $left:expr, $right:expr, epsilon = $epsilon:expr, ulps = $ulps:expr $(,)?) => {{
        let epsilon = $epsilon;
        let ulps = $ulps;
        let left = $crate::Leaves::<$t>::leaves(&$left);
        let right = $crate::Leaves::<$t>::leaves(&$right);
        std::assert_eq!(
            left.len(),
            right.len(),
            "Number of values mismatch: {:?} != {:?}",
            left,
            right,
        );
        for ((lidx, lv), (ridx, rv)) in left.into_iter().zip(right) {
            std::assert_eq!(lidx, ridx, "Dimensionality mismatch: {:?} != {:?}", lidx, ridx);
            if !(lv.is_nan() && rv.is_nan()) {
                std::assert!(
                    $crate::approx_eq!($t, lv, rv, ulps = ulps, epsilon = epsilon),
                    "Approximated equal assertion failed (ulps={:?}, epsilon={:?}) at index {:?}: {:?} != {:?}",
                    ulps, epsilon, lidx, lv, rv,
                );
            }
        }
    }};
}

/// Helper trait for the [`assert_approx_eq!`] macro, only use it for that.
///
/// Flattens a float or a (nested) container of floats into its leaf values, each paired with its
/// index path in logical order.
pub trait Leaves<T> {
    fn leaves(&self) -> Vec<(Vec<usize>, T)>;
}

macro_rules! impl_leaves {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Leaves<$t> for $t {
                fn leaves(&self) -> Vec<(Vec<usize>, $t)> {
                    vec![(Vec::new(), *self)]
                }
            }
        )+
    };
}

impl_leaves! { f32, f64 }

impl<T, L> Leaves<T> for &L
where
    L: Leaves<T> + ?Sized,
{
    fn leaves(&self) -> Vec<(Vec<usize>, T)> {
        (**self).leaves()
    }
}

impl<T, L> Leaves<T> for [L]
where
    L: Leaves<T>,
{
    fn leaves(&self) -> Vec<(Vec<usize>, T)> {
        self.iter()
            .enumerate()
            .flat_map(|(index, element)| {
                element.leaves().into_iter().map(move |(mut path, leaf)| {
                    path.insert(0, index);
                    (path, leaf)
                })
            })
            .collect()
    }
}

impl<T, L, const N: usize> Leaves<T> for [L; N]
where
    L: Leaves<T>,
{
    fn leaves(&self) -> Vec<(Vec<usize>, T)> {
        self.as_slice().leaves()
    }
}

impl<T, L> Leaves<T> for Vec<L>
where
    L: Leaves<T>,
{
    fn leaves(&self) -> Vec<(Vec<usize>, T)> {
        self.as_slice().leaves()
    }
}
