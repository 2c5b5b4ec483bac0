// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::utils::num::{ClosedAdd, ClosedMul, Zero};
use core::ops::{Add, Mul};

pub mod num;

/// Analogous to the [`Iterator::sum()`] method, but which uses [`Zero`] and [`ClosedAdd`] instead of
/// the [`Sum`] trait.
///
/// [`Sum`]: core::iter::Sum
#[must_use]
#[inline(always)]
pub fn sum<I>(iter: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Zero + ClosedAdd,
{
    iter.into_iter().fold(Zero::ZERO, Add::add)
}

/// Sums the pairwise products of two equally sized arrays.
#[must_use]
#[inline(always)]
pub fn dot<T, const N: usize>(lhs: &[T; N], rhs: &[T; N]) -> T
where
    T: Copy + Zero + ClosedAdd + ClosedMul,
{
    sum(lhs.iter().zip(rhs).map(|(&x, &y)| Mul::mul(x, y)))
}
