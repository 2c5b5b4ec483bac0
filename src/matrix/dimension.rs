// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dispatch from a generic square dimension `N` to the closed-form kernels for that size.
//!
//! Determinants and minors have a different closed form for every supported size, and the
//! cofactor sub-matrix of an `N`x`N` matrix has `N - 1` rows, which cannot be spelled as a const
//! expression on stable Rust. [`SupportedDimension`] carries both: the minor type as a generic
//! associated type, and the kernels as associated functions.

use crate::{
    matrix::{Matrix, determinant},
    utils::num::{Scalar, Zero},
};

/// Type-level marker for a square matrix dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimension<const N: usize>;

mod sealed {
    pub trait Sealed {}
}

/// Implemented for [`Dimension<2>`], [`Dimension<3>`] and [`Dimension<4>`].
///
/// This trait is sealed: the closed-form kernels only exist for those sizes.
pub trait SupportedDimension<const N: usize>: sealed::Sealed {
    /// The `(N - 1)`x`(N - 1)` matrix used to hold a cofactor sub-matrix.
    type Minor<T>;

    /// Returns a minor scratch matrix with every element set to zero.
    fn zero_minor<T: Zero + Copy>() -> Self::Minor<T>;

    /// Computes the determinant in closed form.
    fn determinant<T: Scalar, Src, Dst>(matrix: &Matrix<T, N, N, Src, Dst>) -> T;

    /// Computes the unsigned minor at `(row, col)`: the determinant of `matrix` with that row and
    /// column removed.
    ///
    /// `scratch` receives the sub-matrix if the size needs one.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not smaller than `N`.
    fn minor<T: Scalar, Src, Dst>(
        matrix: &Matrix<T, N, N, Src, Dst>,
        row: usize,
        col: usize,
        scratch: &mut Self::Minor<T>,
    ) -> T;
}

impl sealed::Sealed for Dimension<2> {}
impl sealed::Sealed for Dimension<3> {}
impl sealed::Sealed for Dimension<4> {}

impl SupportedDimension<2> for Dimension<2> {
    type Minor<T> = Matrix<T, 1, 1>;

    #[inline]
    fn zero_minor<T: Zero + Copy>() -> Self::Minor<T> {
        Zero::ZERO
    }

    #[inline]
    fn determinant<T: Scalar, Src, Dst>(matrix: &Matrix<T, 2, 2, Src, Dst>) -> T {
        determinant::det2(matrix)
    }

    #[inline]
    fn minor<T: Scalar, Src, Dst>(
        matrix: &Matrix<T, 2, 2, Src, Dst>,
        row: usize,
        col: usize,
        _scratch: &mut Self::Minor<T>,
    ) -> T {
        assert!(row < 2 && col < 2);
        matrix.at(1 - row, 1 - col)
    }
}

impl SupportedDimension<3> for Dimension<3> {
    type Minor<T> = Matrix<T, 2, 2>;

    #[inline]
    fn zero_minor<T: Zero + Copy>() -> Self::Minor<T> {
        Zero::ZERO
    }

    #[inline]
    fn determinant<T: Scalar, Src, Dst>(matrix: &Matrix<T, 3, 3, Src, Dst>) -> T {
        determinant::det3(matrix)
    }

    #[inline]
    fn minor<T: Scalar, Src, Dst>(
        matrix: &Matrix<T, 3, 3, Src, Dst>,
        row: usize,
        col: usize,
        _scratch: &mut Self::Minor<T>,
    ) -> T {
        // The two remaining rows and columns, in ascending order.
        let (r0, r1) = remaining_of_three(row);
        let (c0, c1) = remaining_of_three(col);
        matrix.at(r0, c0) * matrix.at(r1, c1) - matrix.at(r0, c1) * matrix.at(r1, c0)
    }
}

impl SupportedDimension<4> for Dimension<4> {
    type Minor<T> = Matrix<T, 3, 3>;

    #[inline]
    fn zero_minor<T: Zero + Copy>() -> Self::Minor<T> {
        Zero::ZERO
    }

    #[inline]
    fn determinant<T: Scalar, Src, Dst>(matrix: &Matrix<T, 4, 4, Src, Dst>) -> T {
        determinant::det4(matrix)
    }

    #[inline]
    fn minor<T: Scalar, Src, Dst>(
        matrix: &Matrix<T, 4, 4, Src, Dst>,
        row: usize,
        col: usize,
        scratch: &mut Self::Minor<T>,
    ) -> T {
        determinant::submatrix_into(matrix, row, col, scratch);
        determinant::det3(scratch)
    }
}

#[inline(always)]
fn remaining_of_three(index: usize) -> (usize, usize) {
    match index {
        0 => (1, 2),
        1 => (0, 2),
        2 => (0, 1),
        _ => panic!("index {index} is out of range 0..3"),
    }
}
