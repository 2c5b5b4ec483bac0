// SPDX-License-Identifier: MIT OR Apache-2.0

//! Matrix inversion by the adjugate method.
//!
//! The inverse of `M` is `adj(M) / det(M)`, where the adjugate `adj(M)` is the transposed matrix of
//! signed cofactors. A matrix whose determinant is exactly zero has no inverse, and every
//! inversion entry point reports that as `None` instead of producing a degenerate matrix.
//!
//! The singularity test is an exact comparison against zero. Nearly singular matrices still
//! invert, to a result with very large elements; callers that need a tolerance can compare
//! [`Matrix::determinant()`] against one before inverting.
//!
//! Inversion only needs the four arithmetic operations, so it is available without `std` or
//! `libm`. It is meant for floating-point scalars: with integers every division truncates.

use crate::{
    matrix::{
        Matrix,
        context::Context,
        dimension::{Dimension, SupportedDimension},
    },
    utils::num::{Signed, Zero},
};

/// Writes `adj(m) / det(m)` into `out`, using `cofactors` and `minor` as scratch.
///
/// Returns `false` and leaves `out` untouched if `m` is singular.
fn invert_into<T: Signed, const N: usize, Src, Dst, S, D>(
    m: &Matrix<T, N, N, Src, Dst>,
    out: &mut Matrix<T, N, N, Dst, Src>,
    cofactors: &mut Matrix<T, N, N, S, D>,
    minor: &mut <Dimension<N> as SupportedDimension<N>>::Minor<T>,
) -> bool
where
    Dimension<N>: SupportedDimension<N>,
{
    let det = m.determinant();
    if det == T::ZERO {
        trace!(dimension = N, "matrix has no inverse");
        return false;
    }

    m.cofactors_into(cofactors, minor);
    // `1 / det` overflows for a subnormal determinant, so each cofactor is divided instead.
    *cofactors /= det;

    // Transposing the cofactor matrix is what turns it into the adjugate. Without this step the
    // result is only correct for symmetric matrices.
    cofactors.transpose_in_place();

    out.copy_from(&(*cofactors).cast_space());
    true
}

impl<T: Signed, const N: usize, Src, Dst> Matrix<T, N, N, Src, Dst>
where
    Dimension<N>: SupportedDimension<N>,
{
    /// Returns `true` if the determinant of this matrix is not exactly zero.
    #[must_use]
    #[inline]
    pub fn has_inverse(&self) -> bool {
        self.determinant() != T::ZERO
    }

    /// Computes the inverse of this matrix, or returns `None` if it is singular.
    ///
    /// The inverse of a map from `Src` to `Dst` is a map from `Dst` back to `Src`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix3;
    /// let matrix = Matrix3::<f64>::from_diagonal([2.0, 2.0, 2.0]);
    /// let inverse = matrix.inverse().unwrap();
    ///
    /// assert_eq!(inverse, Matrix3::from_diagonal([0.5, 0.5, 0.5]));
    /// assert_eq!(inverse.inverse(), Some(matrix));
    ///
    /// assert_eq!(Matrix3::<f64>::zero().inverse(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn inverse(&self) -> Option<Matrix<T, N, N, Dst, Src>> {
        let mut cofactors: Matrix<T, N, N> = Matrix::ZERO;
        let mut minor = <Dimension<N> as SupportedDimension<N>>::zero_minor();
        let mut out = Matrix::ZERO;
        invert_into(self, &mut out, &mut cofactors, &mut minor).then_some(out)
    }

    /// Computes the inverse of this matrix using the scratch storage in `ctx`.
    #[must_use]
    #[inline]
    pub fn inverse_with(&self, ctx: &mut Context<T, N>) -> Option<Matrix<T, N, N, Dst, Src>> {
        let mut out = Matrix::ZERO;
        invert_into(self, &mut out, &mut ctx.matrix, &mut ctx.minor).then_some(out)
    }

    /// Writes the inverse of this matrix into `out`.
    ///
    /// Returns `None` and leaves `out` unchanged if this matrix is singular.
    #[inline]
    pub fn inverse_into<'a>(
        &self,
        out: &'a mut Matrix<T, N, N, Dst, Src>,
        ctx: &mut Context<T, N>,
    ) -> Option<&'a mut Matrix<T, N, N, Dst, Src>> {
        invert_into(self, out, &mut ctx.matrix, &mut ctx.minor).then_some(out)
    }
}

impl<T: Signed, const N: usize, Space> Matrix<T, N, N, Space, Space>
where
    Dimension<N>: SupportedDimension<N>,
{
    /// Replaces this matrix with its inverse.
    ///
    /// Returns `None` and leaves the matrix unchanged if it is singular.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix2;
    /// let mut matrix: Matrix2<f32> = Matrix2::from_rows([
    ///     [1.0, 2.0],
    ///     [2.0, 4.0],
    /// ]);
    /// let before = matrix;
    ///
    /// assert!(matrix.invert_in_place().is_none());
    /// assert_eq!(matrix, before);
    /// ```
    #[inline]
    pub fn invert_in_place(&mut self) -> Option<&mut Self> {
        let inverse = self.inverse()?;
        *self = inverse;
        Some(self)
    }

    /// Replaces this matrix with its inverse, using the scratch storage in `ctx`.
    ///
    /// Returns `None` and leaves the matrix unchanged if it is singular.
    #[inline]
    pub fn invert_in_place_with(&mut self, ctx: &mut Context<T, N>) -> Option<&mut Self> {
        let src = *self;
        src.inverse_into(self, ctx)
    }
}
