// SPDX-License-Identifier: MIT OR Apache-2.0

//! Elementwise arithmetic, matrix products and matrix-vector products.
//!
//! Products come in three shapes:
//!
//! * return-new: `a * b`, `m * v`;
//! * write-into: [`Matrix::multiply_into()`], [`Matrix::multiply_vector_into()`], where `out` is a
//!   separate `&mut` borrow and so can never alias an operand;
//! * in-place: [`Matrix::multiply_in_place()`], [`Matrix::transform_vector_in_place()`] and their
//!   `*_with` forms, which copy the overwritten operand into a temporary first. The plain forms keep
//!   the temporary on the stack, the `*_with` forms keep it in a [`Context`].

use crate::{
    matrix::{
        Matrix,
        context::Context,
        dimension::{Dimension, SupportedDimension},
    },
    utils::{
        dot,
        num::{Scalar, Signed, Zero},
    },
    vector::Vector,
};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// `out = lhs * rhs` on raw column arrays.
#[inline(always)]
fn multiply_columns<T: Scalar, const R: usize, const K: usize, const C: usize>(
    lhs: &[[T; R]; K],
    rhs: &[[T; K]; C],
    out: &mut [[T; R]; C],
) {
    for (out_col, rhs_col) in out.iter_mut().zip(rhs) {
        for (row, slot) in out_col.iter_mut().enumerate() {
            let mut acc = T::ZERO;
            for (lhs_col, &factor) in lhs.iter().zip(rhs_col) {
                acc += lhs_col[row] * factor;
            }
            *slot = acc;
        }
    }
}

impl<T: Scalar, const R: usize, const K: usize, const C: usize, A, B, Cs>
    Mul<Matrix<T, K, C, A, B>> for Matrix<T, R, K, B, Cs>
{
    type Output = Matrix<T, R, C, A, Cs>;

    /// Composes two transforms: the result applies `rhs` first, then `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix3;
    /// let matrix: Matrix3<i32> = Matrix3::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    ///
    /// assert_eq!(matrix * matrix, Matrix3::from_rows([
    ///     [30, 36, 42],
    ///     [66, 81, 96],
    ///     [102, 126, 150],
    /// ]));
    /// ```
    #[inline]
    fn mul(self, rhs: Matrix<T, K, C, A, B>) -> Self::Output {
        let mut out = Matrix::ZERO;
        self.multiply_into(&rhs, &mut out);
        out
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize, Src, Dst> Matrix<T, ROWS, COLS, Src, Dst> {
    /// Writes `self * rhs` into `out`.
    #[inline]
    pub fn multiply_into<const C: usize, A>(
        &self,
        rhs: &Matrix<T, COLS, C, A, Src>,
        out: &mut Matrix<T, ROWS, C, A, Dst>,
    ) {
        multiply_columns(&self.data, &rhs.data, &mut out.data);
    }

    /// Returns `self * v`: each component of the result is the dot product of a row with `v`.
    #[must_use]
    #[inline]
    pub fn multiply_vector(&self, v: &Vector<T, COLS, Src>) -> Vector<T, ROWS, Dst> {
        let mut out = Vector::ZERO;
        self.multiply_vector_into(v, &mut out);
        out
    }

    /// Writes `self * v` into `out`.
    #[inline]
    pub fn multiply_vector_into(&self, v: &Vector<T, COLS, Src>, out: &mut Vector<T, ROWS, Dst>) {
        let mut row = [T::ZERO; COLS];
        for (index, slot) in out.iter_mut().enumerate() {
            // SAFETY: `index < ROWS`, since `out` has `ROWS` components.
            unsafe { self.read_row_unchecked(index, &mut row) };
            *slot = dot(&row, v.as_array());
        }
    }

    /// Multiplies every element by `factor`, returning the matrix to allow chaining.
    #[inline]
    pub fn scale(&mut self, factor: T) -> &mut Self {
        *self *= factor;
        self
    }
}

impl<T: Scalar, const N: usize, Src, Dst> Matrix<T, N, N, Src, Dst> {
    /// Replaces `self` with `self * rhs`.
    ///
    /// The left operand is copied to the stack before the product is written back.
    #[inline]
    pub fn multiply_in_place(&mut self, rhs: &Matrix<T, N, N, Src, Src>) -> &mut Self {
        let lhs = self.data;
        multiply_columns(&lhs, &rhs.data, &mut self.data);
        self
    }
}

impl<T: Scalar, const N: usize, Src, Dst> Matrix<T, N, N, Src, Dst>
where
    Dimension<N>: SupportedDimension<N>,
{
    /// Replaces `self` with `self * rhs`, using the scratch matrix in `ctx` to hold the left operand.
    #[inline]
    pub fn multiply_in_place_with(
        &mut self,
        rhs: &Matrix<T, N, N, Src, Src>,
        ctx: &mut Context<T, N>,
    ) -> &mut Self {
        ctx.matrix.data = self.data;
        multiply_columns(&ctx.matrix.data, &rhs.data, &mut self.data);
        self
    }
}

impl<T: Scalar, const N: usize, Space> Matrix<T, N, N, Space, Space> {
    /// Replaces `v` with `self * v`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::{matrix::Matrix2, vector::Vector2};
    /// let swap: Matrix2<i32> = Matrix2::from_rows([
    ///     [0, 1],
    ///     [1, 0],
    /// ]);
    /// let mut v = Vector2::<i32>::new([3, 4]);
    ///
    /// swap.transform_vector_in_place(&mut v);
    /// assert_eq!(v, Vector2::new([4, 3]));
    /// ```
    #[inline]
    pub fn transform_vector_in_place(&self, v: &mut Vector<T, N, Space>) {
        let src = *v;
        self.multiply_vector_into(&src, v);
    }
}

impl<T: Scalar, const N: usize, Space> Matrix<T, N, N, Space, Space>
where
    Dimension<N>: SupportedDimension<N>,
{
    /// Replaces `v` with `self * v`, reading `v` and the rows of `self` through the scratch tuples
    /// in `ctx`.
    #[inline]
    pub fn transform_vector_in_place_with(
        &self,
        v: &mut Vector<T, N, Space>,
        ctx: &mut Context<T, N>,
    ) {
        let input = &mut ctx.tuple_a;
        let row = &mut ctx.tuple_b;
        *input.array_mut() = v.to_array();

        for (index, slot) in v.iter_mut().enumerate() {
            // SAFETY: `index < N`, since `v` has `N` components.
            unsafe { self.read_row_unchecked(index, row.array_mut()) };
            *slot = row.dot(input);
        }
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize, Src, Dst> Mul<Vector<T, COLS, Src>>
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    type Output = Vector<T, ROWS, Dst>;

    #[inline]
    fn mul(self, rhs: Vector<T, COLS, Src>) -> Self::Output {
        self.multiply_vector(&rhs)
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize, Src, Dst> Mul<T>
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize, Src, Dst> MulAssign<T>
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for elem in self.data.as_flattened_mut() {
            *elem *= rhs;
        }
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize, Src, Dst> Div<T>
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize, Src, Dst> DivAssign<T>
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        for elem in self.data.as_flattened_mut() {
            *elem /= rhs;
        }
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize, Src, Dst> Add
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize, Src, Dst> AddAssign
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        let rhs = rhs.data.as_flattened();
        for (elem, &other) in self.data.as_flattened_mut().iter_mut().zip(rhs) {
            *elem += other;
        }
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize, Src, Dst> Sub
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const ROWS: usize, const COLS: usize, Src, Dst> SubAssign
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        let rhs = rhs.data.as_flattened();
        for (elem, &other) in self.data.as_flattened_mut().iter_mut().zip(rhs) {
            *elem -= other;
        }
    }
}

impl<T: Signed, const ROWS: usize, const COLS: usize, Src, Dst> Neg
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}
