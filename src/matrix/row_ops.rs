// SPDX-License-Identifier: MIT OR Apache-2.0

//! The three elementary row operations of Gaussian elimination.
//!
//! Every operation checks all of its row indices before touching the matrix, so a call which
//! returns [`IndexOutOfRange`] leaves the matrix exactly as it was. The affected rows are read into
//! scratch tuples, combined, and written back.

use crate::{
    error::{Axis, IndexOutOfRange, check_index},
    matrix::{
        Matrix,
        context::Context,
        dimension::{Dimension, SupportedDimension},
    },
    utils::num::Scalar,
};

impl<T: Scalar, const ROWS: usize, const COLS: usize, Src, Dst> Matrix<T, ROWS, COLS, Src, Dst> {
    /// Swaps rows `a` and `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix;
    /// let mut matrix: Matrix<i32, 3, 2> = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    ///     [5, 6],
    /// ]);
    ///
    /// matrix.exchange_rows(0, 2)?;
    /// assert_eq!(matrix, Matrix::from_rows([
    ///     [5, 6],
    ///     [3, 4],
    ///     [1, 2],
    /// ]));
    ///
    /// assert!(matrix.exchange_rows(0, 3).is_err());
    /// # Ok::<(), linmat::IndexOutOfRange>(())
    /// ```
    #[inline]
    pub fn exchange_rows(&mut self, a: usize, b: usize) -> Result<&mut Self, IndexOutOfRange> {
        let mut row_a = [T::ZERO; COLS];
        let mut row_b = [T::ZERO; COLS];
        self.exchange_rows_through(a, b, &mut row_a, &mut row_b)
    }

    /// Multiplies every element of row `row` by `factor`.
    #[inline]
    pub fn scale_row(&mut self, row: usize, factor: T) -> Result<&mut Self, IndexOutOfRange> {
        let mut scratch = [T::ZERO; COLS];
        self.scale_row_through(row, factor, &mut scratch)
    }

    /// Sets row `row_out` to `row_a + row_b * factor`.
    ///
    /// Any of the three rows may be the same row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix2;
    /// let mut matrix: Matrix2<f64> = Matrix2::from_rows([
    ///     [2.0, 1.0],
    ///     [4.0, 3.0],
    /// ]);
    ///
    /// // Eliminate the first column below the pivot.
    /// matrix.add_row_scaled(1, 0, 1, -2.0)?;
    ///
    /// assert_eq!(matrix, Matrix2::from_rows([
    ///     [2.0, 1.0],
    ///     [0.0, 1.0],
    /// ]));
    /// # Ok::<(), linmat::IndexOutOfRange>(())
    /// ```
    #[inline]
    pub fn add_row_scaled(
        &mut self,
        row_a: usize,
        row_b: usize,
        row_out: usize,
        factor: T,
    ) -> Result<&mut Self, IndexOutOfRange> {
        let mut scratch_a = [T::ZERO; COLS];
        let mut scratch_b = [T::ZERO; COLS];
        self.add_row_scaled_through(row_a, row_b, row_out, factor, &mut scratch_a, &mut scratch_b)
    }

    /// Returns a copy of this matrix with rows `a` and `b` swapped.
    #[inline]
    pub fn exchanged_rows(mut self, a: usize, b: usize) -> Result<Self, IndexOutOfRange> {
        self.exchange_rows(a, b)?;
        Ok(self)
    }

    /// Returns a copy of this matrix with row `row` multiplied by `factor`.
    #[inline]
    pub fn scaled_row(mut self, row: usize, factor: T) -> Result<Self, IndexOutOfRange> {
        self.scale_row(row, factor)?;
        Ok(self)
    }

    /// Returns a copy of this matrix with row `row_out` set to `row_a + row_b * factor`.
    #[inline]
    pub fn added_row_scaled(
        mut self,
        row_a: usize,
        row_b: usize,
        row_out: usize,
        factor: T,
    ) -> Result<Self, IndexOutOfRange> {
        self.add_row_scaled(row_a, row_b, row_out, factor)?;
        Ok(self)
    }

    fn exchange_rows_through(
        &mut self,
        a: usize,
        b: usize,
        row_a: &mut [T; COLS],
        row_b: &mut [T; COLS],
    ) -> Result<&mut Self, IndexOutOfRange> {
        let a = check_index(Axis::Row, a, ROWS)?;
        let b = check_index(Axis::Row, b, ROWS)?;

        // SAFETY: both indices were checked above.
        unsafe {
            self.read_row_unchecked(a, row_a);
            self.read_row_unchecked(b, row_b);
            self.write_row_unchecked(a, row_b);
            self.write_row_unchecked(b, row_a);
        }

        Ok(self)
    }

    fn scale_row_through(
        &mut self,
        row: usize,
        factor: T,
        scratch: &mut [T; COLS],
    ) -> Result<&mut Self, IndexOutOfRange> {
        let row = check_index(Axis::Row, row, ROWS)?;

        // SAFETY: `row` was checked above.
        unsafe { self.read_row_unchecked(row, scratch) };
        for elem in scratch.iter_mut() {
            *elem *= factor;
        }
        // SAFETY: as above.
        unsafe { self.write_row_unchecked(row, scratch) };

        Ok(self)
    }

    fn add_row_scaled_through(
        &mut self,
        row_a: usize,
        row_b: usize,
        row_out: usize,
        factor: T,
        scratch_a: &mut [T; COLS],
        scratch_b: &mut [T; COLS],
    ) -> Result<&mut Self, IndexOutOfRange> {
        let row_a = check_index(Axis::Row, row_a, ROWS)?;
        let row_b = check_index(Axis::Row, row_b, ROWS)?;
        let row_out = check_index(Axis::Row, row_out, ROWS)?;

        // SAFETY: all three indices were checked above.
        unsafe {
            self.read_row_unchecked(row_a, scratch_a);
            self.read_row_unchecked(row_b, scratch_b);
        }
        for (a, &b) in scratch_a.iter_mut().zip(scratch_b.iter()) {
            *a += b * factor;
        }
        // SAFETY: as above.
        unsafe { self.write_row_unchecked(row_out, scratch_a) };

        Ok(self)
    }
}

impl<T: Scalar, const N: usize, Src, Dst> Matrix<T, N, N, Src, Dst>
where
    Dimension<N>: SupportedDimension<N>,
{
    /// Swaps rows `a` and `b`, using the scratch tuples in `ctx`.
    #[inline]
    pub fn exchange_rows_with(
        &mut self,
        a: usize,
        b: usize,
        ctx: &mut Context<T, N>,
    ) -> Result<&mut Self, IndexOutOfRange> {
        self.exchange_rows_through(a, b, ctx.tuple_a.array_mut(), ctx.tuple_b.array_mut())
    }

    /// Multiplies every element of row `row` by `factor`, using the scratch tuples in `ctx`.
    #[inline]
    pub fn scale_row_with(
        &mut self,
        row: usize,
        factor: T,
        ctx: &mut Context<T, N>,
    ) -> Result<&mut Self, IndexOutOfRange> {
        self.scale_row_through(row, factor, ctx.tuple_a.array_mut())
    }

    /// Sets row `row_out` to `row_a + row_b * factor`, using the scratch tuples in `ctx`.
    #[inline]
    pub fn add_row_scaled_with(
        &mut self,
        row_a: usize,
        row_b: usize,
        row_out: usize,
        factor: T,
        ctx: &mut Context<T, N>,
    ) -> Result<&mut Self, IndexOutOfRange> {
        self.add_row_scaled_through(
            row_a,
            row_b,
            row_out,
            factor,
            ctx.tuple_a.array_mut(),
            ctx.tuple_b.array_mut(),
        )
    }
}
