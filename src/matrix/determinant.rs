// SPDX-License-Identifier: MIT OR Apache-2.0

//! Closed-form determinants, minors and cofactors.

use crate::{
    error::{Axis, IndexOutOfRange, check_index},
    matrix::{
        Matrix,
        dimension::{Dimension, SupportedDimension},
    },
    utils::num::{Scalar, Signed},
};

#[inline(always)]
pub(crate) fn det2<T: Scalar, Src, Dst>(m: &Matrix<T, 2, 2, Src, Dst>) -> T {
    m.at(0, 0) * m.at(1, 1) - m.at(0, 1) * m.at(1, 0)
}

/// Cofactor expansion along the first row.
#[inline(always)]
pub(crate) fn det3<T: Scalar, Src, Dst>(m: &Matrix<T, 3, 3, Src, Dst>) -> T {
    m.at(0, 0) * (m.at(1, 1) * m.at(2, 2) - m.at(1, 2) * m.at(2, 1))
        - m.at(0, 1) * (m.at(1, 0) * m.at(2, 2) - m.at(1, 2) * m.at(2, 0))
        + m.at(0, 2) * (m.at(1, 0) * m.at(2, 1) - m.at(1, 1) * m.at(2, 0))
}

/// The 24-term expansion, written as products of complementary 2x2 minors of the upper two and
/// lower two rows.
#[inline(always)]
pub(crate) fn det4<T: Scalar, Src, Dst>(m: &Matrix<T, 4, 4, Src, Dst>) -> T {
    let s0 = m.at(0, 0) * m.at(1, 1) - m.at(0, 1) * m.at(1, 0);
    let s1 = m.at(0, 0) * m.at(1, 2) - m.at(0, 2) * m.at(1, 0);
    let s2 = m.at(0, 0) * m.at(1, 3) - m.at(0, 3) * m.at(1, 0);
    let s3 = m.at(0, 1) * m.at(1, 2) - m.at(0, 2) * m.at(1, 1);
    let s4 = m.at(0, 1) * m.at(1, 3) - m.at(0, 3) * m.at(1, 1);
    let s5 = m.at(0, 2) * m.at(1, 3) - m.at(0, 3) * m.at(1, 2);

    let c0 = m.at(2, 0) * m.at(3, 1) - m.at(2, 1) * m.at(3, 0);
    let c1 = m.at(2, 0) * m.at(3, 2) - m.at(2, 2) * m.at(3, 0);
    let c2 = m.at(2, 0) * m.at(3, 3) - m.at(2, 3) * m.at(3, 0);
    let c3 = m.at(2, 1) * m.at(3, 2) - m.at(2, 2) * m.at(3, 1);
    let c4 = m.at(2, 1) * m.at(3, 3) - m.at(2, 3) * m.at(3, 1);
    let c5 = m.at(2, 2) * m.at(3, 3) - m.at(2, 3) * m.at(3, 2);

    s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
}

/// Copies `m` with `skip_row` and `skip_col` removed into `out`.
///
/// `M` must be `N - 1`, and both indices must be smaller than `N`.
#[inline]
pub(crate) fn submatrix_into<T: Copy, const N: usize, const M: usize, Src, Dst>(
    m: &Matrix<T, N, N, Src, Dst>,
    skip_row: usize,
    skip_col: usize,
    out: &mut Matrix<T, M, M>,
) {
    debug_assert_eq!(M + 1, N);
    let columns = out.columns_mut();
    for (col, out_col) in columns.iter_mut().enumerate() {
        let src_col = if col < skip_col { col } else { col + 1 };
        for (row, slot) in out_col.iter_mut().enumerate() {
            let src_row = if row < skip_row { row } else { row + 1 };
            *slot = m.at(src_row, src_col);
        }
    }
}

#[inline(always)]
fn checkerboard<T: Signed>(row: usize, col: usize, minor: T) -> T {
    if (row + col) % 2 == 0 { minor } else { -minor }
}

impl<T: Scalar, const N: usize, Src, Dst> Matrix<T, N, N, Src, Dst>
where
    Dimension<N>: SupportedDimension<N>,
{
    /// Computes the determinant of this matrix.
    ///
    /// Every supported size uses a closed-form expansion; no sub-matrices are built.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix3;
    /// let matrix: Matrix3<f64> = Matrix3::from_rows([
    ///     [2.0, 0.0, 1.0],
    ///     [1.0, 3.0, 2.0],
    ///     [1.0, 1.0, 2.0],
    /// ]);
    ///
    /// assert_eq!(matrix.determinant(), 6.0);
    /// ```
    #[must_use]
    #[inline]
    pub fn determinant(&self) -> T {
        <Dimension<N> as SupportedDimension<N>>::determinant(self)
    }

    /// Returns the determinant of the sub-matrix left after removing `row` and `col`.
    #[inline]
    pub fn minor(&self, row: usize, col: usize) -> Result<T, IndexOutOfRange> {
        let row = check_index(Axis::Row, row, N)?;
        let col = check_index(Axis::Column, col, N)?;
        let mut scratch = <Dimension<N> as SupportedDimension<N>>::zero_minor();
        Ok(<Dimension<N> as SupportedDimension<N>>::minor(
            self,
            row,
            col,
            &mut scratch,
        ))
    }
}

impl<T: Signed, const N: usize, Src, Dst> Matrix<T, N, N, Src, Dst>
where
    Dimension<N>: SupportedDimension<N>,
{
    /// Returns the minor at `(row, col)` multiplied by `(-1)^(row + col)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix2;
    /// let matrix: Matrix2<i32> = Matrix2::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    ///
    /// assert_eq!(matrix.cofactor(0, 0), Ok(4));
    /// assert_eq!(matrix.cofactor(0, 1), Ok(-3));
    /// assert!(matrix.cofactor(2, 0).is_err());
    /// ```
    #[inline]
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T, IndexOutOfRange> {
        Ok(checkerboard(row, col, self.minor(row, col)?))
    }

    /// Returns the matrix of signed cofactors.
    #[must_use]
    #[inline]
    pub fn cofactor_matrix(&self) -> Self {
        let mut scratch = <Dimension<N> as SupportedDimension<N>>::zero_minor();
        let mut out = *self;
        self.cofactors_into(&mut out, &mut scratch);
        out
    }

    /// Returns the adjugate: the transposed cofactor matrix.
    ///
    /// The adjugate maps back from `Dst` to `Src`, like the inverse it is proportional to.
    #[must_use]
    #[inline]
    pub fn adjugate(&self) -> Matrix<T, N, N, Dst, Src> {
        let mut cofactors = self.cofactor_matrix();
        cofactors.transpose_in_place();
        cofactors.cast_space()
    }

    /// Writes every signed cofactor of `self` into `out`. `scratch` holds the cofactor sub-matrix
    /// for sizes that need one.
    #[inline]
    pub(crate) fn cofactors_into<S, D>(
        &self,
        out: &mut Matrix<T, N, N, S, D>,
        scratch: &mut <Dimension<N> as SupportedDimension<N>>::Minor<T>,
    ) {
        for col in 0..N {
            for row in 0..N {
                let minor = <Dimension<N> as SupportedDimension<N>>::minor(self, row, col, scratch);
                out.columns_mut()[col][row] = checkerboard(row, col, minor);
            }
        }
    }
}
