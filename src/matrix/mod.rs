// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dense fixed-size matrices.
//!
//! A [`Matrix`] owns exactly `ROWS * COLS` scalars stored column-major: the element at
//! `(row, col)` lives at linear index `col * ROWS + row` of [`Matrix::raw_buffer()`]. This is the
//! layout OpenGL, Vulkan and most physics engines expect, so the buffer can be uploaded without a
//! transpose.
//!
//! The `Src` and `Dst` parameters are zero-sized coordinate-space tags: a `Matrix<T, 4, 4, A, B>`
//! maps vectors in space `A` to vectors in space `B`, and only composes with matrices whose spaces
//! line up. Untagged matrices use `()` for both.

use crate::{
    error::{Axis, IndexOutOfRange, check_index},
    utils::num::{One, Scalar, Zero},
    vector::Vector,
};
use core::{
    array, fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Index, IndexMut},
    slice,
};

pub mod arith;
pub mod context;
pub mod determinant;
pub mod dimension;
pub mod inverse;
pub mod row_ops;
pub mod transform;

#[cfg(test)]
mod tests;

/// A column-major matrix of `ROWS` by `COLS` elements, mapping space `Src` to space `Dst`.
#[repr(C)]
pub struct Matrix<T = f32, const ROWS: usize = 4, const COLS: usize = 4, Src = (), Dst = Src> {
    data: [[T; ROWS]; COLS],
    space: PhantomData<fn(Src) -> Dst>,
}

/// A 2x2 matrix.
pub type Matrix2<T = f32, Src = (), Dst = Src> = Matrix<T, 2, 2, Src, Dst>;

/// A 3x3 matrix.
pub type Matrix3<T = f32, Src = (), Dst = Src> = Matrix<T, 3, 3, Src, Dst>;

/// A 4x4 matrix.
pub type Matrix4<T = f32, Src = (), Dst = Src> = Matrix<T, 4, 4, Src, Dst>;

impl<T: Clone, const ROWS: usize, const COLS: usize, Src, Dst> Clone
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.data.clone())
    }
}

impl<T: Copy, const ROWS: usize, const COLS: usize, Src, Dst> Copy
    for Matrix<T, ROWS, COLS, Src, Dst>
{
}

impl<T: PartialEq, const ROWS: usize, const COLS: usize, Src, Dst> PartialEq
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq, const ROWS: usize, const COLS: usize, Src, Dst> Eq for Matrix<T, ROWS, COLS, Src, Dst> {}

impl<T: Hash, const ROWS: usize, const COLS: usize, Src, Dst> Hash
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl<T: fmt::Debug, const ROWS: usize, const COLS: usize, Src, Dst> fmt::Debug
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmtr.write_str("Matrix ")?;
        let mut debug_list = fmtr.debug_list();
        for row in 0..ROWS {
            let row: [&T; COLS] = array::from_fn(|col| &self.data[col][row]);
            debug_list.entry(&row);
        }
        debug_list.finish()
    }
}

impl<T: Zero + One + Copy, const N: usize, Src, Dst> Default for Matrix<T, N, N, Src, Dst> {
    /// Returns the identity matrix.
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T, const ROWS: usize, const COLS: usize, Src, Dst> Matrix<T, ROWS, COLS, Src, Dst> {
    pub const NUM_ELEMENTS: usize = ROWS * COLS;

    /// Create a new `Matrix` from an array of columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix;
    /// let matrix: Matrix<i32, 2, 3> = Matrix::new([[1, 4], [2, 5], [3, 6]]);
    /// assert_eq!(matrix.get(1, 0), Ok(4));
    /// assert_eq!(matrix.get(0, 2), Ok(3));
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(columns: [[T; ROWS]; COLS]) -> Self {
        Self {
            data: columns,
            space: PhantomData,
        }
    }

    /// Create a new `Matrix` by calling `f(row, col)` for every element.
    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self::new(array::from_fn(|col| array::from_fn(|row| f(row, col))))
    }

    /// Reinterprets this matrix as a map from `NewSrc` to `NewDst`.
    #[must_use]
    #[inline]
    pub fn cast_space<NewSrc, NewDst>(self) -> Matrix<T, ROWS, COLS, NewSrc, NewDst> {
        Matrix::new(self.data)
    }

    #[must_use]
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, ROWS, COLS, Src, Dst> {
        Matrix::new(self.data.map(|col| col.map(&mut f)))
    }

    /// Returns a reference to the inner array of columns.
    #[must_use]
    #[inline]
    pub const fn as_columns(&self) -> &[[T; ROWS]; COLS] {
        &self.data
    }

    /// Returns a read-only view of the backing buffer in column-major order.
    ///
    /// The element at `(row, col)` is at index `col * ROWS + row`. The elements are stored in the
    /// platform's native byte order, so the slice (or the pointer from [`as_ptr()`]) can be handed
    /// directly to APIs which expect column-major matrices.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix;
    /// let matrix: Matrix<i32, 2, 2> = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    ///
    /// assert_eq!(matrix.raw_buffer(), &[1, 3, 2, 4]);
    /// ```
    ///
    /// [`as_ptr()`]: Matrix::as_ptr
    #[must_use]
    #[inline]
    pub fn raw_buffer(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// Access the start of the `Matrix`'s element data as a pointer.
    #[must_use]
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr().cast()
    }

    /// Iterates over every element in column-major order.
    #[inline]
    pub fn elems(&self) -> slice::Iter<'_, T> {
        self.raw_buffer().iter()
    }

    /// Returns a reference to the element at `(row, col)`.
    #[inline]
    pub fn get_ref(&self, row: usize, col: usize) -> Result<&T, IndexOutOfRange> {
        let row = check_index(Axis::Row, row, ROWS)?;
        let col = check_index(Axis::Column, col, COLS)?;
        Ok(&self.data[col][row])
    }

    /// Returns a mutable reference to the element at `(row, col)`.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, IndexOutOfRange> {
        let row = check_index(Axis::Row, row, ROWS)?;
        let col = check_index(Axis::Column, col, COLS)?;
        Ok(&mut self.data[col][row])
    }

    /// Replaces the element at `(row, col)`, returning the matrix to allow chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix3;
    /// let mut matrix = Matrix3::<f32>::zero();
    /// matrix.set(0, 1, 2.0)?.set(2, 2, 5.0)?;
    ///
    /// assert_eq!(matrix.get(0, 1), Ok(2.0));
    /// assert!(matrix.set(3, 0, 1.0).is_err());
    /// # Ok::<(), linmat::IndexOutOfRange>(())
    /// ```
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<&mut Self, IndexOutOfRange> {
        *self.get_mut(row, col)? = value;
        Ok(self)
    }

    /// Get a reference to the element at `(row, col)` without performing any bounds checks.
    ///
    /// # Safety
    ///
    /// `row` must be smaller than `ROWS` and `col` must be smaller than `COLS`.
    #[must_use]
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < ROWS && col < COLS);
        // SAFETY: upheld by the caller.
        unsafe { self.data.get_unchecked(col).get_unchecked(row) }
    }

    /// Get a mutable reference to the element at `(row, col)` without performing any bounds
    /// checks.
    ///
    /// # Safety
    ///
    /// `row` must be smaller than `ROWS` and `col` must be smaller than `COLS`.
    #[must_use]
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert!(row < ROWS && col < COLS);
        // SAFETY: upheld by the caller.
        unsafe { self.data.get_unchecked_mut(col).get_unchecked_mut(row) }
    }

    #[inline]
    pub(crate) fn columns_mut(&mut self) -> &mut [[T; ROWS]; COLS] {
        &mut self.data
    }
}

impl<T: Copy, const ROWS: usize, const COLS: usize, Src, Dst> Matrix<T, ROWS, COLS, Src, Dst> {
    /// Create a new `Matrix` from an array of rows.
    ///
    /// This is usually the most readable way to write a matrix literal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix;
    /// let matrix: Matrix<i32, 2, 3> = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// assert_eq!(matrix.get(1, 2), Ok(6));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_rows(rows: [[T; COLS]; ROWS]) -> Self {
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Creates a matrix with every element set to `value`.
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::new([[value; ROWS]; COLS])
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix4;
    /// let matrix = Matrix4::<f64>::identity();
    ///
    /// assert_eq!(matrix.get(3, 3), Ok(1.0));
    /// assert!(matrix.get(4, 0).is_err());
    /// assert!(matrix.get(0, 4).is_err());
    /// ```
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<T, IndexOutOfRange> {
        self.get_ref(row, col).copied()
    }

    /// Overwrites every element of `self` with the elements of `src`.
    #[inline]
    pub fn copy_from(&mut self, src: &Self) {
        self.data = src.data;
    }

    /// Returns row `index` as a vector in the source space of the matrix.
    #[inline]
    pub fn row(&self, index: usize) -> Result<Vector<T, COLS, Src>, IndexOutOfRange> {
        let index = check_index(Axis::Row, index, ROWS)?;
        Ok(Vector::from_fn(|col| self.data[col][index]))
    }

    /// Returns column `index` as a vector in the destination space of the matrix.
    #[inline]
    pub fn col(&self, index: usize) -> Result<Vector<T, ROWS, Dst>, IndexOutOfRange> {
        let index = check_index(Axis::Column, index, COLS)?;
        Ok(Vector::new(self.data[index]))
    }

    /// Copies row `index` into `out`.
    #[inline]
    pub fn row_into<Space>(
        &self,
        index: usize,
        out: &mut Vector<T, COLS, Space>,
    ) -> Result<(), IndexOutOfRange> {
        let index = check_index(Axis::Row, index, ROWS)?;
        // SAFETY: `index` was checked above.
        unsafe { self.read_row_unchecked(index, out.array_mut()) };
        Ok(())
    }

    /// Copies column `index` into `out`.
    #[inline]
    pub fn col_into<Space>(
        &self,
        index: usize,
        out: &mut Vector<T, ROWS, Space>,
    ) -> Result<(), IndexOutOfRange> {
        let index = check_index(Axis::Column, index, COLS)?;
        *out.array_mut() = self.data[index];
        Ok(())
    }

    /// Replaces row `index` with the components of `row`.
    #[inline]
    pub fn set_row<Space>(
        &mut self,
        index: usize,
        row: &Vector<T, COLS, Space>,
    ) -> Result<&mut Self, IndexOutOfRange> {
        let index = check_index(Axis::Row, index, ROWS)?;
        // SAFETY: `index` was checked above.
        unsafe { self.write_row_unchecked(index, row.as_array()) };
        Ok(self)
    }

    /// Replaces column `index` with the components of `col`.
    #[inline]
    pub fn set_col<Space>(
        &mut self,
        index: usize,
        col: &Vector<T, ROWS, Space>,
    ) -> Result<&mut Self, IndexOutOfRange> {
        let index = check_index(Axis::Column, index, COLS)?;
        self.data[index] = *col.as_array();
        Ok(self)
    }

    /// Returns the transpose of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix;
    /// let matrix: Matrix<i32, 2, 3> = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// assert_eq!(matrix.transpose(), Matrix::from_rows([
    ///     [1, 4],
    ///     [2, 5],
    ///     [3, 6],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn transpose(self) -> Matrix<T, COLS, ROWS, Src, Dst> {
        Matrix::from_fn(|row, col| self.data[row][col])
    }

    /// Returns the element at `(row, col)`, which the caller has already validated.
    #[inline(always)]
    pub(crate) fn at(&self, row: usize, col: usize) -> T {
        self.data[col][row]
    }

    /// Copies row `row` into `out`.
    ///
    /// # Safety
    ///
    /// `row` must be smaller than `ROWS`.
    #[inline]
    pub(crate) unsafe fn read_row_unchecked(&self, row: usize, out: &mut [T; COLS]) {
        for (col, slot) in out.iter_mut().enumerate() {
            // SAFETY: `col < COLS` by construction, `row < ROWS` is upheld by the caller.
            *slot = unsafe { *self.get_unchecked(row, col) };
        }
    }

    /// Overwrites row `row` with `src`.
    ///
    /// # Safety
    ///
    /// `row` must be smaller than `ROWS`.
    #[inline]
    pub(crate) unsafe fn write_row_unchecked(&mut self, row: usize, src: &[T; COLS]) {
        for (col, &value) in src.iter().enumerate() {
            // SAFETY: `col < COLS` by construction, `row < ROWS` is upheld by the caller.
            unsafe { *self.get_unchecked_mut(row, col) = value };
        }
    }
}

impl<T: Zero + Copy, const ROWS: usize, const COLS: usize, Src, Dst> Zero
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    const ZERO: Self = Matrix {
        data: [[T::ZERO; ROWS]; COLS],
        space: PhantomData,
    };
}

impl<T: Zero + Copy, const ROWS: usize, const COLS: usize, Src, Dst> Matrix<T, ROWS, COLS, Src, Dst> {
    /// Returns the matrix with every element set to zero.
    #[must_use]
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }
}

impl<T: Copy, const N: usize, Src, Dst> Matrix<T, N, N, Src, Dst> {
    /// Transposes a square matrix in place.
    ///
    /// Each element above the diagonal is swapped with its mirror below the diagonal, so no
    /// second buffer is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix3;
    /// let mut matrix: Matrix3<i32> = Matrix3::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    ///
    /// matrix.transpose_in_place();
    ///
    /// assert_eq!(matrix, Matrix3::from_rows([
    ///     [1, 4, 7],
    ///     [2, 5, 8],
    ///     [3, 6, 9],
    /// ]));
    /// ```
    #[inline]
    pub fn transpose_in_place(&mut self) {
        let slice = self.data.as_flattened_mut();
        for row in 0..N {
            for col in (row + 1)..N {
                slice.swap(col * N + row, row * N + col);
            }
        }
    }

    /// Returns the elements on the main diagonal.
    #[must_use]
    #[inline]
    pub fn diagonal(&self) -> [T; N] {
        array::from_fn(|i| self.data[i][i])
    }
}

impl<T: Zero + One + Copy, const N: usize, Src, Dst> Matrix<T, N, N, Src, Dst> {
    /// Constructs an instance of the identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::matrix::Matrix;
    /// let matrix = Matrix::<f64, 3, 3>::identity();
    ///
    /// assert_eq!(matrix, Matrix::from_rows([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal([T::ONE; N])
    }

    /// Creates a matrix with `diagonal` on the main diagonal and zeroes elsewhere.
    #[must_use]
    #[inline]
    pub fn from_diagonal(diagonal: [T; N]) -> Self {
        let mut mat = Self::ZERO;
        for (i, value) in diagonal.into_iter().enumerate() {
            mat.data[i][i] = value;
        }
        mat
    }
}

impl<T: Scalar, const N: usize, Src, Dst> Matrix<T, N, N, Src, Dst> {
    /// Returns the sum of the elements on the main diagonal.
    #[must_use]
    #[inline]
    pub fn trace(&self) -> T {
        crate::utils::sum(self.diagonal())
    }
}

impl<T, const ROWS: usize, const COLS: usize, Src, Dst> Index<(usize, usize)>
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    type Output = T;

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`. Use [`Matrix::get()`] for a checked access.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match self.get_ref(row, col) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const ROWS: usize, const COLS: usize, Src, Dst> IndexMut<(usize, usize)>
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        match self.get_mut(row, col) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const ROWS: usize, const COLS: usize, Src, Dst> AsRef<[T]>
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.raw_buffer()
    }
}

impl<T, const ROWS: usize, const COLS: usize, Src, Dst> From<[[T; ROWS]; COLS]>
    for Matrix<T, ROWS, COLS, Src, Dst>
{
    /// Builds a matrix from an array of columns.
    #[inline]
    fn from(columns: [[T; ROWS]; COLS]) -> Self {
        Self::new(columns)
    }
}

impl<T, const ROWS: usize, const COLS: usize, Src, Dst> From<Matrix<T, ROWS, COLS, Src, Dst>>
    for [[T; ROWS]; COLS]
{
    #[inline]
    fn from(value: Matrix<T, ROWS, COLS, Src, Dst>) -> Self {
        value.data
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const ROWS: usize, const COLS: usize, Src, Dst>
    bytemuck::Zeroable for Matrix<T, ROWS, COLS, Src, Dst>
{
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const ROWS: usize, const COLS: usize, Src: 'static, Dst: 'static>
    bytemuck::Pod for Matrix<T, ROWS, COLS, Src, Dst>
{
}

#[cfg(feature = "bytemuck")]
impl<T: bytemuck::Pod, const ROWS: usize, const COLS: usize, Src, Dst>
    Matrix<T, ROWS, COLS, Src, Dst>
{
    /// Returns the backing buffer as native-endian bytes, in column-major order.
    #[must_use]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.raw_buffer())
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::AbsDiffEq, const ROWS: usize, const COLS: usize, Src, Dst> approx::AbsDiffEq
    for Matrix<T, ROWS, COLS, Src, Dst>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.elems()
            .zip(other.elems())
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::RelativeEq, const ROWS: usize, const COLS: usize, Src, Dst> approx::RelativeEq
    for Matrix<T, ROWS, COLS, Src, Dst>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.elems()
            .zip(other.elems())
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::UlpsEq, const ROWS: usize, const COLS: usize, Src, Dst> approx::UlpsEq
    for Matrix<T, ROWS, COLS, Src, Dst>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.elems()
            .zip(other.elems())
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}

macro_rules! impl_matrix_mint {
    ( $( $matrix_name:ident => $dim:literal [ $( $col:ident ),+ ] ),* $(,)? ) => {
        $(
            #[cfg(feature = "mint")]
            impl<T, Src, Dst> From<mint::$matrix_name<T>> for Matrix<T, $dim, $dim, Src, Dst> {
                #[inline]
                fn from(value: mint::$matrix_name<T>) -> Self {
                    let mint::$matrix_name { $( $col ),+ } = value;
                    Matrix::new([ $( Vector::<T, $dim>::from($col).to_array() ),+ ])
                }
            }

            #[cfg(feature = "mint")]
            impl<T, Src, Dst> From<Matrix<T, $dim, $dim, Src, Dst>> for mint::$matrix_name<T> {
                #[inline]
                fn from(value: Matrix<T, $dim, $dim, Src, Dst>) -> Self {
                    let [ $( $col ),+ ] = value.data;
                    mint::$matrix_name {
                        $( $col: Vector::<T, $dim>::new($col).into() ),+
                    }
                }
            }

            #[cfg(feature = "mint")]
            impl<T> mint::IntoMint for Matrix<T, $dim, $dim> {
                type MintType = mint::$matrix_name<T>;
            }
        )*
    };
}

impl_matrix_mint! {
    ColumnMatrix2 => 2 [x, y],
    ColumnMatrix3 => 3 [x, y, z],
    ColumnMatrix4 => 4 [x, y, z, w],
}
