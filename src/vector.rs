// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-length tuples of scalars.
//!
//! A [`Vector`] carries an optional coordinate-space tag so that a vector expressed in one space
//! cannot be handed to a matrix expecting another. Untagged vectors use `()`.

use crate::{
    error::{Axis, IndexOutOfRange, check_index},
    utils::{
        dot,
        num::{Float, Scalar, Zero},
    },
};
use core::{
    array, fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    slice::{Iter, IterMut},
};

/// An `N`-component vector of `T`, belonging to the coordinate space `Space`.
#[repr(C)]
pub struct Vector<T = f32, const N: usize = 3, Space = ()> {
    data: [T; N],
    space: PhantomData<fn() -> Space>,
}

pub type Vector2<T = f32, Space = ()> = Vector<T, 2, Space>;
pub type Vector3<T = f32, Space = ()> = Vector<T, 3, Space>;
pub type Vector4<T = f32, Space = ()> = Vector<T, 4, Space>;

impl_coerce_to_fields! {
    Vector<{T, 2}> => Xy,
    Vector<{T, 3}> => Xyz,
    Vector<{T, 4}> => Xyzw,
}

impl<T: Clone, const N: usize, Space> Clone for Vector<T, N, Space> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.data.clone())
    }
}

impl<T: Copy, const N: usize, Space> Copy for Vector<T, N, Space> {}

impl<T: PartialEq, const N: usize, Space> PartialEq for Vector<T, N, Space> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq, const N: usize, Space> Eq for Vector<T, N, Space> {}

impl<T: Hash, const N: usize, Space> Hash for Vector<T, N, Space> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl<T: fmt::Debug, const N: usize, Space> fmt::Debug for Vector<T, N, Space> {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmtr.write_str("Vector ")?;
        let mut debug_list = fmtr.debug_list();
        debug_list.entries(self.data.iter());
        debug_list.finish()
    }
}

impl<T: Zero + Copy, const N: usize, Space> Default for Vector<T, N, Space> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T, const N: usize, Space> Vector<T, N, Space> {
    /// Create a new `Vector` from the given array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::vector::Vector3;
    /// let vector: Vector3<i32> = Vector3::new([1, 2, 3]);
    /// assert_eq!(vector.z, 3);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(array: [T; N]) -> Self {
        Self {
            data: array,
            space: PhantomData,
        }
    }

    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::new(array::from_fn(f))
    }

    #[must_use]
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N, Space> {
        Vector::new(self.data.map(f))
    }

    /// Reinterprets this vector as belonging to the coordinate space `NewSpace`.
    #[must_use]
    #[inline]
    pub fn cast_space<NewSpace>(self) -> Vector<T, N, NewSpace> {
        Vector::new(self.data)
    }

    /// Returns a reference to the component at `index`.
    #[inline]
    pub fn get_ref(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        let index = check_index(Axis::Component, index, N)?;
        Ok(&self.data[index])
    }

    /// Returns a mutable reference to the component at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        let index = check_index(Axis::Component, index, N)?;
        Ok(&mut self.data[index])
    }

    /// Replaces the component at `index`, returning the vector to allow chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::vector::Vector3;
    /// let mut vector: Vector3<f32> = Vector3::splat(0.0);
    /// vector.set(0, 1.0)?.set(2, 3.0)?;
    /// assert_eq!(vector.to_array(), [1.0, 0.0, 3.0]);
    /// assert!(vector.set(3, 4.0).is_err());
    /// # Ok::<(), linmat::IndexOutOfRange>(())
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<&mut Self, IndexOutOfRange> {
        *self.get_mut(index)? = value;
        Ok(self)
    }

    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[must_use]
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    #[inline]
    pub(crate) fn array_mut(&mut self) -> &mut [T; N] {
        &mut self.data
    }
}

impl<T: Copy, const N: usize, Space> Vector<T, N, Space> {
    /// Creates a vector with every component set to `value`.
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    /// Returns the component at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::vector::Vector2;
    /// let vector: Vector2<f64> = Vector2::new([4.0, 5.0]);
    /// assert_eq!(vector.get(1), Ok(5.0));
    /// assert!(vector.get(2).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<T, IndexOutOfRange> {
        self.get_ref(index).copied()
    }
}

impl<T: Scalar, const N: usize, Space> Vector<T, N, Space> {
    /// Computes the dot product of two vectors in the same space.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::vector::Vector3;
    /// let v1: Vector3<f32> = Vector3::new([1.0, 2.0, 3.0]);
    /// let v2 = Vector3::new([7.0, 8.0, 9.0]);
    /// assert_eq!(v1.dot(&v2), 50.0);
    /// ```
    #[must_use]
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        dot(&self.data, &rhs.data)
    }

    #[must_use]
    #[inline]
    pub fn len_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: Float, const N: usize, Space> Vector<T, N, Space> {
    #[must_use]
    #[inline]
    pub fn len(&self) -> T {
        self.len_squared().sqrt()
    }

    /// Returns this vector scaled to unit length, or `None` if its length is zero.
    #[must_use]
    #[inline]
    pub fn normalized(self) -> Option<Self> {
        let len = self.len();
        if len == T::ZERO {
            return None;
        }

        Some(self / len)
    }
}

impl<T: Scalar, Space> Vector<T, 3, Space> {
    #[must_use]
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        let [x0, y0, z0] = self.data;
        let [x1, y1, z1] = rhs.data;
        Self::new([
            (y0 * z1) - (z0 * y1),
            (z0 * x1) - (x0 * z1),
            (x0 * y1) - (y0 * x1),
        ])
    }
}

impl<T: Zero + Copy, const N: usize, Space> Zero for Vector<T, N, Space> {
    const ZERO: Self = Vector {
        data: [T::ZERO; N],
        space: PhantomData,
    };
}

impl<T: Neg, const N: usize, Space> Neg for Vector<T, N, Space> {
    type Output = Vector<T::Output, N, Space>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

impl<T: Scalar, const N: usize, Space> Mul<T> for Vector<T, N, Space> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|x| x * rhs)
    }
}

impl<T: Scalar, const N: usize, Space> MulAssign<T> for Vector<T, N, Space> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.data.iter_mut().for_each(|x| *x *= rhs);
    }
}

impl<T: Scalar, const N: usize, Space> Div<T> for Vector<T, N, Space> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self.map(|x| x / rhs)
    }
}

impl<T: Scalar, const N: usize, Space> DivAssign<T> for Vector<T, N, Space> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.data.iter_mut().for_each(|x| *x /= rhs);
    }
}

impl<T: Scalar, const N: usize, Space> Add for Vector<T, N, Space> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize, Space> AddAssign for Vector<T, N, Space> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.data.iter_mut().zip(rhs.data) {
            *lhs += rhs;
        }
    }
}

impl<T: Scalar, const N: usize, Space> Sub for Vector<T, N, Space> {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const N: usize, Space> SubAssign for Vector<T, N, Space> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.data.iter_mut().zip(rhs.data) {
            *lhs -= rhs;
        }
    }
}

impl<T, const N: usize, Space> Index<usize> for Vector<T, N, Space> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get_ref(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize, Space> IndexMut<usize> for Vector<T, N, Space> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize, Space> AsRef<[T]> for Vector<T, N, Space> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize, Space> AsRef<[T; N]> for Vector<T, N, Space> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.data
    }
}

impl<T, const N: usize, Space> From<Vector<T, N, Space>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N, Space>) -> Self {
        value.data
    }
}

impl<T, const N: usize, Space> From<[T; N]> for Vector<T, N, Space> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::new(value)
    }
}

impl<T, const N: usize, Space> IntoIterator for Vector<T, N, Space> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize, Space> IntoIterator for &'a Vector<T, N, Space> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

macro_rules! impl_vector_mint {
    ( $( $mint_type:ident => $dim:literal [ $( $field:ident ),+ ] ),* $(,)? ) => {
        $(
            #[cfg(feature = "mint")]
            impl<T, Space> From<mint::$mint_type<T>> for Vector<T, $dim, Space> {
                #[inline]
                fn from(value: mint::$mint_type<T>) -> Self {
                    let mint::$mint_type { $( $field ),+ } = value;
                    Vector::new([ $( $field ),+ ])
                }
            }

            #[cfg(feature = "mint")]
            impl<T, Space> From<Vector<T, $dim, Space>> for mint::$mint_type<T> {
                #[inline]
                fn from(value: Vector<T, $dim, Space>) -> Self {
                    let [ $( $field ),+ ] = value.data;
                    mint::$mint_type { $( $field ),+ }
                }
            }

            #[cfg(feature = "mint")]
            impl<T> mint::IntoMint for Vector<T, $dim> {
                type MintType = mint::$mint_type<T>;
            }
        )*
    };
}

impl_vector_mint! {
    Vector2 => 2 [x, y],
    Vector3 => 3 [x, y, z],
    Vector4 => 4 [x, y, z, w],
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize, Space> bytemuck::Zeroable
    for Vector<T, N, Space>
{
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize, Space: 'static> bytemuck::Pod
    for Vector<T, N, Space>
{
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::AbsDiffEq, const N: usize, Space> approx::AbsDiffEq for Vector<T, N, Space>
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
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::RelativeEq, const N: usize, Space> approx::RelativeEq for Vector<T, N, Space>
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
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::UlpsEq, const N: usize, Space> approx::UlpsEq for Vector<T, N, Space>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(any(feature = "std", feature = "libm"))]
    use approx::assert_relative_eq;

    struct World;

    #[test]
    fn test_component_access() {
        let mut vector: Vector4<i32> = Vector::new([1, 2, 3, 4]);
        assert_eq!((vector.x, vector.y, vector.z, vector.w), (1, 2, 3, 4));

        vector.y = 20;
        assert_eq!(vector.get(1), Ok(20));
        assert_eq!(vector[1], 20);

        vector.set(3, 40).unwrap().set(0, 10).unwrap();
        assert_eq!(vector.to_array(), [10, 20, 3, 40]);

        let err = vector.get(4).unwrap_err();
        assert_eq!(err.axis(), Axis::Component);
        assert_eq!(err.bound(), 4);
        assert!(vector.set(usize::MAX, 0).is_err());
        assert_eq!(vector.to_array(), [10, 20, 3, 40]);
    }

    #[test]
    #[should_panic = "component index 3 is out of range 0..3"]
    fn test_index_operator_panics() {
        let vector: Vector3<i32> = Vector::new([1, 2, 3]);
        let _ = vector[3];
    }

    #[test]
    #[should_panic = "component index 2 is out of range 0..2"]
    fn test_index_mut_operator_panics() {
        let mut vector: Vector2<i32> = Vector::new([1, 2]);
        vector[2] = 0;
    }

    #[test]
    fn test_cross() {
        let v1: Vector3<f64> = Vector::new([3.0, 4.0, 5.0]);
        let v2 = Vector::new([7.0, 8.0, 9.0]);
        assert_eq!(v1.cross(&v2), Vector::new([-4.0, 8.0, -4.0]));

        let x: Vector3<f64> = Vector::new([1.0, 0.0, 0.0]);
        let y = Vector::new([0.0, 1.0, 0.0]);
        assert_eq!(x.cross(&y), Vector::new([0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_dot() {
        let v1: Vector3<f64> = Vector::new([1.0, 2.0, 3.0]);
        let v2 = Vector::new([7.0, 8.0, 9.0]);
        assert_eq!(v1.dot(&v2), 50.0);
    }

    #[test]
    #[cfg(any(feature = "std", feature = "libm"))]
    fn test_len() {
        let v: Vector4<f64> = Vector::new([0.0, 60.0, 0.0, 0.0]);
        assert_eq!(v.len(), 60.0);
        assert_eq!(v.len_squared(), 3600.0);
    }

    #[test]
    fn test_arithmetic() {
        let v1: Vector3<f32> = Vector::new([1.0, 2.0, 3.0]);
        let v2 = Vector::new([0.5, 0.5, 0.5]);

        assert_eq!(v1 + v2, Vector::new([1.5, 2.5, 3.5]));
        assert_eq!(v1 - v2, Vector::new([0.5, 1.5, 2.5]));
        assert_eq!(v1 * 2.0, Vector::new([2.0, 4.0, 6.0]));
        assert_eq!(v1 / 2.0, Vector::new([0.5, 1.0, 1.5]));
        assert_eq!(-v1, Vector::new([-1.0, -2.0, -3.0]));

        let mut v3 = v1;
        v3 += v2;
        v3 *= 2.0;
        assert_eq!(v3, Vector::new([3.0, 5.0, 7.0]));
    }

    #[test]
    #[cfg(any(feature = "std", feature = "libm"))]
    fn test_normalized() {
        let v: Vector3<f64> = Vector::new([3.0, 0.0, 4.0]);
        let n = v.normalized().unwrap();
        assert_relative_eq!(n, Vector3::<f64>::new([0.6, 0.0, 0.8]));
        assert_relative_eq!(n.len(), 1.0);

        assert!(Vector3::<f64>::ZERO.normalized().is_none());
    }

    #[test]
    fn test_cast_space() {
        let local: Vector3<f32> = Vector::new([1.0, 2.0, 3.0]);
        let world: Vector3<f32, World> = local.cast_space();
        assert_eq!(world.to_array(), local.to_array());
    }
}
