// SPDX-License-Identifier: MIT OR Apache-2.0

//! Construction and composition of affine transforms.
//!
//! All transforms are built for a right-handed coordinate system and for column vectors, so a
//! transform `M` maps a point `p` to `M * p` and `A * B` applies `B` first.
//!
//! 3x3 matrices hold either a 3D linear transform or a 2D homogeneous transform. 4x4 matrices hold
//! a 3D homogeneous transform. 2x2 matrices carry no transform constructors.

use crate::{
    matrix::{Matrix, context::Context},
    rotation::angle::Angle,
    utils::num::{Float, One, Zero},
    vector::Vector,
};

/// The rows of the rotation by `angle` about `axis`, by Rodrigues' formula.
///
/// `axis` is normalized first. A zero axis is used as it is, which yields the identity for a zero
/// angle and a pure scaling by `cos(angle)` otherwise.
#[inline]
fn rotation_rows<T: Float, Space>(angle: Angle<T>, axis: Vector<T, 3, Space>) -> [[T; 3]; 3] {
    let axis = axis.normalized().unwrap_or(axis);
    let [x, y, z] = axis.to_array();
    let (s, c) = angle.sin_cos();
    let t = T::ONE - c;

    // A left-handed system flips the sign of every `s` term: `t*x*y + s*z` in the first row becomes
    // `t*x*y - s*z`, and so on for the other five.
    [
        [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
        [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
        [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
    ]
}

#[inline]
fn x_axis_rows<T: Float>(angle: Angle<T>) -> [[T; 3]; 3] {
    let (s, c) = angle.sin_cos();
    let (zero, one) = (T::ZERO, T::ONE);
    // Left-handed: swap the signs of both `s` terms.
    [[one, zero, zero], [zero, c, -s], [zero, s, c]]
}

#[inline]
fn y_axis_rows<T: Float>(angle: Angle<T>) -> [[T; 3]; 3] {
    let (s, c) = angle.sin_cos();
    let (zero, one) = (T::ZERO, T::ONE);
    // Left-handed: swap the signs of both `s` terms.
    [[c, zero, s], [zero, one, zero], [-s, zero, c]]
}

#[inline]
fn z_axis_rows<T: Float>(angle: Angle<T>) -> [[T; 3]; 3] {
    let (s, c) = angle.sin_cos();
    let (zero, one) = (T::ZERO, T::ONE);
    // Left-handed: swap the signs of both `s` terms.
    [[c, -s, zero], [s, c, zero], [zero, zero, one]]
}

/// Places a 3x3 block in the upper left corner of an identity matrix.
#[inline]
fn embed_linear<T: Zero + One + Copy, const N: usize, Space>(
    rows: [[T; 3]; 3],
) -> Matrix<T, N, N, Space, Space> {
    Matrix::from_fn(|row, col| match (row < 3 && col < 3, row == col) {
        (true, _) => rows[row][col],
        (false, true) => T::ONE,
        (false, false) => T::ZERO,
    })
}

impl<T: Float, Space> Matrix<T, 4, 4, Space, Space> {
    /// Returns the matrix which rotates by `angle` about `axis`, counter-clockwise when looking
    /// down the axis towards the origin.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::{matrix::Matrix4, rotation::Angle, vector::{Vector3, Vector4}};
    /// let rotation: Matrix4<f64> =
    ///     Matrix4::rotation(Angle::degrees(90.0), Vector3::new([0.0, 0.0, 1.0]));
    ///
    /// let y = rotation * Vector4::<f64>::new([1.0, 0.0, 0.0, 1.0]);
    /// assert!(y[0].abs() < 1e-12);
    /// assert_eq!([y[1], y[2], y[3]], [1.0, 0.0, 1.0]);
    /// ```
    #[must_use]
    #[inline]
    pub fn rotation(angle: Angle<T>, axis: Vector<T, 3, Space>) -> Self {
        embed_linear(rotation_rows(angle, axis))
    }

    /// Returns the matrix which rotates by `angle` about the X axis.
    #[must_use]
    #[inline]
    pub fn x_axis_rotation(angle: Angle<T>) -> Self {
        embed_linear(x_axis_rows(angle))
    }

    /// Returns the matrix which rotates by `angle` about the Y axis.
    #[must_use]
    #[inline]
    pub fn y_axis_rotation(angle: Angle<T>) -> Self {
        embed_linear(y_axis_rows(angle))
    }

    /// Returns the matrix which rotates by `angle` about the Z axis.
    #[must_use]
    #[inline]
    pub fn z_axis_rotation(angle: Angle<T>) -> Self {
        embed_linear(z_axis_rows(angle))
    }
}

impl<T: Zero + One + Copy, Space> Matrix<T, 4, 4, Space, Space> {
    /// Returns the identity matrix with its translation column set to `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::{matrix::Matrix4, vector::{Vector3, Vector4}};
    /// let translation: Matrix4<f32> = Matrix4::translation(Vector3::new([1.0, 2.0, 3.0]));
    ///
    /// assert_eq!(translation.col(3), Ok(Vector4::new([1.0, 2.0, 3.0, 1.0])));
    /// ```
    #[must_use]
    #[inline]
    pub fn translation(offset: Vector<T, 3, Space>) -> Self {
        let [x, y, z] = offset.to_array();
        let mut matrix = Self::identity();
        matrix.data[3] = [x, y, z, T::ONE];
        matrix
    }

    /// Returns the matrix which scales each axis by the matching component of `scale`.
    #[must_use]
    #[inline]
    pub fn scaling(scale: Vector<T, 3, Space>) -> Self {
        let [x, y, z] = scale.to_array();
        Self::from_diagonal([x, y, z, T::ONE])
    }
}

impl<T: Float, Space> Matrix<T, 3, 3, Space, Space> {
    /// Returns the linear part of the 4x4 rotation by `angle` about `axis`.
    #[must_use]
    #[inline]
    pub fn rotation(angle: Angle<T>, axis: Vector<T, 3, Space>) -> Self {
        embed_linear(rotation_rows(angle, axis))
    }

    /// Returns the matrix which rotates by `angle` about the X axis.
    #[must_use]
    #[inline]
    pub fn x_axis_rotation(angle: Angle<T>) -> Self {
        embed_linear(x_axis_rows(angle))
    }

    /// Returns the matrix which rotates by `angle` about the Y axis.
    #[must_use]
    #[inline]
    pub fn y_axis_rotation(angle: Angle<T>) -> Self {
        embed_linear(y_axis_rows(angle))
    }

    /// Returns the matrix which rotates by `angle` about the Z axis.
    ///
    /// This is also the 2D homogeneous rotation about the origin.
    #[must_use]
    #[inline]
    pub fn z_axis_rotation(angle: Angle<T>) -> Self {
        embed_linear(z_axis_rows(angle))
    }
}

impl<T: Zero + One + Copy, Space> Matrix<T, 3, 3, Space, Space> {
    /// Returns the 2D homogeneous translation by `offset`.
    #[must_use]
    #[inline]
    pub fn translation_2d(offset: Vector<T, 2, Space>) -> Self {
        let [x, y] = offset.to_array();
        let mut matrix = Self::identity();
        matrix.data[2] = [x, y, T::ONE];
        matrix
    }

    /// Returns the 2D homogeneous scaling by `scale`.
    #[must_use]
    #[inline]
    pub fn scaling_2d(scale: Vector<T, 2, Space>) -> Self {
        let [x, y] = scale.to_array();
        Self::from_diagonal([x, y, T::ONE])
    }
}

impl<T: Float, Src, Dst> Matrix<T, 4, 4, Src, Dst> {
    /// Returns `self * translation(offset)`: the offset is applied first, in the source space.
    #[must_use]
    #[inline]
    pub fn translate_by_vector(&self, offset: Vector<T, 3, Src>) -> Self {
        *self * Matrix::<T, 4, 4, Src, Src>::translation(offset)
    }

    /// Replaces `self` with `self * translation(offset)`.
    #[inline]
    pub fn translate_by_vector_in_place(&mut self, offset: Vector<T, 3, Src>) -> &mut Self {
        self.multiply_in_place(&Matrix::<T, 4, 4, Src, Src>::translation(offset))
    }

    /// Replaces `self` with `self * translation(offset)`, using the scratch storage in `ctx`.
    #[inline]
    pub fn translate_by_vector_in_place_with(
        &mut self,
        offset: Vector<T, 3, Src>,
        ctx: &mut Context<T, 4>,
    ) -> &mut Self {
        self.multiply_in_place_with(&Matrix::<T, 4, 4, Src, Src>::translation(offset), ctx)
    }

    /// Returns `self * rotation(angle, axis)`: the rotation is applied first, in the source space.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmat::{matrix::Matrix4, rotation::Angle, vector::Vector3};
    /// let axis = Vector3::<f64>::new([0.0, 1.0, 0.0]);
    /// let half_turn: Matrix4<f64> = Matrix4::identity()
    ///     .rotate(Angle::degrees(90.0), axis)
    ///     .rotate(Angle::degrees(90.0), axis);
    ///
    /// let expected = Matrix4::<f64>::from_diagonal([-1.0, 1.0, -1.0, 1.0]);
    /// for (actual, expected) in half_turn.elems().zip(expected.elems()) {
    ///     assert!((actual - expected).abs() < 1e-12);
    /// }
    /// ```
    #[must_use]
    #[inline]
    pub fn rotate(&self, angle: Angle<T>, axis: Vector<T, 3, Src>) -> Self {
        *self * Matrix::<T, 4, 4, Src, Src>::rotation(angle, axis)
    }

    /// Replaces `self` with `self * rotation(angle, axis)`.
    #[inline]
    pub fn rotate_in_place(&mut self, angle: Angle<T>, axis: Vector<T, 3, Src>) -> &mut Self {
        self.multiply_in_place(&Matrix::<T, 4, 4, Src, Src>::rotation(angle, axis))
    }

    /// Replaces `self` with `self * rotation(angle, axis)`, using the scratch storage in `ctx`.
    #[inline]
    pub fn rotate_in_place_with(
        &mut self,
        angle: Angle<T>,
        axis: Vector<T, 3, Src>,
        ctx: &mut Context<T, 4>,
    ) -> &mut Self {
        self.multiply_in_place_with(&Matrix::<T, 4, 4, Src, Src>::rotation(angle, axis), ctx)
    }
}
