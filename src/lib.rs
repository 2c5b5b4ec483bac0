// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-size linear algebra for 2x2, 3x3 and 4x4 matrices.
//!
//! Matrices are stored column-major so that [`Matrix::raw_buffer()`] can be handed straight to
//! graphics and physics APIs. Every matrix and vector carries optional zero-sized coordinate-space
//! tags, which stop transforms belonging to different spaces from being composed by accident.
//!
//! Operations that need temporary storage come in a plain form, which uses the stack, and a
//! `*_with` form, which borrows a reusable [`Context`] instead.
//!
//! [`Matrix::raw_buffer()`]: crate::matrix::Matrix::raw_buffer
//! [`Context`]: crate::matrix::context::Context

#![cfg_attr(not(any(test, feature = "std")), no_std)]

/// Emits a `tracing` event at trace level when the `tracing` feature is enabled, and expands to
/// nothing otherwise.
macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)+);
        }
    }};
}

macro_rules! impl_coerce_to_fields {
    (
        $( $type:ident<{ $generic:ident, $const:expr }>  => $fields_type:ident ),+ $(,)?
    ) => {
        $(
            impl<$generic, Space> core::ops::Deref for $type<$generic, $const, Space> {
                type Target = crate::fields:: $fields_type<$generic>;
                #[allow(unsafe_code)]
                #[inline(always)]
                fn deref(&self) -> &Self::Target {
                    const _: () = assert!(
                        core::mem::size_of::<$type<f32, $const>>()
                            == core::mem::size_of::<crate::fields:: $fields_type<f32>>()
                    );

                    const _: () = assert!(
                        core::mem::align_of::<$type<f32, $const>>()
                            == core::mem::align_of::<crate::fields:: $fields_type<f32>>()
                    );

                    const _: () = assert!(
                        core::mem::size_of::<$type<f64, $const>>()
                            == core::mem::size_of::<crate::fields:: $fields_type<f64>>()
                    );

                    const _: () = assert!(
                        core::mem::align_of::<$type<f64, $const>>()
                            == core::mem::align_of::<crate::fields:: $fields_type<f64>>()
                    );

                    // SAFETY: both types are `repr(C)` and consist of exactly `$const` values of
                    // `$generic`; the space tag is zero-sized.
                    unsafe { &*(self as *const _ as *const crate::fields:: $fields_type<$generic>) }
                }
            }

            impl<$generic, Space> core::ops::DerefMut for $type<$generic, $const, Space> {
                #[allow(unsafe_code)]
                #[inline(always)]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // SAFETY: see `Deref`.
                    unsafe { &mut *(self as *mut _ as *mut crate::fields:: $fields_type<$generic>) }
                }
            }

            impl<$generic, Space> From<$type<$generic, $const, Space>> for crate::fields:: $fields_type<$generic> {
                #[inline]
                fn from(value: $type<$generic, $const, Space>) -> Self {
                    From::from(value.to_array())
                }
            }

            impl<$generic, Space> From<crate::fields:: $fields_type<$generic>> for $type<$generic, $const, Space> {
                #[inline]
                fn from(value: crate::fields:: $fields_type<$generic>) -> Self {
                    let array: [$generic; $const] = value.into();
                    $type::new(array)
                }
            }
        )+
    };
}

pub mod error;
pub mod fields;
pub mod matrix;
pub mod rotation;
pub mod utils;
pub mod vector;

pub use crate::{
    error::{Axis, IndexOutOfRange},
    matrix::{
        Matrix, Matrix2, Matrix3, Matrix4,
        context::{Context, Context2, Context3, Context4},
    },
    rotation::angle::Angle,
    vector::{Vector, Vector2, Vector3, Vector4},
};
