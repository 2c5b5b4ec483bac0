// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reusable scratch storage for allocation-free engine calls.
//!
//! Every operation that needs temporary storage has a plain form, which keeps its temporaries on
//! the stack, and a `*_with` form which borrows a [`Context`] and works in the context's scratch
//! fields instead. A context is overwritten by every call it is lent to and carries nothing from
//! one call to the next.
//!
//! A context is bound to the thread which created it: it is neither `Send` nor `Sync`, and it
//! cannot be cloned. Code which needs scratch space on several threads creates one context per
//! thread.
//!
//! ```
//! # use linmat::{Context4, Matrix4};
//! let mut ctx = Context4::<f64>::new();
//! let mut matrix = Matrix4::<f64>::from_diagonal([2.0, 4.0, 8.0, 1.0]);
//!
//! for _ in 0..3 {
//!     matrix.multiply_in_place_with(&Matrix4::from_diagonal([0.5, 0.5, 0.5, 1.0]), &mut ctx);
//! }
//!
//! assert_eq!(matrix.diagonal(), [0.25, 0.5, 1.0, 1.0]);
//! ```

use crate::{
    matrix::{
        Matrix,
        dimension::{Dimension, SupportedDimension},
    },
    utils::num::Zero,
    vector::Vector,
};
use core::{fmt, marker::PhantomData};

/// Scratch storage for the `*_with` operations on `N`x`N` matrices.
pub struct Context<T = f32, const N: usize = 4>
where
    Dimension<N>: SupportedDimension<N>,
{
    pub(super) matrix: Matrix<T, N, N>,
    pub(super) minor: <Dimension<N> as SupportedDimension<N>>::Minor<T>,
    pub(super) tuple_a: Vector<T, N>,
    pub(super) tuple_b: Vector<T, N>,
    _not_send: PhantomData<*mut ()>,
}

/// Scratch storage for 2x2 matrices.
pub type Context2<T = f32> = Context<T, 2>;

/// Scratch storage for 3x3 matrices.
pub type Context3<T = f32> = Context<T, 3>;

/// Scratch storage for 4x4 matrices.
pub type Context4<T = f32> = Context<T, 4>;

impl<T: Zero + Copy, const N: usize> Context<T, N>
where
    Dimension<N>: SupportedDimension<N>,
{
    /// Creates a new context with zeroed scratch storage.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            matrix: Matrix::ZERO,
            minor: <Dimension<N> as SupportedDimension<N>>::zero_minor(),
            tuple_a: Vector::ZERO,
            tuple_b: Vector::ZERO,
            _not_send: PhantomData,
        }
    }
}

impl<T: Zero + Copy, const N: usize> Default for Context<T, N>
where
    Dimension<N>: SupportedDimension<N>,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for Context<T, N>
where
    Dimension<N>: SupportedDimension<N>,
{
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmtr.debug_struct("Context")
            .field("dimension", &N)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix3;

    #[test]
    fn test_context_is_reusable_between_operations() {
        let mut ctx = Context3::<f64>::new();

        #[rustfmt::skip]
        let matrix = Matrix3::<f64>::from_rows([
            [4.0, 7.0, 2.0],
            [3.0, 6.0, 1.0],
            [2.0, 5.0, 3.0],
        ]);

        let first = matrix.inverse_with(&mut ctx);
        let mut squared = matrix;
        squared.multiply_in_place_with(&matrix, &mut ctx);
        let second = matrix.inverse_with(&mut ctx);

        assert_eq!(first, second);
        assert_eq!(squared, matrix * matrix);
    }

    #[test]
    fn test_debug_does_not_print_scratch() {
        let ctx = Context4::<f32>::default();
        assert_eq!(format!("{ctx:?}"), "Context { dimension: 4, .. }");
    }
}
