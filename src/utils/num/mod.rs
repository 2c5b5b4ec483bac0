// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numeric traits the matrix engine is generic over.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub trait ClosedSub: Sized + Sub<Output = Self> {}
pub trait ClosedMul: Sized + Mul<Output = Self> {}
pub trait ClosedAdd: Sized + Add<Output = Self> {}
pub trait ClosedDiv: Sized + Div<Output = Self> {}
pub trait ClosedNeg: Sized + Neg<Output = Self> {}

impl<T: Sized + Sub<Output = Self>> ClosedSub for T {}
impl<T: Sized + Mul<Output = Self>> ClosedMul for T {}
impl<T: Sized + Add<Output = Self>> ClosedAdd for T {}
impl<T: Sized + Div<Output = Self>> ClosedDiv for T {}
impl<T: Sized + Neg<Output = Self>> ClosedNeg for T {}

/// A copyable number supporting the four arithmetic operations.
///
/// This is enough for storage, addition, multiplication and determinants. Inversion and
/// transform construction additionally need [`Float`].
pub trait Scalar:
    Copy
    + ClosedAdd
    + ClosedDiv
    + ClosedMul
    + ClosedSub
    + AddAssign
    + DivAssign
    + MulAssign
    + SubAssign
    + One
    + PartialEq
    + PartialOrd
    + Zero
{
}

impl<T> Scalar for T where
    T: Copy
        + ClosedAdd
        + ClosedDiv
        + ClosedMul
        + ClosedSub
        + AddAssign
        + DivAssign
        + MulAssign
        + SubAssign
        + One
        + PartialEq
        + PartialOrd
        + Zero
{
}

pub trait Signed: Scalar + ClosedNeg {}
impl<T: Scalar + ClosedNeg> Signed for T {}

pub trait Sqrt: Copy {
    #[must_use]
    fn sqrt(self) -> Self;
}

/// The scalar types the full engine works with: `f32` and `f64`.
pub trait Float: Signed + Trig + Sqrt {}
impl<T> Float for T where T: Signed + Trig + Sqrt {}

#[doc(alias = "1")]
pub trait One {
    const ONE: Self;
}

#[doc(alias = "0")]
pub trait Zero {
    const ZERO: Self;
}

pub trait Trig: Copy {
    #[must_use]
    fn sin(self) -> Self;
    #[must_use]
    fn cos(self) -> Self;

    #[must_use]
    fn to_radians(self) -> Self;
    #[must_use]
    fn to_degrees(self) -> Self;

    #[must_use]
    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
}

macro_rules! impl_nums {
    (
        $(
            $num_ty:ty => ( zero = $zero:expr, one = $one:expr )
        ),* $(,)?
    ) => {
        $(
            impl Zero for $num_ty {
                const ZERO: Self = $zero;
            }

            impl One for $num_ty {
                const ONE: Self = $one;
            }
        )*
    };
}

impl_nums! {
    u8 => (zero = 0, one = 1),
    u16 => (zero = 0, one = 1),
    u32 => (zero = 0, one = 1),
    u64 => (zero = 0, one = 1),
    u128 => (zero = 0, one = 1),
    usize => (zero = 0, one = 1),

    i8 => (zero = 0, one = 1),
    i16 => (zero = 0, one = 1),
    i32 => (zero = 0, one = 1),
    i64 => (zero = 0, one = 1),
    i128 => (zero = 0, one = 1),
    isize => (zero = 0, one = 1),

    f32 => (zero = 0.0, one = 1.0),
    f64 => (zero = 0.0, one = 1.0),
}

impl<T: Zero + Copy, const N: usize> Zero for [T; N] {
    const ZERO: Self = [T::ZERO; N];
}

macro_rules! impl_float_traits {
    ( $($type:ty),* $(,)? ) => {
        $(
            #[cfg(feature = "std")]
            impl Sqrt for $type {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    <$type>::sqrt(self)
                }
            }

            #[cfg(all(feature = "libm", not(feature = "std")))]
            impl Sqrt for $type {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    libm::Libm::<$type>::sqrt(self)
                }
            }

            #[cfg(feature = "std")]
            impl Trig for $type {
                #[inline]
                fn sin(self) -> Self {
                    <$type>::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    <$type>::cos(self)
                }

                #[inline]
                fn to_radians(self) -> Self {
                    <$type>::to_radians(self)
                }

                #[inline]
                fn to_degrees(self) -> Self {
                    <$type>::to_degrees(self)
                }

                #[inline]
                fn sin_cos(self) -> (Self, Self) {
                    <$type>::sin_cos(self)
                }
            }

            #[cfg(all(feature = "libm", not(feature = "std")))]
            impl Trig for $type {
                #[inline]
                fn sin(self) -> Self {
                    libm::Libm::<$type>::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    libm::Libm::<$type>::cos(self)
                }

                #[inline]
                fn to_radians(self) -> Self {
                    <$type>::to_radians(self)
                }

                #[inline]
                fn to_degrees(self) -> Self {
                    <$type>::to_degrees(self)
                }
            }
        )*
    };
}

impl_float_traits! {
    f32, f64,
}
