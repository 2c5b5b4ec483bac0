// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::utils::num::{ClosedAdd, ClosedSub, Trig, Zero};
use core::{
    cmp::{self, PartialOrd},
    ops::{Add, Neg, Sub},
};

/// An angle, kept in the unit it was created with until it is read back.
#[derive(Clone, Copy, Debug)]
pub enum Angle<T> {
    Degrees(T),
    Radians(T),
}

impl<T> Angle<T> {
    #[must_use]
    #[inline]
    pub const fn degrees(value: T) -> Self {
        Self::Degrees(value)
    }

    #[must_use]
    #[inline]
    pub const fn radians(value: T) -> Self {
        Self::Radians(value)
    }
}

impl<T: Zero> Angle<T> {
    #[must_use]
    #[inline]
    pub fn zero() -> Self {
        Self::Radians(T::ZERO)
    }
}

impl<T: Trig> Angle<T> {
    #[must_use]
    #[inline]
    pub fn in_degrees(self) -> T {
        match self {
            Self::Degrees(degrees) => degrees,
            Self::Radians(radians) => radians.to_degrees(),
        }
    }

    #[must_use]
    #[inline]
    pub fn in_radians(self) -> T {
        match self {
            Self::Degrees(degrees) => degrees.to_radians(),
            Self::Radians(radians) => radians,
        }
    }

    /// Returns the sine and cosine of the angle.
    #[must_use]
    #[inline]
    pub fn sin_cos(self) -> (T, T) {
        self.in_radians().sin_cos()
    }
}

impl<T: Neg> Neg for Angle<T> {
    type Output = Angle<T::Output>;
    #[inline]
    fn neg(self) -> Self::Output {
        match self {
            Self::Degrees(ang) => Angle::Degrees(ang.neg()),
            Self::Radians(ang) => Angle::Radians(ang.neg()),
        }
    }
}

impl<T: Trig + ClosedAdd> Add for Angle<T> {
    type Output = Angle<T>;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Degrees(lhs), Self::Degrees(rhs)) => Self::Degrees(lhs + rhs),
            (lhs, rhs) => Self::Radians(lhs.in_radians() + rhs.in_radians()),
        }
    }
}

impl<T: Trig + ClosedSub> Sub for Angle<T> {
    type Output = Angle<T>;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Degrees(lhs), Self::Degrees(rhs)) => Self::Degrees(lhs - rhs),
            (lhs, rhs) => Self::Radians(lhs.in_radians() - rhs.in_radians()),
        }
    }
}

impl<T: PartialOrd + Trig> PartialOrd for Angle<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        match (*self, *other) {
            (Angle::Degrees(ref a0), Angle::Degrees(ref a1)) => a0.partial_cmp(a1),
            (a0, a1) => a0.in_radians().partial_cmp(&a1.in_radians()),
        }
    }
}

impl<T: PartialEq + Trig> PartialEq for Angle<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Angle::Degrees(ref a0), Angle::Degrees(ref a1)) => a0.eq(a1),
            (a0, a1) => a0.in_radians().eq(&a1.in_radians()),
        }
    }
}

impl<T: Default> Default for Angle<T> {
    #[inline]
    fn default() -> Self {
        Self::Radians(Default::default())
    }
}

impl<T: Zero> Zero for Angle<T> {
    const ZERO: Self = Self::Radians(Zero::ZERO);
}

#[cfg(all(test, any(feature = "std", feature = "libm")))]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_unit_conversion() {
        assert_relative_eq!(Angle::degrees(180.0_f64).in_radians(), PI);
        assert_relative_eq!(Angle::radians(FRAC_PI_2).in_degrees(), 90.0);
        assert_eq!(Angle::<f64>::zero().in_radians(), 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let sum = Angle::degrees(30.0_f64) + Angle::degrees(60.0);
        assert_eq!(sum, Angle::Degrees(90.0));

        let mixed = Angle::degrees(90.0_f64) + Angle::radians(FRAC_PI_2);
        assert_relative_eq!(mixed.in_radians(), PI);

        let diff = Angle::radians(PI) - Angle::radians(FRAC_PI_2);
        assert_relative_eq!(diff.in_degrees(), 90.0);

        assert_eq!(-Angle::degrees(45.0_f64), Angle::Degrees(-45.0));
        assert!(Angle::degrees(10.0_f64) < Angle::radians(1.0));
    }
}
