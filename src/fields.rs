// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named component views used by [`Vector`](crate::vector::Vector) through `Deref`.

use crate::utils::num::Zero;

macro_rules! decl_fields {
    (
        $(
            $( #[ $meta:meta ] )*
            $ty_name:ident <{ $dim:expr }> {
                $( $field:ident ),+
                $(,)?
            }
        )*
    ) => {
        $(
            $( #[ $meta ] )*
            #[repr(C)]
            #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
            pub struct $ty_name <T> {
                $( pub $field : T ),+
            }

            impl<T> $ty_name<T> {
                #[must_use]
                #[inline]
                pub const fn new( $( $field : T ),+ ) -> Self {
                    Self {
                        $($field),+
                    }
                }
            }

            impl<T: Zero> Zero for $ty_name<T> {
                const ZERO: Self = Self {
                    $( $field : Zero::ZERO ),+
                };
            }

            impl<T> From<$ty_name<T>> for [T; $dim] {
                #[inline]
                fn from($ty_name { $( $field ),+}: $ty_name<T>) -> Self {
                    [ $($field),+ ]
                }
            }

            impl<T> From<[T; $dim]> for $ty_name<T> {
                #[inline]
                fn from([ $( $field ),+ ]: [T ; $dim]) -> Self {
                    Self {
                        $($field),+
                    }
                }
            }
        )*
    };
}

decl_fields! {
    /// The `x` and `y` components of a 2-component vector.
    Xy <{ 2 }> { x, y }
    /// The `x`, `y` and `z` components of a 3-component vector.
    Xyz <{ 3 }> { x, y, z }
    /// The `x`, `y`, `z` and `w` components of a 4-component vector.
    Xyzw <{ 4 }> { x, y, z, w, }
}
