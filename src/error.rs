// SPDX-License-Identifier: MIT OR Apache-2.0

use core::{error::Error, fmt};

/// The dimension an out-of-range index was given for.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Axis {
    Row,
    Column,
    Component,
}

impl fmt::Display for Axis {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Row => fmtr.write_str("row"),
            Self::Column => fmtr.write_str("column"),
            Self::Component => fmtr.write_str("component"),
        }
    }
}

/// Returned by every checked accessor and row operation when an index lies outside its valid
/// interval.
///
/// The operation that returned this error has not modified its receiver.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct IndexOutOfRange {
    axis: Axis,
    index: usize,
    bound: usize,
}

impl IndexOutOfRange {
    #[must_use]
    #[inline]
    pub const fn new(axis: Axis, index: usize, bound: usize) -> Self {
        Self { axis, index, bound }
    }

    #[must_use]
    #[inline]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The rejected index.
    #[must_use]
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The exclusive upper bound the index was checked against.
    #[must_use]
    #[inline]
    pub const fn bound(&self) -> usize {
        self.bound
    }
}

impl fmt::Display for IndexOutOfRange {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmtr,
            "{} index {} is out of range 0..{}",
            self.axis, self.index, self.bound
        )
    }
}

impl Error for IndexOutOfRange {}

/// Returns `index` unchanged if it is smaller than `bound`.
#[inline]
pub(crate) fn check_index(axis: Axis, index: usize, bound: usize) -> Result<usize, IndexOutOfRange> {
    if index < bound {
        Ok(index)
    } else {
        trace!(%axis, index, bound, "index out of range");
        Err(IndexOutOfRange::new(axis, index, bound))
    }
}
