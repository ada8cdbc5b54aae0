// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity growth policy.
//!
//! Growth is multiplicative by a factor of 1.5 ([`GROWTH_NUMERATOR`] /
//! [`GROWTH_DENOMINATOR`]), so appending `n` elements one at a time performs
//! `O(log n)` reallocations and `O(n)` total relocation work.

// Crate imports
use crate::error::Error;

/// Numerator of the growth factor.
pub const GROWTH_NUMERATOR: usize = 3;
/// Denominator of the growth factor.
pub const GROWTH_DENOMINATOR: usize = 2;

/// Largest element count an `ArrayList<T, _>` can hold.
///
/// A block may not span more than `isize::MAX` bytes. Zero-sized types never
/// allocate, but are still capped at `isize::MAX` elements so that cursor
/// differences always fit in an `isize`.
#[inline]
pub const fn max_len<T>() -> usize {
    let size = core::mem::size_of::<T>();
    if size == 0 {
        isize::MAX as usize
    } else {
        isize::MAX as usize / size
    }
}

/// Computes the capacity to allocate when `required` slots are needed and
/// `current` are reserved.
///
/// - `required <= current` returns `current` unchanged.
/// - `required > max` fails with [`Error::LengthExceeded`].
/// - Otherwise returns `max(required, current * 3 / 2)`, falling back to
///   `required` when the multiplied capacity would pass `max`.
///
/// Pure; never overflows.
#[inline]
pub const fn compute_growth(current: usize, required: usize, max: usize) -> Result<usize, Error> {
    if required <= current {
        return Ok(current);
    }
    if required > max {
        return Err(Error::LengthExceeded { requested: required, max });
    }
    // `current < required <= max <= isize::MAX`, so neither step can wrap.
    let grown = current / GROWTH_DENOMINATOR * GROWTH_NUMERATOR
        + current % GROWTH_DENOMINATOR * GROWTH_NUMERATOR / GROWTH_DENOMINATOR;
    if grown > max || grown < required {
        Ok(required)
    } else {
        Ok(grown)
    }
}
