// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`ArrayList`](crate::ArrayList).
//!
//! `Index` and `IndexMut` accept everything a slice does (`usize` and every
//! range form) and follow slice behavior:
//! - panics on out-of-bounds or inverted ranges;
//! - views are restricted to the live prefix `[0..len)`.
//!
//! [`ArrayList::at`](crate::ArrayList::at) is the non-panicking counterpart.

// Crate imports
use crate::{port::Allocator, vec::ArrayList};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, A: Allocator> Index<I> for ArrayList<T, A> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, A: Allocator> IndexMut<I> for ArrayList<T, A> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{ArrayList, array_list};

    #[test]
    fn test_indexing_and_ranges_full_suite() {
        let mut v = array_list![0, 1, 2, 3, 4];

        assert_eq!(v[0], 0);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..3], &[0, 1, 2]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[1..=3], &[1, 2, 3]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);

        v[1..3].copy_from_slice(&[10, 20]);
        assert_eq!(v.as_slice(), &[0, 10, 20, 3, 4]);
    }

    #[test]
    fn test_index_sees_only_live_prefix() {
        let mut v: ArrayList<i32> = ArrayList::with_capacity(8).unwrap();
        v.extend_from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(v[..].len(), 3);
        assert_eq!(&v[3..3], &[] as &[i32]);
    }

    #[test]
    #[should_panic]
    fn test_oob_panics() {
        let v: ArrayList<i32> = ArrayList::with_capacity(2).unwrap();
        let _ = v[0];
    }

    #[test]
    #[should_panic]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_inverted_range_panics() {
        let v = array_list![1, 2, 3];
        let _ = &v[2..1];
    }

    #[test]
    #[should_panic]
    fn test_inclusive_mut_upper_oob_panics() {
        let mut v = array_list![1, 2, 3];
        let _ = &mut v[..=3]; // out-of-bounds: upper bound == len
    }

    #[test]
    fn test_index_mut_single_and_ranges() {
        let mut v = array_list![1, 2, 3, 4, 5];
        v[1] = 10;
        v[3..].copy_from_slice(&[40, 50]);
        v[..=0].copy_from_slice(&[0]);
        assert_eq!(v.as_slice(), &[0, 10, 3, 40, 50]);
    }
}
