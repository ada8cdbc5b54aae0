// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`ArrayList`](crate::ArrayList).
//!
//! - `IntoIter<T, A>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. It owns the list's block and
//!   allocator handle; elements it skips or never yields are destroyed through
//!   that handle.
//! - `&ArrayList` and `&mut ArrayList` iterate as slices, so `.rev()` gives
//!   reverse traversal for free.

// Crate imports
use crate::{port::Allocator, raw::RawBlock, vec::ArrayList};

// Core imports
use core::{
    fmt,
    iter::FusedIterator,
    mem::{self, ManuallyDrop},
    ptr,
};

/// Owned iterator returned by `ArrayList::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T, A: Allocator> {
    block: RawBlock<T>,
    alloc: A,
    front: usize,
    back: usize, // exclusive
}

// SAFETY: the iterator owns its remaining elements and the allocator handle.
unsafe impl<T: Send, A: Allocator + Send> Send for IntoIter<T, A> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for IntoIter<T, A> {}

impl<T, A: Allocator> IntoIter<T, A> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is live and untouched by the iterator so far.
        unsafe {
            core::slice::from_raw_parts(self.block.slot(self.front).as_ptr(), self.back - self.front)
        }
    }

    /// Reads out slot `index`, which the caller has just removed from
    /// `[front, back)`.
    #[inline]
    unsafe fn read_slot(&self, index: usize) -> T {
        // SAFETY: forwarded from the caller.
        unsafe { self.block.slot(index).as_ptr().read() }
    }

    /// Destroys `[from, to)`, which the caller has just removed from
    /// `[front, back)`.
    unsafe fn destroy_range(&self, from: usize, to: usize) {
        for index in from..to {
            // SAFETY: forwarded from the caller.
            unsafe { self.alloc.destroy(self.block.slot(index)) };
        }
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was the first live slot and is now outside the range.
            Some(unsafe { self.read_slot(i) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip_to = self.front + n.min(rem); // n.min(rem) <= back - front
        let from = mem::replace(&mut self.front, skip_to);
        // SAFETY: `[from, skip_to)` just left the live range.
        unsafe { self.destroy_range(from, skip_to) };
        self.next()
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: the old last live slot, now outside the range.
            Some(unsafe { self.read_slot(self.back) })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip_to = self.back - n.min(rem);
        let to = mem::replace(&mut self.back, skip_to);
        // SAFETY: `[skip_to, to)` just left the live range.
        unsafe { self.destroy_range(skip_to, to) };
        self.next_back()
    }
}
impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}
impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let (from, to) = (self.front, self.back);
        self.front = to;
        // SAFETY: the remaining elements are never yielded.
        unsafe { self.destroy_range(from, to) };
        let block = mem::replace(&mut self.block, RawBlock::empty());
        // SAFETY: every slot is dead now; the handle is the one the block
        // came from.
        unsafe { block.release_in(&self.alloc) };
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a ArrayList<T, A> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, A: Allocator> IntoIterator for &'a mut ArrayList<T, A> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, A: Allocator> IntoIterator for ArrayList<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;
    fn into_iter(self) -> Self::IntoIter {
        let mut list = ManuallyDrop::new(self);
        let block = mem::replace(&mut list.block, RawBlock::empty());
        // SAFETY: `list` is never dropped, so the handle is moved out once.
        let alloc = unsafe { ptr::read(&list.alloc) };
        IntoIter {
            block,
            alloc,
            front: 0,
            back: list.len,
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        ArrayList, array_list,
        testing::{Tally, TestAlloc},
    };
    use std::{cell::Cell, format, rc::Rc, string::String, vec::Vec};

    #[test]
    fn test_double_ended_and_nth() {
        let v = array_list![10, 20, 30, 40];
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.nth(1), Some(30));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_into_iter_nth_back_sequence() {
        let v = array_list![1, 2, 3, 4, 5];
        let mut it = v.into_iter();
        assert_eq!(it.nth_back(0), Some(5));
        assert_eq!(it.nth_back(1), Some(3)); // skip 4 from back, take 3
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
    }

    #[test]
    #[allow(clippy::iter_nth_zero)]
    fn test_size_hint_tracks_consumption() {
        let v = array_list![10, 20, 30, 40];
        let mut it = v.into_iter();
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.len(), 2);
        assert_eq!(it.nth(0), Some(20));
        assert_eq!(it.size_hint(), (1, Some(1)));
        assert_eq!(it.next(), Some(30));
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_nth_past_end_drains() {
        let v = array_list![10, 20, 30];
        let mut it = v.into_iter();
        assert_eq!(it.nth_back(3), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));

        let mut it = array_list![1, 2].into_iter();
        assert_eq!(it.nth(2), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_skipped_and_unyielded_elements_are_destroyed() {
        let alloc = TestAlloc::new(1);
        let drops = Rc::new(Cell::new(0));
        let mut v = ArrayList::new_in(alloc.clone());
        for _ in 0..6 {
            v.push(Tally::new(&drops)).unwrap();
        }
        let mut it = v.into_iter();
        drop(it.nth(1)); // destroys 1, yields 1
        assert_eq!(drops.get(), 2);
        drop(it.nth_back(1)); // destroys 1, yields 1
        assert_eq!(drops.get(), 4);
        assert_eq!(alloc.stats().destroys, 2);
        drop(it);
        assert_eq!(drops.get(), 6);
        assert_eq!(alloc.stats().destroys, 4);
        assert_eq!(alloc.stats().live_bytes, 0);
    }

    #[test]
    fn test_into_iter_zero_sized_type() {
        let v = array_list![(); 3];
        let it = v.into_iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.count(), 3);
    }

    #[test]
    fn test_into_iter_empty() {
        let v: ArrayList<u8> = ArrayList::new();
        let mut it = v.into_iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_as_slice_and_debug() {
        let mut it = array_list![1, 2, 3].into_iter();
        it.next();
        assert_eq!(it.as_slice(), &[2, 3]);
        assert_eq!(format!("{it:?}"), "IntoIter([2, 3])");
    }

    #[test]
    fn test_borrowing_iteration() {
        let mut v = array_list![String::from("a"), String::from("b")];
        for s in &mut v {
            s.push('!');
        }
        let joined: Vec<&str> = (&v).into_iter().rev().map(|s| s.as_str()).collect();
        assert_eq!(joined, ["b!", "a!"]);
        let owned: Vec<String> = v.into_iter().collect();
        assert_eq!(owned, ["a!", "b!"]);
    }
}
