// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Position handles into an [`ArrayList`](crate::ArrayList).
//!
//! A [`Cursor`] names a slot index in one particular snapshot of one list: it
//! remembers the identity of the list that issued it and that list's
//! invalidation epoch at the time. Every list draws its identity from a
//! process-wide counter when it is constructed, so a cursor is never accepted
//! by another list, even one that reuses a freed block at the same address.
//! Operations that reallocate, swap, shift, or remove elements move the list to
//! a new epoch, after which older cursors are rejected with
//! [`Error::InvalidCursor`](crate::Error::InvalidCursor) instead of silently
//! denoting a different element.
//!
//! Cursors never borrow the list. Arithmetic on them is unchecked; a cursor
//! moved outside `[begin, end]` is simply rejected when used.
//!
//! Cursors only walk forward in the sense of `begin..end`. Reverse traversal
//! goes through the slice iterators (`list.iter().rev()`) or the owned
//! [`IntoIter`](crate::IntoIter), which is double-ended.

// Core imports
use core::{
    cmp::Ordering,
    ops::{Add, AddAssign, Sub, SubAssign},
    sync::atomic::{self, AtomicUsize},
};

/// Source of list identities. Zero is never handed out.
static NEXT_OWNER: AtomicUsize = AtomicUsize::new(1);

/// A fresh list identity, distinct from every other live list's.
#[inline]
pub(crate) fn next_owner() -> usize {
    NEXT_OWNER.fetch_add(1, atomic::Ordering::Relaxed)
}

/// A copyable, random-access position in an `ArrayList`.
///
/// Obtained from [`ArrayList::begin`](crate::ArrayList::begin),
/// [`ArrayList::end`](crate::ArrayList::end),
/// [`ArrayList::cursor_at`](crate::ArrayList::cursor_at), or returned by
/// insert/erase operations.
///
/// There is no reverse cursor; walk backwards with `list.iter().rev()`, or
/// with `next_back` on the owned iterator.
///
/// # Examples
///
/// ```rust
/// use array_list::array_list;
///
/// let mut v = array_list![1, 2, 3];
/// let at = v.begin() + 1;
/// let inserted = v.insert(at, 99).unwrap();
/// assert_eq!(v.get_at(inserted), Ok(&99));
///
/// // `at` predates the insertion and is no longer accepted.
/// assert!(!v.is_valid(at));
/// assert!(v.is_valid(inserted));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub(crate) index: usize,
    pub(crate) owner: usize,
    pub(crate) epoch: usize,
}

impl Cursor {
    #[inline]
    pub(crate) const fn new(index: usize, owner: usize, epoch: usize) -> Self {
        Self {
            index,
            owner,
            epoch,
        }
    }

    /// The slot index this cursor denotes.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if both cursors were issued for the same list snapshot,
    /// so that comparing or subtracting them is meaningful.
    #[inline]
    pub const fn same_snapshot(&self, other: &Cursor) -> bool {
        self.owner == other.owner && self.epoch == other.epoch
    }
}

impl Add<usize> for Cursor {
    type Output = Cursor;

    #[inline]
    fn add(self, n: usize) -> Cursor {
        Cursor {
            index: self.index.wrapping_add(n),
            ..self
        }
    }
}

impl AddAssign<usize> for Cursor {
    #[inline]
    fn add_assign(&mut self, n: usize) {
        *self = *self + n;
    }
}

impl Sub<usize> for Cursor {
    type Output = Cursor;

    #[inline]
    fn sub(self, n: usize) -> Cursor {
        Cursor {
            index: self.index.wrapping_sub(n),
            ..self
        }
    }
}

impl SubAssign<usize> for Cursor {
    #[inline]
    fn sub_assign(&mut self, n: usize) {
        *self = *self - n;
    }
}

/// Signed distance between two cursors of the same snapshot.
impl Sub<Cursor> for Cursor {
    type Output = isize;

    #[inline]
    fn sub(self, other: Cursor) -> isize {
        (self.index as isize).wrapping_sub(other.index as isize)
    }
}

/// Cursors order by index, and only within the same snapshot.
impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_snapshot(other).then(|| self.index.cmp(&other.index))
    }
}
