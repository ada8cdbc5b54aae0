// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `ArrayList` type, its invariants, and its inherent API.
//!
//! Operations are split by family into the submodules below; this file holds
//! the type itself, the cheap accessors, and the comparison and conversion
//! trait impls.

// Invariants:
// - `0 <= len <= block.capacity()` always holds.
// - Slots `block[..len]` hold live `T` values; `block[len..]` are raw.
// - `block` was allocated by `alloc` (or a handle equal to it) and is released
//   through it exactly once.
// - `owner` is unique to this list for its whole life; it never changes.
// - `epoch` changes whenever the block is replaced or exchanged, or elements
//   are shifted or removed. It never goes back to an earlier value for the
//   same list.
// - Every public method either upholds these on return or, when it fails,
//   leaves `len`, the block and the elements as they were.

mod access;
mod assign;
mod engine;
mod erase;
mod extend;
mod from;
mod insert;
mod lifecycle;
mod new;
mod pop;
mod position;
mod push;
mod reserve;
mod resize;
mod retain;
mod slice;
mod swap;

// Crate imports
use crate::{
    growth::max_len,
    port::{Allocator, Global},
    raw::RawBlock,
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable, contiguous array whose memory and element lifecycles go through
/// a pluggable [`Allocator`].
///
/// `ArrayList<T, A>` owns one block of `capacity` slots obtained from its
/// allocator handle; the first `len` slots hold live elements. When an
/// operation needs more room, the list grows by a factor of 1.5 (see
/// [`growth`](crate::growth)), builds the new state in a fresh block, and only
/// then releases the old one.
///
/// # Failure guarantees
///
/// Fallible operations return [`Error`](crate::Error) and leave the list
/// exactly as it was on failure: same length, same capacity, same elements.
/// This also holds when an element constructor panics (for example a `Clone`
/// impl during [`resize`](ArrayList::resize) or
/// [`try_clone`](ArrayList::try_clone)).
///
/// Trait impls that cannot return a `Result` (`Clone`, `FromIterator`,
/// `Extend`, `From<[T; N]>`) panic on allocation failure instead.
///
/// # Positions
///
/// Insert and erase operations take [`Cursor`](crate::Cursor)s, which are
/// checked against the list's current snapshot. Plain iteration goes through
/// the slice API (`iter()`, `iter().rev()`, ...) via `Deref`.
///
/// # Indexing
///
/// `v[i]` and range indexing panic when out of bounds, like slices.
/// [`at`](ArrayList::at) is the checked counterpart.
///
/// # Examples
///
/// ```rust
/// use array_list::{ArrayList, Error};
///
/// fn example() -> Result<(), Error> {
///     let mut v: ArrayList<u32> = ArrayList::with_capacity(2)?;
///     v.push(1)?;
///     v.push(2)?;
///     v.push(3)?; // grows to 3 slots
///     assert_eq!(v, [1, 2, 3]);
///     assert_eq!(v.capacity(), 3);
///
///     let first = v.begin();
///     v.erase(first, first + 2)?;
///     assert_eq!(v, [3]);
///     assert_eq!(v.at(5), Err(Error::OutOfRange { index: 5, len: 1 }));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct ArrayList<T, A: Allocator = Global> {
    pub(crate) block: RawBlock<T>,
    pub(crate) len: usize,
    pub(crate) owner: usize,
    pub(crate) epoch: usize,
    pub(crate) alloc: A,
}

// SAFETY: the list owns its elements and its allocator handle outright.
unsafe impl<T: Send, A: Allocator + Send> Send for ArrayList<T, A> {}
// SAFETY: shared access only hands out `&T` and `&A`.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for ArrayList<T, A> {}

impl<T, A: Allocator> ArrayList<T, A> {
    /// The largest number of elements any `ArrayList<T, _>` can hold.
    pub const MAX_LEN: usize = max_len::<T>();

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of reserved slots, live or not.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.block.capacity()
    }

    /// Returns `capacity - len`, the number of pushes that will not reallocate.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.block.capacity() - self.len
    }

    /// Returns [`Self::MAX_LEN`].
    #[inline]
    pub const fn max_len(&self) -> usize {
        Self::MAX_LEN
    }

    /// Returns the allocator handle.
    #[inline]
    pub const fn allocator(&self) -> &A {
        &self.alloc
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for ArrayList<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Element-wise equality; lists of different lengths compare unequal without
/// looking at any element.
impl<T, U, A, B> PartialEq<ArrayList<U, B>> for ArrayList<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &ArrayList<U, B>) -> bool {
        self.len == other.len && self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq<U>, U, A: Allocator> PartialEq<[U]> for ArrayList<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq<U>, U, A: Allocator> PartialEq<&[U]> for ArrayList<T, A> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T: PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for ArrayList<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, A: Allocator> Eq for ArrayList<T, A> {}

impl<T: PartialOrd, A: Allocator> PartialOrd for ArrayList<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Ord, A: Allocator> Ord for ArrayList<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: Hash, A: Allocator> Hash for ArrayList<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, A: Allocator> Deref for ArrayList<T, A> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, A: Allocator> DerefMut for ArrayList<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> AsRef<[T]> for ArrayList<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, A: Allocator> AsMut<[T]> for ArrayList<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, A: Allocator> Borrow<[T]> for ArrayList<T, A> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, A: Allocator> BorrowMut<[T]> for ArrayList<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
