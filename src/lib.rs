// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `array-list`
//!
//! A `no_std`, growable, contiguous array whose memory **and element
//! lifecycles** go through a pluggable allocator, with strong failure
//! guarantees on every mutating operation.
//!
//! The core type, [`ArrayList<T, A>`], owns one block of `capacity` slots from
//! its [`Allocator`] and tracks a logical length `len ∈ 0..=capacity`. Only the
//! `[0..len)` prefix holds live elements.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You need to route allocation through your own arena, pool, or
//!   accounting allocator on stable Rust.
//! - You want every element construction and destruction to pass through that
//!   allocator as well (see [`Allocator::construct`] / [`Allocator::destroy`]).
//! - You prefer `Result`s to panics on allocation failure.
//! - You want stale positions to be detected rather than silently re-pointed.
//!
//! It may not be the best fit if you need the full breadth of `alloc::vec::Vec`
//! or cross-thread mutation.
//!
//! ## High-level semantics
//!
//! - Growth is multiplicative by 1.5 (see [`growth`]); `reserve` and
//!   `shrink_to_fit` are exact.
//! - Zero-sized element types never touch the allocator.
//! - Fallible operations return [`Error`] and leave the list **unchanged** on
//!   failure: same length, same capacity, same elements, same valid cursors.
//!   New elements are always built before existing ones are moved or the old
//!   block is released. The same holds when an element constructor panics.
//! - Trait impls that cannot return a `Result` (`Clone`, `FromIterator`,
//!   `Extend`, `From<[T; N]>`) and the [`array_list!`] macro panic on
//!   allocation failure instead.
//! - Lists whose allocators compare unequal never exchange blocks:
//!   [`ArrayList::try_swap`] and [`ArrayList::move_assign`] relocate elements
//!   into fresh blocks in that case.
//!
//! ## Positions
//!
//! A [`Cursor`] names an index in one snapshot of one list. Reallocation,
//! swapping, shifting, and removal move the list to a new snapshot; using an
//! older cursor then yields [`Error::InvalidCursor`].
//!
//! ## Range and indexing behavior
//!
//! Indexing (`v[i]`, `v[start..end]`, …) **panics** on out-of-bounds or
//! inverted ranges, exactly like built-in slices. [`ArrayList::at`] and
//! [`ArrayList::get_at`] are the checked forms.
//!
//! ## Example
//!
//! ```rust
//! use array_list::{ArrayList, Error};
//!
//! let mut v: ArrayList<u8> = ArrayList::new();
//! v.push(1)?;
//! v.extend_from_slice(&[2, 3])?;
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//!
//! let at = v.insert(v.begin() + 1, 9)?;
//! assert_eq!(v, [1, 9, 2, 3]);
//! v.erase_at(at)?;
//! assert_eq!(v, [1, 2, 3]);
//! # Ok::<(), Error>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod cursor;
mod error;
pub mod growth;
mod index;
mod iter;
mod port;
mod raw;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use cursor::Cursor;
pub use error::{AllocError, Error};
pub use iter::IntoIter;
pub use port::{Allocator, Global};
pub use vec::ArrayList;

/// Creates an [`ArrayList`] on the global heap, like `vec!`.
///
/// - `array_list![]` is empty and does not allocate.
/// - `array_list![a, b, c]` holds the given elements, capacity exactly 3.
/// - `array_list![elem; n]` holds `n` clones of `elem`, capacity exactly `n`.
///
/// # Panics
///
/// Panics if the allocation fails.
///
/// # Examples
///
/// ```rust
/// use array_list::array_list;
///
/// let v = array_list![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
/// let zeros = array_list![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! array_list {
    () => {
        $crate::ArrayList::<_, $crate::Global>::new()
    };
    ($elem:expr; $n:expr) => {
        match $crate::ArrayList::<_, $crate::Global>::from_elem($elem, $n) {
            ::core::result::Result::Ok(list) => list,
            ::core::result::Result::Err(err) => err.panic(),
        }
    };
    ($($x:expr),+ $(,)?) => {
        <$crate::ArrayList<_, $crate::Global>>::from([$($x),+])
    };
}
