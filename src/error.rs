// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `ArrayList`.
//!
//! Every fallible operation reports through [`Error`]. The type parameter `E`
//! carries the error of a caller-supplied element constructor and defaults to
//! [`Infallible`] for operations that never run one.

// Core imports
use core::convert::Infallible;

// External imports - thiserror
use thiserror::Error as ThisError;

/// Errors returned by operations on [`ArrayList`](crate::ArrayList).
///
/// Whenever one of these is returned, the list is observably unchanged: same
/// length, same capacity, same elements.
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error<E = Infallible> {
    /// The allocator could not provide a block of `size` bytes aligned to `align`.
    #[error("allocator could not provide {size} bytes aligned to {align}")]
    OutOfMemory {
        /// Requested size in bytes.
        size: usize,
        /// Requested alignment in bytes.
        align: usize,
    },
    /// A requested length or capacity exceeds [`ArrayList::max_len`](crate::ArrayList::max_len).
    #[error("requested length {requested} exceeds the maximum of {max}")]
    LengthExceeded {
        /// The length or capacity that was asked for.
        requested: usize,
        /// The largest representable element count for this element type.
        max: usize,
    },
    /// A checked access used an index outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length at the time of the access.
        len: usize,
    },
    /// A [`Cursor`](crate::Cursor) was used after the list invalidated it, or
    /// on a list that did not issue it.
    #[error("cursor is stale or belongs to another list")]
    InvalidCursor,
    /// A caller-supplied element constructor failed.
    #[error("element construction failed: {0}")]
    ElementConstruction(E),
}

impl<E> Error<E> {
    /// Re-types an error that cannot carry a construction failure.
    pub(crate) fn widen(err: Error) -> Self {
        match err {
            Error::OutOfMemory { size, align } => Error::OutOfMemory { size, align },
            Error::LengthExceeded { requested, max } => Error::LengthExceeded { requested, max },
            Error::OutOfRange { index, len } => Error::OutOfRange { index, len },
            Error::InvalidCursor => Error::InvalidCursor,
            Error::ElementConstruction(never) => match never {},
        }
    }
}

impl Error {
    /// Panics with this error's message.
    ///
    /// Backs the trait impls that cannot return a `Result` (`Clone`,
    /// `FromIterator`, `Extend`, `From<[T; N]>`).
    #[cold]
    #[inline(never)]
    #[track_caller]
    pub fn panic(self) -> ! {
        panic!("{}", self)
    }
}

/// The Allocator Port could not satisfy a request.
///
/// Allocators return this unit error; the list turns it into
/// [`Error::OutOfMemory`] with the layout it asked for.
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("memory allocation failed")]
pub struct AllocError;
