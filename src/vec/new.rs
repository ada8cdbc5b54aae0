// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    cursor::next_owner,
    error::Error,
    port::{Allocator, Global},
    raw::RawBlock,
    vec::ArrayList,
};

impl<T> ArrayList<T, Global> {
    /// Constructs an empty list on the global heap. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// Constructs an empty list with room for exactly `capacity` elements.
    ///
    /// Fails with [`Error::LengthExceeded`] above [`Self::MAX_LEN`] and with
    /// [`Error::OutOfMemory`] if the heap refuses the block.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::with_capacity_in(capacity, Global)
    }
}

impl<T, A: Allocator> ArrayList<T, A> {
    /// Constructs an empty list that will allocate from `alloc`. Does not
    /// allocate.
    #[inline]
    pub fn new_in(alloc: A) -> Self {
        Self {
            block: RawBlock::empty(),
            len: 0,
            owner: next_owner(),
            epoch: 0,
            alloc,
        }
    }

    /// Constructs an empty list with room for exactly `capacity` elements,
    /// allocated from `alloc`.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, Error> {
        let block = RawBlock::allocate_in(capacity, &alloc)?;
        Ok(Self {
            block,
            len: 0,
            owner: next_owner(),
            epoch: 0,
            alloc,
        })
    }
}

impl<T, A: Allocator + Default> Default for ArrayList<T, A> {
    /// An empty list with a default allocator handle.
    #[inline]
    fn default() -> Self {
        Self::new_in(A::default())
    }
}
