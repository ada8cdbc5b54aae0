// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, port::Allocator, raw::RawBlock, vec::ArrayList};

// Core imports
use core::mem;

impl<T, A: Allocator> ArrayList<T, A> {
    /// Ensures `capacity() >= min_capacity`.
    ///
    /// Grows to exactly `min_capacity` (no growth factor is applied), which
    /// moves every element to a new block and invalidates all cursors. Does
    /// nothing if the capacity is already sufficient.
    ///
    /// # Errors
    ///
    /// [`Error::LengthExceeded`] if `min_capacity > MAX_LEN`,
    /// [`Error::OutOfMemory`] if the allocator refuses. The list is unchanged
    /// in both cases.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<(), Error> {
        if min_capacity <= self.capacity() {
            return Ok(());
        }
        if min_capacity > Self::MAX_LEN {
            return Err(Error::LengthExceeded {
                requested: min_capacity,
                max: Self::MAX_LEN,
            });
        }
        self.reallocate(min_capacity)
    }

    /// Reserves room for at least `additional` more elements.
    #[inline]
    pub fn reserve_additional(&mut self, additional: usize) -> Result<(), Error> {
        let required = self.required_len(additional)?;
        self.reserve(required)
    }

    /// Shrinks the capacity to exactly `len()`.
    ///
    /// An empty list gives its block back and returns to the unallocated
    /// state. If the smaller block cannot be allocated the error is returned
    /// and the list keeps its current block.
    pub fn shrink_to_fit(&mut self) -> Result<(), Error> {
        if self.capacity() == self.len {
            return Ok(());
        }
        if self.len == 0 {
            let old = mem::replace(&mut self.block, RawBlock::empty());
            // SAFETY: the list is empty, so no live value sits in `old`.
            unsafe { old.release_in(&self.alloc) };
            self.invalidate();
            return Ok(());
        }
        self.reallocate(self.len)
    }
}
