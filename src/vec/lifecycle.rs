// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Copy, move and teardown.
//!
//! A block may only change hands between lists whose allocator handles
//! compare equal. Otherwise the elements are relocated into a block from the
//! receiving list's allocator.

// Crate imports
use crate::{error::Error, port::Allocator, raw::RawBlock, vec::ArrayList};

// Core imports
use core::mem;

impl<T, A: Allocator> Drop for ArrayList<T, A> {
    fn drop(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        for index in 0..len {
            // SAFETY: `[0, len)` was live and is no longer counted.
            unsafe { self.alloc.destroy(self.block.slot(index)) };
        }
        let block = mem::replace(&mut self.block, RawBlock::empty());
        // SAFETY: every element was destroyed above.
        unsafe { block.release_in(&self.alloc) };
    }
}

impl<T: Clone, A: Allocator> ArrayList<T, A> {
    /// Clones the list into a block of exactly `len()` slots from a clone of
    /// this list's allocator.
    #[inline]
    pub fn try_clone(&self) -> Result<Self, Error> {
        self.try_clone_in(self.alloc.clone())
    }

    /// Clones the list into a block from `alloc`.
    #[inline]
    pub fn try_clone_in<B: Allocator>(&self, alloc: B) -> Result<ArrayList<T, B>, Error> {
        ArrayList::from_slice_in(self.as_slice(), alloc)
    }

    /// Copy-assignment: replaces the contents with clones of `source`.
    ///
    /// The copy is built completely, in a block from this list's own
    /// allocator, before the old contents are dropped. On error or a panicking
    /// clone the list is unchanged.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), Error> {
        let fresh = Self::from_slice_in(source.as_slice(), self.alloc.clone())?;
        self.adopt(fresh);
        Ok(())
    }
}

impl<T: Clone, A: Allocator> Clone for ArrayList<T, A> {
    /// # Panics
    ///
    /// Panics if the allocator fails; see [`try_clone`](ArrayList::try_clone).
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(list) => list,
            Err(err) => err.panic(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.try_clone_from(source) {
            err.panic()
        }
    }
}

impl<T, A: Allocator> ArrayList<T, A> {
    /// Move-assignment: takes every element of `source`, dropping this list's
    /// previous contents. `source` is left empty and its cursors invalidated.
    ///
    /// With equal allocators the block itself changes hands in O(1). Otherwise
    /// the elements are relocated into a block of exactly `source.len()` slots
    /// from this list's allocator, and `source` keeps its (now empty) block.
    ///
    /// # Errors
    ///
    /// Only the unequal-allocator path allocates; if that fails both lists are
    /// unchanged.
    pub fn move_assign(&mut self, source: &mut Self) -> Result<(), Error> {
        let fresh = if self.alloc == source.alloc {
            let block = mem::replace(&mut source.block, RawBlock::empty());
            let len = mem::replace(&mut source.len, 0);
            Self {
                block,
                len,
                owner: self.owner,
                epoch: 0,
                alloc: self.alloc.clone(),
            }
        } else {
            let mut block = RawBlock::allocate_in(source.len, &self.alloc)?;
            // SAFETY: `source[..len]` is live and `block` is new with `len` slots.
            unsafe { block.relocate_from(0, &source.block, 0, source.len) };
            let len = mem::replace(&mut source.len, 0);
            Self {
                block,
                len,
                owner: self.owner,
                epoch: 0,
                alloc: self.alloc.clone(),
            }
        };
        source.invalidate();
        self.adopt(fresh);
        Ok(())
    }

    /// Move-construction with an explicit allocator: returns a new list using
    /// `alloc` that holds every element of `self`, leaving `self` empty.
    ///
    /// Follows [`move_assign`](Self::move_assign): O(1) when `alloc` equals
    /// this list's allocator, element relocation otherwise.
    pub fn relocate_in(&mut self, alloc: A) -> Result<Self, Error> {
        let mut moved = Self::new_in(alloc);
        moved.move_assign(self)?;
        Ok(moved)
    }
}
