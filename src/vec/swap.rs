// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, port::Allocator, raw::RawBlock, vec::ArrayList};

// Core imports
use core::mem;

impl<T, A: Allocator> ArrayList<T, A> {
    /// Exchanges the contents of two lists. Each list keeps its own allocator.
    ///
    /// With equal allocators the blocks are exchanged in O(1). Otherwise both
    /// replacement blocks are allocated first, each from the receiving list's
    /// allocator and sized exactly to its new length, and the elements are
    /// relocated crosswise. Cursors into either list are invalidated.
    ///
    /// # Errors
    ///
    /// If either replacement block cannot be allocated, nothing has moved and
    /// both lists are unchanged.
    pub fn try_swap(&mut self, other: &mut Self) -> Result<(), Error> {
        if self.alloc == other.alloc {
            mem::swap(&mut self.block, &mut other.block);
            mem::swap(&mut self.len, &mut other.len);
        } else {
            let mut mine = RawBlock::allocate_in(other.len, &self.alloc)?;
            let mut theirs = match RawBlock::allocate_in(self.len, &other.alloc) {
                Ok(block) => block,
                Err(err) => {
                    // SAFETY: `mine` is new and holds nothing.
                    unsafe { mine.release_in(&self.alloc) };
                    return Err(err);
                }
            };
            // SAFETY: both sources are live for their lengths, both targets are
            // new blocks sized to match.
            unsafe {
                mine.relocate_from(0, &other.block, 0, other.len);
                theirs.relocate_from(0, &self.block, 0, self.len);
            }
            let old_mine = mem::replace(&mut self.block, mine);
            let old_theirs = mem::replace(&mut other.block, theirs);
            // SAFETY: every live value was relocated out of the old blocks,
            // each of which goes back to the allocator that made it.
            unsafe {
                old_mine.release_in(&self.alloc);
                old_theirs.release_in(&other.alloc);
            }
            mem::swap(&mut self.len, &mut other.len);
        }
        self.invalidate();
        other.invalidate();
        Ok(())
    }
}
