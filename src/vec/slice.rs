// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{port::Allocator, vec::ArrayList};

impl<T, A: Allocator> ArrayList<T, A> {
    /// The live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `block[..len]` are live, and the
        // block pointer is non-null and aligned even when nothing is allocated.
        unsafe { core::slice::from_raw_parts(self.block.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As above; `&mut self` gives exclusive access to the elements.
        unsafe { core::slice::from_raw_parts_mut(self.block.as_ptr(), self.len) }
    }

    /// Pointer to the first slot. Dangling (but non-null and aligned) while no
    /// block is allocated; invalidated by any reallocation.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.block.as_ptr()
    }

    /// Mutable pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.block.as_ptr()
    }
}
