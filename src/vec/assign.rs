// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whole-content replacement.
//!
//! Each `assign_*` builds the replacement contents in a new list that uses a
//! clone of this list's allocator handle, and only then drops the old
//! contents. The list keeps its allocator.

// Crate imports
use crate::{error::Error, port::Allocator, vec::ArrayList};

impl<T, A: Allocator> ArrayList<T, A> {
    /// Replaces the contents with `count` clones of `value`.
    pub fn assign_n(&mut self, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        let fresh = Self::from_elem_in(value, count, self.alloc.clone())?;
        self.adopt(fresh);
        Ok(())
    }

    /// Replaces the contents with clones of `src`.
    pub fn assign_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        let fresh = Self::from_slice_in(src, self.alloc.clone())?;
        self.adopt(fresh);
        Ok(())
    }

    /// Replaces the contents with the items of `iter`.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let fresh = Self::try_from_iter_in(iter, self.alloc.clone())?;
        self.adopt(fresh);
        Ok(())
    }
}
