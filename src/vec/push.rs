// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, port::Allocator, vec::ArrayList};

// Core imports
use core::{convert::Infallible, iter};

impl<T, A: Allocator> ArrayList<T, A> {
    /// Appends `value`, growing by the growth policy if the list is full.
    ///
    /// Cursors stay valid unless the list had to grow. On error `value` is
    /// dropped and the list is unchanged.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len == self.capacity() {
            self.grow_for(1)?;
        }
        // SAFETY: `len < capacity` after the growth check, so the slot is raw.
        unsafe { self.alloc.construct(self.block.slot(self.len), value) };
        self.len += 1;
        Ok(())
    }

    /// Appends the value returned by `f`.
    ///
    /// Storage is secured before `f` runs; if the list must grow, the value is
    /// built straight into the new block and the existing elements move over
    /// afterwards. If `f` panics the list is unchanged.
    #[inline]
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, f: F) -> Result<(), Error> {
        self.try_emplace_back(|| Ok::<T, Infallible>(f()))
    }

    /// Like [`emplace_back`](Self::emplace_back) for a constructor that can
    /// fail; its error comes back as [`Error::ElementConstruction`] with the
    /// list unchanged.
    pub fn try_emplace_back<E, F>(&mut self, f: F) -> Result<(), Error<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.append_from(1, iter::once_with(f))?;
        Ok(())
    }
}
