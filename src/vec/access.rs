// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, port::Allocator, vec::ArrayList};

impl<T, A: Allocator> ArrayList<T, A> {
    /// Checked access: the element at `index`, or [`Error::OutOfRange`].
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice().get(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Checked mutable access.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice().get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    /// The first element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The last element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Mutable [`front`](Self::front).
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Mutable [`back`](Self::back).
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }
}
