// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cursor::Cursor, error::Error, port::Allocator, vec::ArrayList};

impl<T, A: Allocator> ArrayList<T, A> {
    /// A cursor at index 0.
    #[inline]
    pub fn begin(&self) -> Cursor {
        self.cursor_unchecked(0)
    }

    /// A cursor one past the last element.
    #[inline]
    pub fn end(&self) -> Cursor {
        self.cursor_unchecked(self.len)
    }

    /// A cursor at `index`; `index == len()` yields [`end`](Self::end).
    #[inline]
    pub fn cursor_at(&self, index: usize) -> Result<Cursor, Error> {
        if index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.cursor_unchecked(index))
    }

    /// Returns `true` if `cursor` was issued for the current snapshot of this
    /// list and lies within `[begin, end]`.
    #[inline]
    pub fn is_valid(&self, cursor: Cursor) -> bool {
        cursor.owner == self.owner && cursor.epoch == self.epoch && cursor.index <= self.len
    }

    /// The element a cursor denotes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if the cursor is stale, [`Error::OutOfRange`]
    /// for the end cursor.
    #[inline]
    pub fn get_at(&self, cursor: Cursor) -> Result<&T, Error> {
        let index = self.resolve(cursor)?;
        self.at(index)
    }

    /// Mutable counterpart of [`get_at`](Self::get_at).
    #[inline]
    pub fn get_at_mut(&mut self, cursor: Cursor) -> Result<&mut T, Error> {
        let index = self.resolve(cursor)?;
        self.at_mut(index)
    }

    /// Index of a valid cursor.
    #[inline]
    pub(crate) fn resolve(&self, cursor: Cursor) -> Result<usize, Error> {
        if self.is_valid(cursor) {
            Ok(cursor.index)
        } else {
            Err(Error::InvalidCursor)
        }
    }

    #[inline]
    pub(crate) fn cursor_unchecked(&self, index: usize) -> Cursor {
        Cursor::new(index, self.owner, self.epoch)
    }
}
