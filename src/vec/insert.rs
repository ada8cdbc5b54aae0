// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positional insertion.
//!
//! Every insert first resolves its cursor, then appends the new elements
//! through the engine (which builds them before touching existing storage) and
//! finally rotates them into place. Rotation moves values by swapping and
//! cannot fail, so once the new elements exist the operation always completes.

// Crate imports
use crate::{
    cursor::Cursor,
    error::Error,
    port::Allocator,
    vec::{ArrayList, engine::infallible},
};

// Core imports
use core::{convert::Infallible, iter};

impl<T, A: Allocator> ArrayList<T, A> {
    /// Inserts `value` before `at` and returns a cursor to it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if `at` is stale; allocation errors if the list
    /// must grow. The list is unchanged on error.
    pub fn insert(&mut self, at: Cursor, value: T) -> Result<Cursor, Error> {
        let index = self.resolve(at)?;
        let old_len = self.len;
        self.push(value)?;
        Ok(self.rotate_into_place(index, old_len))
    }

    /// Inserts the value returned by `f` before `at`.
    ///
    /// `f` runs only after the cursor has been checked and storage secured. If
    /// `f` panics the list is unchanged.
    #[inline]
    pub fn emplace<F: FnOnce() -> T>(&mut self, at: Cursor, f: F) -> Result<Cursor, Error> {
        self.try_emplace(at, || Ok::<T, Infallible>(f()))
    }

    /// Like [`emplace`](Self::emplace) for a constructor that can fail.
    pub fn try_emplace<E, F>(&mut self, at: Cursor, f: F) -> Result<Cursor, Error<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let index = self.resolve(at).map_err(Error::<E>::widen)?;
        let old_len = self.len;
        self.append_from(1, iter::once_with(f))?;
        Ok(self.rotate_into_place(index, old_len))
    }

    /// Inserts `count` clones of `value` before `at` and returns a cursor to
    /// the first of them (or `at`'s index if `count == 0`).
    pub fn insert_n(&mut self, at: Cursor, count: usize, value: T) -> Result<Cursor, Error>
    where
        T: Clone,
    {
        let index = self.resolve(at)?;
        let old_len = self.len;
        self.append_from(count, iter::repeat_n(value, count).map(infallible))?;
        Ok(self.rotate_into_place(index, old_len))
    }

    /// Inserts clones of `src` before `at`, preserving their order.
    pub fn insert_slice(&mut self, at: Cursor, src: &[T]) -> Result<Cursor, Error>
    where
        T: Clone,
    {
        let index = self.resolve(at)?;
        let old_len = self.len;
        self.append_from(src.len(), src.iter().cloned().map(infallible))?;
        Ok(self.rotate_into_place(index, old_len))
    }

    /// Inserts every item of `iter` before `at`, preserving their order.
    ///
    /// The items are collected into a scratch list from the same allocator
    /// first, so a failure midway leaves this list untouched.
    pub fn insert_iter<I>(&mut self, at: Cursor, iter: I) -> Result<Cursor, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let index = self.resolve(at)?;
        let old_len = self.len;
        let mut staged = Self::try_from_iter_in(iter, self.alloc.clone())?;
        self.append_list(&mut staged)?;
        Ok(self.rotate_into_place(index, old_len))
    }

    /// Moves the elements appended past `old_len` to start at `index`.
    fn rotate_into_place(&mut self, index: usize, old_len: usize) -> Cursor {
        let added = self.len - old_len;
        if added > 0 && index < old_len {
            self.as_mut_slice()[index..].rotate_right(added);
            self.invalidate();
        }
        self.cursor_unchecked(index)
    }
}
