// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    port::Allocator,
    vec::{ArrayList, engine::infallible},
};

// Core imports
use core::iter;

impl<T, A: Allocator> ArrayList<T, A> {
    /// Resizes to `new_len`, destroying the excess or appending clones of
    /// `value`.
    ///
    /// Growing past capacity uses the growth policy. If a clone panics, or the
    /// allocator fails, the list is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_list::array_list;
    ///
    /// let mut v = array_list![1, 2];
    /// v.resize(4, 0).unwrap();
    /// assert_eq!(v, [1, 2, 0, 0]);
    /// v.resize(1, 0).unwrap();
    /// assert_eq!(v, [1]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        let count = new_len - self.len;
        self.append_from(count, iter::repeat_n(value, count).map(infallible))?;
        Ok(())
    }

    /// Resizes to `new_len`, filling new slots with values returned by `f`.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) -> Result<(), Error> {
        self.try_resize_with(new_len, || infallible(f()))
    }

    /// Resizes to `new_len` with a fallible filler. The first `Err` from `f`
    /// aborts the whole resize and comes back as
    /// [`Error::ElementConstruction`].
    pub fn try_resize_with<E, F>(&mut self, new_len: usize, f: F) -> Result<(), Error<E>>
    where
        F: FnMut() -> Result<T, E>,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        let count = new_len - self.len;
        self.append_from(count, iter::repeat_with(f))?;
        Ok(())
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    #[inline]
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }
}
