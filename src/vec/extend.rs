// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    port::Allocator,
    vec::{ArrayList, engine::infallible},
};

impl<T, A: Allocator> Extend<T> for ArrayList<T, A> {
    /// # Panics
    ///
    /// Panics if the allocator fails; see
    /// [`try_extend_from_iter`](ArrayList::try_extend_from_iter).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(err) = self.try_extend_from_iter(iter) {
            err.panic()
        }
    }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for ArrayList<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        if let Err(err) = self.try_extend_from_iter(iter.into_iter().copied()) {
            err.panic()
        }
    }
}

impl<T, A: Allocator> ArrayList<T, A> {
    /// Appends clones of every element of `src`.
    ///
    /// All or nothing: on allocation failure or a panicking clone the list is
    /// unchanged.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.append_from(src.len(), src.iter().cloned().map(infallible))?;
        Ok(())
    }

    /// Appends every item of `iter` without panicking on allocation failure.
    ///
    /// Semantics:
    /// - All-or-nothing: items are first collected into a scratch list from
    ///   the same allocator, then moved over in one step. On error `self` is
    ///   left unchanged.
    /// - The source iterator may be partially consumed on error.
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let mut staged = Self::try_from_iter_in(iter, self.alloc.clone())?;
        self.append_list(&mut staged)
    }
}
