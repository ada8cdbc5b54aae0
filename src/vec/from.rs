// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    port::{Allocator, Global},
    vec::{ArrayList, engine::infallible},
};

// Core imports
use core::iter;

impl<T: Clone> ArrayList<T, Global> {
    /// Builds a list of `count` clones of `value`, with capacity exactly `count`.
    #[inline]
    pub fn from_elem(value: T, count: usize) -> Result<Self, Error> {
        Self::from_elem_in(value, count, Global)
    }

    /// Builds a list holding clones of `src`, with capacity exactly `src.len()`.
    #[inline]
    pub fn from_slice(src: &[T]) -> Result<Self, Error> {
        Self::from_slice_in(src, Global)
    }
}

impl<T> ArrayList<T, Global> {
    /// Collects `iter` into a new list, reporting allocation failure instead of
    /// panicking.
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        Self::try_from_iter_in(iter, Global)
    }
}

impl<T, A: Allocator> ArrayList<T, A> {
    /// [`from_elem`](ArrayList::from_elem) with an explicit allocator.
    ///
    /// If a clone panics, the clones already made are destroyed and the block
    /// is released before the panic propagates.
    pub fn from_elem_in(value: T, count: usize, alloc: A) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut list = Self::with_capacity_in(count, alloc)?;
        list.append_from(count, iter::repeat_n(value, count).map(infallible))?;
        Ok(list)
    }

    /// [`from_slice`](ArrayList::from_slice) with an explicit allocator.
    pub fn from_slice_in(src: &[T], alloc: A) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut list = Self::with_capacity_in(src.len(), alloc)?;
        list.append_from(src.len(), src.iter().cloned().map(infallible))?;
        Ok(list)
    }

    /// [`try_from_iter`](ArrayList::try_from_iter) with an explicit allocator.
    ///
    /// The iterator's lower size bound is reserved up front; anything past it
    /// grows the list by the usual policy.
    pub fn try_from_iter_in<I: IntoIterator<Item = T>>(iter: I, alloc: A) -> Result<Self, Error> {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity_in(iter.size_hint().0, alloc)?;
        for value in iter {
            list.push(value)?;
        }
        Ok(list)
    }
}

impl<T, A: Allocator + Default, const N: usize> From<[T; N]> for ArrayList<T, A> {
    /// # Panics
    ///
    /// Panics if the allocator cannot provide `N` slots.
    fn from(src: [T; N]) -> Self {
        match Self::try_from_iter_in(src, A::default()) {
            Ok(list) => list,
            Err(err) => err.panic(),
        }
    }
}

impl<T: Clone, A: Allocator + Default> TryFrom<&[T]> for ArrayList<T, A> {
    type Error = Error;

    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice_in(src, A::default())
    }
}

impl<T, A: Allocator + Default> FromIterator<T> for ArrayList<T, A> {
    /// # Panics
    ///
    /// Panics if the allocator fails; use
    /// [`try_from_iter`](ArrayList::try_from_iter) to handle that instead.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        match Self::try_from_iter_in(iter, A::default()) {
            Ok(list) => list,
            Err(err) => err.panic(),
        }
    }
}
