// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reallocate-and-migrate machinery shared by every growing operation.
//!
//! New elements are always built first: either in the spare tail of the
//! current block, or in a freshly allocated block while the current one is left
//! untouched. Only once every new element exists are the old elements moved
//! over and the old block released. A failure or panic before that point
//! destroys what was built and leaves the list as it was.

// Crate imports
use crate::{
    error::Error,
    growth::compute_growth,
    port::Allocator,
    raw::RawBlock,
    vec::ArrayList,
};

// Core imports
use core::{
    convert::Infallible,
    mem::{self, ManuallyDrop},
};

/// Lifts a plain value into an element source that cannot fail.
#[inline]
pub(crate) fn infallible<T>(value: T) -> Result<T, Infallible> {
    Ok(value)
}

impl<T, A: Allocator> ArrayList<T, A> {
    /// Moves the list to a new epoch; every cursor issued so far goes stale.
    #[inline]
    pub(crate) fn invalidate(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// `len + additional`, or `LengthExceeded` if that passes `MAX_LEN`.
    #[inline]
    pub(crate) fn required_len(&self, additional: usize) -> Result<usize, Error> {
        match self.len.checked_add(additional) {
            Some(required) if required <= Self::MAX_LEN => Ok(required),
            _ => Err(Error::LengthExceeded {
                requested: self.len.saturating_add(additional),
                max: Self::MAX_LEN,
            }),
        }
    }

    #[inline]
    pub(crate) fn grown_capacity(&self, required: usize) -> Result<usize, Error> {
        compute_growth(self.capacity(), required, Self::MAX_LEN)
    }

    /// Relocates the live elements into `fresh`, releases the current block and
    /// installs `fresh` in its place.
    ///
    /// # Safety
    ///
    /// `fresh` must come from an allocator equal to `self.alloc`, have at least
    /// `len` slots, and its first `len` slots must be raw.
    pub(crate) unsafe fn install(&mut self, mut fresh: RawBlock<T>) {
        debug_assert!(fresh.capacity() >= self.len);
        // SAFETY: `[0, len)` is live in the current block and raw in `fresh`.
        unsafe { fresh.relocate_from(0, &self.block, 0, self.len) };
        let old = mem::replace(&mut self.block, fresh);
        // SAFETY: every live value was just moved out of `old`.
        unsafe { old.release_in(&self.alloc) };
        self.invalidate();
    }

    /// Replaces the block with one of exactly `capacity` slots.
    pub(crate) fn reallocate(&mut self, capacity: usize) -> Result<(), Error> {
        let fresh = RawBlock::allocate_in(capacity, &self.alloc)?;
        // SAFETY: `fresh` is new, from our allocator, and callers ask for at
        // least `len` slots.
        unsafe { self.install(fresh) };
        Ok(())
    }

    /// Makes room for `additional` more elements using the growth policy.
    pub(crate) fn grow_for(&mut self, additional: usize) -> Result<(), Error> {
        let required = self.required_len(additional)?;
        if required > self.capacity() {
            let capacity = self.grown_capacity(required)?;
            self.reallocate(capacity)?;
        }
        Ok(())
    }

    /// Constructs up to `count` values pulled from `source` after the last
    /// element and returns how many were appended (fewer than `count` only if
    /// `source` runs dry).
    ///
    /// If the values do not fit, a block sized by the growth policy is staged
    /// and the new values are built there; the existing elements move over only
    /// once all of them exist. On `Err` from `source`, or a panic while pulling
    /// from it, the list is left exactly as it was.
    pub(crate) fn append_from<E, I>(&mut self, count: usize, source: I) -> Result<usize, Error<E>>
    where
        I: Iterator<Item = Result<T, E>>,
    {
        let required = self.required_len(count).map_err(Error::<E>::widen)?;
        let staged = if required > self.capacity() {
            let capacity = self.grown_capacity(required).map_err(Error::<E>::widen)?;
            Some(RawBlock::allocate_in(capacity, &self.alloc).map_err(Error::<E>::widen)?)
        } else {
            None
        };

        let mut tail = TailGuard {
            list: self,
            staged,
            built: 0,
        };
        for item in source.take(count) {
            tail.construct(item.map_err(Error::ElementConstruction)?);
        }
        Ok(tail.commit())
    }

    /// Moves every element of `other` to the end of `self`, leaving `other`
    /// empty. On failure neither list changes.
    pub(crate) fn append_list(&mut self, other: &mut Self) -> Result<(), Error> {
        let count = other.len;
        if count == 0 {
            return Ok(());
        }
        self.grow_for(count)?;
        // SAFETY: `grow_for` reserved `count` raw slots past `len`; `other`
        // holds `count` live values and gives them up below.
        unsafe { self.block.relocate_from(self.len, &other.block, 0, count) };
        other.len = 0;
        other.invalidate();
        self.len += count;
        Ok(())
    }

    /// Replaces the whole state with `fresh`, dropping the old elements and
    /// block. The list keeps its identity and the epoch keeps moving forward.
    pub(crate) fn adopt(&mut self, mut fresh: Self) {
        let (owner, epoch) = (self.owner, self.epoch);
        mem::swap(self, &mut fresh);
        self.owner = owner;
        self.epoch = epoch;
        self.invalidate();
        // `fresh` now owns the previous contents.
        drop(fresh);
    }
}

/// Elements built past `len` but not yet committed.
///
/// Dropping the guard (on error or unwind) destroys them and releases the
/// staged block, if any.
struct TailGuard<'a, T, A: Allocator> {
    list: &'a mut ArrayList<T, A>,
    staged: Option<RawBlock<T>>,
    built: usize,
}

impl<T, A: Allocator> TailGuard<'_, T, A> {
    #[inline]
    fn target(&self) -> &RawBlock<T> {
        self.staged.as_ref().unwrap_or(&self.list.block)
    }

    #[inline]
    fn construct(&mut self, value: T) {
        let slot = self.target().slot(self.list.len + self.built);
        // SAFETY: `append_from` sized the target for `len + count` slots and
        // this slot is past every live and built value.
        unsafe { self.list.alloc.construct(slot, value) };
        self.built += 1;
    }

    fn commit(self) -> usize {
        let mut this = ManuallyDrop::new(self);
        let built = this.built;
        if let Some(fresh) = this.staged.take() {
            // SAFETY: `fresh` came from the list's allocator and its first
            // `len` slots are raw; the built values sit right after them.
            unsafe { this.list.install(fresh) };
        }
        this.list.len += built;
        built
    }
}

impl<T, A: Allocator> Drop for TailGuard<'_, T, A> {
    fn drop(&mut self) {
        let base = self.list.len;
        {
            let target = self.staged.as_ref().unwrap_or(&self.list.block);
            for i in 0..self.built {
                // SAFETY: slots `base..base + built` hold values built by this
                // guard and never handed to the list.
                unsafe { self.list.alloc.destroy(target.slot(base + i)) };
            }
        }
        if let Some(staged) = self.staged.take() {
            // SAFETY: every value built in `staged` was destroyed above.
            unsafe { staged.release_in(&self.list.alloc) };
        }
    }
}
