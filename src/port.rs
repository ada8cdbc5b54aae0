// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Allocator Port.
//!
//! [`ArrayList`](crate::ArrayList) never embeds an allocation strategy. It asks
//! an [`Allocator`] for raw blocks and routes every element construction and
//! destruction through it, so a port can observe, account for, or redirect
//! element lifecycles as well as memory.
//!
//! Allocator handles are values. Two handles that compare equal must be able to
//! release each other's blocks; the list relies on that to decide whether a
//! swap or move may hand a block over wholesale.

// Core imports
use core::{alloc::Layout, ptr::NonNull};

// Crate imports
use crate::error::AllocError;

/// Raw memory and element lifecycle capability consumed by `ArrayList`.
///
/// # Safety
///
/// Implementors must return blocks that are valid for reads and writes of
/// `layout.size()` bytes, aligned to `layout.align()`, and that stay valid
/// until passed back to [`deallocate`](Allocator::deallocate) on this handle or
/// on any handle comparing equal to it.
pub unsafe trait Allocator: Clone + PartialEq {
    /// Allocates a block for `layout`. `layout.size()` is never zero.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Releases a block. Never fails.
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate` on this handle (or an equal one) with
    /// exactly this `layout`, and must not be used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Moves `value` into the raw slot `slot`.
    ///
    /// # Safety
    ///
    /// `slot` must be valid for writes, aligned, and hold no live value.
    #[inline]
    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
        // SAFETY: forwarded from the caller.
        unsafe { slot.as_ptr().write(value) }
    }

    /// Runs the destructor of the live value in `slot`, leaving raw memory.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live value that is not used again.
    #[inline]
    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        // SAFETY: forwarded from the caller.
        unsafe { core::ptr::drop_in_place(slot.as_ptr()) }
    }
}

/// The global heap, via the `alloc` crate.
///
/// All `Global` handles are interchangeable and compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Global;

// SAFETY: blocks come straight from the global allocator, which any `Global`
// handle may release.
unsafe impl Allocator for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(layout.size() != 0);
        // SAFETY: the list never asks for zero-sized blocks.
        let ptr = unsafe { alloc::alloc::alloc(layout) };
        NonNull::new(ptr).ok_or(AllocError)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the caller.
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
