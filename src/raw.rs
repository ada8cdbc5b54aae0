// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The storage block: an allocator-backed run of `capacity` slots for `T`.
//!
//! A `RawBlock` knows nothing about which slots are live. It does not own its
//! allocator handle either; the list passes the handle in, so that exactly one
//! place decides when a block is released.

// Core imports
use core::{alloc::Layout, marker::PhantomData, mem, ptr::NonNull};

// Crate imports
use crate::{error::Error, growth::max_len, port::Allocator};

// Invariants:
// - `cap == 0` iff the block owns no allocation (`ptr` is dangling).
// - For zero-sized `T` the block never owns an allocation; `cap` still records
//   the reserved slot count and `ptr` stays dangling.
// - Otherwise `ptr` came from `allocate(layout_for(cap))`.
pub(crate) struct RawBlock<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBlock<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// A block with no slots and no allocation.
    #[inline]
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates a block of exactly `capacity` slots from `alloc`.
    pub(crate) fn allocate_in<A: Allocator>(capacity: usize, alloc: &A) -> Result<Self, Error> {
        if capacity == 0 {
            return Ok(Self::empty());
        }
        let layout = Self::layout_for(capacity)?;
        if Self::IS_ZST {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap: capacity,
                _marker: PhantomData,
            });
        }
        let ptr = alloc.allocate(layout).map_err(|_| Error::OutOfMemory {
            size: layout.size(),
            align: layout.align(),
        })?;
        Ok(Self {
            ptr: ptr.cast(),
            cap: capacity,
            _marker: PhantomData,
        })
    }

    fn layout_for(capacity: usize) -> Result<Layout, Error> {
        let max = max_len::<T>();
        if capacity > max {
            return Err(Error::LengthExceeded { requested: capacity, max });
        }
        Layout::array::<T>(capacity).map_err(|_| Error::LengthExceeded { requested: capacity, max })
    }

    /// Returns the memory to `alloc` without touching any slot.
    ///
    /// # Safety
    ///
    /// `alloc` must compare equal to the handle the block was allocated from,
    /// and every live value must already have been destroyed or moved out.
    pub(crate) unsafe fn release_in<A: Allocator>(self, alloc: &A) {
        if self.cap == 0 || Self::IS_ZST {
            return;
        }
        // `layout_for` succeeded for this capacity when the block was made.
        if let Ok(layout) = Self::layout_for(self.cap) {
            // SAFETY: `ptr` was allocated with this layout by an equal handle.
            unsafe { alloc.deallocate(self.ptr.cast(), layout) }
        }
    }

    /// Number of slots.
    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    /// Base pointer; dangling when no allocation is owned.
    #[inline]
    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot `index`. `index == capacity` yields the one-past-the-end
    /// pointer, which may be used as a copy destination bound but never written.
    #[inline]
    pub(crate) fn slot(&self, index: usize) -> NonNull<T> {
        debug_assert!(index <= self.cap, "slot {index} past capacity {}", self.cap);
        // SAFETY: `index <= cap` keeps the offset within (or one past) the
        // allocation; for dangling blocks `cap == 0` or `T` is zero-sized.
        unsafe { self.ptr.add(index) }
    }

    /// Bitwise-moves `count` live values from `src[from..]` into `self[to..]`.
    ///
    /// # Safety
    ///
    /// The source range must be live, the destination range must be raw, and
    /// both must be in bounds. The blocks must be distinct. Afterwards the
    /// source range is logically raw.
    #[inline]
    pub(crate) unsafe fn relocate_from(&mut self, to: usize, src: &RawBlock<T>, from: usize, count: usize) {
        debug_assert!(from + count <= src.cap && to + count <= self.cap);
        // SAFETY: forwarded from the caller.
        unsafe {
            core::ptr::copy_nonoverlapping(src.slot(from).as_ptr(), self.slot(to).as_ptr(), count);
        }
    }

    /// Bitwise-moves `count` values from `self[from..]` to `self[to..]`; the
    /// ranges may overlap.
    ///
    /// # Safety
    ///
    /// Both ranges must be in bounds. Slots of the destination range that are
    /// not also in the source range must be raw.
    #[inline]
    pub(crate) unsafe fn shift(&mut self, from: usize, to: usize, count: usize) {
        debug_assert!(from + count <= self.cap && to + count <= self.cap);
        // SAFETY: forwarded from the caller.
        unsafe { core::ptr::copy(self.slot(from).as_ptr(), self.slot(to).as_ptr(), count) }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::RawBlock;
    use crate::{Error, Global, testing::TestAlloc};

    #[test]
    fn test_empty_block_has_no_capacity() {
        let block: RawBlock<u32> = RawBlock::empty();
        assert_eq!(block.capacity(), 0);
    }

    #[test]
    fn test_allocate_and_release_counts() {
        let alloc = TestAlloc::new(1);
        let block: RawBlock<u64> = RawBlock::allocate_in(5, &alloc).unwrap();
        assert_eq!(block.capacity(), 5);
        assert_eq!(alloc.stats().allocations, 1);
        assert_eq!(alloc.stats().live_bytes, 40);
        unsafe { block.release_in(&alloc) };
        assert_eq!(alloc.stats().deallocations, 1);
        assert_eq!(alloc.stats().live_bytes, 0);
    }

    #[test]
    fn test_zero_capacity_never_allocates() {
        let alloc = TestAlloc::new(1);
        let block: RawBlock<u64> = RawBlock::allocate_in(0, &alloc).unwrap();
        assert_eq!(block.capacity(), 0);
        unsafe { block.release_in(&alloc) };
        assert_eq!(alloc.stats().allocations, 0);
        assert_eq!(alloc.stats().deallocations, 0);
    }

    #[test]
    fn test_zst_block_records_capacity_without_allocating() {
        let alloc = TestAlloc::new(1);
        let block: RawBlock<()> = RawBlock::allocate_in(10, &alloc).unwrap();
        assert_eq!(block.capacity(), 10);
        unsafe { block.release_in(&alloc) };
        assert_eq!(alloc.stats().allocations, 0);
    }

    #[test]
    fn test_out_of_memory_reports_layout() {
        let alloc = TestAlloc::new(1);
        alloc.fail_after(0);
        let err = RawBlock::<u32>::allocate_in(3, &alloc).err();
        assert_eq!(err, Some(Error::OutOfMemory { size: 12, align: 4 }));
    }

    #[test]
    fn test_capacity_above_max_is_length_error() {
        let err = RawBlock::<u64>::allocate_in(usize::MAX, &Global).err();
        assert!(matches!(err, Some(Error::LengthExceeded { .. })));
    }

    #[test]
    fn test_relocate_and_shift() {
        let a: RawBlock<u16> = RawBlock::allocate_in(4, &Global).unwrap();
        let mut b: RawBlock<u16> = RawBlock::allocate_in(4, &Global).unwrap();
        unsafe {
            for i in 0..3 {
                a.slot(i).as_ptr().write(i as u16 + 1);
            }
            b.relocate_from(0, &a, 0, 3);
            b.shift(0, 1, 3);
            assert_eq!(*b.slot(1).as_ptr(), 1);
            assert_eq!(*b.slot(3).as_ptr(), 3);
            a.release_in(&Global);
            b.release_in(&Global);
        }
    }
}
