// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Test-only allocator and element types shared by the unit tests.

// Crate imports
use crate::{AllocError, Allocator, Global};

// Core imports
use core::{alloc::Layout, cell::Cell, fmt, ptr::NonNull};

// Std imports
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Stats {
    pub(crate) allocations: usize,
    pub(crate) deallocations: usize,
    pub(crate) live_bytes: usize,
    pub(crate) constructs: usize,
    pub(crate) destroys: usize,
}

#[derive(Default)]
struct Shared {
    stats: Cell<Stats>,
    // Remaining allocations before every request fails; `None` never fails.
    budget: Cell<Option<usize>>,
}

/// Counting allocator with an identity. Clones share counters; handles
/// compare equal when their `id`s match.
#[derive(Clone)]
pub(crate) struct TestAlloc {
    id: u32,
    shared: Rc<Shared>,
}

impl TestAlloc {
    pub(crate) fn new(id: u32) -> Self {
        Self {
            id,
            shared: Rc::new(Shared::default()),
        }
    }

    pub(crate) fn stats(&self) -> Stats {
        self.shared.stats.get()
    }

    /// Lets `n` more allocations succeed, then fails every request.
    pub(crate) fn fail_after(&self, n: usize) {
        self.shared.budget.set(Some(n));
    }

    pub(crate) fn never_fail(&self) {
        self.shared.budget.set(None);
    }

    fn update(&self, f: impl FnOnce(&mut Stats)) {
        let mut stats = self.shared.stats.get();
        f(&mut stats);
        self.shared.stats.set(stats);
    }
}

impl fmt::Debug for TestAlloc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestAlloc").field("id", &self.id).finish()
    }
}

impl PartialEq for TestAlloc {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

// SAFETY: blocks come from `Global`, which any handle may release.
unsafe impl Allocator for TestAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if let Some(left) = self.shared.budget.get() {
            if left == 0 {
                return Err(AllocError);
            }
            self.shared.budget.set(Some(left - 1));
        }
        let ptr = Global.allocate(layout)?;
        self.update(|s| {
            s.allocations += 1;
            s.live_bytes += layout.size();
        });
        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.update(|s| {
            s.deallocations += 1;
            s.live_bytes -= layout.size();
        });
        // SAFETY: forwarded from the caller.
        unsafe { Global.deallocate(ptr, layout) }
    }

    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
        self.update(|s| s.constructs += 1);
        // SAFETY: forwarded from the caller.
        unsafe { slot.as_ptr().write(value) }
    }

    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        self.update(|s| s.destroys += 1);
        // SAFETY: forwarded from the caller.
        unsafe { core::ptr::drop_in_place(slot.as_ptr()) }
    }
}

/// Element whose `clone` panics once a shared countdown reaches zero.
#[derive(Debug)]
pub(crate) struct Fragile {
    pub(crate) value: i32,
    countdown: Rc<Cell<usize>>,
}

impl Fragile {
    pub(crate) fn new(value: i32, countdown: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            countdown: Rc::clone(countdown),
        }
    }
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        let left = self.countdown.get();
        if left == 0 {
            panic!("clone budget exhausted");
        }
        self.countdown.set(left - 1);
        Self {
            value: self.value,
            countdown: Rc::clone(&self.countdown),
        }
    }
}

impl PartialEq for Fragile {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Element that counts how many times it has been dropped.
#[derive(Debug, Clone)]
pub(crate) struct Tally {
    pub(crate) drops: Rc<Cell<usize>>,
}

impl Tally {
    pub(crate) fn new(drops: &Rc<Cell<usize>>) -> Self {
        Self {
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for Tally {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::TestAlloc;
    use crate::Allocator;
    use core::alloc::Layout;
    use std::format;

    #[test]
    fn test_clones_share_counters_equal_ids_do_not() {
        let a = TestAlloc::new(1);
        let clone = a.clone();
        let twin = TestAlloc::new(1);
        let layout = Layout::new::<u64>();
        let ptr = clone.allocate(layout).unwrap();
        assert_eq!(a.stats().allocations, 1);
        assert_eq!(twin.stats().allocations, 0);
        assert_eq!(a, twin);
        assert_eq!(format!("{twin:?}"), "TestAlloc { id: 1 }");
        // SAFETY: `ptr` came from `clone` with `layout`.
        unsafe { a.deallocate(ptr, layout) };
        assert_eq!(a.stats().live_bytes, 0);
    }
}
