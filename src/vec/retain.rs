// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{port::Allocator, vec::ArrayList};

impl<T, A: Allocator> ArrayList<T, A> {
    /// Retains only the elements specified by the predicate `f`, preserving
    /// order.
    ///
    /// The predicate is applied to each element in iteration order. Rejected
    /// elements are destroyed through the allocator. If `f` panics, the
    /// elements not yet visited are kept and the list stays consistent.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let original_len = self.len;
        if original_len == 0 {
            return;
        }
        // Slots in `[write, read)` are dead while the loop runs.
        self.len = 0;
        let mut guard = RetainGuard {
            list: self,
            read: 0,
            write: 0,
            original_len,
        };
        while guard.read < original_len {
            let read = guard.read;
            let slot = guard.list.block.slot(read);
            // SAFETY: `read` is past every dead slot and below `original_len`.
            let keep = f(unsafe { slot.as_ref() });
            guard.read += 1;
            if keep {
                if read != guard.write {
                    // SAFETY: `write < read`, and the slot at `write` is dead.
                    unsafe { guard.list.block.shift(read, guard.write, 1) };
                }
                guard.write += 1;
            } else {
                // SAFETY: the slot is live and already counted as visited.
                unsafe { guard.list.alloc.destroy(slot) };
            }
        }
    }
}

/// Closes the gap left by rejected elements, including on unwind.
struct RetainGuard<'a, T, A: Allocator> {
    list: &'a mut ArrayList<T, A>,
    read: usize,
    write: usize,
    original_len: usize,
}

impl<T, A: Allocator> Drop for RetainGuard<'_, T, A> {
    fn drop(&mut self) {
        let unvisited = self.original_len - self.read;
        if self.read != self.write {
            // SAFETY: `[read, original_len)` is live and `[write, read)` is dead.
            unsafe { self.list.block.shift(self.read, self.write, unvisited) };
            self.list.invalidate();
        }
        self.list.len = self.write + unvisited;
    }
}
