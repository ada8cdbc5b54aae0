// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cursor::Cursor, error::Error, port::Allocator, vec::ArrayList};

impl<T, A: Allocator> ArrayList<T, A> {
    /// Destroys the elements in `[first, last)` and shifts the tail left.
    ///
    /// Returns a cursor at `first`'s index, which now denotes the element that
    /// followed the erased range (or the end). Never reallocates. An empty
    /// range changes nothing and returns `first`; otherwise every earlier
    /// cursor is invalidated.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if either cursor is stale or `first > last`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_list::array_list;
    ///
    /// let mut v = array_list![10, 20, 30, 40, 50];
    /// let first = v.begin() + 1;
    /// let at = v.erase(first, first + 2).unwrap();
    /// assert_eq!(v, [10, 40, 50]);
    /// assert_eq!(v.get_at(at), Ok(&40));
    /// ```
    pub fn erase(&mut self, first: Cursor, last: Cursor) -> Result<Cursor, Error> {
        let start = self.resolve(first)?;
        let end = self.resolve(last)?;
        if start > end {
            return Err(Error::InvalidCursor);
        }
        self.erase_range(start, end);
        Ok(self.cursor_unchecked(start))
    }

    /// Erases the single element at `pos`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCursor`] if `pos` is stale, [`Error::OutOfRange`] if it
    /// is the end cursor.
    pub fn erase_at(&mut self, pos: Cursor) -> Result<Cursor, Error> {
        let index = self.resolve(pos)?;
        if index == self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.erase_range(index, index + 1);
        Ok(self.cursor_unchecked(index))
    }

    /// Removes and returns the element at `index`, shifting subsequent
    /// elements left.
    ///
    /// Returns `None` if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let len = self.len;

        let out = unsafe {
            // SAFETY: `index < len`, so the slot holds a live value; it is
            // overwritten by the shift below and never read again.
            self.block.slot(index).as_ptr().read()
        };
        // SAFETY: `[index + 1, len)` is live and moves one slot left over the
        // hole just read out.
        unsafe { self.block.shift(index + 1, index, len - index - 1) };

        self.len = len - 1;
        self.invalidate();
        Some(out)
    }

    /// Removes and returns the element at `index` by moving the last element
    /// into its place.
    ///
    /// Does not preserve order. Returns `None` if `index >= len`.
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.len -= 1;
        let last = self.len;

        let out = unsafe {
            // SAFETY: before the decrement `index < len`, so the slot is live.
            self.block.slot(index).as_ptr().read()
        };
        if index != last {
            // SAFETY: `last` holds a live value that moves into the hole.
            unsafe { self.block.shift(last, index, 1) };
        }

        self.invalidate();
        Some(out)
    }

    /// Destroys every element at or past `len`, keeping the capacity.
    ///
    /// Does nothing if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.erase_range(len, self.len);
        }
    }

    /// Destroys every element, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Destroys `[start, end)` and closes the gap.
    pub(crate) fn erase_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.len);
        if start == end {
            return;
        }
        let len = self.len;
        // A panicking destructor leaks the tail instead of exposing dead slots.
        self.len = start;
        self.invalidate();
        for index in start..end {
            // SAFETY: `[start, end)` is live and no longer counted by `len`.
            unsafe { self.alloc.destroy(self.block.slot(index)) };
        }
        // SAFETY: `[end, len)` is live and moves left over the destroyed range.
        unsafe { self.block.shift(end, start, len - end) };
        self.len = len - (end - start);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{ArrayList, Error, array_list, testing::{Tally, TestAlloc}};
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn test_erase_middle() {
        let mut v = array_list![1, 2, 3, 4, 5];
        let first = v.begin() + 1;
        let last = v.begin() + 3;
        let at = v.erase(first, last).unwrap();
        assert_eq!(v, [1, 4, 5]);
        assert_eq!(at.index(), 1);
        assert_eq!(v.get_at(at), Ok(&4));
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn test_erase_to_end_returns_end() {
        let mut v = array_list![1, 2, 3];
        let at = v.erase(v.begin() + 1, v.end()).unwrap();
        assert_eq!(v, [1]);
        assert_eq!(at, v.end());
    }

    #[test]
    fn test_erase_empty_range_keeps_cursors() {
        let mut v = array_list![1, 2, 3];
        let c = v.begin() + 2;
        let at = v.erase(c, c).unwrap();
        assert_eq!(at, c);
        assert!(v.is_valid(c));
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_erase_rejects_reversed_and_stale() {
        let mut v = array_list![1, 2, 3];
        let b = v.begin();
        assert_eq!(v.erase(b + 2, b + 1), Err(Error::InvalidCursor));
        v.pop();
        assert_eq!(v.erase(b, b + 1), Err(Error::InvalidCursor));
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_erase_past_end_rejected() {
        let mut v = array_list![1, 2, 3];
        let b = v.begin();
        assert_eq!(v.erase(b, b + 4), Err(Error::InvalidCursor));
    }

    #[test]
    fn test_erase_routes_destroy_through_allocator() {
        let alloc = TestAlloc::new(1);
        let mut v = ArrayList::from_slice_in(&[1, 2, 3, 4], alloc.clone()).unwrap();
        let b = v.begin();
        v.erase(b, b + 3).unwrap();
        assert_eq!(alloc.stats().destroys, 3);
        assert_eq!(v, [4]);
    }

    #[test]
    fn test_erase_at() {
        let mut v = array_list!['a', 'b', 'c'];
        let at = v.erase_at(v.begin() + 1).unwrap();
        assert_eq!(v, ['a', 'c']);
        assert_eq!(v.get_at(at), Ok(&'c'));
        assert_eq!(v.erase_at(v.end()), Err(Error::OutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_remove_and_swap_remove() {
        let mut v = array_list![1, 2, 3, 4];
        assert_eq!(v.remove(1), Some(2));
        assert_eq!(v, [1, 3, 4]);
        assert_eq!(v.swap_remove(0), Some(1));
        assert_eq!(v, [4, 3]);
        assert_eq!(v.swap_remove(1), Some(3));
        assert_eq!(v.remove(5), None);
        assert_eq!(v.swap_remove(1), None);
        assert_eq!(v, [4]);
    }

    #[test]
    fn test_truncate_and_clear_drop_elements() {
        let drops = Rc::new(Cell::new(0));
        let mut v: ArrayList<Tally> = ArrayList::new();
        for _ in 0..5 {
            v.push(Tally::new(&drops)).unwrap();
        }
        v.truncate(7);
        assert_eq!(drops.get(), 0);
        v.truncate(3);
        assert_eq!(drops.get(), 2);
        let cap = v.capacity();
        v.clear();
        assert_eq!(drops.get(), 5);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), cap);
    }
}
