// This file is part of array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{port::Allocator, vec::ArrayList};

impl<T, A: Allocator> ArrayList<T, A> {
    /// Removes and returns the last element, or `None` if the list is empty.
    ///
    /// Never reallocates. Cursors issued before the call are invalidated.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.invalidate();

        let out = unsafe {
            // SAFETY: the slot at the old `len - 1` was live and is now past
            // `len`, so it is read out exactly once.
            self.block.slot(self.len).as_ptr().read()
        };
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{ArrayList, array_list};

    #[test]
    fn test_pop_order() {
        let mut v = array_list![1, 2, 3];
        assert_eq!(v.pop(), Some(3));
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_pop_empty() {
        let mut v: ArrayList<u8> = ArrayList::new();
        assert_eq!(v.pop(), None);
    }

    #[test]
    fn test_pop_invalidates() {
        let mut v = array_list![1, 2];
        let c = v.begin();
        v.pop();
        assert!(!v.is_valid(c));
    }

    #[test]
    fn test_pop_moves_owned_value_out() {
        let mut v: ArrayList<std::string::String> = ArrayList::new();
        v.push("x".into()).unwrap();
        let s = v.pop().unwrap();
        assert_eq!(s, "x");
        assert!(v.is_empty());
    }
}
