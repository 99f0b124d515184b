//! Bounded sliding windows
//!
//! A [`SlidingWindow`] is a fixed-capacity FIFO over a ring buffer. Pushing
//! into a full window evicts the oldest entry first, so the window never
//! holds more than `capacity` items and every update is O(1).
//!
//! Both incremental filters are built from it: the constant-time filter
//! keeps one window of pixels per image column and one window of column
//! indices for the kernel, Huang's filter keeps a window of column slices.

use std::collections::VecDeque;

/// Fixed-capacity FIFO that evicts its oldest item when full.
#[derive(Debug, Clone)]
pub struct SlidingWindow<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> SlidingWindow<T> {
    /// Create an empty window holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        SlidingWindow {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `value`, evicting and returning the oldest item if the
    /// window was already full.
    ///
    /// A zero-capacity window hands `value` straight back.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(value);
        }
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(value);
        evicted
    }

    /// Remove and return the oldest item.
    pub fn pop_oldest(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Items from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Drop every item, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Copy> SlidingWindow<T> {
    /// Append every item to `out`, oldest first.
    pub fn copy_into(&self, out: &mut Vec<T>) {
        let (front, back) = self.items.as_slices();
        out.extend_from_slice(front);
        out.extend_from_slice(back);
    }
}
