// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Indexable binary-heap priority queue
//!
//! Elements live in a flat vector laid out as a complete binary tree: the
//! children of slot `i` are `2i + 1` and `2i + 2`, its parent is `(i - 1) / 2`.
//! Besides `add`/`pop`, callers may inspect any slot, remove any slot, and
//! mutate a value in place through [`PriorityQueue::get_mut`]. The queue
//! cannot observe such a mutation, so it must be followed by
//! [`PriorityQueue::sort_at`] on the same slot.

use crate::error::{Result, RouteError};

/// Which end of the ordering comes out first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Smallest value at the root
    #[default]
    MinFirst,
    /// Largest value at the root
    MaxFirst,
}

/// Binary heap with random access by slot
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    items: Vec<T>,
    order: Order,
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new(Order::MinFirst)
    }
}

impl<T: Ord> PriorityQueue<T> {
    /// Create an empty queue
    #[must_use]
    pub fn new(order: Order) -> Self {
        Self {
            items: Vec::new(),
            order,
        }
    }

    /// Create an empty queue with room for `capacity` elements
    #[must_use]
    pub fn with_capacity(order: Order, capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            order,
        }
    }

    /// The configured ordering direction
    #[must_use]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Insert a value, sifting it up from the first free slot
    pub fn add(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// The value at the root
    pub fn peek(&self) -> Result<&T> {
        self.items.first().ok_or(RouteError::EmptyQueue)
    }

    /// Remove and return the value at the root
    pub fn pop(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(RouteError::EmptyQueue);
        }
        Ok(self.remove_root())
    }

    /// Number of queued values
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`PriorityQueue::count`]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is queued
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The value stored at slot `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutable access to slot `index`.
    ///
    /// Changing the ordering key of the value breaks the heap order until
    /// [`PriorityQueue::sort_at`] is called with the same index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Slot of the first value matching `predicate`, scanning in slot order
    pub fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    /// Values in slot order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Remove and return the value at slot `index`.
    ///
    /// The value is swapped with each ancestor in turn until it reaches the
    /// root, then removed exactly like [`PriorityQueue::pop`].
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let mut slot = index;
        while slot > 0 {
            let parent = (slot - 1) / 2;
            self.items.swap(slot, parent);
            slot = parent;
        }
        Ok(self.remove_root())
    }

    /// Restore heap order after the value at `index` changed out-of-band
    pub fn sort_at(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if index > 0 && self.precedes(index, (index - 1) / 2) {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(RouteError::invalid_argument(format!(
                "queue index {index} out of range for {} element(s)",
                self.items.len()
            )))
        }
    }

    fn remove_root(&mut self) -> T {
        // swap_remove moves the last slot into the root
        let value = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        value
    }

    /// True when slot `a` belongs above slot `b`
    fn precedes(&self, a: usize, b: usize) -> bool {
        match self.order {
            Order::MinFirst => self.items[a] < self.items[b],
            Order::MaxFirst => self.items[a] > self.items[b],
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.precedes(slot, parent) {
                break;
            }
            self.items.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let best = if right < len && self.precedes(right, left) {
                right
            } else {
                left
            };
            if !self.precedes(best, slot) {
                break;
            }
            self.items.swap(slot, best);
            slot = best;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_heap<T: Ord>(queue: &PriorityQueue<T>) -> bool {
        (1..queue.len()).all(|i| !queue.precedes(i, (i - 1) / 2))
    }

    fn drain<T: Ord>(queue: &mut PriorityQueue<T>) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(v) = queue.pop() {
            out.push(v);
        }
        out
    }

    #[test]
    fn test_pop_min_first() {
        let mut queue = PriorityQueue::new(Order::MinFirst);
        for v in [5, 3, 8, 1, 9, 2, 7] {
            queue.add(v);
        }

        assert_eq!(queue.count(), 7);
        assert_eq!(*queue.peek().unwrap(), 1);
        assert_eq!(drain(&mut queue), vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_pop_max_first() {
        let mut queue = PriorityQueue::new(Order::MaxFirst);
        for v in [5, 3, 8, 1, 9, 2, 7] {
            queue.add(v);
        }

        assert_eq!(drain(&mut queue), vec![9, 8, 7, 5, 3, 2, 1]);
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut queue: PriorityQueue<u32> = PriorityQueue::default();

        assert_eq!(queue.peek(), Err(RouteError::EmptyQueue));
        assert_eq!(queue.pop(), Err(RouteError::EmptyQueue));

        queue.add(4);
        queue.pop().unwrap();
        assert_eq!(queue.pop(), Err(RouteError::EmptyQueue));
    }

    #[test]
    fn test_get_by_index_follows_tree_layout() {
        let mut queue = PriorityQueue::new(Order::MinFirst);
        for v in [1, 2, 3, 4, 5] {
            queue.add(v);
        }

        // Ascending inserts never sift, so slots match insertion order
        for (slot, expected) in [1, 2, 3, 4, 5].iter().enumerate() {
            assert_eq!(queue.get(slot), Some(expected));
        }
        assert_eq!(queue.get(5), None);
    }

    #[test]
    fn test_remove_at_keeps_order() {
        let mut queue = PriorityQueue::new(Order::MinFirst);
        for v in [10, 20, 30, 40, 50, 60, 70, 80] {
            queue.add(v);
        }

        let removed = queue.remove_at(4).unwrap();
        assert_eq!(removed, 50);
        assert_eq!(queue.count(), 7);
        assert!(is_heap(&queue));
        assert_eq!(drain(&mut queue), vec![10, 20, 30, 40, 60, 70, 80]);
    }

    #[test]
    fn test_remove_at_root_and_last() {
        let mut queue = PriorityQueue::new(Order::MinFirst);
        for v in [3, 1, 2] {
            queue.add(v);
        }

        assert_eq!(queue.remove_at(0).unwrap(), 1);
        let last = queue.len() - 1;
        let removed = queue.remove_at(last).unwrap();
        assert_eq!(queue.count(), 1);
        assert!(removed == 2 || removed == 3);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut queue = PriorityQueue::new(Order::MinFirst);
        queue.add(1);

        assert!(matches!(
            queue.remove_at(1),
            Err(RouteError::InvalidArgument(_))
        ));
        assert!(matches!(queue.sort_at(3), Err(RouteError::InvalidArgument(_))));
    }

    #[test]
    fn test_sort_at_after_decrease() {
        let mut queue = PriorityQueue::new(Order::MinFirst);
        for v in [10, 20, 30, 40, 50] {
            queue.add(v);
        }

        *queue.get_mut(4).unwrap() = 5;
        queue.sort_at(4).unwrap();

        assert!(is_heap(&queue));
        assert_eq!(*queue.peek().unwrap(), 5);
    }

    #[test]
    fn test_sort_at_after_increase() {
        let mut queue = PriorityQueue::new(Order::MinFirst);
        for v in [10, 20, 30, 40, 50] {
            queue.add(v);
        }

        *queue.get_mut(0).unwrap() = 45;
        queue.sort_at(0).unwrap();

        assert!(is_heap(&queue));
        assert_eq!(drain(&mut queue), vec![20, 30, 40, 45, 50]);
    }

    #[test]
    fn test_position_finds_slot() {
        let mut queue = PriorityQueue::new(Order::MaxFirst);
        for v in [4, 9, 1] {
            queue.add(v);
        }

        let slot = queue.position(|v| *v == 1).unwrap();
        assert_eq!(queue.get(slot), Some(&1));
        assert_eq!(queue.position(|v| *v == 7), None);
    }
}
