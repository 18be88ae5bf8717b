//! Bounded undo stack.
//!
//! DESIGN
//! ======
//! Backed by a `VecDeque`: pushes go to the back and evict from the front once
//! capacity is reached, pops come from the back. The oldest entries are lost
//! first; undo always restores the newest.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

/// Number of undo steps the workspace keeps.
pub const HISTORY_CAPACITY: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> History<T> {
    /// Create an empty history holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one so a push is always undoable.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    /// Push `entry`, dropping the oldest entry if the stack is full.
    pub fn push(&mut self, entry: T) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Remove and return the most recent entry.
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop_back()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}
