//! Thread-safe work-lists used as traversal frontiers.
//!
//! [`Queue`] is FIFO, [`Stack`] is LIFO. Both guard their storage with a
//! `parking_lot::Mutex`, so any number of threads may push and pop through a
//! shared reference. Each `push` returns the length right after the push,
//! observed under the same lock.

use parking_lot::Mutex;
use std::collections::VecDeque;

/// A work-list with a fixed pop discipline.
pub trait Frontier<T> {
    /// Appends `item` and returns the resulting length.
    fn push(&self, item: T) -> usize;

    /// Removes and returns the next item, or `None` when empty.
    fn pop(&self) -> Option<T>;

    /// Returns the number of pending items.
    fn len(&self) -> usize;

    /// Returns true when nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pushes `item` if present; `None` is ignored and the current length
    /// is returned.
    fn push_some(&self, item: Option<T>) -> usize {
        match item {
            Some(item) => self.push(item),
            None => self.len(),
        }
    }
}

/// Thread-safe FIFO queue.
#[derive(Debug)]
pub struct Queue<T> {
    items: Mutex<VecDeque<T>>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
        }
    }

    /// Creates an empty queue with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&self, item: T) -> usize {
        let mut items = self.items.lock();
        items.push_back(item);
        items.len()
    }

    fn pop(&self) -> Option<T> {
        self.items.lock().pop_front()
    }

    fn len(&self) -> usize {
        self.items.lock().len()
    }
}

/// Thread-safe LIFO stack.
#[derive(Debug)]
pub struct Stack<T> {
    items: Mutex<Vec<T>>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Creates an empty stack with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Mutex::new(Vec::with_capacity(capacity)),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&self, item: T) -> usize {
        let mut items = self.items.lock();
        items.push(item);
        items.len()
    }

    fn pop(&self) -> Option<T> {
        self.items.lock().pop()
    }

    fn len(&self) -> usize {
        self.items.lock().len()
    }
}

// Compile-time check: frontiers must be shareable across threads.
#[allow(dead_code)]
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Queue<u64>>();
    assert_send_sync::<Stack<u64>>();
};
