// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Bounded undo history of serialized document snapshots.
//!
//! Each entry is the JSON form of `{config, nodes}` captured just before an
//! undoable mutation. The stack keeps at most `capacity` entries; pushing
//! onto a full stack silently drops the oldest one.

use std::collections::VecDeque;

/// Fixed-capacity LIFO of opaque snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    stack: VecDeque<String>,
    capacity: usize,
}

impl UndoState {
    /// Create an empty history with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(crate::settings::history::CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a snapshot, evicting the oldest entry when full
    pub fn push(&mut self, snapshot: String) {
        if self.capacity == 0 {
            return;
        }
        if self.stack.len() == self.capacity {
            self.stack.pop_front();
        }
        self.stack.push_back(snapshot);
    }

    /// Take the most recent snapshot
    pub fn pop(&mut self) -> Option<String> {
        self.stack.pop_back()
    }

    /// The most recent snapshot without removing it
    pub fn peek(&self) -> Option<&str> {
        self.stack.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget all history (used when switching documents)
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

impl Default for UndoState {
    fn default() -> Self {
        Self::new()
    }
}
