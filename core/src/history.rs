//! Linear undo/redo history of store snapshots.
//!
//! The undo side holds pre-mutation snapshots, most recent last, and evicts
//! the oldest entry above capacity. Recording a new mutation discards the redo
//! branch, so the history is always a single line with the current state
//! somewhere on it.

use crate::types::Snapshot;
use std::collections::VecDeque;
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    capacity: usize,
}

impl History {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Records the state captured right before a mutation.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.push_undo(snapshot);
        if !self.redo.is_empty() {
            debug!(discarded = self.redo.len(), "redo branch discarded");
            self.redo.clear();
        }
    }

    /// Steps back. `current` is the live state, kept so the step can be redone.
    /// Returns the snapshot to restore, or `None` when there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        debug!(undo = self.undo.len(), redo = self.redo.len(), "undo");
        Some(previous)
    }

    /// Steps forward again after an undo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo.pop()?;
        self.push_undo(current);
        debug!(undo = self.undo.len(), redo = self.redo.len(), "redo");
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo.push_back(snapshot);
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
