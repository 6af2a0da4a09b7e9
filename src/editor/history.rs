// ABOUTME: Bounded undo/redo history of editor snapshots
// ABOUTME: The oldest snapshot is dropped once the configured depth is reached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::document::{Document, Selection};
use std::collections::VecDeque;

/// Document plus selection at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Content
    pub document: Document,
    /// Cursor/selection
    pub selection: Selection,
}

/// Undo and redo stacks
#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    depth: usize,
}

impl History {
    /// History holding at most `depth` undo steps
    #[must_use]
    pub fn new(depth: usize) -> Self {
        Self {
            undo: VecDeque::with_capacity(depth.min(128)),
            redo: Vec::new(),
            depth,
        }
    }

    /// Record the state before an edit; clears redo
    pub fn record(&mut self, before: Snapshot) {
        if self.depth == 0 {
            return;
        }
        if self.undo.len() == self.depth {
            self.undo.pop_front();
        }
        self.undo.push_back(before);
        self.redo.clear();
    }

    /// Step back: returns the state to restore, remembering `current` for redo
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward again after an undo
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        Some(next)
    }

    /// Whether undo has anything to restore
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether redo has anything to restore
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
