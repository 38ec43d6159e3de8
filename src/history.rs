// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! History system for undo/redo functionality.
//!
//! A classic two-stack automaton over owned snapshots: recording a new
//! state invalidates everything that could still be redone, and undo/redo
//! trade the current state against the top of the opposite stack.

/// Undo/redo history over snapshots of type `T`.
pub struct History<T> {
    /// Undo stack (past states)
    undo_stack: Vec<T>,
    /// Redo stack (future states after undo)
    redo_stack: Vec<T>,
    /// Maximum history size
    max_size: usize,
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size: 50, // Keep last 50 states
        }
    }

    /// Save the current state before making a change.
    pub fn record(&mut self, snapshot: T) {
        self.undo_stack.push(snapshot);
        // Limit history size
        if self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
        // Clear redo stack when a new action is performed
        self.redo_stack.clear();
    }

    /// Undo: restore the previous state.
    ///
    /// Returns `None` without touching either stack when there is nothing
    /// to undo.
    pub fn undo(&mut self, current: T) -> Option<T> {
        if let Some(previous) = self.undo_stack.pop() {
            self.redo_stack.push(current);
            Some(previous)
        } else {
            None
        }
    }

    /// Redo: restore the next state.
    pub fn redo(&mut self, current: T) -> Option<T> {
        if let Some(next) = self.redo_stack.pop() {
            self.undo_stack.push(current);
            Some(next)
        } else {
            None
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_and_redo_are_exact_inverses() {
        let mut history = History::new();

        history.record("a");
        history.record("ab");
        let current = "abc";

        let previous = history.undo(current).unwrap();
        assert_eq!(previous, "ab");

        let next = history.redo(previous).unwrap();
        assert_eq!(next, "abc");
    }

    #[test]
    fn undo_on_empty_history_is_a_noop() {
        let mut history: History<&str> = History::new();
        assert!(!history.can_undo());
        assert_eq!(history.undo("current"), None);
        assert!(!history.can_redo());
    }

    #[test]
    fn record_clears_redo_stack() {
        let mut history = History::new();

        history.record("a");
        let previous = history.undo("ab").unwrap();
        assert!(history.can_redo());

        // A new edit after an undo invalidates the redo path
        history.record(previous);
        assert!(!history.can_redo());
        assert_eq!(history.redo("anything"), None);
    }

    #[test]
    fn history_is_capped_at_fifty_states() {
        let mut history = History::new();
        for i in 0..60 {
            history.record(i);
        }

        // The oldest states were dropped; walking back ends at state 10
        let mut current = 60;
        let mut steps = 0;
        while let Some(previous) = history.undo(current) {
            current = previous;
            steps += 1;
        }
        assert_eq!(steps, 50);
        assert_eq!(current, 10);
    }
}
