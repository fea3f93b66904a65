//! # Undo/Redo History
//!
//! Linear text history. Each entry is a whole document text.
//!
//! ## Design
//!
//! - `past` runs oldest to most recent and is capped; the oldest entry is
//!   dropped on overflow
//! - `future` holds the next redo first
//! - Committing a new edit clears `future`

use crate::config::DEFAULT_HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    past: VecDeque<String>,
    future: VecDeque<String>,

    /// Maximum number of `past` entries (0 = unlimited)
    #[serde(skip, default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl History {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: VecDeque::new(),
            limit,
        }
    }

    /// Build from explicit stacks, trimming `past` to the limit
    pub fn from_parts(past: Vec<String>, future: Vec<String>, limit: usize) -> Self {
        let mut history = Self {
            past: past.into(),
            future: future.into(),
            limit,
        };
        history.trim();
        history
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.trim();
    }

    /// Record a new edit: `previous` becomes the latest undo step and the
    /// redo stack is discarded
    pub fn record(&mut self, previous: String) {
        self.push_past(previous);
        self.future.clear();
    }

    /// Step back from `current`. Returns the text to show, if any.
    pub fn undo(&mut self, current: String) -> Option<String> {
        let previous = self.past.pop_back()?;
        self.future.push_front(current);
        Some(previous)
    }

    /// Step forward from `current`. Returns the text to show, if any.
    pub fn redo(&mut self, current: String) -> Option<String> {
        let next = self.future.pop_front()?;
        self.push_past(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Oldest first
    pub fn past(&self) -> impl Iterator<Item = &str> {
        self.past.iter().map(String::as_str)
    }

    /// Next redo first
    pub fn future(&self) -> impl Iterator<Item = &str> {
        self.future.iter().map(String::as_str)
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    fn push_past(&mut self, text: String) {
        self.past.push_back(text);
        self.trim();
    }

    fn trim(&mut self) {
        if self.limit == 0 {
            return;
        }
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
