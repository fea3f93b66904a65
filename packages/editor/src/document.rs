//! # Document Handle
//!
//! The live text of the editor plus the cursor. Every text change bumps the
//! version so downstream consumers (the preview) can tell documents apart
//! without comparing strings.

use jovibe_scanner::clamp_offset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    cursor: usize,
    version: u64,
}

impl Document {
    /// Document with the cursor at the start
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
            version: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Incremented on every text change
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text and move the cursor. Returns whether the text changed.
    pub fn set(&mut self, text: impl Into<String>, cursor: usize) -> bool {
        let text = text.into();
        let changed = text != self.text;
        if changed {
            self.text = text;
            self.version += 1;
        }
        self.set_cursor(cursor);
        changed
    }

    /// Move the cursor, clamped to the text
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = clamp_offset(&self.text, cursor);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(String::new())
    }
}
