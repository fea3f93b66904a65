//! # Insertions and Tag Balancing
//!
//! Every assist action ends as an [`Insertion`]: replace a byte range with
//! new text and put the cursor somewhere inside it. The "close nearest tag"
//! action lives here too since it is the one insertion that needs a scan of
//! the document.

use jovibe_lexicon::Lexicon;
use jovibe_scanner::{clamp_offset, prefix, TagStack};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::debug;

/// A text replacement with a resulting cursor position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insertion {
    /// Byte range of the original text being replaced
    pub range: Range<usize>,

    /// Replacement text
    pub text: String,

    /// Absolute cursor offset in the resulting text
    pub cursor_after: usize,
}

impl Insertion {
    /// Replace `range` with `text`, leaving the cursor `cursor_in_text`
    /// bytes into the inserted text
    pub fn replace(range: Range<usize>, text: impl Into<String>, cursor_in_text: usize) -> Self {
        let text = text.into();
        let cursor_after = range.start + cursor_in_text.min(text.len());
        Self {
            range,
            text,
            cursor_after,
        }
    }

    /// Plain insertion at `cursor`
    pub fn at(cursor: usize, text: impl Into<String>, cursor_in_text: usize) -> Self {
        Self::replace(cursor..cursor, text, cursor_in_text)
    }

    /// Apply to `source`. The range is clamped to valid char boundaries so a
    /// stale insertion never panics.
    pub fn apply(&self, source: &str) -> String {
        let start = clamp_offset(source, self.range.start);
        let end = clamp_offset(source, self.range.end).max(start);

        let mut result = String::with_capacity(source.len() - (end - start) + self.text.len());
        result.push_str(&source[..start]);
        result.push_str(&self.text);
        result.push_str(&source[end..]);
        result
    }

    /// Apply and return the new text with the clamped cursor
    pub fn apply_with_cursor(&self, source: &str) -> (String, usize) {
        let text = self.apply(source);
        let start = clamp_offset(source, self.range.start);
        let offset = self.cursor_after.saturating_sub(self.range.start);
        let cursor = clamp_offset(&text, start + offset);
        (text, cursor)
    }
}

/// Name of the innermost unclosed element in `before`, if any
pub fn closing_tag_for(before: &str, lexicon: &Lexicon) -> Option<String> {
    TagStack::scan(before, |name| lexicon.is_void(name))
        .top()
        .map(str::to_string)
}

/// Close the innermost open element at `cursor`, or insert a bare `>` when
/// nothing is open
pub fn close_nearest_tag(text: &str, cursor: usize, lexicon: &Lexicon) -> Insertion {
    let cursor = clamp_offset(text, cursor);
    match closing_tag_for(prefix(text, cursor), lexicon) {
        Some(name) => {
            debug!(tag = %name, "Closing nearest open tag");
            let closing = format!("</{}>", name);
            let len = closing.len();
            Insertion::at(cursor, closing, len)
        }
        None => Insertion::at(cursor, ">", 1),
    }
}
