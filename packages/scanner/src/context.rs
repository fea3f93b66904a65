//! # Context Classification
//!
//! Decides which sub-language the cursor sits in by comparing the positions
//! of the last `<style`/`</style` and `<script`/`</script` markers before it.
//!
//! This is deliberately not a parser: it does not track nesting depth and it
//! ignores `style="..."` attributes and inline event handlers. It runs on
//! every keystroke, so it stays a handful of reverse substring searches.

use crate::text::prefix;
use serde::{Deserialize, Serialize};
use std::fmt;

const STYLE_OPEN: &str = "<style";
const STYLE_CLOSE: &str = "</style";
const SCRIPT_OPEN: &str = "<script";
const SCRIPT_CLOSE: &str = "</script";

/// Sub-language at the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    #[default]
    Markup,
    Style,
    Script,
}

impl Context {
    pub const ALL: [Context; 3] = [Context::Markup, Context::Style, Context::Script];

    /// Name the host uses for palette layers and highlighting
    pub fn label(self) -> &'static str {
        match self {
            Context::Markup => "html",
            Context::Style => "css",
            Context::Script => "javascript",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify the cursor position. Never fails; no markers means markup.
pub fn classify(text: &str, cursor: usize) -> Context {
    let before = prefix(text, cursor);

    if is_open(before, STYLE_OPEN, STYLE_CLOSE) {
        Context::Style
    } else if is_open(before, SCRIPT_OPEN, SCRIPT_CLOSE) {
        Context::Script
    } else {
        Context::Markup
    }
}

/// True when the last `open` marker comes after the last `close` marker.
/// `</style` never matches `<style` because of the slash, so the two
/// searches are independent.
fn is_open(before: &str, open: &str, close: &str) -> bool {
    match (before.rfind(open), before.rfind(close)) {
        (Some(open_at), Some(close_at)) => open_at > close_at,
        (Some(_), None) => true,
        (None, _) => false,
    }
}
