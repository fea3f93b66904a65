//! # Jovibe Scanner
//!
//! Heuristic, single-pass lexical scanning over a combined HTML/CSS/JS
//! document. Nothing here builds a tree: the classifier compares marker
//! positions and the tag scanner folds tags into a stack. Both are total
//! functions with safe defaults, cheap enough to re-run on every keystroke.

pub mod context;
pub mod tags;
pub mod text;

pub use context::{classify, Context};
pub use tags::{tokenize, MarkupToken, OpenTag, TagStack};
pub use text::{byte_to_utf16, clamp_offset, prefix, trailing_run, trailing_run_start, utf16_to_byte};
