pub mod caret;
pub mod classify;
pub mod close_tag;
pub mod init;
pub mod instrument;
pub mod suggest;

pub use caret::{caret, CaretArgs};
pub use classify::{classify, ClassifyArgs};
pub use close_tag::{close_tag, CloseTagArgs};
pub use init::{init, InitArgs};
pub use instrument::{instrument, InstrumentArgs};
pub use suggest::{suggest, SuggestArgs};

use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use jovibe_scanner::clamp_offset;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A document and a cursor inside it
#[derive(Args, Debug)]
pub struct DocumentArgs {
    /// Input .html file
    pub input: PathBuf,

    /// Cursor as a byte offset
    #[arg(long, conflicts_with = "line")]
    pub offset: Option<usize>,

    /// Cursor line (1-based); defaults to the end of the document
    #[arg(long)]
    pub line: Option<usize>,

    /// Cursor column in characters (1-based)
    #[arg(long, default_value_t = 1, requires = "line")]
    pub column: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl DocumentArgs {
    pub fn read(&self, cwd: &str) -> Result<(String, usize)> {
        let path = resolve(cwd, &self.input);
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let cursor = match (self.offset, self.line) {
            (Some(offset), _) => clamp_offset(&text, offset),
            (None, Some(line)) => line_column_offset(&text, line, self.column),
            (None, None) => text.len(),
        };
        Ok((text, cursor))
    }
}

pub fn resolve(cwd: &str, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(cwd).join(path)
    }
}

/// Byte offset of a 1-based line/column, clamped to the line and document
pub fn line_column_offset(text: &str, line: usize, column: usize) -> usize {
    let mut start = 0;
    for _ in 1..line.max(1) {
        match text[start..].find('\n') {
            Some(newline) => start += newline + 1,
            None => return text.len(),
        }
    }

    let line_text = text[start..].split('\n').next().unwrap_or("");
    let within = line_text
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(line_text.len(), |(i, _)| i);
    start + within
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_column_offset() {
        let text = "ab\ncdé\nf";
        assert_eq!(line_column_offset(text, 1, 1), 0);
        assert_eq!(line_column_offset(text, 2, 2), 4);
        assert_eq!(line_column_offset(text, 2, 4), 7);
        assert_eq!(line_column_offset(text, 2, 99), 7);
        assert_eq!(line_column_offset(text, 3, 1), 8);
        assert_eq!(line_column_offset(text, 9, 1), text.len());
    }
}
