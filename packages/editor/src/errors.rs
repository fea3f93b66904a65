//! Error types for the editor

use crate::rewrite::RewriteError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    #[error("Caret error: {0}")]
    Caret(#[from] jovibe_caret::CaretError),

    #[error("Invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
