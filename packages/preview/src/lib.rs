//! # Jovibe Preview
//!
//! The document is previewed in an isolated context that can only talk to
//! the editor through posted messages. This crate owns both ends of that
//! conversation:
//!
//! ```text
//! instrument(doc) ──► preview runs ──► SandboxConsole ──mpsc──► ConsoleHost
//!                                      (clear, log, error,      (source check,
//!                                       warn, info)              transcript)
//! ```

pub mod host;
pub mod instrument;
pub mod protocol;
pub mod sandbox;
pub mod serialize;

pub use host::{ConsoleHost, PreviewFrame};
pub use instrument::{instrument, PROLOGUE};
pub use protocol::{BridgeMessage, ConsoleKind, ConsoleMessage};
pub use sandbox::{timestamp, Envelope, FrameId, SandboxConsole};
pub use serialize::{serialize_arg, serialize_args, HeapValue, ValueHeap, ValueId, CIRCULAR, UNSERIALIZABLE};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed bridge message: {0}")]
    Malformed(String),
}
