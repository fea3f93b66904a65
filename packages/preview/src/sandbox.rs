//! The preview side of the bridge

use crate::protocol::{BridgeMessage, ConsoleKind, ConsoleMessage};
use crate::serialize::{serialize_args, ValueHeap, ValueId};
use serde_json::Value;
use std::fmt;
use std::sync::mpsc::Sender;
use tracing::trace;

/// Identity of one loaded preview; stands in for the message source window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub(crate) u64);

impl FrameId {
    /// Rebuild an id handed out earlier, e.g. one that crossed into script
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame-{}", self.0)
    }
}

/// A message together with the frame that posted it
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub source: FrameId,
    pub payload: BridgeMessage,
}

/// Console of one preview frame, posting to the host
#[derive(Debug, Clone)]
pub struct SandboxConsole {
    frame: FrameId,
    sender: Sender<Envelope>,
}

impl SandboxConsole {
    pub fn new(frame: FrameId, sender: Sender<Envelope>) -> Self {
        Self { frame, sender }
    }

    pub fn frame(&self) -> FrameId {
        self.frame
    }

    /// First thing a preview does: reset the host transcript
    pub fn boot(&self) {
        self.post(BridgeMessage::Clear);
    }

    pub fn log(&self, heap: &ValueHeap, args: &[ValueId]) {
        self.emit(ConsoleKind::Log, heap, args);
    }

    pub fn error(&self, heap: &ValueHeap, args: &[ValueId]) {
        self.emit(ConsoleKind::Error, heap, args);
    }

    pub fn warn(&self, heap: &ValueHeap, args: &[ValueId]) {
        self.emit(ConsoleKind::Warn, heap, args);
    }

    pub fn info(&self, heap: &ValueHeap, args: &[ValueId]) {
        self.emit(ConsoleKind::Info, heap, args);
    }

    pub fn emit(&self, kind: ConsoleKind, heap: &ValueHeap, args: &[ValueId]) {
        self.emit_values(kind, serialize_args(heap, args));
    }

    /// Post already-serialized arguments
    pub fn emit_values(&self, kind: ConsoleKind, args: Vec<Value>) {
        self.post(BridgeMessage::Console(ConsoleMessage {
            kind,
            args,
            timestamp: timestamp(),
        }));
    }

    /// An uncaught error inside the preview
    pub fn report_error(&self, message: &str, file: &str, line: u32) {
        let location = format!("{}:{}", file, line);
        self.emit_values(
            ConsoleKind::Error,
            vec![Value::from(message), Value::from("at"), Value::from(location)],
        );
    }

    fn post(&self, payload: BridgeMessage) {
        let envelope = Envelope {
            source: self.frame,
            payload,
        };
        if self.sender.send(envelope).is_err() {
            trace!(frame = %self.frame, "Host gone, dropping console message");
        }
    }
}

/// Local wall-clock time, `HH:MM:SS`
pub fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
