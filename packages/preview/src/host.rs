//! # Console Host
//!
//! The editor side of the bridge. Each load of the preview gets a fresh
//! [`FrameId`]; only messages from the most recent frame are accepted, so
//! late traffic from a replaced preview never reaches the transcript.

use crate::instrument::instrument;
use crate::protocol::{BridgeMessage, ConsoleMessage};
use crate::sandbox::{Envelope, FrameId, SandboxConsole};
use crate::PreviewError;
use std::sync::mpsc::{channel, Receiver, Sender};
use tracing::{debug, trace};

/// A preview ready to be mounted
#[derive(Debug, Clone)]
pub struct PreviewFrame {
    pub id: FrameId,

    /// The instrumented document
    pub srcdoc: String,

    /// Handle the preview uses to reach the host
    pub console: SandboxConsole,
}

pub struct ConsoleHost {
    sender: Sender<Envelope>,
    receiver: Receiver<Envelope>,
    next_frame: u64,
    active: Option<FrameId>,
    transcript: Vec<ConsoleMessage>,
}

impl ConsoleHost {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            next_frame: 0,
            active: None,
            transcript: Vec::new(),
        }
    }

    /// Instrument `document` and make its frame the only accepted source.
    /// Earlier frames are not stopped; their messages are ignored from now on.
    pub fn load(&mut self, document: &str) -> PreviewFrame {
        self.next_frame += 1;
        let id = FrameId(self.next_frame);
        self.active = Some(id);
        debug!(frame = %id, bytes = document.len(), "Loaded preview");

        PreviewFrame {
            id,
            srcdoc: instrument(document),
            console: SandboxConsole::new(id, self.sender.clone()),
        }
    }

    pub fn active_frame(&self) -> Option<FrameId> {
        self.active
    }

    /// Drain queued messages in arrival order. Returns how many were
    /// accepted.
    pub fn pump(&mut self) -> usize {
        let mut accepted = 0;
        while let Ok(envelope) = self.receiver.try_recv() {
            if self.receive(envelope) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Handle one message. Returns false when it was dropped.
    pub fn receive(&mut self, envelope: Envelope) -> bool {
        if Some(envelope.source) != self.active {
            trace!(source = %envelope.source, "Dropping message from inactive frame");
            return false;
        }

        match envelope.payload {
            BridgeMessage::Clear => self.transcript.clear(),
            BridgeMessage::Console(message) => self.transcript.push(message),
        }
        true
    }

    /// Handle a raw payload posted by `source`, e.g. from a browser
    /// `message` event. Malformed payloads are dropped.
    pub fn receive_json(&mut self, source: FrameId, json: &str) -> bool {
        match BridgeMessage::from_json(json) {
            Ok(payload) => self.receive(Envelope { source, payload }),
            Err(e) => {
                trace!(source = %source, error = %e, "Dropping malformed message");
                false
            }
        }
    }

    /// Same as [`receive_json`](Self::receive_json) but reports why a
    /// payload was rejected
    pub fn try_receive_json(&mut self, source: FrameId, json: &str) -> Result<bool, PreviewError> {
        let payload = BridgeMessage::from_json(json)?;
        Ok(self.receive(Envelope { source, payload }))
    }

    pub fn messages(&self) -> &[ConsoleMessage] {
        &self.transcript
    }

    pub fn clear(&mut self) {
        self.transcript.clear();
    }
}

impl Default for ConsoleHost {
    fn default() -> Self {
        Self::new()
    }
}
