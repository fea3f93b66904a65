//! # Jovibe Editor
//!
//! Editing state for a single combined HTML/CSS/JS document.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ scanner + assist: context, suggestions,     │
//! │ insertions (stateless, per keystroke)       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - DocumentManager (live text, history,     │
//! │    quiescence timer)                        │
//! │  - overlay state, caret placement           │
//! │  - rewrite conversation, snapshots          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ preview: instrumented document + console    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The crate is synchronous. Time enters only as `now_ms` arguments so the
//! host's event loop decides when quiescence is checked.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jovibe_editor::{EditSession, EditorConfig};
//! use jovibe_lexicon::Lexicon;
//!
//! let mut session = EditSession::new("project-1", Lexicon::builtin(), EditorConfig::default());
//! session.on_input("<di", 3, now_ms);
//! session.accept_suggestion(None, now_ms);
//!
//! // From the host's timer
//! session.tick(now_ms);
//! ```

mod config;
mod document;
mod errors;
mod history;
mod manager;
mod quiescence;
mod rewrite;
mod session;
mod snapshot;
mod template;

pub use config::{EditorConfig, DEFAULT_HISTORY_LIMIT, DEFAULT_QUIESCENCE_MS};
pub use document::Document;
pub use errors::EditorError;
pub use history::History;
pub use manager::DocumentManager;
pub use quiescence::QuiescenceTimer;
pub use rewrite::{
    ChatRole, ChatTurn, ImagePayload, RewriteCollaborator, RewriteError, RewriteRequest, RewriteResponse,
};
pub use session::{EditSession, Overlay};
pub use snapshot::ProjectSnapshot;
pub use template::{DEFAULT_PROJECT_NAME, DEFAULT_SOURCE_DOC};
