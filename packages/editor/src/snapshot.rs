//! Serializable project state handed to and from the host

use crate::errors::EditorError;
use crate::history::History;
use crate::rewrite::ChatTurn;
use crate::template::{DEFAULT_PROJECT_NAME, DEFAULT_SOURCE_DOC};
use serde::{Deserialize, Serialize};

/// A project as the host persists it. The preview console is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    pub id: String,
    pub name: String,
    pub source_doc: String,

    #[serde(default)]
    pub history: History,

    #[serde(default)]
    pub chat_history: Vec<ChatTurn>,
}

impl ProjectSnapshot {
    /// A fresh project holding the starter document
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: DEFAULT_PROJECT_NAME.to_string(),
            source_doc: DEFAULT_SOURCE_DOC.to_string(),
            history: History::new(),
            chat_history: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string(self)?)
    }
}
