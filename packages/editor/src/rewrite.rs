//! # Generative Rewrite Contract
//!
//! The editor can hand the whole document to an external collaborator along
//! with an instruction and get a rewritten document back. The collaborator
//! itself lives outside this crate; only the request/response shapes and the
//! response validation are defined here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    #[error("The rewrite response was missing required fields.")]
    MissingFields,

    #[error("The rewrite returned an invalid response. Please try again. ({0})")]
    Parse(String),

    #[error("Failed to get a valid rewrite response: {0}")]
    Collaborator(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>, image: Option<&ImagePayload>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            image_url: image.map(ImagePayload::data_url),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            content: content.into(),
            image_url: None,
        }
    }
}

/// An attached image, base64 encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub data: String,
    pub mime_type: String,
}

impl ImagePayload {
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    pub instruction: String,
    pub document: String,

    /// Conversation before this instruction
    pub history: Vec<ChatTurn>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImagePayload>,
}

impl RewriteRequest {
    /// The conversation as `role: content` lines
    pub fn transcript(&self) -> String {
        self.history
            .iter()
            .map(|turn| format!("{}: {}", turn.role.as_str(), turn.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResponse {
    pub source_doc: String,
    pub summary: String,
}

impl RewriteResponse {
    /// Decode and validate a collaborator reply. Both fields must be present
    /// and non-empty.
    pub fn from_json(json: &str) -> Result<Self, RewriteError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            source_doc: Option<String>,
            summary: Option<String>,
        }

        let raw: Raw =
            serde_json::from_str(json.trim()).map_err(|e| RewriteError::Parse(e.to_string()))?;
        match (raw.source_doc, raw.summary) {
            (Some(source_doc), Some(summary)) if !source_doc.is_empty() && !summary.is_empty() => {
                Ok(Self { source_doc, summary })
            }
            _ => Err(RewriteError::MissingFields),
        }
    }

    pub fn validate(self) -> Result<Self, RewriteError> {
        if self.source_doc.is_empty() || self.summary.is_empty() {
            return Err(RewriteError::MissingFields);
        }
        Ok(self)
    }
}

/// Something that can rewrite a document on instruction
pub trait RewriteCollaborator {
    fn rewrite(&mut self, request: &RewriteRequest) -> Result<RewriteResponse, RewriteError>;
}

impl<F> RewriteCollaborator for F
where
    F: FnMut(&RewriteRequest) -> Result<RewriteResponse, RewriteError>,
{
    fn rewrite(&mut self, request: &RewriteRequest) -> Result<RewriteResponse, RewriteError> {
        self(request)
    }
}
