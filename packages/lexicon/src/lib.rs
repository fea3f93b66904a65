//! # Jovibe Lexicon
//!
//! Static word lists that drive completion: tag names, attribute names, CSS
//! properties and their allowed values, script keywords/globals, and the set
//! of void elements.
//!
//! The lexicon is external data as far as the engines are concerned. Hosts
//! either use [`Lexicon::builtin`] or load their own lists from JSON:
//!
//! ```json
//! {
//!   "tags": ["div", "span"],
//!   "attributes": ["class", "id"],
//!   "cssProperties": ["color"],
//!   "cssValues": { "color": ["red", "blue"] },
//!   "keywords": ["const", "let"],
//!   "voidElements": ["br", "img"]
//! }
//! ```

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use thiserror::Error;

pub use builtin::{
    CSS_PROPERTIES, CSS_PROPERTY_VALUES, HTML_ATTRIBUTES, HTML_TAGS, SCRIPT_KEYWORDS,
    VOID_ELEMENTS,
};

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LexiconResult<T> = Result<T, LexiconError>;

/// Ordered completion vocabularies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lexicon {
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub attributes: Vec<String>,

    #[serde(default)]
    pub css_properties: Vec<String>,

    /// Allowed values keyed by lowercase property name
    #[serde(default)]
    pub css_values: HashMap<String, Vec<String>>,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub void_elements: BTreeSet<String>,
}

impl Lexicon {
    /// The default vocabulary shipped with the editor
    pub fn builtin() -> Self {
        Self {
            tags: owned(HTML_TAGS),
            attributes: owned(HTML_ATTRIBUTES),
            css_properties: owned(CSS_PROPERTIES),
            css_values: CSS_PROPERTY_VALUES
                .iter()
                .map(|(property, values)| (property.to_string(), owned(values)))
                .collect(),
            keywords: owned(SCRIPT_KEYWORDS),
            void_elements: VOID_ELEMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parse a lexicon from JSON. Missing groups are empty.
    pub fn from_json(json: &str) -> LexiconResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a lexicon file
    pub fn load(path: impl AsRef<Path>) -> LexiconResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Whether `tag` never takes a closing tag (case-insensitive)
    pub fn is_void(&self, tag: &str) -> bool {
        if self.void_elements.contains(tag) {
            return true;
        }
        self.void_elements
            .iter()
            .any(|name| name.eq_ignore_ascii_case(tag))
    }

    /// Allowed values for a CSS property, if the lexicon knows any
    pub fn values_for(&self, property: &str) -> Option<&[String]> {
        self.css_values
            .get(&property.to_ascii_lowercase())
            .map(Vec::as_slice)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_preserves_declared_order() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.tags.first().map(String::as_str), Some("a"));
        assert_eq!(lexicon.tags.len(), HTML_TAGS.len());
        let colors = lexicon.values_for("color").unwrap();
        assert_eq!(colors[0], "red");
        assert_eq!(colors[1], "blue");
    }

    #[test]
    fn test_void_lookup_is_case_insensitive() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.is_void("br"));
        assert!(lexicon.is_void("IMG"));
        assert!(!lexicon.is_void("div"));
    }

    #[test]
    fn test_values_for_unknown_property() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.values_for("margin").is_none());
        assert!(lexicon.values_for("Display").is_some());
    }

    #[test]
    fn test_from_json_defaults_missing_groups() {
        let json = r#"{ "tags": ["div", "span"], "cssValues": { "color": ["red"] } }"#;
        let lexicon = Lexicon::from_json(json).unwrap();
        assert_eq!(lexicon.tags, vec!["div", "span"]);
        assert!(lexicon.attributes.is_empty());
        assert!(lexicon.void_elements.is_empty());
        assert_eq!(lexicon.values_for("color").unwrap(), &["red".to_string()]);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Lexicon::from_json("{ tags: "),
            Err(LexiconError::Json(_))
        ));
    }
}
