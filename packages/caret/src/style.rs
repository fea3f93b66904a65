//! Computed styles and the mirror style derived from them

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Properties copied from the live surface onto the mirror. Anything that
/// affects where a glyph lands belongs here.
pub const MIRRORED_PROPERTIES: &[&str] = &[
    "direction",
    "box-sizing",
    "width",
    "height",
    "overflow-x",
    "overflow-y",
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "font-style",
    "font-variant",
    "font-weight",
    "font-stretch",
    "font-size",
    "font-size-adjust",
    "line-height",
    "font-family",
    "text-align",
    "text-transform",
    "text-indent",
    "text-decoration",
    "letter-spacing",
    "word-spacing",
    "tab-size",
];

/// Overrides applied after copying so the mirror wraps nothing and stays
/// invisible
pub const FORCED_PROPERTIES: &[(&str, &str)] = &[
    ("white-space", "pre"),
    ("word-wrap", "normal"),
    ("position", "absolute"),
    ("visibility", "hidden"),
    ("overflow", "hidden"),
];

/// Line height multiplier used when the surface reports `normal`
const NORMAL_LINE_HEIGHT: f64 = 1.2;

/// Resolved style values of the live surface, keyed by CSS property name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputedStyle {
    values: BTreeMap<String, String>,
}

impl ComputedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.values.insert(property.into(), value.into());
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.values.get(property).map(String::as_str)
    }

    /// Pixel value of a property. Unparseable or missing values read as 0.
    pub fn px(&self, property: &str) -> f64 {
        self.get(property).and_then(parse_px).unwrap_or(0.0)
    }

    /// Line height in pixels, resolving `normal` against the font size
    pub fn line_height(&self) -> f64 {
        match self.get("line-height").and_then(parse_px) {
            Some(height) => height,
            None => self.px("font-size") * NORMAL_LINE_HEIGHT,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for ComputedStyle {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Style applied to the hidden mirror element, in application order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirrorStyle {
    pub declarations: Vec<(String, String)>,
}

impl MirrorStyle {
    /// Copy the mirrored properties and append the forced overrides
    pub fn from_computed(computed: &ComputedStyle) -> Self {
        let mut declarations: Vec<(String, String)> = MIRRORED_PROPERTIES
            .iter()
            .filter_map(|property| {
                computed
                    .get(property)
                    .map(|value| (property.to_string(), value.to_string()))
            })
            .collect();

        declarations.extend(
            FORCED_PROPERTIES
                .iter()
                .map(|(property, value)| (property.to_string(), value.to_string())),
        );

        Self { declarations }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Inline `style` attribute text
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Parse `"12px"`, `"12.5"` or `"0"`. Keywords such as `normal` yield `None`.
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}
