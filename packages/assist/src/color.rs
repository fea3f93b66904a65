//! Color-trigger detection and the picker palette.
//!
//! Typing `#` at the start of a value or after whitespace, `:` or `,` opens a
//! color picker instead of the suggestion list. The request carries what has
//! been typed so far so the picker can narrow its swatches.

use crate::insertion::Insertion;
use crate::suggest::Suggestion;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static COLOR_TRIGGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[\s:,])(#[0-9a-fA-F]*)$").expect("valid color trigger regex"));

/// Curated swatches shown by the picker, in display order (ten per row)
pub const PALETTE: &[&str] = &[
    "#000000", "#434343", "#666666", "#999999", "#b7b7b7", "#cccccc", "#d9d9d9", "#efefef", "#f3f3f3", "#ffffff",
    "#980000", "#ff0000", "#ff9900", "#ffff00", "#00ff00", "#00ffff", "#4a86e8", "#0000ff", "#9900ff", "#ff00ff",
    "#e6b8af", "#f4cccc", "#fce5cd", "#fff2cc", "#d9ead3", "#d0e0e3", "#c9daf8", "#cfe2f3", "#d9d2e9", "#ead1dc",
    "#dd7e6b", "#ea9999", "#f9cb9c", "#ffe599", "#b6d7a8", "#a2c4c9", "#a4c2f4", "#9fc5e8", "#b4a7d6", "#d5a6bd",
    "#cc4125", "#e06666", "#f6b26b", "#ffd966", "#93c47d", "#76a5af", "#6d9eeb", "#6fa8dc", "#8e7cc3", "#c27ba0",
    "#a61c00", "#cc0000", "#e69138", "#f1c232", "#6aa84f", "#45818e", "#3c78d8", "#3d85c6", "#674ea7", "#a64d79",
    "#85200c", "#990000", "#b45f06", "#bf9000", "#38761d", "#134f5c", "#1155cc", "#0b5394", "#351c75", "#741b47",
    "#5b0f00", "#660000", "#783f04", "#7f6000", "#274e13", "#0c343d", "#073763", "#20124d", "#4c1130",
];

/// Ask the host to open the color picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorRequest {
    /// What has been typed so far, including the leading `#`
    pub partial: String,

    /// Offset of the `#`; a picked color replaces from here to the cursor
    pub start: usize,
}

impl ColorRequest {
    /// Palette entries that extend what has been typed
    pub fn palette_matches(&self) -> impl Iterator<Item = &'static str> + '_ {
        PALETTE.iter().copied().filter(move |swatch| {
            swatch.len() >= self.partial.len()
                && swatch[..self.partial.len()].eq_ignore_ascii_case(&self.partial)
        })
    }

    /// The suggestion produced by picking `color`
    pub fn suggestion(&self, color: &str) -> Suggestion {
        Suggestion::color(color)
    }

    /// Replace the partial value with `color`
    pub fn accept(&self, color: &str, cursor: usize) -> Insertion {
        self.suggestion(color).insertion(self.start, cursor)
    }
}

/// Detect a color trigger ending exactly at the end of `before`
pub fn detect_trigger(before: &str) -> Option<ColorRequest> {
    let captures = COLOR_TRIGGER.captures(before)?;
    let partial = captures.get(1)?;
    Some(ColorRequest {
        partial: partial.as_str().to_string(),
        start: partial.start(),
    })
}
