//! A DOM-free surface with fixed-width cells
//!
//! Used by the CLI and by tests. Geometry follows a monospace textarea:
//! every column is `cell_width` wide, wide East-Asian characters take two
//! columns and tabs advance to the next multiple of `tab_size`.

use crate::style::{ComputedStyle, MirrorStyle};
use crate::surface::{MarkerOffset, MirrorSurface};
use crate::CaretError;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonospaceSurface {
    pub cell_width: f64,
    pub line_height: f64,
    pub padding: f64,
    pub border: f64,
    pub tab_size: usize,

    #[serde(skip)]
    mirror: Option<String>,
}

impl Default for MonospaceSurface {
    fn default() -> Self {
        Self {
            cell_width: 8.4,
            line_height: 21.0,
            padding: 16.0,
            border: 0.0,
            tab_size: 2,
            mirror: None,
        }
    }
}

impl MonospaceSurface {
    pub fn new(cell_width: f64, line_height: f64) -> Self {
        Self {
            cell_width,
            line_height,
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_border(mut self, border: f64) -> Self {
        self.border = border;
        self
    }

    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size.max(1);
        self
    }

    pub fn is_mounted(&self) -> bool {
        self.mirror.is_some()
    }

    /// Display columns taken by `line`
    pub fn columns(&self, line: &str) -> usize {
        let tab_size = self.tab_size.max(1);
        line.chars().fold(0, |column, c| match c {
            '\t' => (column / tab_size + 1) * tab_size,
            c => column + c.width().unwrap_or(0),
        })
    }
}

impl MirrorSurface for MonospaceSurface {
    fn computed_style(&self) -> Option<ComputedStyle> {
        if self.cell_width <= 0.0 || self.line_height <= 0.0 {
            return None;
        }

        let px = |value: f64| format!("{}px", value);
        let mut style = ComputedStyle::new()
            .with("font-family", "monospace")
            .with("line-height", px(self.line_height))
            .with("tab-size", self.tab_size.to_string())
            .with("box-sizing", "border-box");
        for side in ["top", "right", "bottom", "left"] {
            style.set(format!("padding-{}", side), px(self.padding));
            style.set(format!("border-{}-width", side), px(self.border));
        }
        Some(style)
    }

    fn mount_mirror(&mut self, _style: &MirrorStyle, before: &str, _marker: &str) -> Result<(), CaretError> {
        if self.mirror.is_some() {
            return Err(CaretError::Mount("mirror already mounted".to_string()));
        }
        self.mirror = Some(before.to_string());
        Ok(())
    }

    fn marker_offset(&self) -> Result<MarkerOffset, CaretError> {
        let before = self
            .mirror
            .as_deref()
            .ok_or_else(|| CaretError::Measure("mirror not mounted".to_string()))?;

        let row = before.matches('\n').count();
        let last_line = before.rsplit('\n').next().unwrap_or("");

        Ok(MarkerOffset {
            top: self.padding + row as f64 * self.line_height,
            left: self.padding + self.columns(last_line) as f64 * self.cell_width,
        })
    }

    fn unmount_mirror(&mut self) {
        self.mirror = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_with_tabs_and_wide_chars() {
        let surface = MonospaceSurface::new(10.0, 20.0).with_tab_size(4);
        assert_eq!(surface.columns("abc"), 3);
        assert_eq!(surface.columns("a\tb"), 5);
        assert_eq!(surface.columns("\t"), 4);
        assert_eq!(surface.columns("日本"), 4);
    }

    #[test]
    fn test_measure_requires_mount() {
        let surface = MonospaceSurface::default();
        assert!(matches!(surface.marker_offset(), Err(CaretError::Measure(_))));
    }

    #[test]
    fn test_zero_metrics_are_unavailable() {
        let surface = MonospaceSurface::new(0.0, 20.0);
        assert!(surface.computed_style().is_none());
    }
}
