//! # Jovibe Caret
//!
//! Pixel position of a text cursor inside a plain text surface.
//!
//! A textarea does not expose caret coordinates, so the position is found by
//! building a hidden mirror that reproduces the surface's typography, filling
//! it with the text up to the cursor and measuring a marker placed right
//! after it. The surface is abstracted behind [`MirrorSurface`] so the same
//! engine drives the browser DOM and the fixed-cell [`MonospaceSurface`].
//!
//! ```text
//! computed style ──► MirrorStyle ──► mount(before, marker) ──► measure ──► unmount
//! ```

pub mod monospace;
pub mod style;
pub mod surface;

pub use monospace::MonospaceSurface;
pub use style::{parse_px, ComputedStyle, MirrorStyle, FORCED_PROPERTIES, MIRRORED_PROPERTIES};
pub use surface::{MarkerOffset, MirrorGuard, MirrorSurface};

use jovibe_scanner::clamp_offset;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaretError {
    #[error("Surface metrics unavailable")]
    MetricsUnavailable,

    #[error("Failed to mount mirror: {0}")]
    Mount(String),

    #[error("Failed to measure marker: {0}")]
    Measure(String),
}

/// Caret coordinates relative to the surface's border box, before scrolling
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaretPosition {
    pub top: f64,
    pub left: f64,
    pub line_height: f64,
}

impl CaretPosition {
    /// Position within the visible viewport of a scrolled surface
    pub fn in_viewport(&self, scroll_top: f64, scroll_left: f64) -> Self {
        Self {
            top: self.top - scroll_top,
            left: self.left - scroll_left,
            line_height: self.line_height,
        }
    }
}

/// Marker content at end-of-document so the marker still has a box
const END_MARKER: &str = ".";

/// Compute the caret position for a byte offset in `text`
pub fn caret_position<S>(surface: &mut S, text: &str, cursor: usize) -> Result<CaretPosition, CaretError>
where
    S: MirrorSurface + ?Sized,
{
    let computed = surface.computed_style().ok_or(CaretError::MetricsUnavailable)?;
    let style = MirrorStyle::from_computed(&computed);

    let cursor = clamp_offset(text, cursor);
    let (before, after) = text.split_at(cursor);
    let marker = if after.is_empty() { END_MARKER } else { after };

    let offset = {
        let mirror = MirrorGuard::mount(surface, &style, before, marker)?;
        mirror.marker_offset()?
    };

    let position = CaretPosition {
        top: offset.top + computed.px("border-top-width"),
        left: offset.left + computed.px("border-left-width"),
        line_height: computed.line_height(),
    };
    trace!(cursor, top = position.top, left = position.left, "Measured caret");
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_viewport_subtracts_scroll() {
        let position = CaretPosition {
            top: 120.0,
            left: 40.0,
            line_height: 20.0,
        };
        let visible = position.in_viewport(100.0, 10.0);
        assert_eq!(visible.top, 20.0);
        assert_eq!(visible.left, 30.0);
        assert_eq!(visible.line_height, 20.0);
    }
}
