//! The surface abstraction and the guard that scopes a mounted mirror

use crate::style::{ComputedStyle, MirrorStyle};
use crate::CaretError;

/// Offset of the marker inside the mirror's padding box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarkerOffset {
    pub top: f64,
    pub left: f64,
}

/// A text surface that can host a hidden mirror for measurement
pub trait MirrorSurface {
    /// Resolved style of the live surface, `None` when it cannot be measured
    fn computed_style(&self) -> Option<ComputedStyle>;

    /// Mount a mirror holding `before` followed by a marker wrapping `marker`
    fn mount_mirror(&mut self, style: &MirrorStyle, before: &str, marker: &str) -> Result<(), CaretError>;

    fn marker_offset(&self) -> Result<MarkerOffset, CaretError>;

    /// Remove the mirror. Called exactly once per successful mount.
    fn unmount_mirror(&mut self);
}

/// Unmounts the mirror when dropped
pub struct MirrorGuard<'a, S: MirrorSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: MirrorSurface + ?Sized> MirrorGuard<'a, S> {
    pub fn mount(
        surface: &'a mut S,
        style: &MirrorStyle,
        before: &str,
        marker: &str,
    ) -> Result<Self, CaretError> {
        surface.mount_mirror(style, before, marker)?;
        Ok(Self { surface })
    }

    pub fn marker_offset(&self) -> Result<MarkerOffset, CaretError> {
        self.surface.marker_offset()
    }
}

impl<S: MirrorSurface + ?Sized> Drop for MirrorGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.unmount_mirror();
    }
}
