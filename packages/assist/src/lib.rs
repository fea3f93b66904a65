//! # Jovibe Assist
//!
//! Editing assistance layered on the scanner: completion candidates, the
//! color-picker trigger, quick-insert palettes and tag balancing. Every
//! action resolves to an [`Insertion`] the host applies to its buffer.

pub mod color;
pub mod insertion;
pub mod quick;
pub mod suggest;

pub use color::{detect_trigger, ColorRequest, PALETTE};
pub use insertion::{close_nearest_tag, closing_tag_for, Insertion};
pub use quick::{quick_actions, CursorRule, QuickAction, QuickKind};
pub use suggest::{suggest, Assistance, Suggestion, SuggestionKind, MAX_SUGGESTIONS};
