//! The chain engine.
//!
//! - `transition`: pure `(state, action) -> state` functions
//! - `visibility`: derived progressive-disclosure flags
//! - `view`: rendering snapshot for the presentation layer
//! - `chain`: `ChainEngine`, which owns a puzzle and its current state

pub mod transition;
pub mod visibility;
pub mod view;
pub mod chain;

pub use chain::ChainEngine;
pub use visibility::{gap_valid, gap_visible, slot_visible, Visibility};
pub use view::{CategoryChip, ChainView, GapView, SlotStatus, SlotView};
