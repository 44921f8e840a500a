//! Read model for the presentation layer.
//!
//! A `ChainView` is a flat snapshot of everything needed to draw the puzzle:
//! category chips, slots, gaps and their visibility. It borrows nothing so a
//! host can serialize it or hold it across further actions.

use serde::Serialize;

use super::visibility::{gap_valid, Visibility};
use crate::core::{CategoryId, ChainState, PuzzleConfig};

/// Badge shown on a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SlotStatus {
    /// A category is placed.
    Linked,
    /// Empty, and a category is armed for placement.
    Ready,
    /// Empty with nothing armed.
    Empty,
}

/// One selectable category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryChip {
    pub id: CategoryId,
    pub label: &'static str,
    /// Some slot holds this category.
    pub placed: bool,
    /// This category is armed.
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub index: usize,
    pub category: Option<CategoryId>,
    pub label: Option<&'static str>,
    pub error: Option<String>,
    pub visible: bool,
    pub status: SlotStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GapView {
    pub index: usize,
    pub text: String,
    pub error: Option<String>,
    pub visible: bool,
    /// Valid text under a placed link.
    pub accepted: bool,
}

/// Snapshot of a whole puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChainView {
    pub title: String,
    pub start_word: String,
    pub end_word: String,
    pub selection: Option<CategoryId>,
    pub categories: Vec<CategoryChip>,
    pub slots: Vec<SlotView>,
    pub gaps: Vec<GapView>,
}

impl ChainView {
    /// Build the view of `state` under `config`.
    #[must_use]
    pub fn build(config: &PuzzleConfig, state: &ChainState) -> Self {
        let visibility = Visibility::of(state);

        let categories = CategoryId::ALL
            .into_iter()
            .map(|id| CategoryChip {
                id,
                label: id.label(),
                placed: state.slot_of(id).is_some(),
                active: state.selection == Some(id),
            })
            .collect();

        let slots = state
            .slots
            .iter()
            .enumerate()
            .map(|(index, slot)| SlotView {
                index,
                category: slot.category,
                label: slot.category.map(CategoryId::label),
                error: slot.error.clone(),
                visible: visibility.slot(index),
                status: match (slot.category, state.selection) {
                    (Some(_), _) => SlotStatus::Linked,
                    (None, Some(_)) => SlotStatus::Ready,
                    (None, None) => SlotStatus::Empty,
                },
            })
            .collect();

        let gaps = state
            .gaps
            .iter()
            .enumerate()
            .map(|(index, gap)| GapView {
                index,
                text: gap.text.clone(),
                error: gap.error.clone(),
                visible: visibility.gap(index),
                accepted: gap_valid(state, index),
            })
            .collect();

        Self {
            title: config.title.clone(),
            start_word: config.start_word.clone(),
            end_word: config.end_word.clone(),
            selection: state.selection,
            categories,
            slots,
            gaps,
        }
    }

    /// Chip for one category.
    #[must_use]
    pub fn chip(&self, id: CategoryId) -> Option<&CategoryChip> {
        self.categories.iter().find(|c| c.id == id)
    }
}
