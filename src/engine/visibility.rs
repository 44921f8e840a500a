//! Progressive disclosure.
//!
//! The chain reveals itself left to right:
//! - slot 0 (and the start and end words) are always shown
//! - gap `i` is shown once slot `i` is shown and holds a category
//! - slot `i + 1` is shown once gap `i` is shown and valid
//!
//! Nothing here is stored; it is recomputed from the state on demand.

use serde::Serialize;

use crate::core::ChainState;

/// A gap is valid when its link holds a category and its text is
/// non-blank with no error.
#[must_use]
pub fn gap_valid(state: &ChainState, gap: usize) -> bool {
    state.category_at(gap).is_some()
        && state
            .gaps
            .get(gap)
            .is_some_and(|g| !g.is_blank() && g.error.is_none())
}

/// Is slot `index` shown?
#[must_use]
pub fn slot_visible(state: &ChainState, index: usize) -> bool {
    Visibility::of(state).slot(index)
}

/// Is gap `index` shown?
#[must_use]
pub fn gap_visible(state: &ChainState, index: usize) -> bool {
    Visibility::of(state).gap(index)
}

/// Visibility flags for every slot and gap of one state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Visibility {
    /// One flag per link slot.
    pub slots: Vec<bool>,
    /// One flag per gap word.
    pub gaps: Vec<bool>,
}

impl Visibility {
    /// Compute the flags for `state`.
    #[must_use]
    pub fn of(state: &ChainState) -> Self {
        let mut slots = Vec::with_capacity(state.link_count());
        let mut gaps = Vec::with_capacity(state.gap_count());

        let mut open = true;
        for i in 0..state.link_count() {
            slots.push(open);
            if i < state.gap_count() {
                let shown = open && state.category_at(i).is_some();
                gaps.push(shown);
                open = shown && gap_valid(state, i);
            }
        }

        Self { slots, gaps }
    }

    /// Slot flag (false if out of range).
    #[must_use]
    pub fn slot(&self, index: usize) -> bool {
        self.slots.get(index).copied().unwrap_or(false)
    }

    /// Gap flag (false if out of range).
    #[must_use]
    pub fn gap(&self, index: usize) -> bool {
        self.gaps.get(index).copied().unwrap_or(false)
    }

    /// Number of slots currently shown.
    #[must_use]
    pub fn revealed_slots(&self) -> usize {
        self.slots.iter().filter(|v| **v).count()
    }
}
