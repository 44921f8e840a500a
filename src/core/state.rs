//! Chain state: selection, link slots, gap words, history.
//!
//! ## LinkSlot
//!
//! One connector between two words: an optional category and an optional
//! placement error.
//!
//! ## GapWord
//!
//! The typed word after a link. Gap `i` sits between slot `i` and slot
//! `i + 1` and is judged against slot `i`'s category.
//!
//! ## ChainState
//!
//! Everything that changes during play. Uses `im` persistent vectors so a
//! transition can return a new state without deep copies.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::category::CategoryId;

/// A link slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSlot {
    /// Assigned category, `None` while empty.
    pub category: Option<CategoryId>,

    /// Placement error from the last rejected placement.
    pub error: Option<String>,
}

/// A gap word.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapWord {
    /// Text as typed (not trimmed).
    pub text: String,

    /// Rule failure for the current text, if any.
    pub error: Option<String>,
}

impl GapWord {
    /// True if the trimmed text is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Mutable part of a puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainState {
    /// Armed category, if any.
    pub selection: Option<CategoryId>,

    /// Link slots, one per link.
    pub slots: Vector<LinkSlot>,

    /// Gap words, one fewer than slots.
    pub gaps: Vector<GapWord>,

    /// Accepted actions in order.
    pub history: Vector<ActionRecord>,
}

impl ChainState {
    /// Create an empty chain with `link_count` slots.
    #[must_use]
    pub fn new(link_count: usize) -> Self {
        Self {
            selection: None,
            slots: (0..link_count).map(|_| LinkSlot::default()).collect(),
            gaps: (0..link_count.saturating_sub(1))
                .map(|_| GapWord::default())
                .collect(),
            history: Vector::new(),
        }
    }

    /// Number of link slots.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of gap words.
    #[must_use]
    pub fn gap_count(&self) -> usize {
        self.gaps.len()
    }

    /// Category assigned to a slot (`None` if empty or out of range).
    #[must_use]
    pub fn category_at(&self, slot: usize) -> Option<CategoryId> {
        self.slots.get(slot).and_then(|s| s.category)
    }

    /// Index of the slot holding `category`, if placed.
    #[must_use]
    pub fn slot_of(&self, category: CategoryId) -> Option<usize> {
        self.slots.iter().position(|s| s.category == Some(category))
    }

    /// Text of a gap (empty if out of range).
    #[must_use]
    pub fn gap_text(&self, gap: usize) -> &str {
        self.gaps.get(gap).map_or("", |g| g.text.as_str())
    }

    /// Word preceding slot `index`: the start word for slot 0, otherwise
    /// the text of the gap before it.
    #[must_use]
    pub fn previous_word<'a>(&'a self, start_word: &'a str, index: usize) -> &'a str {
        if index == 0 {
            start_word
        } else {
            self.gap_text(index - 1)
        }
    }

    // === Action History ===

    /// Record an action in history.
    pub fn record_action(&mut self, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(sequence, action));
    }
}
