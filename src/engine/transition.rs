//! State transitions.
//!
//! Every transition is a pure function from the current state and one
//! action to the next state. The input state is never modified; a failed
//! call (bad index) returns an error and produces no state.
//!
//! Accepted actions are appended to the new state's history.

use tracing::{debug, warn};

use crate::core::{Action, CategoryId, ChainError, ChainState, LinkSlot, PuzzleConfig, Result};
use crate::rules::{gap_error, placement_error};

/// Apply any action.
pub fn apply(config: &PuzzleConfig, state: &ChainState, action: Action) -> Result<ChainState> {
    match action {
        Action::SelectCategory(category) => Ok(select_category(state, category)),
        Action::ClickSlot(index) => click_slot(config, state, index),
        Action::SetGapWord { index, text } => set_gap_word(config, state, index, text),
    }
}

/// Toggle the armed category.
///
/// Selecting the armed category disarms it; selecting another replaces it.
#[must_use]
pub fn select_category(state: &ChainState, category: CategoryId) -> ChainState {
    let mut next = state.clone();
    next.selection = match state.selection {
        Some(armed) if armed == category => None,
        _ => Some(category),
    };
    debug!(category = category.id(), armed = ?next.selection, "select category");
    next.record_action(Action::SelectCategory(category));
    next
}

/// Tap a link slot.
///
/// With nothing armed the slot is erased. Otherwise the armed category is
/// placed (moving it off any other slot) unless its placement rule rejects
/// the preceding word, in which case only the slot's error changes. The
/// selection is disarmed either way.
pub fn click_slot(config: &PuzzleConfig, state: &ChainState, index: usize) -> Result<ChainState> {
    if index >= state.link_count() {
        warn!(index, len = state.link_count(), "click on missing slot");
        return Err(ChainError::SlotOutOfRange {
            index,
            len: state.link_count(),
        });
    }

    let mut next = state.clone();
    next.record_action(Action::ClickSlot(index));

    let Some(category) = next.selection.take() else {
        debug!(slot = index, "erase link");
        next.slots[index] = LinkSlot::default();
        revalidate_gap(config, &mut next, index);
        return Ok(next);
    };

    let rejection = placement_error(
        category,
        next.previous_word(&config.start_word, index),
        &config.lexicon,
    );
    if let Some(message) = rejection {
        debug!(slot = index, category = category.id(), %message, "placement rejected");
        next.slots[index].error = Some(message);
        return Ok(next);
    }

    // one slot per category
    let displaced: Vec<usize> = next
        .slots
        .iter()
        .enumerate()
        .filter(|(i, slot)| *i != index && slot.category == Some(category))
        .map(|(i, _)| i)
        .collect();
    for i in displaced {
        next.slots[i].category = None;
        revalidate_gap(config, &mut next, i);
    }

    next.slots[index] = LinkSlot {
        category: Some(category),
        error: None,
    };
    revalidate_gap(config, &mut next, index);
    debug!(slot = index, category = category.id(), "link placed");

    Ok(next)
}

/// Replace a gap word's text and re-judge it.
///
/// The following gap is re-judged too, since this text is its previous word.
pub fn set_gap_word(
    config: &PuzzleConfig,
    state: &ChainState,
    index: usize,
    text: impl Into<String>,
) -> Result<ChainState> {
    if index >= state.gap_count() {
        warn!(index, len = state.gap_count(), "edit of missing gap");
        return Err(ChainError::GapOutOfRange {
            index,
            len: state.gap_count(),
        });
    }

    let text = text.into();
    let mut next = state.clone();
    next.record_action(Action::SetGapWord {
        index,
        text: text.clone(),
    });
    next.gaps[index].text = text;

    revalidate_gap(config, &mut next, index);
    revalidate_gap(config, &mut next, index + 1);
    debug!(gap = index, error = ?next.gaps[index].error, "gap word set");

    Ok(next)
}

/// Recompute the stored error for one gap. Out-of-range indices are ignored.
fn revalidate_gap(config: &PuzzleConfig, state: &mut ChainState, gap: usize) {
    if gap >= state.gap_count() {
        return;
    }
    let error = gap_error(
        state.category_at(gap),
        state.previous_word(&config.start_word, gap),
        state.gap_text(gap),
        &config.lexicon,
    );
    state.gaps[gap].error = error;
}
