//! Player actions.
//!
//! Every change to a chain comes from one of three discrete intents
//! forwarded by the presentation layer:
//! - "Select category" = arm or disarm a category
//! - "Click slot" = place the armed category, or erase when nothing is armed
//! - "Set gap word" = replace the text of one gap
//!
//! Actions are plain data so they can be recorded and replayed.

use serde::{Deserialize, Serialize};

use super::category::CategoryId;

/// A single player intent.
///
/// ## Example
///
/// ```
/// use linkwise::core::{Action, CategoryId};
///
/// let arm = Action::SelectCategory(CategoryId::Synonym);
/// let place = Action::ClickSlot(0);
/// let word = Action::set_gap_word(0, "swift");
/// assert_ne!(arm, place);
/// assert_eq!(word, Action::SetGapWord { index: 0, text: "swift".into() });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Toggle the armed category.
    SelectCategory(CategoryId),

    /// Tap a link slot.
    ClickSlot(usize),

    /// Replace the text of a gap word.
    SetGapWord {
        /// Gap index (0..link_count-1).
        index: usize,
        /// New text, stored verbatim.
        text: String,
    },
}

impl Action {
    /// Convenience constructor for `SetGapWord`.
    #[must_use]
    pub fn set_gap_word(index: usize, text: impl Into<String>) -> Self {
        Action::SetGapWord {
            index,
            text: text.into(),
        }
    }
}

/// A recorded action with its position in the history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Sequence number (starts at 0).
    pub sequence: u32,

    /// The action taken.
    pub action: Action,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u32, action: Action) -> Self {
        Self { sequence, action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_gap_word_constructor() {
        let action = Action::set_gap_word(1, " Jay ");
        match action {
            Action::SetGapWord { index, text } => {
                assert_eq!(index, 1);
                assert_eq!(text, " Jay ");
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(4, Action::ClickSlot(2));

        assert_eq!(record.sequence, 4);
        assert_eq!(record.action, Action::ClickSlot(2));
    }

    #[test]
    fn test_action_serialization() {
        let actions = vec![
            Action::SelectCategory(CategoryId::Rhyme),
            Action::ClickSlot(1),
            Action::set_gap_word(0, "quick"),
        ];
        let json = serde_json::to_string(&actions).unwrap();
        let back: Vec<Action> = serde_json::from_str(&json).unwrap();

        assert_eq!(actions, back);
    }
}
