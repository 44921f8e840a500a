//! The chain engine: one puzzle instance and its current state.

use tracing::{debug, info};

use super::transition;
use super::view::ChainView;
use super::visibility::Visibility;
use crate::core::{
    Action, ActionRecord, CategoryId, ChainState, GapWord, LinkSlot, PuzzleConfig, Result,
};

/// Owns a puzzle configuration and the current chain state.
///
/// Each inbound call runs one transition and replaces the state as a single
/// step. Failed calls leave the state as it was.
///
/// ## Example
///
/// ```
/// use linkwise::{CategoryId, ChainEngine};
///
/// let mut engine = ChainEngine::daily();
/// engine.select_category(CategoryId::Synonym);
/// engine.click_slot(0).unwrap();
/// engine.set_gap_word(0, "swift").unwrap();
///
/// assert!(engine.visibility().slot(1));
/// ```
#[derive(Clone, Debug)]
pub struct ChainEngine {
    config: PuzzleConfig,
    state: ChainState,
}

impl ChainEngine {
    /// Create an engine with an empty chain.
    pub fn new(config: PuzzleConfig) -> Result<Self> {
        config.validate()?;
        info!(
            start = %config.start_word,
            end = %config.end_word,
            links = config.link_count,
            "chain engine created"
        );
        let state = ChainState::new(config.link_count);
        Ok(Self { config, state })
    }

    /// Engine for the shipped daily puzzle.
    #[must_use]
    pub fn daily() -> Self {
        let config = PuzzleConfig::daily();
        let state = ChainState::new(config.link_count);
        Self { config, state }
    }

    /// Rebuild an engine by applying `actions` to a fresh chain.
    ///
    /// Stops at the first action that fails.
    pub fn replay<I>(config: PuzzleConfig, actions: I) -> Result<Self>
    where
        I: IntoIterator<Item = Action>,
    {
        let mut engine = Self::new(config)?;
        for action in actions {
            engine.dispatch(action)?;
        }
        debug!(actions = engine.state.history.len(), "replay complete");
        Ok(engine)
    }

    // === Inbound ===

    /// Apply any action.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        self.state = transition::apply(&self.config, &self.state, action)?;
        Ok(())
    }

    /// Arm `category`, or disarm it if already armed.
    pub fn select_category(&mut self, category: CategoryId) {
        self.state = transition::select_category(&self.state, category);
    }

    /// Arm a category by its string id (`"synonym"`, `"rhyme"`, `"bird"`).
    pub fn select_category_id(&mut self, id: &str) -> Result<()> {
        let category = id.parse()?;
        self.select_category(category);
        Ok(())
    }

    /// Tap a link slot.
    pub fn click_slot(&mut self, index: usize) -> Result<()> {
        self.state = transition::click_slot(&self.config, &self.state, index)?;
        Ok(())
    }

    /// Replace the text of a gap word.
    pub fn set_gap_word(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        self.state = transition::set_gap_word(&self.config, &self.state, index, text)?;
        Ok(())
    }

    // === Read model ===

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &ChainState {
        &self.state
    }

    #[must_use]
    pub fn start_word(&self) -> &str {
        &self.config.start_word
    }

    #[must_use]
    pub fn end_word(&self) -> &str {
        &self.config.end_word
    }

    /// Armed category, if any.
    #[must_use]
    pub fn selection(&self) -> Option<CategoryId> {
        self.state.selection
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&LinkSlot> {
        self.state.slots.get(index)
    }

    #[must_use]
    pub fn gap(&self, index: usize) -> Option<&GapWord> {
        self.state.gaps.get(index)
    }

    /// Accepted actions in order.
    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.state.history.iter()
    }

    /// Current visibility flags.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        Visibility::of(&self.state)
    }

    /// Full rendering snapshot.
    #[must_use]
    pub fn view(&self) -> ChainView {
        ChainView::build(&self.config, &self.state)
    }
}

impl Default for ChainEngine {
    fn default() -> Self {
        Self::daily()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ChainError;

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = ChainEngine::new(PuzzleConfig::daily().with_link_count(0));
        assert!(matches!(result, Err(ChainError::InvalidConfig(_))));
    }

    #[test]
    fn test_daily_matches_new() {
        let engine = ChainEngine::daily();
        let built = ChainEngine::new(PuzzleConfig::daily()).unwrap();

        assert_eq!(engine.state(), built.state());
        assert_eq!(engine.start_word(), "Fast");
        assert_eq!(engine.end_word(), "Day");
    }

    #[test]
    fn test_select_by_id() {
        let mut engine = ChainEngine::daily();
        engine.select_category_id("rhyme").unwrap();
        assert_eq!(engine.selection(), Some(CategoryId::Rhyme));

        let err = engine.select_category_id("colour").unwrap_err();
        assert_eq!(err, ChainError::UnknownCategory("colour".into()));
        assert_eq!(engine.selection(), Some(CategoryId::Rhyme));
    }

    #[test]
    fn test_failed_call_keeps_state() {
        let mut engine = ChainEngine::daily();
        engine.select_category(CategoryId::Synonym);
        let before = engine.state().clone();

        assert!(engine.click_slot(5).is_err());
        assert!(engine.set_gap_word(9, "x").is_err());
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.selection(), Some(CategoryId::Synonym));
    }

    #[test]
    fn test_replay_matches_live_play() {
        let actions = vec![
            Action::SelectCategory(CategoryId::Synonym),
            Action::ClickSlot(0),
            Action::set_gap_word(0, "swift"),
            Action::SelectCategory(CategoryId::Bird),
            Action::ClickSlot(1),
        ];

        let mut live = ChainEngine::daily();
        for action in actions.clone() {
            live.dispatch(action).unwrap();
        }
        let replayed = ChainEngine::replay(PuzzleConfig::daily(), actions).unwrap();

        assert_eq!(live.state(), replayed.state());
        assert_eq!(replayed.history().count(), 5);
        assert_eq!(replayed.slot(1).and_then(|s| s.category), Some(CategoryId::Bird));
    }

    #[test]
    fn test_replay_stops_on_error() {
        let actions = vec![Action::ClickSlot(0), Action::ClickSlot(4)];
        let result = ChainEngine::replay(PuzzleConfig::daily(), actions);

        assert_eq!(result.unwrap_err(), ChainError::SlotOutOfRange { index: 4, len: 3 });
    }
}
