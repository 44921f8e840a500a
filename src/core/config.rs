//! Puzzle configuration.
//!
//! A puzzle instance is fixed data supplied at startup:
//! - the start and end words
//! - how many link slots sit between them
//! - the lexicon the word rules consult
//!
//! The engine never hardcodes an instance; `PuzzleConfig::daily()` is just
//! the one the game ships with.

use serde::{Deserialize, Serialize};

use super::error::{ChainError, Result};
use crate::lexicon::Lexicon;

/// Complete puzzle configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Display title (for the presentation layer).
    pub title: String,

    /// Given first word of the chain.
    pub start_word: String,

    /// Given last word of the chain.
    pub end_word: String,

    /// Number of link slots between the start and end words.
    pub link_count: usize,

    /// Synonym table and bird-word set.
    pub lexicon: Lexicon,
}

impl PuzzleConfig {
    /// Create a configuration with three links and an empty lexicon.
    pub fn new(start_word: impl Into<String>, end_word: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            start_word: start_word.into(),
            end_word: end_word.into(),
            link_count: 3,
            lexicon: Lexicon::new(),
        }
    }

    /// The shipped puzzle: Fast to Day through three links.
    pub fn daily() -> Self {
        Self::new("Fast", "Day")
            .with_title("Linkwise · Daily 1")
            .with_lexicon(Lexicon::daily())
    }

    /// Set the number of link slots.
    #[must_use]
    pub fn with_link_count(mut self, count: usize) -> Self {
        self.link_count = count;
        self
    }

    /// Set the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the lexicon.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Number of gap words (one between each pair of consecutive links).
    #[must_use]
    pub fn gap_count(&self) -> usize {
        self.link_count.saturating_sub(1)
    }

    /// Check the configuration can back a playable chain.
    pub fn validate(&self) -> Result<()> {
        if self.link_count == 0 {
            return Err(ChainError::InvalidConfig("must have at least 1 link".into()));
        }
        if self.start_word.trim().is_empty() {
            return Err(ChainError::InvalidConfig("start word is empty".into()));
        }
        if self.end_word.trim().is_empty() {
            return Err(ChainError::InvalidConfig("end word is empty".into()));
        }
        Ok(())
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::daily()
    }
}
