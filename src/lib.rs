//! # linkwise
//!
//! Engine for a single-player word-chain puzzle.
//!
//! The player connects a fixed start word to a fixed end word through a row
//! of link slots. Each slot takes one category (synonym, rhyme, type of
//! bird) and is followed by a typed gap word that must satisfy that category
//! relative to the word before it.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: All mutable puzzle state lives in `ChainState`.
//!    Transitions are pure functions from a state and an action to the next
//!    state.
//!
//! 2. **Validation Is Data**: Word-rule failures are stored on the slot or
//!    gap that produced them. `ChainError` is reserved for calls the engine
//!    cannot honour (bad indices, bad config).
//!
//! 3. **Derived Visibility**: Which slots and gaps are shown is recomputed
//!    from state on demand, never stored.
//!
//! ## Modules
//!
//! - `core`: Categories, configuration, actions, state, errors
//! - `lexicon`: Synonym table, bird words, rhyme keys
//! - `rules`: Placement and gap-word validation
//! - `engine`: Transitions, visibility, read model, `ChainEngine`

pub mod core;
pub mod lexicon;
pub mod rules;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, CategoryId, ChainError, ChainState, GapWord, LinkSlot, PuzzleConfig,
    Result,
};

pub use crate::lexicon::{rhyme_key, rhymes_with, Lexicon};

pub use crate::engine::{
    gap_valid, gap_visible, slot_visible, CategoryChip, ChainEngine, ChainView, GapView,
    SlotStatus, SlotView, Visibility,
};
