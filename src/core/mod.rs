//! Core engine types: categories, configuration, actions, state, errors.
//!
//! This module contains the data every other module works over.
//! Puzzle instances are described by `PuzzleConfig` rather than hardcoded.

pub mod category;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use category::CategoryId;
pub use config::PuzzleConfig;
pub use action::{Action, ActionRecord};
pub use state::{ChainState, GapWord, LinkSlot};
pub use error::{ChainError, Result};
