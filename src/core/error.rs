//! Engine errors.
//!
//! Word-rule failures are not errors: they are stored on the slot or gap
//! that produced them. `ChainError` covers calls the engine cannot honour.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("slot index {index} out of range (chain has {len} links)")]
    SlotOutOfRange { index: usize, len: usize },
    #[error("gap index {index} out of range (chain has {len} gaps)")]
    GapOutOfRange { index: usize, len: usize },
    #[error("unknown category id: {0}")]
    UnknownCategory(String),
    #[error("invalid puzzle config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ChainError>;
