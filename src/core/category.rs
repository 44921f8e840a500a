//! Link categories.
//!
//! The category set is fixed: every puzzle offers the same three link types.
//! Each has a stable string id (used by hosts to forward taps) and a display
//! label.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ChainError;

/// A link category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    /// The gap word means the same as the previous word.
    Synonym,
    /// The gap word rhymes with the previous word.
    Rhyme,
    /// The gap word is a type of bird.
    Bird,
}

impl CategoryId {
    /// All categories in display order.
    pub const ALL: [CategoryId; 3] = [CategoryId::Synonym, CategoryId::Rhyme, CategoryId::Bird];

    /// Stable identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            CategoryId::Synonym => "synonym",
            CategoryId::Rhyme => "rhyme",
            CategoryId::Bird => "bird",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CategoryId::Synonym => "Synonym",
            CategoryId::Rhyme => "Rhyme",
            CategoryId::Bird => "Type of Bird",
        }
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryId {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| ChainError::UnknownCategory(s.to_string()))
    }
}
