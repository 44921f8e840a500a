//! Placement and gap-word validation.

use crate::core::CategoryId;
use crate::lexicon::{fold, rhyme_key, Lexicon};

/// Placement rejection for Bird when the preceding word is not a bird.
pub const BIRD_PLACEMENT_MESSAGE: &str = "Previous word must be a type of bird.";

/// Gap failure for Bird.
pub const BIRD_GAP_MESSAGE: &str = "Should be a type of bird.";

/// Check whether `category` may be placed on a slot whose preceding word is
/// `previous`.
///
/// Only Bird has a placement precondition.
#[must_use]
pub fn placement_error(category: CategoryId, previous: &str, lexicon: &Lexicon) -> Option<String> {
    match category {
        CategoryId::Bird if !lexicon.is_bird(previous) => Some(BIRD_PLACEMENT_MESSAGE.to_string()),
        _ => None,
    }
}

/// Judge a gap word against its link's category.
///
/// Returns `None` without judging when the link is empty or the text is
/// blank. `previous` is quoted as given in failure messages.
#[must_use]
pub fn gap_error(
    category: Option<CategoryId>,
    previous: &str,
    text: &str,
    lexicon: &Lexicon,
) -> Option<String> {
    let category = category?;
    let current = fold(text);
    if current.is_empty() {
        return None;
    }

    match category {
        CategoryId::Synonym => {
            (!lexicon.accepts_synonym(previous, &current))
                .then(|| format!("Should be a synonym of \"{previous}\"."))
        }
        CategoryId::Bird => (!lexicon.is_bird(&current)).then(|| BIRD_GAP_MESSAGE.to_string()),
        CategoryId::Rhyme => (rhyme_key(&current) != rhyme_key(&fold(previous)))
            .then(|| format!("Should rhyme with \"{previous}\".")),
    }
}
