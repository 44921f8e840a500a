//! Link rules.
//!
//! Each category constrains the word that follows it:
//! - Synonym: listed as a synonym of the previous word (unlisted words pass)
//! - Rhyme: shares a rhyme key with the previous word
//! - Bird: is a type of bird
//!
//! Bird additionally constrains placement: the word before the slot must
//! itself be a bird. Rules return a message on failure, `None` on success.

pub mod validator;

pub use validator::{
    gap_error, placement_error, BIRD_GAP_MESSAGE, BIRD_PLACEMENT_MESSAGE,
};
