//! Word data the link rules consult.
//!
//! - `Lexicon`: synonym table and bird-word set
//! - `rhyme`: approximate suffix rhyme matching
//!
//! Lookups are case-insensitive: everything is stored lowercase and
//! queries are trimmed and lowercased before lookup.

pub mod rhyme;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use rhyme::{rhyme_key, rhymes_with};

/// Synonyms listed for one headword.
pub type SynonymList = SmallVec<[String; 5]>;

/// Normalize a word for lookup and comparison.
#[must_use]
pub fn fold(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Synonym table and bird-word set.
///
/// The synonym table is an allowlist, not a closed world: a headword with no
/// entry places no constraint on what may follow it.
///
/// ## Example
///
/// ```
/// use linkwise::lexicon::Lexicon;
///
/// let lexicon = Lexicon::new()
///     .with_synonyms("cold", ["chilly", "icy"])
///     .with_birds(["crow", "owl"]);
///
/// assert!(lexicon.is_bird(" Crow "));
/// assert!(lexicon.accepts_synonym("Cold", "ICY"));
/// assert!(!lexicon.accepts_synonym("cold", "warm"));
/// assert!(lexicon.accepts_synonym("unlisted", "anything"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    synonyms: FxHashMap<String, SynonymList>,
    birds: FxHashSet<String>,
}

impl Lexicon {
    /// Create an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The word data shipped with the daily puzzle.
    #[must_use]
    pub fn daily() -> Self {
        Self::new()
            .with_birds([
                "swift", "jay", "sparrow", "robin", "wren", "finch", "hawk", "owl", "tern", "gull",
                "crow", "ostrich", "pelican", "flamingo",
            ])
            .with_synonyms("fast", ["swift", "quick", "rapid", "speedy", "brisk"])
            .with_synonyms("quick", ["fast", "swift", "rapid", "speedy", "brisk"])
            .with_synonyms("swift", ["fast", "quick", "rapid", "speedy"])
            .with_synonyms("jay", ["bird", "corvid"])
    }

    /// Add synonyms for a headword, extending any existing entry.
    #[must_use]
    pub fn with_synonyms<I, S>(mut self, word: &str, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self.synonyms.entry(fold(word)).or_default();
        for synonym in synonyms {
            let synonym = fold(synonym.as_ref());
            if !entry.contains(&synonym) {
                entry.push(synonym);
            }
        }
        self
    }

    /// Add a single bird word.
    #[must_use]
    pub fn with_bird(mut self, word: &str) -> Self {
        self.birds.insert(fold(word));
        self
    }

    /// Add several bird words.
    #[must_use]
    pub fn with_birds<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.birds.extend(words.into_iter().map(|w| fold(w.as_ref())));
        self
    }

    /// Listed synonyms for `word`, or `None` if it has no entry.
    #[must_use]
    pub fn synonyms_of(&self, word: &str) -> Option<&[String]> {
        self.synonyms.get(&fold(word)).map(|list| list.as_slice())
    }

    /// Is `word` a type of bird?
    #[must_use]
    pub fn is_bird(&self, word: &str) -> bool {
        self.birds.contains(&fold(word))
    }

    /// May `candidate` follow `previous` as a synonym?
    ///
    /// True when `previous` has no entry in the table.
    #[must_use]
    pub fn accepts_synonym(&self, previous: &str, candidate: &str) -> bool {
        match self.synonyms_of(previous) {
            Some(list) => {
                let candidate = fold(candidate);
                list.iter().any(|s| *s == candidate)
            }
            None => true,
        }
    }

    /// Number of bird words.
    #[must_use]
    pub fn bird_count(&self) -> usize {
        self.birds.len()
    }
}
