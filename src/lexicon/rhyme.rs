//! Approximate rhyme matching.
//!
//! Two words rhyme when they share a rhyme key: the tail of the word from
//! its last vowel (`y` counts as a vowel). This is a spelling heuristic, not
//! a phonetic one, so irregular spellings over- and under-match.

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Compute the rhyme key of a word.
///
/// - No vowel: the last 3 characters (or the whole word if shorter).
/// - Tail from the last vowel has 2+ characters: that tail.
/// - Otherwise: the last 2 characters.
///
/// ```
/// use linkwise::lexicon::rhyme_key;
///
/// assert_eq!(rhyme_key("quick"), "ick");
/// assert_eq!(rhyme_key("Day"), "ay");
/// ```
#[must_use]
pub fn rhyme_key(word: &str) -> String {
    let chars: Vec<char> = word.to_lowercase().chars().collect();

    let Some(last_vowel) = chars.iter().rposition(|c| VOWELS.contains(c)) else {
        return tail(&chars, 3);
    };

    let ending = &chars[last_vowel..];
    if ending.len() >= 2 {
        ending.iter().collect()
    } else {
        tail(&chars, 2)
    }
}

/// Do `a` and `b` share a rhyme key? Both are trimmed first.
#[must_use]
pub fn rhymes_with(a: &str, b: &str) -> bool {
    rhyme_key(a.trim()) == rhyme_key(b.trim())
}

fn tail(chars: &[char], n: usize) -> String {
    chars[chars.len().saturating_sub(n)..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_tail() {
        assert_eq!(rhyme_key("quick"), "ick");
        assert_eq!(rhyme_key("stick"), "ick");
        assert_eq!(rhyme_key("day"), "ay");
        assert_eq!(rhyme_key("jay"), "ay");
        assert_eq!(rhyme_key("Sparrow"), "ow");
    }

    #[test]
    fn test_short_tail_falls_back_to_two() {
        // last vowel is the final character
        assert_eq!(rhyme_key("tea"), "ea");
        assert_eq!(rhyme_key("go"), "go");
        assert_eq!(rhyme_key("a"), "a");
    }

    #[test]
    fn test_no_vowel() {
        assert_eq!(rhyme_key("psst"), "sst");
        assert_eq!(rhyme_key("hm"), "hm");
        assert_eq!(rhyme_key(""), "");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(rhyme_key("DAY"), rhyme_key("day"));
    }

    #[test]
    fn test_rhymes_with() {
        assert!(rhymes_with("day", "jay"));
        assert!(rhymes_with(" quick ", "stick"));
        assert!(!rhymes_with("fast", "day"));
    }
}
