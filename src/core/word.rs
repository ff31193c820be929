//! Word-ladder word representation
//!
//! A Word stores the canonical (lowercase) form of a dictionary token. All
//! equality, hashing and adjacency checks run on that canonical form.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A case-insensitive word token in canonical lowercase form
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Word(String);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::ContainsWhitespace => write!(f, "Word must be a single token"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing it to lowercase
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed input is empty
    /// - The input contains inner whitespace
    ///
    /// # Examples
    /// ```
    /// use word_weaver::core::Word;
    ///
    /// let word = Word::new("WoRd").unwrap();
    /// assert_eq!(word.text(), "word");
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace);
        }

        Ok(Self(canonical(trimmed)))
    }

    /// Wrap text already known to be a single token, skipping validation
    pub(crate) fn from_trusted(text: &str) -> Self {
        Self(canonical(text))
    }

    /// Get the canonical text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Always false; a `Word` is never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether this word and `other` are adjacent in the ladder graph
    #[inline]
    #[must_use]
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        is_one_letter_apart(&self.0, &other.0)
    }
}

impl Hash for Word {
    // Must hash exactly like `str` so `Borrow<str>` lookups work
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.as_str().hash(state);
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowercase normalization used for every comparison
#[must_use]
pub fn canonical(text: &str) -> String {
    text.to_lowercase()
}

/// Count the positions where two words disagree
///
/// Characters are compared position by position up to the shorter length;
/// every extra or missing position on either side adds one more difference.
/// Inputs are expected in canonical form.
///
/// # Examples
/// ```
/// use word_weaver::core::letter_difference;
///
/// assert_eq!(letter_difference("word", "ward"), 1);
/// assert_eq!(letter_difference("word", "words"), 1);
/// assert_eq!(letter_difference("word", "cars"), 3);
/// ```
#[must_use]
pub fn letter_difference(a: &str, b: &str) -> usize {
    let mut left = a.chars();
    let mut right = b.chars();
    let mut diff = 0;

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => diff += usize::from(x != y),
            (Some(_), None) | (None, Some(_)) => diff += 1,
            (None, None) => return diff,
        }
    }
}

/// Strict adjacency: equal length and exactly one differing position
#[must_use]
pub fn is_one_letter_apart(a: &str, b: &str) -> bool {
    let mut left = a.chars();
    let mut right = b.chars();
    let mut diff = 0;

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    diff += 1;
                    if diff > 1 {
                        return false;
                    }
                }
            }
            (None, None) => return diff == 1,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn word_creation_lowercases() {
        let word = Word::new("WORD").unwrap();
        assert_eq!(word.text(), "word");

        let word2 = Word::new("  WaRd\n").unwrap();
        assert_eq!(word2.text(), "ward");
    }

    #[test]
    fn word_creation_rejects_blank() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new(" \t "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_rejects_inner_whitespace() {
        assert_eq!(Word::new("wo rd"), Err(WordError::ContainsWhitespace));
    }

    #[test]
    fn word_len_counts_chars() {
        assert_eq!(Word::new("word").unwrap().len(), 4);
        assert_eq!(Word::new("café").unwrap().len(), 4);
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("Cord").unwrap(), Word::new("cORD").unwrap());
        assert_ne!(Word::new("cord").unwrap(), Word::new("card").unwrap());
    }

    #[test]
    fn word_borrows_as_str_in_sets() {
        let set: HashSet<Word> = [Word::new("word").unwrap()].into_iter().collect();
        assert!(set.contains("word"));
        assert!(!set.contains("WORD"));
    }

    #[test]
    fn letter_difference_equal_length() {
        assert_eq!(letter_difference("word", "word"), 0);
        assert_eq!(letter_difference("word", "ward"), 1);
        assert_eq!(letter_difference("word", "wars"), 2);
        assert_eq!(letter_difference("word", "cars"), 3);
    }

    #[test]
    fn letter_difference_counts_length_delta() {
        assert_eq!(letter_difference("word", "wor"), 1);
        assert_eq!(letter_difference("wor", "word"), 1);
        assert_eq!(letter_difference("word", "wards"), 2);
        assert_eq!(letter_difference("", "word"), 4);
    }

    #[test]
    fn one_letter_apart_requires_equal_length() {
        assert!(is_one_letter_apart("word", "ward"));
        assert!(!is_one_letter_apart("word", "words"));
        assert!(!is_one_letter_apart("word", "word"));
        assert!(!is_one_letter_apart("word", "wars"));
    }

    #[test]
    fn adjacency_is_symmetric() {
        let a = Word::new("cold").unwrap();
        let b = Word::new("cord").unwrap();
        assert!(a.is_adjacent_to(&b));
        assert!(b.is_adjacent_to(&a));
    }

    #[test]
    fn word_display() {
        let word = Word::new("WEST").unwrap();
        assert_eq!(format!("{word}"), "west");
    }
}
