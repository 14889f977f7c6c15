//! Five-letter word representation
//!
//! A Word stores a validated, lowercase 5-letter word as bytes.

use super::Letter;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of letters in every word on the board
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, normalized to lowercase ASCII
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use reverse_wordle::core::Word;
    ///
    /// let word = Word::new(" Crane ").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Letter {
        Letter::from_ascii_lowercase(self.chars[position])
    }

    /// Iterate over the letters of the word in order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.chars.iter().map(|&b| Letter::from_ascii_lowercase(b))
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.chars.contains(&letter.as_byte())
    }

    /// How many times a letter occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: Letter) -> usize {
        self.chars.iter().filter(|&&b| b == letter.as_byte()).count()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for hint scoring with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  hello\n").unwrap();
        assert_eq!(word.text(), "hello");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(Word::new("cr ne").is_err()); // Inner space
        assert!(Word::new("cran!").is_err()); // Punctuation
        assert!(matches!(Word::new("crän"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0).as_char(), 'c');
        assert_eq!(word.letter_at(4).as_char(), 'e');
    }

    #[test]
    fn word_has_letter_and_count() {
        let word = Word::new("speed").unwrap();
        let e = Letter::parse("e").unwrap();
        let z = Letter::parse("z").unwrap();

        assert!(word.has_letter(e));
        assert!(!word.has_letter(z));
        assert_eq!(word.count_of(e), 2);
        assert_eq!(word.count_of(z), 0);
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_serde_as_plain_string() {
        let word = Word::new("crane").unwrap();
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"crane\"");

        let parsed: Word = serde_json::from_str("\"SLATE\"").unwrap();
        assert_eq!(parsed.text(), "slate");

        assert!(serde_json::from_str::<Word>("\"abc\"").is_err());
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
