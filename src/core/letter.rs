//! Single letters and the per-letter usage map

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Letters in the alphabet the puzzle uses
pub const ALPHABET_SIZE: usize = 26;

/// One lowercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Letter(u8);

impl Letter {
    /// Parse user input into a letter
    ///
    /// Accepts exactly one ASCII alphabetic character after trimming, in
    /// either case. Anything else is rejected.
    ///
    /// # Examples
    /// ```
    /// use reverse_wordle::core::Letter;
    ///
    /// assert_eq!(Letter::parse(" Q").unwrap().as_char(), 'q');
    /// assert!(Letter::parse("$").is_none());
    /// assert!(Letter::parse("ab").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Some(Self(c.to_ascii_lowercase() as u8)),
            _ => None,
        }
    }

    /// Build a letter from a byte already known to be `b'a'..=b'z'`
    pub(crate) fn from_ascii_lowercase(byte: u8) -> Self {
        debug_assert!(byte.is_ascii_lowercase(), "letter byte must be a-z");
        Self(byte)
    }

    /// Letter at alphabet index 0-25
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < ALPHABET_SIZE).then(|| Self(b'a' + index as u8))
    }

    /// All 26 letters in alphabetical order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Position in the alphabet (a = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    #[must_use]
    pub const fn to_uppercase(self) -> char {
        self.0.to_ascii_uppercase() as char
    }
}

impl TryFrom<String> for Letter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("Invalid letter: {value:?}"))
    }
}

impl From<Letter> for String {
    fn from(letter: Letter) -> Self {
        letter.as_char().to_string()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Which letters of the alphabet occur anywhere in the hidden rows
///
/// Always total over all 26 letters. On the wire it is a JSON object keyed
/// by uppercase letter, e.g. `{"A": true, "B": false, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, bool>",
    into = "BTreeMap<String, bool>"
)]
pub struct LetterUsage([bool; ALPHABET_SIZE]);

/// A usage map that does not cover the whole alphabet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterUsageError {
    #[error("Unexpected key in letter usage map: {0:?}")]
    InvalidKey(String),
    #[error("Letter usage map is missing letter '{0}'")]
    MissingLetter(char),
}

impl LetterUsage {
    /// Usage map with every letter unused
    #[must_use]
    pub const fn empty() -> Self {
        Self([false; ALPHABET_SIZE])
    }

    pub fn mark(&mut self, letter: Letter) {
        self.0[letter.index()] = true;
    }

    #[must_use]
    pub const fn is_used(&self, letter: Letter) -> bool {
        self.0[letter.index()]
    }

    /// Letters paired with their usage, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (Letter, bool)> + '_ {
        Letter::alphabet().map(|letter| (letter, self.is_used(letter)))
    }

    #[must_use]
    pub fn used_count(&self) -> usize {
        self.0.iter().filter(|&&used| used).count()
    }
}

impl TryFrom<BTreeMap<String, bool>> for LetterUsage {
    type Error = LetterUsageError;

    fn try_from(map: BTreeMap<String, bool>) -> Result<Self, Self::Error> {
        let mut seen = [false; ALPHABET_SIZE];
        let mut usage = Self::empty();

        for (key, used) in map {
            let letter = Letter::parse(&key).ok_or(LetterUsageError::InvalidKey(key))?;
            seen[letter.index()] = true;
            if used {
                usage.mark(letter);
            }
        }

        if let Some(missing) = Letter::alphabet().find(|l| !seen[l.index()]) {
            return Err(LetterUsageError::MissingLetter(missing.to_uppercase()));
        }

        Ok(usage)
    }
}

impl From<LetterUsage> for BTreeMap<String, bool> {
    fn from(usage: LetterUsage) -> Self {
        usage
            .iter()
            .map(|(letter, used)| (letter.to_uppercase().to_string(), used))
            .collect()
    }
}
