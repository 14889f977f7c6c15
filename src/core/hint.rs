//! Color feedback for a guessed word
//!
//! Each tile of a scored row carries one of three hints:
//! - Correct: letter is in the word at this position
//! - Present: letter is in the word, elsewhere
//! - Absent: letter is not in the word (or all its copies are accounted for)

use super::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single tile
///
/// Serialized as `"correct"`, `"present"` or `"absent"`. The legacy palette
/// names `"blue"`, `"orange"` and `"white"` are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorHint {
    #[serde(alias = "blue")]
    Correct,
    #[serde(alias = "orange")]
    Present,
    #[serde(alias = "white")]
    Absent,
}

impl ColorHint {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟦',
            Self::Present => '🟧',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for ColorHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five hints of one scored row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowHints([ColorHint; WORD_LENGTH]);

impl RowHints {
    /// Every tile correct
    pub const SOLVED: Self = Self([ColorHint::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(hints: [ColorHint; WORD_LENGTH]) -> Self {
        Self(hints)
    }

    /// Score `guess` against `answer`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: left to right, mark present letters while the pool lasts
    ///
    /// # Examples
    /// ```
    /// use reverse_wordle::core::{ColorHint, RowHints, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let hints = RowHints::score(&guess, &answer);
    ///
    /// assert_eq!(hints.get(2), ColorHint::Correct);
    /// assert_eq!(hints.get(1), ColorHint::Absent);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut result = [ColorHint::Absent; WORD_LENGTH];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], answer[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.chars()[i] == answer.chars()[i] {
                result[i] = ColorHint::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still available
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == ColorHint::Correct {
                continue;
            }
            let letter = guess.chars()[i];
            if let Some(count) = answer_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = ColorHint::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Hint at column 0-4
    ///
    /// # Panics
    /// Panics if `col >= 5`
    #[inline]
    #[must_use]
    pub const fn get(&self, col: usize) -> ColorHint {
        self.0[col]
    }

    pub fn iter(&self) -> impl Iterator<Item = ColorHint> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn count(&self, hint: ColorHint) -> usize {
        self.0.iter().filter(|&&h| h == hint).count()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Render as an emoji strip such as "🟦🟧⬜🟦🟦"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|h| h.to_emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColorHint::{Absent as A, Correct as C, Present as P};

    fn score(guess: &str, answer: &str) -> RowHints {
        RowHints::score(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn score_all_absent() {
        assert_eq!(score("abcde", "fghij"), RowHints::new([A; 5]));
    }

    #[test]
    fn score_all_correct() {
        let hints = score("crane", "crane");
        assert_eq!(hints, RowHints::SOLVED);
        assert!(hints.is_solved());
    }

    #[test]
    fn score_duplicate_letters_both_present() {
        // SPEED vs ERASE: S, both E's present; P and D absent
        assert_eq!(score("speed", "erase"), RowHints::new([P, A, P, P, A]));
    }

    #[test]
    fn score_duplicate_letters_correct_takes_priority() {
        // ROBOT vs FLOOR: second O is correct, first O takes the other copy
        assert_eq!(score("robot", "floor"), RowHints::new([P, P, A, C, A]));
    }

    #[test]
    fn score_extra_copies_are_absent() {
        // PLANT has one L and one A, both spent on exact matches
        assert_eq!(score("llama", "plant"), RowHints::new([A, C, C, A, A]));
    }

    #[test]
    fn score_real_example() {
        // CRANE vs SLATE: A and E correct, nothing else
        let hints = score("crane", "slate");
        assert_eq!(hints, RowHints::new([A, A, C, A, C]));
        assert_eq!(hints.count(C), 2);
        assert_eq!(hints.count(P), 0);
    }

    #[test]
    fn hints_serialize_lowercase() {
        let hints = RowHints::new([C, P, A, A, C]);
        let json = serde_json::to_string(&hints).unwrap();
        assert_eq!(
            json,
            r#"["correct","present","absent","absent","correct"]"#
        );
        let back: RowHints = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hints);
    }

    #[test]
    fn hints_accept_legacy_palette() {
        let hints: RowHints =
            serde_json::from_str(r#"["blue","orange","white","white","blue"]"#).unwrap();
        assert_eq!(hints, RowHints::new([C, P, A, A, C]));
    }

    #[test]
    fn hints_reject_wrong_length() {
        assert!(serde_json::from_str::<RowHints>(r#"["correct","absent"]"#).is_err());
        assert!(serde_json::from_str::<RowHints>(r#"["green","absent","absent","absent","absent"]"#).is_err());
    }

    #[test]
    fn emoji_strip() {
        assert_eq!(RowHints::new([C, P, A, A, C]).to_emoji(), "🟦🟧⬜⬜🟦");
    }
}
