//! The puzzle authority
//!
//! The authority holds the hidden rows and answers every question the
//! client may ask about them. The client never sees the words themselves
//! except through a successful letter guess or the clue.
//!
//! Two implementations are provided:
//! - [`LocalAuthority`]: generates puzzles in-process from the word lists
//! - [`HttpAuthority`]: talks to a remote server over its JSON API

mod http;
mod local;
#[cfg(test)]
pub(crate) mod scripted;
pub mod wire;

pub use http::{DEFAULT_TIMEOUT, HttpAuthority};
pub use local::{LocalAuthority, MAX_ABSENT_PER_ROW, seeded_rng};

use crate::core::{HintGrid, Letter, LetterUsage, Position, RowHints, Word};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single authority request
///
/// None of these are fatal to a session; the protocols absorb them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorityError {
    /// The authority understood the request and refused it
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// The authority could not be reached or failed internally
    #[error("Authority unavailable: {0}")]
    Unavailable(String),

    /// The response could not be decoded
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl AuthorityError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}

/// A fully disclosed row, as returned for the clue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowReveal {
    pub word: Word,
    pub colors: RowHints,
}

/// Request/response contract with the holder of the hidden solution
pub trait PuzzleAuthority {
    /// Start a fresh puzzle, discarding any previous one
    ///
    /// # Errors
    /// Returns an error if the puzzle could not be created.
    fn new_puzzle(&mut self) -> Result<(), AuthorityError>;

    /// The full 6×5 color grid of the current puzzle
    ///
    /// # Errors
    /// Returns an error if the grid could not be fetched.
    fn board(&mut self) -> Result<HintGrid, AuthorityError>;

    /// Whether `letter` is the hidden letter at `position`
    ///
    /// # Errors
    /// Returns an error if no verdict could be obtained.
    fn validate_letter(&mut self, position: Position, letter: Letter)
    -> Result<bool, AuthorityError>;

    /// Occurrences of `letter` across all six hidden rows
    ///
    /// # Errors
    /// Returns an error if the count could not be obtained.
    fn count(&mut self, letter: Letter) -> Result<u32, AuthorityError>;

    /// Disclose one row's word and colors; allowed once per puzzle
    ///
    /// # Errors
    /// `Rejected` if the clue was already used or `row` is out of range.
    fn reveal(&mut self, row: usize) -> Result<RowReveal, AuthorityError>;

    /// Score an arbitrary word against the solution
    ///
    /// # Errors
    /// `Rejected` if the authority does not accept the word.
    fn scratch(&mut self, guess: &Word) -> Result<RowHints, AuthorityError>;

    /// For every letter, whether it appears in any hidden row
    ///
    /// # Errors
    /// Returns an error if the scan could not be obtained.
    fn phantom_scan(&mut self) -> Result<LetterUsage, AuthorityError>;
}

impl<A: PuzzleAuthority + ?Sized> PuzzleAuthority for Box<A> {
    fn new_puzzle(&mut self) -> Result<(), AuthorityError> {
        (**self).new_puzzle()
    }

    fn board(&mut self) -> Result<HintGrid, AuthorityError> {
        (**self).board()
    }

    fn validate_letter(
        &mut self,
        position: Position,
        letter: Letter,
    ) -> Result<bool, AuthorityError> {
        (**self).validate_letter(position, letter)
    }

    fn count(&mut self, letter: Letter) -> Result<u32, AuthorityError> {
        (**self).count(letter)
    }

    fn reveal(&mut self, row: usize) -> Result<RowReveal, AuthorityError> {
        (**self).reveal(row)
    }

    fn scratch(&mut self, guess: &Word) -> Result<RowHints, AuthorityError> {
        (**self).scratch(guess)
    }

    fn phantom_scan(&mut self) -> Result<LetterUsage, AuthorityError> {
        (**self).phantom_scan()
    }
}
