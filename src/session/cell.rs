//! Per-cell state: hint, guess counter and reveal status

use super::Mode;
use crate::core::{ColorHint, Letter};

/// How a cell's letter came to be known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealSource {
    Guess,
    Clue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    Hidden,
    /// Set once; the letter never changes afterwards
    Revealed { letter: Letter, source: RevealSource },
}

/// One board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    hint: ColorHint,
    attempts: u8,
    status: CellStatus,
    remaining_shown: Option<u8>,
    in_flight: bool,
}

impl Cell {
    pub(crate) const fn new(hint: ColorHint) -> Self {
        Self {
            hint,
            attempts: 0,
            status: CellStatus::Hidden,
            remaining_shown: None,
            in_flight: false,
        }
    }

    #[must_use]
    pub const fn hint(&self) -> ColorHint {
        self.hint
    }

    /// Guesses spent on this cell
    #[must_use]
    pub const fn attempts(&self) -> u8 {
        self.attempts
    }

    #[must_use]
    pub const fn status(&self) -> CellStatus {
        self.status
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        matches!(self.status, CellStatus::Revealed { .. })
    }

    /// The solved letter, once revealed
    #[must_use]
    pub const fn letter(&self) -> Option<Letter> {
        match self.status {
            CellStatus::Revealed { letter, .. } => Some(letter),
            CellStatus::Hidden => None,
        }
    }

    #[must_use]
    pub const fn reveal_source(&self) -> Option<RevealSource> {
        match self.status {
            CellStatus::Revealed { source, .. } => Some(source),
            CellStatus::Hidden => None,
        }
    }

    /// Budget spent without finding the letter; permanent for the session
    #[must_use]
    pub const fn is_locked(&self, mode: Mode) -> bool {
        !self.is_revealed() && !mode.accepts(self.attempts)
    }

    /// A guess for this cell is awaiting its verdict
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.in_flight
    }

    /// Remaining-attempts badge, if one is showing
    ///
    /// Appears after a wrong verdict, disappears once the cell is revealed,
    /// and always reads 0 on a locked cell.
    #[must_use]
    pub const fn remaining_indicator(&self, mode: Mode) -> Option<u8> {
        if self.is_revealed() {
            None
        } else if self.is_locked(mode) {
            Some(0)
        } else {
            self.remaining_shown
        }
    }

    pub(crate) fn spend_attempt(&mut self) {
        self.attempts += 1;
        self.in_flight = true;
    }

    pub(crate) fn finish_attempt(&mut self) {
        self.in_flight = false;
    }

    pub(crate) fn show_remaining(&mut self, remaining: u8) {
        self.remaining_shown = Some(remaining);
    }

    /// Hidden → Revealed. Returns false if the cell was already revealed.
    pub(crate) fn reveal(&mut self, letter: Letter, source: RevealSource) -> bool {
        if self.is_revealed() {
            return false;
        }
        self.status = CellStatus::Revealed { letter, source };
        self.remaining_shown = None;
        true
    }
}
