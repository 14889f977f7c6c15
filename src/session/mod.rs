//! Puzzle session state
//!
//! A [`Session`] owns everything the player has learned about one puzzle:
//! the fixed hint grid, per-cell guess counters and reveals, one-shot tool
//! usage, the scratchpad history and the glitch signal.
//!
//! Every operation that talks to the puzzle authority is split in two. A
//! `begin_*` call checks preconditions and commits whatever must happen
//! before the request leaves (spending an attempt, taking a tool lock) and
//! hands back a ticket; the matching completion call consumes the ticket
//! once the response arrives. The [`crate::protocol`] functions drive both
//! halves around a blocking authority; an event loop with requests in flight
//! can hold the tickets itself.

mod budget;
mod cell;
mod glitch;
mod scratch;
mod tool;

pub use budget::Mode;
pub use cell::{Cell, CellStatus, RevealSource};
pub use glitch::{GLITCH_DURATION, GlitchEffect};
pub use scratch::{SCRATCH_CAPACITY, ScratchEntry, ScratchHistory};
pub use tool::ToolState;

use crate::core::{COLS, HintGrid, Letter, LetterUsage, Position, ROWS, RowHints, Word};
use std::time::Instant;
use thiserror::Error;

/// Errors from session-level settings changes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Mode can only be changed before the first guess")]
    ModeLocked,
}

/// Why a guess was not sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessRejection {
    /// Input was not a single letter
    InvalidLetter,
    AlreadyRevealed,
    /// The cell's budget is spent
    Locked,
    /// An earlier guess for this cell has not resolved yet
    Pending,
}

/// The authority's answer to a letter guess, as the session sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// The request failed; the spent attempt is not refunded
    Unavailable,
}

/// What a guess did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Preconditions failed; nothing changed and nothing was sent
    Ignored(GuessRejection),
    Revealed(Letter),
    Missed { remaining: u8 },
    /// Authority failure: attempt spent, no verdict applied
    Unresolved,
    /// The cell was revealed by a clue while the guess was in flight
    Superseded,
}

/// Permission to send one letter guess; consumed by [`Session::resolve_guess`]
#[derive(Debug)]
#[must_use = "an issued guess must be resolved to release the cell"]
pub struct GuessTicket {
    position: Position,
    letter: Letter,
}

impl GuessTicket {
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn letter(&self) -> Letter {
        self.letter
    }
}

/// An outstanding clue request for one row
#[derive(Debug)]
#[must_use = "an issued clue must be completed or abandoned"]
pub struct ClueTicket {
    row: usize,
}

impl ClueTicket {
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }
}

/// A clue response whose colors disagree with the board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Clue colors for row {row} do not match the board")]
pub struct ClueMismatch {
    pub row: usize,
}

/// An outstanding phantom scan; the tool is already spent
#[derive(Debug)]
#[must_use]
pub struct ScanTicket {
    _private: (),
}

/// State of one puzzle instance
#[derive(Debug, Clone)]
pub struct Session {
    grid: HintGrid,
    cells: [[Cell; COLS]; ROWS],
    mode: Mode,
    clue: ToolState,
    clue_row: Option<usize>,
    phantom: ToolState,
    phantom_result: Option<LetterUsage>,
    scratch: ScratchHistory,
    glitch: GlitchEffect,
}

impl Session {
    /// Create a session over a hint grid fetched from the authority
    #[must_use]
    pub fn new(grid: HintGrid, mode: Mode) -> Self {
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| Cell::new(grid.row(row).get(col)))
        });

        Self {
            grid,
            cells,
            mode,
            clue: ToolState::Unused,
            clue_row: None,
            phantom: ToolState::Unused,
            phantom_result: None,
            scratch: ScratchHistory::new(),
            glitch: GlitchEffect::default(),
        }
    }

    #[must_use]
    pub const fn grid(&self) -> &HintGrid {
        &self.grid
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Change the difficulty mode
    ///
    /// # Errors
    /// Returns `SessionError::ModeLocked` once any cell has spent an attempt.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), SessionError> {
        if mode == self.mode {
            return Ok(());
        }
        if self.has_guessed() {
            return Err(SessionError::ModeLocked);
        }
        self.mode = mode;
        Ok(())
    }

    #[must_use]
    pub const fn cell(&self, position: Position) -> &Cell {
        &self.cells[position.row()][position.col()]
    }

    const fn cell_mut(&mut self, position: Position) -> &mut Cell {
        &mut self.cells[position.row()][position.col()]
    }

    /// All cells with their positions, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        Position::all().map(|position| (position, self.cell(position)))
    }

    #[must_use]
    pub fn has_guessed(&self) -> bool {
        self.cells().any(|(_, cell)| cell.attempts() > 0)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_revealed()).count()
    }

    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.cells()
            .filter(|(_, cell)| cell.is_locked(self.mode))
            .count()
    }

    /// Every cell revealed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells().all(|(_, cell)| cell.is_revealed())
    }

    /// Nothing left to guess: every cell revealed or locked
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cells()
            .all(|(_, cell)| cell.is_revealed() || cell.is_locked(self.mode))
    }

    #[must_use]
    pub fn glitch_active(&self, now: Instant) -> bool {
        self.glitch.is_active(now)
    }

    // ------------------------------------------------------------------
    // Cell guesses
    // ------------------------------------------------------------------

    /// Validate a guess and spend one attempt on the cell
    ///
    /// # Errors
    /// Returns the reason the guess was dropped. A rejected guess changes
    /// nothing.
    pub fn begin_guess(
        &mut self,
        position: Position,
        input: &str,
    ) -> Result<GuessTicket, GuessRejection> {
        let letter = Letter::parse(input).ok_or(GuessRejection::InvalidLetter)?;
        let mode = self.mode;
        let cell = self.cell_mut(position);

        if cell.is_revealed() {
            return Err(GuessRejection::AlreadyRevealed);
        }
        if cell.is_pending() {
            return Err(GuessRejection::Pending);
        }
        if !mode.accepts(cell.attempts()) {
            return Err(GuessRejection::Locked);
        }

        cell.spend_attempt();
        Ok(GuessTicket { position, letter })
    }

    /// Apply the authority's verdict for an issued guess
    pub fn resolve_guess(
        &mut self,
        ticket: GuessTicket,
        verdict: Verdict,
        now: Instant,
    ) -> GuessOutcome {
        let GuessTicket { position, letter } = ticket;
        let mode = self.mode;
        let cell = self.cell_mut(position);
        cell.finish_attempt();

        if cell.is_revealed() {
            return GuessOutcome::Superseded;
        }

        match verdict {
            Verdict::Correct => {
                cell.reveal(letter, RevealSource::Guess);
                GuessOutcome::Revealed(letter)
            }
            Verdict::Incorrect => {
                let remaining = mode.remaining(cell.attempts());
                cell.show_remaining(remaining);
                self.glitch.trigger(now);
                GuessOutcome::Missed { remaining }
            }
            Verdict::Unavailable => GuessOutcome::Unresolved,
        }
    }

    // ------------------------------------------------------------------
    // Clue reveal
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn clue_state(&self) -> ToolState {
        self.clue
    }

    /// Row disclosed by the clue, once it has succeeded
    #[must_use]
    pub const fn clue_row(&self) -> Option<usize> {
        self.clue_row
    }

    /// Reserve the clue for `row`
    ///
    /// Returns `None` if the clue is spent or already pending, or the row is
    /// off the board.
    pub fn begin_clue(&mut self, row: usize) -> Option<ClueTicket> {
        if row >= ROWS || !self.clue.begin() {
            return None;
        }
        Some(ClueTicket { row })
    }

    /// Reveal the clue row and spend the clue for good
    ///
    /// # Errors
    /// If `hints` disagree with the board the response is discarded, the
    /// clue stays available and `ClueMismatch` is returned.
    pub fn complete_clue(
        &mut self,
        ticket: ClueTicket,
        word: &Word,
        hints: &RowHints,
    ) -> Result<(), ClueMismatch> {
        let row = ticket.row;
        if self.grid.row(row) != hints {
            self.clue.release();
            return Err(ClueMismatch { row });
        }

        for (position, letter) in Position::in_row(row).zip(word.letters()) {
            self.cell_mut(position).reveal(letter, RevealSource::Clue);
        }
        self.clue.settle();
        self.clue_row = Some(row);
        Ok(())
    }

    /// The authority turned the clue down; it may be tried again
    pub fn abandon_clue(&mut self, ticket: ClueTicket) {
        let ClueTicket { .. } = ticket;
        self.clue.release();
    }

    // ------------------------------------------------------------------
    // Phantom scan
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn phantom_state(&self) -> ToolState {
        self.phantom
    }

    #[must_use]
    pub const fn phantom_result(&self) -> Option<&LetterUsage> {
        self.phantom_result.as_ref()
    }

    /// Spend the phantom scan; the lock holds whatever the response
    pub fn begin_phantom_scan(&mut self) -> Option<ScanTicket> {
        self.phantom.lock().then_some(ScanTicket { _private: () })
    }

    pub fn complete_phantom_scan(&mut self, ticket: ScanTicket, usage: LetterUsage) {
        let ScanTicket { .. } = ticket;
        self.phantom_result = Some(usage);
    }

    // ------------------------------------------------------------------
    // Scratchpad
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn scratch_history(&self) -> &ScratchHistory {
        &self.scratch
    }

    /// Store a scratchpad result, evicting the oldest past capacity
    pub fn record_scratch(&mut self, word: Word, hints: RowHints) -> Option<ScratchEntry> {
        self.scratch.push(ScratchEntry { word, hints })
    }
}
