//! Assist tool protocols: letter count, clue, scratchpad and phantom scan

use crate::authority::{AuthorityError, PuzzleAuthority, RowReveal};
use crate::core::{Letter, LetterUsage, ROWS, RowHints, Word};
use crate::session::Session;
use rand::Rng;
use std::fmt;
use tracing::{debug, info, warn};

/// Displayed result of the letter-frequency tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCount {
    /// Input was not a single letter, or the authority did not answer
    Unknown,
    Known(u32),
}

impl fmt::Display for LetterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("–"),
            Self::Known(count) => write!(f, "{count}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueOutcome {
    /// The clue is spent or already in flight
    Ignored,
    Revealed {
        row: usize,
        word: Word,
        hints: RowHints,
    },
    /// The authority refused; the clue may be tried again
    Rejected(AuthorityError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScratchOutcome {
    /// Input was not a five-letter word
    Ignored,
    Checked(RowHints),
    Rejected(AuthorityError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The scan was already used
    Ignored,
    Scanned(LetterUsage),
    /// The request failed; the scan stays spent
    Failed(AuthorityError),
}

/// Occurrences of a letter across all hidden rows
///
/// Not cached: every valid call asks the authority.
pub fn count_letter<A>(authority: &mut A, input: &str) -> LetterCount
where
    A: PuzzleAuthority + ?Sized,
{
    let Some(letter) = Letter::parse(input) else {
        debug!(input, "Count ignored: not a letter");
        return LetterCount::Unknown;
    };

    match authority.count(letter) {
        Ok(count) => {
            debug!(%letter, count, "Letter counted");
            LetterCount::Known(count)
        }
        Err(e) => {
            warn!(%letter, error = %e, "Letter count failed");
            LetterCount::Unknown
        }
    }
}

/// Reveal one randomly chosen row, at most once per session
///
/// The clue is only spent when the authority answers with a row that
/// matches the board.
pub fn reveal_clue<A, R>(session: &mut Session, authority: &mut A, rng: &mut R) -> ClueOutcome
where
    A: PuzzleAuthority + ?Sized,
    R: Rng + ?Sized,
{
    if !session.clue_state().is_available() {
        debug!(state = ?session.clue_state(), "Clue ignored");
        return ClueOutcome::Ignored;
    }

    let row = rng.random_range(0..ROWS);
    let Some(ticket) = session.begin_clue(row) else {
        return ClueOutcome::Ignored;
    };

    match authority.reveal(row) {
        Ok(RowReveal { word, colors }) => match session.complete_clue(ticket, &word, &colors) {
            Ok(()) => {
                info!(row, word = %word, "Clue revealed a row");
                ClueOutcome::Revealed {
                    row,
                    word,
                    hints: colors,
                }
            }
            Err(mismatch) => {
                warn!(%mismatch, "Clue response discarded");
                ClueOutcome::Rejected(AuthorityError::malformed(mismatch.to_string()))
            }
        },
        Err(e) => {
            session.abandon_clue(ticket);
            warn!(row, error = %e, "Clue refused");
            ClueOutcome::Rejected(e)
        }
    }
}

/// Score a free-form word against the solution
///
/// Results land in the session's scratch history. The board is untouched.
pub fn check_scratch<A>(session: &mut Session, authority: &mut A, input: &str) -> ScratchOutcome
where
    A: PuzzleAuthority + ?Sized,
{
    let word = match Word::new(input) {
        Ok(word) => word,
        Err(e) => {
            debug!(input, error = %e, "Scratch ignored");
            return ScratchOutcome::Ignored;
        }
    };

    match authority.scratch(&word) {
        Ok(hints) => {
            debug!(word = %word, hints = %hints.to_emoji(), "Scratch checked");
            if let Some(evicted) = session.record_scratch(word, hints) {
                debug!(word = %evicted.word, "Scratch history full, dropped oldest");
            }
            ScratchOutcome::Checked(hints)
        }
        Err(e) => {
            warn!(word = %word, error = %e, "Scratch refused");
            ScratchOutcome::Rejected(e)
        }
    }
}

/// Ask which letters appear anywhere in the hidden rows, once per session
///
/// The scan is spent before the request is sent.
pub fn phantom_scan<A>(session: &mut Session, authority: &mut A) -> ScanOutcome
where
    A: PuzzleAuthority + ?Sized,
{
    let Some(ticket) = session.begin_phantom_scan() else {
        debug!("Phantom scan ignored: already used");
        return ScanOutcome::Ignored;
    };

    match authority.phantom_scan() {
        Ok(usage) => {
            info!(letters = usage.used_count(), "Phantom scan complete");
            session.complete_phantom_scan(ticket, usage);
            ScanOutcome::Scanned(usage)
        }
        Err(e) => {
            warn!(error = %e, "Phantom scan failed");
            ScanOutcome::Failed(e)
        }
    }
}
