//! Client protocols
//!
//! Each function drives one player action against a [`PuzzleAuthority`]
//! and folds the answer into the [`Session`]. Authority failures never
//! escape: they are logged and reported through the returned outcome, and
//! the session stays playable.

mod guess;
mod tools;

pub use guess::submit_guess;
pub use tools::{
    ClueOutcome, LetterCount, ScanOutcome, ScratchOutcome, check_scratch, count_letter,
    phantom_scan, reveal_clue,
};

use crate::authority::{AuthorityError, PuzzleAuthority};
use crate::session::{Mode, Session};
use tracing::info;

/// Start a fresh puzzle and build a session over its hint grid
///
/// # Errors
/// Returns the authority error if the puzzle could not be created or its
/// grid fetched.
pub fn start_session<A>(authority: &mut A, mode: Mode) -> Result<Session, AuthorityError>
where
    A: PuzzleAuthority + ?Sized,
{
    authority.new_puzzle()?;
    let grid = authority.board()?;
    info!(%mode, "New session started");
    Ok(Session::new(grid, mode))
}
