//! Cell guess protocol

use crate::authority::PuzzleAuthority;
use crate::core::Position;
use crate::session::{GuessOutcome, Session, Verdict};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Guess the hidden letter at `position`
///
/// Invalid input, a revealed cell, a locked cell or a cell with a guess
/// still outstanding make this a no-op with no authority call. Otherwise one
/// attempt is spent before the authority is asked, and is not refunded if
/// the request fails.
pub fn submit_guess<A>(
    session: &mut Session,
    authority: &mut A,
    position: Position,
    input: &str,
) -> GuessOutcome
where
    A: PuzzleAuthority + ?Sized,
{
    let ticket = match session.begin_guess(position, input) {
        Ok(ticket) => ticket,
        Err(rejection) => {
            debug!(%position, ?rejection, "Guess ignored");
            return GuessOutcome::Ignored(rejection);
        }
    };

    let verdict = match authority.validate_letter(ticket.position(), ticket.letter()) {
        Ok(true) => Verdict::Correct,
        Ok(false) => Verdict::Incorrect,
        Err(e) => {
            warn!(%position, error = %e, "Guess could not be validated");
            Verdict::Unavailable
        }
    };

    let outcome = session.resolve_guess(ticket, verdict, Instant::now());
    match outcome {
        GuessOutcome::Revealed(letter) => info!(%position, %letter, "Cell revealed"),
        GuessOutcome::Missed { remaining } => debug!(%position, remaining, "Wrong letter"),
        _ => debug!(%position, ?outcome, "Guess resolved"),
    }
    outcome
}
