//! In-memory authority for tests
//!
//! Answers from six fixed row words and records every request it receives.

use super::{AuthorityError, PuzzleAuthority, RowReveal};
use crate::core::{HintGrid, Letter, LetterUsage, Position, ROWS, RowHints, Word};

/// One request seen by [`ScriptedAuthority`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    NewPuzzle,
    Board,
    Validate(Position, Letter),
    Count(Letter),
    Reveal(usize),
    Scratch(Word),
    PhantomScan,
}

pub struct ScriptedAuthority {
    rows: [Word; ROWS],
    hints: HintGrid,
    clue_used: bool,
    /// Every request fails with `Unavailable`
    pub offline: bool,
    /// `reveal` answers `Rejected` even when the clue is unused
    pub refuse_reveal: bool,
    /// `reveal` reports these colors instead of the true ones
    pub reveal_colors: Option<RowHints>,
    pub calls: Vec<Call>,
}

impl ScriptedAuthority {
    /// Puzzle whose sixth row is the solution
    pub fn new(words: [&str; ROWS]) -> Self {
        let rows = words.map(|w| Word::new(w).unwrap());
        let solution = rows[ROWS - 1].clone();
        let hints = HintGrid::new(std::array::from_fn(|row| {
            RowHints::score(&rows[row], &solution)
        }));

        Self {
            rows,
            hints,
            clue_used: false,
            offline: false,
            refuse_reveal: false,
            reveal_colors: None,
            calls: Vec::new(),
        }
    }

    /// A fixed puzzle with solution "crane"
    pub fn standard() -> Self {
        Self::new(["slate", "bloke", "tough", "dairy", "crown", "crane"])
    }

    pub fn row_word(&self, row: usize) -> &Word {
        &self.rows[row]
    }

    /// Requests seen, excluding puzzle setup
    pub fn play_calls(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|call| !matches!(call, Call::NewPuzzle | Call::Board))
            .collect()
    }

    fn record(&mut self, call: Call) -> Result<(), AuthorityError> {
        self.calls.push(call);
        if self.offline {
            return Err(AuthorityError::unavailable("scripted outage"));
        }
        Ok(())
    }
}

impl PuzzleAuthority for ScriptedAuthority {
    fn new_puzzle(&mut self) -> Result<(), AuthorityError> {
        self.record(Call::NewPuzzle)?;
        self.clue_used = false;
        Ok(())
    }

    fn board(&mut self) -> Result<HintGrid, AuthorityError> {
        self.record(Call::Board)?;
        Ok(self.hints)
    }

    fn validate_letter(
        &mut self,
        position: Position,
        letter: Letter,
    ) -> Result<bool, AuthorityError> {
        self.record(Call::Validate(position, letter))?;
        Ok(self.rows[position.row()].letter_at(position.col()) == letter)
    }

    fn count(&mut self, letter: Letter) -> Result<u32, AuthorityError> {
        self.record(Call::Count(letter))?;
        let total: usize = self.rows.iter().map(|w| w.count_of(letter)).sum();
        Ok(total as u32)
    }

    fn reveal(&mut self, row: usize) -> Result<RowReveal, AuthorityError> {
        self.record(Call::Reveal(row))?;
        if self.refuse_reveal || self.clue_used || row >= ROWS {
            return Err(AuthorityError::rejected("clue unavailable"));
        }
        self.clue_used = true;
        Ok(RowReveal {
            word: self.rows[row].clone(),
            colors: self.reveal_colors.unwrap_or(*self.hints.row(row)),
        })
    }

    fn scratch(&mut self, guess: &Word) -> Result<RowHints, AuthorityError> {
        self.record(Call::Scratch(guess.clone()))?;
        Ok(RowHints::score(guess, &self.rows[ROWS - 1]))
    }

    fn phantom_scan(&mut self) -> Result<LetterUsage, AuthorityError> {
        self.record(Call::PhantomScan)?;
        let mut usage = LetterUsage::empty();
        for letter in self.rows.iter().flat_map(Word::letters) {
            usage.mark(letter);
        }
        Ok(usage)
    }
}
