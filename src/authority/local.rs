//! In-process puzzle authority
//!
//! Builds a puzzle the way the original server does: pick a solution from
//! the dictionary, then simulate five plausible earlier guesses from the
//! common-word list, followed by the solution itself as the sixth row.

use super::{AuthorityError, PuzzleAuthority, RowReveal};
use crate::core::{
    ColorHint, HintGrid, Letter, LetterUsage, Position, ROWS, RowHints, Word,
};
use crate::wordlists::{COMMON, DICTIONARY, loader::words_from_slice};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

/// Simulated rows may show at most this many absent tiles
pub const MAX_ABSENT_PER_ROW: usize = 3;

/// Upper bound on candidate draws while building one puzzle
const MAX_DRAWS: usize = 50_000;

struct Puzzle {
    solution: Word,
    rows: [Word; ROWS],
    hints: HintGrid,
    clue_used: bool,
}

/// Authority that keeps the hidden puzzle in memory
pub struct LocalAuthority {
    dictionary: Vec<Word>,
    known: FxHashSet<Word>,
    common: Vec<Word>,
    rng: StdRng,
    puzzle: Option<Puzzle>,
}

impl LocalAuthority {
    /// Create an authority over explicit word lists
    ///
    /// `dictionary` supplies solutions and the words the scratchpad accepts;
    /// `common` supplies the simulated rows.
    #[must_use]
    pub fn new(dictionary: Vec<Word>, common: Vec<Word>, rng: StdRng) -> Self {
        let known = dictionary.iter().cloned().collect();
        Self {
            dictionary,
            known,
            common,
            rng,
            puzzle: None,
        }
    }

    /// Authority over the embedded word lists
    ///
    /// A seed makes puzzle generation reproducible.
    #[must_use]
    pub fn embedded(seed: Option<u64>) -> Self {
        Self::new(
            words_from_slice(DICTIONARY),
            words_from_slice(COMMON),
            seeded_rng(seed),
        )
    }

    fn generate(&mut self) -> Result<Puzzle, AuthorityError> {
        let solution = self
            .dictionary
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| AuthorityError::unavailable("dictionary is empty"))?;

        let mut used: FxHashSet<&Word> = FxHashSet::default();
        let mut rows: Vec<Word> = Vec::with_capacity(ROWS);
        let mut hints: Vec<RowHints> = Vec::with_capacity(ROWS);

        for _ in 0..MAX_DRAWS {
            if rows.len() == ROWS - 1 {
                break;
            }
            let Some(guess) = self.common.choose(&mut self.rng) else {
                break;
            };
            if *guess == solution || !used.insert(guess) {
                continue;
            }

            let scored = RowHints::score(guess, &solution);
            if scored.count(ColorHint::Absent) <= MAX_ABSENT_PER_ROW {
                rows.push(guess.clone());
                hints.push(scored);
            }
        }

        if rows.len() < ROWS - 1 {
            return Err(AuthorityError::unavailable(
                "word lists cannot produce a full puzzle",
            ));
        }

        rows.push(solution.clone());
        hints.push(RowHints::SOLVED);

        let rows: [Word; ROWS] = rows
            .try_into()
            .map_err(|_| AuthorityError::unavailable("puzzle row count mismatch"))?;
        let hints: [RowHints; ROWS] = hints
            .try_into()
            .map_err(|_| AuthorityError::unavailable("puzzle row count mismatch"))?;

        Ok(Puzzle {
            solution,
            rows,
            hints: HintGrid::new(hints),
            clue_used: false,
        })
    }

    /// Current puzzle, starting one if none exists yet
    fn puzzle(&mut self) -> Result<&mut Puzzle, AuthorityError> {
        if self.puzzle.is_none() {
            self.new_puzzle()?;
        }
        self.puzzle
            .as_mut()
            .ok_or_else(|| AuthorityError::unavailable("no puzzle in progress"))
    }
}

/// Seeded or OS-entropy RNG
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

impl PuzzleAuthority for LocalAuthority {
    fn new_puzzle(&mut self) -> Result<(), AuthorityError> {
        let puzzle = self.generate()?;
        info!("Generated a new puzzle");
        debug!(rows = ?puzzle.rows.iter().map(Word::text).collect::<Vec<_>>(), "Hidden rows");
        self.puzzle = Some(puzzle);
        Ok(())
    }

    fn board(&mut self) -> Result<HintGrid, AuthorityError> {
        Ok(self.puzzle()?.hints)
    }

    fn validate_letter(
        &mut self,
        position: Position,
        letter: Letter,
    ) -> Result<bool, AuthorityError> {
        let puzzle = self.puzzle()?;
        Ok(puzzle.rows[position.row()].letter_at(position.col()) == letter)
    }

    fn count(&mut self, letter: Letter) -> Result<u32, AuthorityError> {
        let puzzle = self.puzzle()?;
        let total: usize = puzzle.rows.iter().map(|row| row.count_of(letter)).sum();
        Ok(total as u32)
    }

    fn reveal(&mut self, row: usize) -> Result<RowReveal, AuthorityError> {
        let puzzle = self.puzzle()?;
        if puzzle.clue_used {
            return Err(AuthorityError::rejected("clue already used"));
        }
        // The clue is spent even when the index turns out to be bad
        puzzle.clue_used = true;

        if row >= ROWS {
            return Err(AuthorityError::rejected(format!(
                "row index {row} out of range"
            )));
        }

        Ok(RowReveal {
            word: puzzle.rows[row].clone(),
            colors: *puzzle.hints.row(row),
        })
    }

    fn scratch(&mut self, guess: &Word) -> Result<RowHints, AuthorityError> {
        if !self.known.contains(guess) {
            return Err(AuthorityError::rejected("Not in dictionary"));
        }
        let puzzle = self.puzzle()?;
        Ok(RowHints::score(guess, &puzzle.solution))
    }

    fn phantom_scan(&mut self) -> Result<LetterUsage, AuthorityError> {
        let puzzle = self.puzzle()?;
        let mut usage = LetterUsage::empty();
        for letter in puzzle.rows.iter().flat_map(Word::letters) {
            usage.mark(letter);
        }
        Ok(usage)
    }
}
