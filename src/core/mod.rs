//! Core domain types for Reverse Wordle
//!
//! Pure value types: words, letters, board coordinates and color hints.
//! Nothing here knows about sessions or the puzzle authority.

mod grid;
mod hint;
mod letter;
mod word;

pub use grid::{COLS, HintGrid, Position, ROWS};
pub use hint::{ColorHint, RowHints};
pub use letter::{ALPHABET_SIZE, Letter, LetterUsage, LetterUsageError};
pub use word::{WORD_LENGTH, Word, WordError};
