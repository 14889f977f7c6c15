//! Formatting utilities shared by the terminal front ends

use crate::core::LetterUsage;
use crate::session::{Cell, Mode};

/// Short label for a board cell
///
/// Revealed cells show their letter, locked cells a cross, cells with a
/// guess outstanding an ellipsis and cells with a miss on record their
/// remaining guesses.
#[must_use]
pub fn cell_label(cell: &Cell, mode: Mode) -> String {
    if let Some(letter) = cell.letter() {
        return letter.to_uppercase().to_string();
    }
    if cell.is_pending() {
        return "…".to_string();
    }
    match cell.remaining_indicator(mode) {
        Some(0) => "×".to_string(),
        Some(remaining) => remaining.to_string(),
        None => "·".to_string(),
    }
}

/// Used and unused letters, each as an uppercase run
#[must_use]
pub fn split_usage(usage: &LetterUsage) -> (String, String) {
    let mut used = String::new();
    let mut unused = String::new();
    for (letter, is_used) in usage.iter() {
        if is_used {
            used.push(letter.to_uppercase());
        } else {
            unused.push(letter.to_uppercase());
        }
    }
    (used, unused)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
