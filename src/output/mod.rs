//! Terminal output formatting
//!
//! Display utilities for the line-oriented front end, plus plain-text
//! helpers the TUI shares.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_clue_outcome, print_count, print_guess_outcome, print_scan_outcome,
    print_scratch_history, print_scratch_outcome, print_usage,
};
