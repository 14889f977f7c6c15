//! Reverse Wordle
//!
//! A puzzle where every tile's color is shown up front and the letters are
//! hidden. The player recovers the letters cell by cell under a guess budget,
//! helped by a handful of assist tools.
//!
//! # Quick Start
//!
//! ```rust
//! use reverse_wordle::authority::LocalAuthority;
//! use reverse_wordle::core::Position;
//! use reverse_wordle::protocol::{count_letter, start_session, submit_guess};
//! use reverse_wordle::session::Mode;
//!
//! let mut authority = LocalAuthority::embedded(Some(7));
//! let mut session = start_session(&mut authority, Mode::Standard).unwrap();
//!
//! let cell = Position::new(0, 0).unwrap();
//! let outcome = submit_guess(&mut session, &mut authority, cell, "e");
//! println!("{outcome:?}, 'e' appears {} times", count_letter(&mut authority, "e"));
//! ```

// Core domain types
pub mod core;

// Per-puzzle state
pub mod session;

// Guess and assist tool protocols
pub mod protocol;

// Holders of the hidden puzzle
pub mod authority;

// Word lists
pub mod wordlists;

// Runtime configuration and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
