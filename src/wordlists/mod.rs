//! Word lists for puzzle generation
//!
//! Two lists are compiled into the binary:
//! - [`DICTIONARY`]: every accepted word; solutions are drawn from here and
//!   the scratchpad only scores words it contains
//! - [`COMMON`]: everyday words used for the simulated earlier guesses

mod embedded;
pub mod loader;

pub use embedded::{COMMON, COMMON_COUNT, DICTIONARY, DICTIONARY_COUNT};
