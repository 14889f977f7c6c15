//! Command implementations

pub mod simple;

pub use simple::{Command, SimpleGame, run_simple};
