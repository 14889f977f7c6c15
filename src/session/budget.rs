//! Attempt budget policy
//!
//! The difficulty mode decides how many letter guesses each cell gets.

use std::fmt;
use std::str::FromStr;

/// Session-wide difficulty setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Three guesses per cell
    #[default]
    Standard,
    /// Five guesses per cell
    Forgiving,
}

impl Mode {
    /// Maximum guesses a single cell accepts in this mode
    #[must_use]
    pub const fn max_tries(self) -> u8 {
        match self {
            Self::Standard => 3,
            Self::Forgiving => 5,
        }
    }

    /// Whether a cell that has used `attempts` guesses may take another
    #[must_use]
    pub const fn accepts(self, attempts: u8) -> bool {
        attempts < self.max_tries()
    }

    /// Guesses left for a cell that has used `attempts`
    #[must_use]
    pub const fn remaining(self, attempts: u8) -> u8 {
        self.max_tries().saturating_sub(attempts)
    }

    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Standard => Self::Forgiving,
            Self::Forgiving => Self::Standard,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Forgiving => "forgiving",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "std" => Ok(Self::Standard),
            "forgiving" | "easy" => Ok(Self::Forgiving),
            other => Err(format!(
                "Unknown mode '{other}' (expected 'standard' or 'forgiving')"
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
