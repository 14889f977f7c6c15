//! Game configuration
//!
//! Built by the binary from command-line flags and environment, then used
//! to pick and construct the puzzle authority.

use crate::authority::{
    DEFAULT_TIMEOUT, HttpAuthority, LocalAuthority, PuzzleAuthority, seeded_rng,
};
use crate::core::Word;
use crate::session::Mode;
use crate::wordlists::{COMMON, DICTIONARY, loader};
use anyhow::{Context, Result, ensure};
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Which authority holds the hidden puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorityConfig {
    /// Generate puzzles in-process; `None` paths use the embedded lists
    Local {
        dictionary: Option<PathBuf>,
        common: Option<PathBuf>,
    },
    /// Play against a remote server rooted at `base_url`
    Remote { base_url: String },
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self::Local {
            dictionary: None,
            common: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub mode: Mode,
    pub authority: AuthorityConfig,
    /// Seeds both puzzle generation and the clue row choice
    pub seed: Option<u64>,
    pub timeout: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            authority: AuthorityConfig::default(),
            seed: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GameConfig {
    /// Construct the configured authority
    ///
    /// # Errors
    /// Returns an error if a word list file cannot be read or is empty, or
    /// the HTTP client cannot be built.
    pub fn build_authority(&self) -> Result<Box<dyn PuzzleAuthority>> {
        match &self.authority {
            AuthorityConfig::Local { dictionary, common } => {
                let dictionary = load_list(dictionary.as_deref(), DICTIONARY, "dictionary")?;
                let common = load_list(common.as_deref(), COMMON, "common")?;
                info!(
                    dictionary = dictionary.len(),
                    common = common.len(),
                    seeded = self.seed.is_some(),
                    "Using local authority"
                );
                Ok(Box::new(LocalAuthority::new(
                    dictionary,
                    common,
                    seeded_rng(self.seed),
                )))
            }
            AuthorityConfig::Remote { base_url } => {
                info!(%base_url, "Using remote authority");
                let authority = HttpAuthority::new(base_url.as_str(), self.timeout)
                    .context("Failed to create HTTP client")?;
                Ok(Box::new(authority))
            }
        }
    }

    /// Client-side RNG for the clue row choice
    #[must_use]
    pub fn client_rng(&self) -> StdRng {
        seeded_rng(self.seed)
    }
}

fn load_list(path: Option<&Path>, embedded: &[&str], name: &str) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to read {name} list {}", path.display()))?,
        None => loader::words_from_slice(embedded),
    };
    ensure!(!words.is_empty(), "The {name} list has no usable words");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_file(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
    }

    #[test]
    fn default_is_local_standard() {
        let config = GameConfig::default();
        assert_eq!(config.mode, Mode::Standard);
        assert_eq!(config.authority, AuthorityConfig::default());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn local_authority_from_embedded_lists() {
        let config = GameConfig {
            seed: Some(4),
            ..GameConfig::default()
        };
        let mut authority = config.build_authority().unwrap();
        assert!(authority.board().is_ok());
    }

    #[test]
    fn local_authority_from_files() {
        let config = GameConfig {
            authority: AuthorityConfig::Local {
                dictionary: Some(data_file("dictionary.txt")),
                common: Some(data_file("common.txt")),
            },
            seed: Some(4),
            ..GameConfig::default()
        };
        let mut authority = config.build_authority().unwrap();
        assert!(authority.phantom_scan().is_ok());
    }

    #[test]
    fn missing_list_file_is_an_error() {
        let config = GameConfig {
            authority: AuthorityConfig::Local {
                dictionary: Some(data_file("missing.txt")),
                common: None,
            },
            ..GameConfig::default()
        };
        let err = config.build_authority().err().unwrap();
        assert!(err.to_string().contains("dictionary"));
    }

    #[test]
    fn empty_list_is_an_error() {
        assert!(load_list(None, &[], "common").is_err());
        assert!(load_list(None, &["nope", "toolong"], "common").is_err());
    }

    #[test]
    fn remote_authority_builds_without_connecting() {
        let config = GameConfig {
            authority: AuthorityConfig::Remote {
                base_url: "http://localhost:8080/api".to_string(),
            },
            ..GameConfig::default()
        };
        assert!(config.build_authority().is_ok());
    }

    #[test]
    fn same_seed_same_client_rng() {
        use rand::Rng;
        let config = GameConfig {
            seed: Some(12),
            ..GameConfig::default()
        };
        let a: u64 = config.client_rng().random();
        let b: u64 = config.client_rng().random();
        assert_eq!(a, b);
    }
}
