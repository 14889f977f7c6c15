//! Reverse Wordle - CLI
//!
//! Play in the TUI (default) or the line-oriented simple mode, against an
//! in-process puzzle or a remote server.

use anyhow::Result;
use clap::{Parser, Subcommand};
use reverse_wordle::{
    commands::run_simple,
    config::{AuthorityConfig, GameConfig},
    interactive::{App, run_tui},
    logging::{LogTarget, init_logging},
    session::Mode,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "reverse_wordle",
    about = "Reverse Wordle: the colors are known, find the letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Mode: standard (3 tries per cell) or forgiving (5)
    #[arg(short, long, global = true, default_value = "standard")]
    mode: Mode,

    /// Base URL of a remote puzzle server, e.g. http://localhost:8080/api
    #[arg(long, global = true, env = "REVERSE_WORDLE_SERVER")]
    server: Option<String>,

    /// Dictionary file for local puzzles (one word per line)
    #[arg(long, global = true, conflicts_with = "server")]
    dictionary: Option<PathBuf>,

    /// Common-word file for local puzzles (one word per line)
    #[arg(long, global = true, conflicts_with = "server")]
    common: Option<PathBuf>,

    /// Seed for reproducible puzzles and clue rows
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level; REVERSE_WORDLE_LOG overrides it with a full filter
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Write logs to this file (the TUI discards them otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line commands without TUI)
    Simple,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let authority = match &self.server {
            Some(base_url) => AuthorityConfig::Remote {
                base_url: base_url.clone(),
            },
            None => AuthorityConfig::Local {
                dictionary: self.dictionary.clone(),
                common: self.common.clone(),
            },
        };

        GameConfig {
            mode: self.mode,
            authority,
            seed: self.seed,
            ..GameConfig::default()
        }
    }

    fn log_target(&self, command: Commands) -> LogTarget {
        match (&self.log_file, command) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Commands::Play) => LogTarget::Discard,
            (None, Commands::Simple) => LogTarget::Stderr,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(&cli.log_level, &cli.log_target(command))?;

    let config = cli.game_config();
    let authority = config.build_authority()?;
    info!(mode = %config.mode, "Starting");

    match command {
        Commands::Play => run_tui(App::new(authority, &config)?),
        Commands::Simple => run_simple(authority, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_standard() {
        let cli = Cli::try_parse_from(["reverse_wordle"]).unwrap();
        assert!(cli.command.is_none());

        let config = cli.game_config();
        assert_eq!(config.mode, Mode::Standard);
        assert!(matches!(config.authority, AuthorityConfig::Local { .. }));
    }

    #[test]
    fn flags_reach_the_config() {
        let cli = Cli::try_parse_from([
            "reverse_wordle",
            "simple",
            "--mode",
            "forgiving",
            "--server",
            "http://localhost:8080/api",
            "--seed",
            "9",
        ])
        .unwrap();

        let config = cli.game_config();
        assert_eq!(config.mode, Mode::Forgiving);
        assert_eq!(config.seed, Some(9));
        assert_eq!(
            config.authority,
            AuthorityConfig::Remote {
                base_url: "http://localhost:8080/api".to_string()
            }
        );
        assert_eq!(cli.log_target(Commands::Simple), LogTarget::Stderr);
    }

    #[test]
    fn tui_logs_to_file_or_nowhere() {
        let cli = Cli::try_parse_from(["reverse_wordle"]).unwrap();
        assert_eq!(cli.log_target(Commands::Play), LogTarget::Discard);

        let cli = Cli::try_parse_from(["reverse_wordle", "--log-file", "game.log"]).unwrap();
        assert_eq!(
            cli.log_target(Commands::Play),
            LogTarget::File(PathBuf::from("game.log"))
        );
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["reverse_wordle", "--mode", "brutal"]).is_err());
    }
}
