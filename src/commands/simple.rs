//! Simple interactive CLI mode
//!
//! Line-oriented play without the TUI. Each line is one command.

use crate::authority::PuzzleAuthority;
use crate::config::GameConfig;
use crate::core::Position;
use crate::output::{
    print_board, print_clue_outcome, print_count, print_guess_outcome, print_scan_outcome,
    print_scratch_history, print_scratch_outcome,
};
use crate::protocol;
use crate::session::{GuessOutcome, Mode, Session};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess { position: Position, letter: String },
    Count(String),
    Clue,
    Scratch(String),
    Scan,
    Mode(Mode),
    Board,
    History,
    New,
    Help,
    Quit,
}

impl Command {
    /// Parse one line of input
    ///
    /// # Errors
    ///
    /// Returns a short usage hint when the line is not a known command.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Err("Type 'help' for commands".to_string());
        };
        let arg = parts.next().unwrap_or_default();

        match name.to_ascii_lowercase().as_str() {
            "guess" | "g" => {
                let row = arg.parse::<usize>().ok();
                let col = parts.next().and_then(|c| c.parse::<usize>().ok());
                let letter = parts.next().unwrap_or_default().to_string();
                let position = row
                    .zip(col)
                    .and_then(|(row, col)| Position::new(row, col))
                    .ok_or("Usage: guess <row 0-5> <col 0-4> <letter>")?;
                Ok(Self::Guess { position, letter })
            }
            "count" | "c" => Ok(Self::Count(arg.to_string())),
            "clue" => Ok(Self::Clue),
            "scratch" | "s" => Ok(Self::Scratch(arg.to_string())),
            "scan" => Ok(Self::Scan),
            "mode" | "m" => arg.parse().map(Self::Mode),
            "board" | "b" => Ok(Self::Board),
            "history" | "h" => Ok(Self::History),
            "new" | "n" => Ok(Self::New),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(format!("Unknown command '{other}'. Type 'help' for commands")),
        }
    }
}

/// Session plus everything needed to drive it from the command line
pub struct SimpleGame {
    session: Session,
    authority: Box<dyn PuzzleAuthority>,
    rng: StdRng,
}

impl SimpleGame {
    /// Start the first puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if the authority cannot produce a puzzle.
    pub fn new(mut authority: Box<dyn PuzzleAuthority>, config: &GameConfig) -> Result<Self> {
        let session = protocol::start_session(authority.as_mut(), config.mode)
            .context("Failed to start a puzzle")?;
        Ok(Self {
            session,
            authority,
            rng: config.client_rng(),
        })
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Run one command; returns false once the player quits
    pub fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::Guess { position, letter } => {
                let outcome = protocol::submit_guess(
                    &mut self.session,
                    self.authority.as_mut(),
                    position,
                    &letter,
                );
                print_guess_outcome(position, outcome);
                if matches!(outcome, GuessOutcome::Revealed(_)) && self.session.is_solved() {
                    println!(
                        "\n{}",
                        "🎉 Board cleared! Type 'new' for another."
                            .bright_green()
                            .bold()
                    );
                }
            }
            Command::Count(input) => {
                let count = protocol::count_letter(self.authority.as_mut(), &input);
                print_count(&input, count);
            }
            Command::Clue => {
                let outcome =
                    protocol::reveal_clue(&mut self.session, self.authority.as_mut(), &mut self.rng);
                print_clue_outcome(&outcome);
            }
            Command::Scratch(input) => {
                let outcome =
                    protocol::check_scratch(&mut self.session, self.authority.as_mut(), &input);
                print_scratch_outcome(&input, &outcome);
            }
            Command::Scan => {
                let outcome = protocol::phantom_scan(&mut self.session, self.authority.as_mut());
                print_scan_outcome(&outcome);
            }
            Command::Mode(mode) => match self.session.set_mode(mode) {
                Ok(()) => println!("Mode: {mode} ({} tries per cell)", mode.max_tries()),
                Err(e) => println!("{}", e.to_string().red()),
            },
            Command::Board => print_board(&self.session),
            Command::History => print_scratch_history(&self.session),
            Command::New => {
                match protocol::start_session(self.authority.as_mut(), self.session.mode()) {
                    Ok(session) => {
                        self.session = session;
                        println!("\n🔄 New puzzle started!");
                        print_board(&self.session);
                    }
                    Err(e) => println!("{}", format!("Could not start a new puzzle: {e}").red()),
                }
            }
            Command::Help => print_help(),
            Command::Quit => return false,
        }
        true
    }
}

fn print_help() {
    println!("\nCommands:");
    println!("  guess <row> <col> <letter>   Guess the hidden letter of a cell");
    println!("  count <letter>               Occurrences of a letter across all rows");
    println!("  clue                         Reveal one random row (once)");
    println!("  scratch <word>               Score a word against the solution");
    println!("  history                      Show recent scratchpad results");
    println!("  scan                         Which letters are in play (once)");
    println!("  mode <standard|forgiving>    Change mode before the first guess");
    println!("  board                        Show the board");
    println!("  new                          Start a new puzzle");
    println!("  quit                         Leave\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the first puzzle cannot be started or there's an I/O
/// error reading user input.
pub fn run_simple(authority: Box<dyn PuzzleAuthority>, config: &GameConfig) -> Result<()> {
    let mut game = SimpleGame::new(authority, config)?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Reverse Wordle - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("\nEvery tile is colored. Work out the letters behind them.");
    print_help();
    print_board(game.session());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(command) => {
                if !game.execute(command) {
                    break;
                }
            }
            Err(hint) => println!("{}", hint.yellow()),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authority::scripted::ScriptedAuthority;
    use crate::core::Letter;

    fn game() -> SimpleGame {
        let config = GameConfig {
            seed: Some(5),
            ..GameConfig::default()
        };
        SimpleGame::new(Box::new(ScriptedAuthority::standard()), &config).unwrap()
    }

    fn run(game: &mut SimpleGame, line: &str) -> bool {
        game.execute(Command::parse(line).unwrap())
    }

    #[test]
    fn parse_guess() {
        assert_eq!(
            Command::parse("guess 2 4 E"),
            Ok(Command::Guess {
                position: Position::new(2, 4).unwrap(),
                letter: "E".to_string()
            })
        );
        assert!(Command::parse("guess 6 0 a").is_err());
        assert!(Command::parse("g x 0 a").is_err());
    }

    #[test]
    fn parse_guess_without_letter_defers_validation() {
        assert_eq!(
            Command::parse("g 0 0"),
            Ok(Command::Guess {
                position: Position::default(),
                letter: String::new()
            })
        );
    }

    #[test]
    fn parse_tools() {
        assert_eq!(Command::parse("count e"), Ok(Command::Count("e".to_string())));
        assert_eq!(Command::parse("COUNT"), Ok(Command::Count(String::new())));
        assert_eq!(Command::parse("clue"), Ok(Command::Clue));
        assert_eq!(Command::parse("s hello"), Ok(Command::Scratch("hello".to_string())));
        assert_eq!(Command::parse("scan"), Ok(Command::Scan));
        assert_eq!(Command::parse("mode easy"), Ok(Command::Mode(Mode::Forgiving)));
        assert!(Command::parse("mode hard").is_err());
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(Command::parse("dance").is_err());
        assert!(Command::parse("   ").is_err());
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn commands_drive_the_session() {
        let mut game = game();

        assert!(run(&mut game, "guess 0 0 s"));
        assert_eq!(
            game.session().cell(Position::default()).letter(),
            Letter::parse("s")
        );

        assert!(run(&mut game, "scratch crane"));
        assert_eq!(game.session().scratch_history().len(), 1);

        assert!(run(&mut game, "scan"));
        assert!(game.session().phantom_result().is_some());

        assert!(run(&mut game, "clue"));
        assert!(game.session().clue_state().is_used());

        assert!(!run(&mut game, "quit"));
    }

    #[test]
    fn mode_change_after_guess_is_refused() {
        let mut game = game();
        run(&mut game, "mode forgiving");
        assert_eq!(game.session().mode(), Mode::Forgiving);

        run(&mut game, "g 1 1 z");
        run(&mut game, "mode standard");
        assert_eq!(game.session().mode(), Mode::Forgiving);
    }

    #[test]
    fn new_replaces_the_session() {
        let mut game = game();
        run(&mut game, "g 0 0 s");
        run(&mut game, "new");
        assert_eq!(game.session().revealed_count(), 0);
    }
}
