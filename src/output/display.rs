//! Colored printing for the line-oriented front end

use super::formatters::{cell_label, create_progress_bar, split_usage};
use crate::core::{COLS, ColorHint, LetterUsage, Position, ROWS, RowHints, Word};
use crate::protocol::{ClueOutcome, LetterCount, ScanOutcome, ScratchOutcome};
use crate::session::{GuessOutcome, GuessRejection, Session};
use colored::{ColoredString, Colorize};

/// Paint `text` as a tile in the hint's color
fn tile(text: &str, hint: ColorHint) -> ColoredString {
    let padded = format!(" {text} ");
    match hint {
        ColorHint::Correct => padded.white().on_blue().bold(),
        ColorHint::Present => padded.black().on_truecolor(240, 140, 40).bold(),
        ColorHint::Absent => padded.black().on_white(),
    }
}

fn print_row(word: &Word, hints: &RowHints) {
    let tiles: Vec<String> = word
        .letters()
        .zip(hints.iter())
        .map(|(letter, hint)| tile(&letter.to_uppercase().to_string(), hint).to_string())
        .collect();
    println!("   {}  {}", tiles.join(" "), hints.to_emoji());
}

/// Print the board with reveals, badges and tool state
pub fn print_board(session: &Session) {
    let mode = session.mode();

    println!("\n{}", "─".repeat(44).cyan());
    println!("      {}", (0..COLS).map(|c| format!(" {c} ")).collect::<Vec<_>>().join(" "));
    for row in 0..ROWS {
        let tiles: Vec<String> = Position::in_row(row)
            .map(|position| {
                let cell = session.cell(position);
                tile(&cell_label(cell, mode), cell.hint()).to_string()
            })
            .collect();
        let marker = if session.clue_row() == Some(row) {
            " ← clue".bright_magenta().to_string()
        } else {
            String::new()
        };
        println!("   {row}  {}{marker}", tiles.join(" "));
    }
    println!("{}", "─".repeat(44).cyan());

    let revealed = session.revealed_count();
    let total = ROWS * COLS;
    println!(
        "   Revealed [{}] {revealed}/{total}   Locked: {}",
        create_progress_bar(revealed, total, 20).green(),
        session.locked_count()
    );
    println!(
        "   Mode: {} ({} tries per cell)   Clue: {}   Scan: {}",
        mode.name().bright_yellow(),
        mode.max_tries(),
        tool_label(session.clue_state().is_used()),
        tool_label(session.phantom_state().is_used()),
    );
}

fn tool_label(used: bool) -> ColoredString {
    if used {
        "used".bright_black()
    } else {
        "ready".green()
    }
}

/// Print the scratchpad history, oldest first
pub fn print_scratch_history(session: &Session) {
    let history = session.scratch_history();
    if history.is_empty() {
        println!("   {}", "Scratchpad is empty".bright_black());
        return;
    }
    for entry in history.iter() {
        print_row(&entry.word, &entry.hints);
    }
}

/// Print a phantom scan mapping
pub fn print_usage(usage: &LetterUsage) {
    let (used, unused) = split_usage(usage);
    println!("   In play:     {}", spaced(&used).bright_green().bold());
    println!("   Not in play: {}", spaced(&unused).bright_black());
}

fn spaced(letters: &str) -> String {
    letters
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_guess_outcome(position: Position, outcome: GuessOutcome) {
    match outcome {
        GuessOutcome::Revealed(letter) => println!(
            "{}",
            format!("✓ {position} is {}", letter.to_uppercase()).green().bold()
        ),
        GuessOutcome::Missed { remaining: 0 } => {
            println!("{}", format!("✗ Wrong. {position} is now locked").red().bold());
        }
        GuessOutcome::Missed { remaining } => println!(
            "{}",
            format!("✗ Wrong. {remaining} left for {position}").red()
        ),
        GuessOutcome::Unresolved => println!(
            "{}",
            "⚠ No answer from the puzzle server; the attempt was spent".yellow()
        ),
        GuessOutcome::Superseded => println!("{position} was revealed in the meantime"),
        GuessOutcome::Ignored(reason) => {
            let text = match reason {
                GuessRejection::InvalidLetter => "Enter a single letter",
                GuessRejection::AlreadyRevealed => "That cell is already revealed",
                GuessRejection::Locked => "That cell is locked",
                GuessRejection::Pending => "A guess for that cell is still pending",
            };
            println!("{}", text.bright_black());
        }
    }
}

pub fn print_count(input: &str, count: LetterCount) {
    let label = input.trim().to_uppercase();
    match count {
        LetterCount::Known(n) => println!("   {label}: {}", n.to_string().bright_yellow().bold()),
        LetterCount::Unknown => println!("   {label}: {}", count.to_string().bright_black()),
    }
}

pub fn print_clue_outcome(outcome: &ClueOutcome) {
    match outcome {
        ClueOutcome::Revealed { row, word, hints } => {
            println!("{}", format!("🔍 Clue: row {row} revealed").bright_magenta().bold());
            print_row(word, hints);
        }
        ClueOutcome::Ignored => println!("{}", "The clue has already been used".bright_black()),
        ClueOutcome::Rejected(e) => println!("{}", format!("Clue unavailable: {e}").yellow()),
    }
}

pub fn print_scratch_outcome(input: &str, outcome: &ScratchOutcome) {
    match outcome {
        ScratchOutcome::Checked(hints) => match Word::new(input) {
            Ok(word) => print_row(&word, hints),
            Err(_) => println!("   {}", hints.to_emoji()),
        },
        ScratchOutcome::Ignored => println!("{}", "Enter a five-letter word".bright_black()),
        ScratchOutcome::Rejected(e) => println!("{}", format!("Not scored: {e}").yellow()),
    }
}

pub fn print_scan_outcome(outcome: &ScanOutcome) {
    match outcome {
        ScanOutcome::Scanned(usage) => {
            println!("{}", "👻 Phantom scan".bright_cyan().bold());
            print_usage(usage);
        }
        ScanOutcome::Ignored => {
            println!("{}", "The phantom scan has already been used".bright_black());
        }
        ScanOutcome::Failed(e) => println!("{}", format!("Phantom scan lost: {e}").yellow()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_separates_letters() {
        assert_eq!(spaced("ABC"), "A B C");
        assert_eq!(spaced(""), "");
    }

    #[test]
    fn tiles_pad_their_text() {
        colored::control::set_override(false);
        assert_eq!(tile("A", ColorHint::Correct).to_string(), " A ");
        assert_eq!(tile("·", ColorHint::Absent).to_string(), " · ");
    }
}
