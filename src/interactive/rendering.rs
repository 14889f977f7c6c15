//! TUI rendering with ratatui
//!
//! The board on the left, assist tools and the message log on the right.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{COLS, ColorHint, Letter, Position, ROWS, RowHints, Word};
use crate::output::formatters::{cell_label, create_progress_bar};
use crate::session::SCRATCH_CAPACITY;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::time::Instant;

const ORANGE: Color = Color::Rgb(240, 140, 40);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let now = Instant::now();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Board and tools
            Constraint::Length(3), // Input
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0], now);
    render_tools(f, app, main_chunks[1], now);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn hint_style(hint: ColorHint) -> Style {
    match hint {
        ColorHint::Correct => Style::default().fg(Color::White).bg(Color::Blue),
        ColorHint::Present => Style::default().fg(Color::Black).bg(ORANGE),
        ColorHint::Absent => Style::default().fg(Color::Black).bg(Color::Gray),
    }
}

fn tile(text: &str, style: Style) -> Span<'static> {
    Span::styled(format!(" {text} "), style.add_modifier(Modifier::BOLD))
}

fn word_tiles(word: &Word, hints: &RowHints) -> Vec<Span<'static>> {
    word.letters()
        .zip(hints.iter())
        .flat_map(|(letter, hint)| {
            [
                tile(&letter.to_uppercase().to_string(), hint_style(hint)),
                Span::raw(" "),
            ]
        })
        .collect()
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "REVERSE WORDLE  ·  puzzle {}  ·  solved {}",
        app.stats.puzzles, app.stats.solved
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let session = &app.session;
    let mode = session.mode();

    let mut lines = vec![Line::from("      0   1   2   3   4"), Line::from("")];
    for row in 0..ROWS {
        let mut spans = vec![Span::raw(format!("  {row}  "))];
        for position in Position::in_row(row) {
            let cell = session.cell(position);
            let mut style = hint_style(cell.hint());
            if position == app.cursor && app.input_mode == InputMode::Board {
                style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
            }
            spans.push(tile(&cell_label(cell, mode), style));
            spans.push(Span::raw(" "));
        }
        if session.clue_row() == Some(row) {
            spans.push(Span::styled(" ← clue", Style::default().fg(Color::Magenta)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let cursor_cell = session.cell(app.cursor);
    lines.push(Line::from(format!(
        "  Cursor {}: {} of {} guesses used",
        app.cursor,
        cursor_cell.attempts(),
        mode.max_tries()
    )));

    let (border_type, border_color, title) = if session.glitch_active(now) {
        (BorderType::Thick, Color::Red, " ▚▞ B0ARD ▞▚ ")
    } else {
        (BorderType::Rounded, Color::Cyan, " Board ")
    };

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(board, area);
}

fn render_tools(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let scratch_height = u16::try_from(SCRATCH_CAPACITY + 2).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Letter count
            Constraint::Length(scratch_height), // Scratchpad
            Constraint::Length(4),              // Phantom scan
            Constraint::Min(4),                 // Messages
        ])
        .split(area);

    render_counter(f, app, chunks[0]);
    render_scratch(f, app, chunks[1]);
    render_scan(f, app, chunks[2], now);
    render_messages(f, app, chunks[3]);
}

fn tool_block(title: &str, active: bool) -> Block<'_> {
    let color = if active { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn render_counter(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.last_count {
        Some((input, count)) => Line::from(vec![
            Span::raw(format!("{} appears ", input.to_uppercase())),
            Span::styled(
                count.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" times"),
        ]),
        None => Line::from(Span::styled(
            "Count any letter across all rows",
            Style::default().fg(Color::DarkGray),
        )),
    };
    let active = app.input_mode == InputMode::Counter;
    f.render_widget(
        Paragraph::new(line).block(tool_block(" Letter Count ", active)),
        area,
    );
}

fn render_scratch(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.scratch_history();
    let lines: Vec<Line> = if history.is_empty() {
        vec![Line::from(Span::styled(
            "Score any word against the solution",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        history
            .iter()
            .rev()
            .map(|entry| {
                let mut spans = vec![Span::raw(" ")];
                spans.extend(word_tiles(&entry.word, &entry.hints));
                Line::from(spans)
            })
            .collect()
    };
    let active = app.input_mode == InputMode::Scratch;
    f.render_widget(
        Paragraph::new(lines).block(tool_block(" Scratchpad ", active)),
        area,
    );
}

fn render_scan(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let session = &app.session;
    let lines: Vec<Line> = match session.phantom_result() {
        Some(usage) => {
            let visible = app.visible_scan_letters(now);
            let spans: Vec<Span> = usage
                .iter()
                .take(visible)
                .map(|(letter, used)| scan_letter(letter, used))
                .collect();
            let (first, second) = spans.split_at(spans.len().min(13));
            vec![Line::from(first.to_vec()), Line::from(second.to_vec())]
        }
        None if session.phantom_state().is_used() => vec![Line::from(Span::styled(
            "The scan was lost",
            Style::default().fg(Color::Red),
        ))],
        None => vec![Line::from(Span::styled(
            "Ctrl-P reveals which letters are in play",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    f.render_widget(
        Paragraph::new(lines).block(tool_block(" Phantom Scan ", false)),
        area,
    );
}

fn scan_letter(letter: Letter, used: bool) -> Span<'static> {
    let style = if used {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    };
    Span::styled(format!("{} ", letter.to_uppercase()), style)
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Board => (
            " Guess a letter for the cursor cell, Enter to submit | TAB for tools ",
            Color::Yellow,
        ),
        InputMode::Counter => (" Letter to count, Enter to ask | TAB to switch ", Color::Cyan),
        InputMode::Scratch => (
            " Five-letter word to score, Enter to check | TAB to switch ",
            Color::Magenta,
        ),
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(30),
        ])
        .split(area);

    let mode = session.mode();
    let mode_text = format!("Mode: {mode} ({})", mode.max_tries());
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[0],
    );

    let total = ROWS * COLS;
    let revealed = session.revealed_count();
    let progress_text = format!(
        "{} {revealed}/{total} · {} locked",
        create_progress_bar(revealed, total, 10),
        session.locked_count()
    );
    f.render_widget(
        Paragraph::new(progress_text).alignment(Alignment::Center),
        chunks[1],
    );

    let tool = |used: bool| if used { "used" } else { "ready" };
    let tools_text = format!(
        "Clue: {} | Scan: {}",
        tool(session.clue_state().is_used()),
        tool(session.phantom_state().is_used())
    );
    f.render_widget(
        Paragraph::new(tools_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if session.is_finished() {
        "Esc: Quit | ^N: New Puzzle"
    } else {
        "^R Clue | ^P Scan | ^T Mode | ^N New | Esc Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authority::scripted::ScriptedAuthority;
    use crate::config::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        let config = GameConfig {
            seed: Some(2),
            ..GameConfig::default()
        };
        App::new(Box::new(ScriptedAuthority::standard()), &config).unwrap()
    }

    #[test]
    fn renders_panels() {
        let screen = render(&app());
        for title in ["REVERSE WORDLE", "Board", "Letter Count", "Scratchpad", "Phantom Scan"] {
            assert!(screen.contains(title), "missing {title}");
        }
        assert!(screen.contains("Mode: standard (3)"));
    }

    #[test]
    fn renders_revealed_letters_and_scan() {
        let mut app = app();
        app.input_buffer = "s".to_string();
        app.submit_guess();
        app.phantom_scan();
        app.scan_started = None;

        let screen = render(&app);
        assert!(screen.contains(" S "));
        assert!(screen.contains("1/30"));
        assert!(screen.contains("Clue: ready | Scan: used"));
    }

    #[test]
    fn glitch_changes_board_title() {
        let mut app = app();
        app.input_buffer = "q".to_string();
        app.submit_guess();

        let screen = render(&app);
        assert!(screen.contains("B0ARD"));
    }
}
