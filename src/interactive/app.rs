//! TUI application state and logic

use crate::authority::PuzzleAuthority;
use crate::config::GameConfig;
use crate::core::{ALPHABET_SIZE, Position};
use crate::protocol::{self, ClueOutcome, LetterCount, ScanOutcome, ScratchOutcome};
use crate::session::{GuessOutcome, GuessRejection, Session};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// Delay between letters appearing in the phantom scan panel
pub const SCAN_STAGGER: Duration = Duration::from_millis(50);

/// Redraw interval; keeps the glitch and scan animations moving
const TICK: Duration = Duration::from_millis(50);

const MAX_MESSAGES: usize = 5;
const SCRATCH_INPUT_LEN: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    authority: Box<dyn PuzzleAuthority>,
    rng: StdRng,
    pub cursor: Position,
    pub input_mode: InputMode,
    pub input_buffer: String,
    /// Last letter-count query and its result
    pub last_count: Option<(String, LetterCount)>,
    /// When the phantom scan result arrived
    pub scan_started: Option<Instant>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// What typed characters feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Letter guesses for the cell under the cursor
    Board,
    /// Letter-frequency tool
    Counter,
    /// Scratchpad word checks
    Scratch,
}

impl InputMode {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Board => Self::Counter,
            Self::Counter => Self::Scratch,
            Self::Scratch => Self::Board,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles: usize,
    pub solved: usize,
}

impl App {
    /// Start the first puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if the authority cannot produce a puzzle.
    pub fn new(mut authority: Box<dyn PuzzleAuthority>, config: &GameConfig) -> Result<Self> {
        let session = protocol::start_session(authority.as_mut(), config.mode)
            .context("Failed to start a puzzle")?;

        let mut app = Self {
            session,
            authority,
            rng: config.client_rng(),
            cursor: Position::default(),
            input_mode: InputMode::Board,
            input_buffer: String::new(),
            last_count: None,
            scan_started: None,
            messages: Vec::new(),
            stats: Statistics {
                puzzles: 1,
                solved: 0,
            },
            should_quit: false,
        };
        app.add_message(
            "Every tile is colored; find the letters behind them.",
            MessageStyle::Info,
        );
        app.add_message(
            "Move with arrows, type a letter and press Enter to guess.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn add_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.messages.push(Message {
            text: text.into(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn new_puzzle(&mut self) {
        match protocol::start_session(self.authority.as_mut(), self.session.mode()) {
            Ok(session) => {
                self.session = session;
                self.cursor = Position::default();
                self.input_buffer.clear();
                self.last_count = None;
                self.scan_started = None;
                self.stats.puzzles += 1;
                self.messages.clear();
                self.add_message("New puzzle started!", MessageStyle::Info);
                info!(puzzles = self.stats.puzzles, "Puzzle replaced");
            }
            Err(e) => {
                self.add_message(format!("Could not start a new puzzle: {e}"), MessageStyle::Error);
            }
        }
    }

    /// Move the cursor, stopping at the board edges
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let target = self
            .cursor
            .row()
            .checked_add_signed(d_row)
            .zip(self.cursor.col().checked_add_signed(d_col))
            .and_then(|(row, col)| Position::new(row, col));
        if let Some(position) = target {
            self.cursor = position;
        }
    }

    pub fn cycle_input_mode(&mut self) {
        self.input_mode = self.input_mode.next();
        self.input_buffer.clear();
    }

    fn push_input(&mut self, c: char) {
        match self.input_mode {
            InputMode::Board | InputMode::Counter => {
                self.input_buffer.clear();
                self.input_buffer.push(c);
            }
            InputMode::Scratch => {
                if self.input_buffer.chars().count() < SCRATCH_INPUT_LEN {
                    self.input_buffer.push(c);
                }
            }
        }
    }

    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let position = self.cursor;
        let outcome =
            protocol::submit_guess(&mut self.session, self.authority.as_mut(), position, &input);

        match outcome {
            GuessOutcome::Revealed(letter) => {
                self.add_message(
                    format!("{position} is {}", letter.to_uppercase()),
                    MessageStyle::Success,
                );
                self.check_solved();
            }
            GuessOutcome::Missed { remaining: 0 } => {
                self.add_message(
                    format!("Wrong letter, {position} is locked"),
                    MessageStyle::Error,
                );
                if self.session.is_finished() && !self.session.is_solved() {
                    self.add_message(
                        "No guesses left on this board. Ctrl-N for a new puzzle.",
                        MessageStyle::Info,
                    );
                }
            }
            GuessOutcome::Missed { remaining } => self.add_message(
                format!("Wrong letter, {remaining} left for {position}"),
                MessageStyle::Error,
            ),
            GuessOutcome::Unresolved => self.add_message(
                "No answer from the puzzle server; the attempt was spent",
                MessageStyle::Error,
            ),
            GuessOutcome::Superseded => {
                self.add_message(format!("{position} was already revealed"), MessageStyle::Info);
            }
            GuessOutcome::Ignored(reason) => {
                let text = match reason {
                    GuessRejection::InvalidLetter => "Type a letter, then Enter",
                    GuessRejection::AlreadyRevealed => "That cell is already revealed",
                    GuessRejection::Locked => "That cell is locked",
                    GuessRejection::Pending => "A guess for that cell is still pending",
                };
                self.add_message(text, MessageStyle::Info);
            }
        }
    }

    pub fn count_letter(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let count = protocol::count_letter(self.authority.as_mut(), &input);
        self.last_count = Some((input, count));
    }

    pub fn check_scratch(&mut self) {
        match protocol::check_scratch(&mut self.session, self.authority.as_mut(), &self.input_buffer)
        {
            ScratchOutcome::Checked(_) => self.input_buffer.clear(),
            ScratchOutcome::Ignored => {
                self.add_message("The scratchpad needs a five-letter word", MessageStyle::Info);
            }
            ScratchOutcome::Rejected(e) => {
                self.add_message(format!("Not scored: {e}"), MessageStyle::Error);
            }
        }
    }

    pub fn reveal_clue(&mut self) {
        match protocol::reveal_clue(&mut self.session, self.authority.as_mut(), &mut self.rng) {
            ClueOutcome::Revealed { row, word, .. } => {
                self.add_message(
                    format!("Clue: row {row} is {}", word.text().to_uppercase()),
                    MessageStyle::Success,
                );
                self.check_solved();
            }
            ClueOutcome::Ignored => {
                self.add_message("The clue has already been used", MessageStyle::Info);
            }
            ClueOutcome::Rejected(e) => {
                self.add_message(format!("Clue unavailable: {e}"), MessageStyle::Error);
            }
        }
    }

    pub fn phantom_scan(&mut self) {
        match protocol::phantom_scan(&mut self.session, self.authority.as_mut()) {
            ScanOutcome::Scanned(usage) => {
                self.scan_started = Some(Instant::now());
                self.add_message(
                    format!("Phantom scan: {} letters in play", usage.used_count()),
                    MessageStyle::Success,
                );
            }
            ScanOutcome::Ignored => {
                self.add_message("The phantom scan has already been used", MessageStyle::Info);
            }
            ScanOutcome::Failed(e) => {
                self.add_message(format!("Phantom scan lost: {e}"), MessageStyle::Error);
            }
        }
    }

    pub fn toggle_mode(&mut self) {
        let mode = self.session.mode().toggled();
        match self.session.set_mode(mode) {
            Ok(()) => self.add_message(
                format!("Mode: {mode} ({} tries per cell)", mode.max_tries()),
                MessageStyle::Info,
            ),
            Err(e) => self.add_message(e.to_string(), MessageStyle::Error),
        }
    }

    fn check_solved(&mut self) {
        if self.session.is_solved() {
            self.stats.solved += 1;
            self.add_message(
                "🎉 Board cleared! Ctrl-N for a new puzzle.",
                MessageStyle::Success,
            );
        }
    }

    /// Letters of the phantom scan shown so far
    #[must_use]
    pub fn visible_scan_letters(&self, now: Instant) -> usize {
        match (self.session.phantom_result(), self.scan_started) {
            (Some(_), Some(started)) => {
                let elapsed = now.saturating_duration_since(started);
                let steps = elapsed.as_millis() / SCAN_STAGGER.as_millis();
                usize::try_from(steps)
                    .unwrap_or(usize::MAX)
                    .saturating_add(1)
                    .min(ALPHABET_SIZE)
            }
            (Some(_), None) => ALPHABET_SIZE,
            (None, _) => 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.reveal_clue(),
            KeyCode::Char('p') if ctrl => self.phantom_scan(),
            KeyCode::Char('t') if ctrl => self.toggle_mode(),
            KeyCode::Char('n') if ctrl => self.new_puzzle(),
            KeyCode::Tab => self.cycle_input_mode(),
            KeyCode::Up if self.input_mode == InputMode::Board => self.move_cursor(-1, 0),
            KeyCode::Down if self.input_mode == InputMode::Board => self.move_cursor(1, 0),
            KeyCode::Left if self.input_mode == InputMode::Board => self.move_cursor(0, -1),
            KeyCode::Right if self.input_mode == InputMode::Board => self.move_cursor(0, 1),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => match self.input_mode {
                InputMode::Board => self.submit_guess(),
                InputMode::Counter => self.count_letter(),
                InputMode::Scratch => self.check_scratch(),
            },
            KeyCode::Char(c) if !ctrl => self.push_input(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
