//! TUI application state and logic

use crate::oracle::SpellOracle;
use crate::output::formatters::outcome_summary;
use crate::session::{Session, SubmissionOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input the text field accepts
const MAX_INPUT_LEN: usize = 32;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<O> {
    pub session: Session<O>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

impl<O: SpellOracle> App<O> {
    #[must_use]
    pub fn new(session: Session<O>) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Spell new words using only the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Start the first round if none is running
    ///
    /// # Errors
    ///
    /// Returns an error if the word pool is empty and no fallback is set.
    pub fn ensure_round(&mut self) -> Result<()> {
        if !self.session.is_in_round() {
            self.session.start_round()?;
        }
        Ok(())
    }

    /// Submit the text field's contents
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        let outcome = match self.session.submit(&input) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.input_buffer = input;
                return;
            }
        };

        // Blank input gets no feedback
        let Some(summary) = outcome_summary(&outcome) else {
            return;
        };

        if let SubmissionOutcome::Accepted(_) = outcome {
            let total = self.session.snapshot().map_or(0, |s| s.used_words.len());
            self.add_message(&format!("{summary} ({total} words)"), MessageStyle::Success);
        } else {
            self.add_message(&summary, MessageStyle::Error);
            // Keep the rejected word so the player can fix it
            self.input_buffer = input;
        }
    }

    pub fn new_round(&mut self) {
        match self.session.restart() {
            Ok(root_word) => {
                let text = format!("New word: {}", root_word.as_str().to_uppercase());
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message(&text, MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_round();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                    // Lowercase as typed, like a field with autocapitalization off
                    self.input_buffer.extend(c.to_lowercase());
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if the first round cannot start, if terminal setup or
/// cleanup fails, or if there's an I/O error during rendering or event
/// handling.
pub fn run_tui<O: SpellOracle>(mut app: App<O>) -> Result<()> {
    // Fail before touching the terminal
    app.ensure_round()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, O: SpellOracle>(
    terminal: &mut Terminal<B>,
    mut app: App<O>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
