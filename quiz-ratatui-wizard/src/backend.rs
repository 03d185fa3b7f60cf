//! The terminal wizard and its event loop.
//!
//! Keys map onto session actions: Enter moves forward, PgUp / Shift+Tab
//! (or Backspace on an empty field) moves back, Esc quits. Status screens
//! are drawn before the blocking load and submit calls.

use std::io::{self, Stdout};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use quiz_flow::{NextOutcome, Phase, QuestionSource, Session, SubmitSink};
use ratatui::{Terminal, prelude::CrosstermBackend, style::Color};
use thiserror::Error;

use crate::input::InputState;
use crate::ui;

/// Error type for the terminal wizard.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User quit while answering (Esc or Ctrl+C).
    #[error("Quiz cancelled by user")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup/restore error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// How a wizard run ended, when the user did not cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The answers were delivered.
    Submitted,
    /// The user left after the catalog failed to load.
    LoadFailed(String),
    /// The user left after the sink rejected the answers.
    SubmitFailed(String),
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Full-screen questionnaire wizard.
///
/// Presents one question per screen with a progress gauge, inline
/// validation messages and a help bar naming the forward action.
#[derive(Debug, Clone)]
pub struct RatatuiWizard {
    /// Title shown at the top of every question.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiWizard {
    pub fn new() -> Self {
        Self {
            title: "Assessment".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the wizard.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Run a full session: load from `source`, ask, and submit to `sink`.
    ///
    /// The terminal is restored before returning, also on error.
    pub fn run<S, K>(&self, source: &S, sink: &K) -> Result<Outcome, RatatuiError>
    where
        S: QuestionSource,
        K: SubmitSink,
    {
        let mut terminal = self.setup_terminal()?;
        let result = self.event_loop(&mut terminal, source, sink);
        self.restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop<S, K>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        source: &S,
        sink: &K,
    ) -> Result<Outcome, RatatuiError>
    where
        S: QuestionSource,
        K: SubmitSink,
    {
        let mut session = Session::new();
        let mut input = InputState::default();

        loop {
            terminal.draw(|frame| ui::draw(frame, &self.title, &self.theme, &session, &input))?;

            // Blocking collaborator calls happen right after their status screen is up.
            match session.phase() {
                Phase::Loading => {
                    session.load(source);
                    input = InputState::from_display(session.display_state().as_ref());
                    continue;
                }
                Phase::Submitting(_) => {
                    session.submit(sink);
                    continue;
                }
                _ => {}
            }

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(result) = handle_key(&mut session, &mut input, key) {
                return result;
            }
        }
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(|err| RatatuiError::Terminal(err.to_string()))
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Apply one key press. Returns `Some` when the run is over.
fn handle_key(
    session: &mut Session,
    input: &mut InputState,
    key: KeyEvent,
) -> Option<Result<Outcome, RatatuiError>> {
    let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');

    match session.phase() {
        Phase::Active(_) => {
            if ctrl_c || key.code == KeyCode::Esc {
                tracing::info!("quiz cancelled");
                return Some(Err(RatatuiError::Cancelled));
            }
            handle_question_key(session, input, key.code);
            None
        }
        Phase::Done => match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Ok(Outcome::Submitted)),
            _ if ctrl_c => Some(Ok(Outcome::Submitted)),
            _ => None,
        },
        Phase::LoadFailed(err) => {
            let message = err.to_string();
            failure_key(session, key.code, ctrl_c, || Outcome::LoadFailed(message))
        }
        Phase::SubmitFailed(err) => {
            let message = err.to_string();
            failure_key(session, key.code, ctrl_c, || Outcome::SubmitFailed(message))
        }
        Phase::Loading | Phase::Submitting(_) => None,
    }
}

fn failure_key(
    session: &mut Session,
    code: KeyCode,
    ctrl_c: bool,
    outcome: impl FnOnce() -> Outcome,
) -> Option<Result<Outcome, RatatuiError>> {
    match code {
        KeyCode::Char('r') if !ctrl_c => {
            session.restart();
            None
        }
        KeyCode::Enter | KeyCode::Esc => Some(Ok(outcome())),
        _ if ctrl_c => Some(Ok(outcome())),
        _ => None,
    }
}

fn handle_question_key(session: &mut Session, input: &mut InputState, code: KeyCode) {
    let Some(question) = session.display_state().map(|view| view.question.clone()) else {
        return;
    };
    let kind = question.kind();

    match code {
        KeyCode::Enter => match session.go_next(&input.raw_input(&question)) {
            Ok(NextOutcome::Moved { .. } | NextOutcome::Expanded { .. }) => {
                *input = InputState::from_display(session.display_state().as_ref());
            }
            Ok(NextOutcome::ReadyToSubmit | NextOutcome::Ignored) => {}
            Err(err) => input.error = Some(err.to_string()),
        },
        KeyCode::PageUp | KeyCode::BackTab => go_back(session, input, &question),
        KeyCode::Backspace if !kind.is_text() || input.text.is_empty() => {
            go_back(session, input, &question);
        }
        KeyCode::Up if kind.is_choice() => input.up(),
        KeyCode::Down if kind.is_choice() => input.down(),
        KeyCode::Char(' ') if kind.is_choice() => input.toggle(kind),
        _ if kind.is_text() => match code {
            KeyCode::Char(c) => input.insert(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.left(),
            KeyCode::Right => input.right(),
            KeyCode::Home => input.home(),
            KeyCode::End => input.end(),
            _ => {}
        },
        _ => {}
    }
}

fn go_back(session: &mut Session, input: &mut InputState, question: &quiz_flow::Question) {
    session.go_back(&input.raw_input(question));
    *input = InputState::from_display(session.display_state().as_ref());
}
