//! # quantity-quiz
//!
//! A terminal quiz where every question asks to classify two physical
//! quantities independently, e.g. how the mass and the speed of a body change.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quantity_quiz::{Config, Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let config = Config::new("/quiz/", "static");
//!
//!     // Load questions from a JSON file
//!     let quiz = Quiz::from_json("questions.json", config)?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod assets;
mod config;
mod data;
pub mod logging;
mod models;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEvent};
use log::info;
use thiserror::Error;

pub use app::App;
pub use config::{Config, DEFAULT_BASE_PATH};
pub use data::{LoadError, load_questions_from_json, parse_questions, validate_questions};
pub use models::{Answer, AnswerOption, AppState, Column, OptionId, Question};
pub use ui::{ImageState, QuestionView};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz. The questions must pass the same checks as a loaded bank.
    pub fn new(questions: Vec<Question>, config: Config) -> Result<Self, QuizError> {
        validate_questions(&questions, "question list")?;
        Ok(Self {
            app: App::with_questions(questions, config),
        })
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quantity_quiz::{Config, Quiz};
    ///
    /// let quiz = Quiz::from_json("questions.json", Config::default()).expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, config: Config) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Self::new(questions, config)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        info!(
            "[Setup] Starting quiz with {} questions, base path {:?}",
            self.app.total_questions(),
            self.app.config().base_path
        );
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_input(app, key.code) {
                    break;
                }
            }
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Summary => handle_summary_input(app, key),
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.state == AppState::Quiz {
        app.handle_question_mouse(mouse);
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('n') | KeyCode::PageDown => {
            app.next_question();
            false
        }
        KeyCode::Char('p') | KeyCode::PageUp => {
            app.previous_question();
            false
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.finish();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        key => {
            app.handle_question_key(key);
            false
        }
    }
}

fn handle_summary_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_summary_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_summary_up();
            false
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            app.review();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
