mod answer;
mod question;

pub use answer::{Answer, Column, OptionId};
pub use question::{AnswerOption, Question};

/// Screen currently shown by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Summary,
}
