use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::models::Question;

/// Errors raised while loading a question bank.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{origin} must contain at least one question")]
    Empty { origin: String },
    #[error("question {number} has no options")]
    NoOptions { number: u32 },
    #[error("question {number} repeats option value {value}")]
    DuplicateOption { number: u32, value: i32 },
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    info!("[Setup] Loading questions from {}", path.display());

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_questions(&json_content, &path.display().to_string())
}

/// Parses and validates a question bank. `origin` names the source in errors.
pub fn parse_questions(json: &str, origin: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> =
        serde_json::from_str(json).map_err(|source| LoadError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    validate_questions(&questions, origin)?;

    debug!("[Setup] Loaded {} questions from {}", questions.len(), origin);
    Ok(questions)
}

/// Checks the bank invariants: at least one question, every question with
/// options, and option values unique within a question.
pub fn validate_questions(questions: &[Question], origin: &str) -> Result<(), LoadError> {
    if questions.is_empty() {
        return Err(LoadError::Empty {
            origin: origin.to_string(),
        });
    }

    questions.iter().try_for_each(validate)
}

fn validate(question: &Question) -> Result<(), LoadError> {
    if question.options.is_empty() {
        return Err(LoadError::NoOptions {
            number: question.number,
        });
    }

    let mut seen = HashSet::with_capacity(question.options.len());
    for option in &question.options {
        if !seen.insert(option.value) {
            return Err(LoadError::DuplicateOption {
                number: question.number,
                value: option.value,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK: &str = r#"[
        {
            "number": 1,
            "text": "A ball is thrown upwards. How do its mass and speed change?",
            "imageUrl": "img/1.png",
            "options": [
                {"label": "Increases", "value": 1},
                {"label": "Decreases", "value": 2},
                {"label": "Does not change", "value": 3}
            ],
            "physicalQuantities": ["Mass", "Speed"]
        },
        {
            "number": 2,
            "text": "Gas is heated at constant volume.",
            "options": [{"label": "Low", "value": 1}, {"label": "High", "value": 2}],
            "physicalQuantities": ["Pressure", "Density"]
        }
    ]"#;

    #[test]
    fn parses_a_valid_bank() {
        let questions = parse_questions(BANK, "bank").unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].image_url.as_deref(), Some("img/1.png"));
        assert_eq!(questions[0].options.len(), 3);
        assert_eq!(questions[1].physical_quantities[1], "Density");
        assert!(questions[1].image_url.is_none());
    }

    #[test]
    fn rejects_empty_bank() {
        let err = parse_questions("[]", "bank").unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn rejects_question_without_options() {
        let json = r#"[{"number": 4, "text": "t", "options": [],
                        "physicalQuantities": ["Mass", "Speed"]}]"#;

        let err = parse_questions(json, "bank").unwrap_err();
        assert!(matches!(err, LoadError::NoOptions { number: 4 }));
    }

    #[test]
    fn rejects_duplicate_option_values() {
        let json = r#"[{"number": 2, "text": "t",
                        "options": [{"label": "a", "value": 1}, {"label": "b", "value": 1}],
                        "physicalQuantities": ["Mass", "Speed"]}]"#;

        let err = parse_questions(json, "bank").unwrap_err();
        assert!(matches!(err, LoadError::DuplicateOption { number: 2, value: 1 }));
    }

    #[test]
    fn rejects_wrong_number_of_quantities() {
        let json = r#"[{"number": 1, "text": "t",
                        "options": [{"label": "a", "value": 1}],
                        "physicalQuantities": ["Mass", "Speed", "Energy"]}]"#;

        let err = parse_questions(json, "bank").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_questions_from_json("does/not/exist.json").unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
