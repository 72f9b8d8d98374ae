mod loader;

pub use loader::{LoadError, load_questions_from_json, parse_questions, validate_questions};
