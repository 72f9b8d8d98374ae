use std::fs::File;
use std::path::Path;

use env_logger::{Env, Target};
use log::info;

use crate::QuizError;

/// Sends log records to `path`. The terminal itself is owned by the UI, so
/// without a log file no logger is installed.
pub fn init(level: &str, path: Option<&Path>) -> Result<(), QuizError> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    info!("[Setup] Logging to {}", path.display());
    Ok(())
}
