use std::path::PathBuf;

pub const DEFAULT_BASE_PATH: &str = "/";

/// Settings passed into the quiz. Nothing in the library reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL prefix under which question images are served.
    pub base_path: String,
    /// Local directory holding the files served under `base_path`.
    pub assets_dir: PathBuf,
}

impl Config {
    pub fn new(base_path: impl Into<String>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            assets_dir: assets_dir.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH, ".")
    }
}
