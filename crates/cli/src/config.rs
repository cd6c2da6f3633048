use notes_core::application::TOP_AUTHOR_LIMIT;
use std::env;
use std::path::{Path, PathBuf};

/// Settings for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory holding `data.json`; the markdown file is written here too
    pub base_dir: PathBuf,
    /// Number of authors offered in the menu
    pub top_limit: usize,
}

impl RunConfig {
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            top_limit: TOP_AUTHOR_LIMIT,
        }
    }

    /// Uses the directory of the running executable, or the working directory
    /// when that cannot be determined.
    pub fn from_environment() -> Self {
        let base_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.canonicalize().ok().or(Some(exe)))
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        Self::new(base_dir)
    }
}
