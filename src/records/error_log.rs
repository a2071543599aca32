use std::path::{Path, PathBuf};

use super::{append_line, timestamp};
use crate::error::AppError;

/// `log.txt`: failed videogame additions, one `<timestamp> --- ERROR. <message>.`
/// line each.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `error`. A failure to write the log is itself only traced.
    pub fn append(&self, error: &AppError) {
        let line = format!("{} --- ERROR. {error}.", timestamp());
        if let Err(e) = append_line(&self.path, &line) {
            tracing::error!(path = %self.path.display(), "Failed to write error log: {e}");
        }
    }
}
