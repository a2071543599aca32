use std::path::{Path, PathBuf};

use super::{append_line, read_lines, timestamp};
use crate::error::AppError;

/// `purchase_history.txt`: one line per confirmed quick purchase.
///
/// Line format: `<timestamp> --- Client: <name>, Total Price: $<amount>`
#[derive(Debug, Clone)]
pub struct PurchaseHistory {
    path: PathBuf,
}

impl PurchaseHistory {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format a history line for `client_name` paying `price`.
    pub fn format_line(timestamp: &str, client_name: &str, price: f64) -> String {
        format!("{timestamp} --- Client: {client_name}, Total Price: ${price:.2}")
    }

    /// Append a purchase and return the written line.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Record` if the file cannot be written.
    pub fn record(&self, client_name: &str, price: f64) -> Result<String, AppError> {
        let line = Self::format_line(&timestamp(), client_name, price);
        append_line(&self.path, &line)?;
        tracing::info!(client = client_name, price, "Purchase recorded");
        Ok(line)
    }

    /// Every recorded line, or `None` when nothing was ever bought.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Record` if the file exists but cannot be read.
    pub fn entries(&self) -> Result<Option<Vec<String>>, AppError> {
        read_lines(&self.path)
    }
}
