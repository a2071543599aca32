//! Flat-file records kept in the data directory.
//!
//! Every text record is append-only and newline delimited. Nothing here is
//! versioned or locked; a single session writes at a time.

pub mod delivery_store;
pub mod error_log;
pub mod machine_registry;
pub mod purchase_history;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::error::AppError;

pub use delivery_store::DeliveryStore;
pub use error_log::ErrorLog;
pub use machine_registry::{MachineRegistry, RegistryEntry, RegistryFilter};
pub use purchase_history::PurchaseHistory;

pub const PURCHASE_HISTORY_FILE: &str = "purchase_history.txt";
pub const MACHINE_REGISTRY_FILE: &str = "registered_machines.txt";
pub const ERROR_LOG_FILE: &str = "log.txt";

/// Handles to every record file under one data directory.
#[derive(Debug, Clone)]
pub struct Records {
    pub purchases: PurchaseHistory,
    pub machines: MachineRegistry,
    pub deliveries: DeliveryStore,
    pub errors: ErrorLog,
}

impl Records {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            purchases: PurchaseHistory::new(data_dir.join(PURCHASE_HISTORY_FILE)),
            machines: MachineRegistry::new(data_dir.join(MACHINE_REGISTRY_FILE)),
            deliveries: DeliveryStore::new(data_dir),
            errors: ErrorLog::new(data_dir.join(ERROR_LOG_FILE)),
        }
    }
}

/// Append one line to `path`, creating the file on first use.
pub(crate) fn append_line(path: &Path, line: &str) -> Result<(), AppError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(AppError::Record)?;
    writeln!(file, "{line}").map_err(AppError::Record)
}

/// Read every line of `path`, or `None` if the file does not exist yet.
pub(crate) fn read_lines(path: &Path) -> Result<Option<Vec<String>>, AppError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content.lines().map(str::to_string).collect())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::Record(e)),
    }
}

/// Local timestamp used as the prefix of history and log lines.
pub(crate) fn timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S%.6f")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines_missing_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        assert!(read_lines(&dir.path().join("nope.txt"))?.is_none());
        Ok(())
    }

    #[test]
    fn test_append_then_read() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("lines.txt");
        append_line(&path, "first")?;
        append_line(&path, "second")?;
        assert_eq!(
            read_lines(&path)?,
            Some(vec!["first".to_string(), "second".to_string()])
        );
        Ok(())
    }

    #[test]
    fn test_unreadable_file_is_record_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("folder.txt");
        std::fs::create_dir(&path)?;
        assert!(matches!(read_lines(&path), Err(AppError::Record(_))));
        assert!(matches!(append_line(&path, "x"), Err(AppError::Record(_))));
        Ok(())
    }

    #[test]
    fn test_records_paths() {
        let records = Records::new(Path::new("/data"));
        assert_eq!(
            records.purchases.path(),
            Path::new("/data/purchase_history.txt")
        );
        assert_eq!(
            records.machines.path(),
            Path::new("/data/registered_machines.txt")
        );
        assert_eq!(records.errors.path(), Path::new("/data/log.txt"));
    }
}
