use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::entities::Delivery;
use crate::error::AppError;

/// Writes one JSON document per delivery. Records are never read back by
/// the application; they are an audit trail.
#[derive(Debug, Clone)]
pub struct DeliveryStore {
    dir: PathBuf,
}

impl DeliveryStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist `delivery` and return the path of the written file. An
    /// existing record is never overwritten; a numbered name is used instead.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Record` if the file cannot be created or written,
    /// or `AppError::Serialization` if encoding fails.
    pub fn save(&self, delivery: &Delivery) -> Result<PathBuf, AppError> {
        let (path, file) = self.create_unique(delivery)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, delivery)?;
        writer.flush().map_err(AppError::Record)?;
        tracing::info!(
            client_id = delivery.client.profile.id,
            path = %path.display(),
            "Delivery record written"
        );
        Ok(path)
    }

    fn create_unique(&self, delivery: &Delivery) -> Result<(PathBuf, File), AppError> {
        let mut path = self.dir.join(delivery.file_name());
        let mut attempt = 1;
        loop {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    attempt += 1;
                    tracing::debug!(path = %path.display(), "Delivery record exists, renaming");
                    path = self.dir.join(delivery.numbered_file_name(attempt));
                }
                Err(e) => return Err(AppError::Record(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Address, Client};
    use crate::services::{MachineFactory, PredefinedMachines};

    #[test]
    fn test_save_writes_json() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = DeliveryStore::new(dir.path());
        let address = Address::new("Cra 7", 110_111, "Bogota", "Colombia");
        let client = Client::new(42, "Ana", "ana@example.com", "3001234567", address.clone());
        let machine = PredefinedMachines.create_machine("classical", "red", "wood")?;
        let delivery = Delivery::new(client, address, machine);

        let path = store.save(&delivery)?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        assert!(name.starts_with("delivery_"));
        assert!(name.ends_with("_42.json"));

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(json["client"]["profile"]["id"], 42);
        assert_eq!(json["address"]["city"], "Bogota");
        assert_eq!(json["machine"]["kind"]["category"], "classical");
        assert_eq!(json["machine"]["material"], "wood");
        Ok(())
    }

    #[test]
    fn test_same_instant_deliveries_are_kept_apart() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = DeliveryStore::new(dir.path());
        let address = Address::new("Cra 7", 110_111, "Bogota", "Colombia");
        let client = Client::new(5, "Ana", "ana@example.com", "3001234567", address.clone());
        let machine = PredefinedMachines.create_machine("dance", "red", "wood")?;
        let delivery = Delivery::new(client, address, machine);

        let first = store.save(&delivery)?;
        let second = store.save(&delivery)?;

        assert_ne!(first, second);
        assert!(second.to_string_lossy().ends_with("_5_2.json"));
        assert_eq!(std::fs::read_dir(store.dir())?.count(), 2);
        Ok(())
    }
}
