use std::fmt;
use std::path::{Path, PathBuf};

use super::{append_line, read_lines};
use crate::entities::Machine;
use crate::error::AppError;
use crate::utils::capitalize;

/// One line of `registered_machines.txt`:
/// `<Category>, <Material>, <Color>, $<price>`
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    pub category: String,
    pub material: String,
    pub color: String,
    pub price: f64,
}

impl RegistryEntry {
    /// Summary of a sold machine, priced with its installed videogames.
    pub fn from_machine(machine: &Machine) -> Self {
        Self {
            category: capitalize(machine.category().as_str()),
            material: capitalize(machine.material().as_str()),
            color: capitalize(machine.color()),
            price: machine.total_price(),
        }
    }

    /// Parse a registry line. Lines that do not have exactly four fields or
    /// a numeric price yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.trim().split(", ").collect();
        let [category, material, color, price] = parts.as_slice() else {
            return None;
        };
        let price = price.trim_start_matches('$').replace(',', "").parse().ok()?;
        Some(Self {
            category: (*category).to_string(),
            material: (*material).to_string(),
            color: (*color).to_string(),
            price,
        })
    }
}

impl fmt::Display for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, ${:.2}",
            self.category, self.material, self.color, self.price
        )
    }
}

/// Search criteria for registered machines. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryFilter {
    pub price_range: Option<(f64, f64)>,
    pub material: Option<String>,
}

impl RegistryFilter {
    /// Parse a `min,max` price range.
    ///
    /// # Errors
    ///
    /// Returns a message when the input is not two comma separated numbers.
    pub fn parse_price_range(input: &str) -> Result<(f64, f64), String> {
        let (min, max) = input
            .split_once(',')
            .ok_or_else(|| "Price range must look like min,max".to_string())?;
        let min: f64 = min
            .trim()
            .parse()
            .map_err(|_| format!("Invalid minimum price: {}", min.trim()))?;
        let max: f64 = max
            .trim()
            .parse()
            .map_err(|_| format!("Invalid maximum price: {}", max.trim()))?;
        Ok((min, max))
    }

    pub fn matches(&self, entry: &RegistryEntry) -> bool {
        let in_range = self
            .price_range
            .is_none_or(|(min, max)| (min..=max).contains(&entry.price));
        let same_material = self
            .material
            .as_deref()
            .is_none_or(|m| normalize(m) == normalize(&entry.material));
        in_range && same_material
    }
}

fn normalize(material: &str) -> String {
    material.trim().to_lowercase().replace(' ', "_")
}

/// `registered_machines.txt`: one summary line per machine sold in the store.
#[derive(Debug, Clone)]
pub struct MachineRegistry {
    path: PathBuf,
}

impl MachineRegistry {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `entry`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Record` if the file cannot be written.
    pub fn register(&self, entry: &RegistryEntry) -> Result<(), AppError> {
        append_line(&self.path, &entry.to_string())?;
        tracing::info!(
            category = %entry.category,
            material = %entry.material,
            price = entry.price,
            "Machine registered"
        );
        Ok(())
    }

    /// Parsed entries, or `None` if no machine was registered yet. Malformed
    /// lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Record` if the file exists but cannot be read.
    pub fn entries(&self) -> Result<Option<Vec<RegistryEntry>>, AppError> {
        let Some(lines) = read_lines(&self.path)? else {
            return Ok(None);
        };
        let entries = lines
            .iter()
            .filter_map(|line| {
                let entry = RegistryEntry::parse(line);
                if entry.is_none() && !line.trim().is_empty() {
                    tracing::warn!(line = %line, "Skipping malformed registry line");
                }
                entry
            })
            .collect();
        Ok(Some(entries))
    }

    /// Entries matching `filter`, or `None` if no machine was registered yet.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Record` if the file exists but cannot be read.
    pub fn search(&self, filter: &RegistryFilter) -> Result<Option<Vec<RegistryEntry>>, AppError> {
        Ok(self
            .entries()?
            .map(|entries| entries.into_iter().filter(|e| filter.matches(e)).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MachineFactory, PredefinedMachines};

    fn entry(material: &str, price: f64) -> RegistryEntry {
        RegistryEntry {
            category: "Dance".to_string(),
            material: material.to_string(),
            color: "Red".to_string(),
            price,
        }
    }

    #[test]
    fn test_from_machine() -> anyhow::Result<()> {
        let machine = PredefinedMachines.create_machine("races", "dark blue", "carbon_fiber")?;
        let entry = RegistryEntry::from_machine(&machine);
        assert_eq!(entry.to_string(), "Races, Carbon_fiber, Dark blue, $3600.00");
        Ok(())
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            RegistryEntry::parse("Dance, Wood, Red, $3300.00"),
            Some(entry("Wood", 3300.0))
        );
        assert_eq!(RegistryEntry::parse("Dance, Wood, $3300.00"), None);
        assert_eq!(RegistryEntry::parse("Dance, Wood, Red, $lots"), None);
    }

    #[test]
    fn test_parse_price_range() {
        assert_eq!(
            RegistryFilter::parse_price_range("100, 500"),
            Ok((100.0, 500.0))
        );
        assert!(RegistryFilter::parse_price_range("100").is_err());
        assert!(RegistryFilter::parse_price_range("a,5").is_err());
    }

    #[test]
    fn test_filter_matches() {
        let filter = RegistryFilter {
            price_range: Some((1000.0, 4000.0)),
            material: Some("wood".to_string()),
        };
        assert!(filter.matches(&entry("Wood", 3300.0)));
        assert!(!filter.matches(&entry("Wood", 9000.0)));
        assert!(!filter.matches(&entry("Aluminum", 3300.0)));
        assert!(RegistryFilter::default().matches(&entry("Aluminum", 1.0)));
    }

    #[test]
    fn test_filter_material_ignores_spacing() {
        let filter = RegistryFilter {
            price_range: None,
            material: Some("Carbon fiber".to_string()),
        };
        assert!(filter.matches(&entry("Carbon_fiber", 10.0)));
    }

    #[test]
    fn test_register_and_search() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let registry = MachineRegistry::new(dir.path().join("registered_machines.txt"));
        assert!(registry.entries()?.is_none());

        registry.register(&entry("Wood", 3300.0))?;
        registry.register(&entry("Aluminum", 550.0))?;
        append_line(registry.path(), "garbage")?;

        assert_eq!(registry.entries()?.map(|e| e.len()), Some(2));
        let found = registry
            .search(&RegistryFilter {
                price_range: None,
                material: Some("aluminum".to_string()),
            })?
            .unwrap_or_default();
        assert_eq!(found, vec![entry("Aluminum", 550.0)]);
        Ok(())
    }
}
