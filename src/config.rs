use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: String,
    pub default_country: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            log_level: "warn".to_string(),
            default_country: "Colombia".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional with defaults: `ARCADE_DATA_DIR`, `LOG_LEVEL`, `DEFAULT_COUNTRY`
    ///
    /// # Errors
    ///
    /// Returns an error if `ARCADE_DATA_DIR` points at something that is not a
    /// directory, or if the directory cannot be created.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let data_dir = std::env::var("ARCADE_DATA_DIR")
            .map_or(defaults.data_dir, PathBuf::from);

        if data_dir.exists() && !data_dir.is_dir() {
            anyhow::bail!(
                "ARCADE_DATA_DIR must be a directory: {}",
                data_dir.display()
            );
        }
        std::fs::create_dir_all(&data_dir).map_err(|e| {
            anyhow::anyhow!("Failed to create data directory {}: {e}", data_dir.display())
        })?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        let default_country = std::env::var("DEFAULT_COUNTRY")
            .ok()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or(defaults.default_country);

        Ok(Self {
            data_dir,
            log_level,
            default_country,
        })
    }

    /// Configuration rooted at `data_dir`, everything else default.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }
}
