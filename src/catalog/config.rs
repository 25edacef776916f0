use crate::error::{CatalogError, Result, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "products.json";

/// Configuration for the catalog, stored in `<home>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Data file holding the product array. Relative paths resolve against the home.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Pretty-print the data file
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            pretty: default_pretty(),
        }
    }
}

impl CatalogConfig {
    pub const KEYS: [&'static str; 2] = ["data-file", "pretty"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(home: P) -> Result<Self> {
        let config_path = home.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::Io {
            path: config_path.clone(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| {
            StorageError::Serialization {
                path: config_path.clone(),
                source,
            }
        })?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, home: P) -> Result<()> {
        let home = home.as_ref();
        let config_path = home.join(CONFIG_FILENAME);
        let io_err = |source| StorageError::Io {
            path: config_path.clone(),
            source,
        };

        if !home.exists() {
            fs::create_dir_all(home).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| {
            StorageError::Serialization {
                path: config_path.clone(),
                source,
            }
        })?;
        fs::write(&config_path, content).map_err(io_err)?;
        Ok(())
    }

    /// Absolute location of the data file for this home.
    pub fn data_path(&self, home: &Path) -> PathBuf {
        let data_file = Path::new(&self.data_file);
        if data_file.is_absolute() {
            data_file.to_path_buf()
        } else {
            home.join(data_file)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "pretty" => Some(self.pretty.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err(CatalogError::Config("data-file cannot be empty".into()));
                }
                self.data_file = value.to_string();
            }
            "pretty" => {
                self.pretty = value.parse().map_err(|_| {
                    CatalogError::Config(format!("pretty expects true or false, got {}", value))
                })?;
            }
            other => {
                return Err(CatalogError::Config(format!(
                    "Unknown config key: {} (expected one of {})",
                    other,
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
