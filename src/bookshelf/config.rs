use crate::error::{CatalogError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_NAME: &str = "library.txt";

/// Environment variable that relocates the data directory.
pub const HOME_ENV: &str = "BOOKSHELF_HOME";

/// Configuration for bookshelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Name of the catalog file inside the data directory
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        let exists = config_path
            .try_exists()
            .map_err(|e| config_err(&config_path, e))?;
        if !exists {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| config_err(&config_path, e))?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(|e| config_err(&config_path, e))?;
        if config.file_name.trim().is_empty() {
            return Err(config_err(&config_path, "file_name cannot be empty"));
        }
        Ok(config)
    }

    /// Path of the catalog file inside `data_dir`
    pub fn catalog_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.file_name)
    }
}

fn config_err(path: &Path, e: impl std::fmt::Display) -> CatalogError {
    CatalogError::Config(format!("{}: {}", path.display(), e))
}

/// Resolve the data directory: `BOOKSHELF_HOME` if set, else the platform data dir.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Config("Could not determine data directory".to_string()))
}
