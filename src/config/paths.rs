//! Path resolution for tomata configuration and data files.
//!
//! All tomata data is stored in `~/.tomata/`:
//! - `config.yaml` - Main configuration file
//! - `tomata.db` - SQLite database for session history

use std::path::PathBuf;

use crate::error::TomataError;

/// Paths to tomata configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tomata/`
    pub root: PathBuf,
    /// Config file: `~/.tomata/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.tomata/tomata.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TomataError> {
        let home = std::env::var("HOME")
            .map_err(|_| TomataError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".tomata")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("tomata.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TomataError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TomataError::Config(format!("Failed to create directory {:?}: {}", self.root, e))
            })?;
        }

        Ok(())
    }
}
