//! Path management for loon-budget
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `LOON_BUDGET_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/loon-budget` or `~/.config/loon-budget`
//! 3. Windows: `%APPDATA%\loon-budget`

use std::path::PathBuf;

use crate::error::BudgetError;

/// Manages all paths used by loon-budget
#[derive(Debug, Clone)]
pub struct LoonPaths {
    /// Base directory for all loon-budget data
    base_dir: PathBuf,
}

impl LoonPaths {
    /// Create a new LoonPaths instance
    ///
    /// Path resolution:
    /// 1. `LOON_BUDGET_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/loon-budget` or `~/.config/loon-budget`
    /// 3. Windows: `%APPDATA%\loon-budget`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = if let Ok(custom) = std::env::var("LOON_BUDGET_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LoonPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/loon-budget/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/loon-budget/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the persisted budget state slot
    pub fn state_file(&self) -> PathBuf {
        self.data_dir()
            .join(format!("{}.json", crate::storage::STATE_KEY))
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/loon-budget/)
    /// - Data directory (~/.config/loon-budget/data/)
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("loon-budget"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("loon-budget"))
}
