//! Settings file location
//!
//! ## Resolution Order
//!
//! 1. `BUDGETCALC_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budgetcalc` or `~/.config/budgetcalc`
//! 3. Windows: `%APPDATA%\budgetcalc`

use std::path::{Path, PathBuf};

use crate::error::BudgetError;

#[derive(Debug, Clone)]
pub struct BudgetPaths {
    config_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve the platform config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home or app-data directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        Self::from_override(std::env::var_os("BUDGETCALC_CONFIG_DIR").map(PathBuf::from))
    }

    /// Use `config_dir` if given, otherwise the platform default
    pub fn from_override(config_dir: Option<PathBuf>) -> Result<Self, BudgetError> {
        let config_dir = match config_dir {
            Some(custom) => custom,
            None => resolve_default_path()?,
        };
        Ok(Self { config_dir })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| BudgetError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("budgetcalc"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budgetcalc"))
}
