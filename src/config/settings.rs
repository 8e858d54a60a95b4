//! User settings for budgetcalc
//!
//! Settings are read once at startup from a JSON file. They are never
//! written back; budget state itself is not persisted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BudgetError;

/// What to do with a negative income or allocation typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NegativeInputPolicy {
    /// Treat the amount as zero (default)
    #[default]
    Clamp,
    /// Reject the mutation with a validation error
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    #[serde(default)]
    pub negative_input: NegativeInputPolicy,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            negative_input: NegativeInputPolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if it doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self, BudgetError> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.negative_input, NegativeInputPolicy::Clamp);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_or_default(&temp_dir.path().join("nope.json")).unwrap();
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"negative_input": "reject", "currency_symbol": "€"}"#).unwrap();

        let settings = Settings::load_or_default(&path).unwrap();
        assert_eq!(settings.negative_input, NegativeInputPolicy::Reject);
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Settings::load_or_default(&path).unwrap_err();
        assert!(matches!(err, BudgetError::Config(_)));
    }
}
