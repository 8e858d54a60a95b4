//! Configuration module for budgetcalc
//!
//! - Settings file path resolution
//! - User settings (currency symbol, negative input policy, log level)

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::{NegativeInputPolicy, Settings};
