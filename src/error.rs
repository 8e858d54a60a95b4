//! Custom error types for budgetcalc
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Reasons a mutation of the budget was rejected
///
/// A rejected mutation never changes state, so callers that prefer the
/// silent behaviour can simply discard these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A title or name was empty after trimming
    #[error("name cannot be empty")]
    InvalidName,

    /// A category with this name already exists
    #[error("category already exists: {0}")]
    DuplicateCategory(String),

    /// An amount that must be strictly positive was zero or negative
    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    /// An amount that must be non-negative was negative
    #[error("amount cannot be negative")]
    NegativeAmount,

    /// No fixed or custom category has this name
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// The main error type for budgetcalc operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected budget mutations
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// User input that could not be parsed (amounts, commands)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl BudgetError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The validation kind, if this is a validation error
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(v) => Some(v),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budgetcalc operations
pub type BudgetResult<T> = Result<T, BudgetError>;
