//! budgetcalc - personal budgeting calculator
//!
//! Income is split across three fixed categories (Food, Rent, Travel) and any
//! number of custom ones. Expenses are logged against categories and savings
//! goals reserve part of the budget. The [`models::Budget`] model keeps these
//! consistent: the fixed allocations are scaled down whenever they would add
//! up to more than income.
//!
//! # Architecture
//!
//! - `config`: Settings and their file location
//! - `error`: Custom error types
//! - `models`: Money, categories, expenses, goals and the budget model
//! - `services`: Input validation and logging on top of the model
//! - `display`: Terminal formatting
//! - `cli`: The interactive session
//!
//! # Example
//!
//! ```rust
//! use budgetcalc::models::{Budget, FixedCategory, Money};
//!
//! let mut budget = Budget::new();
//! budget.set_income(Money::from_units(1000));
//! budget.set_fixed_allocation(FixedCategory::Food, Money::from_units(800));
//! budget.set_fixed_allocation(FixedCategory::Rent, Money::from_units(400));
//! assert!(budget.fixed_total() <= budget.income());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{BudgetError, BudgetResult, ValidationError};
