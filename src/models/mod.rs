//! Core data models for budgetcalc
//!
//! This module contains the budgeting domain: money, categories, expenses,
//! savings goals and the budget model that ties them together.

pub mod budget;
pub mod category;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod money;

pub use budget::{Budget, BudgetOverview};
pub use category::{CategorySummary, CustomCategory, FixedCategory};
pub use expense::Expense;
pub use goal::Goal;
pub use ids::{ExpenseId, GoalId};
pub use money::{Money, MoneyParseError};
