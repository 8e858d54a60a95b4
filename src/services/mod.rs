//! Service layer for budgetcalc
//!
//! The service layer sits between user input and the budget model,
//! handling validation and logging.

pub mod budget;

pub use budget::BudgetService;
