//! Display formatting for terminal output

pub mod budget;
pub mod records;

pub use budget::{format_budget_overview, format_category_table};
pub use records::{format_expense_list, format_goal_list};
