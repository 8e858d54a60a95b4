//! Expense records

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ids::ExpenseId;
use super::money::Money;

/// A single logged expense
///
/// Expenses are immutable once recorded. `category` should name an existing
/// fixed or custom category, but the budget model does not check this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub title: String,
    pub amount: Money,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(title: impl Into<String>, amount: Money, category: impl Into<String>) -> Self {
        Self {
            id: ExpenseId::new(),
            title: title.into(),
            amount,
            category: category.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_in(&self, category: &str) -> bool {
        self.category == category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new("Groceries", Money::from_units(40), "Food");
        assert_eq!(expense.title, "Groceries");
        assert_eq!(expense.amount.cents(), 4000);
        assert!(expense.is_in("Food"));
        assert!(!expense.is_in("food"));
    }

    #[test]
    fn test_ids_are_generated() {
        let a = Expense::new("a", Money::from_units(1), "Food");
        let b = Expense::new("a", Money::from_units(1), "Food");
        assert_ne!(a.id, b.id);
    }
}
