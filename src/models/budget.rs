//! The budget model
//!
//! Owns income, the fixed and custom allocations, expenses and goals, and
//! keeps them consistent. Every write to income or a fixed allocation ends
//! with [`Budget::rebalance`], which scales the fixed allocations down
//! proportionally whenever they add up to more than income.
//!
//! Custom allocations are never rescaled. They are clamped against the
//! remaining income when assigned, so the combined total can still end up
//! above income (for example after income is lowered). That state is
//! reported through [`Budget::over_income_limit`] and left as is.

use serde::Serialize;
use tracing::debug;

use super::category::{CategorySummary, CustomCategory, FixedCategory};
use super::expense::Expense;
use super::goal::Goal;
use super::money::Money;
use crate::error::ValidationError;

#[derive(Debug, Clone, Default)]
pub struct Budget {
    income: Money,
    food: Money,
    rent: Money,
    travel: Money,
    customs: Vec<CustomCategory>,
    expenses: Vec<Expense>,
    goals: Vec<Goal>,
    over_income_limit: bool,
}

/// A point-in-time snapshot of every derived value
#[derive(Debug, Clone, Serialize)]
pub struct BudgetOverview {
    pub income: Money,
    pub total_budget: Money,
    pub total_expense: Money,
    pub goal_savings: Money,
    pub available_budget: Money,
    pub over_income_limit: bool,
    pub over_budget: bool,
    pub categories: Vec<CategorySummary>,
}

impl Budget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set income and rebalance
    ///
    /// Values are clamped into `0..=Money::MAX`.
    pub fn set_income(&mut self, value: Money) {
        self.income = value.bounded();
        self.rebalance();
    }

    /// Set a fixed allocation and rebalance
    ///
    /// The stored value may end up lower than `value` if the fixed total
    /// would otherwise exceed income. Values are clamped into `0..=Money::MAX`.
    pub fn set_fixed_allocation(&mut self, category: FixedCategory, value: Money) {
        *self.fixed_slot(category) = value.bounded();
        self.rebalance();
    }

    /// Restore the fixed-allocation invariant and refresh the over-income flag
    pub fn rebalance(&mut self) {
        let predefined_total = self.fixed_total();
        if predefined_total > self.income && predefined_total.is_positive() {
            let income = self.income;
            for category in FixedCategory::ALL {
                let slot = self.fixed_slot(category);
                *slot = slot.scaled(income, predefined_total);
            }
            debug!(
                from = predefined_total.cents(),
                to = self.fixed_total().cents(),
                income = income.cents(),
                "scaled fixed allocations down to income"
            );
        }
        self.refresh_over_income_limit();
    }

    /// Add a custom category with a zero allocation
    ///
    /// The name is trimmed before use. Empty names, existing custom names and
    /// the fixed category names are rejected without touching state.
    pub fn add_custom_category(&mut self, name: &str) -> Result<(), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::InvalidName);
        }
        if FixedCategory::from_name(name).is_some() || self.custom(name).is_some() {
            return Err(ValidationError::DuplicateCategory(name.to_string()));
        }
        self.customs.push(CustomCategory::new(name));
        Ok(())
    }

    /// Assign a custom allocation, clamped to what income has left over
    ///
    /// Returns the amount actually stored. This does not rescale fixed
    /// allocations and does not repair a total that is already over income.
    pub fn set_custom_allocation(
        &mut self,
        name: &str,
        requested: Money,
    ) -> Result<Money, ValidationError> {
        let current = self
            .custom(name)
            .map(|c| c.budgeted)
            .ok_or_else(|| ValidationError::UnknownCategory(name.to_string()))?;

        let remaining = self.income - (self.total_budget() - current);
        let stored = requested.min(remaining).non_negative();

        if let Some(custom) = self.customs.iter_mut().find(|c| c.name == name) {
            custom.budgeted = stored;
        }
        self.refresh_over_income_limit();
        Ok(stored)
    }

    /// Record an expense. The model does not validate it.
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Record a savings goal. The model does not validate it.
    pub fn add_goal(&mut self, goal: Goal) {
        self.goals.push(goal);
    }

    pub fn income(&self) -> Money {
        self.income
    }

    pub fn fixed_allocation(&self, category: FixedCategory) -> Money {
        match category {
            FixedCategory::Food => self.food,
            FixedCategory::Rent => self.rent,
            FixedCategory::Travel => self.travel,
        }
    }

    /// Sum of the three fixed allocations
    pub fn fixed_total(&self) -> Money {
        self.food + self.rent + self.travel
    }

    /// Largest value `category` can hold given the other two fixed allocations
    pub fn remaining_for_fixed(&self, category: FixedCategory) -> Money {
        let others: Money = category.others().map(|c| self.fixed_allocation(c)).sum();
        (self.income - others).non_negative()
    }

    pub fn custom_category_names(&self) -> impl Iterator<Item = &str> {
        self.customs.iter().map(|c| c.name.as_str())
    }

    /// Whether `name` is a fixed or custom category
    pub fn has_category(&self, name: &str) -> bool {
        FixedCategory::from_name(name).is_some() || self.custom(name).is_some()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Fixed plus custom allocations
    pub fn total_budget(&self) -> Money {
        self.fixed_total() + self.customs.iter().map(|c| c.budgeted).sum::<Money>()
    }

    pub fn total_expense(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Total saved across all goals
    pub fn goal_savings(&self) -> Money {
        self.goals.iter().map(|g| g.saved_amount).sum()
    }

    /// Total budget minus goal savings; may be negative
    pub fn available_budget(&self) -> Money {
        self.total_budget() - self.goal_savings()
    }

    /// Whether the combined allocations exceed income, as of the last write
    pub fn over_income_limit(&self) -> bool {
        self.over_income_limit
    }

    pub fn is_over_budget(&self) -> bool {
        self.total_expense() > self.available_budget()
    }

    /// Allocation for a fixed or custom category, zero if unknown
    pub fn category_budget(&self, name: &str) -> Money {
        match FixedCategory::from_name(name) {
            Some(fixed) => self.fixed_allocation(fixed),
            None => self.custom(name).map(|c| c.budgeted).unwrap_or_default(),
        }
    }

    pub fn total_spent(&self, name: &str) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.is_in(name))
            .map(|e| e.amount)
            .sum()
    }

    pub fn is_over_budget_for_category(&self, name: &str) -> bool {
        self.total_spent(name) > self.category_budget(name)
    }

    pub fn category_summary(&self, name: &str) -> CategorySummary {
        CategorySummary::new(
            name,
            FixedCategory::from_name(name).is_some(),
            self.category_budget(name),
            self.total_spent(name),
        )
    }

    /// Summaries for every category: fixed first, then custom in insertion order
    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        let fixed = FixedCategory::ALL
            .iter()
            .map(|c| self.category_summary(c.name()));
        let custom = self
            .custom_category_names()
            .map(|name| self.category_summary(name));
        fixed.chain(custom).collect()
    }

    pub fn overview(&self) -> BudgetOverview {
        BudgetOverview {
            income: self.income,
            total_budget: self.total_budget(),
            total_expense: self.total_expense(),
            goal_savings: self.goal_savings(),
            available_budget: self.available_budget(),
            over_income_limit: self.over_income_limit,
            over_budget: self.is_over_budget(),
            categories: self.category_summaries(),
        }
    }

    fn fixed_slot(&mut self, category: FixedCategory) -> &mut Money {
        match category {
            FixedCategory::Food => &mut self.food,
            FixedCategory::Rent => &mut self.rent,
            FixedCategory::Travel => &mut self.travel,
        }
    }

    fn custom(&self, name: &str) -> Option<&CustomCategory> {
        self.customs.iter().find(|c| c.name == name)
    }

    fn refresh_over_income_limit(&mut self) {
        self.over_income_limit = self.total_budget() > self.income;
    }
}
