//! Budget service
//!
//! Validates user input before it reaches the budget model: non-empty names,
//! positive amounts, known categories and the configured policy for negative
//! amounts. Rejections come back as typed errors; the model is untouched.

use tracing::{debug, info, warn};

use crate::config::settings::{NegativeInputPolicy, Settings};
use crate::error::{BudgetError, BudgetResult, ValidationError};
use crate::models::{Budget, Expense, FixedCategory, Goal, Money};

/// Service for budget mutations
pub struct BudgetService<'a> {
    budget: &'a mut Budget,
    settings: &'a Settings,
}

impl<'a> BudgetService<'a> {
    pub fn new(budget: &'a mut Budget, settings: &'a Settings) -> Self {
        Self { budget, settings }
    }

    /// Set income, rebalancing the fixed allocations
    pub fn set_income(&mut self, amount: Money) -> BudgetResult<()> {
        let amount = self.apply_negative_policy(amount)?;
        self.budget.set_income(amount);
        info!(income = amount.cents(), "income set");
        self.warn_if_over_income();
        Ok(())
    }

    /// Set a fixed allocation, returning the value kept after rebalancing
    pub fn set_fixed_allocation(
        &mut self,
        category: FixedCategory,
        amount: Money,
    ) -> BudgetResult<Money> {
        let amount = self.apply_negative_policy(amount)?;
        self.budget.set_fixed_allocation(category, amount);

        let stored = self.budget.fixed_allocation(category);
        if stored < amount {
            info!(
                category = category.name(),
                requested = amount.cents(),
                stored = stored.cents(),
                "fixed allocation scaled down to fit income"
            );
        } else {
            info!(category = category.name(), amount = stored.cents(), "allocation set");
        }
        self.warn_if_over_income();
        Ok(stored)
    }

    /// Allocate to a fixed or custom category by name
    ///
    /// Returns the amount actually stored, which may be lower than requested.
    pub fn allocate(&mut self, category: &str, amount: Money) -> BudgetResult<Money> {
        if let Some(fixed) = FixedCategory::from_name(category) {
            return self.set_fixed_allocation(fixed, amount);
        }

        let amount = self.apply_negative_policy(amount)?;
        let stored = self
            .budget
            .set_custom_allocation(category, amount)
            .map_err(|e| self.rejected("allocate", e))?;
        if stored < amount {
            info!(
                category,
                requested = amount.cents(),
                stored = stored.cents(),
                "custom allocation clamped to remaining income"
            );
        } else {
            info!(category, amount = stored.cents(), "allocation set");
        }
        self.warn_if_over_income();
        Ok(stored)
    }

    /// Add a custom category, returning its trimmed name
    pub fn add_category(&mut self, name: &str) -> BudgetResult<String> {
        self.budget
            .add_custom_category(name)
            .map_err(|e| self.rejected("add category", e))?;
        let name = name.trim().to_string();
        info!(category = %name, "custom category added");
        Ok(name)
    }

    /// Record an expense against an existing category
    pub fn add_expense(
        &mut self,
        title: &str,
        amount: Money,
        category: &str,
    ) -> BudgetResult<Expense> {
        let title = title.trim();
        if title.is_empty() {
            return Err(self.rejected("add expense", ValidationError::InvalidName));
        }
        if !amount.is_positive() {
            return Err(self.rejected("add expense", ValidationError::NonPositiveAmount));
        }
        if !self.budget.has_category(category) {
            return Err(self.rejected(
                "add expense",
                ValidationError::UnknownCategory(category.to_string()),
            ));
        }

        let expense = Expense::new(title, amount, category);
        self.budget.add_expense(expense.clone());
        info!(id = %expense.id, category, amount = amount.cents(), "expense recorded");

        if self.budget.is_over_budget_for_category(category) {
            warn!(category, "category is over budget");
        }
        if self.budget.is_over_budget() {
            warn!(
                spent = self.budget.total_expense().cents(),
                available = self.budget.available_budget().cents(),
                "spending exceeds available budget"
            );
        }
        Ok(expense)
    }

    /// Record a savings goal
    pub fn add_goal(&mut self, name: &str, target: Money, saved: Money) -> BudgetResult<Goal> {
        let name = name.trim();
        if name.is_empty() {
            return Err(self.rejected("add goal", ValidationError::InvalidName));
        }
        if !target.is_positive() {
            return Err(self.rejected("add goal", ValidationError::NonPositiveAmount));
        }
        if saved.is_negative() {
            return Err(self.rejected("add goal", ValidationError::NegativeAmount));
        }

        let goal = Goal::new(name, target, saved);
        self.budget.add_goal(goal.clone());
        info!(
            id = %goal.id,
            target = target.cents(),
            saved = saved.cents(),
            "goal recorded"
        );
        Ok(goal)
    }

    fn apply_negative_policy(&self, amount: Money) -> BudgetResult<Money> {
        if !amount.is_negative() {
            return Ok(amount);
        }
        match self.settings.negative_input {
            NegativeInputPolicy::Clamp => {
                debug!(amount = amount.cents(), "negative amount clamped to zero");
                Ok(Money::zero())
            }
            NegativeInputPolicy::Reject => {
                Err(self.rejected("set amount", ValidationError::NegativeAmount))
            }
        }
    }

    fn rejected(&self, operation: &str, err: ValidationError) -> BudgetError {
        debug!(operation, reason = %err, "mutation rejected");
        BudgetError::Validation(err)
    }

    fn warn_if_over_income(&self) {
        if self.budget.over_income_limit() {
            warn!(
                total_budget = self.budget.total_budget().cents(),
                income = self.budget.income().cents(),
                "allocations exceed income"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    #[test]
    fn test_income_and_fixed_allocation() {
        let settings = Settings::default();
        let mut budget = Budget::new();
        let mut service = BudgetService::new(&mut budget, &settings);

        service.set_income(units(1000)).unwrap();
        let kept = service.allocate("Food", units(1500)).unwrap();
        assert_eq!(kept, units(1000));
        assert_eq!(budget.fixed_allocation(FixedCategory::Food), units(1000));
    }

    #[test]
    fn test_negative_clamped_by_default() {
        let settings = Settings::default();
        let mut budget = Budget::new();
        let mut service = BudgetService::new(&mut budget, &settings);

        service.set_income(units(-20)).unwrap();
        assert_eq!(budget.income(), Money::zero());
    }

    #[test]
    fn test_negative_rejected_by_policy() {
        let settings = Settings {
            negative_input: NegativeInputPolicy::Reject,
            ..Settings::default()
        };
        let mut budget = Budget::new();
        let mut service = BudgetService::new(&mut budget, &settings);

        service.set_income(units(100)).unwrap();
        let err = service.set_income(units(-1)).unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::NegativeAmount));
        let err = service.allocate("Rent", units(-1)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(budget.income(), units(100));
    }

    #[test]
    fn test_custom_category_flow() {
        let settings = Settings::default();
        let mut budget = Budget::new();
        let mut service = BudgetService::new(&mut budget, &settings);

        service.set_income(units(1000)).unwrap();
        service.allocate("Rent", units(900)).unwrap();
        assert_eq!(service.add_category(" Gym ").unwrap(), "Gym");
        assert_eq!(service.allocate("Gym", units(500)).unwrap(), units(100));

        let err = service.allocate("Pets", units(5)).unwrap_err();
        assert_eq!(
            err.validation(),
            Some(&ValidationError::UnknownCategory("Pets".into()))
        );
        let err = service.add_category("Food").unwrap_err();
        assert_eq!(
            err.validation(),
            Some(&ValidationError::DuplicateCategory("Food".into()))
        );
    }

    #[test]
    fn test_expense_validation() {
        let settings = Settings::default();
        let mut budget = Budget::new();
        let mut service = BudgetService::new(&mut budget, &settings);

        let err = service.add_expense("  ", units(5), "Food").unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::InvalidName));
        let err = service.add_expense("Lunch", Money::zero(), "Food").unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::NonPositiveAmount));
        let err = service.add_expense("Lunch", units(5), "Gym").unwrap_err();
        assert_eq!(
            err.validation(),
            Some(&ValidationError::UnknownCategory("Gym".into()))
        );

        let expense = service.add_expense(" Lunch ", units(5), "Food").unwrap();
        assert_eq!(expense.title, "Lunch");
        assert_eq!(budget.expenses().len(), 1);
        assert_eq!(budget.total_spent("Food"), units(5));
    }

    #[test]
    fn test_goal_validation() {
        let settings = Settings::default();
        let mut budget = Budget::new();
        let mut service = BudgetService::new(&mut budget, &settings);

        assert!(service.add_goal("", units(100), Money::zero()).is_err());
        assert!(service.add_goal("Bike", Money::zero(), Money::zero()).is_err());
        let err = service.add_goal("Bike", units(100), units(-1)).unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::NegativeAmount));

        // Saving beyond the target is allowed
        let goal = service.add_goal("Bike", units(100), units(150)).unwrap();
        assert!(goal.is_reached());
        assert_eq!(budget.goals().len(), 1);
        assert_eq!(budget.goal_savings(), units(150));
    }
}
