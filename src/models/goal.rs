//! Savings goals
//!
//! A goal's saved amount is reserved out of the total budget, reducing the
//! budget available for spending.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ids::GoalId;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub target_amount: Money,
    /// May exceed `target_amount`
    pub saved_amount: Money,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn new(name: impl Into<String>, target_amount: Money, saved_amount: Money) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            saved_amount,
            created_at: Utc::now(),
        }
    }

    /// Percentage of the target saved so far, 0 when the target is zero
    pub fn progress_percent(&self) -> f64 {
        if !self.target_amount.is_positive() {
            return 0.0;
        }
        self.saved_amount.cents() as f64 / self.target_amount.cents() as f64 * 100.0
    }

    pub fn is_reached(&self) -> bool {
        self.target_amount.is_positive() && self.saved_amount >= self.target_amount
    }

    /// Amount still to save, never negative
    pub fn shortfall(&self) -> Money {
        (self.target_amount - self.saved_amount).non_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let goal = Goal::new("Bike", Money::from_units(400), Money::from_units(100));
        assert!((goal.progress_percent() - 25.0).abs() < f64::EPSILON);
        assert!(!goal.is_reached());
        assert_eq!(goal.shortfall(), Money::from_units(300));
    }

    #[test]
    fn test_saved_beyond_target() {
        let goal = Goal::new("Trip", Money::from_units(100), Money::from_units(150));
        assert!(goal.is_reached());
        assert_eq!(goal.shortfall(), Money::zero());
        assert!(goal.progress_percent() > 100.0);
    }

    #[test]
    fn test_zero_target() {
        let goal = Goal::new("Nothing", Money::zero(), Money::zero());
        assert_eq!(goal.progress_percent(), 0.0);
        assert!(!goal.is_reached());
    }
}
