//! Spending categories
//!
//! Three fixed categories always exist; any number of named custom
//! categories may be added alongside them.

use serde::Serialize;
use std::fmt;

use super::money::Money;

/// One of the always-present categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedCategory {
    Food,
    Rent,
    Travel,
}

impl FixedCategory {
    /// All fixed categories in display order
    pub const ALL: [FixedCategory; 3] = [Self::Food, Self::Rent, Self::Travel];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Travel => "Travel",
        }
    }

    /// Look up a fixed category by its exact (case-sensitive) name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// The two fixed categories other than this one
    pub fn others(&self) -> impl Iterator<Item = FixedCategory> + '_ {
        Self::ALL.into_iter().filter(move |c| c != self)
    }
}

impl fmt::Display for FixedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A user-defined category and its allocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomCategory {
    pub name: String,
    pub budgeted: Money,
}

impl CustomCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            budgeted: Money::zero(),
        }
    }
}

/// Budget versus spending for a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    /// Whether this is one of the fixed categories
    pub fixed: bool,
    pub budgeted: Money,
    pub spent: Money,
    /// Budgeted minus spent; negative when overspent
    pub remaining: Money,
}

impl CategorySummary {
    pub fn new(name: impl Into<String>, fixed: bool, budgeted: Money, spent: Money) -> Self {
        Self {
            name: name.into(),
            fixed,
            budgeted,
            spent,
            remaining: budgeted - spent,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budgeted
    }
}
