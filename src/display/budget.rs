//! Budget overview formatting
//!
//! Amounts are shown as whole currency units, truncated toward zero.

use crate::models::{BudgetOverview, CategorySummary};

/// Format the overview: totals, warnings and a per-category table
pub fn format_budget_overview(overview: &BudgetOverview, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Income:           {:>10}\n", overview.income.format_whole(symbol)));
    output.push_str(&format!(
        "Total budget:     {:>10}\n",
        overview.total_budget.format_whole(symbol)
    ));
    output.push_str(&format!(
        "Saved for goals:  {:>10}\n",
        overview.goal_savings.format_whole(symbol)
    ));
    output.push_str(&format!(
        "Available:        {:>10}\n",
        overview.available_budget.format_whole(symbol)
    ));
    output.push_str(&format!(
        "Spent:            {:>10}\n",
        overview.total_expense.format_whole(symbol)
    ));

    if overview.over_income_limit {
        output.push_str("⚠ Allocations exceed income\n");
    }
    if overview.over_budget {
        output.push_str("⚠ Spending exceeds available budget\n");
    }

    output.push('\n');
    output.push_str(&format_category_table(&overview.categories, symbol));
    output
}

/// Format category summaries as a table
pub fn format_category_table(categories: &[CategorySummary], symbol: &str) -> String {
    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>10}  {:>10}  {:>10}\n",
        "Category",
        "Budgeted",
        "Spent",
        "Remaining",
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->10}  {:->10}  {:->10}\n",
        "", "", "", "",
    ));

    for category in categories {
        let status = if category.is_over_budget() { "  ⚠" } else { "" };
        output.push_str(&format!(
            "{:<name_width$}  {:>10}  {:>10}  {:>10}{}\n",
            category.name,
            category.budgeted.format_whole(symbol),
            category.spent.format_whole(symbol),
            category.remaining.format_whole(symbol),
            status,
        ));
    }

    output
}
