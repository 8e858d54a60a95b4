//! Expense and goal list formatting

use crate::models::{Expense, Goal};

pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let title_width = expenses
        .iter()
        .map(|e| e.title.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<title_width$}  {:>10}  {}\n",
        "ID", "Title", "Amount", "Category",
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<title_width$}  {:->10}  {:-<10}\n",
        "", "", "", "",
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<12}  {:<title_width$}  {:>10}  {}\n",
            expense.id.to_string(),
            expense.title,
            expense.amount.format_whole(symbol),
            expense.category,
        ));
    }

    output
}

pub fn format_goal_list(goals: &[Goal], symbol: &str) -> String {
    if goals.is_empty() {
        return "No savings goals.".to_string();
    }

    let name_width = goals.iter().map(|g| g.name.chars().count()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>10}  {:>10}  {:>8}\n",
        "Goal", "Saved", "Target", "Progress",
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->10}  {:->10}  {:->8}\n",
        "", "", "", "",
    ));

    for goal in goals {
        let marker = if goal.is_reached() { " ✓" } else { "" };
        output.push_str(&format!(
            "{:<name_width$}  {:>10}  {:>10}  {:>7.0}%{}\n",
            goal.name,
            goal.saved_amount.format_whole(symbol),
            goal.target_amount.format_whole(symbol),
            goal.progress_percent(),
            marker,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_expense_list(&[], "$"), "No expenses recorded.");
        assert_eq!(format_goal_list(&[], "$"), "No savings goals.");
    }

    #[test]
    fn test_expense_list() {
        let expenses = vec![
            Expense::new("Groceries", Money::from_cents(4599), "Food"),
            Expense::new("Train", Money::from_units(12), "Travel"),
        ];
        let text = format_expense_list(&expenses, "$");
        assert!(text.contains("Groceries"));
        assert!(text.contains("$45"));
        assert!(text.contains("Travel"));
        assert!(text.contains("exp-"));
        // Insertion order
        assert!(text.find("Groceries").unwrap() < text.find("Train").unwrap());
    }

    #[test]
    fn test_goal_list() {
        let goals = vec![
            Goal::new("Bike", Money::from_units(400), Money::from_units(100)),
            Goal::new("Trip", Money::from_units(100), Money::from_units(100)),
        ];
        let text = format_goal_list(&goals, "$");
        let bike = text.lines().find(|l| l.starts_with("Bike")).unwrap();
        let trip = text.lines().find(|l| l.starts_with("Trip")).unwrap();
        assert!(bike.contains("25%"));
        assert!(trip.ends_with('✓'));
    }

    #[test]
    fn test_goal_list_width_counts_characters() {
        let goals = vec![Goal::new("Vélo", Money::from_units(100), Money::from_units(10))];
        let text = format_goal_list(&goals, "$");
        let header = text.lines().next().unwrap();
        assert_eq!(header.chars().count(), 4 + 2 + 10 + 2 + 10 + 2 + 8);
        let row = text.lines().find(|l| l.starts_with("Vélo")).unwrap();
        assert_eq!(row.chars().count(), header.chars().count());
    }
}
