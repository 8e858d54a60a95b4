//! Interactive budgeting session
//!
//! Reads one command per line, parses it with clap and applies it to a
//! single in-memory budget. Budget state lives only as long as the session.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::settings::Settings;
use crate::display::{
    format_budget_overview, format_category_table, format_expense_list, format_goal_list,
};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, FixedCategory, Money};
use crate::services::BudgetService;

/// A single line of session input
#[derive(Parser, Debug)]
#[command(name = "session", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session commands
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Set income (e.g., "2500" or "2500.00")
    Income {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Allocate budget to a category (Food, Rent, Travel or a custom one)
    Allocate {
        category: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Add a custom category
    Category {
        name: String,
    },

    /// Record an expense
    Expense {
        title: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        category: String,
    },

    /// Record a savings goal
    Goal {
        name: String,
        /// Target amount
        #[arg(allow_hyphen_values = true)]
        target: String,
        /// Amount already saved
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        saved: String,
    },

    /// Show totals, warnings and per-category status
    Overview {
        /// Print the overview as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories with budget and spending
    Categories,

    /// List recorded expenses
    Expenses {
        /// Print the expenses as JSON
        #[arg(long)]
        json: bool,
    },

    /// List savings goals
    Goals {
        /// Print the goals as JSON
        #[arg(long)]
        json: bool,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run a session until `quit` or end of input
///
/// Rejected commands are reported on `output` and the session continues;
/// only I/O failures end it early.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    budget: &mut Budget,
    settings: &Settings,
    prompt: bool,
) -> BudgetResult<()> {
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(output, "> ")?;
            output.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens = match split_args(line) {
            Ok(tokens) => tokens,
            Err(e) => {
                writeln!(output, "Error: {}", e)?;
                continue;
            }
        };

        let parsed = match SessionLine::try_parse_from(tokens) {
            Ok(parsed) => parsed,
            Err(e) => {
                write!(output, "{}", e.render())?;
                continue;
            }
        };

        debug!(command = ?parsed.command, "session command");
        match execute(parsed.command, budget, settings, output) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(BudgetError::Io(e)) => return Err(BudgetError::Io(e)),
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
    }
    Ok(())
}

/// Apply one command to the budget
pub fn execute<W: Write>(
    command: SessionCommand,
    budget: &mut Budget,
    settings: &Settings,
    output: &mut W,
) -> BudgetResult<Flow> {
    let symbol = settings.currency_symbol.as_str();

    match command {
        SessionCommand::Income { amount } => {
            let amount = parse_amount(&amount)?;
            BudgetService::new(budget, settings).set_income(amount)?;
            writeln!(output, "Income set to {}", budget.income().format_whole(symbol))?;
            write_over_income_warning(budget, output)?;
        }
        SessionCommand::Allocate { category, amount } => {
            let requested = parse_amount(&amount)?;
            let free = FixedCategory::from_name(&category).map(|c| budget.remaining_for_fixed(c));
            let stored = BudgetService::new(budget, settings).allocate(&category, requested)?;
            if let (Some(free), true) = (free, stored < requested) {
                writeln!(
                    output,
                    "Allocated {} to {} (requested {}, only {} was free; fixed categories scaled to income)",
                    stored.format_whole(symbol),
                    category,
                    requested.format_whole(symbol),
                    free.format_whole(symbol)
                )?;
            } else if stored < requested {
                writeln!(
                    output,
                    "Allocated {} to {} (requested {})",
                    stored.format_whole(symbol),
                    category,
                    requested.format_whole(symbol)
                )?;
            } else {
                writeln!(output, "Allocated {} to {}", stored.format_whole(symbol), category)?;
            }
            write_over_income_warning(budget, output)?;
        }
        SessionCommand::Category { name } => {
            let name = BudgetService::new(budget, settings).add_category(&name)?;
            writeln!(output, "Added category '{}'", name)?;
        }
        SessionCommand::Expense {
            title,
            amount,
            category,
        } => {
            let amount = parse_amount(&amount)?;
            let expense = BudgetService::new(budget, settings).add_expense(&title, amount, &category)?;
            writeln!(
                output,
                "Recorded {} '{}' {} in {}",
                expense.id,
                expense.title,
                expense.amount.format_whole(symbol),
                expense.category
            )?;
            if budget.is_over_budget_for_category(&category) {
                writeln!(output, "⚠ {} is over budget", category)?;
            }
            if budget.is_over_budget() {
                writeln!(output, "⚠ Spending exceeds available budget")?;
            }
        }
        SessionCommand::Goal {
            name,
            target,
            saved,
        } => {
            let target = parse_amount(&target)?;
            let saved = parse_amount(&saved)?;
            let goal = BudgetService::new(budget, settings).add_goal(&name, target, saved)?;
            writeln!(
                output,
                "Recorded {} '{}' {} of {}",
                goal.id,
                goal.name,
                goal.saved_amount.format_whole(symbol),
                goal.target_amount.format_whole(symbol)
            )?;
        }
        SessionCommand::Overview { json } => {
            let overview = budget.overview();
            if json {
                writeln!(output, "{}", serde_json::to_string_pretty(&overview)?)?;
            } else {
                write!(output, "{}", format_budget_overview(&overview, symbol))?;
            }
        }
        SessionCommand::Categories => {
            write!(output, "{}", format_category_table(&budget.category_summaries(), symbol))?;
        }
        SessionCommand::Expenses { json: true } => {
            writeln!(output, "{}", serde_json::to_string_pretty(budget.expenses())?)?;
        }
        SessionCommand::Expenses { json: false } => {
            writeln!(output, "{}", format_expense_list(budget.expenses(), symbol).trim_end())?;
        }
        SessionCommand::Goals { json: true } => {
            writeln!(output, "{}", serde_json::to_string_pretty(budget.goals())?)?;
        }
        SessionCommand::Goals { json: false } => {
            writeln!(output, "{}", format_goal_list(budget.goals(), symbol).trim_end())?;
        }
        SessionCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn parse_amount(s: &str) -> BudgetResult<Money> {
    Money::parse(s).map_err(|e| BudgetError::Parse(e.to_string()))
}

fn write_over_income_warning<W: Write>(budget: &Budget, output: &mut W) -> BudgetResult<()> {
    if budget.over_income_limit() {
        writeln!(output, "⚠ Allocations exceed income")?;
    }
    Ok(())
}

/// Split a line into arguments, honouring single and double quotes
pub fn split_args(line: &str) -> BudgetResult<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_token = true;
            }
            None if ch.is_whitespace() => {
                if in_token {
                    args.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(ch);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return Err(BudgetError::Parse("unterminated quote".into()));
    }
    if in_token {
        args.push(current);
    }
    Ok(args)
}
