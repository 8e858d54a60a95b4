use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use budgetcalc::cli::{format_settings, run_session};
use budgetcalc::config::{BudgetPaths, Settings};
use budgetcalc::models::Budget;

#[derive(Parser)]
#[command(
    name = "budgetcalc",
    author = "Kaylee Beyene",
    version,
    about = "Personal budgeting calculator",
    long_about = "budgetcalc splits your income across Food, Rent, Travel and your own \
                  categories, keeps the allocations within income, and warns when \
                  spending outgrows the budget."
)]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, env = "BUDGETCALC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive budgeting session (reads commands from stdin)
    Session,

    /// Show the effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings_path = match cli.config {
        Some(path) => path,
        None => BudgetPaths::new()?.settings_file(),
    };
    let settings = Settings::load_or_default(&settings_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Session) => {
            info!(settings = %settings_path.display(), "starting session");
            let stdin = std::io::stdin();
            let prompt = stdin.is_terminal();
            let mut stdout = std::io::stdout();
            let mut budget = Budget::new();
            run_session(stdin.lock(), &mut stdout, &mut budget, &settings, prompt)?;
        }
        Some(Commands::Config) => {
            print!("{}", format_settings(&settings, &settings_path));
        }
        None => {
            println!("budgetcalc - personal budgeting calculator");
            println!();
            println!("Run 'budgetcalc --help' for usage information.");
            println!("Run 'budgetcalc session' to start budgeting.");
        }
    }

    Ok(())
}
