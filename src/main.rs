use anyhow::Result;
use clap::{Parser, Subcommand};

use tally_cli::cli::{
    handle_card_command, handle_expense_command, handle_income_command, handle_loan_command,
    handle_overview_command, handle_savings_command,
};
use tally_cli::config::{paths::TallyPaths, settings::Settings};
use tally_cli::services::BookService;
use tally_cli::storage::{FileStore, Storage};

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Personal budget tracking from the command line",
    long_about = "tally tracks your income, expenses, savings goals, credit cards, \
                  and loans, and shows where your money goes each month along with \
                  a few advisory insights."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income management commands
    #[command(subcommand)]
    Income(tally_cli::cli::IncomeCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(tally_cli::cli::ExpenseCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Savings(tally_cli::cli::SavingsCommands),

    /// Credit card commands
    #[command(subcommand)]
    Card(tally_cli::cli::CardCommands),

    /// Loan commands
    #[command(subcommand)]
    Loan(tally_cli::cli::LoanCommands),

    /// Show the budget overview with totals and insights
    #[command(alias = "summary")]
    Overview,

    /// Initialize the data directory and settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(Box::new(FileStore::new(paths.data_dir())));
    let mut service = BookService::load(&storage);

    match cli.command {
        Some(Commands::Income(cmd)) => {
            handle_income_command(&mut service, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut service, cmd)?;
        }
        Some(Commands::Savings(cmd)) => {
            handle_savings_command(&mut service, cmd)?;
        }
        Some(Commands::Card(cmd)) => {
            handle_card_command(&mut service, cmd)?;
        }
        Some(Commands::Loan(cmd)) => {
            handle_loan_command(&mut service, cmd)?;
        }
        Some(Commands::Overview) => {
            handle_overview_command(&service)?;
        }
        Some(Commands::Init) => {
            println!("Initializing tally at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'tally income set <amount>' to record your monthly income.");
            println!("Run 'tally overview' to see where your budget stands.");
        }
        Some(Commands::Config) => {
            println!("tally Configuration");
            println!("===================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("tally - Personal budget tracking");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally overview' to see your budget at a glance.");
        }
    }

    Ok(())
}
