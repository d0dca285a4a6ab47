//! Income CLI commands

use clap::Subcommand;

use crate::display::income::format_income;
use crate::error::TallyResult;
use crate::models::{ItemId, Money};
use crate::services::BookService;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the monthly income figure
    Set {
        /// Monthly income amount (e.g., "3000" or "3000.00")
        amount: String,
    },

    /// Add an additional income source
    AddSource {
        /// Source name (e.g., "Freelance")
        #[arg(short, long)]
        name: Option<String>,

        /// Source amount
        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Update an additional income source
    UpdateSource {
        /// Income source id
        id: ItemId,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Remove an additional income source
    RemoveSource {
        /// Income source id
        id: ItemId,
    },

    /// Show income and all additional sources
    Show,
}

/// Handle an income command
pub fn handle_income_command(service: &mut BookService, cmd: IncomeCommands) -> TallyResult<()> {
    match cmd {
        IncomeCommands::Set { amount } => {
            let amount = Money::parse_lenient(&amount);
            service.set_monthly_income(amount);
            println!("Monthly income set to {}", amount);
        }

        IncomeCommands::AddSource { name, amount } => {
            let amount = amount.as_deref().map(Money::parse_lenient);
            let id = service.add_income_source(name, amount);
            println!("Added income source (id: {})", id);
        }

        IncomeCommands::UpdateSource { id, name, amount } => {
            let amount = amount.as_deref().map(Money::parse_lenient);
            service.update_income_source(id, name, amount)?;
            println!("Updated income source {}", id);
        }

        IncomeCommands::RemoveSource { id } => {
            service.remove_income_source(id)?;
            println!("Removed income source {}", id);
        }

        IncomeCommands::Show => {
            print!("{}", format_income(&service.book().income));
        }
    }

    Ok(())
}
