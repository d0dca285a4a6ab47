//! Savings goal CLI commands

use clap::Subcommand;

use crate::display::savings::format_savings_goals;
use crate::error::TallyResult;
use crate::models::{ItemId, Money};
use crate::services::BookService;

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Add a savings goal
    Add {
        /// Goal name (e.g., "Emergency Fund")
        #[arg(short, long)]
        name: Option<String>,

        /// Target amount
        #[arg(short, long)]
        target: Option<String>,

        /// Amount saved so far
        #[arg(short, long)]
        current: Option<String>,
    },

    /// Update fields on an existing goal
    Update {
        /// Goal id
        id: ItemId,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        target: Option<String>,

        #[arg(short, long)]
        current: Option<String>,
    },

    /// Remove a savings goal
    Remove {
        /// Goal id
        id: ItemId,
    },

    /// List savings goals with progress
    List,
}

/// Handle a savings goal command
pub fn handle_savings_command(service: &mut BookService, cmd: SavingsCommands) -> TallyResult<()> {
    match cmd {
        SavingsCommands::Add {
            name,
            target,
            current,
        } => {
            let target = target.as_deref().map(Money::parse_lenient);
            let current = current.as_deref().map(Money::parse_lenient);
            let id = service.add_savings_goal(name, target, current);
            println!("Added savings goal (id: {})", id);
        }

        SavingsCommands::Update {
            id,
            name,
            target,
            current,
        } => {
            let target = target.as_deref().map(Money::parse_lenient);
            let current = current.as_deref().map(Money::parse_lenient);
            service.update_savings_goal(id, name, target, current)?;
            println!("Updated savings goal {}", id);
        }

        SavingsCommands::Remove { id } => {
            service.remove_savings_goal(id)?;
            println!("Removed savings goal {}", id);
        }

        SavingsCommands::List => {
            print!("{}", format_savings_goals(&service.book().savings));
        }
    }

    Ok(())
}
