//! Credit card CLI commands

use clap::Subcommand;

use crate::display::debt::format_credit_cards;
use crate::error::TallyResult;
use crate::models::{ItemId, Money};
use crate::services::BookService;

use super::parse_apr_lenient;

/// Credit card subcommands
#[derive(Subcommand)]
pub enum CardCommands {
    /// Add a credit card
    Add {
        /// Card name (e.g., "Visa")
        #[arg(short, long)]
        name: Option<String>,

        /// Current balance
        #[arg(short, long)]
        balance: Option<String>,

        /// Minimum monthly payment
        #[arg(short, long)]
        min_payment: Option<String>,

        /// Annual percentage rate (e.g., "19.99")
        #[arg(short, long)]
        apr: Option<String>,

        /// Payment due date (free-form, e.g., "15th")
        #[arg(short, long)]
        due_date: Option<String>,
    },

    /// Update fields on an existing card
    Update {
        /// Card id
        id: ItemId,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        balance: Option<String>,

        #[arg(short, long)]
        min_payment: Option<String>,

        #[arg(short, long)]
        apr: Option<String>,

        #[arg(short, long)]
        due_date: Option<String>,
    },

    /// Remove a credit card
    Remove {
        /// Card id
        id: ItemId,
    },

    /// List credit cards with interest and payoff estimates
    List,
}

/// Handle a credit card command
pub fn handle_card_command(service: &mut BookService, cmd: CardCommands) -> TallyResult<()> {
    match cmd {
        CardCommands::Add {
            name,
            balance,
            min_payment,
            apr,
            due_date,
        } => {
            let balance = balance.as_deref().map(Money::parse_lenient);
            let min_payment = min_payment.as_deref().map(Money::parse_lenient);
            let apr = apr.as_deref().map(parse_apr_lenient);
            let id = service.add_credit_card(name, balance, min_payment, apr, due_date);
            println!("Added credit card (id: {})", id);
        }

        CardCommands::Update {
            id,
            name,
            balance,
            min_payment,
            apr,
            due_date,
        } => {
            let balance = balance.as_deref().map(Money::parse_lenient);
            let min_payment = min_payment.as_deref().map(Money::parse_lenient);
            let apr = apr.as_deref().map(parse_apr_lenient);
            service.update_credit_card(id, name, balance, min_payment, apr, due_date)?;
            println!("Updated credit card {}", id);
        }

        CardCommands::Remove { id } => {
            service.remove_credit_card(id)?;
            println!("Removed credit card {}", id);
        }

        CardCommands::List => {
            print!("{}", format_credit_cards(&service.book().credit_cards));
        }
    }

    Ok(())
}
