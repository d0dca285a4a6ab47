//! Loan CLI commands

use clap::Subcommand;

use crate::display::debt::format_loans;
use crate::error::TallyResult;
use crate::models::{ItemId, Money, PaymentFrequency};
use crate::services::BookService;

use super::parse_apr_lenient;

/// Loan subcommands
#[derive(Subcommand)]
pub enum LoanCommands {
    /// Add a loan
    Add {
        /// Loan name (e.g., "Car Loan")
        #[arg(short, long)]
        name: Option<String>,

        /// Current balance
        #[arg(short, long)]
        balance: Option<String>,

        /// Recurring payment amount
        #[arg(short, long)]
        payment: Option<String>,

        /// Annual percentage rate
        #[arg(short, long)]
        apr: Option<String>,

        /// Payment due date (free-form)
        #[arg(short, long)]
        due_date: Option<String>,

        /// Payment frequency: weekly, bi-weekly, or monthly
        #[arg(short, long)]
        frequency: Option<PaymentFrequency>,
    },

    /// Update fields on an existing loan
    Update {
        /// Loan id
        id: ItemId,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        balance: Option<String>,

        #[arg(short, long)]
        payment: Option<String>,

        #[arg(short, long)]
        apr: Option<String>,

        #[arg(short, long)]
        due_date: Option<String>,

        #[arg(short, long)]
        frequency: Option<PaymentFrequency>,
    },

    /// Remove a loan
    Remove {
        /// Loan id
        id: ItemId,
    },

    /// List loans with payoff estimates
    List,
}

/// Handle a loan command
pub fn handle_loan_command(service: &mut BookService, cmd: LoanCommands) -> TallyResult<()> {
    match cmd {
        LoanCommands::Add {
            name,
            balance,
            payment,
            apr,
            due_date,
            frequency,
        } => {
            let balance = balance.as_deref().map(Money::parse_lenient);
            let payment = payment.as_deref().map(Money::parse_lenient);
            let apr = apr.as_deref().map(parse_apr_lenient);
            let id = service.add_loan(name, balance, payment, apr, due_date, frequency);
            println!("Added loan (id: {})", id);
        }

        LoanCommands::Update {
            id,
            name,
            balance,
            payment,
            apr,
            due_date,
            frequency,
        } => {
            let balance = balance.as_deref().map(Money::parse_lenient);
            let payment = payment.as_deref().map(Money::parse_lenient);
            let apr = apr.as_deref().map(parse_apr_lenient);
            service.update_loan(id, name, balance, payment, apr, due_date, frequency)?;
            println!("Updated loan {}", id);
        }

        LoanCommands::Remove { id } => {
            service.remove_loan(id)?;
            println!("Removed loan {}", id);
        }

        LoanCommands::List => {
            print!("{}", format_loans(&service.book().loans));
        }
    }

    Ok(())
}
