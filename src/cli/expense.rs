//! Expense CLI commands

use clap::Subcommand;

use crate::display::expense::{format_all_expenses, format_expense_list};
use crate::error::TallyResult;
use crate::models::{Category, ExpenseKind, ItemId, Money};
use crate::services::BookService;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense to the fixed or variable list
    Add {
        /// Which list: fixed or variable
        #[arg(short, long)]
        kind: ExpenseKind,

        /// Expense name (e.g., "Rent")
        #[arg(short, long)]
        name: Option<String>,

        /// Expense amount
        #[arg(short, long)]
        amount: Option<String>,

        /// Category (housing, transportation, food, utilities,
        /// entertainment, healthcare, insurance, other)
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Update fields on an existing expense
    Update {
        /// Which list the expense lives in
        #[arg(short, long)]
        kind: ExpenseKind,

        /// Expense id
        id: ItemId,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        amount: Option<String>,

        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Remove an expense
    Remove {
        /// Which list the expense lives in
        #[arg(short, long)]
        kind: ExpenseKind,

        /// Expense id
        id: ItemId,
    },

    /// List expenses, optionally limited to one kind
    List {
        #[arg(short, long)]
        kind: Option<ExpenseKind>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(service: &mut BookService, cmd: ExpenseCommands) -> TallyResult<()> {
    match cmd {
        ExpenseCommands::Add {
            kind,
            name,
            amount,
            category,
        } => {
            let amount = amount.as_deref().map(Money::parse_lenient);
            let id = service.add_expense(kind, name, amount, category);
            println!("Added {} expense (id: {})", kind, id);
        }

        ExpenseCommands::Update {
            kind,
            id,
            name,
            amount,
            category,
        } => {
            let amount = amount.as_deref().map(Money::parse_lenient);
            service.update_expense(kind, id, name, amount, category)?;
            println!("Updated {} expense {}", kind, id);
        }

        ExpenseCommands::Remove { kind, id } => {
            service.remove_expense(kind, id)?;
            println!("Removed {} expense {}", kind, id);
        }

        ExpenseCommands::List { kind } => match kind {
            Some(kind) => print!(
                "{}",
                format_expense_list(kind, service.book().expenses.list(kind))
            ),
            None => print!("{}", format_all_expenses(&service.book().expenses)),
        },
    }

    Ok(())
}
