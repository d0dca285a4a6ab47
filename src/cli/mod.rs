//! CLI command definitions and handlers
//!
//! One module per budget tab: income, expenses, credit cards, loans,
//! savings goals, plus the overview report.

pub mod card;
pub mod expense;
pub mod income;
pub mod loan;
pub mod overview;
pub mod savings;

pub use card::{handle_card_command, CardCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use loan::{handle_loan_command, LoanCommands};
pub use overview::handle_overview_command;
pub use savings::{handle_savings_command, SavingsCommands};

/// Lenient APR parsing: non-numeric input coerces to 0, matching the
/// coercion rule for all numeric form fields.
pub(crate) fn parse_apr_lenient(s: &str) -> f64 {
    s.trim().trim_end_matches('%').parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_apr_lenient() {
        assert_eq!(parse_apr_lenient("19.99"), 19.99);
        assert_eq!(parse_apr_lenient("25%"), 25.0);
        assert_eq!(parse_apr_lenient("abc"), 0.0);
        assert_eq!(parse_apr_lenient(""), 0.0);
    }
}
