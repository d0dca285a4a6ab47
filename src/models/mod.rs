//! Core data models for tally-cli
//!
//! The budget state is five collections gathered in a [`BudgetBook`]
//! snapshot: income, expenses (fixed and variable), savings goals, credit
//! cards, and loans. Amounts use the cents-based [`Money`] type; list items
//! are identified by creation-timestamp [`ItemId`]s.

pub mod book;
pub mod debt;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod savings;

pub use book::BudgetBook;
pub use debt::{CreditCard, Loan, PaymentFrequency};
pub use expense::{Category, Expense, ExpenseKind, Expenses};
pub use ids::ItemId;
pub use income::{Income, IncomeSource};
pub use money::Money;
pub use savings::SavingsGoal;
