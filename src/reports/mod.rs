//! Derived reporting over budget snapshots
//!
//! Totals, category breakdowns, and advisory insights. All pure functions
//! of a [`crate::models::BudgetBook`].

pub mod insights;
pub mod overview;

pub use insights::Insight;
pub use overview::{expenses_by_category, CategoryRow, OverviewReport, Totals};
