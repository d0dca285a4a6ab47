//! tally - Personal budget tracking from the command line
//!
//! This library provides the core functionality for the tally budgeting
//! application. It tracks income, fixed and variable expenses, savings
//! goals, credit cards, and loans, and derives an overview with totals,
//! a category breakdown, and advisory insights.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (income, expenses, goals, debts)
//! - `storage`: Key-value JSON storage layer
//! - `services`: Business logic layer
//! - `reports`: Derived totals, category breakdown, and insights
//! - `display`: Terminal formatting
//! - `cli`: Command definitions and handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::TallyError;
