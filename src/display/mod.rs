//! Terminal display formatting

pub mod debt;
pub mod expense;
pub mod income;
pub mod savings;
