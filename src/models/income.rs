//! Income model
//!
//! Tracks a single monthly income figure plus any number of additional
//! income sources (side jobs, freelance, etc.).

use serde::{Deserialize, Serialize};

use super::ids::ItemId;
use super::money::Money;

/// An additional income source beyond the monthly salary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: Money,
}

impl IncomeSource {
    /// Create a new income source with zero/empty defaults
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            amount: Money::zero(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
    }
}

/// The user's income: a monthly figure plus additional sources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    #[serde(default)]
    pub monthly: Money,
    #[serde(default)]
    pub additional: Vec<IncomeSource>,
}

impl Income {
    /// Total income: monthly plus the sum of all additional sources
    pub fn total(&self) -> Money {
        self.monthly + self.additional.iter().map(|s| s.amount).sum()
    }
}
