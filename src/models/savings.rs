//! Savings goal model
//!
//! Each goal tracks a target amount and the amount saved so far.

use serde::{Deserialize, Serialize};

use super::ids::ItemId;
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub target: Money,
    #[serde(default)]
    pub current: Money,
}

impl SavingsGoal {
    /// Create a new savings goal with zero/empty defaults
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            target: Money::zero(),
            current: Money::zero(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_target(&mut self, target: Money) {
        self.target = target;
    }

    pub fn set_current(&mut self, current: Money) {
        self.current = current;
    }

    /// Progress toward the goal as a percentage (0 when no target is set)
    pub fn progress(&self) -> f64 {
        if self.target.is_positive() {
            self.current.cents() as f64 / self.target.cents() as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Progress clamped at 100 for display (progress bars never overflow)
    pub fn progress_clamped(&self) -> f64 {
        self.progress().min(100.0)
    }
}
