//! Creation-timestamp item ids
//!
//! Every list item gets an id derived from its creation time in milliseconds
//! since the Unix epoch. A process-wide floor keeps ids strictly increasing,
//! so two items created within the same millisecond still get distinct ids
//! and ids are never reused.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Identifier for a budget list item (income source, expense, card, loan, goal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Issue a new id from the current wall clock
    pub fn now() -> Self {
        let candidate = Utc::now().timestamp_millis();
        let previous = LAST_ISSUED
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(candidate.max(last + 1))
            })
            .unwrap_or(0);
        Self(candidate.max(previous + 1))
    }

    /// Create an id from a raw millisecond timestamp
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Get the underlying millisecond timestamp
    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let a = ItemId::now();
        let b = ItemId::now();
        let c = ItemId::now();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_display_and_parse() {
        let id = ItemId::from_millis(1700000000000);
        assert_eq!(id.to_string(), "1700000000000");
        assert_eq!("1700000000000".parse::<ItemId>().unwrap(), id);
    }

    #[test]
    fn test_serialization() {
        let id = ItemId::from_millis(1700000000000);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "1700000000000");

        let deserialized: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_same_millisecond_still_distinct() {
        let ids: Vec<ItemId> = (0..100).map(|_| ItemId::now()).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
