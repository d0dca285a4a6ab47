//! Expense models
//!
//! Expenses are split into two lists: fixed (rent, insurance) and variable
//! (groceries, entertainment). Each expense may carry a category from a
//! fixed set; uncategorized expenses aggregate under "Other".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ids::ItemId;
use super::money::Money;

/// The fixed expense category set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Housing,
    Transportation,
    Food,
    Utilities,
    Entertainment,
    Healthcare,
    Insurance,
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 8] = [
        Category::Housing,
        Category::Transportation,
        Category::Food,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Insurance,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Transportation => "Transportation",
            Category::Food => "Food",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Insurance => "Insurance",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "housing" => Ok(Category::Housing),
            "transportation" => Ok(Category::Transportation),
            "food" => Ok(Category::Food),
            "utilities" => Ok(Category::Utilities),
            "entertainment" => Ok(Category::Entertainment),
            "healthcare" => Ok(Category::Healthcare),
            "insurance" => Ok(Category::Insurance),
            "other" => Ok(Category::Other),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// Error for unrecognized category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

/// Whether an expense is recurring-fixed or discretionary-variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    Fixed,
    Variable,
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseKind::Fixed => write!(f, "fixed"),
            ExpenseKind::Variable => write!(f, "variable"),
        }
    }
}

impl FromStr for ExpenseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" => Ok(ExpenseKind::Fixed),
            "variable" => Ok(ExpenseKind::Variable),
            _ => Err(format!("Unknown expense kind: {} (use fixed|variable)", s)),
        }
    }
}

/// A single expense line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: Money,
    #[serde(default)]
    pub category: Option<Category>,
}

impl Expense {
    /// Create a new expense with zero/empty defaults
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            amount: Money::zero(),
            category: None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    /// The category used for aggregation: empty categories count as Other
    pub fn category_or_other(&self) -> Category {
        self.category.unwrap_or(Category::Other)
    }
}

/// The two expense lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expenses {
    #[serde(default)]
    pub fixed: Vec<Expense>,
    #[serde(default)]
    pub variable: Vec<Expense>,
}

impl Expenses {
    /// Get the list for a kind
    pub fn list(&self, kind: ExpenseKind) -> &Vec<Expense> {
        match kind {
            ExpenseKind::Fixed => &self.fixed,
            ExpenseKind::Variable => &self.variable,
        }
    }

    /// Get the list for a kind, mutably
    pub fn list_mut(&mut self, kind: ExpenseKind) -> &mut Vec<Expense> {
        match kind {
            ExpenseKind::Fixed => &mut self.fixed,
            ExpenseKind::Variable => &mut self.variable,
        }
    }

    /// Iterate over both lists, fixed first
    pub fn iter_all(&self) -> impl Iterator<Item = &Expense> {
        self.fixed.iter().chain(self.variable.iter())
    }

    /// Sum of the fixed list
    pub fn total_fixed(&self) -> Money {
        self.fixed.iter().map(|e| e.amount).sum()
    }

    /// Sum of the variable list
    pub fn total_variable(&self) -> Money {
        self.variable.iter().map(|e| e.amount).sum()
    }
}
