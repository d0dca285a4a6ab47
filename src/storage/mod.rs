//! Storage layer for tally-cli
//!
//! Each of the five budget collections is mirrored to the key-value store
//! as a whole JSON document under a fixed key. Absence of a key means first
//! run, not failure; an unreadable or unparsable value falls back to an
//! empty collection with a warning on stderr.

pub mod file_store;
pub mod kv;

pub use file_store::FileStore;
pub use kv::{KeyValueStore, MemoryStore};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::TallyResult;
use crate::models::{BudgetBook, CreditCard, Expenses, Income, Loan, SavingsGoal};

/// Storage key for the income collection
pub const KEY_INCOME: &str = "budget-income";
/// Storage key for the expense lists
pub const KEY_EXPENSES: &str = "budget-expenses";
/// Storage key for savings goals
pub const KEY_SAVINGS: &str = "budget-savings";
/// Storage key for credit cards
pub const KEY_CREDIT_CARDS: &str = "budget-creditcards";
/// Storage key for loans
pub const KEY_LOANS: &str = "budget-loans";

/// Typed access to the five budget collections in a key-value store
pub struct Storage {
    store: Box<dyn KeyValueStore>,
}

impl Storage {
    /// Create storage over any key-value backend
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load one collection, treating absence and parse failures as defaults
    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.store.get(key) {
            Ok(Some(value)) => serde_json::from_str(&value).unwrap_or_else(|e| {
                eprintln!("warning: ignoring unreadable data for {}: {}", key, e);
                T::default()
            }),
            Ok(None) => T::default(),
            Err(e) => {
                eprintln!("warning: failed to load {}: {}", key, e);
                T::default()
            }
        }
    }

    /// Serialize and store one collection under its key
    fn save<T: Serialize>(&self, key: &str, value: &T) -> TallyResult<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json)
    }

    pub fn load_income(&self) -> Income {
        self.load_or_default(KEY_INCOME)
    }

    pub fn save_income(&self, income: &Income) -> TallyResult<()> {
        self.save(KEY_INCOME, income)
    }

    pub fn load_expenses(&self) -> Expenses {
        self.load_or_default(KEY_EXPENSES)
    }

    pub fn save_expenses(&self, expenses: &Expenses) -> TallyResult<()> {
        self.save(KEY_EXPENSES, expenses)
    }

    pub fn load_savings(&self) -> Vec<SavingsGoal> {
        self.load_or_default(KEY_SAVINGS)
    }

    pub fn save_savings(&self, savings: &[SavingsGoal]) -> TallyResult<()> {
        self.save(KEY_SAVINGS, &savings)
    }

    pub fn load_credit_cards(&self) -> Vec<CreditCard> {
        self.load_or_default(KEY_CREDIT_CARDS)
    }

    pub fn save_credit_cards(&self, cards: &[CreditCard]) -> TallyResult<()> {
        self.save(KEY_CREDIT_CARDS, &cards)
    }

    pub fn load_loans(&self) -> Vec<Loan> {
        self.load_or_default(KEY_LOANS)
    }

    pub fn save_loans(&self, loans: &[Loan]) -> TallyResult<()> {
        self.save(KEY_LOANS, &loans)
    }

    /// Rehydrate the full budget book; missing collections start empty
    pub fn load_book(&self) -> BudgetBook {
        BudgetBook {
            income: self.load_income(),
            expenses: self.load_expenses(),
            savings: self.load_savings(),
            credit_cards: self.load_credit_cards(),
            loans: self.load_loans(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseKind, ItemId, Money};
    use tempfile::TempDir;

    fn memory_storage() -> Storage {
        Storage::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_first_run_loads_defaults() {
        let storage = memory_storage();
        let book = storage.load_book();

        assert_eq!(book, BudgetBook::default());
    }

    #[test]
    fn test_round_trip_each_collection() {
        let storage = memory_storage();

        let mut income = Income::default();
        income.monthly = Money::from_dollars(3000);
        storage.save_income(&income).unwrap();
        assert_eq!(storage.load_income(), income);

        let mut card = CreditCard::new(ItemId::from_millis(1));
        card.set_balance(Money::from_dollars(500));
        card.set_apr(19.99);
        let cards = vec![card];
        storage.save_credit_cards(&cards).unwrap();
        assert_eq!(storage.load_credit_cards(), cards);

        let mut loan = Loan::new(ItemId::from_millis(2));
        loan.set_payment(Money::from_dollars(250));
        let loans = vec![loan];
        storage.save_loans(&loans).unwrap();
        assert_eq!(storage.load_loans(), loans);

        let mut goal = SavingsGoal::new(ItemId::from_millis(3));
        goal.set_target(Money::from_dollars(1000));
        let savings = vec![goal];
        storage.save_savings(&savings).unwrap();
        assert_eq!(storage.load_savings(), savings);

        let mut expenses = Expenses::default();
        let mut e = Expense::new(ItemId::from_millis(4));
        e.set_amount(Money::from_dollars(75));
        expenses.list_mut(ExpenseKind::Variable).push(e);
        storage.save_expenses(&expenses).unwrap();
        assert_eq!(storage.load_expenses(), expenses);
    }

    #[test]
    fn test_corrupt_value_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set(KEY_LOANS, "not json at all").unwrap();

        let storage = Storage::new(Box::new(store));
        assert!(storage.load_loans().is_empty());
    }

    #[test]
    fn test_file_backed_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(Box::new(FileStore::new(temp_dir.path().to_path_buf())));

        let book = BudgetBook::default().with_monthly_income(Money::from_dollars(4200));
        storage.save_income(&book.income).unwrap();

        // A fresh storage over the same directory sees the same data
        let reopened = Storage::new(Box::new(FileStore::new(temp_dir.path().to_path_buf())));
        assert_eq!(reopened.load_income(), book.income);
    }
}
