//! Budget book: the full application state snapshot
//!
//! Owns the five collections (income, expenses, savings goals, credit cards,
//! loans). Every update operation is pure: it consumes the snapshot and
//! returns a new one, so totals and insights can be recomputed from any
//! snapshot without side effects.

use serde::{Deserialize, Serialize};

use super::debt::{CreditCard, Loan};
use super::expense::{Expense, ExpenseKind, Expenses};
use super::ids::ItemId;
use super::income::{Income, IncomeSource};
use super::money::Money;
use super::savings::SavingsGoal;

/// The five collections that make up the budget state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetBook {
    #[serde(default)]
    pub income: Income,
    #[serde(default)]
    pub expenses: Expenses,
    #[serde(default)]
    pub savings: Vec<SavingsGoal>,
    #[serde(default)]
    pub credit_cards: Vec<CreditCard>,
    #[serde(default)]
    pub loans: Vec<Loan>,
}

impl BudgetBook {
    // --- income ---

    /// Set the monthly income figure
    pub fn with_monthly_income(mut self, amount: Money) -> Self {
        self.income.monthly = amount;
        self
    }

    /// Append an additional income source
    pub fn with_income_source(mut self, source: IncomeSource) -> Self {
        self.income.additional.push(source);
        self
    }

    /// Update an income source in place via a setter closure
    pub fn update_income_source(
        mut self,
        id: ItemId,
        f: impl FnOnce(&mut IncomeSource),
    ) -> (Self, bool) {
        let found = apply_by_id(&mut self.income.additional, id, |s| s.id, f);
        (self, found)
    }

    /// Remove an income source by id; removes exactly one entry
    pub fn without_income_source(mut self, id: ItemId) -> (Self, bool) {
        let removed = remove_by_id(&mut self.income.additional, id, |s| s.id);
        (self, removed)
    }

    // --- expenses ---

    /// Append an expense to the fixed or variable list
    pub fn with_expense(mut self, kind: ExpenseKind, expense: Expense) -> Self {
        self.expenses.list_mut(kind).push(expense);
        self
    }

    /// Update an expense in place via a setter closure
    pub fn update_expense(
        mut self,
        kind: ExpenseKind,
        id: ItemId,
        f: impl FnOnce(&mut Expense),
    ) -> (Self, bool) {
        let found = apply_by_id(self.expenses.list_mut(kind), id, |e| e.id, f);
        (self, found)
    }

    /// Remove an expense by id from the given list
    pub fn without_expense(mut self, kind: ExpenseKind, id: ItemId) -> (Self, bool) {
        let removed = remove_by_id(self.expenses.list_mut(kind), id, |e| e.id);
        (self, removed)
    }

    // --- savings goals ---

    pub fn with_savings_goal(mut self, goal: SavingsGoal) -> Self {
        self.savings.push(goal);
        self
    }

    pub fn update_savings_goal(
        mut self,
        id: ItemId,
        f: impl FnOnce(&mut SavingsGoal),
    ) -> (Self, bool) {
        let found = apply_by_id(&mut self.savings, id, |g| g.id, f);
        (self, found)
    }

    pub fn without_savings_goal(mut self, id: ItemId) -> (Self, bool) {
        let removed = remove_by_id(&mut self.savings, id, |g| g.id);
        (self, removed)
    }

    // --- credit cards ---

    pub fn with_credit_card(mut self, card: CreditCard) -> Self {
        self.credit_cards.push(card);
        self
    }

    pub fn update_credit_card(
        mut self,
        id: ItemId,
        f: impl FnOnce(&mut CreditCard),
    ) -> (Self, bool) {
        let found = apply_by_id(&mut self.credit_cards, id, |c| c.id, f);
        (self, found)
    }

    pub fn without_credit_card(mut self, id: ItemId) -> (Self, bool) {
        let removed = remove_by_id(&mut self.credit_cards, id, |c| c.id);
        (self, removed)
    }

    // --- loans ---

    pub fn with_loan(mut self, loan: Loan) -> Self {
        self.loans.push(loan);
        self
    }

    pub fn update_loan(mut self, id: ItemId, f: impl FnOnce(&mut Loan)) -> (Self, bool) {
        let found = apply_by_id(&mut self.loans, id, |l| l.id, f);
        (self, found)
    }

    pub fn without_loan(mut self, id: ItemId) -> (Self, bool) {
        let removed = remove_by_id(&mut self.loans, id, |l| l.id);
        (self, removed)
    }
}

/// Apply a closure to the item with the given id, if present
fn apply_by_id<T>(
    items: &mut [T],
    id: ItemId,
    id_of: impl Fn(&T) -> ItemId,
    f: impl FnOnce(&mut T),
) -> bool {
    match items.iter_mut().find(|item| id_of(item) == id) {
        Some(item) => {
            f(item);
            true
        }
        None => false,
    }
}

/// Remove the item with the given id
///
/// Ids are unique, so this removes at most one entry; the order of the
/// remaining items is unchanged.
fn remove_by_id<T>(items: &mut Vec<T>, id: ItemId, id_of: impl Fn(&T) -> ItemId) -> bool {
    match items.iter().position(|item| id_of(item) == id) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}
