//! Budget book controller
//!
//! Owns the in-memory snapshot and mirrors it to storage after every edit.
//! Persistence is fire-and-forget: a failed write is reported on stderr but
//! never fails the edit, and the in-memory state stays authoritative for the
//! rest of the session.

use crate::error::{TallyError, TallyResult};
use crate::models::{
    BudgetBook, CreditCard, Expense, ExpenseKind, Income, ItemId, Loan, Money, SavingsGoal,
};
use crate::models::IncomeSource;
use crate::storage::Storage;

/// Which collection an edit touched, for targeted persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collection {
    Income,
    Expenses,
    Savings,
    CreditCards,
    Loans,
}

/// Controller owning the budget snapshot and its persistence
pub struct BookService<'a> {
    storage: &'a Storage,
    book: BudgetBook,
}

impl<'a> BookService<'a> {
    /// Rehydrate the book from storage; absent data starts empty
    pub fn load(storage: &'a Storage) -> Self {
        Self {
            book: storage.load_book(),
            storage,
        }
    }

    /// The current snapshot
    pub fn book(&self) -> &BudgetBook {
        &self.book
    }

    /// Mirror one collection to storage, logging instead of failing
    fn persist(&self, collection: Collection) {
        let result = match collection {
            Collection::Income => self.storage.save_income(&self.book.income),
            Collection::Expenses => self.storage.save_expenses(&self.book.expenses),
            Collection::Savings => self.storage.save_savings(&self.book.savings),
            Collection::CreditCards => self.storage.save_credit_cards(&self.book.credit_cards),
            Collection::Loans => self.storage.save_loans(&self.book.loans),
        };

        if let Err(e) = result {
            eprintln!("warning: failed to save changes: {}", e);
        }
    }

    /// Replace the snapshot and mirror the touched collection
    fn commit(&mut self, book: BudgetBook, collection: Collection) {
        self.book = book;
        self.persist(collection);
    }

    // --- income ---

    pub fn set_monthly_income(&mut self, amount: Money) -> &Income {
        let book = self.book.clone().with_monthly_income(amount);
        self.commit(book, Collection::Income);
        &self.book.income
    }

    /// Add an additional income source; returns its new id
    pub fn add_income_source(&mut self, name: Option<String>, amount: Option<Money>) -> ItemId {
        let mut source = IncomeSource::new(ItemId::now());
        if let Some(name) = name {
            source.set_name(name);
        }
        if let Some(amount) = amount {
            source.set_amount(amount);
        }
        let id = source.id;
        let book = self.book.clone().with_income_source(source);
        self.commit(book, Collection::Income);
        id
    }

    pub fn update_income_source(
        &mut self,
        id: ItemId,
        name: Option<String>,
        amount: Option<Money>,
    ) -> TallyResult<()> {
        let (book, found) = self.book.clone().update_income_source(id, |source| {
            if let Some(name) = name {
                source.set_name(name);
            }
            if let Some(amount) = amount {
                source.set_amount(amount);
            }
        });
        if !found {
            return Err(TallyError::income_source_not_found(id.to_string()));
        }
        self.commit(book, Collection::Income);
        Ok(())
    }

    pub fn remove_income_source(&mut self, id: ItemId) -> TallyResult<()> {
        let (book, removed) = self.book.clone().without_income_source(id);
        if !removed {
            return Err(TallyError::income_source_not_found(id.to_string()));
        }
        self.commit(book, Collection::Income);
        Ok(())
    }

    // --- expenses ---

    /// Add an expense to the fixed or variable list; returns its new id
    pub fn add_expense(
        &mut self,
        kind: ExpenseKind,
        name: Option<String>,
        amount: Option<Money>,
        category: Option<crate::models::Category>,
    ) -> ItemId {
        let mut expense = Expense::new(ItemId::now());
        if let Some(name) = name {
            expense.set_name(name);
        }
        if let Some(amount) = amount {
            expense.set_amount(amount);
        }
        if category.is_some() {
            expense.set_category(category);
        }
        let id = expense.id;
        let book = self.book.clone().with_expense(kind, expense);
        self.commit(book, Collection::Expenses);
        id
    }

    pub fn update_expense(
        &mut self,
        kind: ExpenseKind,
        id: ItemId,
        name: Option<String>,
        amount: Option<Money>,
        category: Option<crate::models::Category>,
    ) -> TallyResult<()> {
        let (book, found) = self.book.clone().update_expense(kind, id, |expense| {
            if let Some(name) = name {
                expense.set_name(name);
            }
            if let Some(amount) = amount {
                expense.set_amount(amount);
            }
            if category.is_some() {
                expense.set_category(category);
            }
        });
        if !found {
            return Err(TallyError::expense_not_found(id.to_string()));
        }
        self.commit(book, Collection::Expenses);
        Ok(())
    }

    pub fn remove_expense(&mut self, kind: ExpenseKind, id: ItemId) -> TallyResult<()> {
        let (book, removed) = self.book.clone().without_expense(kind, id);
        if !removed {
            return Err(TallyError::expense_not_found(id.to_string()));
        }
        self.commit(book, Collection::Expenses);
        Ok(())
    }

    // --- savings goals ---

    pub fn add_savings_goal(
        &mut self,
        name: Option<String>,
        target: Option<Money>,
        current: Option<Money>,
    ) -> ItemId {
        let mut goal = SavingsGoal::new(ItemId::now());
        if let Some(name) = name {
            goal.set_name(name);
        }
        if let Some(target) = target {
            goal.set_target(target);
        }
        if let Some(current) = current {
            goal.set_current(current);
        }
        let id = goal.id;
        let book = self.book.clone().with_savings_goal(goal);
        self.commit(book, Collection::Savings);
        id
    }

    pub fn update_savings_goal(
        &mut self,
        id: ItemId,
        name: Option<String>,
        target: Option<Money>,
        current: Option<Money>,
    ) -> TallyResult<()> {
        let (book, found) = self.book.clone().update_savings_goal(id, |goal| {
            if let Some(name) = name {
                goal.set_name(name);
            }
            if let Some(target) = target {
                goal.set_target(target);
            }
            if let Some(current) = current {
                goal.set_current(current);
            }
        });
        if !found {
            return Err(TallyError::goal_not_found(id.to_string()));
        }
        self.commit(book, Collection::Savings);
        Ok(())
    }

    pub fn remove_savings_goal(&mut self, id: ItemId) -> TallyResult<()> {
        let (book, removed) = self.book.clone().without_savings_goal(id);
        if !removed {
            return Err(TallyError::goal_not_found(id.to_string()));
        }
        self.commit(book, Collection::Savings);
        Ok(())
    }

    // --- credit cards ---

    pub fn add_credit_card(
        &mut self,
        name: Option<String>,
        balance: Option<Money>,
        min_payment: Option<Money>,
        apr: Option<f64>,
        due_date: Option<String>,
    ) -> ItemId {
        let mut card = CreditCard::new(ItemId::now());
        apply_card_fields(&mut card, name, balance, min_payment, apr, due_date);
        let id = card.id;
        let book = self.book.clone().with_credit_card(card);
        self.commit(book, Collection::CreditCards);
        id
    }

    pub fn update_credit_card(
        &mut self,
        id: ItemId,
        name: Option<String>,
        balance: Option<Money>,
        min_payment: Option<Money>,
        apr: Option<f64>,
        due_date: Option<String>,
    ) -> TallyResult<()> {
        let (book, found) = self.book.clone().update_credit_card(id, |card| {
            apply_card_fields(card, name, balance, min_payment, apr, due_date);
        });
        if !found {
            return Err(TallyError::card_not_found(id.to_string()));
        }
        self.commit(book, Collection::CreditCards);
        Ok(())
    }

    pub fn remove_credit_card(&mut self, id: ItemId) -> TallyResult<()> {
        let (book, removed) = self.book.clone().without_credit_card(id);
        if !removed {
            return Err(TallyError::card_not_found(id.to_string()));
        }
        self.commit(book, Collection::CreditCards);
        Ok(())
    }

    // --- loans ---

    pub fn add_loan(
        &mut self,
        name: Option<String>,
        balance: Option<Money>,
        payment: Option<Money>,
        apr: Option<f64>,
        due_date: Option<String>,
        frequency: Option<crate::models::PaymentFrequency>,
    ) -> ItemId {
        let mut loan = Loan::new(ItemId::now());
        apply_loan_fields(&mut loan, name, balance, payment, apr, due_date, frequency);
        let id = loan.id;
        let book = self.book.clone().with_loan(loan);
        self.commit(book, Collection::Loans);
        id
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update_loan(
        &mut self,
        id: ItemId,
        name: Option<String>,
        balance: Option<Money>,
        payment: Option<Money>,
        apr: Option<f64>,
        due_date: Option<String>,
        frequency: Option<crate::models::PaymentFrequency>,
    ) -> TallyResult<()> {
        let (book, found) = self.book.clone().update_loan(id, |loan| {
            apply_loan_fields(loan, name, balance, payment, apr, due_date, frequency);
        });
        if !found {
            return Err(TallyError::loan_not_found(id.to_string()));
        }
        self.commit(book, Collection::Loans);
        Ok(())
    }

    pub fn remove_loan(&mut self, id: ItemId) -> TallyResult<()> {
        let (book, removed) = self.book.clone().without_loan(id);
        if !removed {
            return Err(TallyError::loan_not_found(id.to_string()));
        }
        self.commit(book, Collection::Loans);
        Ok(())
    }
}

fn apply_card_fields(
    card: &mut CreditCard,
    name: Option<String>,
    balance: Option<Money>,
    min_payment: Option<Money>,
    apr: Option<f64>,
    due_date: Option<String>,
) {
    if let Some(name) = name {
        card.set_name(name);
    }
    if let Some(balance) = balance {
        card.set_balance(balance);
    }
    if let Some(min_payment) = min_payment {
        card.set_min_payment(min_payment);
    }
    if let Some(apr) = apr {
        card.set_apr(apr);
    }
    if let Some(due_date) = due_date {
        card.set_due_date(due_date);
    }
}

fn apply_loan_fields(
    loan: &mut Loan,
    name: Option<String>,
    balance: Option<Money>,
    payment: Option<Money>,
    apr: Option<f64>,
    due_date: Option<String>,
    frequency: Option<crate::models::PaymentFrequency>,
) {
    if let Some(name) = name {
        loan.set_name(name);
    }
    if let Some(balance) = balance {
        loan.set_balance(balance);
    }
    if let Some(payment) = payment {
        loan.set_payment(payment);
    }
    if let Some(apr) = apr {
        loan.set_apr(apr);
    }
    if let Some(due_date) = due_date {
        loan.set_due_date(due_date);
    }
    if let Some(frequency) = frequency {
        loan.set_frequency(frequency);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::storage::{MemoryStore, Storage};

    fn memory_storage() -> Storage {
        Storage::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_edits_are_mirrored_to_storage() {
        let storage = memory_storage();

        {
            let mut service = BookService::load(&storage);
            service.set_monthly_income(Money::from_dollars(3000));
            service.add_expense(
                ExpenseKind::Fixed,
                Some("Rent".into()),
                Some(Money::from_dollars(1200)),
                Some(Category::Housing),
            );
        }

        // A fresh service over the same storage sees the persisted state
        let reloaded = BookService::load(&storage);
        assert_eq!(reloaded.book().income.monthly, Money::from_dollars(3000));
        assert_eq!(reloaded.book().expenses.fixed.len(), 1);
        assert_eq!(reloaded.book().expenses.fixed[0].name, "Rent");
    }

    #[test]
    fn test_add_then_update_field_by_field() {
        let storage = memory_storage();
        let mut service = BookService::load(&storage);

        // Add with defaults, then fill fields one edit at a time
        let id = service.add_credit_card(None, None, None, None, None);
        assert_eq!(service.book().credit_cards[0].balance, Money::zero());

        service
            .update_credit_card(id, Some("Visa".into()), None, None, None, None)
            .unwrap();
        service
            .update_credit_card(id, None, Some(Money::from_dollars(500)), None, None, None)
            .unwrap();
        service
            .update_credit_card(id, None, None, None, Some(19.99), None)
            .unwrap();

        let card = &service.book().credit_cards[0];
        assert_eq!(card.name, "Visa");
        assert_eq!(card.balance, Money::from_dollars(500));
        assert_eq!(card.apr, 19.99);
        // Untouched fields keep their defaults
        assert_eq!(card.min_payment, Money::zero());
    }

    #[test]
    fn test_remove_unknown_id_is_not_found() {
        let storage = memory_storage();
        let mut service = BookService::load(&storage);

        let err = service.remove_loan(ItemId::from_millis(123)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_ids_are_unique_across_adds() {
        let storage = memory_storage();
        let mut service = BookService::load(&storage);

        let a = service.add_savings_goal(None, None, None);
        let b = service.add_savings_goal(None, None, None);
        let c = service.add_loan(None, None, None, None, None, None);

        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn test_delete_only_touches_its_collection() {
        let storage = memory_storage();
        let mut service = BookService::load(&storage);

        service.add_income_source(Some("Freelance".into()), Some(Money::from_dollars(400)));
        let goal_id = service.add_savings_goal(Some("Vacation".into()), None, None);

        service.remove_savings_goal(goal_id).unwrap();

        assert!(service.book().savings.is_empty());
        assert_eq!(service.book().income.additional.len(), 1);
    }
}
