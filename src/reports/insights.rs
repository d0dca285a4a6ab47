//! Advisory insights derived from budget totals
//!
//! Each insight is an independent predicate over the snapshot and its
//! totals. They carry no state and no ordering; any subset can fire.

use crate::models::BudgetBook;

use super::overview::Totals;

/// An advisory flag raised by the budget numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insight {
    /// Spending (expenses + debt payments) exceeds income
    Overspending,
    /// Total debt is more than twice monthly income
    HighDebtLoad,
    /// Fixed expenses take more than half of income
    HighFixedExpenses,
    /// Debt-free with more than 20% of income left over
    HealthySaver,
    /// At least one credit card has an APR above 25%
    HighAprCard,
}

impl Insight {
    /// Evaluate all insight rules against a snapshot
    pub fn evaluate(book: &BudgetBook, totals: &Totals) -> Vec<Insight> {
        let mut insights = Vec::new();

        if totals.remaining.is_negative() {
            insights.push(Insight::Overspending);
        }

        // total_debt > 2 × income
        if totals.total_debt.cents() > 2 * totals.total_income.cents() {
            insights.push(Insight::HighDebtLoad);
        }

        // total_fixed > 0.5 × income, kept in integer cents
        if 2 * totals.total_fixed.cents() > totals.total_income.cents() {
            insights.push(Insight::HighFixedExpenses);
        }

        // remaining > 0.2 × income while carrying no debt at all
        if totals.total_debt.is_zero() && 5 * totals.remaining.cents() > totals.total_income.cents()
        {
            insights.push(Insight::HealthySaver);
        }

        if book.credit_cards.iter().any(|c| c.apr > 25.0) {
            insights.push(Insight::HighAprCard);
        }

        insights
    }

    /// The advisory message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Insight::Overspending => {
                "You're spending more than you earn. Consider reducing expenses or increasing income."
            }
            Insight::HighDebtLoad => {
                "Your total debt is over 2x your monthly income. Focus on debt reduction."
            }
            Insight::HighFixedExpenses => {
                "Fixed expenses are over 50% of income. Look for ways to reduce them."
            }
            Insight::HealthySaver => {
                "Excellent! You're debt-free and saving over 20% of your income."
            }
            Insight::HighAprCard => {
                "You have credit cards with APR over 25%. Consider balance transfer or debt consolidation."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreditCard, Expense, ExpenseKind, ItemId, Money};

    fn insights_for(book: &BudgetBook) -> Vec<Insight> {
        let totals = Totals::compute(book);
        Insight::evaluate(book, &totals)
    }

    #[test]
    fn test_empty_book_raises_nothing() {
        // remaining == 0 and income == 0: no rule fires
        assert!(insights_for(&BudgetBook::default()).is_empty());
    }

    #[test]
    fn test_overspending() {
        let mut rent = Expense::new(ItemId::from_millis(1));
        rent.set_amount(Money::from_dollars(2000));

        let book = BudgetBook::default()
            .with_monthly_income(Money::from_dollars(1500))
            .with_expense(ExpenseKind::Fixed, rent);

        assert!(insights_for(&book).contains(&Insight::Overspending));
    }

    #[test]
    fn test_high_debt_load_is_strictly_over_double() {
        let mut card = CreditCard::new(ItemId::from_millis(1));
        card.set_balance(Money::from_dollars(2000));

        let at_double = BudgetBook::default()
            .with_monthly_income(Money::from_dollars(1000))
            .with_credit_card(card.clone());
        assert!(!insights_for(&at_double).contains(&Insight::HighDebtLoad));

        card.set_balance(Money::from_cents(200001));
        let over_double = BudgetBook::default()
            .with_monthly_income(Money::from_dollars(1000))
            .with_credit_card(card);
        assert!(insights_for(&over_double).contains(&Insight::HighDebtLoad));
    }

    #[test]
    fn test_high_fixed_expenses() {
        let mut rent = Expense::new(ItemId::from_millis(1));
        rent.set_amount(Money::from_dollars(1600));

        let book = BudgetBook::default()
            .with_monthly_income(Money::from_dollars(3000))
            .with_expense(ExpenseKind::Fixed, rent);

        assert!(insights_for(&book).contains(&Insight::HighFixedExpenses));
    }

    #[test]
    fn test_healthy_saver_requires_debt_free() {
        let book = BudgetBook::default().with_monthly_income(Money::from_dollars(3000));
        assert!(insights_for(&book).contains(&Insight::HealthySaver));

        // Same remaining but carrying a card balance: rule must not fire
        let mut card = CreditCard::new(ItemId::from_millis(1));
        card.set_balance(Money::from_dollars(100));
        let indebted = BudgetBook::default()
            .with_monthly_income(Money::from_dollars(3000))
            .with_credit_card(card);
        assert!(!insights_for(&indebted).contains(&Insight::HealthySaver));
    }

    #[test]
    fn test_high_apr_card() {
        let mut card = CreditCard::new(ItemId::from_millis(1));
        card.set_apr(25.0);

        let at_threshold = BudgetBook::default().with_credit_card(card.clone());
        assert!(!insights_for(&at_threshold).contains(&Insight::HighAprCard));

        card.set_apr(26.9);
        let over = BudgetBook::default().with_credit_card(card);
        assert!(insights_for(&over).contains(&Insight::HighAprCard));
    }

    #[test]
    fn test_rules_are_independent() {
        // Overspending while holding a high-APR card: both fire
        let mut rent = Expense::new(ItemId::from_millis(1));
        rent.set_amount(Money::from_dollars(2000));

        let mut card = CreditCard::new(ItemId::from_millis(2));
        card.set_apr(29.99);
        card.set_balance(Money::from_dollars(5000));

        let book = BudgetBook::default()
            .with_monthly_income(Money::from_dollars(1000))
            .with_expense(ExpenseKind::Fixed, rent)
            .with_credit_card(card);

        let insights = insights_for(&book);
        assert!(insights.contains(&Insight::Overspending));
        assert!(insights.contains(&Insight::HighAprCard));
        assert!(insights.contains(&Insight::HighDebtLoad));
        assert!(insights.contains(&Insight::HighFixedExpenses));
        assert!(!insights.contains(&Insight::HealthySaver));
    }
}
