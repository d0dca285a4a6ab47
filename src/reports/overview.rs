//! Budget overview: derived totals and category breakdown
//!
//! Everything here is a pure function of a [`BudgetBook`] snapshot, so the
//! numbers can be recomputed after every edit and unit tested without any
//! storage or terminal involved.

use crate::models::{BudgetBook, Category, Expenses, Money};

use super::insights::Insight;

/// All derived totals for a budget snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub total_income: Money,
    pub total_fixed: Money,
    pub total_variable: Money,
    pub total_expenses: Money,
    pub total_credit_card_debt: Money,
    pub total_credit_card_payments: Money,
    pub total_loan_debt: Money,
    pub total_loan_payments: Money,
    pub total_debt: Money,
    pub total_debt_payments: Money,
    pub total_savings_goal: Money,
    /// Income minus expenses minus debt payments; negative means overspending
    pub remaining: Money,
}

impl Totals {
    /// Compute all totals from a snapshot
    pub fn compute(book: &BudgetBook) -> Self {
        let total_income = book.income.total();
        let total_fixed = book.expenses.total_fixed();
        let total_variable = book.expenses.total_variable();
        let total_expenses = total_fixed + total_variable;

        let total_credit_card_debt = book.credit_cards.iter().map(|c| c.balance).sum();
        let total_credit_card_payments = book.credit_cards.iter().map(|c| c.min_payment).sum();
        let total_loan_debt = book.loans.iter().map(|l| l.balance).sum();
        let total_loan_payments = book.loans.iter().map(|l| l.payment).sum();
        let total_debt = total_credit_card_debt + total_loan_debt;
        let total_debt_payments = total_credit_card_payments + total_loan_payments;

        let total_savings_goal = book.savings.iter().map(|g| g.target).sum();
        let remaining = total_income - total_expenses - total_debt_payments;

        Self {
            total_income,
            total_fixed,
            total_variable,
            total_expenses,
            total_credit_card_debt,
            total_credit_card_payments,
            total_loan_debt,
            total_loan_payments,
            total_debt,
            total_debt_payments,
            total_savings_goal,
            remaining,
        }
    }

    /// Remaining income as a share of total income, for display
    pub fn remaining_percent_of_income(&self) -> f64 {
        if self.total_income.is_positive() {
            self.remaining.cents() as f64 / self.total_income.cents() as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// One row of the category breakdown: a category and its summed amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: Category,
    pub amount: Money,
}

/// Group all expenses (fixed and variable) by category
///
/// Uncategorized expenses fall under Other. Categories with no spending are
/// omitted; rows come out in the fixed category-set order.
pub fn expenses_by_category(expenses: &Expenses) -> Vec<CategoryRow> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let amount: Money = expenses
                .iter_all()
                .filter(|e| e.category_or_other() == category)
                .map(|e| e.amount)
                .sum();
            if amount.is_zero() {
                None
            } else {
                Some(CategoryRow { category, amount })
            }
        })
        .collect()
}

/// The full overview report: totals, category breakdown, insights
#[derive(Debug, Clone)]
pub struct OverviewReport {
    pub totals: Totals,
    pub by_category: Vec<CategoryRow>,
    pub insights: Vec<Insight>,
}

impl OverviewReport {
    /// Generate the overview for a snapshot
    pub fn generate(book: &BudgetBook) -> Self {
        let totals = Totals::compute(book);
        Self {
            by_category: expenses_by_category(&book.expenses),
            insights: Insight::evaluate(book, &totals),
            totals,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        let t = &self.totals;

        output.push_str("Budget Overview\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        output.push_str(&format!("{:<28} {:>15}\n", "Total Income", t.total_income));
        output.push_str(&format!(
            "{:<28} {:>15}\n",
            "Total Expenses", t.total_expenses
        ));
        output.push_str(&format!(
            "  {:<26} {:>15}\n",
            "Fixed", t.total_fixed
        ));
        output.push_str(&format!(
            "  {:<26} {:>15}\n",
            "Variable", t.total_variable
        ));
        output.push_str(&format!("{:<28} {:>15}\n", "Total Debt", t.total_debt));
        output.push_str(&format!(
            "  {:<26} {:>15}\n",
            "Credit cards", t.total_credit_card_debt
        ));
        output.push_str(&format!("  {:<26} {:>15}\n", "Loans", t.total_loan_debt));
        output.push_str(&format!(
            "{:<28} {:>15}\n",
            "Monthly Debt Payments", t.total_debt_payments
        ));
        output.push_str(&format!(
            "{:<28} {:>15}\n",
            "Savings Goal Target", t.total_savings_goal
        ));
        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>15}\n",
            "After Debt Payments", t.remaining
        ));
        output.push_str(&format!(
            "{:<28} {:>14.1}%\n",
            "Share of Income",
            t.remaining_percent_of_income()
        ));

        if !self.by_category.is_empty() {
            output.push('\n');
            output.push_str("Expenses by Category\n");
            output.push_str(&"-".repeat(50));
            output.push('\n');
            for row in &self.by_category {
                output.push_str(&format!(
                    "{:<28} {:>15}\n",
                    row.category.name(),
                    row.amount
                ));
            }
        }

        if !self.insights.is_empty() {
            output.push('\n');
            output.push_str("Quick Insights\n");
            output.push_str(&"-".repeat(50));
            output.push('\n');
            for insight in &self.insights {
                output.push_str(&format!("- {}\n", insight.message()));
            }
        }

        output
    }
}
