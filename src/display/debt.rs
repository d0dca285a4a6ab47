//! Credit card and loan display formatting
//!
//! Shows the per-item derived figures alongside the raw fields: estimated
//! monthly interest and payoff time for cards, payoff count for loans.

use crate::models::{CreditCard, Loan, Money};

/// Format the credit card list with derived figures and totals
pub fn format_credit_cards(cards: &[CreditCard]) -> String {
    if cards.is_empty() {
        return "No credit cards yet. Add one with 'tally card add'.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Credit Cards\n\n");

    for card in cards {
        let name = if card.name.is_empty() {
            "Unnamed Card"
        } else {
            &card.name
        };
        let due = if card.due_date.is_empty() {
            "N/A"
        } else {
            &card.due_date
        };

        output.push_str(&format!("{} (id: {})\n", name, card.id));
        output.push_str(&format!(
            "  Balance: {}  Min Payment: {}  APR: {:.2}%  Due: {}\n",
            card.balance, card.min_payment, card.apr, due
        ));
        output.push_str(&format!(
            "  Monthly Interest: ~{}  Payoff at min payment: {} months\n",
            card.monthly_interest(),
            card.payoff_months()
        ));
    }

    let total_balance: Money = cards.iter().map(|c| c.balance).sum();
    let total_payments: Money = cards.iter().map(|c| c.min_payment).sum();
    output.push_str(&format!(
        "\nTotal Balance: {}  Total Min Payments: {}/mo\n",
        total_balance, total_payments
    ));

    output
}

/// Format the loan list with derived figures and totals
pub fn format_loans(loans: &[Loan]) -> String {
    if loans.is_empty() {
        return "No loans yet. Add one with 'tally loan add'.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Loans\n\n");

    for loan in loans {
        let name = if loan.name.is_empty() {
            "Unnamed Loan"
        } else {
            &loan.name
        };

        output.push_str(&format!("{} (id: {})\n", name, loan.id));
        output.push_str(&format!(
            "  Balance: {}  Payment: {}/{}  APR: {:.2}%\n",
            loan.balance, loan.payment, loan.frequency, loan.apr
        ));
        output.push_str(&format!(
            "  Estimated payoff: {} payments\n",
            loan.payoff_payments()
        ));
    }

    let total_balance: Money = loans.iter().map(|l| l.balance).sum();
    let total_payments: Money = loans.iter().map(|l| l.payment).sum();
    output.push_str(&format!(
        "\nTotal Balance: {}  Total Payments: {}\n",
        total_balance, total_payments
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    #[test]
    fn test_format_empty_cards() {
        assert!(format_credit_cards(&[]).contains("No credit cards yet"));
    }

    #[test]
    fn test_format_card_with_derived_figures() {
        let mut card = CreditCard::new(ItemId::from_millis(1));
        card.set_name("Visa");
        card.set_balance(Money::from_dollars(1200));
        card.set_min_payment(Money::from_dollars(100));
        card.set_apr(24.0);

        let output = format_credit_cards(&[card]);
        assert!(output.contains("Visa"));
        assert!(output.contains("12 months"));
        assert!(output.contains("~$24.00"));
    }

    #[test]
    fn test_format_loan_with_frequency() {
        let mut loan = Loan::new(ItemId::from_millis(2));
        loan.set_name("Car");
        loan.set_balance(Money::from_dollars(5000));
        loan.set_payment(Money::from_dollars(250));

        let output = format_loans(&[loan]);
        assert!(output.contains("Car"));
        assert!(output.contains("/monthly"));
        assert!(output.contains("20 payments"));
    }
}
