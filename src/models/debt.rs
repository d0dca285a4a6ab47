//! Debt models: credit cards and loans
//!
//! Both carry a balance, a recurring payment, and an APR. The payoff
//! estimates deliberately ignore interest compounding; they answer "how many
//! payments at this amount until the balance reaches zero".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ids::ItemId;
use super::money::Money;

/// A credit card with a revolving balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub balance: Money,
    #[serde(default)]
    pub min_payment: Money,
    #[serde(default)]
    pub apr: f64,
    #[serde(default)]
    pub due_date: String,
}

impl CreditCard {
    /// Create a new credit card with zero/empty defaults
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            balance: Money::zero(),
            min_payment: Money::zero(),
            apr: 0.0,
            due_date: String::new(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
    }

    pub fn set_min_payment(&mut self, min_payment: Money) {
        self.min_payment = min_payment;
    }

    pub fn set_apr(&mut self, apr: f64) {
        self.apr = apr;
    }

    pub fn set_due_date(&mut self, due_date: impl Into<String>) {
        self.due_date = due_date.into();
    }

    /// Approximate interest accrued in one month: balance × apr / 100 / 12
    pub fn monthly_interest(&self) -> Money {
        let cents = self.balance.cents() as f64 * self.apr / 100.0 / 12.0;
        Money::from_cents(cents.round() as i64)
    }

    /// Months to pay off the balance at the minimum payment
    ///
    /// 0 when either the balance or the payment is zero (guards division).
    pub fn payoff_months(&self) -> i64 {
        payoff_periods(self.balance, self.min_payment)
    }
}

/// How often a loan payment is due
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentFrequency {
    Weekly,
    BiWeekly,
    #[default]
    Monthly,
}

impl PaymentFrequency {
    pub fn name(&self) -> &'static str {
        match self {
            PaymentFrequency::Weekly => "weekly",
            PaymentFrequency::BiWeekly => "bi-weekly",
            PaymentFrequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PaymentFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weekly" => Ok(PaymentFrequency::Weekly),
            "bi-weekly" | "biweekly" => Ok(PaymentFrequency::BiWeekly),
            "monthly" => Ok(PaymentFrequency::Monthly),
            _ => Err(format!(
                "Unknown frequency: {} (use weekly|bi-weekly|monthly)",
                s
            )),
        }
    }
}

/// A loan with a fixed recurring payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub balance: Money,
    #[serde(default)]
    pub payment: Money,
    #[serde(default)]
    pub apr: f64,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub frequency: PaymentFrequency,
}

impl Loan {
    /// Create a new loan with zero/empty defaults and monthly frequency
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            balance: Money::zero(),
            payment: Money::zero(),
            apr: 0.0,
            due_date: String::new(),
            frequency: PaymentFrequency::Monthly,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
    }

    pub fn set_payment(&mut self, payment: Money) {
        self.payment = payment;
    }

    pub fn set_apr(&mut self, apr: f64) {
        self.apr = apr;
    }

    pub fn set_due_date(&mut self, due_date: impl Into<String>) {
        self.due_date = due_date.into();
    }

    pub fn set_frequency(&mut self, frequency: PaymentFrequency) {
        self.frequency = frequency;
    }

    /// Number of payments to reach a zero balance at the current payment
    ///
    /// 0 when either the balance or the payment is zero (guards division).
    pub fn payoff_payments(&self) -> i64 {
        payoff_periods(self.balance, self.payment)
    }
}

/// ceil(balance / payment) when both are positive, else 0
fn payoff_periods(balance: Money, payment: Money) -> i64 {
    if balance.is_positive() && payment.is_positive() {
        // Signed div_ceil is unstable; both values are positive here, so the
        // unsigned equivalent is identical.
        (balance.cents() as u64).div_ceil(payment.cents() as u64) as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payoff_months() {
        let mut card = CreditCard::new(ItemId::from_millis(1));
        card.set_balance(Money::from_dollars(1200));
        card.set_min_payment(Money::from_dollars(100));

        assert_eq!(card.payoff_months(), 12);
    }

    #[test]
    fn test_payoff_months_rounds_up() {
        let mut card = CreditCard::new(ItemId::from_millis(1));
        card.set_balance(Money::from_dollars(1250));
        card.set_min_payment(Money::from_dollars(100));

        assert_eq!(card.payoff_months(), 13);
    }

    #[test]
    fn test_payoff_months_guards_zero() {
        let mut card = CreditCard::new(ItemId::from_millis(1));
        assert_eq!(card.payoff_months(), 0);

        card.set_balance(Money::from_dollars(500));
        assert_eq!(card.payoff_months(), 0);

        card.set_balance(Money::zero());
        card.set_min_payment(Money::from_dollars(50));
        assert_eq!(card.payoff_months(), 0);
    }

    #[test]
    fn test_monthly_interest() {
        let mut card = CreditCard::new(ItemId::from_millis(1));
        card.set_balance(Money::from_dollars(1200));
        card.set_apr(24.0);

        // 1200 * 24 / 100 / 12 = 24 dollars
        assert_eq!(card.monthly_interest(), Money::from_dollars(24));
    }

    #[test]
    fn test_monthly_interest_zero_apr() {
        let mut card = CreditCard::new(ItemId::from_millis(1));
        card.set_balance(Money::from_dollars(1200));
        assert_eq!(card.monthly_interest(), Money::zero());
    }

    #[test]
    fn test_loan_payoff_payments() {
        let mut loan = Loan::new(ItemId::from_millis(2));
        loan.set_balance(Money::from_dollars(5000));
        loan.set_payment(Money::from_dollars(250));

        assert_eq!(loan.payoff_payments(), 20);
    }

    #[test]
    fn test_frequency_wire_format() {
        let json = serde_json::to_string(&PaymentFrequency::BiWeekly).unwrap();
        assert_eq!(json, "\"bi-weekly\"");

        let parsed: PaymentFrequency = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(parsed, PaymentFrequency::Weekly);
    }

    #[test]
    fn test_frequency_parse() {
        assert_eq!(
            "bi-weekly".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::BiWeekly
        );
        assert_eq!(
            "MONTHLY".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::Monthly
        );
        assert!("daily".parse::<PaymentFrequency>().is_err());
    }

    #[test]
    fn test_loan_defaults_to_monthly() {
        let loan: Loan = serde_json::from_str(r#"{"id": 4}"#).unwrap();
        assert_eq!(loan.frequency, PaymentFrequency::Monthly);
        assert_eq!(loan.balance, Money::zero());
    }
}
