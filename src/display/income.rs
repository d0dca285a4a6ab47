//! Income display formatting

use crate::models::Income;

/// Format the income summary: monthly figure plus additional sources
pub fn format_income(income: &Income) -> String {
    let mut output = String::new();

    output.push_str(&format!("Monthly Income: {}\n", income.monthly));

    if income.additional.is_empty() {
        output.push_str("No additional income sources.\n");
    } else {
        output.push_str("\nAdditional Sources:\n");
        for source in &income.additional {
            let name = if source.name.is_empty() {
                "(unnamed)"
            } else {
                &source.name
            };
            output.push_str(&format!(
                "  {:<24} {:>12}  id: {}\n",
                name, source.amount, source.id
            ));
        }
    }

    output.push_str(&format!("\nTotal Income: {}\n", income.total()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeSource, ItemId, Money};

    #[test]
    fn test_format_empty_income() {
        let output = format_income(&Income::default());
        assert!(output.contains("No additional income sources"));
        assert!(output.contains("$0.00"));
    }

    #[test]
    fn test_format_with_sources() {
        let mut source = IncomeSource::new(ItemId::from_millis(7));
        source.set_name("Freelance");
        source.set_amount(Money::from_dollars(400));

        let income = Income {
            monthly: Money::from_dollars(3000),
            additional: vec![source],
        };

        let output = format_income(&income);
        assert!(output.contains("Freelance"));
        assert!(output.contains("$400.00"));
        assert!(output.contains("Total Income: $3400.00"));
    }
}
