//! Savings goal display formatting
//!
//! Renders each goal with a text progress bar. The bar is clamped at 100%
//! even when the goal is overfunded; the printed percentage is not.

use crate::models::SavingsGoal;

const BAR_WIDTH: usize = 30;

/// Format the savings goal list with progress bars
pub fn format_savings_goals(goals: &[SavingsGoal]) -> String {
    if goals.is_empty() {
        return "No savings goals yet. Add one with 'tally savings add'.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Savings Goals\n\n");

    for goal in goals {
        let name = if goal.name.is_empty() {
            "(unnamed goal)"
        } else {
            &goal.name
        };

        output.push_str(&format!("{} (id: {})\n", name, goal.id));
        output.push_str(&format!(
            "  {} / {}  ({:.1}% complete)\n",
            goal.current,
            goal.target,
            goal.progress()
        ));
        output.push_str(&format!("  [{}]\n", progress_bar(goal.progress_clamped())));
    }

    output
}

/// Render a percentage (0-100) as a fixed-width bar
fn progress_bar(percent: f64) -> String {
    let filled = (percent / 100.0 * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemId, Money};

    #[test]
    fn test_format_empty_goals() {
        assert!(format_savings_goals(&[]).contains("No savings goals yet"));
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), "-".repeat(30));
        assert_eq!(progress_bar(100.0), "#".repeat(30));
        assert_eq!(progress_bar(50.0), format!("{}{}", "#".repeat(15), "-".repeat(15)));
    }

    #[test]
    fn test_format_goal_percentage() {
        let mut goal = SavingsGoal::new(ItemId::from_millis(1));
        goal.set_name("Vacation");
        goal.set_target(Money::from_dollars(1000));
        goal.set_current(Money::from_dollars(250));

        let output = format_savings_goals(&[goal]);
        assert!(output.contains("Vacation"));
        assert!(output.contains("25.0% complete"));
    }

    #[test]
    fn test_overfunded_goal_bar_is_clamped() {
        let mut goal = SavingsGoal::new(ItemId::from_millis(1));
        goal.set_target(Money::from_dollars(100));
        goal.set_current(Money::from_dollars(150));

        let output = format_savings_goals(&[goal]);
        assert!(output.contains("150.0% complete"));
        assert!(output.contains(&"#".repeat(30)));
    }
}
