//! Expense display formatting

use crate::models::{Expense, ExpenseKind, Expenses, Money};

/// Format one expense list (fixed or variable) as a table with a total row
pub fn format_expense_list(kind: ExpenseKind, expenses: &[Expense]) -> String {
    let heading = match kind {
        ExpenseKind::Fixed => "Fixed Expenses",
        ExpenseKind::Variable => "Variable Expenses",
    };

    if expenses.is_empty() {
        return format!(
            "{}\n\nNo expenses yet. Add one with 'tally expense add --kind {}'.\n",
            heading, kind
        );
    }

    let name_width = expenses
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!("{}\n\n", heading));
    output.push_str(&format!(
        "{:<width$}  {:<14}  {:>12}  {}\n",
        "Name",
        "Category",
        "Amount",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:-<14}  {:->12}  {:-<13}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<width$}  {:<14}  {:>12}  {}\n",
            expense.name,
            expense.category_or_other().name(),
            expense.amount,
            expense.id,
            width = name_width
        ));
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "\n{:<width$}  {:<14}  {:>12}\n",
        "Total",
        "",
        total,
        width = name_width
    ));

    output
}

/// Format both lists with their totals
pub fn format_all_expenses(expenses: &Expenses) -> String {
    format!(
        "{}\n{}",
        format_expense_list(ExpenseKind::Fixed, &expenses.fixed),
        format_expense_list(ExpenseKind::Variable, &expenses.variable)
    )
}
