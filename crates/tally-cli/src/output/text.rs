//! Text and table output formatting for expenses.

use rust_decimal::Decimal;
use tally_core::{format_amount, Expense};

use crate::ui::{kv, simple_table, Column, UiContext};

const EXPENSE_COLUMNS: [Column; 3] = [
    Column::new("Date"),
    Column::new("Category"),
    Column::right("Amount"),
];

/// Render the expense log table. Empty logs get a notice instead of a table.
pub fn expense_log(ctx: &UiContext, expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|expense| {
            vec![
                expense.date_string(),
                expense.category.to_string(),
                format_amount(expense.amount),
            ]
        })
        .collect();
    simple_table(ctx, &EXPENSE_COLUMNS, &rows)
}

/// Render the "Total Expenses" line.
pub fn total_line(ctx: &UiContext, currency_symbol: &str, total: Decimal) -> String {
    kv(
        ctx,
        "Total Expenses",
        &format!("{}{}", currency_symbol, format_amount(total)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tally_core::Category;

    #[test]
    fn test_empty_log_notice() {
        let ctx = UiContext::plain();
        assert_eq!(expense_log(&ctx, &[]), "No expenses recorded yet.");
    }

    #[test]
    fn test_plain_log_rows() {
        let ctx = UiContext::plain();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let expenses = vec![
            Expense::new("bob", date, Category::Food, dec!(12.5)),
            Expense::new("bob", date, Category::Bills, dec!(100)),
        ];
        assert_eq!(
            expense_log(&ctx, &expenses),
            "2024-01-01 Food 12.50\n2024-01-01 Bills 100.00"
        );
    }

    #[test]
    fn test_total_line() {
        assert_eq!(
            total_line(&UiContext::pretty(), "$", dec!(16)),
            "Total Expenses: $16.00"
        );
        assert_eq!(
            total_line(&UiContext::plain(), "$", dec!(0)),
            "total_expenses=$0.00"
        );
    }
}
