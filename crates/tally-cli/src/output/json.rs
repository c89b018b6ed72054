//! JSON output formatting for expenses.

use rust_decimal::Decimal;
use tally_core::{format_amount, Expense};

/// Convert an expense to JSON for output.
pub fn expense_json(expense: &Expense) -> serde_json::Value {
    serde_json::json!({
        "user_id": expense.user_id,
        "date": expense.date_string(),
        "category": expense.category.as_str(),
        "amount": expense.amount.to_string(),
    })
}

/// Expense log plus total, as emitted by `tally list --json`.
pub fn expense_log_json(user_id: &str, expenses: &[Expense], total: Decimal) -> serde_json::Value {
    serde_json::json!({
        "user_id": user_id,
        "expenses": expenses.iter().map(expense_json).collect::<Vec<_>>(),
        "total": format_amount(total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tally_core::Category;

    #[test]
    fn test_expense_json_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let value = expense_json(&Expense::new("bob", date, Category::Food, dec!(12.50)));
        assert_eq!(value["date"], "2024-01-01");
        assert_eq!(value["category"], "Food");
        assert_eq!(value["amount"], "12.50");
    }

    #[test]
    fn test_expense_log_json_empty() {
        let value = expense_log_json("carol", &[], Decimal::ZERO);
        assert_eq!(value["user_id"], "carol");
        assert_eq!(value["expenses"].as_array().unwrap().len(), 0);
        assert_eq!(value["total"], "0.00");
    }
}
