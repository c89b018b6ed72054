//! Expense row type for database queries.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{Result, TallyError};
use crate::storage::types::{Category, Expense, DATE_FORMAT};

/// Raw row data from the expenses table, before parsing into domain types.
#[derive(Debug)]
pub struct ExpenseRow {
    pub user_id: String,
    pub date: String,
    pub category: String,
    pub amount: f64,
}

impl TryFrom<ExpenseRow> for Expense {
    type Error = TallyError;

    fn try_from(row: ExpenseRow) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&row.date, DATE_FORMAT)
            .map_err(|e| TallyError::CorruptRecord(format!("Invalid date {:?}: {}", row.date, e)))?;
        let category = Category::from_str(&row.category)
            .map_err(|_| TallyError::CorruptRecord(format!("Invalid category {:?}", row.category)))?;
        let amount = amount_from_column(row.amount)?;

        Ok(Expense {
            user_id: row.user_id,
            date,
            category,
            amount,
        })
    }
}

/// Convert a decimal amount to the REAL column value.
pub fn amount_to_column(amount: Decimal) -> Result<f64> {
    amount
        .to_f64()
        .ok_or_else(|| TallyError::InvalidRecord(format!("Amount out of range: {}", amount)))
}

/// Convert an amount for storage, rejecting any value the REAL column would
/// not read back unchanged (too many significant digits or out of range).
pub fn storable_amount(amount: Decimal) -> Result<f64> {
    let column = amount_to_column(amount)?;
    match amount_from_column(column) {
        Ok(read_back) if read_back == amount => Ok(column),
        _ => Err(TallyError::InvalidRecord(format!(
            "Amount {} cannot be stored exactly",
            amount
        ))),
    }
}

/// Convert a REAL column value back to a decimal.
///
/// Goes through the shortest round-trip representation of the float, so a
/// stored `12.5` reads back as exactly `12.5` rather than its binary expansion.
pub fn amount_from_column(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(TallyError::CorruptRecord(format!(
            "Non-finite amount: {}",
            value
        )));
    }
    Decimal::from_str(&value.to_string())
        .map_err(|e| TallyError::CorruptRecord(format!("Invalid amount {}: {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(date: &str, category: &str, amount: f64) -> ExpenseRow {
        ExpenseRow {
            user_id: "bob".to_string(),
            date: date.to_string(),
            category: category.to_string(),
            amount,
        }
    }

    #[test]
    fn test_row_to_expense() {
        let expense = Expense::try_from(row("2024-01-01", "Food", 12.5)).unwrap();
        assert_eq!(expense.user_id, "bob");
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.amount, dec!(12.50));
    }

    #[test]
    fn test_row_with_bad_date_is_corrupt() {
        let err = Expense::try_from(row("01/01/2024", "Food", 1.0)).unwrap_err();
        assert!(matches!(err, TallyError::CorruptRecord(_)));
    }

    #[test]
    fn test_row_with_unknown_category_is_corrupt() {
        let err = Expense::try_from(row("2024-01-01", "Groceries", 1.0)).unwrap_err();
        assert!(matches!(err, TallyError::CorruptRecord(_)));
    }

    #[test]
    fn test_amount_column_keeps_short_decimals() {
        for amount in [dec!(0.1), dec!(5.25), dec!(0.75), dec!(1999.99)] {
            let stored = amount_to_column(amount).unwrap();
            assert_eq!(amount_from_column(stored).unwrap(), amount);
        }
    }

    #[test]
    fn test_storable_amount_rejects_lossy_values() {
        assert_eq!(storable_amount(dec!(12.5)).unwrap(), 12.5);
        for amount in [dec!(1234567.123456789012), Decimal::MAX] {
            let err = storable_amount(amount).unwrap_err();
            assert!(matches!(err, TallyError::InvalidRecord(_)));
        }
    }

    #[test]
    fn test_amount_from_non_finite_is_corrupt() {
        assert!(amount_from_column(f64::NAN).is_err());
        assert!(amount_from_column(f64::INFINITY).is_err());
    }
}
