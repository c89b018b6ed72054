//! Core data types for the storage layer.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TallyError;

/// Date format used for the `expenses.date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Expense category. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Bills,
    Others,
}

impl Category {
    /// All categories, in presentation order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Bills,
        Category::Others,
    ];

    /// Canonical name, as stored in the `category` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TallyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TallyError::InvalidRecord(format!("Unknown category: {}", value)))
    }
}

/// A stored expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Owning identity
    pub user_id: String,

    /// Calendar date of the expense
    pub date: NaiveDate,

    pub category: Category,

    /// Always positive
    pub amount: Decimal,
}

impl Expense {
    pub fn new(
        user_id: impl Into<String>,
        date: NaiveDate,
        category: Category,
        amount: Decimal,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            date,
            category,
            amount,
        }
    }

    /// Date in `YYYY-MM-DD` form.
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_category_parse_canonical() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" BILLS ".parse::<Category>().unwrap(), Category::Bills);
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        let err = "NotACategory".parse::<Category>().unwrap_err();
        assert!(matches!(err, TallyError::InvalidRecord(_)));
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Entertainment.to_string(), "Entertainment");
    }

    #[test]
    fn test_expense_date_string() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let expense = Expense::new("bob", date, Category::Food, dec!(12.50));
        assert_eq!(expense.date_string(), "2024-01-05");
    }
}
