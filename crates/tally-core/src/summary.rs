//! Aggregation over listed expenses.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Result, TallyError};
use crate::storage::Expense;

/// Sum of all amounts. Zero for an empty slice; no rounding is applied.
///
/// # Errors
///
/// Returns `TallyError::AmountOverflow` if the sum exceeds the decimal range.
pub fn total(expenses: &[Expense]) -> Result<Decimal> {
    expenses.iter().try_fold(Decimal::ZERO, |sum, expense| {
        sum.checked_add(expense.amount).ok_or_else(|| {
            TallyError::AmountOverflow(format!(
                "{} + {} exceeds the supported range",
                sum, expense.amount
            ))
        })
    })
}

/// Format an amount with two fractional digits for display.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
