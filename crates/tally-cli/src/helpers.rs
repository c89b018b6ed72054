//! Input and parsing helper functions for the CLI.

use std::io::IsTerminal;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use dialoguer::Password;
use rust_decimal::Decimal;
use tally_core::storage::DATE_FORMAT;

/// Read a password from TALLY_PASSWORD or prompt for it.
pub fn prompt_password() -> anyhow::Result<String> {
    if let Some(value) = env_password() {
        return Ok(value);
    }
    ensure_interactive()?;
    Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Read a new password with confirmation (for register), or from TALLY_PASSWORD.
pub fn prompt_new_password() -> anyhow::Result<String> {
    if let Some(value) = env_password() {
        return Ok(value);
    }
    ensure_interactive()?;
    Password::new()
        .with_prompt("Choose a password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

fn env_password() -> Option<String> {
    std::env::var("TALLY_PASSWORD")
        .ok()
        .filter(|v| !v.is_empty())
}

fn ensure_interactive() -> anyhow::Result<()> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "No password provided and no TTY available. Set TALLY_PASSWORD."
        ))
    }
}

/// Parse an expense date (YYYY-MM-DD), defaulting to today's local date.
pub fn parse_date(value: Option<&str>) -> anyhow::Result<NaiveDate> {
    match value {
        None => Ok(Local::now().date_naive()),
        Some(text) => NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| {
            anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {}", text)
        }),
    }
}

/// Parse an amount. Sign checks are left to the ledger store.
pub fn parse_amount(value: &str) -> anyhow::Result<Decimal> {
    Decimal::from_str(value.trim()).map_err(|_| anyhow::anyhow!("Invalid amount: {}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_date() {
        let date = parse_date(Some("2024-02-29")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_invalid() {
        assert!(parse_date(Some("2023-02-29")).is_err());
        assert!(parse_date(Some("2024-01-01T10:00:00Z")).is_err());
        assert!(parse_date(Some("yesterday")).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), dec!(12.50));
        assert_eq!(parse_amount(" -3 ").unwrap(), dec!(-3));
        assert!(parse_amount("twelve").is_err());
        assert!(parse_amount("").is_err());
    }
}
