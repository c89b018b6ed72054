//! Caller-held authentication state.
//!
//! The stores know nothing about sessions. A `Session` is obtained by logging
//! in and handed to the ledger helpers below, which refuse to act for an
//! anonymous session.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};
use crate::storage::{Category, CredentialStore, Expense, LedgerStore};

/// At most one authenticated identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user_id: Option<String>,
}

impl Session {
    /// A session with nobody logged in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Verify credentials and return a session for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidCredentials` for an unknown user or a wrong
    /// password, without saying which.
    pub fn login(store: &dyn CredentialStore, user_id: &str, password: &str) -> Result<Self> {
        if store.verify(user_id, password)? {
            Ok(Self {
                user_id: Some(user_id.to_string()),
            })
        } else {
            Err(TallyError::InvalidCredentials)
        }
    }

    /// Restore a session whose identity was verified earlier.
    ///
    /// Front ends that persist the session between invocations use this to
    /// rebuild it; they are responsible for having called `login` first.
    pub fn resume(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// The logged-in identity, or `TallyError::NotAuthenticated`.
    pub fn require_user(&self) -> Result<&str> {
        self.user_id().ok_or(TallyError::NotAuthenticated)
    }

    /// Record an expense for the logged-in identity.
    pub fn record_expense(
        &self,
        ledger: &dyn LedgerStore,
        date: NaiveDate,
        category: Category,
        amount: Decimal,
    ) -> Result<()> {
        ledger.append(self.require_user()?, date, category, amount)
    }

    /// Expense log of the logged-in identity.
    pub fn expenses(&self, ledger: &dyn LedgerStore) -> Result<Vec<Expense>> {
        ledger.list_for(self.require_user()?)
    }
}
