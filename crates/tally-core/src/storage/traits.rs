//! Store trait definitions.
//!
//! `CredentialStore` and `LedgerStore` are the caller-facing surface of the
//! persistence model. Handles are passed explicitly to whoever needs them;
//! there is no process-wide connection.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{Category, Expense};
use crate::error::Result;

/// Registered identities and their credential digests.
///
/// Implementations must ensure:
/// - `user_id` is unique across the store
/// - Only the digest of a password is persisted, never the plaintext
/// - Records are never mutated or deleted
pub trait CredentialStore: Send + Sync {
    /// Register a new identity.
    ///
    /// # Errors
    ///
    /// - `TallyError::InvalidInput` if `user_id` or `password` is empty
    /// - `TallyError::DuplicateIdentity` if `user_id` is already registered;
    ///   the existing record is left untouched
    /// - `TallyError::StorageUnavailable` on backend failure
    fn register(&self, user_id: &str, password: &str) -> Result<()>;

    /// Check a password for `user_id`.
    ///
    /// Returns `Ok(false)` both for unknown users and for wrong passwords.
    /// Never mutates state.
    fn verify(&self, user_id: &str, password: &str) -> Result<bool>;

    /// Whether `user_id` is registered.
    fn user_exists(&self, user_id: &str) -> Result<bool>;
}

/// Append-only expense records, queryable per identity.
pub trait LedgerStore: Send + Sync {
    /// Append one expense.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidRecord` if:
    /// - `amount` is zero or negative
    /// - `user_id` is empty
    fn append(
        &self,
        user_id: &str,
        date: NaiveDate,
        category: Category,
        amount: Decimal,
    ) -> Result<()>;

    /// All expenses for `user_id`, in insertion order.
    ///
    /// The returned `Vec` is a snapshot; later appends do not affect it.
    /// Unknown identities yield an empty `Vec`.
    fn list_for(&self, user_id: &str) -> Result<Vec<Expense>>;
}
