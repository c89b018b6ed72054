//! Error types for Tally core operations.
//!
//! Every operation either fully succeeds or fails with one of these kinds.
//! Nothing here is retried or logged away; the front end maps them to
//! user-facing messages.

use thiserror::Error;

/// Result type alias for Tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Core error type for Tally operations.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Registration attempted for a user that already exists
    #[error("User already exists: {0}")]
    DuplicateIdentity(String),

    /// Unknown user or wrong password (deliberately not distinguished)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Expense rejected at the store boundary
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Underlying persistence failed
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Ledger operation attempted without an authenticated session
    #[error("Not logged in")]
    NotAuthenticated,

    /// A stored row could not be decoded
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),

    /// A sum left the representable decimal range
    #[error("Amount overflow: {0}")]
    AmountOverflow(String),
}

impl From<rusqlite::Error> for TallyError {
    fn from(err: rusqlite::Error) -> Self {
        TallyError::StorageUnavailable(format!("SQLite error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_error_maps_to_storage_unavailable() {
        let err: TallyError = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(err, TallyError::StorageUnavailable(_)));
    }

    #[test]
    fn test_invalid_credentials_message_hides_cause() {
        assert_eq!(TallyError::InvalidCredentials.to_string(), "Invalid credentials");
    }
}
