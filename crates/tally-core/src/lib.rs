//! # Tally Core
//!
//! Core library for Tally - a personal expense tracker.
//!
//! This crate provides the account and ledger persistence model independent
//! of any front end.
//!
//! ## Architecture
//!
//! - **storage**: Credential and ledger store traits plus the SQLite backend
//! - **crypto**: Password digest
//! - **session**: Caller-held authenticated identity
//! - **summary**: Aggregation over listed expenses

pub mod crypto;
pub mod error;
pub mod session;
pub mod storage;
pub mod summary;

pub use error::{Result, TallyError};
pub use session::Session;
pub use storage::{Category, CredentialStore, Expense, LedgerStore, SqliteStorage};
pub use summary::{format_amount, total};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
