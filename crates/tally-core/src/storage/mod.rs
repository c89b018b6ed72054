//! Storage layer: store traits, data types and the SQLite backend.

mod sqlite;
mod traits;
mod types;

pub use sqlite::SqliteStorage;
pub use traits::{CredentialStore, LedgerStore};
pub use types::{Category, Expense, DATE_FORMAT};
