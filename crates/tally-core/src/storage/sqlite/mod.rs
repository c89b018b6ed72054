//! SQLite storage backend.
//!
//! One connection guarded by a mutex; every operation holds the lock for its
//! whole duration, so concurrent writers are serialized. The schema is the
//! one earlier versions created, applied with `IF NOT EXISTS` so existing
//! database files open unchanged.

mod row;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use rust_decimal::Decimal;

use crate::crypto::{digest_matches, password_digest};
use crate::error::{Result, TallyError};
use crate::storage::traits::{CredentialStore, LedgerStore};
use crate::storage::types::{Category, Expense, DATE_FORMAT};

use row::{storable_amount, ExpenseRow};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        user_id TEXT PRIMARY KEY,
        password TEXT
    );
    CREATE TABLE IF NOT EXISTS expenses (
        user_id TEXT,
        date TEXT,
        category TEXT,
        amount REAL
    );
";

/// SQLite-backed credential and ledger store.
pub struct SqliteStorage {
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Open (or create) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::StorageUnavailable` if the parent directory cannot
    /// be created or SQLite cannot open the file.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    TallyError::StorageUnavailable(format!(
                        "Failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let conn = Connection::open(path)?;
        let storage = Self::from_connection(conn, Some(path.to_path_buf()))?;
        tracing::debug!(path = %path.display(), "opened expense database");
        Ok(storage)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn, None)
    }

    fn from_connection(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            path,
            conn: Mutex::new(conn),
        })
    }

    /// Database file path, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| TallyError::StorageUnavailable("SQLite connection poisoned".to_string()))
    }

    /// Check database integrity.
    ///
    /// Verifies:
    /// - SQLite `integrity_check` reports `ok`
    /// - Both tables are present
    pub fn check_integrity(&self) -> Result<()> {
        let conn = self.lock_conn()?;

        let status: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if status != "ok" {
            return Err(TallyError::StorageUnavailable(format!(
                "Integrity check failed: {}",
                status
            )));
        }

        for table in ["users", "expenses"] {
            let found: i64 = conn.query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table],
                |row| row.get(0),
            )?;
            if found == 0 {
                return Err(TallyError::StorageUnavailable(format!(
                    "Missing table: {}",
                    table
                )));
            }
        }

        Ok(())
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _) if failure.code == ErrorCode::ConstraintViolation
    )
}

impl CredentialStore for SqliteStorage {
    fn register(&self, user_id: &str, password: &str) -> Result<()> {
        if user_id.is_empty() {
            return Err(TallyError::InvalidInput("User ID must not be empty".to_string()));
        }
        if password.is_empty() {
            return Err(TallyError::InvalidInput("Password must not be empty".to_string()));
        }

        let digest = password_digest(password);
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO users (user_id, password) VALUES (?1, ?2)",
            params![user_id, digest],
        )
        .map_err(|err| {
            if is_unique_violation(&err) {
                TallyError::DuplicateIdentity(user_id.to_string())
            } else {
                TallyError::from(err)
            }
        })?;

        tracing::debug!(user_id, "registered user");
        Ok(())
    }

    fn verify(&self, user_id: &str, password: &str) -> Result<bool> {
        let conn = self.lock_conn()?;
        let stored: Option<Option<String>> = conn
            .query_row(
                "SELECT password FROM users WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )
            .optional()?;

        Ok(match stored.flatten() {
            Some(digest) => digest_matches(password, &digest),
            None => false,
        })
    }

    fn user_exists(&self, user_id: &str) -> Result<bool> {
        let conn = self.lock_conn()?;
        let found: i64 = conn.query_row(
            "SELECT COUNT(*) FROM users WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )?;
        Ok(found > 0)
    }
}

impl LedgerStore for SqliteStorage {
    fn append(
        &self,
        user_id: &str,
        date: NaiveDate,
        category: Category,
        amount: Decimal,
    ) -> Result<()> {
        if user_id.is_empty() {
            return Err(TallyError::InvalidRecord("User ID must not be empty".to_string()));
        }
        if amount <= Decimal::ZERO {
            return Err(TallyError::InvalidRecord(format!(
                "Amount must be positive, got {}",
                amount
            )));
        }

        let amount_column = storable_amount(amount)?;
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO expenses (user_id, date, category, amount) VALUES (?1, ?2, ?3, ?4)",
            params![
                user_id,
                date.format(DATE_FORMAT).to_string(),
                category.as_str(),
                amount_column,
            ],
        )?;

        tracing::debug!(user_id, %date, %category, %amount, "appended expense");
        Ok(())
    }

    fn list_for(&self, user_id: &str) -> Result<Vec<Expense>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            "SELECT user_id, date, category, amount FROM expenses
             WHERE user_id = ?1
             ORDER BY rowid",
        )?;

        let rows = stmt.query_map(params![user_id], |row| {
            Ok(ExpenseRow {
                user_id: row.get(0)?,
                date: row.get(1)?,
                category: row.get(2)?,
                amount: row.get(3)?,
            })
        })?;

        let mut expenses = Vec::new();
        for row in rows {
            expenses.push(Expense::try_from(row?)?);
        }
        Ok(expenses)
    }
}
