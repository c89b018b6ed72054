//! Output formatting helpers for the CLI.
//!
//! Formatting utilities for displaying expenses as tables, plain text or JSON.

mod json;
mod text;

// Re-export public API
pub use json::expense_log_json;
pub use text::{expense_log, total_line};
