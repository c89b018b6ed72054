//! UI primitives for the Tally CLI.
//!
//! - **Context**: Environment detection (TTY, color)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and styles
//! - **Render**: Tables, receipts, hints, key-value lines

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use render::{badge, hint, kv, receipt, simple_table, Column};
pub use theme::Badge;
