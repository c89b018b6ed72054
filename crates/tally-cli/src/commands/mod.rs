//! Command handlers, one module per command group.

mod auth;
mod expenses;
mod misc;

pub use auth::{handle_login, handle_logout, handle_register, handle_whoami};
pub use expenses::{handle_add, handle_list, handle_total};
pub use misc::{handle_categories, handle_check, handle_completions};
