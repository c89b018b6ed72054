use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use tally_core::VERSION;

/// Tally - a personal expense tracker
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the expense database
    #[arg(long, global = true, env = "TALLY_DB")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `register` command
#[derive(Args)]
pub struct RegisterArgs {
    /// User ID to create
    #[arg(value_name = "USER")]
    pub user_id: String,
}

/// Arguments for the `login` command
#[derive(Args)]
pub struct LoginArgs {
    /// User ID to log in as
    #[arg(value_name = "USER")]
    pub user_id: String,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Category (Food, Transport, Entertainment, Bills, Others)
    #[arg(short, long)]
    pub category: String,

    /// Amount, greater than zero
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,

    /// Expense date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new account
    Register(RegisterArgs),

    /// Log in and remember the session
    Login(LoginArgs),

    /// Forget the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Record a new expense
    Add(AddArgs),

    /// Show the expense log and total
    List,

    /// Show the total of all expenses
    Total,

    /// List the available categories
    Categories,

    /// Check database integrity
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
