//! Tally CLI - a personal expense tracker
//!
//! Command-line front end over `tally-core`: account registration and login,
//! recording expenses, and viewing the expense log with its total.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod output;
mod session_file;
mod ui;

use clap::Parser;
use tally_core::TallyError;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::ui::{badge, hint, Badge, UiContext};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        let ctx = UiContext::from_env(false, cli.no_color, cli.quiet);
        eprintln!("{}", badge(&ctx, Badge::Err, &format!("{:#}", err)));
        if let Some(followup) = hint_for(&err) {
            eprintln!("{}", hint(&ctx, followup));
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TALLY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Commands::Completions(args) = &cli.command {
        return commands::handle_completions(args);
    }

    let ctx = AppContext::from_cli(cli)?;
    tracing::debug!(db = %ctx.db_path.display(), "resolved database path");

    match &cli.command {
        Commands::Register(args) => commands::handle_register(&ctx, args),
        Commands::Login(args) => commands::handle_login(&ctx, args),
        Commands::Logout => commands::handle_logout(&ctx),
        Commands::Whoami => commands::handle_whoami(&ctx),
        Commands::Add(args) => commands::handle_add(&ctx, args),
        Commands::List => commands::handle_list(&ctx),
        Commands::Total => commands::handle_total(&ctx),
        Commands::Categories => commands::handle_categories(&ctx),
        Commands::Check => commands::handle_check(&ctx),
        Commands::Completions(args) => commands::handle_completions(args),
    }
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<TallyError>()? {
        TallyError::NotAuthenticated => Some("tally login <USER>"),
        TallyError::InvalidCredentials => Some("Please try again, or run `tally register <USER>`"),
        _ => None,
    }
}
