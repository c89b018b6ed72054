use clap::CommandFactory;
use clap_complete::generate;
use tally_core::Category;

use crate::app::AppContext;
use crate::cli::{Cli, CompletionsArgs};
use crate::ui::{badge, Badge};

pub fn handle_categories(ctx: &AppContext) -> anyhow::Result<()> {
    if ctx.ui.mode.is_json() {
        let names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
        println!("{}", serde_json::json!(names));
        return Ok(());
    }
    for category in Category::ALL {
        println!("{}", category);
    }
    Ok(())
}

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_storage()?;
    store.check_integrity()?;

    if ctx.ui.mode.is_json() {
        println!("{}", serde_json::json!({ "status": "ok" }));
    } else if !ctx.ui.quiet {
        let message = format!("Database OK: {}", ctx.db_path.display());
        println!("{}", badge(&ctx.ui, Badge::Ok, &message));
    }
    Ok(())
}

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "tally", &mut std::io::stdout());
    Ok(())
}
