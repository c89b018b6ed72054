use tally_core::{CredentialStore, Session, TallyError};

use crate::app::AppContext;
use crate::cli::{LoginArgs, RegisterArgs};
use crate::helpers::{prompt_new_password, prompt_password};
use crate::ui::{badge, hint, receipt, Badge};

pub fn handle_register(ctx: &AppContext, args: &RegisterArgs) -> anyhow::Result<()> {
    let user_id = args.user_id.trim();
    if user_id.is_empty() {
        return Err(TallyError::InvalidInput(
            "Please provide a User ID and Password to sign up.".to_string(),
        )
        .into());
    }

    let store = ctx.open_storage()?;
    if store.user_exists(user_id)? {
        return Err(TallyError::DuplicateIdentity(user_id.to_string()).into());
    }

    let password = prompt_new_password()?;
    store.register(user_id, &password)?;

    if ctx.ui.mode.is_json() {
        println!("{}", serde_json::json!({ "registered": user_id }));
    } else if !ctx.ui.quiet {
        println!(
            "{}",
            receipt(&ctx.ui, "Account created successfully!", &[("User", user_id)])
        );
        println!("{}", hint(&ctx.ui, &format!("tally login {}", user_id)));
    }
    Ok(())
}

pub fn handle_login(ctx: &AppContext, args: &LoginArgs) -> anyhow::Result<()> {
    let user_id = args.user_id.trim();
    let store = ctx.open_storage()?;
    let password = prompt_password()?;
    let session = Session::login(&store, user_id, &password)?;
    ctx.remember(&session)?;

    if ctx.ui.mode.is_json() {
        println!("{}", serde_json::json!({ "user_id": user_id }));
    } else if !ctx.ui.quiet {
        println!(
            "{}",
            receipt(&ctx.ui, "Login successful!", &[("User", user_id)])
        );
    }
    Ok(())
}

pub fn handle_logout(ctx: &AppContext) -> anyhow::Result<()> {
    let removed = ctx.forget()?;

    if ctx.ui.mode.is_json() {
        println!("{}", serde_json::json!({ "logged_out": removed }));
    } else if !ctx.ui.quiet {
        if removed {
            println!("{}", badge(&ctx.ui, Badge::Ok, "Logged out"));
        } else {
            println!("{}", badge(&ctx.ui, Badge::Warn, "Not logged in"));
        }
    }
    Ok(())
}

pub fn handle_whoami(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_storage()?;
    let session = ctx.current_session(&store)?;

    if ctx.ui.mode.is_json() {
        println!("{}", serde_json::json!({ "user_id": session.user_id() }));
        return Ok(());
    }
    match session.user_id() {
        Some(user_id) => println!("{}", user_id),
        None => println!("{}", badge(&ctx.ui, Badge::Warn, "Not logged in")),
    }
    Ok(())
}
