use tally_core::{format_amount, total, Category};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{parse_amount, parse_date};
use crate::output::{expense_log, expense_log_json, total_line};
use crate::ui::{kv, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let store = ctx.open_storage()?;
    let session = ctx.require_session(&store)?;

    let category: Category = args.category.parse()?;
    let amount = parse_amount(&args.amount)?;
    let date = parse_date(args.date.as_deref())?;

    session.record_expense(&store, date, category, amount)?;

    if ctx.ui.mode.is_json() {
        println!(
            "{}",
            serde_json::json!({
                "date": date.to_string(),
                "category": category.as_str(),
                "amount": amount.to_string(),
            })
        );
    } else if !ctx.ui.quiet {
        let amount_text = format_amount(amount);
        let title = format!("Expense of {} in {} saved successfully!", amount_text, category);
        let date_text = date.to_string();
        println!(
            "{}",
            receipt(
                &ctx.ui,
                &title,
                &[
                    ("Date", date_text.as_str()),
                    ("Category", category.as_str()),
                    ("Amount", amount_text.as_str()),
                ],
            )
        );
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_storage()?;
    let session = ctx.require_session(&store)?;
    let user_id = session.require_user()?;

    let expenses = session.expenses(&store)?;
    let sum = total(&expenses)?;

    if ctx.ui.mode.is_json() {
        let value = expense_log_json(user_id, &expenses, sum);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if ctx.ui.mode.is_pretty() && !ctx.ui.quiet {
        println!("{}", kv(&ctx.ui, "Welcome", user_id));
        println!();
    }
    println!("{}", expense_log(&ctx.ui, &expenses));
    println!("{}", total_line(&ctx.ui, ctx.config.currency_symbol(), sum));
    Ok(())
}

pub fn handle_total(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_storage()?;
    let session = ctx.require_session(&store)?;
    let sum = total(&session.expenses(&store)?)?;

    if ctx.ui.mode.is_json() {
        println!("{}", serde_json::json!({ "total": format_amount(sum) }));
    } else {
        println!("{}", total_line(&ctx.ui, ctx.config.currency_symbol(), sum));
    }
    Ok(())
}
