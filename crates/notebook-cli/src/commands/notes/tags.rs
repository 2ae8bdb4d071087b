use crate::app::AppContext;
use crate::cli::TagsArgs;
use crate::ui::{header, print};

pub fn handle_tags(ctx: &AppContext, args: &TagsArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let tags = store.all_tags()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    if tags.is_empty() {
        if !ctx.quiet() {
            eprintln!("No tags found in any notes.");
        }
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None);
    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "tags", None));
    }
    for tag in &tags {
        println!("{}", tag);
    }
    Ok(())
}
