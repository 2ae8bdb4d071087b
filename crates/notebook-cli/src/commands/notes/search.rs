use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::output::{notes_json, print_note_list};
use crate::ui::OutputMode;

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    OutputMode::validate_format(args.json, args.format.as_deref())?;
    let store = ctx.open_store()?;
    let results = store.search(&args.keyword)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&notes_json(&results))?);
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, args.format.as_deref());
    let context = format!("containing '{}'", args.keyword);
    print_note_list(
        &ui_ctx,
        "search",
        Some(&context),
        &results,
        ctx.preview_chars()?,
        ctx.quiet(),
    );
    Ok(())
}
