use crate::app::AppContext;
use crate::cli::FilterArgs;
use crate::errors::CliError;
use crate::output::{notes_json, print_note_list};
use crate::ui::OutputMode;

pub fn handle_filter(ctx: &AppContext, args: &FilterArgs) -> anyhow::Result<()> {
    OutputMode::validate_format(args.json, args.format.as_deref())?;
    let tag = args.tag.trim();
    if tag.is_empty() {
        return Err(CliError::invalid_input("Tag cannot be empty").into());
    }

    let store = ctx.open_store()?;
    let results = store.filter_by_tag(tag)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&notes_json(&results))?);
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, args.format.as_deref());
    let context = format!("tag '{}'", tag);
    print_note_list(
        &ui_ctx,
        "filter",
        Some(&context),
        &results,
        ctx.preview_chars()?,
        ctx.quiet(),
    );
    Ok(())
}
