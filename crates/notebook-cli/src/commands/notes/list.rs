use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{all_refs, notes_json, print_note_list};
use crate::ui::OutputMode;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    OutputMode::validate_format(args.json, args.format.as_deref())?;
    let store = ctx.open_store()?;
    let refs = all_refs(store.list()?);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&notes_json(&refs))?);
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, args.format.as_deref());
    let context = format!("{} total", refs.len());
    print_note_list(
        &ui_ctx,
        "list",
        (!refs.is_empty()).then_some(context.as_str()),
        &refs,
        ctx.preview_chars()?,
        ctx.quiet(),
    );
    Ok(())
}
