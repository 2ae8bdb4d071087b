use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::helpers::parse_position;
use crate::output::{note_json, print_note};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let index = parse_position(args.number)?;
    let store = ctx.open_store()?;
    let note = store.get(index).map_err(CliError::from)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&note_json(index, note))?);
    } else {
        let ui_ctx = ctx.ui_context(false, None);
        print_note(&ui_ctx, index, note, ctx.quiet());
    }
    Ok(())
}
