//! Edit note command handler.

use notebook_core::NoteUpdate;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::{
    collect_tags, is_interactive, parse_position, prompt_tags, prompt_text, read_content,
};
use crate::ui::{badge, print, Badge, OutputMode};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let index = parse_position(args.number)?;
    let mut store = ctx.open_store()?;
    let current = store.get(index).map_err(CliError::from)?.clone();

    let mut update = NoteUpdate::new();
    if let Some(ref title) = args.title {
        update = update.title(title.clone());
    }
    if let Some(content) = read_content(args.content.clone(), true)? {
        update = update.content(content);
    }
    if args.clear_tags {
        update = update.tags(Vec::new());
    } else if !args.tag.is_empty() {
        update = update.tags(collect_tags(&args.tag));
    }

    if update.is_empty() {
        if args.no_input || !is_interactive() {
            return Err(CliError::invalid_input(
                "Nothing to change (use --title, --content, --tag or --clear-tags)",
            )
            .into());
        }
        // Prompt for every field, offering the current value as the default
        update = NoteUpdate::new()
            .title(prompt_text("Title", Some(&current.title), true)?)
            .content(prompt_text("Content", Some(&current.content), false)?)
            .tags(prompt_tags(&current.tags)?);
    }

    let note = store.edit(index, update).map_err(CliError::from)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        match ui_ctx.mode {
            OutputMode::Pretty => {
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Ok,
                        &format!("Note #{} updated ('{}')", args.number, note.title),
                    ),
                );
            }
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("number={}", args.number);
            }
        }
    }
    Ok(())
}
