//! Add note command handler.

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::{collect_tags, is_interactive, prompt_tags, prompt_text, read_content};
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, blank_line, hint, print, Badge, OutputMode};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let ui_ctx = ctx.ui_context(false, None);
    let interactive = is_interactive() && !args.no_input;

    let title = match &args.title {
        Some(title) => title.clone(),
        None if interactive => prompt_text("Title", None, true)?,
        None => {
            return Err(CliError::invalid_input(
                "A title is required (pass it as the first argument)",
            )
            .into())
        }
    };

    let content = read_content(args.content.clone(), args.no_input)?.unwrap_or_default();

    let tags = if !args.tag.is_empty() {
        collect_tags(&args.tag)
    } else if interactive {
        prompt_tags(&[])?
    } else {
        Vec::new()
    };

    let index = store.add(&title, &content, tags).map_err(CliError::from)?;
    let note = store.get(index).map_err(CliError::from)?;
    let number = index + 1;

    if !ctx.quiet() {
        match ui_ctx.mode {
            OutputMode::Pretty => {
                blank_line(&ui_ctx);
                print(
                    &ui_ctx,
                    &badge(&ui_ctx, Badge::Ok, &format!("Note '{}' added", note.title)),
                );
                let context = format!(
                    "#{}  \u{00B7}  {}  \u{00B7}  tags: {}",
                    number,
                    note.date_string(),
                    note.tags.len()
                );
                println!("{}", styled(&context, styles::dim(), ui_ctx.color));
                blank_line(&ui_ctx);
                print(
                    &ui_ctx,
                    &hint(
                        &ui_ctx,
                        &format!(
                            "notebook show {}  \u{00B7}  notebook list  \u{00B7}  notebook edit {}",
                            number, number
                        ),
                    ),
                );
            }
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("number={}", number);
                println!("date={}", note.date_string());
                println!("tag_count={}", note.tags.len());
            }
        }
    }
    Ok(())
}
