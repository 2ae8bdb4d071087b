use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::{confirm, is_interactive, parse_position};
use crate::ui::{badge, print, Badge, OutputMode};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let index = parse_position(args.number)?;
    let mut store = ctx.open_store()?;
    let title = store.get(index).map_err(CliError::from)?.title.clone();

    if !args.yes {
        if !is_interactive() {
            return Err(CliError::invalid_input(
                "Refusing to delete without confirmation (pass --yes)",
            )
            .into());
        }
        let confirmed = confirm(&format!("Are you sure you want to delete '{}'?", title))?;
        if !confirmed {
            if !ctx.quiet() {
                let ui_ctx = ctx.ui_context(false, None);
                match ui_ctx.mode {
                    OutputMode::Pretty => {
                        print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Deletion cancelled"));
                    }
                    OutputMode::Plain | OutputMode::Json => {
                        println!("status=cancelled");
                    }
                }
            }
            return Ok(());
        }
    }

    let removed = store.delete(index).map_err(CliError::from)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        match ui_ctx.mode {
            OutputMode::Pretty => {
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Ok,
                        &format!("Note '{}' deleted", removed.title),
                    ),
                );
            }
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("deleted={}", args.number);
            }
        }
    }
    Ok(())
}
