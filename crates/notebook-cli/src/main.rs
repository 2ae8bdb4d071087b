//! Notebook CLI - a small personal note keeper with tags and search
//!
//! This is the command-line interface for Notebook. With no subcommand it
//! runs the interactive menu; each store operation is also available as a
//! scriptable subcommand.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{menu, misc, notes};
use crate::constants::LOG_ENV;
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);

        let error_msg = format!("{}", e);
        let (message, hint) = split_hint(&error_msg);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Log to stderr so stdout stays clean for note output and JSON.
fn init_tracing() {
    let directives = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".into());
    let filter = tracing_subscriber::EnvFilter::new(directives);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Separate a trailing "Hint: ..." line from an error message.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => (&error[..idx], Some(error[idx + 1..].trim_start_matches("Hint:").trim())),
        None => (error, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None | Some(Commands::Menu) => {
            menu::handle_menu(ctx)?;
        }
        Some(Commands::Add(args)) => {
            notes::handle_add(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            notes::handle_list(ctx, args)?;
        }
        Some(Commands::Search(args)) => {
            notes::handle_search(ctx, args)?;
        }
        Some(Commands::Tags(args)) => {
            notes::handle_tags(ctx, args)?;
        }
        Some(Commands::Filter(args)) => {
            notes::handle_filter(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            notes::handle_show(ctx, args)?;
        }
        Some(Commands::Edit(args)) => {
            notes::handle_edit(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            notes::handle_delete(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
    }

    Ok(())
}
