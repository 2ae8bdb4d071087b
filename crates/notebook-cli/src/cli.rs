use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use notebook_core::VERSION;

use crate::config::CorruptPolicy;

/// Notebook - a small personal note keeper with tags and search
///
/// Run without a subcommand for the interactive menu.
#[derive(Parser)]
#[command(name = "notebook")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the notes file
    #[arg(short, long, global = true, env = "NOTEBOOK_PATH")]
    pub notes: Option<String>,

    /// What to do if the notes file cannot be parsed
    #[arg(long, global = true, value_enum, value_name = "POLICY")]
    pub on_corrupt: Option<CorruptPolicy>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Note title
    #[arg(value_name = "TITLE")]
    pub title: Option<String>,

    /// Note content (use - to read it from stdin)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Add a tag (repeatable, or comma-separated)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in titles and content (case-insensitive)
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `filter` command
#[derive(Args)]
pub struct FilterArgs {
    /// Tag to filter by (case-insensitive)
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `tags` command
#[derive(Args)]
pub struct TagsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Note number as shown by `list` (starting at 1)
    #[arg(value_name = "NUMBER")]
    pub number: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Note number as shown by `list` (starting at 1)
    #[arg(value_name = "NUMBER")]
    pub number: usize,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New content (use - to read it from stdin)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Replace tags (repeatable, or comma-separated)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Remove all tags
    #[arg(long, conflicts_with = "tag")]
    pub clear_tags: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Note number as shown by `list` (starting at 1)
    #[arg(value_name = "NUMBER")]
    pub number: usize,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu (the default)
    Menu,

    /// Add a new note
    Add(AddArgs),

    /// List all notes
    List(ListArgs),

    /// Search notes by keyword in title or content
    Search(SearchArgs),

    /// List every tag in use
    Tags(TagsArgs),

    /// Show notes carrying a tag
    Filter(FilterArgs),

    /// Show a single note
    Show(ShowArgs),

    /// Edit a note (omitted fields are kept)
    Edit(EditArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
