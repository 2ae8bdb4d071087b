//! Interactive numbered menu, the default when no subcommand is given.
//!
//! The menu reads plain lines so it behaves the same on a terminal and with
//! piped input. End of input anywhere is treated like choosing Exit.

use std::io::{self, BufRead, Write};

use notebook_core::{NoteBackend, NoteStore, NoteUpdate, NotebookError};
use notebook_core::storage::parse_tag_list;

use crate::app::AppContext;
use crate::output::note_block;
use crate::ui::{badge, Badge, UiContext};

const RULE_WIDTH: usize = 50;

/// Line-oriented console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one line.
    ///
    /// Returns `None` at end of input. The trailing line break is removed.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Read lines until an empty one (or end of input) and join them.
    fn read_block(&mut self) -> io::Result<String> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n").trim().to_string())
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

enum Flow {
    Continue,
    Quit,
}

/// The menu session: a console plus display settings.
pub struct Menu<R, W> {
    console: Console<R, W>,
    ui: UiContext,
    preview_chars: usize,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(console: Console<R, W>, ui: UiContext, preview_chars: usize) -> Self {
        Self {
            console,
            ui,
            preview_chars,
        }
    }

    /// Run until the user exits or input ends, then flush unsaved changes.
    pub fn run<B: NoteBackend>(&mut self, store: &mut NoteStore<B>) -> anyhow::Result<()> {
        self.console
            .say(&format!("Loaded {} note(s).", store.len()?))?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.console.prompt("\nSelect an option: ")? else {
                break;
            };
            tracing::debug!(choice = choice.trim(), "menu choice");
            let flow = match choice.trim() {
                "1" => self.add(store)?,
                "2" => self.list(store)?,
                "3" => self.search(store)?,
                "4" => self.filter(store)?,
                "5" => self.edit(store)?,
                "6" => self.delete(store)?,
                "0" => Flow::Quit,
                _ => {
                    let msg = badge(&self.ui, Badge::Err, "Invalid option. Please try again.");
                    self.console.say(&format!("\n{}", msg))?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                break;
            }
        }

        self.console.say("\nSaving and exiting...")?;
        if store.is_dirty() {
            if let Err(err) = store.save() {
                let line = badge(
                    &self.ui,
                    Badge::Err,
                    &format!("Could not save notes: {}. Your latest changes were not saved.", err),
                );
                self.console.say(&line)?;
            }
        }
        self.console.say("Goodbye!")?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        self.console.say(&format!("\n{}", rule))?;
        self.console.say("       Personal Notebook Manager")?;
        self.console.say(&rule)?;
        for line in [
            "(1) Add note",
            "(2) List notes",
            "(3) Search notes",
            "(4) Filter by tag",
            "(5) Edit note",
            "(6) Delete note",
            "(0) Exit",
        ] {
            self.console.say(line)?;
        }
        self.console.say(&rule)
    }

    fn ok(&mut self, message: &str) -> io::Result<()> {
        let line = badge(&self.ui, Badge::Ok, message);
        self.console.say(&line)
    }

    /// Print a store error and keep the session going.
    fn report(&mut self, err: &NotebookError) -> io::Result<()> {
        let line = match err {
            NotebookError::Io(_) => badge(
                &self.ui,
                Badge::Err,
                &format!(
                    "Could not save notes: {}. The change is kept in memory and will be saved again on exit.",
                    err
                ),
            ),
            _ => badge(&self.ui, Badge::Err, &err.to_string()),
        };
        self.console.say(&line)
    }

    fn add<B: NoteBackend>(&mut self, store: &mut NoteStore<B>) -> anyhow::Result<Flow> {
        self.console.say("\n=== Add New Note ===")?;

        let title = loop {
            let Some(title) = self.console.prompt("Enter note title: ")? else {
                return Ok(Flow::Quit);
            };
            if !title.trim().is_empty() {
                break title;
            }
            self.console.say("Title cannot be empty. Please try again.")?;
        };

        self.console
            .say("Enter note content (press Enter on an empty line when done):")?;
        let content = self.console.read_block()?;

        let Some(tags) = self
            .console
            .prompt("Enter tags (comma-separated, e.g. 'work,important'): ")?
        else {
            return Ok(Flow::Quit);
        };

        match store.add(&title, &content, parse_tag_list(&tags)) {
            Ok(_) => self.ok(&format!("Note '{}' added successfully!", title.trim()))?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn list<B: NoteBackend>(&mut self, store: &NoteStore<B>) -> anyhow::Result<Flow> {
        let notes = store.list()?;
        if notes.is_empty() {
            self.console.say("\nNo notes found. Add your first note!")?;
            return Ok(Flow::Continue);
        }

        self.console
            .say(&format!("\n=== All Notes ({} total) ===", notes.len()))?;
        for (index, note) in notes.iter().enumerate() {
            let block = note_block(index + 1, note, self.preview_chars);
            self.console.say(&format!("\n{}", block))?;
        }
        Ok(Flow::Continue)
    }

    fn search<B: NoteBackend>(&mut self, store: &NoteStore<B>) -> anyhow::Result<Flow> {
        let Some(keyword) = self.console.prompt("\nEnter search keyword: ")? else {
            return Ok(Flow::Quit);
        };
        let keyword = keyword.trim();
        if keyword.is_empty() {
            self.console.say("Search keyword cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        let results = store.search(keyword)?;
        if results.is_empty() {
            self.console
                .say(&format!("\nNo notes found containing '{}'", keyword))?;
            return Ok(Flow::Continue);
        }

        self.console
            .say(&format!("\n=== Search Results ({} found) ===", results.len()))?;
        for r in &results {
            let block = note_block(r.index + 1, r.note, self.preview_chars);
            self.console.say(&format!("\n{}", block))?;
        }
        Ok(Flow::Continue)
    }

    fn filter<B: NoteBackend>(&mut self, store: &NoteStore<B>) -> anyhow::Result<Flow> {
        let tags = store.all_tags()?;
        if tags.is_empty() {
            self.console.say("\nNo tags found in any notes.")?;
            return Ok(Flow::Continue);
        }
        let available: Vec<&str> = tags.iter().map(String::as_str).collect();
        self.console
            .say(&format!("\nAvailable tags: {}", available.join(", ")))?;

        let Some(tag) = self.console.prompt("Enter tag to filter by: ")? else {
            return Ok(Flow::Quit);
        };
        let tag = tag.trim();
        if tag.is_empty() {
            self.console.say("Tag cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        let results = store.filter_by_tag(tag)?;
        if results.is_empty() {
            self.console
                .say(&format!("\nNo notes found with tag '{}'", tag))?;
            return Ok(Flow::Continue);
        }

        self.console.say(&format!(
            "\n=== Notes with tag '{}' ({} found) ===",
            tag,
            results.len()
        ))?;
        for r in &results {
            let block = note_block(r.index + 1, r.note, self.preview_chars);
            self.console.say(&format!("\n{}", block))?;
        }
        Ok(Flow::Continue)
    }

    /// Show the list and read a 1-based selection. `Ok(None)` means cancelled
    /// or rejected, with the reason already printed.
    fn select<B: NoteBackend>(
        &mut self,
        store: &NoteStore<B>,
        action: &str,
    ) -> anyhow::Result<Option<Option<usize>>> {
        if store.is_empty()? {
            self.console
                .say(&format!("\nNo notes available to {}.", action))?;
            return Ok(Some(None));
        }
        self.list(store)?;

        let label = format!("\nEnter note number to {} (0 to cancel): ", action);
        let Some(answer) = self.console.prompt(&label)? else {
            return Ok(None);
        };
        let number = match answer.trim().parse::<usize>() {
            Ok(number) => number,
            Err(_) => {
                self.console.say("Please enter a valid number.")?;
                return Ok(Some(None));
            }
        };
        if number == 0 {
            return Ok(Some(None));
        }
        if number > store.len()? {
            self.console.say("Invalid note number.")?;
            return Ok(Some(None));
        }
        Ok(Some(Some(number - 1)))
    }

    fn edit<B: NoteBackend>(&mut self, store: &mut NoteStore<B>) -> anyhow::Result<Flow> {
        let index = match self.select(store, "edit")? {
            None => return Ok(Flow::Quit),
            Some(None) => return Ok(Flow::Continue),
            Some(Some(index)) => index,
        };
        let current = store.get(index)?.clone();

        self.console.say(&format!("\nEditing: {}", current.title))?;
        self.console.say("(Press Enter to keep current value)")?;

        let mut update = NoteUpdate::new();

        let Some(title) = self
            .console
            .prompt(&format!("Title [{}]: ", current.title))?
        else {
            return Ok(Flow::Quit);
        };
        if !title.trim().is_empty() {
            update = update.title(title);
        }

        self.console
            .say(&format!("Current content: {}", current.content))?;
        let Some(answer) = self.console.prompt("Edit content? (y/n): ")? else {
            return Ok(Flow::Quit);
        };
        if answer.trim().eq_ignore_ascii_case("y") {
            self.console
                .say("Enter new content (press Enter on an empty line when done):")?;
            let content = self.console.read_block()?;
            if !content.is_empty() {
                update = update.content(content);
            }
        }

        let Some(tags) = self
            .console
            .prompt(&format!("Tags [{}]: ", current.tags.join(", ")))?
        else {
            return Ok(Flow::Quit);
        };
        if !tags.trim().is_empty() {
            update = update.tags(parse_tag_list(&tags));
        }

        if update.is_empty() {
            self.console.say("Nothing changed.")?;
            return Ok(Flow::Continue);
        }
        match store.edit(index, update) {
            Ok(_) => self.ok("Note updated successfully!")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn delete<B: NoteBackend>(&mut self, store: &mut NoteStore<B>) -> anyhow::Result<Flow> {
        let index = match self.select(store, "delete")? {
            None => return Ok(Flow::Quit),
            Some(None) => return Ok(Flow::Continue),
            Some(Some(index)) => index,
        };
        let title = store.get(index)?.title.clone();

        let label = format!("Are you sure you want to delete '{}'? (y/n): ", title);
        let Some(answer) = self.console.prompt(&label)? else {
            return Ok(Flow::Quit);
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            self.console.say("Deletion cancelled.")?;
            return Ok(Flow::Continue);
        }

        match store.delete(index) {
            Ok(_) => self.ok(&format!("Note '{}' deleted successfully!", title))?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.console.into_output()
    }
}

pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    println!("Welcome to Personal Notebook Manager!");
    println!("Loading notes...");
    let mut store = ctx.open_store()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let ui = UiContext::for_menu(ctx.no_color());
    let mut menu = Menu::new(console, ui, ctx.preview_chars()?);
    menu.run(&mut store)
}
