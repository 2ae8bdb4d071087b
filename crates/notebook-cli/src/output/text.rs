//! Text and table output formatting for notes.

use notebook_core::{Note, NoteRef};

use crate::ui::{
    blank_line, header, kv, preview, print, single_line, table, tag_line, truncate, wrap, Column,
    OutputMode, UiContext,
};

const TITLE_COLUMN_CHARS: usize = 40;

/// Pair every note with its position, for printing a whole list.
pub fn all_refs(notes: &[Note]) -> Vec<NoteRef<'_>> {
    notes
        .iter()
        .enumerate()
        .map(|(index, note)| NoteRef { index, note })
        .collect()
}

/// The block used by the interactive menu:
///
/// ```text
/// [1] Groceries
///     Date: 2024-03-01 09:30:00
///     Tags: home
///     Content: milk
/// ```
pub fn note_block(number: usize, note: &Note, preview_chars: usize) -> String {
    format!(
        "[{}] {}\n    Date: {}\n    Tags: {}\n    Content: {}",
        number,
        note.title,
        note.date_string(),
        tag_line(&note.tags),
        preview(&note.content, preview_chars)
    )
}

/// Print a list of notes as a table (pretty) or tab-separated rows (plain).
///
/// Plain rows are `number<TAB>date<TAB>title<TAB>tags`.
pub fn print_note_list(
    ui: &UiContext,
    command: &str,
    context: Option<&str>,
    refs: &[NoteRef<'_>],
    preview_chars: usize,
    quiet: bool,
) {
    if refs.is_empty() {
        if !quiet {
            match context {
                Some(c) => eprintln!("No notes found ({})", c),
                None => eprintln!("No notes found. Add your first note with `notebook add`."),
            }
        }
        return;
    }

    match ui.mode {
        OutputMode::Pretty => {
            if !quiet {
                print(ui, &header(ui, command, context));
                blank_line(ui);
            }
            let columns = [
                Column::new("#"),
                Column::new("Title"),
                Column::new("Date"),
                Column::new("Tags"),
                Column::new("Content"),
            ];
            let rows: Vec<Vec<String>> = refs
                .iter()
                .map(|r| {
                    vec![
                        (r.index + 1).to_string(),
                        truncate(&single_line(&r.note.title), TITLE_COLUMN_CHARS),
                        r.note.date_string(),
                        tag_line(&r.note.tags),
                        preview(&single_line(&r.note.content), preview_chars),
                    ]
                })
                .collect();
            print(ui, &table(ui, &columns, &rows));
            if !quiet {
                blank_line(ui);
                print(ui, &format!("{} note(s)", refs.len()));
            }
        }
        OutputMode::Plain | OutputMode::Json => {
            let rows: Vec<Vec<String>> = refs
                .iter()
                .map(|r| {
                    vec![
                        (r.index + 1).to_string(),
                        r.note.date_string(),
                        single_line(&r.note.title),
                        r.note.tags.join(","),
                    ]
                })
                .collect();
            println!("{}", table(ui, &[], &rows));
        }
    }
}

/// Print a single note in full.
pub fn print_note(ui: &UiContext, index: usize, note: &Note, quiet: bool) {
    if !quiet {
        match ui.mode {
            OutputMode::Pretty => {
                let number = format!("#{}", index + 1);
                print(ui, &header(ui, "show", Some(&number)));
                blank_line(ui);
                print(ui, &kv(ui, "Title", &note.title));
            }
            OutputMode::Plain | OutputMode::Json => {
                print(ui, &kv(ui, "Number", &(index + 1).to_string()));
                print(ui, &kv(ui, "Title", &single_line(&note.title)));
            }
        }
        print(ui, &kv(ui, "Date", &note.date_string()));
        print(ui, &kv(ui, "Tags", &tag_line(&note.tags)));
        println!();
    }

    if ui.mode.is_pretty() {
        for line in wrap(&note.content, ui.width.max(20)) {
            println!("{}", line);
        }
    } else {
        println!("{}", note.content);
    }
}
