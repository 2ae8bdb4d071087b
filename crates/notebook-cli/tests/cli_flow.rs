use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_notebook"))
}

/// A scratch directory holding the notes file and an empty config home.
struct Scratch {
    dir: TempDir,
}

impl Scratch {
    fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("config")).expect("create config dir");
        Self { dir }
    }

    fn notes_path(&self) -> PathBuf {
        self.dir.path().join("notes.json")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.current_dir(self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("NO_COLOR", "1")
            .env_remove("NOTEBOOK_PATH")
            .env_remove("NOTEBOOK_CONFIG")
            .env_remove("NOTEBOOK_LOG")
            .arg("--notes")
            .arg(self.notes_path());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run notebook")
    }

    fn run_ok(&self, args: &[&str]) -> Output {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "notebook {:?} failed: stdout={}, stderr={}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }

    fn run_with_stdin(&self, args: &[&str], input: &[u8]) -> Output {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn notebook");
        child
            .stdin
            .as_mut()
            .expect("stdin")
            .write_all(input)
            .expect("write stdin");
        child.wait_with_output().expect("wait for notebook")
    }

    fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.run_ok(args);
        serde_json::from_slice(&output.stdout).expect("parse json output")
    }

    fn write_notes(&self, contents: &str) {
        std::fs::write(self.notes_path(), contents).expect("write notes file");
    }

    fn read_notes(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.notes_path()).expect("read notes file");
        serde_json::from_str(&raw).expect("notes file is JSON")
    }
}

fn titles(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("array output")
        .iter()
        .map(|note| note["title"].as_str().expect("title").to_string())
        .collect()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn corrupt_siblings(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().contains(".corrupt-"))
        .count()
}

#[test]
fn test_cli_add_list_show() {
    let scratch = Scratch::new();

    scratch.run_ok(&[
        "add",
        "Groceries",
        "--content",
        "milk and eggs",
        "--tag",
        "home,errands",
        "--no-input",
    ]);
    scratch.run_ok(&["add", "Rust ideas", "--content", "write a parser", "-t", "work"]);

    let list = scratch.json(&["list", "--json"]);
    assert_eq!(titles(&list), vec!["Groceries", "Rust ideas"]);
    assert_eq!(list[0]["number"], 1);
    assert_eq!(list[0]["tags"], serde_json::json!(["home", "errands"]));

    let show = scratch.run_ok(&["show", "2"]);
    let output = String::from_utf8_lossy(&show.stdout);
    assert!(output.contains("Rust ideas"));
    assert!(output.contains("write a parser"));

    // On-disk shape: an array of objects with the four fields
    let persisted = scratch.read_notes();
    let first = &persisted[0];
    assert_eq!(first["title"], "Groceries");
    assert_eq!(first["content"], "milk and eggs");
    assert!(first["date"].as_str().expect("date text").len() == 19);
}

#[test]
fn test_cli_list_plain_rows() {
    let scratch = Scratch::new();
    scratch.run_ok(&["add", "Groceries", "--content", "milk", "-t", "home"]);

    let list = scratch.run_ok(&["list", "--format", "plain"]);
    let output = String::from_utf8_lossy(&list.stdout);
    let row = output.lines().next().expect("one row");
    let fields: Vec<&str> = row.split('\t').collect();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0], "1");
    assert_eq!(fields[2], "Groceries");
    assert_eq!(fields[3], "home");
}

#[test]
fn test_cli_search_filter_and_tags() {
    let scratch = Scratch::new();
    scratch.run_ok(&["add", "Groceries", "--content", "milk", "-t", "home"]);
    scratch.run_ok(&["add", "Rust ideas", "--content", "A PARSER", "-t", "Work,ideas"]);
    scratch.run_ok(&["add", "Meeting", "--content", "parser review", "-t", "work"]);

    let search = scratch.json(&["search", "parser", "--json"]);
    assert_eq!(titles(&search), vec!["Rust ideas", "Meeting"]);
    assert_eq!(search[0]["number"], 2);

    let filter = scratch.json(&["filter", "WORK", "--json"]);
    assert_eq!(titles(&filter), vec!["Rust ideas", "Meeting"]);

    let tags = scratch.json(&["tags", "--json"]);
    assert_eq!(tags, serde_json::json!(["Work", "home", "ideas", "work"]));

    let none = scratch.json(&["search", "nothing-matches", "--json"]);
    assert_eq!(none, serde_json::json!([]));
}

#[test]
fn test_cli_edit_keeps_omitted_fields() {
    let scratch = Scratch::new();
    scratch.run_ok(&["add", "Draft", "--content", "first version", "-t", "writing"]);

    scratch.run_ok(&["edit", "1", "--title", "Final"]);
    let note = scratch.json(&["show", "1", "--json"]);
    assert_eq!(note["title"], "Final");
    assert_eq!(note["content"], "first version");
    assert_eq!(note["tags"], serde_json::json!(["writing"]));

    scratch.run_ok(&["edit", "1", "--clear-tags"]);
    let note = scratch.json(&["show", "1", "--json"]);
    assert_eq!(note["tags"], serde_json::json!([]));
}

#[test]
fn test_cli_edit_requires_a_change() {
    let scratch = Scratch::new();
    scratch.run_ok(&["add", "Draft", "--content", "x"]);

    let edit = scratch.run(&["edit", "1", "--no-input"]);
    assert_eq!(edit.status.code(), Some(4));
}

#[test]
fn test_cli_edit_ignores_unrequested_piped_stdin() {
    let scratch = Scratch::new();
    scratch.run_ok(&["add", "Draft", "--content", "keep me"]);

    let edit = scratch.run_with_stdin(&["edit", "1", "--title", "Final"], b"unrelated pipeline data\n");
    assert!(edit.status.success(), "stderr={}", stderr(&edit));

    let note = scratch.json(&["show", "1", "--json"]);
    assert_eq!(note["title"], "Final");
    assert_eq!(note["content"], "keep me");
}

#[test]
fn test_cli_content_dash_reads_stdin() {
    let scratch = Scratch::new();
    let add = scratch.run_with_stdin(&["add", "Piped", "--content", "-"], b"from a pipe\n");
    assert!(add.status.success(), "stderr={}", stderr(&add));
    assert_eq!(scratch.json(&["show", "1", "--json"])["content"], "from a pipe");

    let edit = scratch.run_with_stdin(&["edit", "1", "--content", "-"], b"second\nversion\n");
    assert!(edit.status.success(), "stderr={}", stderr(&edit));
    let note = scratch.json(&["show", "1", "--json"]);
    assert_eq!(note["title"], "Piped");
    assert_eq!(note["content"], "second\nversion");
}

#[test]
fn test_cli_add_without_content_ignores_piped_stdin() {
    let scratch = Scratch::new();
    let add = scratch.run_with_stdin(&["add", "Bare"], b"not meant for the note\n");
    assert!(add.status.success(), "stderr={}", stderr(&add));
    assert_eq!(scratch.json(&["show", "1", "--json"])["content"], "");
}

#[test]
fn test_cli_delete_shifts_numbers() {
    let scratch = Scratch::new();
    for title in ["A", "B", "C"] {
        scratch.run_ok(&["add", title, "--content", ""]);
    }

    scratch.run_ok(&["delete", "2", "--yes"]);
    let list = scratch.json(&["list", "--json"]);
    assert_eq!(titles(&list), vec!["A", "C"]);
    assert_eq!(list[1]["number"], 2);
}

#[test]
fn test_cli_delete_without_yes_needs_a_terminal() {
    let scratch = Scratch::new();
    scratch.run_ok(&["add", "Keep me", "--content", ""]);

    let delete = scratch.run(&["delete", "1"]);
    assert_eq!(delete.status.code(), Some(4));
    assert_eq!(titles(&scratch.json(&["list", "--json"])), vec!["Keep me"]);
}

#[test]
fn test_cli_invalid_number_exits_not_found() {
    let scratch = Scratch::new();
    scratch.run_ok(&["add", "Only", "--content", ""]);
    let before = std::fs::read_to_string(scratch.notes_path()).expect("read notes");

    let show = scratch.run(&["show", "5"]);
    assert_eq!(show.status.code(), Some(3));
    let message = stderr(&show);
    assert!(message.contains("No note #5"));
    assert!(message.contains("notebook list"));

    let delete = scratch.run(&["delete", "2", "--yes"]);
    assert_eq!(delete.status.code(), Some(3));

    let zero = scratch.run(&["edit", "0", "--title", "x"]);
    assert_eq!(zero.status.code(), Some(4));

    let after = std::fs::read_to_string(scratch.notes_path()).expect("read notes");
    assert_eq!(before, after);
}

#[test]
fn test_cli_blank_title_is_rejected_without_writing() {
    let scratch = Scratch::new();

    let add = scratch.run(&["add", "   ", "--content", "body", "--no-input"]);
    assert_eq!(add.status.code(), Some(4));
    assert!(!scratch.notes_path().exists());

    let missing = scratch.run(&["add", "--no-input"]);
    assert_eq!(missing.status.code(), Some(4));
}

#[test]
fn test_cli_missing_file_lists_nothing() {
    let scratch = Scratch::new();
    let list = scratch.json(&["list", "--json"]);
    assert_eq!(list, serde_json::json!([]));
    assert!(!scratch.notes_path().exists());
}

#[test]
fn test_cli_missing_directory_is_io_failure() {
    let scratch = Scratch::new();
    let path = scratch.dir.path().join("nope").join("notes.json");
    let output = Command::new(bin())
        .env("XDG_CONFIG_HOME", scratch.dir.path().join("config"))
        .env_remove("NOTEBOOK_CONFIG")
        .arg("--notes")
        .arg(&path)
        .arg("list")
        .output()
        .expect("run notebook");
    assert_eq!(output.status.code(), Some(6));
    assert!(stderr(&output).contains("directory does not exist"));
}

#[test]
fn test_cli_corrupt_store_aborts_by_default() {
    let scratch = Scratch::new();
    scratch.write_notes("{ this is not json");

    let list = scratch.run(&["list", "--json"]);
    assert_eq!(list.status.code(), Some(5));
    assert!(stderr(&list).contains("--on-corrupt start-fresh"));
    let untouched = std::fs::read_to_string(scratch.notes_path()).expect("read notes");
    assert_eq!(untouched, "{ this is not json");
}

#[test]
fn test_cli_corrupt_store_start_fresh_keeps_old_file() {
    let scratch = Scratch::new();
    scratch.write_notes(r#"{"title": "not an array"}"#);

    scratch.run_ok(&[
        "--on-corrupt",
        "start-fresh",
        "add",
        "New start",
        "--content",
        "",
    ]);
    assert_eq!(titles(&scratch.read_notes()), vec!["New start"]);
    assert_eq!(corrupt_siblings(scratch.dir.path()), 1);
}

#[test]
fn test_cli_config_file_sets_store_path_and_policy() {
    let scratch = Scratch::new();
    let config_dir = scratch.dir.path().join("config").join("notebook");
    std::fs::create_dir_all(&config_dir).expect("create config dir");
    let configured = scratch.dir.path().join("configured.json");
    std::fs::write(
        config_dir.join("config.toml"),
        format!(
            "[store]\npath = \"{}\"\non_corrupt = \"start-fresh\"\n",
            configured.to_string_lossy()
        ),
    )
    .expect("write config");
    std::fs::write(&configured, "not json").expect("write corrupt store");

    let output = Command::new(bin())
        .current_dir(scratch.dir.path())
        .env("XDG_CONFIG_HOME", scratch.dir.path().join("config"))
        .env_remove("NOTEBOOK_PATH")
        .env_remove("NOTEBOOK_CONFIG")
        .args(["add", "From config", "--content", ""])
        .output()
        .expect("run notebook");
    assert!(output.status.success(), "stderr={}", stderr(&output));

    let raw = std::fs::read_to_string(&configured).expect("read configured store");
    assert!(raw.contains("From config"));
    assert!(!scratch.notes_path().exists());
}

#[test]
fn test_cli_format_with_json_is_rejected() {
    let scratch = Scratch::new();
    let list = scratch.run(&["list", "--json", "--format", "plain"]);
    assert_eq!(list.status.code(), Some(4));
    assert!(stderr(&list).contains("--format cannot be used with --json"));
}

#[test]
fn test_cli_unsupported_format_exits_invalid_input() {
    let scratch = Scratch::new();
    scratch.run_ok(&["add", "Only", "--content", ""]);

    for args in [
        &["list", "--format", "xml"][..],
        &["search", "Only", "--format", "xml"][..],
        &["filter", "work", "--format", "xml"][..],
    ] {
        let output = scratch.run(args);
        assert_eq!(output.status.code(), Some(4), "notebook {:?}", args);
        assert!(stderr(&output).contains("Unsupported format: xml"));
    }
}

#[test]
fn test_cli_menu_over_piped_stdin() {
    let scratch = Scratch::new();
    let mut child = scratch
        .command()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn notebook");

    {
        let stdin = child.stdin.as_mut().expect("stdin");
        stdin
            .write_all(b"1\nPiped note\nline one\nline two\n\nmenu, test\n2\n0\n")
            .expect("write menu input");
    }
    let output = child.wait_with_output().expect("wait for menu");
    assert!(output.status.success(), "stderr={}", stderr(&output));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome to Personal Notebook Manager!"));
    assert!(stdout.contains("Loaded 0 note(s)."));
    assert!(stdout.contains("Note 'Piped note' added successfully!"));
    assert!(stdout.contains("[1] Piped note"));
    assert!(stdout.contains("Tags: menu, test"));
    assert!(stdout.contains("Goodbye!"));

    let persisted = scratch.read_notes();
    assert_eq!(persisted[0]["content"], "line one\nline two");
}

#[test]
fn test_cli_completions() {
    let scratch = Scratch::new();
    let output = scratch.run_ok(&["completions", "bash"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("notebook"));
}
