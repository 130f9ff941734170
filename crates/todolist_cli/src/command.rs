//! Line-level command parsing for the terminal host.
//!
//! Plain lines are draft text followed by a submission. Lines starting with
//! `:` are commands; `::` escapes a literal leading colon.

use once_cell::sync::Lazy;
use regex::Regex;

static COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^:(toggle|t|delete|d|list|l|json|j|help|h|quit|q)(?:\s+(\d+))?\s*$")
        .expect("valid command regex")
});

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type `text` into the draft, then press Enter.
    Submit(String),
    /// Toggle the task at a 1-based row.
    Toggle(usize),
    /// Delete the task at a 1-based row.
    Delete(usize),
    List,
    /// Print the current view model as JSON.
    Json,
    Help,
    Quit,
    /// Malformed `:` command; carries the raw line.
    Unknown(String),
}

pub const HELP_TEXT: &str = "\
type text and press Enter to add a task
:toggle N (:t N)  flip completion of row N
:delete N (:d N)  delete row N
:list (:l)        redraw the list
:json (:j)        print the view as JSON
:quit (:q)        exit
::text            add a task starting with ':'";

/// Parses one line with its trailing newline already stripped.
pub fn parse_line(line: &str) -> Command {
    if let Some(escaped) = line.strip_prefix("::") {
        return Command::Submit(format!(":{escaped}"));
    }
    if !line.starts_with(':') {
        return Command::Submit(line.to_string());
    }

    let Some(captures) = COMMAND_RE.captures(line.trim_end()) else {
        return Command::Unknown(line.to_string());
    };
    let row = captures
        .get(2)
        .and_then(|value| value.as_str().parse::<usize>().ok());

    match (&captures[1], row) {
        ("toggle" | "t", Some(row)) => Command::Toggle(row),
        ("delete" | "d", Some(row)) => Command::Delete(row),
        ("list" | "l", None) => Command::List,
        ("json" | "j", None) => Command::Json,
        ("help" | "h", None) => Command::Help,
        ("quit" | "q", None) => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}
