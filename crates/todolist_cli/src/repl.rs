//! Line-driven event loop for the terminal host.
//!
//! Each line becomes one or two `UiEvent`s; the view is re-rendered after
//! every event that changed state.

use crate::command::{parse_line, Command, HELP_TEXT};
use log::debug;
use std::io::{self, BufRead, Write};
use todolist_core::{render_text, EventOutcome, TodoListView, UiEvent};

/// Runs until `:quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    view: &mut TodoListView,
    input: R,
    mut output: W,
) -> io::Result<()> {
    write!(output, "{}", render_text(&view.view_model()))?;

    for line in input.lines() {
        let line = line?;
        let command = parse_line(&line);
        debug!("event=command module=cli kind={}", command_kind(&command));

        let redraw = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{HELP_TEXT}")?;
                false
            }
            Command::Unknown(raw) => {
                writeln!(output, "unknown command: {raw} (try :help)")?;
                false
            }
            Command::List => true,
            Command::Json => {
                let snapshot = serde_json::to_string_pretty(&view.view_model())
                    .map_err(io::Error::other)?;
                writeln!(output, "{snapshot}")?;
                false
            }
            Command::Submit(text) => {
                view.handle(UiEvent::Edit(text));
                // Blank submissions are dropped without a message.
                view.handle(UiEvent::Enter) != EventOutcome::Rejected
            }
            Command::Toggle(row) => apply_to_row(view, row, UiEvent::Toggle),
            Command::Delete(row) => apply_to_row(view, row, UiEvent::Delete),
        };

        if redraw {
            write!(output, "{}", render_text(&view.view_model()))?;
        }
    }

    output.flush()
}

fn apply_to_row(
    view: &mut TodoListView,
    row: usize,
    event: fn(todolist_core::TaskId) -> UiEvent,
) -> bool {
    let Some(task_id) = row
        .checked_sub(1)
        .and_then(|index| view.store().tasks().get(index))
        .map(|task| task.id)
    else {
        return false;
    };
    view.handle(event(task_id)) != EventOutcome::Ignored
}

fn command_kind(command: &Command) -> &'static str {
    match command {
        Command::Submit(_) => "submit",
        Command::Toggle(_) => "toggle",
        Command::Delete(_) => "delete",
        Command::List => "list",
        Command::Json => "json",
        Command::Help => "help",
        Command::Quit => "quit",
        Command::Unknown(_) => "unknown",
    }
}
