//! Terminal host for the todo list.
//!
//! # Responsibility
//! - Bootstrap optional file logging and view config from flags.
//! - Drive one `TodoListView` from stdin until `:quit` or EOF.

mod command;
mod repl;

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use todolist_core::{default_log_level, init_logging, TodoListView, ViewConfig};

#[derive(Debug, Parser)]
#[command(name = "todolist", version, about = "In-memory todo list for the terminal")]
struct Cli {
    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long)]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error; defaults by build mode.
    #[arg(long)]
    log_level: Option<String>,

    /// JSON file overriding title, placeholder and empty message.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("todolist: {err}");
            return ExitCode::FAILURE;
        }
    }

    let config = match cli.config.as_deref() {
        Some(path) => match ViewConfig::from_path(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("todolist: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => ViewConfig::default(),
    };

    let mut view = TodoListView::with_config(config);
    let stdin = io::stdin();
    match repl::run(&mut view, stdin.lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("todolist: {err}");
            ExitCode::FAILURE
        }
    }
}
