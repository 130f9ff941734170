//! File logging for todo list hosts.
//!
//! A host calls `init_logging` once at startup. Later calls with the same
//! settings succeed without effect; calls asking for other settings fail and
//! leave the running logger alone. Panics are recorded as one flattened line.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::path::PathBuf;
use std::str::FromStr;

const LOG_FILE_BASENAME: &str = "todolist";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 5;
const PANIC_SUMMARY_MAX_CHARS: usize = 160;

static ACTIVE: OnceCell<RunningLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Validated logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: LevelFilter,
    log_dir: PathBuf,
}

impl LogSettings {
    fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        Ok(Self {
            level: parse_level(level)?,
            log_dir: parse_log_dir(log_dir)?,
        })
    }

    fn conflict_with(&self, wanted: &LogSettings) -> Option<String> {
        if self.log_dir != wanted.log_dir {
            return Some(format!(
                "logging already writes to `{}`; refusing to switch to `{}`",
                self.log_dir.display(),
                wanted.log_dir.display()
            ));
        }
        if self.level != wanted.level {
            return Some(format!(
                "logging already runs at `{}`; refusing to switch to `{}`",
                level_name(self.level),
                level_name(wanted.level)
            ));
        }
        None
    }
}

struct RunningLogger {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Starts rotating file logs under `log_dir` at `level`.
///
/// `level` accepts `trace|debug|info|warn|error` in any case, plus
/// `warning`. `log_dir` must be absolute; it is created when missing.
///
/// # Errors
/// Returns a readable message for bad input, for a request that conflicts
/// with the running logger, and for backend start failures.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let wanted = LogSettings::parse(level, log_dir)?;
    let running = ACTIVE.get_or_try_init(|| start(wanted.clone()))?;
    match running.settings.conflict_with(&wanted) {
        Some(message) => Err(message),
        None => Ok(()),
    }
}

/// Level name and directory of the running logger.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE.get().map(|running| {
        (
            level_name(running.settings.level),
            running.settings.log_dir.clone(),
        )
    })
}

/// Level hosts use when none is configured.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start(settings: LogSettings) -> Result<RunningLogger, String> {
    std::fs::create_dir_all(&settings.log_dir).map_err(|err| {
        format!(
            "cannot create log directory `{}`: {err}",
            settings.log_dir.display()
        )
    })?;

    let spec = LogSpecification::builder().default(settings.level).build();
    let files = FileSpec::default()
        .directory(settings.log_dir.as_path())
        .basename(LOG_FILE_BASENAME);
    let handle = Logger::with(spec)
        .log_to_file(files)
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("log backend did not start: {err}"))?;

    hook_panics();

    info!(
        "event=logging_init module=core status=ok os={} debug_build={} version={} level={} log_dir={}",
        std::env::consts::OS,
        cfg!(debug_assertions),
        env!("CARGO_PKG_VERSION"),
        level_name(settings.level),
        settings.log_dir.display()
    );

    Ok(RunningLogger {
        settings,
        _handle: handle,
    })
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    let trimmed = raw.trim();
    let candidate = if trimmed.eq_ignore_ascii_case("warning") {
        "warn"
    } else {
        trimmed
    };
    match LevelFilter::from_str(candidate) {
        Ok(LevelFilter::Off) | Err(_) => Err(format!(
            "unsupported log level `{trimmed}`; use trace, debug, info, warn or error"
        )),
        Ok(level) => Ok(level),
    }
}

fn parse_log_dir(raw: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(raw.trim());
    if path.as_os_str().is_empty() {
        return Err("log directory is required".to_string());
    }
    if path.is_relative() {
        return Err(format!(
            "log directory must be absolute, got `{}`",
            path.display()
        ));
    }
    Ok(path)
}

fn level_name(level: LevelFilter) -> &'static str {
    match level {
        LevelFilter::Off => "off",
        LevelFilter::Error => "error",
        LevelFilter::Warn => "warn",
        LevelFilter::Info => "info",
        LevelFilter::Debug => "debug",
        LevelFilter::Trace => "trace",
    }
}

fn hook_panics() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let chained = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let at = info
            .location()
            .map_or_else(|| "unknown".to_string(), |loc| format!("{}:{}", loc.file(), loc.line()));
        error!(
            "event=panic_captured module=core status=error location={at} payload={}",
            summarize_panic(info.payload())
        );
        chained(info);
    }));
}

/// Payloads may carry task text, so they are cut short and kept on one line.
fn summarize_panic(payload: &(dyn Any + Send)) -> String {
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload");
    one_line(message, PANIC_SUMMARY_MAX_CHARS)
}

fn one_line(text: &str, max_chars: usize) -> String {
    let mut out = String::with_capacity(text.len().min(max_chars + 3));
    for (taken, ch) in text.chars().enumerate() {
        if taken == max_chars {
            out.push_str("...");
            break;
        }
        out.push(if matches!(ch, '\n' | '\r') { ' ' } else { ch });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{
        default_log_level, level_name, one_line, parse_level, parse_log_dir, summarize_panic,
        LogSettings,
    };
    use log::LevelFilter;

    #[test]
    fn parse_level_accepts_any_case_and_warning() {
        assert_eq!(parse_level("INFO"), Ok(LevelFilter::Info));
        assert_eq!(parse_level(" Warning "), Ok(LevelFilter::Warn));
        assert!(parse_level("verbose").is_err());
        assert!(parse_level("off").is_err());
    }

    #[test]
    fn parse_log_dir_requires_absolute_path() {
        assert!(parse_log_dir("   ").is_err());
        let err = parse_log_dir("logs/dev").expect_err("relative dir must fail");
        assert!(err.contains("absolute"));
    }

    #[test]
    fn conflicting_settings_are_described() {
        let running = LogSettings::parse("info", "/var/log/todolist").unwrap();
        let same = LogSettings::parse("INFO", "/var/log/todolist").unwrap();
        let louder = LogSettings::parse("debug", "/var/log/todolist").unwrap();
        let moved = LogSettings::parse("info", "/tmp/todolist").unwrap();

        assert_eq!(running.conflict_with(&same), None);
        assert!(running
            .conflict_with(&louder)
            .is_some_and(|msg| msg.contains("refusing to switch to `debug`")));
        assert!(running
            .conflict_with(&moved)
            .is_some_and(|msg| msg.contains("/tmp/todolist")));
    }

    #[test]
    fn one_line_flattens_and_caps() {
        assert_eq!(one_line("line1\nline2\rline3", 8), "line1 li...");
        assert_eq!(one_line("short", 8), "short");
    }

    #[test]
    fn panic_payloads_of_both_string_kinds_are_summarized() {
        let borrowed: Box<dyn std::any::Any + Send> = Box::new("boom\nnow");
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        let other: Box<dyn std::any::Any + Send> = Box::new(7_u8);

        assert_eq!(summarize_panic(borrowed.as_ref()), "boom now");
        assert_eq!(summarize_panic(owned.as_ref()), "owned");
        assert_eq!(summarize_panic(other.as_ref()), "non-string panic payload");
    }

    #[test]
    fn default_level_round_trips_through_parser() {
        let level = parse_level(default_log_level()).expect("default level must parse");
        assert_eq!(level_name(level), default_log_level());
    }
}
