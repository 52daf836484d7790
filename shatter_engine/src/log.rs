//! Engine logging: entries, severities and the built-in sinks
//!
//! Every message goes through `Engine::log` / `Engine::log_detailed` to the
//! installed `Logger`. Console output is colored; the file sink writes the
//! same line without escape codes. Error and fatal entries carry the
//! `file:line` of the macro call.

use colored::*;
use chrono::{DateTime, Local};
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;

/// Destination of engine messages
///
/// # Example
///
/// ```ignore
/// use shatter_engine::shatter::log::{Logger, LogEntry};
///
/// struct OverlayLogger;
///
/// impl Logger for OverlayLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Push to the debug overlay...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Called synchronously from the logging thread; keep it cheap
    fn log(&self, entry: &LogEntry);
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,
    pub timestamp: SystemTime,

    /// Emitting component, `"shatter::<Component>"` inside the engine
    pub source: String,

    pub message: String,

    /// Call site, set for Error and Fatal entries only
    pub file: Option<&'static str>,
    pub line: Option<u32>,
}

/// Ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    Trace,
    Debug,
    Info,
    /// Recoverable failures and degenerate draws
    Warn,
    Error,
    /// The process exits right after the entry is written
    Fatal,
}

impl LogSeverity {
    /// Five-character label, padded so columns line up
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
            LogSeverity::Fatal => "FATAL",
        }
    }
}

/// Local time as `YYYY-MM-DD HH:MM:SS.mmm`
fn format_timestamp(timestamp: SystemTime) -> String {
    let datetime: DateTime<Local> = timestamp.into();
    datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// `[timestamp] [SEVERITY] [source] message`, plus ` (file:line)` when known
fn compose(entry: &LogEntry, severity: impl Display, source: impl Display) -> String {
    let mut line = format!(
        "[{}] [{}] [{}] {}",
        format_timestamp(entry.timestamp), severity, source, entry.message
    );
    if let (Some(file), Some(number)) = (entry.file, entry.line) {
        line.push_str(&format!(" ({}:{})", file, number));
    }
    line
}

/// Uncolored rendering of an entry, as written by `FileLogger`
pub fn format_plain(entry: &LogEntry) -> String {
    compose(entry, entry.severity.label(), &entry.source)
}

/// Colored stdout logger, installed until `Engine::set_logger` replaces it
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let label = entry.severity.label();
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
            LogSeverity::Fatal => label.white().on_red().bold(),
        };
        println!("{}", compose(entry, severity, entry.source.bright_blue()));
    }
}

/// Session log file, truncated when the logger is created
///
/// Write errors are ignored so logging never fails the caller.
pub struct FileLogger {
    file: Mutex<File>,
}

impl FileLogger {
    pub fn create(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(Self { file: Mutex::new(file) })
    }
}

impl Logger for FileLogger {
    fn log(&self, entry: &LogEntry) {
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", format_plain(entry));
        }
    }
}

// ===== LOGGING MACROS =====

/// Trace-level entry, for per-draw detail
///
/// # Example
///
/// ```ignore
/// engine_trace!("shatter::RenderPass", "Skipping redundant program bind");
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::shatter::Engine::log(
            $crate::shatter::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Debug-level entry
///
/// # Example
///
/// ```ignore
/// engine_debug!("shatter::Renderer", "Queued {} renderables", count);
/// ```
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::shatter::Engine::log(
            $crate::shatter::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Info-level entry: resource creation, reloads
///
/// # Example
///
/// ```ignore
/// engine_info!("shatter::ResourceManager", "Created mesh \"{}\"", name);
/// ```
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::shatter::Engine::log(
            $crate::shatter::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Warn-level entry: the operation was skipped or fell back
///
/// # Example
///
/// ```ignore
/// engine_warn!("shatter::Mesh", "Draw called on a mesh that is not ready");
/// ```
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::shatter::Engine::log(
            $crate::shatter::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Error-level entry tagged with the call site
///
/// # Example
///
/// ```ignore
/// engine_error!("shatter::Renderer", "Failed to submit frame: {}", error);
/// ```
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::shatter::Engine::log_detailed(
            $crate::shatter::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Fatal entry tagged with the call site, then `exit(1)`
///
/// Reserved for startup failures of mandatory subsystems.
///
/// # Example
///
/// ```ignore
/// engine_fatal!("app::Window", "No graphics context available");
/// ```
#[macro_export]
macro_rules! engine_fatal {
    ($source:expr, $($arg:tt)*) => {{
        $crate::shatter::Engine::log_detailed(
            $crate::shatter::log::LogSeverity::Fatal,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        );
        ::std::process::exit(1)
    }};
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
