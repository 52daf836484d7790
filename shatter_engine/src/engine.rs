/// Shatter Engine - process-wide logging front door
///
/// The logger is the only global in the engine. Renderers, resource managers
/// and passes are plain values owned by the application and passed explicitly.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Installed logger, console output until replaced
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn installed() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

fn install(logger: Box<dyn Logger>) {
    if let Ok(mut slot) = installed().write() {
        *slot = logger;
    }
}

fn dispatch(entry: LogEntry) {
    // A poisoned lock drops the entry; logging never fails the caller
    if let Ok(logger) = installed().read() {
        logger.log(&entry);
    }
}

/// Engine-wide services shared by every subsystem
///
/// # Example
///
/// ```ignore
/// use shatter_engine::shatter::{Engine, log::FileLogger};
///
/// Engine::set_logger(FileLogger::create("ShatterGlobalLog.log")?);
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Route every following entry to `logger`
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        install(Box::new(logger));
    }

    /// Go back to colored console output
    pub fn reset_logger() {
        install(Box::new(DefaultLogger));
    }

    /// Entry without a call site, used by `engine_info!`, `engine_warn!` and friends
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }

    /// Entry tagged with `file:line`, used by `engine_error!`, `engine_err!`
    /// and `engine_fatal!`
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
