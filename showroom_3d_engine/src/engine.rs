/// Showroom3D Engine - global logger host
///
/// The interaction core keeps no module-level mutable state: scene, picker,
/// state machine and animator are owned values passed by reference. The only
/// process-wide slot is the logger, shared by every `engine_*!` macro.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<LoggerSlot>> = OnceLock::new();

/// Installed logger plus its severity threshold
struct LoggerSlot {
    logger: Box<dyn Logger>,
    min_severity: LogSeverity,
}

impl LoggerSlot {
    fn new() -> Self {
        Self {
            logger: Box::new(DefaultLogger),
            min_severity: LogSeverity::Info,
        }
    }
}

fn logger_slot() -> &'static RwLock<LoggerSlot> {
    LOGGER.get_or_init(|| RwLock::new(LoggerSlot::new()))
}

// ===== PUBLIC API =====

/// Engine-wide services.
///
/// # Example
///
/// ```no_run
/// use showroom_3d_engine::showroom3d::{Engine, log::{Logger, LogEntry, LogSeverity}};
///
/// struct Quiet;
/// impl Logger for Quiet {
///     fn log(&self, _entry: &LogEntry) {}
/// }
///
/// Engine::set_logger(Quiet);
/// Engine::set_min_severity(LogSeverity::Warn);
/// Engine::reset_logger();
/// ```
pub struct Engine;

impl Engine {
    // ===== LOGGING API =====

    /// Replace the active logger. The severity threshold is kept.
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut slot) = logger_slot().write() {
            slot.logger = Box::new(logger);
        }
    }

    /// Restore the DefaultLogger and the default threshold (Info)
    pub fn reset_logger() {
        if let Ok(mut slot) = logger_slot().write() {
            *slot = LoggerSlot::new();
        }
    }

    /// Drop entries less severe than `severity`
    pub fn set_min_severity(severity: LogSeverity) {
        if let Ok(mut slot) = logger_slot().write() {
            slot.min_severity = severity;
        }
    }

    /// Current severity threshold
    pub fn min_severity() -> LogSeverity {
        logger_slot()
            .read()
            .map(|slot| slot.min_severity)
            .unwrap_or(LogSeverity::Info)
    }

    /// Log without file:line (used by engine_trace! .. engine_warn!)
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level
    /// * `source` - Source module (e.g., "showroom3d::Picker")
    /// * `message` - Log message
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Log with file:line (used by engine_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        if let Ok(slot) = logger_slot().read() {
            if severity < slot.min_severity {
                return;
            }
            slot.logger.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
