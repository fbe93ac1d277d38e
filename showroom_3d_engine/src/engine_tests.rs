//! Unit tests for engine.rs (logger host)
//!
//! The logger is process-wide, so every test here is #[serial].

use super::*;
use serial_test::serial;
use std::sync::{Arc, Mutex};

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    // Other unit tests log concurrently; keep only this module's entries
    fn log(&self, entry: &LogEntry) {
        if entry.source == "showroom3d::Test" {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger { entries: entries.clone() });
    entries
}

// ============================================================================
// LOGGER SLOT
// ============================================================================

#[test]
#[serial]
fn test_default_logger_logs_without_panic() {
    Engine::reset_logger();
    Engine::log(LogSeverity::Info, "showroom3d::Test", "hello".to_string());
}

#[test]
#[serial]
fn test_custom_logger_receives_logs() {
    Engine::reset_logger();
    let entries = install_capture();

    Engine::log(LogSeverity::Warn, "showroom3d::Test", "listener failed".to_string());

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Warn);
    assert_eq!(captured[0].source, "showroom3d::Test");
    assert_eq!(captured[0].message, "listener failed");
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_with_file_line() {
    Engine::reset_logger();
    let entries = install_capture();

    crate::engine_error!("showroom3d::Test", "broken {}", 7);

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].message, "broken 7");
    assert!(captured[0].file.is_some());
    assert!(captured[0].line.is_some());
    drop(captured);

    Engine::reset_logger();
}

// ============================================================================
// SEVERITY THRESHOLD
// ============================================================================

#[test]
#[serial]
fn test_default_threshold_drops_trace_and_debug() {
    Engine::reset_logger();
    let entries = install_capture();

    crate::engine_trace!("showroom3d::Test", "trace");
    crate::engine_debug!("showroom3d::Test", "debug");
    crate::engine_info!("showroom3d::Test", "info");

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].message, "info");
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_set_min_severity_trace_passes_everything() {
    Engine::reset_logger();
    let entries = install_capture();
    Engine::set_min_severity(LogSeverity::Trace);
    assert_eq!(Engine::min_severity(), LogSeverity::Trace);

    crate::engine_trace!("showroom3d::Test", "a");
    crate::engine_debug!("showroom3d::Test", "b");

    assert_eq!(entries.lock().unwrap().len(), 2);

    Engine::reset_logger();
    assert_eq!(Engine::min_severity(), LogSeverity::Info);
}

#[test]
#[serial]
fn test_set_logger_keeps_threshold() {
    Engine::reset_logger();
    Engine::set_min_severity(LogSeverity::Error);
    let entries = install_capture();

    crate::engine_warn!("showroom3d::Test", "dropped");
    assert!(entries.lock().unwrap().is_empty());

    Engine::reset_logger();
}
