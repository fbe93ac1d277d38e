//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_node_display() {
    let err = Error::InvalidNode("duplicate id 'wheel_fl'".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid node"));
    assert!(display.contains("wheel_fl"));
}

#[test]
fn test_invalid_hierarchy_display() {
    let err = Error::InvalidHierarchy("parent not found".to_string());
    assert_eq!(format!("{}", err), "Invalid hierarchy: parent not found");
}

#[test]
fn test_invalid_config_display() {
    let err = Error::InvalidConfig("reveal_duration must be > 0".to_string());
    let display = format!("{}", err);
    assert!(display.starts_with("Invalid config"));
}

#[test]
fn test_listener_failed_display() {
    let err = Error::ListenerFailed("tooltip panel detached".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Listener failed"));
    assert!(display.contains("tooltip panel detached"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidConfig("x".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug_and_clone() {
    let err = Error::InvalidNode("bad".to_string());
    let cloned = err.clone();
    assert_eq!(err, cloned);
    assert!(format!("{:?}", cloned).contains("InvalidNode"));
}

#[test]
fn test_result_question_mark_propagation() {
    fn inner() -> Result<u32> {
        Err(Error::InvalidHierarchy("no root".to_string()))
    }
    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    assert_eq!(outer(), Err(Error::InvalidHierarchy("no root".to_string())));
}
