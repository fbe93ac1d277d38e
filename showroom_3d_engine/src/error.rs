//! Error types for the Showroom3D engine
//!
//! The per-frame interaction path never returns errors (a bad frame resolves
//! to "no target"). Errors are reserved for scene construction, configuration
//! and listener callbacks.

use std::fmt;

/// Result type for Showroom3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Showroom3D errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Node description rejected (inverted bounds, duplicate id, unknown key)
    InvalidNode(String),

    /// Hierarchy operation rejected (missing root, unknown parent)
    InvalidHierarchy(String),

    /// Configuration value out of range
    InvalidConfig(String),

    /// A transition listener reported a failure
    ListenerFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidNode(msg) => write!(f, "Invalid node: {}", msg),
            Error::InvalidHierarchy(msg) => write!(f, "Invalid hierarchy: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::ListenerFailed(msg) => write!(f, "Listener failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
