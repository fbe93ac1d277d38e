//! Part status classification
//!
//! Every UI surface that shows a part's condition (highlight color,
//! tooltip text, info panel, particle tint, lock ring) reads it from
//! `classify`, so all of them agree for a given part.

use glam::Vec3;
use crate::scene::NodeId;

/// Condition category shown for a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Good,
    Warning,
    Neutral,
}

impl StatusCategory {
    /// Highlight color (linear RGB).
    pub fn color(&self) -> Vec3 {
        match self {
            StatusCategory::Good => Vec3::new(0.1, 0.85, 0.3),
            StatusCategory::Warning => Vec3::new(0.95, 0.15, 0.1),
            StatusCategory::Neutral => Vec3::new(1.0, 0.8, 0.2),
        }
    }

    /// Status text shown in tooltips and panels.
    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::Good => "Good condition",
            StatusCategory::Warning => "Needs attention",
            StatusCategory::Neutral => "Not inspected",
        }
    }
}

/// Sum of the id's UTF-16 code units with 32-bit signed wrap-around.
pub fn status_hash(id: &str) -> i32 {
    id.encode_utf16().fold(0i32, |hash, unit| hash.wrapping_add(unit as i32))
}

/// Classify a part by id.
///
/// Pure and stable across sessions: `|status_hash(id)| % 3` selects
/// Good (0), Warning (1) or Neutral (2).
pub fn classify(id: &NodeId) -> StatusCategory {
    classify_str(id.as_str())
}

/// `classify` for a raw string id.
pub fn classify_str(id: &str) -> StatusCategory {
    match status_hash(id).unsigned_abs() % 3 {
        0 => StatusCategory::Good,
        1 => StatusCategory::Warning,
        _ => StatusCategory::Neutral,
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
