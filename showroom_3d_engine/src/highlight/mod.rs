//! Highlight module
//!
//! Visual feedback driven by interaction transitions: the bounding marker
//! reveal on hover, the lock ring on selection, and the per-part material
//! swap. Everything here is time-driven and cancelled by animation tokens.

mod easing;
mod animation_job;
mod highlight_animator;
pub mod material_swap;

pub use easing::{ease_out_cubic, lerp};
pub use animation_job::{AnimationJob, AnimationKind};
pub use highlight_animator::{HighlightAnimator, RingState};
pub use material_swap::{MaterialSwap, MaterialState};
