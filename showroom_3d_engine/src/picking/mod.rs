//! Picking module
//!
//! Resolves which scene nodes lie under a pointer (`SpatialPicker`) and
//! which of them is an interactive target (`TargetFilter`).

mod pick_result;
mod picker;
mod target_filter;

pub use pick_result::{PickHit, PickResult};
pub use picker::{SpatialPicker, BruteForcePicker, FrustumPicker};
pub use target_filter::{TargetFilter, FilterVerdict};
