/// TargetFilter: decides which picked node is an interactive part.
///
/// Loaded models carry geometry that should never be hovered: helper
/// meshes (reference spheres, floor, light gizmos), tiny fragments
/// collapsed at the model origin, and slivers with a handful of vertices.
/// Rules are applied in a fixed order and the first failing rule wins.

use crate::config::FilterConfig;
use crate::scene::{NodeKey, SceneNode, SceneTree};
use super::pick_result::PickResult;

/// Per-node outcome of the filter rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterVerdict {
    Accepted,
    /// The node or an ancestor is flagged HELPER
    Helper,
    /// Tiny box sitting at the model origin
    DegenerateNearOrigin,
    /// Geometry with too few vertices to be a real part
    Sliver,
}

impl FilterVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FilterVerdict::Accepted)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TargetFilter {
    config: FilterConfig,
}

impl TargetFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Apply the rules to one node.
    pub fn evaluate(&self, node: &SceneNode, model_scale_hint: f32) -> FilterVerdict {
        if node.is_helper() {
            return FilterVerdict::Helper;
        }

        if let Some(world) = node.world_bounding_box() {
            let too_small = world.largest_dimension() < model_scale_hint * self.config.min_size_ratio;
            let near_origin =
                world.center().length() < model_scale_hint * self.config.origin_radius_ratio;
            if too_small && near_origin {
                return FilterVerdict::DegenerateNearOrigin;
            }
        }

        let vertices = node.vertex_count();
        if vertices > 0 && vertices < self.config.min_vertex_count {
            return FilterVerdict::Sliver;
        }

        FilterVerdict::Accepted
    }

    /// First accepted hit, nearest first. `None` if every hit is rejected.
    pub fn filter(&self, pick: &PickResult, scene: &SceneTree, model_scale_hint: f32) -> Option<NodeKey> {
        for hit in pick.iter() {
            let Some(node) = scene.node(hit.key) else {
                continue;
            };
            let verdict = self.evaluate(node, model_scale_hint);
            if verdict.is_accepted() {
                return Some(hit.key);
            }
            crate::engine_trace!(
                "showroom3d::TargetFilter",
                "Skipped '{}': {:?}",
                hit.id,
                verdict
            );
        }
        None
    }
}

#[cfg(test)]
#[path = "target_filter_tests.rs"]
mod tests;
