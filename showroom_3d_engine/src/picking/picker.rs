/// Spatial picking strategies.
///
/// A SpatialPicker casts a ray through a pointer position and returns
/// every node whose surface the ray crosses: its triangles when the node
/// carries geometry, its oriented bounding box otherwise.

use glam::Vec2;
use crate::camera::{Camera, Ray};
use crate::scene::{NodeKey, SceneTree};
use super::pick_result::{PickHit, PickResult};

/// Strategy for resolving the nodes under a pointer.
///
/// Implementations must be pure: the same inputs give the same result,
/// and nothing in the scene is modified.
pub trait SpatialPicker {
    /// Cast a ray through `pointer_ndc` (x, y in [-1, 1], y up).
    ///
    /// Returns an empty result when the scene is not loaded, the
    /// coordinates are not finite, or the camera cannot be inverted.
    fn pick(&self, pointer_ndc: Vec2, camera: &Camera, scene: Option<&SceneTree>) -> PickResult;
}

/// Ray-tests every node reachable from the root.
///
/// Suitable for product models (a few hundred parts).
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForcePicker;

impl BruteForcePicker {
    pub fn new() -> Self {
        Self
    }
}

impl SpatialPicker for BruteForcePicker {
    fn pick(&self, pointer_ndc: Vec2, camera: &Camera, scene: Option<&SceneTree>) -> PickResult {
        let Some((tree, root, ray)) = prepare(pointer_ndc, camera, scene) else {
            return PickResult::empty();
        };
        let hits = tree
            .descendants(root)
            .into_iter()
            .filter_map(|key| hit_node(tree, key, &ray))
            .collect();
        finish(PickResult::from_hits(hits))
    }
}

/// Rejects nodes outside the camera frustum before ray-testing.
///
/// For a pointer inside the viewport (NDC within [-1, 1]) it returns the
/// same hits as BruteForcePicker, minus nodes lying entirely beyond the
/// far plane. Outside the viewport it finds nothing off-screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrustumPicker;

impl FrustumPicker {
    pub fn new() -> Self {
        Self
    }
}

impl SpatialPicker for FrustumPicker {
    fn pick(&self, pointer_ndc: Vec2, camera: &Camera, scene: Option<&SceneTree>) -> PickResult {
        let Some((tree, root, ray)) = prepare(pointer_ndc, camera, scene) else {
            return PickResult::empty();
        };
        let frustum = camera.frustum();
        let hits = tree
            .descendants(root)
            .into_iter()
            .filter(|&key| {
                tree.node(key)
                    .and_then(|node| node.world_bounding_box())
                    .map(|world| frustum.intersects_aabb(&world))
                    .unwrap_or(false)
            })
            .filter_map(|key| hit_node(tree, key, &ray))
            .collect();
        finish(PickResult::from_hits(hits))
    }
}

fn prepare<'a>(
    pointer_ndc: Vec2,
    camera: &Camera,
    scene: Option<&'a SceneTree>,
) -> Option<(&'a SceneTree, NodeKey, Ray)> {
    let tree = scene?;
    let root = tree.root()?;
    let ray = camera.ray_from_ndc(pointer_ndc)?;
    Some((tree, root, ray))
}

/// Box test first; nodes with geometry then need a triangle hit.
fn hit_node(tree: &SceneTree, key: NodeKey, ray: &Ray) -> Option<PickHit> {
    let node = tree.node(key)?;
    let bounds = node.bounding_box()?;
    let box_distance = ray.intersect_oriented(bounds, node.world_matrix())?;
    let distance = match node.geometry() {
        Some(mesh) => ray.intersect_mesh(mesh, node.world_matrix())?,
        None => box_distance,
    };
    Some(PickHit {
        key,
        id: node.id().clone(),
        distance,
        world_hit_point: ray.at(distance),
    })
}

fn finish(result: PickResult) -> PickResult {
    crate::engine_trace!(
        "showroom3d::Picker",
        "{} hit(s), nearest {:?}",
        result.len(),
        result.nearest().map(|h| h.id.as_str())
    );
    result
}

#[cfg(test)]
#[path = "picker_tests.rs"]
mod tests;
