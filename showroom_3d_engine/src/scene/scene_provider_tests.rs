use super::*;
use crate::scene::{AABB, SceneNodeDesc};
use glam::Vec3;

fn loaded_tree() -> SceneTree {
    let mut tree = SceneTree::new();
    let root = tree.insert_root(SceneNodeDesc::new("car")).unwrap();
    tree.insert_child(root, SceneNodeDesc::new("body")
        .with_bounds(AABB::new(Vec3::new(-2.0, 0.0, -1.0), Vec3::new(2.0, 1.0, 1.0))))
        .unwrap();
    tree
}

#[test]
fn test_empty_slot_has_no_scene() {
    let slot = SceneSlot::new();
    assert!(slot.scene_root().is_none());
    assert!(!slot.is_loaded());
    assert_eq!(slot.model_scale_hint(), 0.0);
}

#[test]
fn test_rootless_tree_counts_as_unloaded() {
    let mut slot = SceneSlot::new();
    slot.set_loaded(SceneTree::new());
    assert!(slot.scene_root().is_none());
}

#[test]
fn test_set_loaded_measures_scale() {
    let mut slot = SceneSlot::new();
    slot.set_loaded(loaded_tree());
    assert!(slot.is_loaded());
    assert_eq!(slot.model_scale_hint(), 4.0);
}

#[test]
fn test_scale_hint_follows_transform_change() {
    let mut slot = SceneSlot::new();
    slot.set_loaded(loaded_tree());
    assert_eq!(slot.model_scale_hint(), 4.0);

    let tree = slot.tree_mut().unwrap();
    let body = tree.find("body").unwrap();
    tree.set_world_matrix(body, glam::Mat4::from_scale(Vec3::splat(2.0)));

    assert_eq!(slot.model_scale_hint(), 8.0);
}

#[test]
fn test_scale_hint_follows_inserted_nodes() {
    let mut slot = SceneSlot::new();
    slot.set_loaded(loaded_tree());

    let tree = slot.tree_mut().unwrap();
    let root = tree.root().unwrap();
    tree.insert_child(root, SceneNodeDesc::new("spoiler")
        .with_bounds(AABB::new(Vec3::new(-2.0, 0.0, -1.0), Vec3::new(-1.0, 1.0, 5.0))))
        .unwrap();

    assert_eq!(slot.model_scale_hint(), 6.0);
    // Measured once, then served from the cache
    assert_eq!(slot.model_scale_hint(), 6.0);
}

#[test]
fn test_unload() {
    let mut slot = SceneSlot::new();
    slot.set_loaded(loaded_tree());
    let tree = slot.unload().unwrap();
    assert_eq!(tree.len(), 2);
    assert!(!slot.is_loaded());
    assert_eq!(slot.model_scale_hint(), 0.0);
}
