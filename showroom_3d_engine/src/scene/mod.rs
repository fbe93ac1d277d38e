//! Scene module
//!
//! Read-only view of the loaded model as the interaction core sees it:
//! a hierarchy of nodes with bounds, pick triangles, world transforms and
//! helper flags,
//! plus the provider interface through which the asset side hands it over.

mod aabb;
mod mesh_geometry;
mod scene_node;
mod scene_tree;
mod scene_provider;

pub use aabb::AABB;
pub use mesh_geometry::MeshGeometry;
pub use scene_node::{NodeId, NodeFlags, SceneNode, SceneNodeDesc};
pub use scene_tree::{NodeKey, SceneTree};
pub use scene_provider::{SceneProvider, SceneSlot};
