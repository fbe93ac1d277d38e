/// SceneTree: the loaded model hierarchy.
///
/// Uses a SlotMap for stable keys; an id index gives O(1) lookup by the
/// string identifier the UI and the status resolver work with.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use glam::Mat4;
use crate::error::{Error, Result};
use super::aabb::AABB;
use super::scene_node::{NodeFlags, NodeId, SceneNode, SceneNodeDesc};

new_key_type! {
    /// Stable handle to a node in a SceneTree
    pub struct NodeKey;
}

/// Hierarchy of scene nodes with a single root.
#[derive(Debug, Clone, Default)]
pub struct SceneTree {
    nodes: SlotMap<NodeKey, SceneNode>,
    by_id: FxHashMap<NodeId, NodeKey>,
    root: Option<NodeKey>,
}

impl SceneTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the root node. Fails if a root already exists.
    pub fn insert_root(&mut self, desc: SceneNodeDesc) -> Result<NodeKey> {
        if self.root.is_some() {
            return Err(Error::InvalidHierarchy(format!(
                "cannot insert root '{}': tree already has a root", desc.id
            )));
        }
        let key = self.insert_node(desc, None)?;
        self.root = Some(key);
        Ok(key)
    }

    /// Insert a node under `parent`.
    ///
    /// The node's helper state is resolved here from the parent chain.
    pub fn insert_child(&mut self, parent: NodeKey, desc: SceneNodeDesc) -> Result<NodeKey> {
        if !self.nodes.contains_key(parent) {
            return Err(Error::InvalidHierarchy(format!(
                "cannot insert '{}': parent not found", desc.id
            )));
        }
        let key = self.insert_node(desc, Some(parent))?;
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.push_child(key);
        }
        Ok(key)
    }

    fn insert_node(&mut self, desc: SceneNodeDesc, parent: Option<NodeKey>) -> Result<NodeKey> {
        if let Some(bounds) = &desc.bounding_box {
            if !bounds.is_valid() {
                return Err(Error::InvalidNode(format!(
                    "'{}' has invalid bounds {:?}", desc.id, bounds
                )));
            }
        }
        if let Some(geometry) = &desc.geometry {
            if let Err(reason) = geometry.check() {
                return Err(Error::InvalidNode(format!(
                    "'{}' has invalid geometry: {}", desc.id, reason
                )));
            }
        }
        if self.by_id.contains_key(desc.id.as_str()) {
            return Err(Error::InvalidNode(format!("duplicate id '{}'", desc.id)));
        }

        let parent_is_helper = parent
            .and_then(|p| self.nodes.get(p))
            .map(|p| p.is_helper())
            .unwrap_or(false);
        let node = SceneNode::from_desc(desc, parent, parent_is_helper);
        let id = node.id().clone();
        let key = self.nodes.insert(node);
        self.by_id.insert(id, key);
        Ok(key)
    }

    // ===== LOOKUP =====

    pub fn root(&self) -> Option<NodeKey> {
        self.root
    }

    pub fn node(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    /// Find a node key by its string id.
    pub fn find(&self, id: &str) -> Option<NodeKey> {
        self.by_id.get(id).copied()
    }

    /// Find a node by its string id.
    pub fn node_by_id(&self, id: &str) -> Option<&SceneNode> {
        self.find(id).and_then(|key| self.nodes.get(key))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes (key, node), in storage order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &SceneNode)> {
        self.nodes.iter()
    }

    /// All nodes reachable from `start`, depth-first, `start` included.
    pub fn descendants(&self, start: NodeKey) -> Vec<NodeKey> {
        let mut out = Vec::new();
        let mut stack = vec![start];
        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };
            out.push(key);
            // Reverse so children come out in insertion order
            stack.extend(node.children().iter().rev().copied());
        }
        out
    }

    // ===== MUTATION =====

    /// Set a node's world matrix. Returns false if the key is invalid.
    pub fn set_world_matrix(&mut self, key: NodeKey, matrix: Mat4) -> bool {
        match self.nodes.get_mut(key) {
            Some(node) => {
                node.set_world_matrix(matrix);
                true
            }
            None => false,
        }
    }

    /// Replace a node's flags and re-resolve helper state for its subtree.
    /// Returns false if the key is invalid.
    pub fn set_flags(&mut self, key: NodeKey, flags: NodeFlags) -> bool {
        let parent_is_helper = match self.nodes.get_mut(key) {
            Some(node) => {
                node.set_flags(flags);
                node.parent()
            }
            None => return false,
        }
        .and_then(|p| self.nodes.get(p))
        .map(|p| p.is_helper())
        .unwrap_or(false);

        let mut stack = vec![(key, parent_is_helper)];
        while let Some((current, inherited)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(current) else {
                continue;
            };
            let resolved = inherited || node.flags().contains(NodeFlags::HELPER);
            node.set_helper_in_ancestry(resolved);
            stack.extend(node.children().iter().map(|&child| (child, resolved)));
        }
        true
    }

    // ===== MEASUREMENT =====

    /// Largest dimension of the union of world bounds of all
    /// non-helper nodes reachable from the root. 0 for an empty tree.
    pub fn model_scale_hint(&self) -> f32 {
        let Some(root) = self.root else {
            return 0.0;
        };
        self.descendants(root)
            .into_iter()
            .filter_map(|key| self.nodes.get(key))
            .filter(|node| !node.is_helper())
            .filter_map(|node| node.world_bounding_box())
            .reduce(|a: AABB, b| a.union(&b))
            .map(|b| b.largest_dimension())
            .filter(|d| d.is_finite())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
#[path = "scene_tree_tests.rs"]
mod tests;
