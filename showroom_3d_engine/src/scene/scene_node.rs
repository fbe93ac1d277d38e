/// Scene nodes: one entry per mesh/group of the loaded model.
///
/// Everything the core needs from a node is resolved when the node is
/// inserted into a SceneTree; nothing is queried at pick time.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;
use bitflags::bitflags;
use glam::Mat4;
use super::aabb::AABB;
use super::mesh_geometry::MeshGeometry;
use super::scene_tree::NodeKey;

// ===== NODE ID =====

/// Stable node identifier (the mesh UUID or asset name).
///
/// Cheap to clone; compares and hashes as its string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Arc<str>);

impl NodeId {
    pub fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== FLAGS =====

bitflags! {
    /// Per-node flags set by the asset side.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u32 {
        /// Decorative, never interactive: reference geometry, point clouds,
        /// bounding-box visualisations, lights, podium and floor.
        /// Inherited by every descendant.
        const HELPER = 1 << 0;
    }
}

// ===== DESCRIPTOR =====

/// Description of a node to insert into a SceneTree.
#[derive(Debug, Clone)]
pub struct SceneNodeDesc {
    pub id: String,
    /// Label shown in the UI; defaults to the id
    pub display_name: Option<String>,
    /// Local-space bounds; `None` for groups and other non-geometry nodes.
    /// Derived from `geometry` when left unset.
    pub bounding_box: Option<AABB>,
    /// Local-space triangles for exact picking; without them the
    /// bounding box is the pick surface
    pub geometry: Option<MeshGeometry>,
    pub world_matrix: Mat4,
    pub flags: NodeFlags,
    /// Vertex count of the geometry, 0 if unknown.
    /// Taken from `geometry` when left at 0.
    pub vertex_count: u32,
}

impl SceneNodeDesc {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            bounding_box: None,
            geometry: None,
            world_matrix: Mat4::IDENTITY,
            flags: NodeFlags::empty(),
            vertex_count: 0,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_bounds(mut self, bounding_box: AABB) -> Self {
        self.bounding_box = Some(bounding_box);
        self
    }

    pub fn with_geometry(mut self, geometry: MeshGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_world_matrix(mut self, world_matrix: Mat4) -> Self {
        self.world_matrix = world_matrix;
        self
    }

    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_vertex_count(mut self, vertex_count: u32) -> Self {
        self.vertex_count = vertex_count;
        self
    }
}

// ===== NODE =====

/// A node stored in a SceneTree.
#[derive(Debug, Clone)]
pub struct SceneNode {
    id: NodeId,
    display_name: String,
    bounding_box: Option<AABB>,
    geometry: Option<MeshGeometry>,
    world_matrix: Mat4,
    flags: NodeFlags,
    vertex_count: u32,
    /// This node or an ancestor carries HELPER
    helper_in_ancestry: bool,
    parent: Option<NodeKey>,
    children: Vec<NodeKey>,
}

impl SceneNode {
    pub(crate) fn from_desc(desc: SceneNodeDesc, parent: Option<NodeKey>, parent_is_helper: bool) -> Self {
        let display_name = desc.display_name.unwrap_or_else(|| desc.id.clone());
        let bounding_box = desc.bounding_box
            .or_else(|| desc.geometry.as_ref().and_then(|g| g.bounds()));
        let vertex_count = match (&desc.geometry, desc.vertex_count) {
            (Some(geometry), 0) => geometry.vertex_count(),
            (_, count) => count,
        };
        Self {
            id: NodeId::from(desc.id),
            display_name,
            bounding_box,
            geometry: desc.geometry,
            world_matrix: desc.world_matrix,
            flags: desc.flags,
            vertex_count,
            helper_in_ancestry: parent_is_helper || desc.flags.contains(NodeFlags::HELPER),
            parent,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn bounding_box(&self) -> Option<&AABB> {
        self.bounding_box.as_ref()
    }

    /// Pick triangles, if the asset side provided them
    pub fn geometry(&self) -> Option<&MeshGeometry> {
        self.geometry.as_ref()
    }

    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// True if this node or any ancestor is flagged HELPER.
    pub fn is_helper(&self) -> bool {
        self.helper_in_ancestry
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Bounds transformed into world space.
    pub fn world_bounding_box(&self) -> Option<AABB> {
        self.bounding_box.map(|b| b.transformed(&self.world_matrix))
    }

    // ===== TREE-INTERNAL MUTATION =====

    pub(crate) fn set_world_matrix(&mut self, matrix: Mat4) {
        self.world_matrix = matrix;
    }

    pub(crate) fn set_flags(&mut self, flags: NodeFlags) {
        self.flags = flags;
    }

    pub(crate) fn set_helper_in_ancestry(&mut self, value: bool) {
        self.helper_in_ancestry = value;
    }

    pub(crate) fn push_child(&mut self, child: NodeKey) {
        self.children.push(child);
    }
}
