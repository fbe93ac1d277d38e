//! Pick geometry: the triangles of a node in node-local space.
//!
//! Positions and indices are shared (`Arc`) with whatever the asset side
//! keeps for rendering, so attaching geometry to a node does not copy it.

use std::sync::Arc;
use glam::Vec3;
use super::aabb::AABB;

/// Indexed triangle list in node-local space.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGeometry {
    positions: Arc<[Vec3]>,
    /// Three indices per triangle
    indices: Arc<[u32]>,
}

impl MeshGeometry {
    pub fn new(positions: impl Into<Arc<[Vec3]>>, indices: impl Into<Arc<[u32]>>) -> Self {
        Self {
            positions: positions.into(),
            indices: indices.into(),
        }
    }

    /// Closed box surface (12 triangles) over `bounds`.
    pub fn cuboid(bounds: &AABB) -> Self {
        let positions: Vec<Vec3> = bounds.corners().to_vec();
        // Corner i has x from bit 0, y from bit 1, z from bit 2
        let indices: Vec<u32> = vec![
            0, 2, 1, 1, 2, 3, // -z
            4, 5, 6, 5, 7, 6, // +z
            0, 1, 4, 1, 5, 4, // -y
            2, 6, 3, 3, 6, 7, // +y
            0, 4, 2, 2, 4, 6, // -x
            1, 3, 5, 3, 7, 5, // +x
        ];
        Self::new(positions, indices)
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> u32 {
        u32::try_from(self.positions.len()).unwrap_or(u32::MAX)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Triangle corners, in index order.
    ///
    /// Triangles with an out-of-range index are skipped; `check` reports them.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(|tri| {
            Some([
                *self.positions.get(tri[0] as usize)?,
                *self.positions.get(tri[1] as usize)?,
                *self.positions.get(tri[2] as usize)?,
            ])
        })
    }

    /// Local-space bounds of the positions, `None` when there are none.
    pub fn bounds(&self) -> Option<AABB> {
        let first = *self.positions.first()?;
        let (min, max) = self.positions
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(AABB::new(min, max))
    }

    /// Describe the first structural problem, if any.
    pub(crate) fn check(&self) -> Result<(), String> {
        if self.indices.len() % 3 != 0 {
            return Err(format!("{} indices is not a whole number of triangles", self.indices.len()));
        }
        if let Some(bad) = self.indices.iter().find(|&&i| i as usize >= self.positions.len()) {
            return Err(format!("index {} out of range ({} positions)", bad, self.positions.len()));
        }
        if !self.positions.iter().all(|p| p.is_finite()) {
            return Err("non-finite position".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "mesh_geometry_tests.rs"]
mod tests;
