/// Picking rays: slab-method box and Möller-Trumbore triangle intersection.

use glam::{Mat4, Vec3};
use crate::scene::{MeshGeometry, AABB};

/// A half-line with a unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    ///
    /// Returns `None` for a zero or non-finite direction or origin.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        if !origin.is_finite() {
            return None;
        }
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab-method ray/AABB intersection.
    ///
    /// Returns the distance to the entry point, or to the exit point when
    /// the origin is inside the box. `None` if the box is missed or lies
    /// entirely behind the origin.
    pub fn intersect_aabb(&self, aabb: &AABB) -> Option<f32> {
        slab_hit(self.origin, self.direction, aabb.min, aabb.max)
    }

    /// Intersect a local-space box placed in the world by `world_matrix`.
    ///
    /// The ray is moved into box-local space instead of moving the box,
    /// so rotated and non-uniformly scaled nodes are tested exactly. The
    /// local direction is left unnormalized, which keeps the returned
    /// parameter a world-space distance. Singular matrices never hit.
    pub fn intersect_oriented(&self, aabb: &AABB, world_matrix: &Mat4) -> Option<f32> {
        let (origin, direction) = self.to_local(world_matrix)?;
        slab_hit(origin, direction, aabb.min, aabb.max)
    }

    /// Nearest hit on a local-space triangle mesh placed by `world_matrix`.
    ///
    /// Triangles are two-sided. Same local-space convention as
    /// `intersect_oriented`, so the result is a world-space distance.
    pub fn intersect_mesh(&self, mesh: &MeshGeometry, world_matrix: &Mat4) -> Option<f32> {
        let (origin, direction) = self.to_local(world_matrix)?;
        mesh.triangles()
            .filter_map(|[a, b, c]| triangle_hit(origin, direction, a, b, c))
            .min_by(|x, y| x.total_cmp(y))
    }

    /// Origin and unnormalized direction in the space `world_matrix` maps from.
    fn to_local(&self, world_matrix: &Mat4) -> Option<(Vec3, Vec3)> {
        if world_matrix.determinant() == 0.0 {
            return None;
        }
        let inv = world_matrix.inverse();
        if !inv.is_finite() {
            return None;
        }
        Some((inv.transform_point3(self.origin), inv.transform_vector3(self.direction)))
    }
}

fn slab_hit(origin: Vec3, direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];
        if d == 0.0 {
            // Parallel to this slab: inside it or never
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (min[axis] - o) * inv;
        let mut t1 = (max[axis] - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    let t = if t_near >= 0.0 { t_near } else { t_far };
    t.is_finite().then_some(t)
}

/// Möller-Trumbore. Edges and vertices count as inside.
fn triangle_hit(origin: Vec3, direction: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let edge1 = b - a;
    let edge2 = c - a;
    let p = direction.cross(edge2);
    let det = edge1.dot(p);
    // Parallel to the plane, or a degenerate triangle
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let inv_det = 1.0 / det;

    let s = origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(edge1);
    let v = direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = edge2.dot(q) * inv_det;
    (t >= 0.0 && t.is_finite()).then_some(t)
}

#[cfg(test)]
#[path = "ray_tests.rs"]
mod tests;
