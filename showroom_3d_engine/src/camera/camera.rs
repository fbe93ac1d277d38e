/// Camera: view/projection container that can cast picking rays.
///
/// The host computes the matrices (orbit controls, auto-rotation, resize)
/// and hands the result to the core once per frame. The core never moves
/// the camera.

use glam::{Mat4, Vec2, Vec3};
use super::frustum::Frustum;
use super::ray::Ray;
use super::viewport::Viewport;

#[derive(Debug, Clone)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    viewport: Viewport,
}

impl Camera {
    /// Create a camera. `projection` must map depth to [0, 1]
    /// (glam's `perspective_rh` / `orthographic_rh`).
    pub fn new(view: Mat4, projection: Mat4, viewport: Viewport) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
            viewport,
        }
    }

    // ===== GETTERS =====

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Frustum planes of the current view-projection.
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix())
    }

    // ===== SETTERS =====

    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // ===== PICKING =====

    /// Cast a ray through a normalized device coordinate.
    ///
    /// The ray starts on the near plane and points toward the far plane.
    /// Returns `None` for non-finite coordinates or a singular
    /// view-projection; callers treat that as "no target".
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Option<Ray> {
        if !ndc.is_finite() {
            return None;
        }
        let inv = self.view_projection_matrix().inverse();
        if !inv.is_finite() {
            return None;
        }
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        if !near.is_finite() || !far.is_finite() {
            return None;
        }
        Ray::new(near, far - near)
    }

    /// Cast a ray through a viewport pixel.
    pub fn ray_from_pixel(&self, pixel: Vec2) -> Option<Ray> {
        self.ray_from_ndc(self.viewport.to_ndc(pixel)?)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
