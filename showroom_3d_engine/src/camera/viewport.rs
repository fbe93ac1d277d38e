/// Viewport: the on-screen rectangle the model is rendered into.

use glam::Vec2;

/// Viewport rectangle in pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport at the origin covering `width` x `height` pixels.
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Convert a pixel position to normalized device coordinates.
    ///
    /// x maps to [-1, 1] left to right, y maps to [-1, 1] bottom to top.
    /// Returns `None` for non-finite input or an empty viewport. Positions
    /// outside the viewport map outside [-1, 1].
    pub fn to_ndc(&self, pixel: Vec2) -> Option<Vec2> {
        if !pixel.is_finite() || !(self.width > 0.0) || !(self.height > 0.0) {
            return None;
        }
        let ndc = Vec2::new(
            (pixel.x - self.x) / self.width * 2.0 - 1.0,
            1.0 - (pixel.y - self.y) / self.height * 2.0,
        );
        ndc.is_finite().then_some(ndc)
    }

    /// Viewport center in pixels.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// True if every edge is finite and the rectangle is not empty.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// True if `pixel` lies inside the rectangle, edges included.
    pub fn contains(&self, pixel: Vec2) -> bool {
        self.is_valid()
            && pixel.x >= self.x
            && pixel.x <= self.x + self.width
            && pixel.y >= self.y
            && pixel.y <= self.y + self.height
    }

    /// Clamp a pixel position into the viewport rectangle.
    ///
    /// `None` for a non-finite position or an invalid viewport.
    pub fn clamp(&self, pixel: Vec2) -> Option<Vec2> {
        if !self.is_valid() || !pixel.is_finite() {
            return None;
        }
        Some(Vec2::new(
            pixel.x.clamp(self.x, self.x + self.width),
            pixel.y.clamp(self.y, self.y + self.height),
        ))
    }
}
