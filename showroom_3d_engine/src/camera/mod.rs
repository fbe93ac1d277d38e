//! Camera module: camera, viewport, frustum, and picking rays.
//!
//! Passive data containers. The host application owns and drives the
//! camera (orbit controls, auto-rotation); the core only reads it.

mod camera;
mod frustum;
mod ray;
mod viewport;

pub use camera::Camera;
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use ray::Ray;
pub use viewport::Viewport;
