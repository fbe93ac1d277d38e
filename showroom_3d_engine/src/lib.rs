/*!
# Showroom 3D Engine

Interaction core for the Showroom3D product viewer.

This crate resolves what the user is pointing at on a loaded model and drives
the hover / selection lifecycle of model parts. Rendering, asset loading and
DOM-side UI are collaborators that plug in through traits; the core only
consumes a read-only scene tree and emits transition events.

## Architecture

- **SceneTree**: slot-map of scene nodes (bounds, pick triangles, world transform, helper flags)
- **SpatialPicker**: ray casting from normalized device coordinates, box then triangles
- **TargetFilter**: rejects helper geometry and degenerate fragments
- **HoverStateMachine**: Idle / Hovering / Locked transitions and animation tokens
- **HighlightAnimator**: bounding-marker reveal and lock-ring animations
- **classify**: deterministic per-part status category
- **InputCoalescer / GamepadAdapter**: pointer, keyboard and gamepad input folded per frame
- **InteractionController**: per-frame glue between input, picking and listeners
- **MaterialSwap**: reference listener for the renderer's highlight materials
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod camera;
pub mod scene;
pub mod picking;
pub mod status;
pub mod interaction;
pub mod highlight;

// Main showroom3d namespace module
pub mod showroom3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logger host)
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::{InteractionConfig, FilterConfig, AnimationConfig, GamepadConfig};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Picking sub-module
    pub mod picking {
        pub use crate::picking::*;
    }

    // Status sub-module
    pub mod status {
        pub use crate::status::*;
    }

    // Interaction sub-module
    pub mod interaction {
        pub use crate::interaction::*;
    }

    // Highlight sub-module
    pub mod highlight {
        pub use crate::highlight::*;
    }
}

// Re-export math library at crate root
pub use glam;
