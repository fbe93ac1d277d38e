/// Interaction configuration.
///
/// Plain data with defaults matching the showroom's tuned values. Passed by
/// value to `InteractionController::new`, which validates it once.

use std::time::Duration;
use crate::error::{Error, Result};

/// Thresholds used by the TargetFilter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    /// Fragments whose largest world dimension is below `scale_hint * min_size_ratio`...
    pub min_size_ratio: f32,
    /// ...and whose center lies within `scale_hint * origin_radius_ratio` of the origin are rejected
    pub origin_radius_ratio: f32,
    /// Geometry with `0 < vertex_count < min_vertex_count` is rejected
    pub min_vertex_count: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_size_ratio: 0.03,
            origin_radius_ratio: 0.05,
            min_vertex_count: 30,
        }
    }
}

/// Highlight animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Duration of both the bounding reveal and the lock ring
    pub duration: Duration,
    pub ring_from_scale: f32,
    pub ring_from_thickness: f32,
    pub ring_to_thickness: f32,
    pub ring_from_opacity: f32,
    pub ring_to_opacity: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(200),
            ring_from_scale: 0.6,
            ring_from_thickness: 0.02,
            ring_to_thickness: 0.06,
            ring_from_opacity: 0.0,
            ring_to_opacity: 0.85,
        }
    }
}

/// Gamepad-to-pointer translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamepadConfig {
    /// Stick magnitude below which input is ignored
    pub dead_zone: f32,
    /// Virtual cursor speed at full deflection, in viewport pixels per second
    pub cursor_speed: f32,
}

impl Default for GamepadConfig {
    fn default() -> Self {
        Self {
            dead_zone: 0.15,
            cursor_speed: 900.0,
        }
    }
}

/// Top-level interaction configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    pub filter: FilterConfig,
    pub animation: AnimationConfig,
    pub gamepad: GamepadConfig,
    /// A click on anything other than the locked part closes the lock
    pub click_outside_closes: bool,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            animation: AnimationConfig::default(),
            gamepad: GamepadConfig::default(),
            click_outside_closes: true,
        }
    }
}

impl InteractionConfig {
    /// Check every value for range and finiteness.
    pub fn validate(&self) -> Result<()> {
        let f = &self.filter;
        check_non_negative("filter.min_size_ratio", f.min_size_ratio)?;
        check_non_negative("filter.origin_radius_ratio", f.origin_radius_ratio)?;

        let a = &self.animation;
        if a.duration.is_zero() {
            return Err(Error::InvalidConfig("animation.duration must be > 0".to_string()));
        }
        check_non_negative("animation.ring_from_scale", a.ring_from_scale)?;
        check_non_negative("animation.ring_from_thickness", a.ring_from_thickness)?;
        check_non_negative("animation.ring_to_thickness", a.ring_to_thickness)?;
        check_unit("animation.ring_from_opacity", a.ring_from_opacity)?;
        check_unit("animation.ring_to_opacity", a.ring_to_opacity)?;

        let g = &self.gamepad;
        check_unit("gamepad.dead_zone", g.dead_zone)?;
        if g.dead_zone >= 1.0 {
            return Err(Error::InvalidConfig("gamepad.dead_zone must be < 1".to_string()));
        }
        check_non_negative("gamepad.cursor_speed", g.cursor_speed)?;

        Ok(())
    }
}

fn check_non_negative(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{} must be finite and >= 0, got {}", name, value)))
    }
}

fn check_unit(name: &str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{} must be in [0, 1], got {}", name, value)))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
