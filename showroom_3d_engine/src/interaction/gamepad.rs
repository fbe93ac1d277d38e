//! Gamepad adapter
//!
//! Turns polled gamepad state into the same `InputEvent`s a mouse and
//! keyboard produce: the left stick moves a virtual cursor, the south
//! button clicks, east or start acts as Escape.

use std::time::Duration;
use bitflags::bitflags;
use glam::Vec2;
use crate::camera::Viewport;
use crate::config::GamepadConfig;
use super::input::{InputEvent, Key};

bitflags! {
    /// Buttons the interaction core listens to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct GamepadButtons: u8 {
        /// A (Xbox) / Cross (PlayStation)
        const SOUTH = 1 << 0;
        /// B / Circle
        const EAST = 1 << 1;
        const START = 1 << 2;
    }
}

/// One polled gamepad state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GamepadSnapshot {
    /// Left stick, each axis in [-1, 1], y up
    pub left_stick: Vec2,
    pub buttons: GamepadButtons,
}

#[derive(Debug, Clone)]
pub struct GamepadAdapter {
    config: GamepadConfig,
    cursor: Option<Vec2>,
    previous: GamepadButtons,
}

impl GamepadAdapter {
    pub fn new(config: GamepadConfig) -> Self {
        Self {
            config,
            cursor: None,
            previous: GamepadButtons::empty(),
        }
    }

    /// Virtual cursor position in viewport pixels, once the stick was used
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Translate one poll into input events.
    ///
    /// Buttons fire on the press edge only; holding a button does not
    /// repeat. The cursor starts at the viewport center and stays inside it;
    /// an invalid viewport leaves it where it is.
    pub fn update(&mut self, snapshot: &GamepadSnapshot, dt: Duration, viewport: &Viewport) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let stick = self.apply_dead_zone(snapshot.left_stick);
        if stick != Vec2::ZERO {
            let start = self.cursor.unwrap_or_else(|| viewport.center());
            // Stick y is up, pixels grow down
            let step = Vec2::new(stick.x, -stick.y) * self.config.cursor_speed * dt.as_secs_f32();
            if let Some(cursor) = viewport.clamp(start + step) {
                self.cursor = Some(cursor);
                events.push(InputEvent::PointerMove { x: cursor.x, y: cursor.y });
            }
        }

        let pressed = snapshot.buttons & !self.previous;
        self.previous = snapshot.buttons;
        if pressed.contains(GamepadButtons::SOUTH) {
            events.push(InputEvent::PointerDown);
        }
        if pressed.intersects(GamepadButtons::EAST | GamepadButtons::START) {
            events.push(InputEvent::KeyDown(Key::Escape));
        }

        events
    }

    /// Radial dead zone, rescaled so output starts at 0 at the edge.
    fn apply_dead_zone(&self, stick: Vec2) -> Vec2 {
        if !stick.is_finite() {
            return Vec2::ZERO;
        }
        let stick = stick.clamp_length_max(1.0);
        let magnitude = stick.length();
        let dead_zone = self.config.dead_zone;
        if magnitude <= dead_zone {
            return Vec2::ZERO;
        }
        let scaled = (magnitude - dead_zone) / (1.0 - dead_zone);
        stick / magnitude * scaled
    }
}

#[cfg(test)]
#[path = "gamepad_tests.rs"]
mod tests;
