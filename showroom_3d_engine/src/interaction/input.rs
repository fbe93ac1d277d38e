//! Input coalescing
//!
//! Host events (pointer, keyboard, gamepad-derived) arrive at any rate.
//! The coalescer folds everything received between two frames into one
//! `FrameInput`, so the core evaluates the pointer at most once per frame.

use glam::Vec2;

/// Keys the interaction core reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
}

/// Raw input event, pointer positions in viewport pixels (y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32, y: f32 },
    /// Pointer left the viewport
    PointerLeave,
    PointerDown,
    KeyDown(Key),
}

/// Input of one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Last known pointer position, `None` if outside the viewport
    pub pointer: Option<Vec2>,
    /// Sum of pointer movement since the previous frame
    pub delta: Vec2,
    pub click: bool,
    pub close: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InputCoalescer {
    pointer: Option<Vec2>,
    delta: Vec2,
    click: bool,
    close: bool,
}

impl InputCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => {
                let position = Vec2::new(x, y);
                if let Some(previous) = self.pointer {
                    let step = position - previous;
                    if step.is_finite() {
                        self.delta += step;
                    }
                }
                self.pointer = Some(position);
            }
            InputEvent::PointerLeave => self.pointer = None,
            InputEvent::PointerDown => self.click = true,
            InputEvent::KeyDown(Key::Escape) => self.close = true,
            InputEvent::KeyDown(_) => {}
        }
    }

    /// Hand out this frame's input and reset the per-frame latches.
    ///
    /// The pointer position persists, so a still pointer over a rotating
    /// model is still evaluated every frame.
    pub fn take(&mut self) -> FrameInput {
        let frame = FrameInput {
            pointer: self.pointer,
            delta: self.delta,
            click: self.click,
            close: self.close,
        };
        self.delta = Vec2::ZERO;
        self.click = false;
        self.close = false;
        frame
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
