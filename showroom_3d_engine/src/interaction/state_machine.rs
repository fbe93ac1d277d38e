/// HoverStateMachine: Idle / Hovering / Locked.
///
/// Pure state transitions: every operation updates the InteractionState
/// and returns the transitions it caused, in order. Animations, materials
/// and UI are driven from those transitions by the caller.
///
/// ```text
///   Idle ──target──▶ Hovering(a) ──click a──▶ Locked(a)
///    ▲                 │    ▲                    │
///    └────no target────┘    └─ other target      │ close / backdrop click
///    ▲                                           │
///    └───────────────────────────────────────────┘
/// ```

use std::time::Duration;
use glam::Vec2;
use crate::scene::NodeId;
use crate::status::classify;
use super::event::{InteractionEvent, Transition};
use super::interaction_state::InteractionState;

#[derive(Debug, Clone)]
pub struct HoverStateMachine {
    state: InteractionState,
    scene_loaded: bool,
    click_outside_closes: bool,
}

impl Default for HoverStateMachine {
    fn default() -> Self {
        Self::new(true)
    }
}

impl HoverStateMachine {
    /// Create an idle machine. Operations are no-ops until
    /// `set_scene_loaded(true)`.
    pub fn new(click_outside_closes: bool) -> Self {
        Self {
            state: InteractionState::default(),
            scene_loaded: false,
            click_outside_closes,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn token(&self) -> u64 {
        self.state.animation_token
    }

    pub fn is_scene_loaded(&self) -> bool {
        self.scene_loaded
    }

    /// Resolve the part under the pointer.
    ///
    /// While locked nothing changes except the follow offset.
    pub fn pointer_move(&mut self, target: Option<&NodeId>, delta: Vec2, now: Duration) -> Vec<Transition> {
        if !self.scene_loaded {
            return Vec::new();
        }
        if self.state.locked.is_some() {
            if delta.is_finite() {
                self.state.follow_offset += delta;
            }
            return Vec::new();
        }

        match (self.state.hovered.clone(), target) {
            (None, None) => Vec::new(),
            (Some(current), Some(next)) if current == *next => Vec::new(),
            (None, Some(next)) => {
                self.state.hovered = Some(next.clone());
                let token = self.bump();
                vec![self.stamp(enter(next), token, now)]
            }
            (Some(current), Some(next)) => {
                self.state.hovered = Some(next.clone());
                let token = self.bump();
                vec![
                    self.stamp(InteractionEvent::Exit { id: current }, token, now),
                    self.stamp(enter(next), token, now),
                ]
            }
            (Some(current), None) => {
                self.state.hovered = None;
                let token = self.bump();
                vec![self.stamp(InteractionEvent::Exit { id: current }, token, now)]
            }
        }
    }

    /// Primary click / tap / gamepad confirm.
    ///
    /// Locks the hovered part when the click lands on it. While locked, a
    /// click on anything else acts as a backdrop click.
    pub fn click(&mut self, target: Option<&NodeId>, now: Duration) -> Vec<Transition> {
        if !self.scene_loaded {
            return Vec::new();
        }

        if let Some(locked) = &self.state.locked {
            if target != Some(locked) && self.click_outside_closes {
                return self.close(now);
            }
            return Vec::new();
        }

        match (&self.state.hovered, target) {
            (Some(hovered), Some(clicked)) if hovered == clicked => {
                let id = hovered.clone();
                self.state.locked = Some(id.clone());
                self.state.follow_offset = Vec2::ZERO;
                let token = self.bump();
                let status = classify(&id);
                vec![self.stamp(InteractionEvent::Lock { id, status }, token, now)]
            }
            _ => Vec::new(),
        }
    }

    /// Escape, backdrop click or the panel's close button.
    ///
    /// Locked(a) goes straight to Idle; hover is picked up again by the
    /// next pointer evaluation.
    pub fn close(&mut self, now: Duration) -> Vec<Transition> {
        if !self.scene_loaded {
            return Vec::new();
        }
        let Some(id) = self.state.locked.take() else {
            return Vec::new();
        };
        self.state.hovered = None;
        self.state.follow_offset = Vec2::ZERO;
        let token = self.bump();
        vec![
            self.stamp(InteractionEvent::Unlock { id: id.clone() }, token, now),
            self.stamp(InteractionEvent::Exit { id }, token, now),
        ]
    }

    /// Track scene availability.
    ///
    /// Losing the scene while a part is active drops back to Idle and
    /// emits the Unlock / Exit the listeners need to clean up.
    pub fn set_scene_loaded(&mut self, loaded: bool, now: Duration) -> Vec<Transition> {
        if self.scene_loaded == loaded {
            return Vec::new();
        }
        if loaded {
            self.scene_loaded = true;
            return Vec::new();
        }

        let mut out = self.close(now);
        if let Some(id) = self.state.hovered.take() {
            let token = self.bump();
            out.push(self.stamp(InteractionEvent::Exit { id }, token, now));
        }
        self.scene_loaded = false;
        out
    }

    fn bump(&mut self) -> u64 {
        self.state.animation_token = self.state.animation_token.wrapping_add(1);
        self.state.animation_token
    }

    fn stamp(&self, event: InteractionEvent, token: u64, at: Duration) -> Transition {
        crate::engine_debug!(
            "showroom3d::HoverStateMachine",
            "{} '{}' (token {})",
            event.name(),
            event.id(),
            token
        );
        Transition { event, token, at }
    }
}

fn enter(id: &NodeId) -> InteractionEvent {
    InteractionEvent::Enter { id: id.clone(), status: classify(id) }
}

#[cfg(test)]
#[path = "state_machine_tests.rs"]
mod tests;
