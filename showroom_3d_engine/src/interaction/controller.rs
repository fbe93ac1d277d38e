//! Interaction controller
//!
//! Per-frame glue between host input, picking, the state machine and
//! everything that reacts to transitions. The host calls `push_input`
//! from its event handlers and `frame` once per rendered frame.

use std::time::Duration;
use glam::Vec2;
use crate::camera::{Camera, Viewport};
use crate::config::InteractionConfig;
use crate::error::Result;
use crate::highlight::HighlightAnimator;
use crate::picking::{BruteForcePicker, SpatialPicker, TargetFilter};
use crate::scene::{NodeId, SceneProvider, SceneTree};
use super::event::{InteractionEvent, Transition};
use super::gamepad::{GamepadAdapter, GamepadSnapshot};
use super::input::{InputCoalescer, InputEvent, Key};
use super::interaction_state::InteractionState;
use super::listener::{AutoRotation, InteractionListener, NoAutoRotation};
use super::state_machine::HoverStateMachine;

pub struct InteractionController {
    config: InteractionConfig,
    picker: Box<dyn SpatialPicker>,
    filter: TargetFilter,
    machine: HoverStateMachine,
    animator: HighlightAnimator,
    input: InputCoalescer,
    gamepad: GamepadAdapter,
    listeners: Vec<Box<dyn InteractionListener>>,
    auto_rotation: Box<dyn AutoRotation>,
    /// Auto-rotation state saved on Lock, restored on Unlock
    rotation_before_lock: Option<bool>,
    /// Target resolved by the last frame
    target: Option<NodeId>,
    listener_failures: u64,
}

impl InteractionController {
    /// Create a controller. Fails if the configuration is out of range.
    pub fn new(config: InteractionConfig) -> Result<Self> {
        config.validate()?;
        crate::engine_info!(
            "showroom3d::Controller",
            "Interaction controller created (highlight duration {:?})",
            config.animation.duration
        );
        Ok(Self {
            config,
            picker: Box::new(BruteForcePicker::new()),
            filter: TargetFilter::new(config.filter),
            machine: HoverStateMachine::new(config.click_outside_closes),
            animator: HighlightAnimator::new(config.animation),
            input: InputCoalescer::new(),
            gamepad: GamepadAdapter::new(config.gamepad),
            listeners: Vec::new(),
            auto_rotation: Box::new(NoAutoRotation),
            rotation_before_lock: None,
            target: None,
            listener_failures: 0,
        })
    }

    // ===== COLLABORATORS =====

    /// Replace the picking strategy (BruteForcePicker by default).
    pub fn set_picker(&mut self, picker: impl SpatialPicker + 'static) {
        self.picker = Box::new(picker);
    }

    /// Register a listener. Listeners run in registration order, after
    /// the highlight animator.
    pub fn add_listener(&mut self, listener: impl InteractionListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_auto_rotation(&mut self, auto_rotation: impl AutoRotation + 'static) {
        self.auto_rotation = Box::new(auto_rotation);
    }

    // ===== INPUT =====

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Feed one gamepad poll; it is translated into regular input events.
    pub fn push_gamepad(&mut self, snapshot: &GamepadSnapshot, dt: Duration, viewport: &Viewport) {
        for event in self.gamepad.update(snapshot, dt, viewport) {
            self.input.push(event);
        }
    }

    /// Close the selection on the next frame (info panel close button).
    pub fn request_close(&mut self) {
        self.input.push(InputEvent::KeyDown(Key::Escape));
    }

    // ===== FRAME =====

    /// Run one frame and return the transitions it produced.
    ///
    /// The last pointer position is evaluated every frame, so hover
    /// follows a rotating model under a still pointer. Listener errors
    /// are logged and counted; they never undo a transition.
    pub fn frame(&mut self, now: Duration, camera: &Camera, provider: &dyn SceneProvider) -> Vec<Transition> {
        let scene = provider.scene_root();
        let mut transitions = self.machine.set_scene_loaded(scene.is_some(), now);

        let input = self.input.take();
        self.target = scene.and_then(|tree| {
            self.resolve_target(input.pointer, camera, tree, provider.model_scale_hint())
        });

        let target = self.target.clone();
        transitions.extend(self.machine.pointer_move(target.as_ref(), input.delta, now));
        if input.click {
            transitions.extend(self.machine.click(target.as_ref(), now));
        }
        if input.close {
            transitions.extend(self.machine.close(now));
        }

        for transition in &transitions {
            self.dispatch(transition);
        }
        self.animator.tick(now, self.machine.token());

        transitions
    }

    /// Pick, then filter. A pointer outside the viewport has no target.
    fn resolve_target(
        &self,
        pointer: Option<Vec2>,
        camera: &Camera,
        tree: &SceneTree,
        scale_hint: f32,
    ) -> Option<NodeId> {
        let pointer = pointer?;
        let viewport = camera.viewport();
        if !viewport.contains(pointer) {
            return None;
        }
        let ndc = viewport.to_ndc(pointer)?;
        let pick = self.picker.pick(ndc, camera, Some(tree));
        let key = self.filter.filter(&pick, tree, scale_hint)?;
        tree.node(key).map(|node| node.id().clone())
    }

    fn dispatch(&mut self, transition: &Transition) {
        self.animator.on_transition(transition);

        match &transition.event {
            InteractionEvent::Lock { .. } => {
                self.rotation_before_lock = Some(self.auto_rotation.is_rotating());
                self.auto_rotation.set_rotating(false);
            }
            InteractionEvent::Unlock { .. } => {
                if let Some(was_rotating) = self.rotation_before_lock.take() {
                    self.auto_rotation.set_rotating(was_rotating);
                }
            }
            _ => {}
        }

        for (index, listener) in self.listeners.iter_mut().enumerate() {
            if let Err(e) = listener.on_transition(transition) {
                self.listener_failures += 1;
                crate::engine_warn!(
                    "showroom3d::Controller",
                    "Listener #{} failed on {} '{}': {}",
                    index,
                    transition.event.name(),
                    transition.event.id(),
                    e
                );
            }
        }
    }

    // ===== ACCESSORS =====

    pub fn state(&self) -> &InteractionState {
        self.machine.state()
    }

    pub fn animator(&self) -> &HighlightAnimator {
        &self.animator
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Part under the pointer after filtering, as of the last frame
    pub fn target(&self) -> Option<&NodeId> {
        self.target.as_ref()
    }

    /// Number of listener errors since creation
    pub fn listener_failures(&self) -> u64 {
        self.listener_failures
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
