//! Interaction module
//!
//! Hover / selection lifecycle of model parts: pointer and gamepad input,
//! the Idle / Hovering / Locked state machine, the transition events it
//! emits, and the per-frame controller that ties picking to listeners.

mod event;
mod listener;
mod interaction_state;
mod state_machine;
pub mod input;
pub mod gamepad;
pub mod controller;

pub use event::{InteractionEvent, Transition};
pub use listener::{InteractionListener, AutoRotation, NoAutoRotation};
pub use interaction_state::{InteractionState, InteractionPhase};
pub use state_machine::HoverStateMachine;
pub use input::{InputEvent, Key, FrameInput, InputCoalescer};
pub use gamepad::{GamepadAdapter, GamepadButtons, GamepadSnapshot};
pub use controller::InteractionController;
