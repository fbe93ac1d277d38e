/// Transition events emitted by the HoverStateMachine.

use std::time::Duration;
use crate::scene::NodeId;
use crate::status::StatusCategory;

/// What happened to a part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionEvent {
    /// The pointer started hovering a part
    Enter { id: NodeId, status: StatusCategory },
    /// The part is no longer hovered
    Exit { id: NodeId },
    /// The part was selected (info panel opens, auto-rotation pauses)
    Lock { id: NodeId, status: StatusCategory },
    /// The selection was released
    Unlock { id: NodeId },
}

impl InteractionEvent {
    /// The part this event concerns
    pub fn id(&self) -> &NodeId {
        match self {
            InteractionEvent::Enter { id, .. }
            | InteractionEvent::Exit { id }
            | InteractionEvent::Lock { id, .. }
            | InteractionEvent::Unlock { id } => id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InteractionEvent::Enter { .. } => "Enter",
            InteractionEvent::Exit { .. } => "Exit",
            InteractionEvent::Lock { .. } => "Lock",
            InteractionEvent::Unlock { .. } => "Unlock",
        }
    }
}

/// An event stamped with the animation token that was current after it
/// and the frame time at which it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub event: InteractionEvent,
    pub token: u64,
    pub at: Duration,
}
