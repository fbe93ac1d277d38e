/// InteractionState: the single record of what is hovered and locked.
///
/// Written only by the HoverStateMachine. `locked` implies
/// `hovered == locked`.

use glam::Vec2;
use crate::scene::NodeId;

/// Derived view of the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionPhase {
    Idle,
    Hovering(NodeId),
    Locked(NodeId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub(super) hovered: Option<NodeId>,
    pub(super) locked: Option<NodeId>,
    pub(super) animation_token: u64,
    pub(super) follow_offset: Vec2,
}

impl InteractionState {
    pub fn hovered(&self) -> Option<&NodeId> {
        self.hovered.as_ref()
    }

    pub fn locked(&self) -> Option<&NodeId> {
        self.locked.as_ref()
    }

    /// Incremented on every transition; animations started under an
    /// older token are stale.
    pub fn animation_token(&self) -> u64 {
        self.animation_token
    }

    /// Pointer movement accumulated while locked (UI follow effect)
    pub fn follow_offset(&self) -> Vec2 {
        self.follow_offset
    }

    pub fn phase(&self) -> InteractionPhase {
        match (&self.locked, &self.hovered) {
            (Some(id), _) => InteractionPhase::Locked(id.clone()),
            (None, Some(id)) => InteractionPhase::Hovering(id.clone()),
            (None, None) => InteractionPhase::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.hovered.is_none() && self.locked.is_none()
    }
}
