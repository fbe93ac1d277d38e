/// Collaborator interfaces driven by transitions.

use crate::error::Result;
use super::event::Transition;

/// Receives every transition after the state has been committed.
///
/// Tooltips, info panels, particle effects and material swaps plug in
/// here. An `Err` is logged by the controller and does not undo the
/// transition.
pub trait InteractionListener {
    fn on_transition(&mut self, transition: &Transition) -> Result<()>;
}

impl<F> InteractionListener for F
where
    F: FnMut(&Transition) -> Result<()>,
{
    fn on_transition(&mut self, transition: &Transition) -> Result<()> {
        self(transition)
    }
}

/// Host-side model auto-rotation.
///
/// Paused while a part is locked; the state it had before the lock is
/// restored on unlock.
pub trait AutoRotation {
    fn is_rotating(&self) -> bool;
    fn set_rotating(&mut self, rotating: bool);
}

/// Auto-rotation stand-in for hosts without one
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAutoRotation;

impl AutoRotation for NoAutoRotation {
    fn is_rotating(&self) -> bool {
        false
    }

    fn set_rotating(&mut self, _rotating: bool) {}
}
