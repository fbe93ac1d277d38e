//! Material swap
//!
//! Renderer-side listener that tracks which material each part should
//! wear: its original one, or the highlight material tinted by status.
//! A renderer reads `state` per part when building draw calls.

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::interaction::{InteractionEvent, InteractionListener, Transition};
use crate::scene::NodeId;
use crate::status::StatusCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialState {
    Original,
    Highlighted(StatusCategory),
}

#[derive(Debug, Clone, Default)]
pub struct MaterialSwap {
    highlighted: FxHashMap<NodeId, StatusCategory>,
}

impl MaterialSwap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: &NodeId) -> MaterialState {
        match self.highlighted.get(id) {
            Some(status) => MaterialState::Highlighted(*status),
            None => MaterialState::Original,
        }
    }

    /// Number of parts currently wearing the highlight material
    pub fn highlighted_count(&self) -> usize {
        self.highlighted.len()
    }

    /// Restore every part to its original material.
    pub fn restore_all(&mut self) {
        self.highlighted.clear();
    }
}

impl InteractionListener for MaterialSwap {
    /// Applies the swap, then reports a second simultaneous highlight
    /// as a failure.
    fn on_transition(&mut self, transition: &Transition) -> Result<()> {
        match &transition.event {
            InteractionEvent::Enter { id, status } | InteractionEvent::Lock { id, status } => {
                self.highlighted.insert(id.clone(), *status);
            }
            InteractionEvent::Exit { id } => {
                self.highlighted.remove(id);
            }
            InteractionEvent::Unlock { .. } => {}
        }

        if self.highlighted.len() > 1 {
            return Err(Error::ListenerFailed(format!(
                "{} parts highlighted after {} '{}'",
                self.highlighted.len(),
                transition.event.name(),
                transition.event.id()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "material_swap_tests.rs"]
mod tests;
