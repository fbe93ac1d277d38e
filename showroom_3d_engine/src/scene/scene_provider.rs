/// Scene providers: how the asset side hands the model to the core.
///
/// Loading is asynchronous on the host side; until it completes the
/// provider reports no scene and the core treats that as "nothing under
/// the pointer", never as an error.

use std::cell::Cell;
use super::scene_tree::SceneTree;

/// Source of the current scene for the interaction core.
pub trait SceneProvider {
    /// The loaded scene, or `None` while assets are still loading.
    fn scene_root(&self) -> Option<&SceneTree>;

    /// Largest model dimension, used by the target filter thresholds.
    fn model_scale_hint(&self) -> f32;
}

/// Provider holding at most one loaded scene.
///
/// The scale hint is measured at load and again after any `tree_mut`
/// access, the first time it is read.
#[derive(Debug, Default)]
pub struct SceneSlot {
    tree: Option<SceneTree>,
    /// `None` until measured, and again after mutable access
    scale_hint: Cell<Option<f32>>,
}

impl SceneSlot {
    /// Empty slot (nothing loaded yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a loaded scene, replacing any previous one.
    pub fn set_loaded(&mut self, tree: SceneTree) {
        let scale_hint = tree.model_scale_hint();
        crate::engine_info!(
            "showroom3d::SceneSlot",
            "Scene loaded: {} nodes, model scale {:.3}",
            tree.len(),
            scale_hint
        );
        self.scale_hint.set(Some(scale_hint));
        self.tree = Some(tree);
    }

    /// Drop the current scene.
    pub fn unload(&mut self) -> Option<SceneTree> {
        self.scale_hint.set(None);
        self.tree.take()
    }

    /// Mutable access for per-frame transform updates.
    ///
    /// Invalidates the scale hint; the next read re-measures the tree.
    pub fn tree_mut(&mut self) -> Option<&mut SceneTree> {
        self.scale_hint.set(None);
        self.tree.as_mut()
    }

    pub fn is_loaded(&self) -> bool {
        self.scene_root().is_some()
    }
}

impl SceneProvider for SceneSlot {
    fn scene_root(&self) -> Option<&SceneTree> {
        // A tree without a root is still being assembled
        self.tree.as_ref().filter(|t| t.root().is_some())
    }

    fn model_scale_hint(&self) -> f32 {
        if let Some(hint) = self.scale_hint.get() {
            return hint;
        }
        let hint = self.tree.as_ref().map(|t| t.model_scale_hint()).unwrap_or(0.0);
        self.scale_hint.set(Some(hint));
        hint
    }
}

#[cfg(test)]
#[path = "scene_provider_tests.rs"]
mod tests;
