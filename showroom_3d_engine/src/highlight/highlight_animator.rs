/// HighlightAnimator: hover marker and lock ring animations.
///
/// Fed with the state machine's transitions and ticked once per frame
/// with the current animation token. Output is plain values (marker
/// scale, ring scale/thickness/opacity) for the renderer to draw.
///
/// Cancellation works by token only: a job started under an older token
/// is dropped on the next tick without a final update.

use std::time::Duration;
use glam::Vec3;
use rustc_hash::FxHashMap;
use crate::config::AnimationConfig;
use crate::interaction::{InteractionEvent, Transition};
use crate::scene::{AABB, NodeId};
use crate::status::StatusCategory;
use super::animation_job::{AnimationJob, AnimationKind};
use super::easing::{ease_out_cubic, lerp};

/// Current look of the selection ring
#[derive(Debug, Clone, PartialEq)]
pub struct RingState {
    pub target: NodeId,
    pub status: StatusCategory,
    pub scale: f32,
    pub thickness: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Default)]
pub struct HighlightAnimator {
    config: AnimationConfig,
    /// Bounding marker scale per highlighted node
    markers: FxHashMap<NodeId, f32>,
    ring: Option<RingState>,
    jobs: Vec<AnimationJob>,
}

impl HighlightAnimator {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            markers: FxHashMap::default(),
            ring: None,
            jobs: Vec::new(),
        }
    }

    /// Start or tear down animations for one transition.
    ///
    /// Exit and Unlock take effect immediately, not on the next tick.
    pub fn on_transition(&mut self, transition: &Transition) {
        match &transition.event {
            InteractionEvent::Enter { id, .. } => {
                self.markers.insert(id.clone(), 0.0);
                self.jobs.retain(|job| job.target != *id);
                let job = self.job(id, transition, AnimationKind::BoundingReveal);
                self.jobs.push(job);
            }
            InteractionEvent::Exit { id } => {
                self.markers.remove(id);
                self.jobs.retain(|job| job.target != *id);
                if self.ring.as_ref().is_some_and(|ring| ring.target == *id) {
                    self.ring = None;
                }
            }
            InteractionEvent::Lock { id, status } => {
                // Marker completes instantly; the ring takes over
                self.markers.insert(id.clone(), 1.0);
                self.jobs.retain(|job| job.target != *id);
                self.ring = Some(RingState {
                    target: id.clone(),
                    status: *status,
                    scale: self.config.ring_from_scale,
                    thickness: self.config.ring_from_thickness,
                    opacity: self.config.ring_from_opacity,
                });
                let job = self.job(id, transition, AnimationKind::LockRing);
                self.jobs.push(job);
            }
            InteractionEvent::Unlock { id } => {
                if self.ring.as_ref().is_some_and(|ring| ring.target == *id) {
                    self.ring = None;
                }
                self.jobs.retain(|job| !(job.target == *id && job.kind == AnimationKind::LockRing));
            }
        }
    }

    /// Advance every live job to `now`.
    ///
    /// Jobs older than `current_token` are discarded first. Finished jobs
    /// snap to their end values and are removed.
    pub fn tick(&mut self, now: Duration, current_token: u64) {
        let before = self.jobs.len();
        self.jobs.retain(|job| !job.is_stale(current_token));
        if self.jobs.len() != before {
            crate::engine_trace!(
                "showroom3d::HighlightAnimator",
                "Dropped {} stale job(s) (token {})",
                before - self.jobs.len(),
                current_token
            );
        }

        let jobs = std::mem::take(&mut self.jobs);
        for job in jobs {
            let eased = ease_out_cubic(job.progress(now));
            match job.kind {
                AnimationKind::BoundingReveal => {
                    if let Some(scale) = self.markers.get_mut(&job.target) {
                        *scale = eased;
                    }
                }
                AnimationKind::LockRing => {
                    let config = self.config;
                    if let Some(ring) = self.ring.as_mut().filter(|ring| ring.target == job.target) {
                        ring.scale = lerp(config.ring_from_scale, 1.0, eased);
                        ring.thickness = lerp(config.ring_from_thickness, config.ring_to_thickness, eased);
                        ring.opacity = lerp(config.ring_from_opacity, config.ring_to_opacity, eased);
                    }
                }
            }
            if !job.is_complete(now) {
                self.jobs.push(job);
            }
        }
    }

    /// Marker scale of a highlighted node, `None` if not highlighted.
    pub fn marker_scale(&self, id: &NodeId) -> Option<f32> {
        self.markers.get(id).copied()
    }

    /// World positions of the eight marker corners.
    ///
    /// The node's world box scaled about its center by the current marker
    /// scale, so the marker grows out of the part's middle.
    pub fn corner_markers(&self, id: &NodeId, world_box: &AABB) -> Option<[Vec3; 8]> {
        let scale = self.marker_scale(id)?;
        Some(world_box.scaled_about_center(scale).corners())
    }

    pub fn ring(&self) -> Option<&RingState> {
        self.ring.as_ref()
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &NodeId> {
        self.markers.keys()
    }

    pub fn active_jobs(&self) -> &[AnimationJob] {
        &self.jobs
    }

    pub fn is_idle(&self) -> bool {
        self.jobs.is_empty()
    }

    fn job(&self, id: &NodeId, transition: &Transition, kind: AnimationKind) -> AnimationJob {
        AnimationJob {
            target: id.clone(),
            token: transition.token,
            start: transition.at,
            duration: self.config.duration,
            kind,
        }
    }
}

#[cfg(test)]
#[path = "highlight_animator_tests.rs"]
mod tests;
