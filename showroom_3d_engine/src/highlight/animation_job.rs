/// Animation jobs: one running reveal or lock-ring animation.

use std::time::Duration;
use crate::scene::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Hover marker grows from 0 to full size
    BoundingReveal,
    /// Selection ring grows, thickens and fades in
    LockRing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationJob {
    pub target: NodeId,
    /// Token of the transition that started the job
    pub token: u64,
    pub start: Duration,
    pub duration: Duration,
    pub kind: AnimationKind,
}

impl AnimationJob {
    /// Linear progress in [0, 1]; exactly 1 once `now >= start + duration`.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.is_complete(now) || self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, now: Duration) -> bool {
        now >= self.start + self.duration
    }

    /// True if a newer transition has superseded this job.
    pub fn is_stale(&self, current_token: u64) -> bool {
        self.token < current_token
    }
}
