/// Pick results: ray hits ordered nearest first.
///
/// Created per pointer evaluation and consumed by the TargetFilter.

use glam::Vec3;
use crate::scene::{NodeId, NodeKey};

/// One ray/node intersection
#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    pub key: NodeKey,
    pub id: NodeId,
    /// Distance along the (normalized) ray, in world units
    pub distance: f32,
    pub world_hit_point: Vec3,
}

/// Hits sorted by ascending distance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickResult {
    hits: Vec<PickHit>,
}

impl PickResult {
    /// No hits
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from unsorted hits. Ties keep their input order.
    pub fn from_hits(mut hits: Vec<PickHit>) -> Self {
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Self { hits }
    }

    pub fn hits(&self) -> &[PickHit] {
        &self.hits
    }

    pub fn iter(&self) -> impl Iterator<Item = &PickHit> {
        self.hits.iter()
    }

    /// Nearest hit, if any
    pub fn nearest(&self) -> Option<&PickHit> {
        self.hits.first()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
