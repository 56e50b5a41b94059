//! Occupancy registry
//!
//! Tracks rectangles that are already spoken for so later placements (cats,
//! flowers, bushes) never land on top of each other. Claims stay until they
//! are explicitly released.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Collectible;

/// Handle returned when a region is claimed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub u32);

/// Claimed regions, kept in claim order
#[derive(Debug, Clone, Default)]
pub struct OccupancyRegistry {
    claims: Vec<(RegionId, Rect)>,
    next_id: u32,
}

impl OccupancyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `candidate`, grown by `padding` on every side, is clear of
    /// every claim and every uncollected collectible
    pub fn can_place(&self, candidate: &Rect, padding: f32, collectibles: &[Collectible]) -> bool {
        let test = candidate.inflate(padding);

        if self.claims.iter().any(|(_, claimed)| test.intersects(claimed)) {
            return false;
        }

        !collectibles
            .iter()
            .any(|cat| !cat.collected && test.intersects(&cat.rect))
    }

    /// Claim a region
    pub fn register(&mut self, region: Rect) -> RegionId {
        let id = RegionId(self.next_id);
        self.next_id += 1;
        self.claims.push((id, region));
        id
    }

    /// Release a claim, returning its rectangle if it was still held
    pub fn release(&mut self, id: RegionId) -> Option<Rect> {
        let idx = self.claims.iter().position(|(claim_id, _)| *claim_id == id)?;
        Some(self.claims.remove(idx).1)
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.claims.iter().any(|(claim_id, _)| *claim_id == id)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Iterate live claims in claim order
    pub fn regions(&self) -> impl Iterator<Item = &Rect> {
        self.claims.iter().map(|(_, rect)| rect)
    }
}
