//! Proximity-based collision evaluation.
//!
//! Two bodies collide when their centres are closer than half their combined
//! widths. Exact for circles, increasingly loose the less round a body is.
//! Assumes every body's position is the centre of its footprint.

use glam::DVec2;
use hecs::Entity;

use crate::kind::EntityKind;
use crate::registry::Registry;

/// Whether two circular footprints overlap.
pub fn footprints_overlap(a: DVec2, a_width: f64, b: DVec2, b_width: f64) -> bool {
    a.distance(b) < (a_width + b_width) / 2.0
}

impl<K: EntityKind> Registry<K> {
    /// Every unordered pair of live bodies currently in collision.
    ///
    /// Pairs come from a snapshot of the live set taken on entry, in
    /// combination order over spawn order; no pair appears twice and no body
    /// is paired with itself. Callers acting on the result must re-check
    /// liveness, as reacting to one pair may end a member of a later one.
    pub fn evaluate_collisions(&self) -> Vec<(Entity, Entity)> {
        let bodies: Vec<(Entity, DVec2, f64)> = self
            .live
            .iter()
            .filter_map(|&entity| Some((entity, self.position(entity)?, self.width(entity)?)))
            .collect();

        let mut pairs = Vec::new();
        for (i, &(a, a_pos, a_width)) in bodies.iter().enumerate() {
            for &(b, b_pos, b_width) in &bodies[i + 1..] {
                if footprints_overlap(a_pos, a_width, b_pos, b_width) {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }

    /// Distance between the centres of two live bodies.
    pub fn distance(&self, a: Entity, b: Entity) -> Option<f64> {
        Some(self.position(a)?.distance(self.position(b)?))
    }
}
