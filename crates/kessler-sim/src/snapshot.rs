//! Snapshot: a serialisable, read-only view of the field.
//!
//! Built for renderers and for comparing runs. Never modifies the registry.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use kessler_core::enums::BoundaryMode;
use kessler_core::geometry::Playfield;
use kessler_core::types::SimTime;

use crate::kind::EntityKind;
use crate::registry::Registry;

/// One live body as seen from outside the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyView<K> {
    /// Stable id of the entity for as long as it lives.
    pub id: u64,
    pub kind: K,
    pub position: DVec2,
    pub rotation: f64,
    pub speed: f64,
    pub rotation_speed: f64,
    pub width: f64,
    pub boundary: BoundaryMode,
    pub frozen: bool,
}

/// All live bodies, in spawn order, at one point in simulation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSnapshot<K> {
    pub time: SimTime,
    pub playfield: Option<Playfield>,
    pub bodies: Vec<BodyView<K>>,
}

/// Build a snapshot of every live body in `registry`.
pub fn build_snapshot<K: EntityKind>(registry: &Registry<K>, time: &SimTime) -> FieldSnapshot<K> {
    let bodies = registry
        .live()
        .iter()
        .filter_map(|&entity| {
            let motion = registry.motion(entity)?;
            Some(BodyView {
                id: entity.to_bits().get(),
                kind: registry.kind(entity)?,
                position: motion.transform.position,
                rotation: motion.transform.rotation,
                speed: motion.kinematics.speed,
                rotation_speed: motion.kinematics.rotation_speed,
                width: registry.width(entity)?,
                boundary: motion.boundary,
                frozen: motion.frozen,
            })
        })
        .collect();

    FieldSnapshot {
        time: *time,
        playfield: registry.playfield(),
        bodies,
    }
}
