//! The registry of live physical bodies.
//!
//! `Registry` owns the hecs world holding every live body, the insertion
//! order used for deterministic iteration, the playfield and the seeded RNG.
//! A body is live iff it is in the registry. Bodies enter only through
//! [`Registry::spawn`] and leave only through the end-of-life operations in
//! `lifecycle`.

use glam::DVec2;
use hecs::{Entity, World};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use kessler_core::config::{ConfigError, FieldSettings, SimConfig};
use kessler_core::enums::BoundaryMode;
use kessler_core::geometry::Playfield;
use kessler_core::types::{Kinematics, Transform};

use crate::body::BodyMut;
use crate::components::{Boundary, Footprint, Frozen};
use crate::kind::{Contact, EntityKind};
use crate::lifecycle::LifeEvent;

/// Copy of the motion state of one body, read and written as a unit.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Motion {
    pub transform: Transform,
    pub kinematics: Kinematics,
    pub boundary: BoundaryMode,
    pub frozen: bool,
}

/// All live bodies plus the playfield they move in.
pub struct Registry<K: EntityKind> {
    pub(crate) world: World,
    /// Live entities in spawn order.
    pub(crate) live: Vec<Entity>,
    pub(crate) field: Option<Playfield>,
    pub(crate) default_boundary: BoundaryMode,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) life_events: Vec<LifeEvent<K>>,
}

impl<K: EntityKind> Registry<K> {
    /// Create an unconfigured registry. [`Registry::configure`] must be called
    /// before anything is spawned.
    pub fn new(seed: u64) -> Self {
        Self {
            world: World::new(),
            live: Vec::new(),
            field: None,
            default_boundary: BoundaryMode::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            life_events: Vec::new(),
        }
    }

    /// Create and configure a registry from a full simulation config.
    pub fn with_config(config: &SimConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::new(config.seed);
        registry.configure(&config.field)?;
        Ok(registry)
    }

    /// Define the playfield and default boundary response.
    ///
    /// Reconfiguring drops every live body without firing its hooks.
    pub fn configure(&mut self, settings: &FieldSettings) -> Result<(), ConfigError> {
        let field = settings.playfield()?;
        if !self.live.is_empty() {
            info!(
                "reconfiguring playfield, dropping {} live bodies",
                self.live.len()
            );
        }
        self.world.clear();
        self.live.clear();
        self.life_events.clear();
        self.field = Some(field);
        self.default_boundary = settings.default_boundary;
        debug!(
            "playfield x {}..{} y {}..{}, default boundary {}",
            field.x_min, field.x_max, field.y_min, field.y_max, settings.default_boundary
        );
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.field.is_some()
    }

    pub fn playfield(&self) -> Option<Playfield> {
        self.field
    }

    pub fn default_boundary(&self) -> BoundaryMode {
        self.default_boundary
    }

    /// Whether `entity` is currently live.
    pub fn is_live(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Live entities in spawn order.
    pub fn live(&self) -> &[Entity] {
        &self.live
    }

    /// Live entities of the given kind, in spawn order.
    pub fn live_of_kind(&self, kind: K) -> Vec<Entity> {
        self.live
            .iter()
            .copied()
            .filter(|&entity| self.kind(entity) == Some(kind))
            .collect()
    }

    pub fn kind(&self, entity: Entity) -> Option<K> {
        self.world.get::<&K>(entity).ok().map(|kind| *kind)
    }

    pub fn transform(&self, entity: Entity) -> Option<Transform> {
        self.world.get::<&Transform>(entity).ok().map(|t| *t)
    }

    pub fn position(&self, entity: Entity) -> Option<DVec2> {
        self.transform(entity).map(|t| t.position)
    }

    pub fn kinematics(&self, entity: Entity) -> Option<Kinematics> {
        self.world.get::<&Kinematics>(entity).ok().map(|k| *k)
    }

    pub fn width(&self, entity: Entity) -> Option<f64> {
        self.world.get::<&Footprint>(entity).ok().map(|f| f.width)
    }

    pub fn boundary(&self, entity: Entity) -> Option<BoundaryMode> {
        self.world.get::<&Boundary>(entity).ok().map(|b| b.0)
    }

    pub fn is_frozen(&self, entity: Entity) -> bool {
        self.world.get::<&Frozen>(entity).is_ok()
    }

    /// Read-only copy of a live body.
    pub fn contact(&self, entity: Entity) -> Option<Contact<K>> {
        Some(Contact {
            entity,
            kind: self.kind(entity)?,
            transform: self.transform(entity)?,
            velocity: self.kinematics(entity)?.velocity(),
            width: self.width(entity)?,
        })
    }

    /// Mutable handle to a live body, `None` if it is not live.
    pub fn body_mut(&mut self, entity: Entity) -> Option<BodyMut<'_, K>> {
        if self.is_live(entity) {
            Some(BodyMut::new(self, entity))
        } else {
            None
        }
    }

    /// Take every end-of-life event recorded since the last drain.
    pub fn drain_life_events(&mut self) -> Vec<LifeEvent<K>> {
        std::mem::take(&mut self.life_events)
    }

    pub(crate) fn motion(&self, entity: Entity) -> Option<Motion> {
        Some(Motion {
            transform: self.transform(entity)?,
            kinematics: self.kinematics(entity)?,
            boundary: self.boundary(entity)?,
            frozen: self.is_frozen(entity),
        })
    }

    pub(crate) fn store_motion(&mut self, entity: Entity, motion: &Motion) {
        if let Ok(mut transform) = self.world.get::<&mut Transform>(entity) {
            *transform = motion.transform;
        }
        if let Ok(mut kinematics) = self.world.get::<&mut Kinematics>(entity) {
            *kinematics = motion.kinematics;
        }
    }
}
