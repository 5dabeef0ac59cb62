//! Construction of physical bodies.

use glam::DVec2;
use hecs::Entity;
use log::trace;

use kessler_core::constants::{DEFAULT_CRUISE_ROTATION_SPEED, DEFAULT_CRUISE_SPEED};
use kessler_core::enums::BoundaryMode;
use kessler_core::types::{Kinematics, Transform};

use crate::components::{Boundary, Footprint};
use crate::kind::EntityKind;
use crate::lifecycle::{EndReason, LifeHooks};
use crate::registry::Registry;

/// Everything needed to spawn one body. Built with chained setters:
///
/// ```ignore
/// let ship = registry.spawn(
///     Spawn::new(Kind::Ship, DVec2::new(100.0, 100.0), 30.0)
///         .rotation(90.0)
///         .boundary(BoundaryMode::Stop)
///         .on_kill(|_, _| println!("boom")),
/// );
/// ```
pub struct Spawn<K> {
    kind: K,
    position: DVec2,
    width: f64,
    speed: f64,
    rotation_speed: f64,
    cruise_speed: f64,
    cruise_rotation_speed: f64,
    rotation: f64,
    boundary: Option<BoundaryMode>,
    hooks: LifeHooks,
}

impl<K: EntityKind> Spawn<K> {
    /// A stationary body of footprint `width` centred on `position`.
    pub fn new(kind: K, position: DVec2, width: f64) -> Self {
        Self {
            kind,
            position,
            width,
            speed: 0.0,
            rotation_speed: 0.0,
            cruise_speed: DEFAULT_CRUISE_SPEED,
            cruise_rotation_speed: DEFAULT_CRUISE_ROTATION_SPEED,
            rotation: 0.0,
            boundary: None,
            hooks: LifeHooks::default(),
        }
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn rotation_speed(mut self, rotation_speed: f64) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn cruise_speed(mut self, cruise_speed: f64) -> Self {
        self.cruise_speed = cruise_speed;
        self
    }

    pub fn cruise_rotation_speed(mut self, cruise_rotation_speed: f64) -> Self {
        self.cruise_rotation_speed = cruise_rotation_speed;
        self
    }

    /// Initial rotation in degrees.
    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Override the registry's default boundary response for this body.
    pub fn boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Called once if the body is killed, before `on_die`.
    pub fn on_kill(mut self, hook: impl FnMut(Entity, EndReason) + Send + Sync + 'static) -> Self {
        self.hooks.on_kill = Some(Box::new(hook));
        self
    }

    /// Called once when the body leaves the registry, however it ends.
    pub fn on_die(mut self, hook: impl FnMut(Entity, EndReason) + Send + Sync + 'static) -> Self {
        self.hooks.on_die = Some(Box::new(hook));
        self
    }
}

impl<K: EntityKind> Registry<K> {
    /// Spawn a body and add it to the live set.
    ///
    /// # Panics
    /// If the registry has not been configured.
    pub fn spawn(&mut self, spawn: Spawn<K>) -> Entity {
        assert!(
            self.is_configured(),
            "registry must be configured before bodies are spawned"
        );
        debug_assert!(spawn.width >= 0.0, "negative footprint width");

        let boundary = spawn.boundary.unwrap_or(self.default_boundary);
        let transform = Transform::new(spawn.position, spawn.rotation);
        let kinematics = Kinematics::new(
            spawn.speed,
            spawn.rotation_speed,
            spawn.cruise_speed,
            spawn.cruise_rotation_speed,
            spawn.rotation,
        );

        let entity = self.world.spawn((
            spawn.kind,
            transform,
            kinematics,
            Footprint { width: spawn.width },
            Boundary(boundary),
            spawn.hooks,
        ));
        self.live.push(entity);
        trace!("spawned {:?} {entity:?} at {}", spawn.kind, spawn.position);
        entity
    }
}
