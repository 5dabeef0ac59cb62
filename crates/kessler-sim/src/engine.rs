//! Simulation engine: the per-tick driver.
//!
//! `SimulationEngine` owns the registry and the clock. Each tick settles every
//! collision at the current positions first and only then moves the bodies,
//! so a hit is always detected at the position it is observed at.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use hecs::Entity;
use log::{debug, trace};

use kessler_core::config::{ConfigError, SimConfig};
use kessler_core::constants::MAX_SUBSTEPS;
use kessler_core::types::SimTime;

use crate::kind::{Contact, EntityKind};
use crate::lifecycle::LifeEvent;
use crate::reaction::Reaction;
use crate::registry::Registry;
use crate::snapshot::{build_snapshot, FieldSnapshot};

/// Two bodies whose collision reactions were dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
    /// Tick during which the collision was handled.
    pub tick: u64,
}

/// What one tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Pairs found in collision at the start of the tick.
    pub pairs_found: usize,
    /// Pairs whose reactions were dispatched.
    pub pairs_dispatched: usize,
    /// Pairs skipped because a member had already ended.
    pub pairs_skipped: usize,
    /// Bodies that ended during the tick.
    pub ended: usize,
}

/// The simulation engine. Owns the registry and all time state.
pub struct SimulationEngine<K: EntityKind> {
    registry: Registry<K>,
    time: SimTime,
    accumulator: f64,
    collision_events: Vec<CollisionEvent>,
}

impl<K: EntityKind> SimulationEngine<K> {
    /// Create an engine with a configured registry.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_registry(Registry::with_config(&config)?))
    }

    /// Drive an existing registry.
    pub fn from_registry(registry: Registry<K>) -> Self {
        Self {
            registry,
            time: SimTime::default(),
            accumulator: 0.0,
            collision_events: Vec::new(),
        }
    }

    pub fn registry(&self) -> &Registry<K> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry<K> {
        &mut self.registry
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Advance the simulation by one tick of `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> TickReport {
        let ended_before = self.registry.life_events.len();
        let pairs = self.registry.evaluate_collisions();
        let mut report = TickReport {
            pairs_found: pairs.len(),
            ..Default::default()
        };

        // Every reaction of the tick sees the other party as it was here.
        let mut contacts: HashMap<Entity, Contact<K>> = HashMap::new();
        for &(a, b) in &pairs {
            for entity in [a, b] {
                if let Entry::Vacant(slot) = contacts.entry(entity) {
                    if let Some(contact) = self.registry.contact(entity) {
                        slot.insert(contact);
                    }
                }
            }
        }

        for (a, b) in pairs {
            let Some((contact_a, contact_b)) = contacts
                .get(&a)
                .zip(contacts.get(&b))
                .filter(|_| self.registry.is_live(a) && self.registry.is_live(b))
            else {
                trace!("skipping stale collision pair {a:?} / {b:?}");
                report.pairs_skipped += 1;
                continue;
            };

            self.collision_events.push(CollisionEvent {
                a,
                b,
                tick: self.time.tick,
            });
            self.dispatch(a, contact_b);
            self.dispatch(b, contact_a);
            report.pairs_dispatched += 1;
        }

        self.registry.advance_all(dt);
        self.time.advance(dt);

        report.ended = self.registry.life_events.len().saturating_sub(ended_before);
        report
    }

    /// Tell `entity`, if still live, that it hit `other`.
    fn dispatch(&mut self, entity: Entity, other: &Contact<K>) {
        if let Some(body) = self.registry.body_mut(entity) {
            K::collided_with(&mut Reaction::new(body), other);
        }
    }

    /// Run as many fixed ticks as `elapsed` seconds of wall time allow.
    ///
    /// Time short of a full tick carries over to the next call. At most
    /// `MAX_SUBSTEPS` ticks run per call; any backlog beyond that is dropped.
    /// Returns the number of ticks run.
    pub fn run_for(&mut self, elapsed: f64) -> u32 {
        let dt = self.time.dt();
        self.accumulator += elapsed.max(0.0);

        let mut ticks = 0;
        while self.accumulator >= dt && ticks < MAX_SUBSTEPS {
            self.tick(dt);
            self.accumulator -= dt;
            ticks += 1;
        }

        if self.accumulator >= dt {
            debug!(
                "simulation {:.3}s behind, dropping backlog",
                self.accumulator
            );
            self.accumulator = 0.0;
        }
        ticks
    }

    /// Read-only view of every live body.
    pub fn snapshot(&self) -> FieldSnapshot<K> {
        build_snapshot(&self.registry, &self.time)
    }

    /// Take every end-of-life event recorded since the last drain.
    pub fn drain_life_events(&mut self) -> Vec<LifeEvent<K>> {
        self.registry.drain_life_events()
    }

    /// Take every collision handled since the last drain.
    pub fn drain_collision_events(&mut self) -> Vec<CollisionEvent> {
        std::mem::take(&mut self.collision_events)
    }
}
