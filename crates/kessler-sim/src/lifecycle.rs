//! End of life: deceasing, killing and clearing bodies.
//!
//! A body ends exactly once. `kill` is the premature, gameplay-driven ending
//! and fires `on_kill` before the `on_die` every ending fires. Ending a body
//! that is not live is a lifecycle bug and panics.

use glam::DVec2;
use hecs::Entity;
use log::trace;

use kessler_core::enums::Fate;

use crate::kind::EntityKind;
use crate::registry::Registry;

/// Why a body's life ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Ended directly by the application.
    Requested,
    /// Left the playfield under a `die` or `kill` boundary mode.
    Boundary,
    /// Ended by its own reaction to colliding with the given entity.
    Collision(Entity),
    /// Swept up by `end_all` / `end_all_except`.
    Cleared,
}

/// Hook fired at end of life with the ending entity and the reason.
pub type LifeHook = Box<dyn FnMut(Entity, EndReason) + Send + Sync>;

/// Hooks captured at spawn time.
#[derive(Default)]
pub(crate) struct LifeHooks {
    pub on_kill: Option<LifeHook>,
    pub on_die: Option<LifeHook>,
}

/// Record of one body's end of life, drained by the host to play effects or
/// award points after the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifeEvent<K> {
    pub entity: Entity,
    pub kind: K,
    pub fate: Fate,
    pub reason: EndReason,
    /// Where the body was when it ended.
    pub position: DVec2,
}

/// Exception to a bulk end of life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spare<K> {
    /// Spare this one body.
    Entity(Entity),
    /// Spare every body of this kind.
    Kind(K),
}

impl<K: PartialEq> Spare<K> {
    fn covers(&self, entity: Entity, kind: &K) -> bool {
        match self {
            Spare::Entity(spared) => *spared == entity,
            Spare::Kind(spared) => spared == kind,
        }
    }
}

impl<K: EntityKind> Registry<K> {
    /// End a body's life naturally: remove it and fire `on_die`.
    ///
    /// # Panics
    /// If `entity` is not live.
    pub fn decease(&mut self, entity: Entity, reason: EndReason) {
        self.end_life(entity, reason, Fate::Deceased);
    }

    /// End a body's life prematurely: fire `on_kill`, then decease it.
    ///
    /// # Panics
    /// If `entity` is not live.
    pub fn kill(&mut self, entity: Entity, reason: EndReason) {
        self.end_life(entity, reason, Fate::Killed);
    }

    /// End every live body.
    ///
    /// # Panics
    /// If any body is still live afterwards. Hooks cannot reach the registry,
    /// so nothing can spawn during the sweep; the check guards the sweep
    /// itself.
    pub fn end_all(&mut self, kill: bool) {
        for entity in self.live.clone() {
            if self.is_live(entity) {
                self.end_cleared(entity, kill);
            }
        }
        assert!(
            self.live.is_empty(),
            "bodies still live after ending all lives: {:?}",
            self.live
        );
    }

    /// End every live body not covered by `spare`.
    ///
    /// # Panics
    /// If a body not covered by `spare` is still live afterwards. As with
    /// [`Registry::end_all`], no hook can add one; the check guards the sweep
    /// itself.
    pub fn end_all_except(&mut self, spare: &[Spare<K>], kill: bool) {
        if spare.is_empty() {
            self.end_all(kill);
            return;
        }

        for entity in self.live.clone() {
            if self.is_live(entity) && !self.is_spared(entity, spare) {
                self.end_cleared(entity, kill);
            }
        }

        let stragglers: Vec<Entity> = self
            .live
            .iter()
            .copied()
            .filter(|&entity| !self.is_spared(entity, spare))
            .collect();
        assert!(
            stragglers.is_empty(),
            "bodies still live after ending all unspared lives: {stragglers:?}"
        );
    }

    fn is_spared(&self, entity: Entity, spare: &[Spare<K>]) -> bool {
        match self.kind(entity) {
            Some(kind) => spare.iter().any(|s| s.covers(entity, &kind)),
            None => false,
        }
    }

    fn end_cleared(&mut self, entity: Entity, kill: bool) {
        if kill {
            self.kill(entity, EndReason::Cleared);
        } else {
            self.decease(entity, EndReason::Cleared);
        }
    }

    fn end_life(&mut self, entity: Entity, reason: EndReason, fate: Fate) {
        let (Some(kind), Some(position)) = (self.kind(entity), self.position(entity)) else {
            panic!("cannot end the life of {entity:?}: it is not live");
        };

        let mut hooks = self
            .world
            .remove_one::<LifeHooks>(entity)
            .unwrap_or_default();

        if fate == Fate::Killed {
            if let Some(on_kill) = hooks.on_kill.as_mut() {
                on_kill(entity, reason);
            }
        }

        self.remove(entity);

        if let Some(on_die) = hooks.on_die.as_mut() {
            on_die(entity, reason);
        }

        trace!("{kind:?} {entity:?} ended ({fate:?}, {reason:?})");
        self.life_events.push(LifeEvent {
            entity,
            kind,
            fate,
            reason,
            position,
        });
    }

    /// Take `entity` out of the world and the live list.
    fn remove(&mut self, entity: Entity) {
        if self.world.despawn(entity).is_err() {
            panic!("{entity:?} removed from the registry twice");
        }
        match self.live.iter().position(|&e| e == entity) {
            Some(index) => {
                self.live.remove(index);
            }
            None => panic!("{entity:?} was in the world but not in the live list"),
        }
    }
}
