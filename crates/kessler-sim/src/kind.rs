//! The application-defined entity kind and the collision reaction seam.

use std::fmt;

use glam::DVec2;
use hecs::Entity;

use kessler_core::types::Transform;

use crate::reaction::Reaction;

/// Tagged union of the kinds of body an application simulates (asteroid,
/// ship, bullet...). Stored on every entity as a component.
pub trait EntityKind: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// React to colliding with `other`.
    ///
    /// Only `me` may be changed, and it cannot be moved. `other` is a copy
    /// taken before any reaction of this tick ran. The other party is told
    /// about the same collision through its own call and reacts for itself.
    /// Which of the two is called first is unspecified.
    fn collided_with(me: &mut Reaction<'_, Self>, other: &Contact<Self>) {
        let _ = (me, other);
    }
}

/// Read-only copy of a body taken before the tick's collision reactions run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact<K> {
    pub entity: Entity,
    pub kind: K,
    pub transform: Transform,
    pub velocity: DVec2,
    pub width: f64,
}

impl<K> Contact<K> {
    pub fn position(&self) -> DVec2 {
        self.transform.position
    }
}
