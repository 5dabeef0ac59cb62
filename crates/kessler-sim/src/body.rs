//! Mutable handle to one live body.
//!
//! `BodyMut` is what application code uses to steer and place a body;
//! collision reactions get the narrower `Reaction` wrapped around it. It can
//! change only the body it was created for. Once the body has ended (through
//! [`BodyMut::kill`] or [`BodyMut::decease`]) every other call panics.

use glam::DVec2;
use hecs::{ComponentError, Entity};
use log::warn;
use rand::Rng;

use kessler_core::constants::{BOUNCE_PLACEMENT_BORDER, MAX_PLACEMENT_ATTEMPTS};
use kessler_core::enums::BoundaryMode;
use kessler_core::geometry::AvoidRect;
use kessler_core::types::{Kinematics, Transform};

use crate::components::Frozen;
use crate::kind::{Contact, EntityKind};
use crate::lifecycle::EndReason;
use crate::registry::{Motion, Registry};

pub struct BodyMut<'a, K: EntityKind> {
    registry: &'a mut Registry<K>,
    entity: Entity,
}

impl<'a, K: EntityKind> BodyMut<'a, K> {
    pub(crate) fn new(registry: &'a mut Registry<K>, entity: Entity) -> Self {
        Self { registry, entity }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn is_live(&self) -> bool {
        self.registry.is_live(self.entity)
    }

    fn motion(&self) -> Motion {
        match self.registry.motion(self.entity) {
            Some(motion) => motion,
            None => panic!("{:?} is no longer live", self.entity),
        }
    }

    fn update(&mut self, f: impl FnOnce(&mut Transform, &mut Kinematics)) {
        let mut motion = self.motion();
        f(&mut motion.transform, &mut motion.kinematics);
        self.registry.store_motion(self.entity, &motion);
    }

    // --- Reading ---

    pub fn kind(&self) -> K {
        match self.registry.kind(self.entity) {
            Some(kind) => kind,
            None => panic!("{:?} is no longer live", self.entity),
        }
    }

    pub fn contact(&self) -> Contact<K> {
        match self.registry.contact(self.entity) {
            Some(contact) => contact,
            None => panic!("{:?} is no longer live", self.entity),
        }
    }

    pub fn position(&self) -> DVec2 {
        self.motion().transform.position
    }

    pub fn rotation(&self) -> f64 {
        self.motion().transform.rotation
    }

    pub fn speed(&self) -> f64 {
        self.motion().kinematics.speed
    }

    pub fn rotation_speed(&self) -> f64 {
        self.motion().kinematics.rotation_speed
    }

    pub fn cruise_speed(&self) -> f64 {
        self.motion().kinematics.cruise_speed
    }

    pub fn cruise_rotation_speed(&self) -> f64 {
        self.motion().kinematics.cruise_rotation_speed
    }

    pub fn velocity(&self) -> DVec2 {
        self.motion().kinematics.velocity()
    }

    pub fn width(&self) -> f64 {
        self.contact().width
    }

    pub fn boundary(&self) -> BoundaryMode {
        self.motion().boundary
    }

    pub fn is_frozen(&self) -> bool {
        self.motion().frozen
    }

    // --- Speed ---

    /// Set speed in pixels per second.
    pub fn set_speed(&mut self, speed: f64) {
        self.update(|t, k| k.set_speed(speed, t.rotation));
    }

    pub fn set_cruise_speed(&mut self, cruise_speed: f64) {
        self.update(|_, k| k.cruise_speed = cruise_speed);
    }

    /// Set speed to the cruise speed.
    pub fn cruise(&mut self) {
        self.update(|t, k| k.set_speed(k.cruise_speed, t.rotation));
    }

    pub fn zero_speed(&mut self) {
        self.set_speed(0.0);
    }

    // --- Rotation ---

    /// Set rotation speed in degrees per second, negative is anticlockwise.
    pub fn set_rotation_speed(&mut self, rotation_speed: f64) {
        self.update(|_, k| k.rotation_speed = rotation_speed);
    }

    /// Rotate by `degrees`, negative is anticlockwise.
    pub fn rotate(&mut self, degrees: f64) {
        self.update(|t, k| {
            t.rotation += degrees;
            k.refresh(t.rotation);
        });
    }

    pub fn set_cruise_rotation_speed(&mut self, cruise_rotation_speed: f64) {
        self.update(|_, k| k.cruise_rotation_speed = cruise_rotation_speed);
    }

    /// Set rotation speed to the cruise rotation speed in the given sense.
    pub fn cruise_rotation(&mut self, clockwise: bool) {
        self.update(|_, k| {
            k.rotation_speed = if clockwise {
                k.cruise_rotation_speed
            } else {
                -k.cruise_rotation_speed
            };
        });
    }

    pub fn zero_rotation(&mut self) {
        self.set_rotation_speed(0.0);
    }

    pub fn turnaround(&mut self) {
        self.rotate(180.0);
    }

    /// Rotate by a random whole number of degrees in 0..=360.
    pub fn rotate_randomly(&mut self) {
        let degrees = self.registry.rng.gen_range(0..=360u32);
        self.rotate(f64::from(degrees));
    }

    /// Stop both moving and turning.
    pub fn stop(&mut self) {
        self.update(|_, k| k.halt());
    }

    // --- Position ---

    pub fn set_position(&mut self, position: DVec2) {
        self.update(|t, _| t.position = position);
    }

    /// Move to a random point in the playfield outside every `avoid` rect.
    ///
    /// Bodies that bounce are kept clear of the edges so they do not bounce
    /// on their first move. Returns `false`, leaving the body where it was,
    /// if no free point turns up.
    pub fn position_randomly(&mut self, avoid: &[AvoidRect]) -> bool {
        let Some(field) = self.registry.field else {
            return false;
        };
        let border = if self.boundary() == BoundaryMode::Bounce {
            BOUNCE_PLACEMENT_BORDER
        } else {
            0.0
        };
        let mut area = field.inset(border);
        if area.width() < 0.0 || area.height() < 0.0 {
            area = field.inset(0.0);
        }

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let point = DVec2::new(
                self.registry.rng.gen_range(area.x_from..=area.x_to),
                self.registry.rng.gen_range(area.y_from..=area.y_to),
            );
            if !avoid.iter().any(|rect| rect.contains(point)) {
                self.set_position(point);
                return true;
            }
        }
        warn!(
            "no free position for {:?} after {MAX_PLACEMENT_ATTEMPTS} attempts",
            self.entity
        );
        false
    }

    /// Rect to keep clear of this body when placing others.
    pub fn avoid_rect(&self, margin: f64) -> AvoidRect {
        let contact = self.contact();
        AvoidRect::around(contact.position(), contact.width, margin)
    }

    // --- Control ---

    /// Stop the body and hold it until [`BodyMut::unfreeze`].
    pub fn freeze(&mut self) {
        self.stop();
        if self.registry.world.insert_one(self.entity, Frozen).is_err() {
            panic!("{:?} is no longer live", self.entity);
        }
    }

    /// Release a frozen body. Does nothing if it is not frozen.
    pub fn unfreeze(&mut self) {
        match self.registry.world.remove_one::<Frozen>(self.entity) {
            Ok(Frozen) | Err(ComponentError::MissingComponent(_)) => {}
            Err(ComponentError::NoSuchEntity) => panic!("{:?} is no longer live", self.entity),
        }
    }

    /// Rotate and move for `dt` seconds, applying the boundary mode.
    pub fn advance(&mut self, dt: f64) {
        assert!(self.is_live(), "{:?} is no longer live", self.entity);
        self.registry.advance_body(self.entity, dt);
    }

    // --- End of life ---

    pub fn kill(&mut self, reason: EndReason) {
        self.registry.kill(self.entity, reason);
    }

    pub fn decease(&mut self, reason: EndReason) {
        self.registry.decease(self.entity, reason);
    }
}
