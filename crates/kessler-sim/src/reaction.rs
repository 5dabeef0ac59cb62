//! Handle given to collision reactions.
//!
//! A reaction runs while the tick is still resolving collisions, before any
//! body has moved. It may steer or end its own body but cannot move it;
//! movement happens once, for every body, after all reactions have run.

use glam::DVec2;
use hecs::Entity;

use kessler_core::enums::BoundaryMode;

use crate::body::BodyMut;
use crate::kind::EntityKind;
use crate::lifecycle::EndReason;

pub struct Reaction<'a, K: EntityKind> {
    body: BodyMut<'a, K>,
}

impl<'a, K: EntityKind> Reaction<'a, K> {
    pub(crate) fn new(body: BodyMut<'a, K>) -> Self {
        Self { body }
    }

    pub fn entity(&self) -> Entity {
        self.body.entity()
    }

    pub fn is_live(&self) -> bool {
        self.body.is_live()
    }

    pub fn kind(&self) -> K {
        self.body.kind()
    }

    pub fn position(&self) -> DVec2 {
        self.body.position()
    }

    pub fn rotation(&self) -> f64 {
        self.body.rotation()
    }

    pub fn speed(&self) -> f64 {
        self.body.speed()
    }

    pub fn rotation_speed(&self) -> f64 {
        self.body.rotation_speed()
    }

    pub fn velocity(&self) -> DVec2 {
        self.body.velocity()
    }

    pub fn width(&self) -> f64 {
        self.body.width()
    }

    pub fn boundary(&self) -> BoundaryMode {
        self.body.boundary()
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.body.set_speed(speed);
    }

    pub fn cruise(&mut self) {
        self.body.cruise();
    }

    pub fn zero_speed(&mut self) {
        self.body.zero_speed();
    }

    pub fn set_rotation_speed(&mut self, rotation_speed: f64) {
        self.body.set_rotation_speed(rotation_speed);
    }

    pub fn rotate(&mut self, degrees: f64) {
        self.body.rotate(degrees);
    }

    pub fn cruise_rotation(&mut self, clockwise: bool) {
        self.body.cruise_rotation(clockwise);
    }

    pub fn zero_rotation(&mut self) {
        self.body.zero_rotation();
    }

    pub fn turnaround(&mut self) {
        self.body.turnaround();
    }

    pub fn rotate_randomly(&mut self) {
        self.body.rotate_randomly();
    }

    pub fn stop(&mut self) {
        self.body.stop();
    }

    pub fn freeze(&mut self) {
        self.body.freeze();
    }

    pub fn kill(&mut self, reason: EndReason) {
        self.body.kill(reason);
    }

    pub fn decease(&mut self, reason: EndReason) {
        self.body.decease(reason);
    }
}
