//! Motion integration and boundary response.
//!
//! Each advance rotates the body, computes where its velocity would take it
//! and, if that point is not strictly inside the playfield, applies the
//! body's boundary mode instead of the plain move.

use hecs::Entity;
use rand::Rng;

use kessler_core::constants::{BOUNCE_TURN_MAX, BOUNCE_TURN_MIN};
use kessler_core::enums::BoundaryMode;

use crate::kind::EntityKind;
use crate::lifecycle::EndReason;
use crate::registry::{Motion, Registry};

impl<K: EntityKind> Registry<K> {
    /// Advance every live, unfrozen body by `dt` seconds.
    ///
    /// Bodies that end during the pass (a `die` or `kill` boundary) are not
    /// revisited.
    pub fn advance_all(&mut self, dt: f64) {
        for entity in self.live.clone() {
            if self.is_live(entity) {
                self.advance_body(entity, dt);
            }
        }
    }

    pub(crate) fn advance_body(&mut self, entity: Entity, dt: f64) {
        let Some(field) = self.field else {
            return;
        };
        let Some(mut motion) = self.motion(entity) else {
            return;
        };
        if motion.frozen {
            return;
        }

        motion.transform.rotation += motion.kinematics.rotation_speed * dt;
        motion.kinematics.refresh(motion.transform.rotation);

        let mut next = motion.transform.position + motion.kinematics.velocity() * dt;
        let x_inbounds = field.x_inbounds(next.x);
        let y_inbounds = field.y_inbounds(next.y);

        if x_inbounds && y_inbounds {
            motion.transform.position = next;
            self.store_motion(entity, &motion);
            return;
        }

        match motion.boundary {
            BoundaryMode::Stop => {
                motion.kinematics.halt();
                self.store_motion(entity, &motion);
            }
            BoundaryMode::Die => {
                self.store_motion(entity, &motion);
                self.decease(entity, EndReason::Boundary);
            }
            BoundaryMode::Kill => {
                self.store_motion(entity, &motion);
                self.kill(entity, EndReason::Boundary);
            }
            BoundaryMode::Wrap => {
                if !x_inbounds {
                    next.x = field.wrap_x(next.x);
                }
                if !y_inbounds {
                    next.y = field.wrap_y(next.y);
                }
                motion.transform.position = next;
                self.store_motion(entity, &motion);
            }
            BoundaryMode::Bounce => {
                // Each offending axis keeps its last coordinate and turns the
                // body; a corner hit turns it twice.
                if !x_inbounds {
                    self.bounce(&mut motion);
                    next.x = motion.transform.position.x;
                }
                if !y_inbounds {
                    self.bounce(&mut motion);
                    next.y = motion.transform.position.y;
                }
                motion.transform.position = next;
                self.store_motion(entity, &motion);
            }
        }
    }

    /// Turn back by a random 130..=230 degrees, away from the half-plane the
    /// body currently faces.
    fn bounce(&mut self, motion: &mut Motion) {
        let turn = f64::from(self.rng.gen_range(BOUNCE_TURN_MIN..=BOUNCE_TURN_MAX));
        let facing = motion.transform.rotation.rem_euclid(360.0);
        if facing >= 180.0 {
            motion.transform.rotation -= turn;
        } else {
            motion.transform.rotation += turn;
        }
        motion.kinematics.refresh(motion.transform.rotation);
    }
}
