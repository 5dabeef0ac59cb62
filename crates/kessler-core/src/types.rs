//! Fundamental kinematic and simulation types.
//!
//! Screen convention: x grows right, y grows up, rotation is in degrees and
//! clockwise-positive with 0 pointing right.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CRUISE_ROTATION_SPEED, DEFAULT_CRUISE_SPEED, DT};

/// Where a body is and which way it faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Centre of the body (pixels).
    pub position: DVec2,
    /// Orientation in degrees, clockwise-positive. Not normalised.
    pub rotation: f64,
}

impl Transform {
    pub fn new(position: DVec2, rotation: f64) -> Self {
        Self { position, rotation }
    }

    /// Distance between the centres of two transforms.
    pub fn distance_to(&self, other: &Transform) -> f64 {
        self.position.distance(other.position)
    }
}

/// Speeds of a body. `velocity` caches `speed` along the current rotation and
/// is only ever written through [`Kinematics::refresh`]. Serialize-only, so a
/// stale cache cannot be read back in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kinematics {
    /// Pixels per second along the heading.
    pub speed: f64,
    /// Degrees per second, negative is anticlockwise.
    pub rotation_speed: f64,
    /// Speed restored by `cruise`.
    pub cruise_speed: f64,
    /// Rotation speed magnitude restored by `cruise_rotation`.
    pub cruise_rotation_speed: f64,
    velocity: DVec2,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            speed: 0.0,
            rotation_speed: 0.0,
            cruise_speed: DEFAULT_CRUISE_SPEED,
            cruise_rotation_speed: DEFAULT_CRUISE_ROTATION_SPEED,
            velocity: DVec2::ZERO,
        }
    }
}

impl Kinematics {
    /// Build kinematics for a body currently facing `rotation`.
    pub fn new(
        speed: f64,
        rotation_speed: f64,
        cruise_speed: f64,
        cruise_rotation_speed: f64,
        rotation: f64,
    ) -> Self {
        Self {
            speed,
            rotation_speed,
            cruise_speed,
            cruise_rotation_speed,
            velocity: velocity_for(speed, rotation),
        }
    }

    /// Current velocity vector (pixels per second).
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Recompute the velocity cache for the given rotation.
    pub fn refresh(&mut self, rotation: f64) {
        self.velocity = velocity_for(self.speed, rotation);
    }

    /// Set speed and refresh the velocity cache.
    pub fn set_speed(&mut self, speed: f64, rotation: f64) {
        self.speed = speed;
        self.refresh(rotation);
    }

    /// Zero both speed and rotation speed.
    pub fn halt(&mut self) {
        self.speed = 0.0;
        self.rotation_speed = 0.0;
        self.velocity = DVec2::ZERO;
    }
}

/// Velocity of a body moving at `speed` with the given rotation (degrees).
pub fn velocity_for(speed: f64, rotation: f64) -> DVec2 {
    let radians = -rotation.to_radians();
    DVec2::new(speed * radians.cos(), speed * radians.sin())
}

/// Vector from an anchor to a point given relative to the anchor of an
/// unrotated image, once the image is rotated by `rotation` degrees.
///
/// Used to find e.g. the nose of a ship when spawning its bullets.
pub fn rotated_offset(offset: DVec2, rotation: f64) -> DVec2 {
    let radians = -rotation.to_radians();
    DVec2::from_angle(radians).rotate(offset)
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        DT
    }

    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
