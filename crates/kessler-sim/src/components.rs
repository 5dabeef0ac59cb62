//! ECS components attached to every physical body.
//!
//! Position and heading live in `kessler_core::types::Transform`, speeds in
//! `kessler_core::types::Kinematics`; the application's kind value and the
//! lifecycle hooks are components too.

use kessler_core::enums::BoundaryMode;

/// Collision footprint: diameter of the circle that encloses the body,
/// centred on its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: f64,
}

/// Boundary response resolved for this body at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary(pub BoundaryMode);

/// Marker: the body is held in place and skipped when advancing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Frozen;
