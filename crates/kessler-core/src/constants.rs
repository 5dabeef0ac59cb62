//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 100;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Maximum fixed ticks run by a single `run_for` call. Beyond this the
/// remaining backlog is dropped rather than replayed.
pub const MAX_SUBSTEPS: u32 = 8;

// --- Kinematics ---

/// Default cruise speed (pixels per second).
pub const DEFAULT_CRUISE_SPEED: f64 = 200.0;

/// Default cruise rotation speed (degrees per second).
pub const DEFAULT_CRUISE_ROTATION_SPEED: f64 = 200.0;

// --- Boundary response ---

/// Smallest turn applied on a bounce (degrees, inclusive).
pub const BOUNCE_TURN_MIN: u32 = 130;

/// Largest turn applied on a bounce (degrees, inclusive).
pub const BOUNCE_TURN_MAX: u32 = 230;

/// Border kept clear when randomly placing an entity that bounces, so it is
/// not placed on the boundary and bounces on its first move.
pub const BOUNCE_PLACEMENT_BORDER: f64 = 5.0;

/// Attempts made to find a free spot before `position_randomly` gives up.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

// --- Playfield defaults ---

/// Default playfield width in pixels.
pub const DEFAULT_FIELD_WIDTH: f64 = 1200.0;

/// Default playfield height in pixels.
pub const DEFAULT_FIELD_HEIGHT: f64 = 800.0;
