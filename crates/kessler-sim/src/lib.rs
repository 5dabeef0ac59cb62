//! Simulation engine for kessler.
//!
//! Owns the hecs world of physical bodies, moves them, resolves what happens
//! at the playfield boundary, evaluates collisions and runs the fixed-rate
//! tick that ties these together. Headless and deterministic for a seed.

pub mod body;
pub mod collision;
pub mod components;
pub mod engine;
pub mod kind;
pub mod lifecycle;
pub mod motion;
pub mod reaction;
pub mod registry;
pub mod snapshot;
pub mod spawn;

pub use kessler_core as core;

pub use body::BodyMut;
pub use engine::{CollisionEvent, SimulationEngine, TickReport};
pub use hecs::Entity;
pub use kind::{Contact, EntityKind};
pub use lifecycle::{EndReason, LifeEvent, LifeHook, Spare};
pub use reaction::Reaction;
pub use registry::Registry;
pub use snapshot::{BodyView, FieldSnapshot};
pub use spawn::Spawn;
