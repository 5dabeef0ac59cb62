//! Core types and definitions for the kessler simulation.
//!
//! This crate defines the vocabulary shared by the simulation and its hosts:
//! kinematic types, boundary modes, playfield geometry, configuration and
//! constants. It has no dependency on the ECS or any runtime framework.

pub mod config;
pub mod constants;
pub mod enums;
pub mod geometry;
pub mod types;

pub use config::{Borders, ConfigError, FieldSettings, SimConfig};
pub use enums::{BoundaryMode, Fate, ParseBoundaryModeError};
pub use geometry::{AvoidRect, InRect, Playfield};
