//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response of an entity whose next position leaves the playfield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Reappear on the opposite edge.
    #[default]
    Wrap,
    /// Stay at the last valid coordinate and turn back by a random angle.
    Bounce,
    /// Come to rest at the last valid position.
    Stop,
    /// End life naturally (decease).
    Die,
    /// End life prematurely (kill).
    Kill,
}

impl BoundaryMode {
    pub const ALL: [BoundaryMode; 5] = [
        BoundaryMode::Wrap,
        BoundaryMode::Bounce,
        BoundaryMode::Stop,
        BoundaryMode::Die,
        BoundaryMode::Kill,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryMode::Wrap => "wrap",
            BoundaryMode::Bounce => "bounce",
            BoundaryMode::Stop => "stop",
            BoundaryMode::Die => "die",
            BoundaryMode::Kill => "kill",
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognised boundary mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid boundary mode, expected one of: wrap, bounce, stop, die, kill")]
pub struct ParseBoundaryModeError(pub String);

impl FromStr for BoundaryMode {
    type Err = ParseBoundaryModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoundaryMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseBoundaryModeError(s.to_string()))
    }
}

/// How an entity's life ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fate {
    /// Killed prematurely: `on_kill` fired before `on_die`.
    Killed,
    /// Deceased naturally: only `on_die` fired.
    Deceased,
}
