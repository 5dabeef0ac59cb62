//! Playfield bounds and axis-aligned rectangles.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::{Borders, ConfigError};

/// The rectangle within which bodies move: the host window less its borders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Playfield {
    /// Derive the playfield from window dimensions and border insets.
    pub fn from_window(width: f64, height: f64, borders: &Borders) -> Result<Self, ConfigError> {
        let field = Self {
            x_min: borders.left,
            x_max: width - borders.right,
            y_min: borders.bottom,
            y_max: height - borders.top,
        };
        if !(field.width() > 0.0 && field.height() > 0.0) {
            return Err(ConfigError::Degenerate {
                width: field.width(),
                height: field.height(),
            });
        }
        Ok(field)
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn x_inbounds(&self, x: f64) -> bool {
        self.x_min < x && x < self.x_max
    }

    pub fn y_inbounds(&self, y: f64) -> bool {
        self.y_min < y && y < self.y_max
    }

    /// Whether `point` lies strictly inside the playfield.
    pub fn contains(&self, point: DVec2) -> bool {
        self.x_inbounds(point.x) && self.y_inbounds(point.y)
    }

    /// Wrap an out-of-bounds x coordinate onto the other side.
    pub fn wrap_x(&self, x: f64) -> f64 {
        if x < self.x_min {
            x + self.width()
        } else {
            x - self.width()
        }
    }

    /// Wrap an out-of-bounds y coordinate onto the other side.
    pub fn wrap_y(&self, y: f64) -> f64 {
        if y < self.y_min {
            y + self.height()
        } else {
            y - self.height()
        }
    }

    /// The playfield shrunk by `border` on every side, as an inclusive rect.
    pub fn inset(&self, border: f64) -> InRect {
        InRect::new(
            self.x_min + border,
            self.x_max - border,
            self.y_min + border,
            self.y_max - border,
        )
    }
}

/// Axis-aligned rectangle; containment is inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InRect {
    pub x_from: f64,
    pub x_to: f64,
    pub y_from: f64,
    pub y_to: f64,
}

impl InRect {
    pub fn new(x_from: f64, x_to: f64, y_from: f64, y_to: f64) -> Self {
        Self {
            x_from,
            x_to,
            y_from,
            y_to,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_to - self.x_from
    }

    pub fn height(&self) -> f64 {
        self.y_to - self.y_from
    }

    pub fn contains(&self, point: DVec2) -> bool {
        (self.x_from..=self.x_to).contains(&point.x) && (self.y_from..=self.y_to).contains(&point.y)
    }
}

/// Area to keep clear when placing a new body: a body's square footprint
/// plus a margin on every side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvoidRect {
    pub rect: InRect,
}

impl AvoidRect {
    /// Rectangle around a body centred on `position` with footprint `width`.
    pub fn around(position: DVec2, width: f64, margin: f64) -> Self {
        let half = width / 2.0 + margin;
        Self {
            rect: InRect::new(
                position.x - half,
                position.x + half,
                position.y - half,
                position.y + half,
            ),
        }
    }

    pub fn contains(&self, point: DVec2) -> bool {
        self.rect.contains(point)
    }
}
