//! Hue/saturation/lightness colour.

use serde::{Deserialize, Serialize};

/// A colour in HSL space.
///
/// Unlike the degree-based helpers used for drawing, the hue here is stored in
/// turns (`0.0..1.0`), which is how the animation formulas are written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in turns.
    pub h: f32,
    /// Saturation (0.0 - 1.0).
    pub s: f32,
    /// Lightness (0.0 - 1.0).
    pub l: f32,
}

impl Hsl {
    /// Create a new colour.
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Hue expressed in degrees.
    pub fn hue_degrees(&self) -> f32 {
        self.h.rem_euclid(1.0) * 360.0
    }
}
