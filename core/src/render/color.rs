//! Two-point color scale used to paint region values.

use std::fmt;

use serde::{Serialize, Serializer};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: `#rrggbb`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Linear ramp from `low` (value 0) to `high` (value 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColorScale {
    pub low: Rgb,
    pub high: Rgb,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            low: Rgb::WHITE,
            high: Rgb::RED,
        }
    }
}

impl ColorScale {
    pub fn new(low: Rgb, high: Rgb) -> Self {
        Self { low, high }
    }

    /// Values outside [0, 1] are clamped; NaN maps to `low`.
    pub fn color_at(&self, value: f64) -> Rgb {
        let t = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;

        Rgb {
            r: lerp(self.low.r, self.high.r),
            g: lerp(self.low.g, self.high.g),
            b: lerp(self.low.b, self.high.b),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
