//! Linear mapping between map coordinates and the pixels of a rendered view.
//!
//! The viewport is the union of all region bounds. Screen `y` grows downwards while map `y`
//! (latitude) grows upwards, so the vertical axis is flipped.

use serde::Serialize;

use crate::boundary::Bounds;

// Keeps a single-point or single-line boundary from dividing by zero.
const MIN_SPAN: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Viewport {
    pub bounds: Bounds,
}

impl Viewport {
    pub fn fit(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Uniform scale that fits the whole viewport inside `width` x `height` pixels.
    pub fn scale(&self, width: f64, height: f64) -> f64 {
        let sx = width / self.bounds.width().max(MIN_SPAN);
        let sy = height / self.bounds.height().max(MIN_SPAN);
        sx.min(sy)
    }

    pub fn to_screen(&self, x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
        let scale = self.scale(width, height);
        let (ox, oy) = self.offset(scale, width, height);
        (
            ox + (x - self.bounds.min_x) * scale,
            oy + (self.bounds.max_y - y) * scale,
        )
    }

    /// Inverse of [`Viewport::to_screen`]; used to hit-test a pixel click.
    pub fn to_map(&self, px: f64, py: f64, width: f64, height: f64) -> (f64, f64) {
        let scale = self.scale(width, height);
        let (ox, oy) = self.offset(scale, width, height);
        (
            self.bounds.min_x + (px - ox) / scale,
            self.bounds.max_y - (py - oy) / scale,
        )
    }

    // Centers the drawing along the axis that has spare room.
    fn offset(&self, scale: f64, width: f64, height: f64) -> (f64, f64) {
        (
            (width - self.bounds.width() * scale) / 2.0,
            (height - self.bounds.height() * scale) / 2.0,
        )
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
