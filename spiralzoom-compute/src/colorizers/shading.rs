//! Boundary glow and interior shading.

use super::Colorizer;
use spiralzoom_core::{ColorParams, IterationResult, Rgb};

/// Glow term added to escaped colors: strength / (μ·scale + offset).
/// `offset` is validated positive, so the denominator never reaches zero
/// for μ ≥ 0.
#[inline]
pub fn glow(smooth_iterations: f32, strength: f32, scale: f32, offset: f32) -> f32 {
    strength / (smooth_iterations.max(0.0) * scale + offset)
}

/// Dark, low-saturation color for points that never escape, modulated by
/// budget use and the magnitude of the last orbit point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteriorShading {
    base: Rgb,
    texture: f32,
}

impl InteriorShading {
    pub fn new(params: &ColorParams) -> Self {
        Self {
            base: params.interior_color,
            texture: params.interior_texture,
        }
    }
}

impl Colorizer for InteriorShading {
    fn colorize(&self, result: &IterationResult, _time: f32) -> Rgb {
        // Final |z| can reach the escape radius; anything past 2 saturates.
        let orbit = (result.final_z_norm_sq.max(0.0).sqrt() * 0.5).min(1.0);
        let v = 0.5 * (result.budget_ratio() + orbit);
        let factor = 1.0 + self.texture * (2.0 * v - 1.0);
        self.base.map(|c| c * factor)
    }
}
