// spiralzoom-core/src/compute_data.rs

use serde::{Deserialize, Serialize};

/// Outcome of iterating a single pixel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IterationResult {
    /// Whether |z|² passed the escape bound within the budget
    pub escaped: bool,
    /// Continuous escape count, never negative. Interior points store 0.0.
    pub smooth_iterations: f32,
    /// Iteration at which the orbit escaped (or max_iterations if it didn't)
    pub raw_iterations: u32,
    /// Budget used for this pixel (for interior shading normalization)
    pub max_iterations: u32,
    /// |z|² of the last orbit point computed
    #[serde(default)]
    pub final_z_norm_sq: f32,
}

impl IterationResult {
    /// Build an escaped result, sanitizing NaN/Infinity float values.
    pub fn escaped(
        raw_iterations: u32,
        max_iterations: u32,
        smooth_iterations: f32,
        final_z_norm_sq: f32,
    ) -> Self {
        let smooth = Self::sanitize_f32(smooth_iterations, raw_iterations as f32);
        Self {
            escaped: true,
            smooth_iterations: smooth.max(0.0),
            raw_iterations,
            max_iterations,
            final_z_norm_sq: Self::sanitize_f32(final_z_norm_sq, 0.0),
        }
    }

    /// Build an interior (non-escaped) result.
    pub fn interior(max_iterations: u32, final_z_norm_sq: f32) -> Self {
        Self {
            escaped: false,
            smooth_iterations: 0.0,
            raw_iterations: max_iterations,
            max_iterations,
            final_z_norm_sq: Self::sanitize_f32(final_z_norm_sq, 0.0),
        }
    }

    /// Fraction of the budget consumed, in [0, 1].
    pub fn budget_ratio(&self) -> f32 {
        if self.max_iterations == 0 {
            return 0.0;
        }
        (self.raw_iterations as f32 / self.max_iterations as f32).clamp(0.0, 1.0)
    }

    #[inline]
    fn sanitize_f32(value: f32, default: f32) -> f32 {
        if value.is_finite() {
            value
        } else {
            default
        }
    }
}

impl Default for IterationResult {
    fn default() -> Self {
        Self::interior(0, 0.0)
    }
}
