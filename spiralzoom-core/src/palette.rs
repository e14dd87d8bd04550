//! Cosine gradient palette: `a + b·cos(2π·(c·t + d))` per channel.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Linear RGB color, components nominally in [0, 1].
pub type Rgb = [f32; 3];

/// Periodic palette defined by four RGB coefficient vectors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CosinePalette {
    /// Offset
    pub a: Rgb,
    /// Amplitude
    pub b: Rgb,
    /// Frequency
    pub c: Rgb,
    /// Phase
    pub d: Rgb,
}

impl Default for CosinePalette {
    fn default() -> Self {
        Self::ember()
    }
}

impl CosinePalette {
    /// Sample the palette at `t`. Each channel `i` stays within
    /// `[a[i] - |b[i]|, a[i] + |b[i]|]` for every real `t`.
    #[inline]
    pub fn sample(&self, t: f32) -> Rgb {
        let mut out = [0.0; 3];
        for (i, channel) in out.iter_mut().enumerate() {
            *channel = self.a[i] + self.b[i] * libm::cosf(TAU * (self.c[i] * t + self.d[i]));
        }
        out
    }

    /// Lowest and highest value each channel can take.
    pub fn channel_bounds(&self) -> [(f32, f32); 3] {
        let mut bounds = [(0.0, 0.0); 3];
        for (i, bound) in bounds.iter_mut().enumerate() {
            *bound = (self.a[i] - self.b[i].abs(), self.a[i] + self.b[i].abs());
        }
        bounds
    }

    /// Factory palettes built into the binary.
    pub fn factory_defaults() -> Vec<(&'static str, CosinePalette)> {
        vec![
            ("ember", Self::ember()),
            ("rainbow", Self::rainbow()),
            ("ice", Self::ice()),
        ]
    }

    /// Warm orange/blue scheme used by the spiral preset.
    pub fn ember() -> Self {
        Self {
            a: [0.5, 0.5, 0.5],
            b: [0.5, 0.5, 0.5],
            c: [1.0, 1.0, 1.0],
            d: [0.0, 0.10, 0.20],
        }
    }

    pub fn rainbow() -> Self {
        Self {
            a: [0.5, 0.5, 0.5],
            b: [0.5, 0.5, 0.5],
            c: [1.0, 1.0, 1.0],
            d: [0.0, 0.33, 0.67],
        }
    }

    fn ice() -> Self {
        Self {
            a: [0.5, 0.5, 0.5],
            b: [0.5, 0.5, 0.5],
            c: [1.0, 1.0, 0.5],
            d: [0.80, 0.90, 0.30],
        }
    }
}
