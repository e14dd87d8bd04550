use super::{InteriorShading, SmoothIterationColorizer};
use spiralzoom_core::{ColorParams, IterationResult, Rgb};

/// Maps a single pixel's iteration result to a color.
pub trait Colorizer {
    /// `time` is elapsed seconds, used for slow palette drift.
    fn colorize(&self, result: &IterationResult, time: f32) -> Rgb;
}

/// Escaped pixels go through the smooth palette, interior pixels through
/// interior shading. Output is clamped to [0, 1]³.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPipeline {
    exterior: SmoothIterationColorizer,
    interior: InteriorShading,
}

impl ColorPipeline {
    pub fn new(params: &ColorParams) -> Self {
        Self {
            exterior: SmoothIterationColorizer::new(params),
            interior: InteriorShading::new(params),
        }
    }
}

impl Colorizer for ColorPipeline {
    fn colorize(&self, result: &IterationResult, time: f32) -> Rgb {
        let rgb = if result.escaped {
            self.exterior.colorize(result, time)
        } else {
            self.interior.colorize(result, time)
        };
        rgb.map(|c| if c.is_finite() { c.clamp(0.0, 1.0) } else { 0.0 })
    }
}

/// Quantize a [0, 1] color to opaque RGBA8.
#[inline]
pub fn to_rgba8(rgb: Rgb) -> [u8; 4] {
    let [r, g, b] = rgb.map(|c| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8);
    [r, g, b, 255]
}
