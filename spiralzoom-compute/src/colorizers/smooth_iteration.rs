//! Smooth iteration colorizer: palette position from the continuous escape
//! count plus a slow time drift, with optional boundary glow.

use super::shading::glow;
use super::Colorizer;
use spiralzoom_core::{ColorParams, CosinePalette, IterationResult, Rgb};

/// Colorizer for escaped points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothIterationColorizer {
    palette: CosinePalette,
    cycle_scale: f32,
    time_drift: f32,
    glow_strength: f32,
    glow_scale: f32,
    glow_offset: f32,
}

impl SmoothIterationColorizer {
    pub fn new(params: &ColorParams) -> Self {
        Self {
            palette: params.palette,
            cycle_scale: params.cycle_scale,
            time_drift: params.time_drift,
            glow_strength: params.glow_strength,
            glow_scale: params.glow_scale,
            glow_offset: params.glow_offset,
        }
    }

    /// Palette position: t = μ·k1 + time·k2.
    #[inline]
    pub fn palette_position(&self, smooth_iterations: f32, time: f32) -> f32 {
        smooth_iterations * self.cycle_scale + time * self.time_drift
    }
}

impl Colorizer for SmoothIterationColorizer {
    fn colorize(&self, result: &IterationResult, time: f32) -> Rgb {
        let smooth = result.smooth_iterations.max(0.0);
        let rgb = self.palette.sample(self.palette_position(smooth, time));

        if self.glow_strength <= 0.0 {
            return rgb;
        }
        let g = glow(smooth, self.glow_strength, self.glow_scale, self.glow_offset);
        rgb.map(|c| c + g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spiralzoom_core::ZoomConfig;

    fn no_glow() -> ColorParams {
        ColorParams {
            glow_strength: 0.0,
            ..ZoomConfig::spiral().color
        }
    }

    #[test]
    fn time_drift_shifts_color_at_fixed_count() {
        let colorizer = SmoothIterationColorizer::new(&no_glow());
        let result = IterationResult::escaped(40, 800, 40.3, 1000.0);
        let early = colorizer.colorize(&result, 0.0);
        let later = colorizer.colorize(&result, 5.0);
        assert_ne!(early, later, "elapsed time should move the palette");
    }

    #[test]
    fn no_drift_means_time_invariant() {
        let params = ColorParams {
            time_drift: 0.0,
            ..no_glow()
        };
        let colorizer = SmoothIterationColorizer::new(&params);
        let result = IterationResult::escaped(12, 800, 12.8, 1000.0);
        assert_eq!(
            colorizer.colorize(&result, 0.0),
            colorizer.colorize(&result, 1234.5)
        );
    }

    #[test]
    fn glow_only_brightens() {
        let plain = SmoothIterationColorizer::new(&no_glow());
        let glowing = SmoothIterationColorizer::new(&ZoomConfig::spiral().color);
        let result = IterationResult::escaped(3, 800, 3.5, 1000.0);
        let a = plain.colorize(&result, 1.0);
        let b = glowing.colorize(&result, 1.0);
        for i in 0..3 {
            assert!(b[i] > a[i], "channel {}: {} should exceed {}", i, b[i], a[i]);
        }
    }

    #[test]
    fn nearby_smooth_counts_give_nearby_colors() {
        let colorizer = SmoothIterationColorizer::new(&no_glow());
        let a = colorizer.colorize(&IterationResult::escaped(9, 800, 9.999, 300.0), 0.0);
        let b = colorizer.colorize(&IterationResult::escaped(10, 800, 10.001, 300.0), 0.0);
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 0.01, "{:?} vs {:?}", a, b);
        }
    }
}
