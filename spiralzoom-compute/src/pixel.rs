//! Per-pixel evaluation: screen coordinate → fractal coordinate → color.
//!
//! `PixelShader` is immutable and holds no per-frame state, so any number of
//! threads can evaluate pixels of the same frame in any order.

use crate::colorizers::{ColorPipeline, Colorizer};
use crate::EscapeTimeIterator;
use spiralzoom_core::{pixel_to_uv, uv_to_offset, DsComplex, IterationResult, Rgb, ZoomConfig};

/// One pixel's position within a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelQuery {
    /// Horizontal coordinate, pixel centers at +0.5
    pub screen_x: f32,
    /// Vertical coordinate, increasing upwards
    pub screen_y: f32,
    pub width: f32,
    pub height: f32,
}

/// Values shared by every pixel of one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUniforms {
    /// Zoom factor, always positive
    pub zoom: f32,
    /// Rotation in radians
    pub rotation: f32,
    /// Zoom target in double-single form
    pub center: DsComplex,
    /// Elapsed seconds
    pub time: f32,
}

/// Pixel pipeline built once from a validated `ZoomConfig`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelShader {
    iterator: EscapeTimeIterator,
    colorizer: ColorPipeline,
}

impl PixelShader {
    pub fn new(config: &ZoomConfig) -> Self {
        Self {
            iterator: EscapeTimeIterator::from_config(config),
            colorizer: ColorPipeline::new(&config.color),
        }
    }

    pub fn iterator(&self) -> &EscapeTimeIterator {
        &self.iterator
    }

    /// Complex coordinate sampled by a pixel: center + rotate(uv) / zoom,
    /// with the addition done in double-single arithmetic.
    pub fn pixel_to_c(query: &PixelQuery, uniforms: &FrameUniforms) -> DsComplex {
        let uv = pixel_to_uv(query.screen_x, query.screen_y, query.width, query.height);
        let (dx, dy) = uv_to_offset(uv, uniforms.zoom, uniforms.rotation);
        uniforms.center.add_offset(dx, dy)
    }

    /// Iteration result for a pixel, before coloring.
    pub fn iterate(&self, query: &PixelQuery, uniforms: &FrameUniforms) -> IterationResult {
        let c = Self::pixel_to_c(query, uniforms);
        let max_iterations = self.iterator.max_iterations(uniforms.zoom);
        self.iterator.iterate(c, max_iterations)
    }

    /// Color of a pixel in [0, 1]³.
    pub fn evaluate(&self, query: &PixelQuery, uniforms: &FrameUniforms) -> Rgb {
        let result = self.iterate(query, uniforms);
        self.colorizer.colorize(&result, uniforms.time)
    }

    /// Flat-argument form of `evaluate`, matching what a shader host
    /// uploads: the center arrives as separate high and low pairs.
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate_pixel(
        &self,
        screen_x: f32,
        screen_y: f32,
        resolution_width: f32,
        resolution_height: f32,
        zoom: f32,
        rotation: f32,
        center_high: [f32; 2],
        center_low: [f32; 2],
        time: f32,
    ) -> Rgb {
        let query = PixelQuery {
            screen_x,
            screen_y,
            width: resolution_width,
            height: resolution_height,
        };
        let uniforms = FrameUniforms {
            zoom,
            rotation,
            center: DsComplex::from_parts(center_high, center_low),
            time,
        };
        self.evaluate(&query, &uniforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniforms(zoom: f32, rotation: f32) -> FrameUniforms {
        FrameUniforms {
            zoom,
            rotation,
            center: DsComplex::ZERO,
            time: 0.0,
        }
    }

    fn query(x: f32, y: f32) -> PixelQuery {
        PixelQuery {
            screen_x: x,
            screen_y: y,
            width: 200.0,
            height: 100.0,
        }
    }

    #[test]
    fn screen_center_maps_to_target() {
        let u = FrameUniforms {
            center: DsComplex::from_f64_pair(-0.1, 0.9),
            ..uniforms(1.0e6, 1.3)
        };
        let c = PixelShader::pixel_to_c(&query(100.0, 50.0), &u);
        assert_eq!(c, u.center);
    }

    #[test]
    fn top_edge_is_one_unit_up_at_unit_zoom() {
        let c = PixelShader::pixel_to_c(&query(100.0, 100.0), &uniforms(1.0, 0.0));
        let (re, im) = c.to_f64_pair();
        assert!(re.abs() < 1e-7);
        assert!((im - 1.0).abs() < 1e-7);
    }

    #[test]
    fn rotation_half_turn_mirrors_point() {
        let c = PixelShader::pixel_to_c(
            &query(150.0, 50.0),
            &uniforms(1.0, std::f32::consts::PI),
        );
        let (re, im) = c.to_f64_pair();
        assert!((re + 1.0).abs() < 1e-6, "re = {}", re);
        assert!(im.abs() < 1e-6, "im = {}", im);
    }

    #[test]
    fn flat_arguments_match_structured_call() {
        let shader = PixelShader::new(&ZoomConfig::spiral());
        let center = ZoomConfig::spiral().target().unwrap();
        let (high, low) = center.to_parts();
        let u = FrameUniforms {
            zoom: 50.0,
            rotation: 0.4,
            center,
            time: 2.0,
        };
        let q = query(37.5, 80.5);
        assert_eq!(
            shader.evaluate(&q, &u),
            shader.evaluate_pixel(37.5, 80.5, 200.0, 100.0, 50.0, 0.4, high, low, 2.0)
        );
    }
}
