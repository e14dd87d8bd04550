//! Whole-frame CPU rendering.
//!
//! Every pixel reads the same immutable `FrameUniforms` snapshot and writes
//! only its own output slot. On native targets rows are spread across the
//! rayon pool; wasm32 renders sequentially.

use crate::colorizers::to_rgba8;
use crate::pixel::{FrameUniforms, PixelQuery, PixelShader};
use log::trace;
use spiralzoom_core::ZoomConfig;

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

/// Renders complete RGBA8 frames, row 0 at the top.
#[derive(Clone, Copy, Debug)]
pub struct FrameRenderer {
    shader: PixelShader,
}

impl FrameRenderer {
    pub fn new(config: &ZoomConfig) -> Self {
        Self {
            shader: PixelShader::new(config),
        }
    }

    pub fn shader(&self) -> &PixelShader {
        &self.shader
    }

    /// Render a `width × height` frame.
    pub fn render(&self, uniforms: &FrameUniforms, width: u32, height: u32) -> Vec<[u8; 4]> {
        let mut pixels = vec![[0u8; 4]; width as usize * height as usize];
        self.render_into(uniforms, width, height, &mut pixels);
        pixels
    }

    /// Render into a caller-owned buffer of exactly `width × height` pixels.
    pub fn render_into(
        &self,
        uniforms: &FrameUniforms,
        width: u32,
        height: u32,
        pixels: &mut [[u8; 4]],
    ) {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        if width == 0 || height == 0 {
            return;
        }
        trace!("begin render {}x{} zoom={}", width, height, uniforms.zoom);

        #[cfg(not(target_arch = "wasm32"))]
        pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(row, out)| self.render_row(uniforms, width, height, row as u32, out));

        #[cfg(target_arch = "wasm32")]
        self.render_rows_sequential(uniforms, width, height, pixels);

        trace!("end render");
    }

    /// Single-threaded rendering, same output as `render_into`.
    pub fn render_rows_sequential(
        &self,
        uniforms: &FrameUniforms,
        width: u32,
        height: u32,
        pixels: &mut [[u8; 4]],
    ) {
        if width == 0 || height == 0 {
            return;
        }
        for (row, out) in pixels.chunks_mut(width as usize).enumerate() {
            self.render_row(uniforms, width, height, row as u32, out);
        }
    }

    fn render_row(
        &self,
        uniforms: &FrameUniforms,
        width: u32,
        height: u32,
        row: u32,
        out: &mut [[u8; 4]],
    ) {
        // Image rows grow downward, screen y grows upward.
        let screen_y = (height - row) as f32 - 0.5;
        for (px, pixel) in out.iter_mut().enumerate() {
            let query = PixelQuery {
                screen_x: px as f32 + 0.5,
                screen_y,
                width: width as f32,
                height: height as f32,
            };
            *pixel = to_rgba8(self.shader.evaluate(&query, uniforms));
        }
    }
}

/// Flatten RGBA pixels into a byte buffer (e.g. for canvas `ImageData`).
pub fn flatten_rgba(pixels: &[[u8; 4]]) -> Vec<u8> {
    pixels.iter().flat_map(|p| p.iter().copied()).collect()
}
