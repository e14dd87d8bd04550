//! JavaScript-facing bindings.
//!
//! A page drives the zoom by calling `tick` from its animation-frame
//! callback and either `render` (CPU path, returns `ImageData` bytes) or
//! `uniforms` (GPU path, values to upload before a full-screen draw).

use crate::{flatten_rgba, Animation, FrameRenderer};
use gloo_utils::format::JsValueSerdeExt;
use js_sys::{Float32Array, Uint8ClampedArray};
use spiralzoom_core::{find_zoom_config, ConfigError, ZoomConfig};
use wasm_bindgen::prelude::*;

fn to_js_error(e: ConfigError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen]
pub fn init_logging() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already initialised");
    }
}

/// Endless zoom session owned by the page.
#[wasm_bindgen]
pub struct SpiralZoom {
    animation: Animation,
    renderer: FrameRenderer,
}

impl SpiralZoom {
    fn with_config(config: ZoomConfig) -> Result<SpiralZoom, JsValue> {
        let renderer = FrameRenderer::new(&config);
        let animation = Animation::new(config).map_err(to_js_error)?;
        Ok(Self {
            animation,
            renderer,
        })
    }
}

#[wasm_bindgen]
impl SpiralZoom {
    /// Start a session from a built-in preset ("spiral" or "classic").
    #[wasm_bindgen(constructor)]
    pub fn new(preset_id: &str) -> Result<SpiralZoom, JsValue> {
        Self::with_config(find_zoom_config(preset_id).map_err(to_js_error)?)
    }

    /// Start a session from a config object.
    pub fn from_config(config: JsValue) -> Result<SpiralZoom, JsValue> {
        let config: ZoomConfig = config
            .into_serde()
            .map_err(|e| JsValue::from_str(&format!("Parse config: {}", e)))?;
        Self::with_config(config)
    }

    /// Start a session from a JSON config string.
    pub fn from_json(json: &str) -> Result<SpiralZoom, JsValue> {
        Self::with_config(ZoomConfig::from_json(json).map_err(to_js_error)?)
    }

    /// Advance by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.animation.tick(dt);
    }

    /// Render the current frame as RGBA bytes, row 0 at the top.
    pub fn render(&self, width: u32, height: u32) -> Uint8ClampedArray {
        let pixels = self
            .renderer
            .render(&self.animation.uniforms(), width, height);
        Uint8ClampedArray::from(flatten_rgba(&pixels).as_slice())
    }

    /// Frame uniforms as
    /// `[zoom, rotation, center_high.x, center_high.y, center_low.x, center_low.y, time]`.
    pub fn uniforms(&self) -> Float32Array {
        let u = self.animation.uniforms();
        let (high, low) = u.center.to_parts();
        Float32Array::from(
            [
                u.zoom, u.rotation, high[0], high[1], low[0], low[1], u.time,
            ]
            .as_slice(),
        )
    }

    /// Color of one pixel as `[r, g, b]` in [0, 1].
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate_pixel(
        &self,
        screen_x: f32,
        screen_y: f32,
        resolution_width: f32,
        resolution_height: f32,
        zoom: f32,
        rotation: f32,
        center_high: Vec<f32>,
        center_low: Vec<f32>,
        time: f32,
    ) -> Result<Vec<f32>, JsValue> {
        let pair = |v: &[f32], name: &str| -> Result<[f32; 2], JsValue> {
            match v {
                [x, y] => Ok([*x, *y]),
                _ => Err(JsValue::from_str(&format!("{} must have 2 elements", name))),
            }
        };
        let rgb = self.renderer.shader().evaluate_pixel(
            screen_x,
            screen_y,
            resolution_width,
            resolution_height,
            zoom,
            rotation,
            pair(&center_high, "center_high")?,
            pair(&center_low, "center_low")?,
            time,
        );
        Ok(rgb.to_vec())
    }

    pub fn zoom_log(&self) -> f64 {
        self.animation.camera().zoom_log
    }

    pub fn rotation(&self) -> f64 {
        self.animation.camera().rotation
    }

    pub fn loops_completed(&self) -> f64 {
        self.animation.loops_completed() as f64
    }

    /// Active config as JSON.
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.animation.config().to_json().map_err(to_js_error)
    }
}
