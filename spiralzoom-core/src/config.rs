//! Zoom presets, color parameters and JSON loading.
//!
//! A `ZoomConfig` bundles everything the pixel pipeline and camera need
//! besides the per-frame uniforms. Presets are plain constructors; hosts can
//! also supply their own config as JSON, which is validated before use.

use crate::camera::CameraParams;
use crate::error::ConfigError;
use crate::palette::{CosinePalette, Rgb};
use crate::transforms::HARD_ITERATION_CEILING;
use crate::{DsComplex, DsFloat};
use serde::{Deserialize, Serialize};

/// Deepest supported `zoom_log`: ln(1e10). Past this the pixel spacing
/// approaches the ~48-bit double-single resolution near |c| ≈ 1.
pub const MAX_ZOOM_LOG: f64 = 23.025_850_929_940_457;

/// Zoom-adaptive iteration budget: base + scale · ln(zoom + 1), capped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IterationParams {
    pub base: f32,
    pub scale: f32,
    pub ceiling: u32,
}

/// Color mapping parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorParams {
    pub palette: CosinePalette,
    /// Palette cycles per smooth iteration (k1)
    pub cycle_scale: f32,
    /// Palette cycles per second of elapsed time (k2)
    pub time_drift: f32,
    /// Glow numerator; zero disables glow
    pub glow_strength: f32,
    /// Glow denominator slope (k3)
    pub glow_scale: f32,
    /// Glow denominator offset (k4), must be positive
    pub glow_offset: f32,
    /// Base color for points that never escape
    pub interior_color: Rgb,
    /// How strongly interior color varies with orbit state, in [0, 1]
    pub interior_texture: f32,
}

/// Configuration for one zoom animation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Unique identifier
    pub id: String,
    /// Human-readable name
    pub display_name: String,
    /// Zoom target as decimal strings (preserves precision)
    pub target: (String, String),
    /// Escape bound on |z|². Presets use 256; a point escapes at iteration 0
    /// only when |c² + c|² already exceeds it, so (2, 2) with |z₁|² = 104
    /// escapes at iteration 1 under the presets.
    pub escape_radius_sq: f32,
    pub iterations: IterationParams,
    pub camera: CameraParams,
    pub color: ColorParams,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self::spiral()
    }
}

impl ZoomConfig {
    /// Rotating zoom into the Misiurewicz point M(4,1), the center of a
    /// double spiral.
    pub fn spiral() -> Self {
        Self {
            id: "spiral".to_string(),
            display_name: "Spiral (M4,1)".to_string(),
            target: (
                "-0.10109636384562".to_string(),
                "0.95628651080914".to_string(),
            ),
            escape_radius_sq: 256.0,
            iterations: IterationParams {
                base: 100.0,
                scale: 30.0,
                ceiling: 800,
            },
            camera: CameraParams {
                zoom_speed: 0.2,
                rotation_per_zoom: 0.35,
                zoom_log_ceiling: 20.0,
            },
            color: ColorParams {
                palette: CosinePalette::ember(),
                cycle_scale: 0.025,
                time_drift: 0.03,
                glow_strength: 0.04,
                glow_scale: 0.1,
                glow_offset: 0.5,
                interior_color: [0.02, 0.02, 0.04],
                interior_texture: 0.5,
            },
        }
    }

    /// Non-rotating zoom with plain palette coloring and no glow.
    pub fn classic() -> Self {
        Self {
            id: "classic".to_string(),
            display_name: "Classic (M23,2)".to_string(),
            target: ("-0.77568377".to_string(), "0.13646737".to_string()),
            escape_radius_sq: 256.0,
            iterations: IterationParams {
                base: 80.0,
                scale: 25.0,
                ceiling: 750,
            },
            camera: CameraParams {
                zoom_speed: 0.25,
                rotation_per_zoom: 0.0,
                zoom_log_ceiling: 14.0,
            },
            color: ColorParams {
                palette: CosinePalette::rainbow(),
                cycle_scale: 0.02,
                time_drift: 0.0,
                glow_strength: 0.0,
                glow_scale: 0.0,
                glow_offset: 1.0,
                interior_color: [0.0, 0.0, 0.0],
                interior_texture: 0.0,
            },
        }
    }

    /// All built-in presets.
    pub fn presets() -> Vec<ZoomConfig> {
        vec![Self::spiral(), Self::classic()]
    }

    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ZoomConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse the target point into double-single form.
    pub fn target(&self) -> Result<DsComplex, ConfigError> {
        Ok(DsComplex::new(
            DsFloat::from_decimal_str(&self.target.0)?,
            DsFloat::from_decimal_str(&self.target.1)?,
        ))
    }

    /// Check every numeric parameter. Anything that passes keeps the pixel
    /// pipeline total: no zero divisors, bounded loops, bounded zoom.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.target()?;

        if !self.escape_radius_sq.is_finite() || self.escape_radius_sq <= 4.0 {
            return Err(ConfigError::EscapeRadiusTooSmall(self.escape_radius_sq));
        }

        let it = &self.iterations;
        require_positive("iterations.base", it.base as f64)?;
        require_non_negative("iterations.scale", it.scale as f64)?;
        if it.ceiling == 0 {
            return Err(ConfigError::NonPositive {
                name: "iterations.ceiling",
                value: 0.0,
            });
        }
        if it.ceiling > HARD_ITERATION_CEILING {
            return Err(ConfigError::IterationCeilingTooHigh(
                it.ceiling,
                HARD_ITERATION_CEILING,
            ));
        }

        let cam = &self.camera;
        require_positive("camera.zoom_speed", cam.zoom_speed)?;
        require_finite("camera.rotation_per_zoom", cam.rotation_per_zoom)?;
        require_positive("camera.zoom_log_ceiling", cam.zoom_log_ceiling)?;
        if cam.zoom_log_ceiling > MAX_ZOOM_LOG {
            return Err(ConfigError::ZoomBeyondPrecision(
                cam.zoom_log_ceiling,
                MAX_ZOOM_LOG,
            ));
        }

        let color = &self.color;
        for (i, v) in color
            .palette
            .a
            .iter()
            .chain(&color.palette.b)
            .chain(&color.palette.c)
            .chain(&color.palette.d)
            .enumerate()
        {
            if !v.is_finite() {
                return Err(ConfigError::NonFinite {
                    name: PALETTE_FIELDS[i / 3],
                    value: *v as f64,
                });
            }
        }
        require_finite("color.cycle_scale", color.cycle_scale as f64)?;
        require_finite("color.time_drift", color.time_drift as f64)?;
        require_non_negative("color.glow_strength", color.glow_strength as f64)?;
        require_non_negative("color.glow_scale", color.glow_scale as f64)?;
        require_positive("color.glow_offset", color.glow_offset as f64)?;
        for v in color.interior_color {
            require_unit("color.interior_color", v as f64)?;
        }
        require_unit("color.interior_texture", color.interior_texture as f64)?;

        Ok(())
    }
}

const PALETTE_FIELDS: [&str; 4] = [
    "color.palette.a",
    "color.palette.b",
    "color.palette.c",
    "color.palette.d",
];

/// Look up a built-in preset by ID.
pub fn get_zoom_config(id: &str) -> Option<ZoomConfig> {
    match id {
        "spiral" => Some(ZoomConfig::spiral()),
        "classic" => Some(ZoomConfig::classic()),
        _ => None,
    }
}

/// Like `get_zoom_config`, but reports unknown IDs as an error.
pub fn find_zoom_config(id: &str) -> Result<ZoomConfig, ConfigError> {
    get_zoom_config(id).ok_or_else(|| ConfigError::UnknownPreset(id.to_string()))
}

fn require_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn require_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

fn require_unit(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}
