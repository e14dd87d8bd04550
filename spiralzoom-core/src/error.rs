//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid coordinate {value:?}: {reason}")]
    InvalidCoordinate { value: String, reason: String },

    #[error("Parameter {name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("Parameter {name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("Parameter {name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Parameter {name} must lie in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },

    #[error("Escape radius squared must exceed 4, got {0}")]
    EscapeRadiusTooSmall(f32),

    #[error("Iteration ceiling {0} exceeds hard limit {1}")]
    IterationCeilingTooHigh(u32, u32),

    #[error("Zoom log ceiling {0} exceeds double-single precision budget {1}")]
    ZoomBeyondPrecision(f64, f64),

    #[error("Unknown zoom preset: {0}")]
    UnknownPreset(String),
}
