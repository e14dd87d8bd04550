//! Logarithmic zoom/rotation camera with a seamless reset.
//!
//! The camera never stores the zoom factor itself. `zoom_log` grows linearly
//! with time and `zoom = e^zoom_log` is recomputed from it on demand, so the
//! exponential growth carries no multiplicative drift.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Camera state threaded through `advance_camera` once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Natural log of the zoom factor
    pub zoom_log: f64,
    /// Accumulated rotation in radians, reduced modulo 2π only at reset
    pub rotation: f64,
}

/// Camera speed and reset parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraParams {
    /// e-folds of zoom per second
    pub zoom_speed: f64,
    /// Radians of rotation per e-fold of zoom
    pub rotation_per_zoom: f64,
    /// `zoom_log` value past which the camera resets to zero
    pub zoom_log_ceiling: f64,
}

impl CameraState {
    /// Starting state: unit zoom, no rotation.
    pub const INITIAL: Self = Self {
        zoom_log: 0.0,
        rotation: 0.0,
    };

    /// Zoom factor, always positive.
    #[inline]
    pub fn zoom(&self) -> f64 {
        libm::exp(self.zoom_log)
    }

    /// Rotation reduced into [0, 2π), for upload to a pixel pipeline.
    #[inline]
    pub fn wrapped_rotation(&self) -> f64 {
        wrap_angle(self.rotation)
    }
}

/// Reduce an angle into [0, 2π). `rem_euclid` rounds tiny negative
/// angles up to exactly 2π, which is folded back to zero.
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Advance the camera by `dt` seconds.
///
/// `zoom_log` and `rotation` accumulate linearly. Once `zoom_log` exceeds
/// the ceiling it restarts at zero and the rotation is reduced into
/// [0, 2π); the target point is self-similar, so the content matches.
pub fn advance_camera(state: CameraState, dt: f64, params: &CameraParams) -> CameraState {
    debug_assert!(dt.is_finite() && dt >= 0.0, "dt must be finite and >= 0");

    let step = params.zoom_speed * dt;
    let zoom_log = state.zoom_log + step;
    let rotation = state.rotation + params.rotation_per_zoom * step;

    if zoom_log > params.zoom_log_ceiling {
        CameraState {
            zoom_log: 0.0,
            rotation: wrap_angle(rotation),
        }
    } else {
        CameraState { zoom_log, rotation }
    }
}
