use crate::pixel::FrameUniforms;
use log::{debug, info};
use spiralzoom_core::{advance_camera, CameraState, ConfigError, DsComplex, ZoomConfig};

/// Nominal frame tick in seconds.
pub const DEFAULT_TICK: f64 = 1.0 / 60.0;

/// Camera and clock for one endless zoom.
///
/// The host calls `tick` once per frame and then hands `uniforms()` to every
/// pixel of that frame; the snapshot is `Copy`, so the camera can advance
/// again as soon as the frame has been dispatched.
#[derive(Clone, Debug)]
pub struct Animation {
    config: ZoomConfig,
    center: DsComplex,
    camera: CameraState,
    elapsed: f64,
    loops_completed: u64,
}

impl Animation {
    /// Validate the config and start at unit zoom.
    pub fn new(config: ZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let center = config.target()?;
        info!(
            "zoom animation '{}' targeting ({}, {})",
            config.id, config.target.0, config.target.1
        );
        Ok(Self {
            config,
            center,
            camera: CameraState::INITIAL,
            elapsed: 0.0,
            loops_completed: 0,
        })
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of seamless resets so far.
    pub fn loops_completed(&self) -> u64 {
        self.loops_completed
    }

    /// Advance camera and clock by `dt` seconds. Negative or non-finite
    /// steps are ignored.
    pub fn tick(&mut self, dt: f64) {
        if !dt.is_finite() || dt < 0.0 {
            debug!("ignoring invalid tick dt={}", dt);
            return;
        }

        let previous = self.camera;
        self.camera = advance_camera(previous, dt, &self.config.camera);
        self.elapsed += dt;

        if self.camera.zoom_log < previous.zoom_log {
            self.loops_completed += 1;
            debug!(
                "camera reset #{} at zoom_log={:.3}, rotation now {:.4}",
                self.loops_completed, previous.zoom_log, self.camera.rotation
            );
        }
    }

    /// Snapshot of everything pixels need for the current frame.
    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            zoom: self.camera.zoom() as f32,
            rotation: self.camera.wrapped_rotation() as f32,
            center: self.center,
            time: self.elapsed as f32,
        }
    }
}
