pub mod camera;
pub mod compute_data;
pub mod config;
pub mod ds_complex;
pub mod ds_float;
pub mod error;
pub mod palette;
pub mod transforms;

pub use camera::{advance_camera, wrap_angle, CameraParams, CameraState};
pub use compute_data::IterationResult;
pub use config::{
    find_zoom_config, get_zoom_config, ColorParams, IterationParams, ZoomConfig, MAX_ZOOM_LOG,
};
pub use ds_complex::DsComplex;
pub use ds_float::DsFloat;
pub use error::ConfigError;
pub use palette::{CosinePalette, Rgb};
pub use transforms::{
    calculate_max_iterations, pixel_to_uv, rotate, uv_to_offset, HARD_ITERATION_CEILING,
};
