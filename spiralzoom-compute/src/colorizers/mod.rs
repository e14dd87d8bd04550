//! Mapping of iteration results to colors.

pub mod colorizer;
pub mod shading;
pub mod smooth_iteration;

pub use colorizer::{to_rgba8, ColorPipeline, Colorizer};
pub use shading::{glow, InteriorShading};
pub use smooth_iteration::SmoothIterationColorizer;
pub use spiralzoom_core::{CosinePalette, Rgb};
