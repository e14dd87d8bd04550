pub mod animation;
pub mod colorizers;
pub mod escape_time;
pub mod frame;
pub mod pixel;
pub mod wasm;

pub use animation::{Animation, DEFAULT_TICK};
pub use colorizers::{to_rgba8, ColorPipeline, Colorizer};
pub use escape_time::{smooth_iteration_count, EscapeTimeIterator};
pub use frame::{flatten_rgba, FrameRenderer};
pub use pixel::{FrameUniforms, PixelQuery, PixelShader};

// Re-export core types for convenience
pub use spiralzoom_core::*;
