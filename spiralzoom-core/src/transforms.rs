//! Screen-space to fractal-space mapping and the adaptive iteration budget.
//!
//! All per-pixel math is f32 and goes through `libm` so native and wasm32
//! builds produce bit-identical frames.

/// Safety bound on any iteration loop, independent of configuration.
pub const HARD_ITERATION_CEILING: u32 = 4096;

/// Normalize a screen coordinate to aspect-corrected `uv`.
///
/// The viewport center maps to (0, 0) and one vertical screen span covers
/// 2 units: `uv = (2·screen − resolution) / resolution.height`.
#[inline]
pub fn pixel_to_uv(screen_x: f32, screen_y: f32, width: f32, height: f32) -> (f32, f32) {
    debug_assert!(height > 0.0, "resolution height must be positive");
    (
        (2.0 * screen_x - width) / height,
        (2.0 * screen_y - height) / height,
    )
}

/// Standard 2D rotation by `angle` radians.
#[inline]
pub fn rotate(uv: (f32, f32), angle: f32) -> (f32, f32) {
    let (sin, cos) = libm::sincosf(angle);
    (uv.0 * cos - uv.1 * sin, uv.0 * sin + uv.1 * cos)
}

/// Map `uv` to an offset from the zoom center: rotate, then divide by zoom.
#[inline]
pub fn uv_to_offset(uv: (f32, f32), zoom: f32, rotation: f32) -> (f32, f32) {
    debug_assert!(zoom > 0.0, "zoom must be positive, got {}", zoom);
    let (x, y) = rotate(uv, rotation);
    (x / zoom, y / zoom)
}

/// Calculate the zoom-adaptive iteration budget.
///
/// Uses formula: base + scale · ln(zoom + 1), clamped to
/// [1, min(ceiling, HARD_ITERATION_CEILING)].
pub fn calculate_max_iterations(zoom: f32, base: f32, scale: f32, ceiling: u32) -> u32 {
    let limit = ceiling.clamp(1, HARD_ITERATION_CEILING);
    let zoom = if zoom.is_finite() && zoom > 0.0 {
        zoom
    } else {
        1.0
    };
    let iterations = base + scale * libm::logf(zoom + 1.0);
    if !iterations.is_finite() || iterations < 1.0 {
        return 1;
    }
    (iterations as u32).min(limit)
}
