use spiralzoom_core::{
    calculate_max_iterations, DsComplex, IterationParams, IterationResult, ZoomConfig,
    HARD_ITERATION_CEILING,
};

/// Escape-time iteration of z ← z² + c in double-single arithmetic.
///
/// The orbit starts at z = c. Each step updates z and then tests |z|²
/// against the escape bound; the |z|² that triggered the escape is the one
/// fed to the smoothing formula, so the smooth count is continuous across
/// integer iteration boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EscapeTimeIterator {
    escape_radius_sq: f32,
    iterations: IterationParams,
}

impl EscapeTimeIterator {
    pub fn new(escape_radius_sq: f32, iterations: IterationParams) -> Self {
        debug_assert!(escape_radius_sq > 1.0, "escape bound must exceed 1");
        Self {
            escape_radius_sq,
            iterations,
        }
    }

    pub fn from_config(config: &ZoomConfig) -> Self {
        Self::new(config.escape_radius_sq, config.iterations)
    }

    pub fn escape_radius_sq(&self) -> f32 {
        self.escape_radius_sq
    }

    /// Iteration budget for the given zoom factor.
    pub fn max_iterations(&self, zoom: f32) -> u32 {
        calculate_max_iterations(
            zoom,
            self.iterations.base,
            self.iterations.scale,
            self.iterations.ceiling,
        )
    }

    /// Iterate `c` for at most `max_iterations` steps (never more than
    /// `HARD_ITERATION_CEILING`).
    pub fn iterate(&self, c: DsComplex, max_iterations: u32) -> IterationResult {
        let max_iterations = max_iterations.min(HARD_ITERATION_CEILING);
        let mut z = c;
        let mut z_norm_sq = z.norm_sq();

        for i in 0..max_iterations {
            // z = z^2 + c
            z = z.square().add(&c);
            z_norm_sq = z.norm_sq();

            if z_norm_sq > self.escape_radius_sq {
                return IterationResult::escaped(
                    i,
                    max_iterations,
                    smooth_iteration_count(i, z_norm_sq),
                    z_norm_sq,
                );
            }
        }

        IterationResult::interior(max_iterations, z_norm_sq)
    }
}

/// Continuous escape count: μ = i + 1 − log₂(log₂(|z|²) / 2).
///
/// May be negative for orbits that overshoot the bound on their first
/// steps; `IterationResult::escaped` clamps it at zero.
#[inline]
pub fn smooth_iteration_count(iteration: u32, z_norm_sq: f32) -> f32 {
    let log_zn = libm::log2f(z_norm_sq) / 2.0;
    iteration as f32 + 1.0 - libm::log2f(log_zn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iterator() -> EscapeTimeIterator {
        EscapeTimeIterator::new(
            256.0,
            IterationParams {
                base: 100.0,
                scale: 30.0,
                ceiling: 800,
            },
        )
    }

    #[test]
    fn origin_is_in_set() {
        let result = iterator().iterate(DsComplex::ZERO, 500);
        assert!(!result.escaped, "Origin should be in set");
        assert_eq!(result.raw_iterations, 500);
        assert_eq!(result.max_iterations, 500);
        assert_eq!(result.final_z_norm_sq, 0.0);
    }

    #[test]
    fn main_cardioid_point_in_set() {
        let result = iterator().iterate(DsComplex::from_f32_pair(-0.5, 0.0), 800);
        assert!(!result.escaped, "Point (-0.5, 0) should be in set");
    }

    #[test]
    fn point_outside_escapes_quickly() {
        // z = 2 → 6 → 38: |z|² = 1444 > 256 on the second update
        let result = iterator().iterate(DsComplex::from_f32_pair(2.0, 0.0), 100);
        assert!(result.escaped);
        assert_eq!(result.raw_iterations, 1);
    }

    #[test]
    fn point_near_boundary_takes_many_iterations() {
        let result = iterator().iterate(DsComplex::from_f32_pair(-0.75, 0.1), 1000);
        assert!(result.escaped);
        assert!(
            result.raw_iterations > 10,
            "Boundary point should take many iterations, took {}",
            result.raw_iterations
        );
    }

    #[test]
    fn budget_is_hard_capped() {
        let result = iterator().iterate(DsComplex::ZERO, u32::MAX);
        assert_eq!(result.max_iterations, HARD_ITERATION_CEILING);
    }

    #[test]
    fn smooth_count_decreases_with_larger_escape_magnitude() {
        let low = smooth_iteration_count(10, 300.0);
        let high = smooth_iteration_count(10, 1.0e8);
        assert!(low > high, "{} should exceed {}", low, high);
    }

    #[test]
    fn smooth_count_matches_natural_log_form() {
        let r2 = 5000.0f32;
        let via_log2 = smooth_iteration_count(7, r2);
        let via_ln = 8.0 - ((r2.ln() / 2.0) / std::f32::consts::LN_2).log2();
        assert!((via_log2 - via_ln).abs() < 1e-4);
    }
}
