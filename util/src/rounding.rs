//! Shared rounding policy for the grading pipeline.
//!
//! Every mark that is rounded anywhere in the workspace goes through this
//! module, so the convention (round half up) is identical in the comparators
//! and in the aggregate score. Grading results are persisted and re-displayed
//! later, so the rounding must be stable across runs and platforms.

/// Round `x` half-up to `decimals` decimal places.
///
/// Uses the common multiply / round / divide trick. `f64::round` rounds
/// half away from zero, which coincides with half-up for the non-negative
/// mark values this pipeline produces.
pub fn round_to(x: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (x * factor).round() / factor
}

/// Round a score or percentage to two decimal places.
#[inline]
pub fn round2(x: f64) -> f64 {
    round_to(x, 2)
}

/// Round a partial-credit award to the nearest whole point.
#[inline]
pub fn round_points(x: f64) -> f64 {
    round_to(x, 0)
}
