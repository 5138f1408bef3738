//! Sigmoid contrast adjustment.
//!
//! Blends the linear mapping with a logistic curve. A signed `intensity`
//! selects the direction: positive pushes values toward the extremes
//! (contrast boost), negative pulls them toward the center (spread
//! reduction) through the inverse logistic. For `|intensity| < 1` the blend
//! weight grows with the intensity at unit steepness; from `1` upward the
//! sigmoid fully replaces the linear value and only its steepness grows.

use crate::bounds::RangeBounds;
use crate::error::{NormError, Result};
use crate::linear;

/// Steepness factor scaling `[0, 1]` onto roughly `[-6, +6]` of the
/// logistic's argument.
const SLOPE: f64 = 12.0;

/// Keeps `log_sigmoid` away from its singularities at 0 and 1.
const LOG_SIGMOID_EPS: f64 = 1e-12;

/// Logistic sigmoid centered on `x = 0.5`.
pub fn exp_sigmoid(x: f64, x_scale: f64) -> f64 {
    1.0 / (1.0 + (-SLOPE * x_scale * (x - 0.5)).exp())
}

/// Inverse of [`exp_sigmoid`] at the same scale; the input is clamped an
/// epsilon away from 0 and 1 before the log.
pub fn log_sigmoid(x: f64, x_scale: f64) -> f64 {
    let x = x.clamp(LOG_SIGMOID_EPS, 1.0 - LOG_SIGMOID_EPS);
    -(1.0 / x - 1.0).ln() / (SLOPE * x_scale) + 0.5
}

/// Check that `intensity` is finite.
///
/// # Errors
///
/// Returns `NormError::NonFiniteIntensity` for NaN or infinite values.
pub fn validate_intensity(intensity: f64) -> Result<()> {
    if !intensity.is_finite() {
        return Err(NormError::NonFiniteIntensity { intensity });
    }
    Ok(())
}

/// Map `value` into the unit interval with sigmoid contrast adjustment.
///
/// The value is first linearly interpolated through
/// `[vmin, vcenter, vmax] -> [0, 0.5, 1]`; an absent center defaults to the
/// range midpoint, which makes the first stage identical to the plain
/// two-point interpolation. The result is then blended with the sigmoid:
/// `x - weight * (x - sigmoid(x, scale))`, with `weight = min(|intensity|, 1)`
/// and `scale = max(|intensity|, 1)`.
///
/// Expects validated bounds and a finite intensity.
pub fn map(value: f64, bounds: &RangeBounds, intensity: f64) -> f64 {
    if bounds.is_degenerate() {
        return 0.5;
    }
    let x = linear::map_saturating(value, bounds);

    let strength = intensity.abs();
    let (weight, scale) = if strength < 1.0 {
        (strength, 1.0)
    } else {
        (1.0, strength)
    };
    let shaped = if intensity < 0.0 {
        log_sigmoid(x, scale)
    } else {
        exp_sigmoid(x, scale)
    };
    x - weight * (x - shaped)
}
