//! Piecewise-linear normalization.
//!
//! Maps values through the control points `[vmin, vmax] -> [0, 1]`, or
//! `[vmin, vcenter, vmax] -> [0, 0.5, 1]` when a center is set. This is the
//! base mapping every other strategy builds on.

use crate::bounds::RangeBounds;

fn segment(value: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    y0 + (value - x0) * (y1 - y0) / (x1 - x0)
}

/// Piecewise-linear map, extrapolating along the nearest segment beyond
/// the outer control points.
///
/// A degenerate range maps every input to the neutral `0.5`. Bounds are
/// expected to be validated: a present `vcenter` lies strictly between
/// `vmin` and `vmax`.
pub fn map_extrapolating(value: f64, bounds: &RangeBounds) -> f64 {
    if bounds.is_degenerate() {
        return 0.5;
    }
    match bounds.vcenter {
        None => segment(value, bounds.vmin, bounds.vmax, 0.0, 1.0),
        Some(vcenter) => {
            if value <= vcenter {
                segment(value, bounds.vmin, vcenter, 0.0, 0.5)
            } else {
                segment(value, vcenter, bounds.vmax, 0.5, 1.0)
            }
        }
    }
}

/// Piecewise-linear map, saturating at `0.0`/`1.0` beyond the outer control
/// points.
///
/// The log and sigmoid strategies feed on this form: their formulas are only
/// defined over the interpolated range.
pub fn map_saturating(value: f64, bounds: &RangeBounds) -> f64 {
    map_extrapolating(value.clamp(bounds.vmin, bounds.vmax), bounds)
}
