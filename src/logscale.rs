//! Logarithmic contrast compression.
//!
//! Re-expresses the linear mapping through a log curve of configurable base,
//! concentrating color resolution near the center while keeping the boundary
//! contract intact: `vmin -> 0`, `vcenter -> 0.5` (if set), `vmax -> 1`.

use crate::bounds::RangeBounds;
use crate::error::{NormError, Result};
use crate::linear;

/// Check that `base` is usable for log compression.
///
/// # Errors
///
/// Returns `NormError::InvalidLogBase` unless `base > 1.0` (which also
/// rejects a NaN base).
pub fn validate_base(base: f64) -> Result<()> {
    if !(base > 1.0) {
        return Err(NormError::InvalidLogBase { base });
    }
    Ok(())
}

/// Map `value` into `[0, 1]` through a log curve of the given base.
///
/// Without a center, the value is linearly interpolated from
/// `[vmin, vmax]` to `[1, base]` and `log_base` brings it back to `[0, 1]`;
/// the two stages amount to a single log-scaled axis.
///
/// With a center, the value is first interpolated to `[-1, 0, +1]`. Each
/// side is then compressed through `log_base(1 + (base-1)*|v|)` with its
/// sign restored, so positive and negative excursions from the center are
/// treated symmetrically, and the result is shifted back to `[0, 1]`.
///
/// Expects validated bounds and a validated base.
pub fn map(value: f64, bounds: &RangeBounds, base: f64) -> f64 {
    if bounds.is_degenerate() {
        return 0.5;
    }
    let log_base = base.ln();
    match bounds.vcenter {
        None => {
            let scaled = 1.0 + (base - 1.0) * linear::map_saturating(value, bounds);
            scaled.ln() / log_base
        }
        Some(_) => {
            // [0, 1] -> [-1, +1], zero at the center
            let v = 2.0 * linear::map_saturating(value, bounds) - 1.0;
            let compressed = if v > 0.0 {
                ((base - 1.0) * v + 1.0).ln() / log_base
            } else if v < 0.0 {
                // mirror, compress, mirror back
                -((-(base - 1.0) * v + 1.0).ln() / log_base)
            } else {
                0.0
            };
            compressed / 2.0 + 0.5
        }
    }
}
