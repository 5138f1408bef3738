//! The normalization pipeline: strategy selection, bounds resolution, and
//! element-wise application over a whole value series.

use log::debug;
use ndarray::Array1;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bounds::RangeBounds;
use crate::error::Result;
use crate::stats::RangeStats;
use crate::{linear, logscale, sigmoid};

/// Series at or above this length are mapped in parallel. Bounds resolution
/// always completes before any element is mapped, so the map stage is an
/// embarrassingly parallel, order-preserving pass.
const PAR_THRESHOLD: usize = 4096;

/// The normalization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormKind {
    /// Piecewise-linear interpolation onto `[0, 1]`.
    Linear,
    /// Logarithmic contrast compression, symmetric around the center.
    Log {
        /// Logarithm base; must be greater than `1.0`.
        base: f64,
    },
    /// Logistic-curve contrast adjustment with signed, tunable intensity.
    Sigmoid {
        /// Signed strength: positive boosts contrast, negative reduces it.
        intensity: f64,
    },
}

impl Default for NormKind {
    fn default() -> Self {
        NormKind::Linear
    }
}

/// Configuration for one normalization call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizationConfig {
    /// Which strategy to apply.
    #[serde(default)]
    pub kind: NormKind,
    /// Saturate inputs to `[vmin, vmax]` and outputs to `[0, 1]`.
    #[serde(default)]
    pub clip: bool,
    /// Explicit bounds; derived from the series when absent (centerless —
    /// a center is never auto-derived).
    #[serde(default)]
    pub bounds: Option<RangeBounds>,
}

impl NormalizationConfig {
    /// Linear strategy with data-derived bounds.
    pub fn linear() -> Self {
        Self {
            kind: NormKind::Linear,
            ..Self::default()
        }
    }

    /// Log strategy with the given base and data-derived bounds.
    pub fn log(base: f64) -> Self {
        Self {
            kind: NormKind::Log { base },
            ..Self::default()
        }
    }

    /// Sigmoid strategy with the given intensity and data-derived bounds.
    pub fn sigmoid(intensity: f64) -> Self {
        Self {
            kind: NormKind::Sigmoid { intensity },
            ..Self::default()
        }
    }

    /// Supply explicit bounds, e.g. a global maximum held across iterations.
    pub fn with_bounds(mut self, bounds: RangeBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Enable or disable clipping.
    pub fn with_clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    fn validate_kind(&self) -> Result<()> {
        match self.kind {
            NormKind::Linear => Ok(()),
            NormKind::Log { base } => logscale::validate_base(base),
            NormKind::Sigmoid { intensity } => sigmoid::validate_intensity(intensity),
        }
    }

    /// Map a single value through already-resolved, validated bounds.
    ///
    /// Non-finite inputs come back as NaN, the per-element invalid marker.
    pub fn map_value(&self, value: f64, bounds: &RangeBounds) -> f64 {
        if !value.is_finite() {
            return f64::NAN;
        }
        let value = if self.clip {
            value.clamp(bounds.vmin, bounds.vmax)
        } else {
            value
        };
        let mapped = match self.kind {
            NormKind::Linear => {
                if self.clip {
                    linear::map_saturating(value, bounds)
                } else {
                    linear::map_extrapolating(value, bounds)
                }
            }
            NormKind::Log { base } => logscale::map(value, bounds, base),
            NormKind::Sigmoid { intensity } => sigmoid::map(value, bounds, intensity),
        };
        if self.clip {
            mapped.clamp(0.0, 1.0)
        } else {
            mapped
        }
    }
}

/// Result of normalizing a value series.
///
/// Invalid entries (non-finite inputs, or the rare non-finite result of an
/// unclipped extrapolation) hold NaN in `values` and `true` in `mask`, one
/// slot per input element.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Mapped values; NaN where masked.
    pub values: Array1<f64>,
    /// True for entries that could not be mapped.
    pub mask: Array1<bool>,
}

impl Normalized {
    /// Number of entries, masked ones included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the series was empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The mapped value at `index`, or `None` if masked or out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        if index < self.len() && !self.mask[index] {
            Some(self.values[index])
        } else {
            None
        }
    }

    /// Iterate over entries, yielding `None` for masked slots.
    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values
            .iter()
            .zip(self.mask.iter())
            .map(|(&v, &masked)| if masked { None } else { Some(v) })
    }
}

/// Normalize a value series into the unit interval.
///
/// Bounds are taken from the config when supplied, otherwise derived from
/// the finite entries of `values`; both paths are validated before any
/// element is mapped. The output preserves length and positional
/// correspondence with the input.
///
/// # Errors
///
/// Returns a config error for invalid bounds, log base, or intensity, and
/// `NormError::EmptyInput` when bounds must be derived from a series with
/// no finite entries.
pub fn normalize(values: &Array1<f64>, config: &NormalizationConfig) -> Result<Normalized> {
    config.validate_kind()?;
    let bounds = match config.bounds {
        Some(bounds) => bounds.validated()?,
        None => RangeBounds::from_stats(&RangeStats::from_values(values)?),
    };
    debug!(
        "normalizing {} values, {:?} over [{}, {}], vcenter {:?}, clip {}",
        values.len(),
        config.kind,
        bounds.vmin,
        bounds.vmax,
        bounds.vcenter,
        config.clip
    );

    let mut mapped = values.to_vec();
    if mapped.len() >= PAR_THRESHOLD {
        mapped
            .par_iter_mut()
            .for_each(|v| *v = config.map_value(*v, &bounds));
    } else {
        for v in mapped.iter_mut() {
            *v = config.map_value(*v, &bounds);
        }
    }

    let values = Array1::from(mapped);
    let mask = values.mapv(|v| !v.is_finite());
    let values = values.mapv(|v| if v.is_finite() { v } else { f64::NAN });

    Ok(Normalized { values, mask })
}
