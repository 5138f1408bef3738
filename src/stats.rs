//! Summary statistics over a value series.

use ndarray::Array1;

use crate::error::{NormError, Result};

/// Read-only summary of a value series, computed once per normalization
/// call and passed by reference afterwards.
///
/// Non-finite entries are skipped; they are flagged per element later in
/// the pipeline and must not poison the derived bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeStats {
    /// Smallest finite value.
    pub min: f64,
    /// Largest finite value.
    pub max: f64,
    /// Arithmetic mean of the finite values.
    pub mean: f64,
    /// Population standard deviation of the finite values.
    pub std: f64,
}

impl RangeStats {
    /// Compute statistics over the finite entries of `values`.
    ///
    /// # Errors
    ///
    /// Returns `NormError::EmptyInput` if the series is empty or contains
    /// no finite value at all.
    pub fn from_values(values: &Array1<f64>) -> Result<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;

        for &v in values.iter() {
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
            sum += v;
            count += 1;
        }

        if count == 0 {
            return Err(NormError::EmptyInput);
        }

        let mean = sum / count as f64;
        let mut sq_sum = 0.0;
        for &v in values.iter() {
            if v.is_finite() {
                sq_sum += (v - mean) * (v - mean);
            }
        }
        let std = (sq_sum / count as f64).sqrt();

        Ok(Self {
            min,
            max,
            mean,
            std,
        })
    }
}
