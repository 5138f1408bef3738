//! Error types for the colornorm crate.
//!
//! This module provides a unified error type for all normalization
//! operations. Configuration errors are raised before any element is
//! mapped; non-finite input values are not errors at all and are instead
//! flagged per element in the output mask.

use thiserror::Error;

/// Error type for normalization operations.
#[derive(Debug, Error)]
pub enum NormError {
    /// The supplied bounds are out of order.
    #[error("invalid bounds: vmax ({vmax}) < vmin ({vmin})")]
    BoundsOutOfOrder {
        /// Lower bound of the range.
        vmin: f64,
        /// Upper bound of the range.
        vmax: f64,
    },

    /// The center value lies below the lower bound.
    #[error("invalid bounds: vcenter ({vcenter}) < vmin ({vmin})")]
    CenterBelowMin {
        /// The offending center value.
        vcenter: f64,
        /// Lower bound of the range.
        vmin: f64,
    },

    /// The center value lies above the upper bound.
    #[error("invalid bounds: vmax ({vmax}) < vcenter ({vcenter})")]
    CenterAboveMax {
        /// The offending center value.
        vcenter: f64,
        /// Upper bound of the range.
        vmax: f64,
    },

    /// The logarithm base is not usable for compression.
    #[error("invalid log base: {base} (must be > 1.0)")]
    InvalidLogBase {
        /// The offending base.
        base: f64,
    },

    /// The sigmoid intensity is NaN or infinite.
    #[error("sigmoid intensity must be finite, got {intensity}")]
    NonFiniteIntensity {
        /// The offending intensity.
        intensity: f64,
    },

    /// Bounds had to be derived from a series with no finite values.
    #[error("cannot derive range bounds from an empty value series")]
    EmptyInput,
}

/// Result type alias for normalization operations.
pub type Result<T> = std::result::Result<T, NormError>;

impl NormError {
    /// Returns true if this error stems from an invalid configuration
    /// (bounds ordering, log base, sigmoid intensity).
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            NormError::BoundsOutOfOrder { .. }
                | NormError::CenterBelowMin { .. }
                | NormError::CenterAboveMax { .. }
                | NormError::InvalidLogBase { .. }
                | NormError::NonFiniteIntensity { .. }
        )
    }

    /// Returns true if this error occurred while deriving values from the
    /// input data rather than from the configuration.
    pub fn is_computation_error(&self) -> bool {
        matches!(self, NormError::EmptyInput)
    }
}
