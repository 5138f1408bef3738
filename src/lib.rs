#![doc = include_str!("../README.md")]

/// Range bounds and their validation.
pub mod bounds;
/// Error types for normalization operations.
pub mod error;
/// Piecewise-linear normalization.
pub mod linear;
/// Logarithmic contrast compression.
pub mod logscale;
/// The normalization pipeline.
pub mod normalize;
/// Sigmoid contrast adjustment.
pub mod sigmoid;
/// Summary statistics over a value series.
pub mod stats;

// Re-export commonly used items
pub use bounds::RangeBounds;
pub use error::{NormError, Result};
pub use normalize::{normalize, NormKind, NormalizationConfig, Normalized};
pub use stats::RangeStats;
