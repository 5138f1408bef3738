//! Range bounds for normalization.

use serde::{Deserialize, Serialize};

use crate::error::{NormError, Result};
use crate::stats::RangeStats;

/// The value range mapped onto the unit interval.
///
/// `vmin` maps to `0.0` and `vmax` to `1.0`. The optional `vcenter` is a
/// pivot (e.g. zero for signed deltas) that maps to `0.5`; with it set, the
/// two half-ranges are normalized independently through two linear segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    /// Lower bound of the range.
    pub vmin: f64,
    /// Upper bound of the range.
    pub vmax: f64,
    /// Optional pivot value mapped to `0.5`.
    #[serde(default)]
    pub vcenter: Option<f64>,
}

impl RangeBounds {
    /// Create bounds without a center.
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Self {
            vmin,
            vmax,
            vcenter: None,
        }
    }

    /// Set the center value mapped to `0.5`.
    pub fn with_center(mut self, vcenter: f64) -> Self {
        self.vcenter = Some(vcenter);
        self
    }

    /// Derive centerless bounds from precomputed series statistics.
    pub fn from_stats(stats: &RangeStats) -> Self {
        Self::new(stats.min, stats.max)
    }

    /// Check ordering invariants and resolve the center.
    ///
    /// A center equal to `vmin` or `vmax` collapses to `None`: the pivot sits
    /// on a boundary and cannot split the range, so centering is disabled
    /// instead of rejected.
    ///
    /// # Errors
    ///
    /// Returns a config error if `vmax < vmin`, `vcenter < vmin`, or
    /// `vmax < vcenter`.
    pub fn validated(mut self) -> Result<Self> {
        if self.vmax < self.vmin {
            return Err(NormError::BoundsOutOfOrder {
                vmin: self.vmin,
                vmax: self.vmax,
            });
        }
        if let Some(vcenter) = self.vcenter {
            if vcenter < self.vmin {
                return Err(NormError::CenterBelowMin {
                    vcenter,
                    vmin: self.vmin,
                });
            }
            if self.vmax < vcenter {
                return Err(NormError::CenterAboveMax {
                    vcenter,
                    vmax: self.vmax,
                });
            }
            if vcenter == self.vmin || vcenter == self.vmax {
                self.vcenter = None;
            }
        }
        Ok(self)
    }

    /// True if the range cannot discriminate values (`vmin == vmax`).
    pub fn is_degenerate(&self) -> bool {
        self.vmin == self.vmax
    }
}
