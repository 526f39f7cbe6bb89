//! Chart data derivation
//!
//! Pure derivations from a normalized result to the plain data consumed by
//! the external chart components:
//! - Donut distribution
//! - Gauge geometry
//! - Mini line chart series

pub mod distribution;
pub mod gauge;
pub mod sparkline;

pub use distribution::{distribute, DistributionEntry, FILLER_WEIGHT};
pub use gauge::{compute_gauge, GaugeGeometry, Point};
pub use sparkline::{Sparkline, DEMO_SERIES_A, DEMO_SERIES_B};

use serde::{Deserialize, Serialize};

use crate::analysis::result::NormalizedResult;

/// All derived display state for one normalized result
///
/// Bundles the donut distribution and gauge geometry so renderers can pull
/// everything for a frame in one call. Each field is independently derivable
/// through [`distribute`] and [`compute_gauge`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    /// The normalized result the snapshot was derived from
    pub result: NormalizedResult,

    /// Donut chart distribution
    pub distribution: [DistributionEntry; 3],

    /// Gauge geometry
    pub gauge: GaugeGeometry,
}

impl SentimentSnapshot {
    /// Derive the full display snapshot for a normalized result
    pub fn derive(result: NormalizedResult) -> Self {
        Self {
            distribution: distribute(&result),
            gauge: compute_gauge(result.confidence_pct as f32),
            result,
        }
    }
}
