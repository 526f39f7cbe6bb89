//! Distribution derivation for the donut chart
//!
//! Expands a normalized result into the three-way share allocation the
//! donut chart renders. This is deliberately not a probability
//! distribution: inactive categories get a fixed filler weight so their
//! segments stay visible instead of collapsing to zero, and the weights
//! need not sum to 100.

use serde::{Deserialize, Serialize};

use crate::analysis::result::{Category, NormalizedResult};

/// Weight assigned to the two inactive categories
pub const FILLER_WEIGHT: f32 = 10.0;

/// One donut chart segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    /// Segment category
    pub category: Category,
    /// Segment weight (chart-rendering allocation, not a probability)
    pub weight: f32,
}

/// Derive the donut chart distribution for a normalized result
///
/// Always returns exactly three entries in the fixed order
/// `[Positive, Neutral, Negative]`; the entry matching the result's
/// sentiment carries the confidence percentage as its weight, every other
/// entry carries [`FILLER_WEIGHT`].
///
/// # Example
///
/// ```
/// use sentiviz::{distribute, Category, NormalizedResult};
///
/// let result = NormalizedResult {
///     sentiment: Category::Negative,
///     confidence_pct: 82,
/// };
///
/// let entries = distribute(&result);
/// assert_eq!(entries[2].weight, 82.0);
/// assert_eq!(entries[0].weight, 10.0);
/// ```
pub fn distribute(result: &NormalizedResult) -> [DistributionEntry; 3] {
    Category::ALL.map(|category| DistributionEntry {
        category,
        weight: if category == result.sentiment {
            result.confidence_pct as f32
        } else {
            FILLER_WEIGHT
        },
    })
}
