//! Mini line chart series
//!
//! Fixed demo series rendered by the model performance cards, plus a thin
//! accessor wrapper for consumers that want bounds without re-scanning.

use serde::{Deserialize, Serialize};

/// Demo series shown on the primary performance card
pub const DEMO_SERIES_A: &[f32] = &[30.0, 45.0, 35.0, 50.0, 40.0, 55.0, 48.0, 60.0, 52.0, 70.0];

/// Demo series shown on the secondary performance card
pub const DEMO_SERIES_B: &[f32] = &[20.0, 35.0, 25.0, 45.0, 30.0, 50.0, 40.0, 65.0, 55.0, 80.0];

/// A mini line chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sparkline {
    values: Vec<f32>,
}

impl Sparkline {
    /// Create a sparkline from a slice of values
    pub fn new(values: &[f32]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// Series values in render order
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Smallest value, or `None` for an empty series
    pub fn min(&self) -> Option<f32> {
        self.values.iter().copied().reduce(f32::min)
    }

    /// Largest value, or `None` for an empty series
    pub fn max(&self) -> Option<f32> {
        self.values.iter().copied().reduce(f32::max)
    }

    /// Most recent value, or `None` for an empty series
    pub fn last(&self) -> Option<f32> {
        self.values.last().copied()
    }
}
