//! Gauge geometry engine
//!
//! Converts a confidence percentage into the half-circle meter geometry
//! rendered by the SVG gauge: sweep angle, colored-arc endpoint and needle
//! endpoint. The gauge lives in a `0 0 200 140` viewBox with its pivot at
//! `(100, 100)`; the baseline arc spans 180 degrees from `(20, 100)` on the
//! left to `(180, 100)` on the right.
//!
//! # Angle convention
//!
//! The needle sweeps degrees-from-left with a flipped mapping:
//! `0%` points the needle toward the right baseline endpoint direction
//! (`radians = π`, needle end at `(30, 100)`) and `100%` toward the left
//! (`radians = 0`, needle end at `(170, 100)`). The sign of the mapping is
//! load-bearing: inverting it flips the gauge direction.
//!
//! # Example
//!
//! ```
//! use sentiviz::compute_gauge;
//!
//! let geometry = compute_gauge(50.0);
//! assert_eq!(geometry.angle_degrees, 90.0);
//! assert!((geometry.needle_end.x - 100.0).abs() < 1e-3);
//! assert!((geometry.needle_end.y - 30.0).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

/// Radius of the colored meter arc
pub const ARC_RADIUS: f32 = 80.0;

/// Length of the needle from the pivot
pub const NEEDLE_LENGTH: f32 = 70.0;

/// Gauge pivot x coordinate
pub const CENTER_X: f32 = 100.0;

/// Gauge pivot y coordinate
pub const CENTER_Y: f32 = 100.0;

/// SVG path of the full background meter arc
pub const BASELINE_ARC_PATH: &str = "M 20 100 A 80 80 0 0 1 180 100";

/// A point in gauge viewBox coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// x coordinate
    pub x: f32,
    /// y coordinate
    pub y: f32,
}

/// Derived gauge geometry
///
/// Deterministic function of the confidence percentage; no stored state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeGeometry {
    /// Sweep angle in degrees (`confidence / 100 * 180`)
    pub angle_degrees: f32,

    /// Endpoint of the colored meter arc
    pub arc_end: Point,

    /// Endpoint of the needle
    pub needle_end: Point,
}

impl GaugeGeometry {
    /// SVG path for the colored fill arc, from the left baseline endpoint
    /// to [`GaugeGeometry::arc_end`]
    pub fn fill_arc_path(&self) -> String {
        format!(
            "M 20 100 A 80 80 0 0 1 {} {}",
            self.arc_end.x, self.arc_end.y
        )
    }
}

/// Compute gauge geometry for a confidence percentage
///
/// # Arguments
///
/// * `confidence_pct` - Confidence percentage, nominally in `[0, 100]`
///
/// # Returns
///
/// `GaugeGeometry` with the sweep angle and arc/needle endpoints.
///
/// # Out-of-range input
///
/// Values outside `[0, 100]` extrapolate linearly past the visual
/// half-circle instead of being clamped. The geometry stays finite and the
/// renderer shows a degenerate (wrapped) meter, which is the accepted
/// behavior for out-of-contract confidences.
pub fn compute_gauge(confidence_pct: f32) -> GaugeGeometry {
    let angle_degrees = (confidence_pct / 100.0) * 180.0;
    let radians = std::f32::consts::PI * (180.0 - angle_degrees) / 180.0;

    let (sin, cos) = radians.sin_cos();

    let arc_end = Point {
        x: CENTER_X + ARC_RADIUS * cos,
        y: CENTER_Y - ARC_RADIUS * sin,
    };
    let needle_end = Point {
        x: CENTER_X + NEEDLE_LENGTH * cos,
        y: CENTER_Y - NEEDLE_LENGTH * sin,
    };

    GaugeGeometry {
        angle_degrees,
        arc_end,
        needle_end,
    }
}
