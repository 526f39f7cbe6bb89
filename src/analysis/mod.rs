//! Prediction normalization and result types
//!
//! Turns raw endpoint payloads into display-ready records:
//! - Result types
//! - Normalization

pub mod normalize;
pub mod result;

pub use normalize::{normalize, PredictionRaw, DEFAULT_CONFIDENCE_PCT};
pub use result::{Category, NormalizedResult};
