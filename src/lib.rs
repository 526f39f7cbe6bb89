//! # Sentiviz
//!
//! Sentiment prediction client and visualization state engine: submits user
//! text to a remote prediction endpoint and derives all display state from
//! the returned prediction (normalized confidence, category color, donut
//! distribution, gauge geometry).
//!
//! ## Features
//!
//! - **Result Normalization**: Raw endpoint payloads into display records with
//!   defaults for every missing field
//! - **Distribution Derivation**: Three-way donut chart allocation with a fixed
//!   filler weight for inactive categories
//! - **Gauge Geometry**: Half-circle meter angle, arc endpoint and needle
//!   endpoint for the SVG gauge
//! - **Request Orchestration**: `Idle → Loading → Success/Failed` lifecycle
//!   around the prediction call
//!
//! ## Quick Start
//!
//! ```no_run
//! use sentiviz::{analyze_text, AnalyzerConfig, SentimentSnapshot};
//!
//! # async fn run() -> Result<(), sentiviz::AnalyzerError> {
//! let result = analyze_text(
//!     "This product is absolutely amazing and works perfectly!",
//!     AnalyzerConfig::default(),
//! )
//! .await?;
//!
//! println!("{} ({}% confidence)", result.sentiment.as_str(), result.confidence_pct);
//!
//! // Everything the charts need, in one call
//! let snapshot = SentimentSnapshot::derive(result);
//! println!("needle at ({}, {})", snapshot.gauge.needle_end.x, snapshot.gauge.needle_end.y);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! User Text → Orchestrator → Raw Payload → Normalizer → Normalized Result
//!                                                          ├─→ Distribution (donut)
//!                                                          └─→ Gauge Geometry (meter)
//! ```
//!
//! The chart/SVG components consuming the derived data are external
//! collaborators; this crate only exposes plain data.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod viz;

// Re-export main types
pub use analysis::normalize::{normalize, PredictionRaw, DEFAULT_CONFIDENCE_PCT};
pub use analysis::result::{Category, NormalizedResult};
pub use api::{
    PredictionBackend, PredictionClient, RequestState, SentimentAnalyzer, BACKEND_ERROR_MESSAGE,
};
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use viz::{
    compute_gauge, distribute, DistributionEntry, GaugeGeometry, Point, SentimentSnapshot,
};

/// Analyze a single text
///
/// One-shot convenience around the client and normalizer: issues a prediction
/// request and returns the normalized result. For lifecycle-aware consumers
/// (loading indicators, error banners) use [`SentimentAnalyzer`] instead.
///
/// # Arguments
///
/// * `text` - Text to analyze
/// * `config` - Analyzer configuration (endpoint, timeout)
///
/// # Returns
///
/// `NormalizedResult` with the predicted category and integer confidence
/// percentage.
///
/// # Errors
///
/// Returns `AnalyzerError` if the text is empty or the request fails
/// (transport failure, non-2xx status, unparseable body).
///
/// # Example
///
/// ```no_run
/// use sentiviz::{analyze_text, AnalyzerConfig};
///
/// # async fn run() -> Result<(), sentiviz::AnalyzerError> {
/// let result = analyze_text("works perfectly", AnalyzerConfig::default()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn analyze_text(
    text: &str,
    config: AnalyzerConfig,
) -> Result<NormalizedResult, AnalyzerError> {
    if text.trim().is_empty() {
        return Err(AnalyzerError::EmptyInput);
    }

    log::debug!("Analyzing text ({} chars)", text.len());

    let client = PredictionClient::with_config(config)?;
    let raw = client.predict(text).await?;

    Ok(normalize(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_analyze_text_rejects_empty_input() {
        let err = analyze_text("   ", AnalyzerConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::EmptyInput));
    }
}
