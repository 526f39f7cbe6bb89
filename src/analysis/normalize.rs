//! Result normalization
//!
//! Turns the raw, untrusted prediction payload into a [`NormalizedResult`]
//! suitable for display. Normalization is a total function: any payload
//! shape produces a value, substituting defaults for missing fields rather
//! than propagating an error.
//!
//! # Example
//!
//! ```
//! use sentiviz::{normalize, Category, PredictionRaw};
//!
//! let raw = PredictionRaw {
//!     sentiment: Some("Negative".to_string()),
//!     confidence: Some(0.82),
//! };
//!
//! let result = normalize(&raw);
//! assert_eq!(result.sentiment, Category::Negative);
//! assert_eq!(result.confidence_pct, 82);
//! ```

use serde::{Deserialize, Serialize};

use super::result::{Category, NormalizedResult};

/// Confidence percentage substituted when the payload carries none
pub const DEFAULT_CONFIDENCE_PCT: i32 = 90;

/// Raw prediction payload as returned by the endpoint
///
/// Both fields are optional so that deserialization accepts any JSON object
/// shape. `confidence`, when present, is nominally a fraction in `[0, 1]`;
/// no range is guaranteed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionRaw {
    /// Model-reported sentiment label
    #[serde(default)]
    pub sentiment: Option<String>,

    /// Model-reported confidence fraction
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Normalize a raw prediction payload
///
/// # Arguments
///
/// * `raw` - Untrusted payload from the prediction endpoint
///
/// # Returns
///
/// `NormalizedResult` with an integer confidence percentage and a closed
/// sentiment category.
///
/// # Behavior
///
/// - Present confidence: `round(confidence * 100)`. The result is not
///   clamped, so an upstream fraction above `1.0` yields a percentage above
///   `100` (consuming geometry handles this, see [`crate::viz::gauge`]).
/// - Absent confidence: defaults to [`DEFAULT_CONFIDENCE_PCT`].
/// - Unknown or missing sentiment label: falls back to `Neutral`.
pub fn normalize(raw: &PredictionRaw) -> NormalizedResult {
    let confidence_pct = match raw.confidence {
        Some(fraction) => (fraction * 100.0).round() as i32,
        None => {
            log::warn!(
                "Prediction payload carried no confidence, defaulting to {}%",
                DEFAULT_CONFIDENCE_PCT
            );
            DEFAULT_CONFIDENCE_PCT
        }
    };

    let sentiment = match raw.sentiment.as_deref() {
        Some(label) => Category::from_label(label),
        None => {
            log::warn!("Prediction payload carried no sentiment, defaulting to Neutral");
            Category::Neutral
        }
    };

    log::debug!(
        "Normalized prediction: {} at {}%",
        sentiment.as_str(),
        confidence_pct
    );

    NormalizedResult {
        sentiment,
        confidence_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(sentiment: &str, confidence: f64) -> PredictionRaw {
        PredictionRaw {
            sentiment: Some(sentiment.to_string()),
            confidence: Some(confidence),
        }
    }

    #[test]
    fn test_confidence_is_rounded_percentage() {
        assert_eq!(normalize(&raw("Positive", 0.0)).confidence_pct, 0);
        assert_eq!(normalize(&raw("Positive", 0.824)).confidence_pct, 82);
        assert_eq!(normalize(&raw("Positive", 0.825)).confidence_pct, 83);
        assert_eq!(normalize(&raw("Positive", 1.0)).confidence_pct, 100);
    }

    #[test]
    fn test_missing_confidence_defaults_to_90() {
        let payload = PredictionRaw {
            sentiment: Some("Positive".to_string()),
            confidence: None,
        };
        assert_eq!(normalize(&payload).confidence_pct, 90);
    }

    #[test]
    fn test_overrange_confidence_is_not_clamped() {
        // Upstream contract violation: fraction above 1.0. The percentage
        // legitimately exceeds 100 and downstream geometry extrapolates.
        assert_eq!(normalize(&raw("Positive", 1.2)).confidence_pct, 120);
        assert_eq!(normalize(&raw("Positive", -0.1)).confidence_pct, -10);
    }

    #[test]
    fn test_unknown_sentiment_falls_back_to_neutral() {
        let result = normalize(&raw("Excited", 0.5));
        assert_eq!(result.sentiment, Category::Neutral);
        assert_eq!(result.confidence_pct, 50);
    }

    #[test]
    fn test_empty_payload_is_total() {
        let result = normalize(&PredictionRaw::default());
        assert_eq!(result.sentiment, Category::Neutral);
        assert_eq!(result.confidence_pct, DEFAULT_CONFIDENCE_PCT);
    }

    #[test]
    fn test_normalize_is_pure() {
        let payload = raw("Negative", 0.82);
        assert_eq!(normalize(&payload), normalize(&payload));
    }

    #[test]
    fn test_payload_deserializes_with_missing_fields() {
        let payload: PredictionRaw = serde_json::from_str("{}").unwrap();
        assert!(payload.sentiment.is_none());
        assert!(payload.confidence.is_none());

        let payload: PredictionRaw =
            serde_json::from_str(r#"{"sentiment": "Positive"}"#).unwrap();
        assert_eq!(payload.sentiment.as_deref(), Some("Positive"));
        assert!(payload.confidence.is_none());
    }
}
