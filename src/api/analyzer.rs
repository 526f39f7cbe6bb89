//! Analyzer request orchestration
//!
//! Owns the request lifecycle for submitting user text and publishing the
//! normalized result:
//!
//! ```text
//! Idle --submit--> Loading --ok--> Success(NormalizedResult)
//!                  Loading --err--> Failed(reason)
//! ```
//!
//! A new `submit` from either terminal state returns to `Loading`. There is
//! no cancellation: overlapping submissions race and the last response to
//! arrive wins. Consumers only ever observe normalized results; raw
//! payloads are never published.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::analysis::normalize::{normalize, PredictionRaw};
use crate::analysis::result::NormalizedResult;
use crate::api::client::PredictionClient;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;

/// User-visible reason published for every failed request
///
/// Transport failures, bad statuses and unparseable bodies all collapse to
/// this single message; the distinction stays in the logs.
pub const BACKEND_ERROR_MESSAGE: &str = "Unable to connect to backend";

/// Request lifecycle state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RequestState {
    /// No request issued yet
    Idle,
    /// A request is in flight
    Loading,
    /// Last request completed with a normalized result
    Success(NormalizedResult),
    /// Last request failed with a user-visible reason
    Failed(String),
}

/// Backend capable of producing a raw prediction for a text
///
/// Seam between the orchestrator and the transport so tests can substitute
/// deterministic backends for the HTTP client.
pub trait PredictionBackend {
    /// Request a prediction for the given text
    fn predict(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<PredictionRaw, AnalyzerError>> + Send;
}

impl PredictionBackend for PredictionClient {
    async fn predict(&self, text: &str) -> Result<PredictionRaw, AnalyzerError> {
        PredictionClient::predict(self, text).await
    }
}

/// Request orchestrator for the sentiment analyzer panel
///
/// Holds the single [`RequestState`] value: one logical writer (the
/// orchestrator itself), many readers (the rendering consumers).
#[derive(Debug)]
pub struct SentimentAnalyzer<B> {
    backend: B,
    state: Mutex<RequestState>,
}

impl SentimentAnalyzer<PredictionClient> {
    /// Create an analyzer backed by the HTTP client with default configuration
    pub fn new() -> Result<Self, AnalyzerError> {
        Ok(Self::with_backend(PredictionClient::new()?))
    }

    /// Create an analyzer backed by the HTTP client with a custom configuration
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        Ok(Self::with_backend(PredictionClient::with_config(config)?))
    }
}

impl<B: PredictionBackend> SentimentAnalyzer<B> {
    /// Create an analyzer over an arbitrary prediction backend
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(RequestState::Idle),
        }
    }

    /// Current request state
    pub fn state(&self) -> RequestState {
        self.state.lock().clone()
    }

    /// Submit text for analysis
    ///
    /// Empty or whitespace-only text is silently ignored: no transition, no
    /// request. Otherwise the state moves to `Loading`, one request is
    /// issued, and on completion the state is replaced with
    /// `Success(NormalizedResult)` or `Failed(reason)`.
    ///
    /// Overlapping submissions are not fenced; whichever response arrives
    /// last overwrites the state.
    pub async fn submit(&self, text: &str) {
        if text.trim().is_empty() {
            log::debug!("Ignoring empty submission");
            return;
        }

        *self.state.lock() = RequestState::Loading;

        let next = match self.backend.predict(text).await {
            Ok(raw) => {
                // Normalize before publishing so consumers never see the
                // raw payload.
                RequestState::Success(normalize(&raw))
            }
            Err(e) => {
                log::error!("Prediction request failed: {}", e);
                RequestState::Failed(BACKEND_ERROR_MESSAGE.to_string())
            }
        };

        *self.state.lock() = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::Category;

    struct StaticBackend {
        response: Result<PredictionRaw, AnalyzerError>,
    }

    impl PredictionBackend for StaticBackend {
        async fn predict(&self, _text: &str) -> Result<PredictionRaw, AnalyzerError> {
            self.response.clone()
        }
    }

    fn ok_backend(sentiment: &str, confidence: f64) -> StaticBackend {
        StaticBackend {
            response: Ok(PredictionRaw {
                sentiment: Some(sentiment.to_string()),
                confidence: Some(confidence),
            }),
        }
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let analyzer = SentimentAnalyzer::with_backend(ok_backend("Positive", 0.9));
        assert_eq!(analyzer.state(), RequestState::Idle);
    }

    #[tokio::test]
    async fn test_empty_submission_is_a_no_op() {
        let analyzer = SentimentAnalyzer::with_backend(ok_backend("Positive", 0.9));

        analyzer.submit("").await;
        assert_eq!(analyzer.state(), RequestState::Idle);

        analyzer.submit("   \t\n").await;
        assert_eq!(analyzer.state(), RequestState::Idle);
    }

    #[tokio::test]
    async fn test_successful_submission_publishes_normalized_result() {
        let analyzer = SentimentAnalyzer::with_backend(ok_backend("Negative", 0.82));

        analyzer.submit("terrible product").await;

        assert_eq!(
            analyzer.state(),
            RequestState::Success(NormalizedResult {
                sentiment: Category::Negative,
                confidence_pct: 82,
            })
        );
    }

    #[tokio::test]
    async fn test_failed_submission_publishes_backend_message() {
        let analyzer = SentimentAnalyzer::with_backend(StaticBackend {
            response: Err(AnalyzerError::BadStatus(503)),
        });

        analyzer.submit("anything").await;

        assert_eq!(
            analyzer.state(),
            RequestState::Failed(BACKEND_ERROR_MESSAGE.to_string())
        );
    }

    struct SequenceBackend {
        responses: Mutex<Vec<Result<PredictionRaw, AnalyzerError>>>,
    }

    impl PredictionBackend for SequenceBackend {
        async fn predict(&self, _text: &str) -> Result<PredictionRaw, AnalyzerError> {
            self.responses.lock().remove(0)
        }
    }

    #[tokio::test]
    async fn test_resubmission_recovers_from_failure() {
        let analyzer = SentimentAnalyzer::with_backend(SequenceBackend {
            responses: Mutex::new(vec![
                Err(AnalyzerError::Transport("down".to_string())),
                Ok(PredictionRaw {
                    sentiment: Some("Positive".to_string()),
                    confidence: Some(0.77),
                }),
            ]),
        });

        analyzer.submit("first try").await;
        assert_eq!(
            analyzer.state(),
            RequestState::Failed(BACKEND_ERROR_MESSAGE.to_string())
        );

        analyzer.submit("second try").await;
        assert_eq!(
            analyzer.state(),
            RequestState::Success(NormalizedResult {
                sentiment: Category::Positive,
                confidence_pct: 77,
            })
        );
    }
}
