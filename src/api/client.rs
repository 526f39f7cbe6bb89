//! HTTP client for the prediction endpoint

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::analysis::normalize::PredictionRaw;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;

/// Request body sent to the prediction endpoint
#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

/// Client for the remote sentiment prediction endpoint
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    config: AnalyzerConfig,
}

impl PredictionClient {
    /// Create a client with the default configuration
    pub fn new() -> Result<Self, AnalyzerError> {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create a client with a custom configuration
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalyzerError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Request a prediction for the given text
    ///
    /// Sends `POST {endpoint}` with a JSON body `{"text": ...}` and parses
    /// the JSON response. Missing payload fields are tolerated (the
    /// normalizer substitutes defaults); a body that is not JSON at all is
    /// a [`AnalyzerError::MalformedResponse`].
    ///
    /// # Errors
    ///
    /// - [`AnalyzerError::Transport`] on network failure or timeout
    /// - [`AnalyzerError::BadStatus`] on a non-2xx response
    /// - [`AnalyzerError::MalformedResponse`] on an unparseable body
    pub async fn predict(&self, text: &str) -> Result<PredictionRaw, AnalyzerError> {
        log::debug!("Requesting prediction from {}", self.config.endpoint);

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(|e| AnalyzerError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Prediction endpoint returned HTTP {}", status.as_u16());
            return Err(AnalyzerError::BadStatus(status.as_u16()));
        }

        response
            .json::<PredictionRaw>()
            .await
            .map_err(|e| AnalyzerError::MalformedResponse(e.to_string()))
    }

    /// Get the client configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}
