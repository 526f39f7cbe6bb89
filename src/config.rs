//! Configuration parameters for the sentiment analyzer

/// Prediction endpoint used when no custom endpoint is configured
pub const DEFAULT_ENDPOINT: &str = "https://sentiment-analysis-oh35.onrender.com/predict";

/// Analyzer configuration parameters
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Prediction endpoint URL (default: hosted sentiment model)
    /// The endpoint accepts `POST` with a JSON body `{"text": ...}`
    pub endpoint: String,

    /// Request timeout in seconds (default: 15)
    /// Applied to the whole request, connect included
    pub timeout_secs: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 15,
        }
    }
}

impl AnalyzerConfig {
    /// Create a configuration pointing at a custom prediction endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}
