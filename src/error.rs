//! Error types for the sentiment analyzer core

use std::fmt;

/// Errors that can occur while requesting or processing a prediction
#[derive(Debug, Clone)]
pub enum AnalyzerError {
    /// Submitted text was empty or whitespace-only
    EmptyInput,

    /// Network-level failure (unreachable host, timeout, connection reset)
    Transport(String),

    /// Prediction endpoint answered with a non-success HTTP status
    BadStatus(u16),

    /// Response body could not be parsed as a prediction payload
    MalformedResponse(String),
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzerError::EmptyInput => write!(f, "Empty input: nothing to analyze"),
            AnalyzerError::Transport(msg) => write!(f, "Transport error: {}", msg),
            AnalyzerError::BadStatus(code) => write!(f, "Backend returned HTTP {}", code),
            AnalyzerError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for AnalyzerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AnalyzerError::EmptyInput.to_string(),
            "Empty input: nothing to analyze"
        );
        assert_eq!(
            AnalyzerError::BadStatus(502).to_string(),
            "Backend returned HTTP 502"
        );
        assert!(AnalyzerError::Transport("connection refused".to_string())
            .to_string()
            .contains("connection refused"));
    }
}
