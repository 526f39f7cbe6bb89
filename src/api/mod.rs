//! Prediction endpoint client and request orchestration

pub mod analyzer;
pub mod client;

pub use analyzer::{PredictionBackend, RequestState, SentimentAnalyzer, BACKEND_ERROR_MESSAGE};
pub use client::PredictionClient;
