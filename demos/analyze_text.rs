//! Example: Analyze a text against the live prediction endpoint
//!
//! Usage: `cargo run --example analyze_text -- "your review text"`

use sentiviz::{analyze_text, AnalyzerConfig, SentimentSnapshot};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "This product is absolutely amazing and works perfectly!".to_string());

    let config = AnalyzerConfig::default();

    // Analyze
    let result = analyze_text(&text, config).await?;

    // Print results
    println!("Analysis Results:");
    println!("  Sentiment: {} ({})", result.sentiment.as_str(), result.sentiment.color());
    println!("  Confidence: {}%", result.confidence_pct);

    let snapshot = SentimentSnapshot::derive(result);
    println!("  Gauge angle: {:.1} deg", snapshot.gauge.angle_degrees);

    Ok(())
}
