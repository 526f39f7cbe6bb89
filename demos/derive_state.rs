//! Example: Derive chart data from a canned prediction, no network needed

use sentiviz::{normalize, PredictionRaw, SentimentSnapshot};

fn main() {
    env_logger::init();

    let raw = PredictionRaw {
        sentiment: Some("Negative".to_string()),
        confidence: Some(0.82),
    };

    let result = normalize(&raw);
    let snapshot = SentimentSnapshot::derive(result);

    println!("Sentiment: {} at {}%", result.sentiment.as_str(), result.confidence_pct);

    println!("Donut distribution:");
    for entry in &snapshot.distribution {
        println!(
            "  {:<8} weight {:>5.1}  color {}",
            entry.category.as_str(),
            entry.weight,
            entry.category.color()
        );
    }

    println!("Gauge:");
    println!("  angle: {:.1} deg", snapshot.gauge.angle_degrees);
    println!(
        "  arc end: ({:.1}, {:.1})",
        snapshot.gauge.arc_end.x, snapshot.gauge.arc_end.y
    );
    println!(
        "  needle end: ({:.1}, {:.1})",
        snapshot.gauge.needle_end.x, snapshot.gauge.needle_end.y
    );
    println!("  fill path: {}", snapshot.gauge.fill_arc_path());
}
