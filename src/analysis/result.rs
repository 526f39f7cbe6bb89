//! Normalized prediction result types

use serde::{Deserialize, Serialize};

/// Sentiment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Positive sentiment
    Positive,
    /// Neutral sentiment
    Neutral,
    /// Negative sentiment
    Negative,
}

impl Category {
    /// All categories in chart order
    ///
    /// The order is fixed regardless of which category is active, so that
    /// consuming charts keep a stable color mapping across renders.
    pub const ALL: [Category; 3] = [Category::Positive, Category::Neutral, Category::Negative];

    /// Parse a raw model label into a category
    ///
    /// The prediction endpoint reports one of `"Positive"`, `"Neutral"` or
    /// `"Negative"`. Anything else falls back to `Neutral` so that display
    /// lookups never miss.
    ///
    /// # Example
    ///
    /// ```
    /// use sentiviz::Category;
    ///
    /// assert_eq!(Category::from_label("Positive"), Category::Positive);
    /// assert_eq!(Category::from_label("Excited"), Category::Neutral);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label {
            "Positive" => Category::Positive,
            "Neutral" => Category::Neutral,
            "Negative" => Category::Negative,
            other => {
                log::warn!("Unknown sentiment label {:?}, falling back to Neutral", other);
                Category::Neutral
            }
        }
    }

    /// Get the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Neutral => "Neutral",
            Category::Negative => "Negative",
        }
    }

    /// Get the display color as a hex string
    ///
    /// Fixed association table used by every consuming chart:
    /// Positive is green, Neutral is cyan, Negative is red.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Positive => "#22c55e",
            Category::Neutral => "#00d4ff",
            Category::Negative => "#ef4444",
        }
    }
}

/// Normalized prediction result
///
/// Created once per completed request and replaced wholesale by the next
/// request's result. `confidence_pct` is an integer percentage; well-formed
/// upstream confidences land in `[0, 100]`, but the value is deliberately
/// not clamped (see [`crate::analysis::normalize`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResult {
    /// Predicted sentiment category
    pub sentiment: Category,

    /// Confidence as an integer percentage
    pub confidence_pct: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_known() {
        assert_eq!(Category::from_label("Positive"), Category::Positive);
        assert_eq!(Category::from_label("Neutral"), Category::Neutral);
        assert_eq!(Category::from_label("Negative"), Category::Negative);
    }

    #[test]
    fn test_from_label_unknown_falls_back_to_neutral() {
        assert_eq!(Category::from_label("Excited"), Category::Neutral);
        assert_eq!(Category::from_label("positive"), Category::Neutral); // case-sensitive
        assert_eq!(Category::from_label(""), Category::Neutral);
    }

    #[test]
    fn test_label_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.as_str()), category);
        }
    }

    #[test]
    fn test_color_table() {
        assert_eq!(Category::Positive.color(), "#22c55e");
        assert_eq!(Category::Neutral.color(), "#00d4ff");
        assert_eq!(Category::Negative.color(), "#ef4444");
    }

    #[test]
    fn test_chart_order_is_fixed() {
        assert_eq!(
            Category::ALL,
            [Category::Positive, Category::Neutral, Category::Negative]
        );
    }
}
