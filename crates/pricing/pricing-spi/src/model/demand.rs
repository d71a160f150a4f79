//! Demand classification labels

use serde::{Deserialize, Serialize};

/// Categorical demand bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl DemandLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandLevel::Low => "low",
            DemandLevel::Medium => "medium",
            DemandLevel::High => "high",
            DemandLevel::VeryHigh => "very_high",
        }
    }
}

impl std::fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pricing action relative to the current price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Increase,
    Decrease,
    Maintain,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::Increase => write!(f, "increase"),
            Recommendation::Decrease => write!(f, "decrease"),
            Recommendation::Maintain => write!(f, "maintain"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demand_level_ordering() {
        assert!(DemandLevel::Low < DemandLevel::Medium);
        assert!(DemandLevel::High < DemandLevel::VeryHigh);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&DemandLevel::VeryHigh).unwrap(),
            "\"very_high\""
        );
        assert_eq!(
            serde_json::to_string(&Recommendation::Maintain).unwrap(),
            "\"maintain\""
        );
    }

    #[test]
    fn test_display_matches_serde() {
        assert_eq!(DemandLevel::VeryHigh.to_string(), "very_high");
        assert_eq!(Recommendation::Increase.to_string(), "increase");
    }
}
