//! Trend and seasonality results

use serde::{Deserialize, Serialize};

/// Direction of a fitted price trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Linear-regression trend summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    /// Bounded strength score in [0, 1]
    pub strength: f64,
    /// Slope per step as a fraction of the series mean
    pub velocity: f64,
    /// Goodness of fit (R²) clamped to [0, 1]
    pub confidence: f64,
}

impl TrendResult {
    /// Result used when there is too little data to fit a line.
    pub fn insufficient() -> Self {
        Self {
            direction: TrendDirection::Stable,
            strength: 0.0,
            velocity: 0.0,
            confidence: 0.3,
        }
    }

    pub fn is_rising(&self) -> bool {
        self.direction == TrendDirection::Up
    }

    pub fn is_falling(&self) -> bool {
        self.direction == TrendDirection::Down
    }
}

/// A repeating price pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalPattern {
    /// Cycle length in days
    pub period_days: usize,
    /// Mean correlation between adjacent cycles, in [0, 1]
    pub amplitude: f64,
    /// Phase offset (always 0)
    pub phase: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_is_stable_and_low_confidence() {
        let trend = TrendResult::insufficient();
        assert_eq!(trend.direction, TrendDirection::Stable);
        assert_eq!(trend.strength, 0.0);
        assert_eq!(trend.velocity, 0.0);
        assert!(trend.confidence <= 0.3);
        assert!(!trend.is_rising());
        assert!(!trend.is_falling());
    }
}
