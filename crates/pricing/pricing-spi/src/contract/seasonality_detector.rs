//! Trait for seasonality detection

use crate::model::SeasonalPattern;

/// Detects a repeating pattern in a price series.
pub trait SeasonalityDetector: Send + Sync {
    /// Return the dominant pattern, or `None` when nothing is strong enough.
    fn detect(&self, prices: &[f64]) -> Option<SeasonalPattern>;
}
