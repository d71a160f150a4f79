//! Multi-source confidence scoring.

use crate::stats::coefficient_of_variation;
use pricing_api::ConfidenceConfig;
use pricing_spi::ConfidenceSignals;

/// Individual confidence sub-scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceBreakdown {
    pub data_volume: f64,
    pub recency: f64,
    pub same_slot_history: f64,
    pub booking_data: f64,
    pub competitor_data: f64,
    pub market_consistency: f64,
}

impl ConfidenceBreakdown {
    pub fn from_signals(signals: &ConfidenceSignals, config: &ConfidenceConfig) -> Self {
        let data_volume = (signals.history_points as f64 / config.full_history_points as f64).min(1.0);
        let recency = signals
            .data_age_days
            .map(|age| (1.0 - f64::from(age) / config.stale_after_days).max(0.0))
            .unwrap_or(0.0);
        let market_consistency = coefficient_of_variation(&signals.competitor_prices)
            .map(|cv| (1.0 - cv).clamp(0.0, 1.0))
            .unwrap_or(0.0);

        Self {
            data_volume,
            recency,
            same_slot_history: indicator(signals.has_same_slot_history),
            booking_data: indicator(signals.has_booking_data),
            competitor_data: indicator(!signals.competitor_prices.is_empty()),
            market_consistency,
        }
    }

    /// Weighted sum of the sub-scores.
    pub fn weighted(&self, config: &ConfidenceConfig) -> f64 {
        let w = &config.weights;
        w.data_volume * self.data_volume
            + w.recency * self.recency
            + w.same_slot_history * self.same_slot_history
            + w.booking_data * self.booking_data
            + w.competitor_data * self.competitor_data
            + w.market_consistency * self.market_consistency
    }
}

fn indicator(present: bool) -> f64 {
    if present {
        1.0
    } else {
        0.0
    }
}

/// Final confidence for a stay date.
///
/// The weighted sub-scores plus the strategy adjustment are decayed for far
/// horizons, then floored and capped.
pub fn confidence_score(
    signals: &ConfidenceSignals,
    strategy_adjustment: f64,
    days_ahead: u32,
    config: &ConfidenceConfig,
) -> f64 {
    let base = ConfidenceBreakdown::from_signals(signals, config).weighted(config) + strategy_adjustment;
    let horizon = if days_ahead < config.near_term_days {
        1.0
    } else {
        config.far_horizon_multiplier
    };
    let score = base * horizon;
    if score.is_finite() {
        score.clamp(config.floor, config.cap)
    } else {
        config.floor
    }
}
