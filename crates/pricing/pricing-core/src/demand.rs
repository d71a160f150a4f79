//! Demand scoring, classification, and price recommendation.

use pricing_api::{BlendConfig, DemandConfig};
use pricing_spi::{DemandLevel, DemandSignals, Recommendation};

/// Composite demand score in [0, 1].
pub fn demand_score(signals: &DemandSignals, config: &DemandConfig) -> f64 {
    let w = &config.weights;
    let occupancy = signals.occupancy / 100.0;
    let velocity = (signals.booking_velocity / config.velocity_cap).min(1.0);
    let search = signals.search_interest.clamp(0.0, 1.0);
    let scarcity = 1.0 - signals.competitor_availability.clamp(0.0, 1.0);

    let score = w.occupancy * occupancy + w.velocity * velocity + w.search * search + w.competition * scarcity;
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Bucket a score and occupancy into a demand level.
pub fn demand_level(score: f64, occupancy: f64, config: &DemandConfig) -> DemandLevel {
    if config.very_high.is_met(score, occupancy) {
        DemandLevel::VeryHigh
    } else if config.high.is_met(score, occupancy) {
        DemandLevel::High
    } else if config.medium.is_met(score, occupancy) {
        DemandLevel::Medium
    } else {
        DemandLevel::Low
    }
}

/// Compare the recommended price with the current one.
pub fn recommendation(recommended_price: f64, current_price: f64, config: &BlendConfig) -> Recommendation {
    if current_price <= 0.0 {
        return Recommendation::Maintain;
    }
    let change_pct = (recommended_price - current_price) / current_price * 100.0;
    if change_pct > config.recommendation_band_pct {
        Recommendation::Increase
    } else if change_pct < -config.recommendation_band_pct {
        Recommendation::Decrease
    } else {
        Recommendation::Maintain
    }
}
