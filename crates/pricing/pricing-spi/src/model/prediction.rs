//! Prediction inputs and the per-date output record

use super::{BookingPace, DemandLevel, OptimizationResult, Recommendation};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Features consumed by the weighted blend. All are derived upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionFactors {
    /// Mean historical price of the hotel
    pub historical_avg: f64,
    /// Mean competitor price for the target date
    pub competitor_avg: f64,
    /// Occupancy percentage (0-100)
    pub occupancy: f64,
    /// Days between now and the stay date
    pub lead_time_days: u32,
    /// Seasonal multiplier around 1.0
    pub seasonality_factor: f64,
    /// Trend velocity (fraction per step)
    pub trend_velocity: f64,
    /// Event multiplier around 1.0
    pub event_impact: f64,
}

/// Inputs for the sequential factor chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainInput {
    pub is_weekend: bool,
    pub is_holiday: bool,
    pub days_until_date: u32,
    pub current_occupancy: f64,
    pub current_price: f64,
    pub competitor_avg_price: f64,
    /// Composite demand score in [0, 1]
    pub demand_score: f64,
    pub seasonality_factor: f64,
    pub event_factor: f64,
    /// Recent competitor price momentum in [-1, 1]
    pub price_history_trend: f64,
}

/// Everything a pricing strategy may look at for one stay date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingContext {
    /// Hotel's reference price
    pub base_price: f64,
    /// Price currently published for the stay date
    pub current_price: f64,
    pub factors: PredictionFactors,
    pub is_weekend: bool,
    pub is_holiday: bool,
    pub demand_score: f64,
    pub price_history_trend: f64,
}

impl PricingContext {
    /// Project the context onto the chain's input shape.
    pub fn chain_input(&self) -> ChainInput {
        ChainInput {
            is_weekend: self.is_weekend,
            is_holiday: self.is_holiday,
            days_until_date: self.factors.lead_time_days,
            current_occupancy: self.factors.occupancy,
            current_price: self.current_price,
            competitor_avg_price: self.factors.competitor_avg,
            demand_score: self.demand_score,
            seasonality_factor: self.factors.seasonality_factor,
            event_factor: self.factors.event_impact,
            price_history_trend: self.price_history_trend,
        }
    }
}

/// One explained contribution to the predicted price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionFactor {
    pub name: String,
    /// Signed impact on a -100..100 scale
    pub impact: i32,
    pub description: String,
}

impl PredictionFactor {
    pub fn new(name: impl Into<String>, impact: i32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            impact: impact.clamp(-100, 100),
            description: description.into(),
        }
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, price: f64) -> f64 {
        price.max(self.min).min(self.max)
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Pure time-series forecast and its horizon-decayed confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub forecast: f64,
    pub confidence: f64,
}

/// Engine output for one (hotel, stay date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutput {
    pub date: NaiveDate,
    pub predicted_price: f64,
    pub recommended_price: f64,
    /// Confidence in [0, 1]
    pub confidence_score: f64,
    pub demand_level: DemandLevel,
    pub demand_score: f64,
    pub recommendation: Recommendation,
    pub price_range: PriceRange,
    /// Sorted by absolute impact, largest first
    pub factors: Vec<PredictionFactor>,
    /// Name of the strategy that produced the model price
    pub strategy: String,
    pub time_series: ForecastResult,
    pub optimization: Option<OptimizationResult>,
    pub booking_pace: Option<BookingPace>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_impact_is_clamped() {
        assert_eq!(PredictionFactor::new("Spike", 250, "").impact, 100);
        assert_eq!(PredictionFactor::new("Drop", -180, "").impact, -100);
        assert_eq!(PredictionFactor::new("Flat", 0, "").impact, 0);
    }

    #[test]
    fn test_price_range_clamp() {
        let range = PriceRange::new(105.0, 225.0);
        assert_eq!(range.clamp(90.0), 105.0);
        assert_eq!(range.clamp(300.0), 225.0);
        assert_eq!(range.clamp(150.0), 150.0);
        assert!(range.contains(105.0));
        assert!(range.contains(225.0));
        assert!(!range.contains(225.5));
    }

    #[test]
    fn test_chain_input_projection() {
        let context = PricingContext {
            base_price: 150.0,
            current_price: 160.0,
            factors: PredictionFactors {
                historical_avg: 150.0,
                competitor_avg: 170.0,
                occupancy: 82.0,
                lead_time_days: 5,
                seasonality_factor: 1.2,
                trend_velocity: 0.01,
                event_impact: 1.3,
            },
            is_weekend: true,
            is_holiday: false,
            demand_score: 0.7,
            price_history_trend: 0.2,
        };

        let input = context.chain_input();
        assert_eq!(input.current_price, 160.0);
        assert_eq!(input.days_until_date, 5);
        assert_eq!(input.current_occupancy, 82.0);
        assert_eq!(input.competitor_avg_price, 170.0);
        assert_eq!(input.event_factor, 1.3);
        assert!(input.is_weekend);
    }
}
