//! Model-price strategy configuration.

use serde::{Deserialize, Serialize};

// ============================================================================
// Weighted Blend
// ============================================================================

/// Weights of the normalized feature ratios in the weighted blend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub historical: f64,
    pub competitor: f64,
    pub occupancy: f64,
    pub lead_time: f64,
    pub seasonality: f64,
    pub trend: f64,
}

impl FactorWeights {
    pub fn total(&self) -> f64 {
        self.historical + self.competitor + self.occupancy + self.lead_time + self.seasonality + self.trend
    }

    pub fn all(&self) -> [f64; 6] {
        [
            self.historical,
            self.competitor,
            self.occupancy,
            self.lead_time,
            self.seasonality,
            self.trend,
        ]
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            historical: 0.25,
            competitor: 0.25,
            occupancy: 0.20,
            lead_time: 0.10,
            seasonality: 0.15,
            trend: 0.05,
        }
    }
}

/// Weighted sum of feature ratios around 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightedBlendConfig {
    pub weights: FactorWeights,
    /// Occupancy feature is `occupancy_base + occupancy/100 * occupancy_span`
    pub occupancy_base: f64,
    pub occupancy_span: f64,
    /// Lead times below this many days use `short_lead_factor`
    pub short_lead_days: u32,
    pub short_lead_factor: f64,
    /// Lead times below this many days use `medium_lead_factor`
    pub medium_lead_days: u32,
    pub medium_lead_factor: f64,
    pub long_lead_factor: f64,
}

impl Default for WeightedBlendConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            occupancy_base: 0.85,
            occupancy_span: 0.30,
            short_lead_days: 7,
            short_lead_factor: 1.10,
            medium_lead_days: 30,
            medium_lead_factor: 1.00,
            long_lead_factor: 0.95,
        }
    }
}

// ============================================================================
// Sequential Factor Chain
// ============================================================================

/// Multiplicative factor chain. Each factor's reported impact is its
/// deviation from 1.0 in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub weekend_multiplier: f64,

    pub holiday_multiplier: f64,
    pub holiday_confidence: f64,

    /// At most this many days ahead is last-minute
    pub last_minute_days: u32,
    pub last_minute_multiplier: f64,
    pub last_minute_confidence: f64,
    pub short_notice_days: u32,
    pub short_notice_multiplier: f64,
    pub short_notice_confidence: f64,
    /// More than this many days ahead is far future
    pub far_future_days: u32,
    pub far_future_multiplier: f64,
    pub far_future_confidence: f64,

    /// Occupancy at or above this is peak
    pub peak_occupancy: f64,
    pub peak_occupancy_multiplier: f64,
    pub good_occupancy: f64,
    pub good_occupancy_multiplier: f64,
    /// Occupancy below this is low
    pub low_occupancy: f64,
    pub low_occupancy_multiplier: f64,

    /// Percent above the market average that triggers a discount
    pub above_market_pct: f64,
    pub above_market_multiplier: f64,
    /// Percent below the market average that leaves room to increase
    pub below_market_pct: f64,
    pub below_market_multiplier: f64,

    /// Demand multiplier is `1 + (score - 0.5) * demand_sensitivity`
    pub demand_sensitivity: f64,

    /// Seasonality is listed when its impact exceeds this many points
    pub seasonality_listing_threshold: i32,
    /// Events are applied when their factor exceeds this
    pub event_threshold: f64,

    /// Momentum is applied when `|trend|` exceeds this
    pub trend_threshold: f64,
    pub trend_sensitivity: f64,
    pub trend_impact_scale: f64,

    /// Chain price bounds as multiples of the current price
    pub min_multiplier: f64,
    pub max_multiplier: f64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            weekend_multiplier: 1.15,
            holiday_multiplier: 1.25,
            holiday_confidence: 0.05,
            last_minute_days: 3,
            last_minute_multiplier: 1.20,
            last_minute_confidence: 0.10,
            short_notice_days: 7,
            short_notice_multiplier: 1.10,
            short_notice_confidence: 0.05,
            far_future_days: 60,
            far_future_multiplier: 0.95,
            far_future_confidence: -0.10,
            peak_occupancy: 90.0,
            peak_occupancy_multiplier: 1.30,
            good_occupancy: 75.0,
            good_occupancy_multiplier: 1.15,
            low_occupancy: 50.0,
            low_occupancy_multiplier: 0.90,
            above_market_pct: 20.0,
            above_market_multiplier: 0.95,
            below_market_pct: 10.0,
            below_market_multiplier: 1.08,
            demand_sensitivity: 0.3,
            seasonality_listing_threshold: 5,
            event_threshold: 1.05,
            trend_threshold: 0.1,
            trend_sensitivity: 0.05,
            trend_impact_scale: 10.0,
            min_multiplier: 0.7,
            max_multiplier: 1.5,
        }
    }
}

// ============================================================================
// Strategy Selection
// ============================================================================

/// The model-price strategy, chosen explicitly by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlendStrategy {
    WeightedBlend(WeightedBlendConfig),
    SequentialFactorChain(ChainConfig),
}

impl BlendStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            BlendStrategy::WeightedBlend(_) => "weighted_blend",
            BlendStrategy::SequentialFactorChain(_) => "sequential_factor_chain",
        }
    }
}

impl Default for BlendStrategy {
    fn default() -> Self {
        BlendStrategy::WeightedBlend(WeightedBlendConfig::default())
    }
}
