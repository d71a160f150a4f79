//! Algorithm configuration types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Trend Configuration
// ============================================================================

/// Linear-regression trend detection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Number of most recent points fitted.
    pub recent_window: usize,
    /// Below this many points the trend is reported as stable.
    pub min_points: usize,
    /// Minimum |velocity| for a directional trend.
    pub velocity_threshold: f64,
    /// Minimum R² for a directional trend.
    pub confidence_threshold: f64,
    /// Maps velocity to strength: `strength = |velocity| * scale`.
    pub strength_scale: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            recent_window: 7,
            min_points: 3,
            velocity_threshold: 0.01,
            confidence_threshold: 0.3,
            strength_scale: 10.0,
        }
    }
}

// ============================================================================
// Seasonality Configuration
// ============================================================================

/// Adjacent-cycle correlation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalityConfig {
    /// Candidate cycle lengths in days, in tie-breaking order.
    pub candidate_periods: Vec<usize>,
    pub min_points: usize,
    /// Minimum mean correlation for a pattern to be reported.
    pub threshold: f64,
}

impl Default for SeasonalityConfig {
    fn default() -> Self {
        Self {
            candidate_periods: vec![7, 14, 30],
            min_points: 30,
            threshold: 0.3,
        }
    }
}

// ============================================================================
// Optimizer Configuration
// ============================================================================

/// Elasticity-driven price optimizer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Occupancy percentage the optimizer steers toward.
    pub target_occupancy: f64,
    /// Gap (in points) under which the price is left unchanged.
    pub near_target_band: f64,
    /// Gap (in points) beyond which reasoning reports low/high occupancy.
    pub reasoning_band: f64,
    /// Maximum price change in percent, either direction.
    pub max_change_pct: f64,
    /// Elasticity used when no valid history exists.
    pub default_elasticity: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            target_occupancy: 75.0,
            near_target_band: 5.0,
            reasoning_band: 10.0,
            max_change_pct: 20.0,
            default_elasticity: -1.2,
        }
    }
}

// ============================================================================
// Forecast Configuration
// ============================================================================

/// EMA + trend extrapolation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Below this many points the base price is returned.
    pub min_points: usize,
    /// Confidence reported when there are too few points.
    pub insufficient_confidence: f64,
    /// Number of most recent points used.
    pub lookback: usize,
    pub ema_period: usize,
    /// Horizon at which the time decay bottoms out.
    pub decay_horizon_days: f64,
    pub min_time_decay: f64,
    /// Forecast bounds as multiples of the base price.
    pub min_multiplier: f64,
    pub max_multiplier: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            min_points: 7,
            insufficient_confidence: 0.3,
            lookback: 30,
            ema_period: 7,
            decay_horizon_days: 60.0,
            min_time_decay: 0.3,
            min_multiplier: 0.7,
            max_multiplier: 1.5,
        }
    }
}

// ============================================================================
// Blend Configuration
// ============================================================================

/// How the model price and the time-series price are combined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendConfig {
    pub model_weight: f64,
    pub series_weight: f64,
    /// Dates at most this many days ahead go through the optimizer.
    pub optimize_within_days: u32,
    /// Price move (percent) needed before recommending a change.
    pub recommendation_band_pct: f64,
    /// Competitor price assumed, as a share of the current price, when none was observed.
    pub missing_competitor_ratio: f64,
    /// Number of most recent competitor moves averaged for momentum.
    pub momentum_window: usize,
    /// Divides the mean percent move to map momentum into [-1, 1].
    pub momentum_divisor: f64,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            model_weight: 0.6,
            series_weight: 0.4,
            optimize_within_days: 30,
            recommendation_band_pct: 5.0,
            missing_competitor_ratio: 0.95,
            momentum_window: 10,
            momentum_divisor: 10.0,
        }
    }
}

// ============================================================================
// Demand Configuration
// ============================================================================

/// Weights of the composite demand score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandWeights {
    pub occupancy: f64,
    pub velocity: f64,
    pub search: f64,
    pub competition: f64,
}

impl Default for DemandWeights {
    fn default() -> Self {
        Self {
            occupancy: 0.35,
            velocity: 0.25,
            search: 0.20,
            competition: 0.20,
        }
    }
}

/// A demand bucket is reached when either bound is exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandThreshold {
    pub score: f64,
    pub occupancy: f64,
}

impl DemandThreshold {
    pub const fn new(score: f64, occupancy: f64) -> Self {
        Self { score, occupancy }
    }

    pub fn is_met(&self, score: f64, occupancy: f64) -> bool {
        score > self.score || occupancy > self.occupancy
    }
}

/// Demand scoring and classification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandConfig {
    pub weights: DemandWeights,
    /// Bookings per day treated as maximum velocity.
    pub velocity_cap: f64,
    /// Days over which booked rooms are spread to get a velocity.
    pub velocity_window_days: f64,
    pub very_high: DemandThreshold,
    pub high: DemandThreshold,
    pub medium: DemandThreshold,
}

impl Default for DemandConfig {
    fn default() -> Self {
        Self {
            weights: DemandWeights::default(),
            velocity_cap: 10.0,
            velocity_window_days: 7.0,
            very_high: DemandThreshold::new(0.8, 75.0),
            high: DemandThreshold::new(0.6, 55.0),
            medium: DemandThreshold::new(0.4, 35.0),
        }
    }
}

// ============================================================================
// Confidence Configuration
// ============================================================================

/// Weights of the confidence sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceWeights {
    pub data_volume: f64,
    pub recency: f64,
    pub same_slot_history: f64,
    pub booking_data: f64,
    pub competitor_data: f64,
    pub market_consistency: f64,
}

impl ConfidenceWeights {
    pub fn total(&self) -> f64 {
        self.data_volume
            + self.recency
            + self.same_slot_history
            + self.booking_data
            + self.competitor_data
            + self.market_consistency
    }
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            data_volume: 0.25,
            recency: 0.15,
            same_slot_history: 0.15,
            booking_data: 0.15,
            competitor_data: 0.15,
            market_consistency: 0.15,
        }
    }
}

/// Confidence scoring settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    pub weights: ConfidenceWeights,
    /// History length that earns a full data-volume score.
    pub full_history_points: usize,
    /// Data this old (in days) earns no recency credit.
    pub stale_after_days: f64,
    pub floor: f64,
    pub cap: f64,
    /// Dates closer than this keep full confidence.
    pub near_term_days: u32,
    /// Multiplier applied to dates at or beyond `near_term_days`.
    pub far_horizon_multiplier: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            weights: ConfidenceWeights::default(),
            full_history_points: 90,
            stale_after_days: 30.0,
            floor: 0.45,
            cap: 0.96,
            near_term_days: 30,
            far_horizon_multiplier: 0.8,
        }
    }
}

// ============================================================================
// Booking Pace Configuration
// ============================================================================

/// Booking pace thresholds and multiplier limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingPaceConfig {
    /// Deviation (percent) beyond which pace is ahead/behind.
    pub threshold_pct: f64,
    /// Deviation is divided by this to get the multiplier offset.
    pub deviation_divisor: f64,
    pub max_premium: f64,
    pub max_discount: f64,
}

impl Default for BookingPaceConfig {
    fn default() -> Self {
        Self {
            threshold_pct: 15.0,
            deviation_divisor: 200.0,
            max_premium: 0.15,
            max_discount: 0.12,
        }
    }
}

// ============================================================================
// Insight Configuration
// ============================================================================

/// Thresholds for market insight generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    /// Week-over-week change (percent) reported as a trend.
    pub change_threshold_pct: f64,
    /// Standard deviation as a share of the mean reported as volatile.
    pub volatility_ratio: f64,
    /// Days compared in the week-over-week check.
    pub week_days: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            change_threshold_pct: 5.0,
            volatility_ratio: 0.15,
            week_days: 7,
        }
    }
}

// ============================================================================
// Horizon Configuration
// ============================================================================

/// Bounds on how far ahead a range prediction may run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizonConfig {
    pub min_days: u32,
    pub max_days: u32,
}

impl HorizonConfig {
    /// Clamp a requested horizon into `[min_days, max_days]`.
    pub fn clamp(&self, days: u32) -> u32 {
        days.clamp(self.min_days, self.max_days)
    }
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            min_days: 30,
            max_days: 180,
        }
    }
}
