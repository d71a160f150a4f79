//! Aggregate engine configuration.

use crate::calendar::{CalendarConfig, RevenueConfig};
use crate::config::{
    BlendConfig, BookingPaceConfig, ConfidenceConfig, DemandConfig, ForecastConfig, HorizonConfig,
    InsightConfig, OptimizerConfig, SeasonalityConfig, TrendConfig,
};
use crate::strategy::{BlendStrategy, ChainConfig, WeightedBlendConfig};
use pricing_spi::{PricingError, Result};
use serde::{Deserialize, Serialize};

/// Every table and threshold used by the pricing engine.
///
/// Missing sections in JSON fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub strategy: BlendStrategy,
    pub trend: TrendConfig,
    pub seasonality: SeasonalityConfig,
    pub optimizer: OptimizerConfig,
    pub forecast: ForecastConfig,
    pub blend: BlendConfig,
    pub demand: DemandConfig,
    pub confidence: ConfidenceConfig,
    pub booking_pace: BookingPaceConfig,
    pub insights: InsightConfig,
    pub horizon: HorizonConfig,
    pub calendar: CalendarConfig,
    pub revenue: RevenueConfig,
}

impl EngineConfig {
    /// Default tables with a different strategy.
    pub fn with_strategy(strategy: BlendStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PricingError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| PricingError::Config(e.to_string()))
    }

    /// Reject negative weights, inverted bounds, and malformed tables.
    pub fn validate(&self) -> Result<()> {
        match &self.strategy {
            BlendStrategy::WeightedBlend(blend) => validate_weighted_blend(blend)?,
            BlendStrategy::SequentialFactorChain(chain) => validate_chain(chain)?,
        }

        if self.trend.recent_window == 0 {
            return Err(config_error("trend.recent_window must be greater than zero"));
        }
        if self.seasonality.candidate_periods.is_empty()
            || self.seasonality.candidate_periods.contains(&0)
        {
            return Err(config_error(
                "seasonality.candidate_periods must be non-empty and non-zero",
            ));
        }
        if self.optimizer.max_change_pct < 0.0 {
            return Err(config_error("optimizer.max_change_pct must be non-negative"));
        }
        if self.optimizer.default_elasticity == 0.0 {
            return Err(config_error("optimizer.default_elasticity must be non-zero"));
        }
        if self.forecast.ema_period == 0 {
            return Err(config_error("forecast.ema_period must be greater than zero"));
        }
        if self.forecast.lookback == 0 {
            return Err(config_error("forecast.lookback must be greater than zero"));
        }
        if !self.forecast.decay_horizon_days.is_finite() || self.forecast.decay_horizon_days <= 0.0 {
            return Err(config_error("forecast.decay_horizon_days must be positive"));
        }
        ensure_bounds(
            "forecast multipliers",
            self.forecast.min_multiplier,
            self.forecast.max_multiplier,
        )?;

        ensure_non_negative("blend.model_weight", self.blend.model_weight)?;
        ensure_non_negative("blend.series_weight", self.blend.series_weight)?;
        if self.blend.momentum_divisor <= 0.0 {
            return Err(config_error("blend.momentum_divisor must be positive"));
        }

        let demand = &self.demand.weights;
        for (name, weight) in [
            ("demand.weights.occupancy", demand.occupancy),
            ("demand.weights.velocity", demand.velocity),
            ("demand.weights.search", demand.search),
            ("demand.weights.competition", demand.competition),
        ] {
            ensure_non_negative(name, weight)?;
        }
        if self.demand.velocity_cap <= 0.0 || self.demand.velocity_window_days <= 0.0 {
            return Err(config_error("demand velocity settings must be positive"));
        }

        let confidence = &self.confidence.weights;
        for (name, weight) in [
            ("confidence.weights.data_volume", confidence.data_volume),
            ("confidence.weights.recency", confidence.recency),
            ("confidence.weights.same_slot_history", confidence.same_slot_history),
            ("confidence.weights.booking_data", confidence.booking_data),
            ("confidence.weights.competitor_data", confidence.competitor_data),
            ("confidence.weights.market_consistency", confidence.market_consistency),
        ] {
            ensure_non_negative(name, weight)?;
        }
        ensure_bounds("confidence floor/cap", self.confidence.floor, self.confidence.cap)?;
        if self.confidence.floor < 0.0 || self.confidence.cap > 1.0 {
            return Err(config_error("confidence floor/cap must lie within [0, 1]"));
        }
        if self.confidence.full_history_points == 0 || self.confidence.stale_after_days <= 0.0 {
            return Err(config_error("confidence volume and recency scales must be positive"));
        }

        if self.booking_pace.deviation_divisor <= 0.0 {
            return Err(config_error("booking_pace.deviation_divisor must be positive"));
        }

        if self.horizon.min_days == 0 || self.horizon.min_days > self.horizon.max_days {
            return Err(config_error(format!(
                "horizon bounds are invalid: {} > {}",
                self.horizon.min_days, self.horizon.max_days
            )));
        }

        if self.calendar.monthly_multipliers.len() != 12 {
            return Err(config_error(format!(
                "calendar.monthly_multipliers needs 12 entries, got {}",
                self.calendar.monthly_multipliers.len()
            )));
        }
        if self.revenue.seasons.len() != 12 {
            return Err(config_error(format!(
                "revenue.seasons needs 12 entries, got {}",
                self.revenue.seasons.len()
            )));
        }

        Ok(())
    }
}

fn validate_weighted_blend(blend: &WeightedBlendConfig) -> Result<()> {
    if blend.weights.all().iter().any(|w| *w < 0.0) {
        return Err(config_error("weighted blend weights must be non-negative"));
    }
    if blend.weights.total() <= 0.0 {
        return Err(config_error("weighted blend weights must not all be zero"));
    }
    if blend.short_lead_days > blend.medium_lead_days {
        return Err(config_error("short_lead_days must not exceed medium_lead_days"));
    }
    Ok(())
}

fn validate_chain(chain: &ChainConfig) -> Result<()> {
    ensure_bounds("chain multipliers", chain.min_multiplier, chain.max_multiplier)?;
    if chain.last_minute_days > chain.short_notice_days {
        return Err(config_error("last_minute_days must not exceed short_notice_days"));
    }
    if chain.good_occupancy > chain.peak_occupancy {
        return Err(config_error("good_occupancy must not exceed peak_occupancy"));
    }
    Ok(())
}

fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(config_error(format!("{} must be non-negative, got {}", name, value)))
    }
}

fn ensure_bounds(name: &str, min: f64, max: f64) -> Result<()> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(config_error(format!("{} are inverted: {} > {}", name, min, max)))
    }
}

fn config_error(message: impl Into<String>) -> PricingError {
    PricingError::Config(message.into())
}
