//! Pricing Consumer API
//!
//! Configuration types for the pricing engine. Every weight, threshold, and
//! lookup table used by the algorithms lives here with a `Default` that
//! reproduces the production constants, so callers and tests can swap them
//! without touching code.

pub mod calendar;
pub mod config;
pub mod engine;
pub mod strategy;

pub use calendar::{CalendarConfig, HolidayRule, MonthlySeason, RevenueConfig};
pub use config::{
    BlendConfig, BookingPaceConfig, ConfidenceConfig, ConfidenceWeights, DemandConfig,
    DemandThreshold, DemandWeights, ForecastConfig, HorizonConfig, InsightConfig,
    OptimizerConfig, SeasonalityConfig, TrendConfig,
};
pub use engine::EngineConfig;
pub use strategy::{BlendStrategy, ChainConfig, FactorWeights, WeightedBlendConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BlendConfig, BlendStrategy, CalendarConfig, ChainConfig, ConfidenceConfig, DemandConfig,
        EngineConfig, FactorWeights, ForecastConfig, OptimizerConfig, WeightedBlendConfig,
    };
    pub use pricing_spi::{PricingError, Result};
}
