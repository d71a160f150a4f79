//! Pricing Core
//!
//! Core implementations for hotel price forecasting: smoothing, trend and
//! seasonality detection, elasticity-driven optimization, model-price
//! strategies, demand and confidence scoring, and the per-date engine.

pub mod calendar;
pub mod confidence;
pub mod demand;
pub mod elasticity;
pub mod engine;
pub mod forecast;
pub mod insights;
pub mod pace;
pub mod revenue;
pub mod seasonality;
pub mod simulation;
pub mod smoothing;
pub mod stats;
pub mod strategy;
pub mod trend;

// Re-export SPI types for implementations
pub use pricing_spi::{
    PriceStrategy, PricingError, Result, SeasonalityDetector, StrategyEstimate,
};

// Re-export main types
pub use calendar::{event_factor, holiday_for, is_weekend, seasonality_factor};
pub use confidence::{confidence_score, ConfidenceBreakdown};
pub use demand::{demand_level, demand_score, recommendation};
pub use elasticity::{estimate_elasticity, optimize_price};
pub use engine::{CancellationToken, DateRequest, PreparedSnapshot, PricingEngine};
pub use forecast::forecast_price;
pub use insights::{market_insights, InsightSettings};
pub use pace::analyze_booking_pace;
pub use revenue::{forecast_month, forecast_year};
pub use seasonality::{detect_seasonality, CycleCorrelationDetector};
pub use simulation::MarketSimulator;
pub use smoothing::{ema, sma};
pub use strategy::{
    create_strategy, explain, ml_predict, predict_price, ChainPrediction, SequentialFactorChain,
    WeightedBlend,
};
pub use trend::detect_trend;
