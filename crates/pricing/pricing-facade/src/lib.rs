//! Pricing Facade
//!
//! High-level API for hotel price forecasting. Re-exports all public types
//! from the pricing stack for convenient usage.

// Re-export everything from API (configuration tables)
pub use pricing_api::*;

// Explicit re-exports for documentation
pub use pricing_api::prelude;

// Re-export core modules for direct access
pub use pricing_core::{
    calendar, confidence, demand, elasticity, engine, forecast, insights, pace, revenue,
    seasonality, simulation, smoothing, stats, strategy, trend,
};

// Re-export the engine and algorithms at root
pub use pricing_core::{
    analyze_booking_pace, confidence_score, create_strategy, demand_level, demand_score,
    detect_seasonality, detect_trend, ema, estimate_elasticity, explain, forecast_month,
    forecast_price, forecast_year, market_insights, ml_predict, optimize_price, predict_price,
    recommendation, sma, CancellationToken, ChainPrediction, CycleCorrelationDetector,
    DateRequest, MarketSimulator, PreparedSnapshot, PricingEngine, SequentialFactorChain,
    WeightedBlend,
};

// Re-export SPI data model and contracts
pub use pricing_spi::*;
