//! Contract module containing trait definitions for pricing operations

mod price_strategy;
mod seasonality_detector;

pub use price_strategy::{PriceStrategy, StrategyEstimate};
pub use seasonality_detector::SeasonalityDetector;
