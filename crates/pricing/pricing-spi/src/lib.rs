//! Pricing Service Provider Interface
//!
//! Defines the data model, error type, and strategy contracts shared by the
//! hotel price forecasting engine.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{PriceStrategy, SeasonalityDetector, StrategyEstimate};
pub use error::{ensure_percentage, ensure_positive, PricingError, Result};
pub use model::*;
