//! Model module containing data structures

mod demand;
mod optimization;
mod prediction;
mod price_point;
mod revenue;
mod signals;
mod snapshot;
mod trend;

pub use demand::{DemandLevel, Recommendation};
pub use optimization::{OptimizationResult, PriceChangeSample};
pub use prediction::{
    ChainInput, ForecastResult, PredictionFactor, PredictionFactors, PredictionOutput,
    PriceRange, PricingContext,
};
pub use price_point::{prices, PricePoint};
pub use revenue::{HolidayMatch, MonthlyForecast};
pub use signals::{BookingPace, ConfidenceSignals, DemandSignals, PaceStatus};
pub use snapshot::{HotelSnapshot, RangePrediction, RangeSummary};
pub use trend::{SeasonalPattern, TrendDirection, TrendResult};
