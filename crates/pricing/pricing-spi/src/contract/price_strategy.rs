//! Trait for model-price strategies

use crate::error::Result;
use crate::model::{PredictionFactor, PricingContext};

/// Price produced by a strategy, with its explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyEstimate {
    pub price: f64,
    /// Explanation list, sorted by absolute impact
    pub factors: Vec<PredictionFactor>,
    /// Additive adjustment to the engine's confidence score
    pub confidence_adjustment: f64,
}

impl StrategyEstimate {
    pub fn new(price: f64) -> Self {
        Self {
            price,
            factors: Vec::new(),
            confidence_adjustment: 0.0,
        }
    }
}

/// A way of turning a pricing context into a model price.
pub trait PriceStrategy: Send + Sync {
    /// Stable name reported in prediction output
    fn name(&self) -> &'static str;

    /// Estimate the model price for one stay date.
    fn estimate(&self, context: &PricingContext) -> Result<StrategyEstimate>;
}
