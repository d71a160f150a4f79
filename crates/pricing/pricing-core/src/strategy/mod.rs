//! Model-price strategies.

mod factor_chain;
mod weighted_blend;

pub use factor_chain::{predict_price, ChainPrediction, SequentialFactorChain};
pub use weighted_blend::{explain, ml_predict, WeightedBlend};

use pricing_api::BlendStrategy;
use pricing_spi::PriceStrategy;

/// Create a strategy from its configuration.
pub fn create_strategy(strategy: &BlendStrategy) -> Box<dyn PriceStrategy> {
    match strategy {
        BlendStrategy::WeightedBlend(config) => Box::new(WeightedBlend::new(config.clone())),
        BlendStrategy::SequentialFactorChain(config) => {
            Box::new(SequentialFactorChain::new(config.clone()))
        }
    }
}
