//! Price optimization inputs and results

use serde::{Deserialize, Serialize};

/// A historical price move together with the occupancy it produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChangeSample {
    pub old_price: f64,
    pub new_price: f64,
    pub old_occupancy: f64,
    pub new_occupancy: f64,
}

impl PriceChangeSample {
    pub fn new(old_price: f64, new_price: f64, old_occupancy: f64, new_occupancy: f64) -> Self {
        Self {
            old_price,
            new_price,
            old_occupancy,
            new_occupancy,
        }
    }
}

/// Suggested price adjustment toward a target occupancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub optimal_price: f64,
    /// Expected occupancy percentage (0-100)
    pub expected_occupancy: f64,
    pub expected_revenue: f64,
    pub reasoning: String,
}
