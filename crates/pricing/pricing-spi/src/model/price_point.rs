//! Historical price observation

use super::DemandLevel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observed nightly price for a hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Stay date
    pub date: NaiveDate,
    /// Nightly price (positive)
    pub price: f64,
    /// Occupancy percentage (0-100), if known
    #[serde(default)]
    pub occupancy: Option<f64>,
    /// Demand label recorded alongside the price, if any
    #[serde(default)]
    pub demand: Option<DemandLevel>,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            price,
            occupancy: None,
            demand: None,
        }
    }

    pub fn with_occupancy(mut self, occupancy: f64) -> Self {
        self.occupancy = Some(occupancy);
        self
    }

    pub fn with_demand(mut self, demand: DemandLevel) -> Self {
        self.demand = Some(demand);
        self
    }
}

/// Extract the price column.
pub fn prices(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.price).collect()
}
