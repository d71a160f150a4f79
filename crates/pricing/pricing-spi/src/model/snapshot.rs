//! Per-hotel input snapshot and range prediction output

use super::{PredictionOutput, PriceChangeSample, PricePoint};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_search_interest() -> f64 {
    0.5
}

/// Fully materialized data for one hotel, assembled by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSnapshot {
    pub hotel_id: String,
    /// "Today" from the caller's point of view; lead times count from here
    pub as_of: NaiveDate,
    pub base_price: f64,
    pub total_rooms: u32,
    /// Trailing price history (any order)
    #[serde(default)]
    pub history: Vec<PricePoint>,
    /// Competitor prices observed per stay date
    #[serde(default)]
    pub competitor_prices: BTreeMap<NaiveDate, Vec<f64>>,
    /// Share of competitors with availability per stay date, in [0, 1]
    #[serde(default)]
    pub competitor_availability: BTreeMap<NaiveDate, f64>,
    /// Rooms already booked per stay date
    #[serde(default)]
    pub booked_rooms: BTreeMap<NaiveDate, u32>,
    /// Currently published price per stay date
    #[serde(default)]
    pub current_prices: BTreeMap<NaiveDate, f64>,
    /// Historical price moves used for elasticity estimation
    #[serde(default)]
    pub price_changes: Vec<PriceChangeSample>,
    /// Bookings that comparable past stay dates held at the same lead time
    #[serde(default)]
    pub pace_history: BTreeMap<NaiveDate, Vec<f64>>,
    /// Average occupancy per calendar month (1-12) from the hotel's own records
    #[serde(default)]
    pub monthly_occupancy: BTreeMap<u32, f64>,
    /// Relative search interest in [0, 1]
    #[serde(default = "default_search_interest")]
    pub search_interest: f64,
}

impl HotelSnapshot {
    pub fn new(hotel_id: impl Into<String>, as_of: NaiveDate, base_price: f64, total_rooms: u32) -> Self {
        Self {
            hotel_id: hotel_id.into(),
            as_of,
            base_price,
            total_rooms,
            history: Vec::new(),
            competitor_prices: BTreeMap::new(),
            competitor_availability: BTreeMap::new(),
            booked_rooms: BTreeMap::new(),
            current_prices: BTreeMap::new(),
            price_changes: Vec::new(),
            pace_history: BTreeMap::new(),
            monthly_occupancy: BTreeMap::new(),
            search_interest: default_search_interest(),
        }
    }

    pub fn with_history(mut self, history: Vec<PricePoint>) -> Self {
        self.history = history;
        self
    }
}

/// Aggregate view over a range of predictions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeSummary {
    pub total_days: usize,
    pub avg_predicted_price: f64,
    pub avg_confidence: f64,
    pub increase_recommendations: usize,
    pub decrease_recommendations: usize,
    pub maintain_recommendations: usize,
}

/// Predictions for every date in a horizon plus cross-factor insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangePrediction {
    pub hotel_id: String,
    pub predictions: Vec<PredictionOutput>,
    pub insights: Vec<String>,
    pub summary: RangeSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_deserialize_defaults() {
        let json = r#"{
            "hotel_id": "h-1",
            "as_of": "2024-06-01",
            "base_price": 150.0,
            "total_rooms": 40
        }"#;
        let snapshot: HotelSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.hotel_id, "h-1");
        assert!(snapshot.history.is_empty());
        assert!(snapshot.competitor_prices.is_empty());
        assert_eq!(snapshot.search_interest, 0.5);
    }

    #[test]
    fn test_new_matches_serde_defaults() {
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let snapshot = HotelSnapshot::new("h-2", as_of, 120.0, 25);
        assert_eq!(snapshot.search_interest, 0.5);
        assert!(snapshot.price_changes.is_empty());
    }
}
