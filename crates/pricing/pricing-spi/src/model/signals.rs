//! Demand, confidence, and booking-pace signals

use serde::{Deserialize, Serialize};

/// Raw demand signals for a stay date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandSignals {
    /// Occupancy percentage (0-100)
    pub occupancy: f64,
    /// Bookings per day
    pub booking_velocity: f64,
    /// Relative search interest in [0, 1]
    pub search_interest: f64,
    /// Share of competitors with rooms available, in [0, 1]
    pub competitor_availability: f64,
}

/// Data-completeness signals feeding the confidence score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceSignals {
    /// Number of historical price points available
    pub history_points: usize,
    /// Age of the most recent observation in days
    pub data_age_days: Option<u32>,
    /// Whether history covers the same calendar slot (month) as the target
    pub has_same_slot_history: bool,
    pub has_booking_data: bool,
    /// Competitor prices observed for the target date
    pub competitor_prices: Vec<f64>,
}

/// Booking pace relative to history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceStatus {
    Ahead,
    Behind,
    OnTrack,
}

/// Booking pace analysis with its suggested price multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookingPace {
    pub pace: PaceStatus,
    /// Percentage deviation from the historical mean
    pub deviation_pct: f64,
    pub multiplier: f64,
}

impl BookingPace {
    pub fn on_track() -> Self {
        Self {
            pace: PaceStatus::OnTrack,
            deviation_pct: 0.0,
            multiplier: 1.0,
        }
    }
}
