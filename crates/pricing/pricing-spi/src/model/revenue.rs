//! Calendar and monthly revenue models

use serde::{Deserialize, Serialize};

/// A holiday or event matched against a stay date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayMatch {
    pub name: String,
    pub factor: f64,
}

/// Monthly occupancy, ADR, and revenue projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyForecast {
    /// Calendar month, 1-12
    pub month: u32,
    pub days: u32,
    /// Occupancy percentage (0-100)
    pub predicted_occupancy: f64,
    /// Average daily rate
    pub predicted_adr: f64,
    pub predicted_room_nights: u64,
    pub predicted_revenue: f64,
    /// Revenue per available room
    pub predicted_revpar: f64,
    pub budget_revenue: f64,
    pub budget_variance_pct: f64,
    pub on_track: bool,
}
