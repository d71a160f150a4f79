//! Calendar tables: monthly seasonality, holidays, weekends, and revenue seasons.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A fixed-date holiday or event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayRule {
    /// Calendar month, 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
    pub name: String,
    /// Price multiplier applied around the date
    pub factor: f64,
}

impl HolidayRule {
    pub fn new(month: u32, day: u32, name: impl Into<String>, factor: f64) -> Self {
        Self {
            month,
            day,
            name: name.into(),
            factor,
        }
    }
}

/// Seasonality and event calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Price multiplier per month, January first
    pub monthly_multipliers: Vec<f64>,
    /// Checked in order; the first match wins
    pub holidays: Vec<HolidayRule>,
    /// A holiday matches dates within this many days in the same month
    pub holiday_window_days: u32,
    pub weekend_days: Vec<Weekday>,
}

impl CalendarConfig {
    /// Multiplier for a 1-based month, or 1.0 when the table has no entry.
    pub fn monthly_multiplier(&self, month: u32) -> f64 {
        month
            .checked_sub(1)
            .and_then(|idx| self.monthly_multipliers.get(idx as usize))
            .copied()
            .unwrap_or(1.0)
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            monthly_multipliers: vec![
                0.85, 0.90, 1.00, 1.10, 1.05, 1.20, 1.25, 1.25, 1.10, 1.00, 0.95, 1.15,
            ],
            holidays: vec![
                HolidayRule::new(1, 1, "New Year", 1.30),
                HolidayRule::new(4, 15, "Passover", 1.40),
                HolidayRule::new(5, 14, "Independence Day", 1.35),
                HolidayRule::new(9, 25, "Rosh Hashanah", 1.40),
                HolidayRule::new(10, 4, "Yom Kippur", 1.30),
                HolidayRule::new(10, 9, "Sukkot", 1.35),
                HolidayRule::new(12, 25, "Christmas", 1.30),
                HolidayRule::new(12, 31, "New Year Eve", 1.50),
            ],
            holiday_window_days: 2,
            weekend_days: vec![Weekday::Fri, Weekday::Sat],
        }
    }
}

/// Expected occupancy and rate level for one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeason {
    /// Occupancy as a fraction in [0, 1]
    pub occupancy: f64,
    /// ADR multiplier relative to the base price
    pub adr_multiplier: f64,
}

impl MonthlySeason {
    pub const fn new(occupancy: f64, adr_multiplier: f64) -> Self {
        Self {
            occupancy,
            adr_multiplier,
        }
    }
}

/// Monthly revenue forecast settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueConfig {
    /// One entry per month, January first
    pub seasons: Vec<MonthlySeason>,
    /// Occupancy assumed by the default budget
    pub budget_occupancy: f64,
    /// Revenue at or above this share of budget is on track
    pub on_track_ratio: f64,
}

impl RevenueConfig {
    /// Season for a 1-based month, if configured.
    pub fn season(&self, month: u32) -> Option<MonthlySeason> {
        month
            .checked_sub(1)
            .and_then(|idx| self.seasons.get(idx as usize))
            .copied()
    }
}

impl Default for RevenueConfig {
    fn default() -> Self {
        Self {
            seasons: vec![
                MonthlySeason::new(0.55, 0.85),
                MonthlySeason::new(0.60, 0.90),
                MonthlySeason::new(0.70, 1.05),
                MonthlySeason::new(0.75, 1.15),
                MonthlySeason::new(0.72, 1.10),
                MonthlySeason::new(0.80, 1.25),
                MonthlySeason::new(0.85, 1.35),
                MonthlySeason::new(0.88, 1.40),
                MonthlySeason::new(0.75, 1.15),
                MonthlySeason::new(0.70, 1.05),
                MonthlySeason::new(0.60, 0.90),
                MonthlySeason::new(0.65, 0.95),
            ],
            budget_occupancy: 0.7,
            on_track_ratio: 0.95,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_multiplier_lookup() {
        let calendar = CalendarConfig::default();
        assert_eq!(calendar.monthly_multiplier(1), 0.85);
        assert_eq!(calendar.monthly_multiplier(7), 1.25);
        assert_eq!(calendar.monthly_multiplier(12), 1.15);
        assert_eq!(calendar.monthly_multiplier(0), 1.0);
        assert_eq!(calendar.monthly_multiplier(13), 1.0);
    }

    #[test]
    fn test_default_weekend_is_friday_and_saturday() {
        let calendar = CalendarConfig::default();
        assert_eq!(calendar.weekend_days, vec![Weekday::Fri, Weekday::Sat]);
    }

    #[test]
    fn test_revenue_seasons_cover_the_year() {
        let revenue = RevenueConfig::default();
        assert_eq!(revenue.seasons.len(), 12);
        assert_eq!(revenue.season(8), Some(MonthlySeason::new(0.88, 1.40)));
        assert!(revenue.season(0).is_none());
    }

    #[test]
    fn test_calendar_json_round_trip() {
        let calendar = CalendarConfig::default();
        let json = serde_json::to_string(&calendar).unwrap();
        let parsed: CalendarConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, calendar);
    }
}
