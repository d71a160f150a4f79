//! Monthly seasonality, holidays, and weekends.

use chrono::{Datelike, NaiveDate};
use pricing_api::CalendarConfig;
use pricing_spi::HolidayMatch;
use std::collections::BTreeMap;
use tracing::debug;

/// Seasonal multiplier for a 1-based month.
///
/// With the hotel's own monthly occupancy the factor is that month's
/// occupancy over the mean across recorded months. Months missing from the
/// record fall back to the configured table.
pub fn seasonality_factor(month: u32, monthly_occupancy: &BTreeMap<u32, f64>, config: &CalendarConfig) -> f64 {
    if monthly_occupancy.is_empty() {
        return config.monthly_multiplier(month);
    }

    let mean = monthly_occupancy.values().sum::<f64>() / monthly_occupancy.len() as f64;
    match monthly_occupancy.get(&month) {
        Some(occupancy) if mean > 0.0 => occupancy / mean,
        Some(_) => {
            debug!(month, "zero mean monthly occupancy, using table");
            config.monthly_multiplier(month)
        }
        None => config.monthly_multiplier(month),
    }
}

/// First holiday within the configured window of `date`, in the same month.
pub fn holiday_for(date: NaiveDate, config: &CalendarConfig) -> Option<HolidayMatch> {
    config
        .holidays
        .iter()
        .find(|rule| rule.month == date.month() && rule.day.abs_diff(date.day()) <= config.holiday_window_days)
        .map(|rule| HolidayMatch {
            name: rule.name.clone(),
            factor: rule.factor,
        })
}

/// Event multiplier for a date; 1.0 when no holiday matches.
pub fn event_factor(date: NaiveDate, config: &CalendarConfig) -> f64 {
    holiday_for(date, config).map(|h| h.factor).unwrap_or(1.0)
}

pub fn is_weekend(date: NaiveDate, config: &CalendarConfig) -> bool {
    config.weekend_days.contains(&date.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_table_seasonality() {
        let config = CalendarConfig::default();
        let empty = BTreeMap::new();
        assert_eq!(seasonality_factor(1, &empty, &config), 0.85);
        assert_eq!(seasonality_factor(8, &empty, &config), 1.25);
    }

    #[test]
    fn test_historical_seasonality_override() {
        let config = CalendarConfig::default();
        let history: BTreeMap<u32, f64> = [(1, 50.0), (7, 90.0), (12, 70.0)].into_iter().collect();
        assert!((seasonality_factor(7, &history, &config) - 90.0 / 70.0).abs() < 1e-12);
        assert!((seasonality_factor(1, &history, &config) - 50.0 / 70.0).abs() < 1e-12);
        // March missing from the record
        assert_eq!(seasonality_factor(3, &history, &config), 1.00);
    }

    #[test]
    fn test_holiday_window() {
        let config = CalendarConfig::default();
        assert_eq!(holiday_for(date(2024, 12, 25), &config).unwrap().name, "Christmas");
        assert_eq!(holiday_for(date(2024, 12, 27), &config).unwrap().name, "Christmas");
        assert_eq!(holiday_for(date(2024, 4, 13), &config).unwrap().name, "Passover");
        assert!(holiday_for(date(2024, 4, 18), &config).is_none());
        assert!(holiday_for(date(2024, 3, 10), &config).is_none());
    }

    #[test]
    fn test_first_holiday_wins() {
        let config = CalendarConfig::default();
        // Dec 29 is within two days of New Year Eve only
        assert_eq!(holiday_for(date(2024, 12, 29), &config).unwrap().name, "New Year Eve");
        // Oct 6 is within two days of Yom Kippur (listed before Sukkot)
        let matched = holiday_for(date(2024, 10, 6), &config).unwrap();
        assert_eq!(matched.name, "Yom Kippur");
        assert_eq!(matched.factor, 1.30);
    }

    #[test]
    fn test_window_does_not_cross_months() {
        let config = CalendarConfig::default();
        // Dec 31 + 1 day is Jan 1 which matches New Year on its own
        assert_eq!(holiday_for(date(2025, 1, 2), &config).unwrap().name, "New Year");
        // Nov 30 is close to Dec 1 but no December holiday is near
        assert!(holiday_for(date(2024, 11, 30), &config).is_none());
    }

    #[test]
    fn test_event_factor_default() {
        let config = CalendarConfig::default();
        assert_eq!(event_factor(date(2024, 2, 10), &config), 1.0);
        assert_eq!(event_factor(date(2024, 12, 31), &config), 1.50);
    }

    #[test]
    fn test_weekend_friday_saturday() {
        let config = CalendarConfig::default();
        // 2024-06-07 is a Friday
        assert!(is_weekend(date(2024, 6, 7), &config));
        assert!(is_weekend(date(2024, 6, 8), &config));
        assert!(!is_weekend(date(2024, 6, 9), &config));
        assert!(!is_weekend(date(2024, 6, 6), &config));
    }
}
