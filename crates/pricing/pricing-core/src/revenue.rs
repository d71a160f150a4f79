//! Monthly occupancy, ADR, and revenue projection against budget.

use chrono::NaiveDate;
use pricing_api::RevenueConfig;
use pricing_spi::{ensure_positive, MonthlyForecast, PricingError, Result};

/// Project one month. `budget` overrides the default budget of
/// `rooms * base * days * budget_occupancy`.
pub fn forecast_month(
    year: i32,
    month: u32,
    total_rooms: u32,
    base_price: f64,
    budget: Option<f64>,
    config: &RevenueConfig,
) -> Result<MonthlyForecast> {
    ensure_positive("base_price", base_price)?;
    if total_rooms == 0 {
        return Err(PricingError::invalid("total_rooms", "must be greater than zero"));
    }
    let season = config
        .season(month)
        .ok_or_else(|| PricingError::invalid("month", format!("no season configured for {}", month)))?;
    let days = days_in_month(year, month)?;

    let rooms = f64::from(total_rooms);
    let available = rooms * f64::from(days);
    let room_nights = (available * season.occupancy).round();
    let adr = base_price * season.adr_multiplier;
    let revenue = room_nights * adr;

    let budget_revenue = match budget {
        Some(value) => {
            ensure_positive("budget", value)?;
            value
        }
        None => available * base_price * config.budget_occupancy,
    };

    Ok(MonthlyForecast {
        month,
        days,
        predicted_occupancy: season.occupancy * 100.0,
        predicted_adr: adr,
        predicted_room_nights: room_nights as u64,
        predicted_revenue: revenue,
        predicted_revpar: revenue / available,
        budget_revenue,
        budget_variance_pct: (revenue - budget_revenue) / budget_revenue * 100.0,
        on_track: revenue >= budget_revenue * config.on_track_ratio,
    })
}

/// Project all twelve months of `year` with default budgets.
pub fn forecast_year(year: i32, total_rooms: u32, base_price: f64, config: &RevenueConfig) -> Result<Vec<MonthlyForecast>> {
    (1..=12)
        .map(|month| forecast_month(year, month, total_rooms, base_price, None, config))
        .collect()
}

fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| PricingError::invalid("month", format!("{}-{} is not a valid month", year, month)))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| PricingError::invalid("year", format!("{} is out of range", year)))?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}
