//! Per-date inputs derived from a hotel snapshot.

use crate::calendar::{holiday_for, is_weekend, seasonality_factor};
use crate::elasticity::estimate_elasticity;
use crate::insights::daily_means;
use crate::pace::analyze_booking_pace;
use crate::stats::mean;
use crate::trend::detect_trend;
use chrono::{Datelike, NaiveDate};
use pricing_api::EngineConfig;
use pricing_spi::{
    ensure_positive, prices, BookingPace, ConfidenceSignals, DemandSignals, HotelSnapshot,
    PredictionFactors, PricePoint, PricingContext, PricingError, Result,
};
use std::collections::{BTreeMap, BTreeSet};

/// Everything the engine needs to price one stay date.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRequest<'a> {
    pub date: NaiveDate,
    pub days_ahead: u32,
    /// Price history, any order
    pub history: &'a [PricePoint],
    /// Strategy inputs; `demand_score` is filled in by the engine
    pub context: PricingContext,
    /// Known occupancy for the date, if bookings were reported
    pub occupancy: Option<f64>,
    pub total_rooms: u32,
    pub elasticity: f64,
    pub demand: DemandSignals,
    pub confidence: ConfidenceSignals,
    pub booking_pace: Option<BookingPace>,
}

/// Snapshot-wide values computed once per range.
#[derive(Debug, Clone)]
pub struct PreparedSnapshot<'a> {
    snapshot: &'a HotelSnapshot,
    history: Vec<PricePoint>,
    historical_avg: f64,
    trend_velocity: f64,
    momentum: f64,
    elasticity: f64,
    covered_months: BTreeSet<u32>,
    data_age_days: Option<u32>,
}

impl<'a> PreparedSnapshot<'a> {
    pub fn new(snapshot: &'a HotelSnapshot, config: &EngineConfig) -> Result<Self> {
        ensure_positive("base_price", snapshot.base_price)?;
        if snapshot.total_rooms == 0 {
            return Err(PricingError::invalid("total_rooms", "must be greater than zero"));
        }
        for point in &snapshot.history {
            ensure_positive("history.price", point.price)?;
        }

        let mut history = snapshot.history.clone();
        history.sort_by_key(|p| p.date);
        let series = prices(&history);

        let historical_avg = mean(&series).unwrap_or(snapshot.base_price);
        let trend_velocity = detect_trend(&series, &config.trend).velocity;
        let elasticity = estimate_elasticity(&snapshot.price_changes, &config.optimizer)?;
        let momentum = competitor_momentum(snapshot, config);
        let covered_months = history.iter().map(|p| p.date.month()).collect();
        let data_age_days = history
            .last()
            .map(|p| snapshot.as_of.signed_duration_since(p.date).num_days().max(0) as u32);

        Ok(Self {
            snapshot,
            history,
            historical_avg,
            trend_velocity,
            momentum,
            elasticity,
            covered_months,
            data_age_days,
        })
    }

    pub fn snapshot(&self) -> &HotelSnapshot {
        self.snapshot
    }

    /// Price history sorted by date.
    pub fn history(&self) -> &[PricePoint] {
        &self.history
    }

    pub fn elasticity(&self) -> f64 {
        self.elasticity
    }

    /// Competitor price momentum in [-1, 1].
    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Assemble the request for one stay date.
    pub fn request_for(&self, date: NaiveDate, config: &EngineConfig) -> DateRequest<'_> {
        let snapshot = self.snapshot;
        let days_ahead = date
            .signed_duration_since(snapshot.as_of)
            .num_days()
            .clamp(0, i64::from(u32::MAX)) as u32;

        let current_price = snapshot
            .current_prices
            .get(&date)
            .copied()
            .filter(|p| *p > 0.0)
            .unwrap_or(snapshot.base_price);

        let quotes: Vec<f64> = snapshot
            .competitor_prices
            .get(&date)
            .map(|q| q.iter().copied().filter(|p| *p > 0.0).collect())
            .unwrap_or_default();
        let competitor_avg = mean(&quotes).unwrap_or(current_price * config.blend.missing_competitor_ratio);

        let booked = snapshot.booked_rooms.get(&date).copied();
        let rooms = f64::from(snapshot.total_rooms);
        let occupancy = booked.map(|b| (f64::from(b) / rooms * 100.0).min(100.0));
        let booking_velocity = booked
            .map(|b| f64::from(b) / config.demand.velocity_window_days)
            .unwrap_or(0.0);

        let holiday = holiday_for(date, &config.calendar);
        let factors = PredictionFactors {
            historical_avg: self.historical_avg,
            competitor_avg,
            occupancy: occupancy.unwrap_or(0.0),
            lead_time_days: days_ahead,
            seasonality_factor: seasonality_factor(date.month(), &snapshot.monthly_occupancy, &config.calendar),
            trend_velocity: self.trend_velocity,
            event_impact: holiday.as_ref().map(|h| h.factor).unwrap_or(1.0),
        };

        let booking_pace = match (booked, snapshot.pace_history.get(&date)) {
            (Some(current), Some(past)) if !past.is_empty() => {
                Some(analyze_booking_pace(f64::from(current), past, &config.booking_pace))
            }
            _ => None,
        };

        DateRequest {
            date,
            days_ahead,
            history: &self.history,
            context: PricingContext {
                base_price: snapshot.base_price,
                current_price,
                factors,
                is_weekend: is_weekend(date, &config.calendar),
                is_holiday: holiday.is_some(),
                demand_score: 0.0,
                price_history_trend: self.momentum,
            },
            occupancy,
            total_rooms: snapshot.total_rooms,
            elasticity: self.elasticity,
            demand: DemandSignals {
                occupancy: occupancy.unwrap_or(0.0),
                booking_velocity,
                search_interest: snapshot.search_interest,
                competitor_availability: snapshot.competitor_availability.get(&date).copied().unwrap_or(0.0),
            },
            confidence: ConfidenceSignals {
                history_points: self.history.len(),
                data_age_days: self.data_age_days,
                has_same_slot_history: self.covered_months.contains(&date.month()),
                has_booking_data: booked.is_some(),
                competitor_prices: quotes,
            },
            booking_pace,
        }
    }
}

/// Mean of the most recent day-over-day competitor moves, scaled into [-1, 1].
///
/// Only quotes for dates up to `as_of` count.
fn competitor_momentum(snapshot: &HotelSnapshot, config: &EngineConfig) -> f64 {
    let observed: BTreeMap<NaiveDate, Vec<f64>> = snapshot
        .competitor_prices
        .range(..=snapshot.as_of)
        .map(|(date, quotes)| (*date, quotes.clone()))
        .collect();
    let daily = daily_means(&observed);
    if daily.len() < 2 {
        return 0.0;
    }

    let changes: Vec<f64> = daily
        .windows(2)
        .filter(|pair| pair[0] > 0.0)
        .map(|pair| (pair[1] - pair[0]) / pair[0] * 100.0)
        .collect();
    let recent = &changes[changes.len().saturating_sub(config.blend.momentum_window)..];
    match mean(recent) {
        Some(avg) => (avg / config.blend.momentum_divisor).clamp(-1.0, 1.0),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    fn snapshot() -> HotelSnapshot {
        let history = (1..=20)
            .map(|i| PricePoint::new(as_of() - Duration::days(i), 150.0))
            .collect();
        let mut snapshot = HotelSnapshot::new("h-1", as_of(), 150.0, 40).with_history(history);
        let target = as_of() + Duration::days(4);
        snapshot.current_prices.insert(target, 160.0);
        snapshot.competitor_prices.insert(target, vec![170.0, 190.0]);
        snapshot.booked_rooms.insert(target, 30);
        snapshot.competitor_availability.insert(target, 0.25);
        snapshot
    }

    #[test]
    fn test_request_for_known_date() {
        let config = EngineConfig::default();
        let snapshot = snapshot();
        let prepared = PreparedSnapshot::new(&snapshot, &config).unwrap();
        let target = as_of() + Duration::days(4);
        let request = prepared.request_for(target, &config);

        assert_eq!(request.days_ahead, 4);
        assert_eq!(request.context.current_price, 160.0);
        assert_eq!(request.context.factors.competitor_avg, 180.0);
        assert_eq!(request.occupancy, Some(75.0));
        assert_eq!(request.context.factors.historical_avg, 150.0);
        assert!((request.demand.booking_velocity - 30.0 / 7.0).abs() < 1e-12);
        assert_eq!(request.demand.competitor_availability, 0.25);
        assert!(request.confidence.has_booking_data);
        assert!(request.confidence.has_same_slot_history);
        assert_eq!(request.confidence.data_age_days, Some(1));
        assert_eq!(request.confidence.competitor_prices, vec![170.0, 190.0]);
        assert_eq!(request.elasticity, -1.2);
        assert!(request.booking_pace.is_none());
        // 2024-06-07 is a Friday
        assert!(request.context.is_weekend);
    }

    #[test]
    fn test_request_for_unknown_date_uses_fallbacks() {
        let config = EngineConfig::default();
        let snapshot = snapshot();
        let prepared = PreparedSnapshot::new(&snapshot, &config).unwrap();
        let request = prepared.request_for(as_of() + Duration::days(40), &config);

        assert_eq!(request.context.current_price, 150.0);
        assert!((request.context.factors.competitor_avg - 142.5).abs() < 1e-9);
        assert_eq!(request.occupancy, None);
        assert!(!request.confidence.has_booking_data);
        assert!(request.confidence.competitor_prices.is_empty());
    }

    #[test]
    fn test_holiday_date() {
        let config = EngineConfig::default();
        let mut snapshot = snapshot();
        snapshot.as_of = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        let prepared = PreparedSnapshot::new(&snapshot, &config).unwrap();
        let request = prepared.request_for(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(), &config);
        assert!(request.context.is_holiday);
        assert_eq!(request.context.factors.event_impact, 1.50);
        assert_eq!(request.days_ahead, 11);
        assert_eq!(request.context.factors.seasonality_factor, 1.15);
    }

    #[test]
    fn test_empty_history_defaults() {
        let config = EngineConfig::default();
        let snapshot = HotelSnapshot::new("h-2", as_of(), 120.0, 10);
        let prepared = PreparedSnapshot::new(&snapshot, &config).unwrap();
        let request = prepared.request_for(as_of(), &config);
        assert_eq!(request.context.factors.historical_avg, 120.0);
        assert_eq!(request.context.factors.trend_velocity, 0.0);
        assert_eq!(request.confidence.data_age_days, None);
        assert_eq!(prepared.momentum(), 0.0);
    }

    #[test]
    fn test_booking_pace_from_history() {
        let config = EngineConfig::default();
        let mut snapshot = snapshot();
        let target = as_of() + Duration::days(4);
        snapshot.pace_history.insert(target, vec![20.0, 20.0]);
        let prepared = PreparedSnapshot::new(&snapshot, &config).unwrap();
        let pace = prepared.request_for(target, &config).booking_pace.unwrap();
        // 30 booked vs 20 historically: +50%, capped at +15%
        assert!((pace.multiplier - 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_competitor_momentum() {
        let config = EngineConfig::default();
        let mut snapshot = snapshot();
        for i in 0..5 {
            let date = as_of() - Duration::days(5 - i);
            snapshot.competitor_prices.insert(date, vec![100.0 * 1.05f64.powi(i as i32)]);
        }
        let prepared = PreparedSnapshot::new(&snapshot, &config).unwrap();
        // +5% per day averages to 5, scaled by 1/10
        assert!((prepared.momentum() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_snapshot() {
        let config = EngineConfig::default();
        let zero_rooms = HotelSnapshot::new("h", as_of(), 100.0, 0);
        assert!(PreparedSnapshot::new(&zero_rooms, &config).is_err());
        let bad_price = HotelSnapshot::new("h", as_of(), 0.0, 10);
        assert!(PreparedSnapshot::new(&bad_price, &config).is_err());
    }
}
