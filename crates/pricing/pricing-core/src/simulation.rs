//! Seeded synthetic market data for demos and tests.
//!
//! Nothing on the forecasting path uses this module; it only fabricates
//! inputs. Identical seeds produce identical data.

use crate::calendar::is_weekend;
use crate::stats::round_price;
use chrono::{Datelike, Duration, NaiveDate};
use pricing_api::CalendarConfig;
use pricing_spi::{HotelSnapshot, PriceChangeSample, PricePoint};
use rand::prelude::*;
use std::collections::BTreeMap;

/// Generator of price histories, competitor quotes, and bookings.
#[derive(Debug, Clone)]
pub struct MarketSimulator {
    rng: StdRng,
    calendar: CalendarConfig,
    weekend_premium: f64,
    /// Relative jitter, e.g. 0.1 for ±10%
    jitter: f64,
    competitors: usize,
}

impl MarketSimulator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            calendar: CalendarConfig::default(),
            weekend_premium: 1.2,
            jitter: 0.1,
            competitors: 3,
        }
    }

    pub fn with_calendar(mut self, calendar: CalendarConfig) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter.abs();
        self
    }

    pub fn with_competitors(mut self, competitors: usize) -> Self {
        self.competitors = competitors;
        self
    }

    /// Deterministic part of the price for a date.
    fn level(&self, base_price: f64, date: NaiveDate) -> f64 {
        let weekend = if is_weekend(date, &self.calendar) {
            self.weekend_premium
        } else {
            1.0
        };
        base_price * self.calendar.monthly_multiplier(date.month()) * weekend
    }

    fn noise(&mut self) -> f64 {
        if self.jitter == 0.0 {
            1.0
        } else {
            1.0 + self.rng.gen_range(-self.jitter..=self.jitter)
        }
    }

    /// Daily prices and occupancy for `days` days starting at `start`.
    pub fn price_history(&mut self, base_price: f64, start: NaiveDate, days: u32) -> Vec<PricePoint> {
        (0..days)
            .map(|offset| {
                let date = start + Duration::days(i64::from(offset));
                let level = self.level(base_price, date);
                let price = round_price(level * self.noise());
                let occupancy = (level / base_price * 60.0 * self.noise()).clamp(0.0, 100.0);
                PricePoint::new(date, price).with_occupancy(occupancy)
            })
            .collect()
    }

    /// Competitor quotes for each date in `[start, start + days)`.
    pub fn competitor_quotes(&mut self, base_price: f64, start: NaiveDate, days: u32) -> BTreeMap<NaiveDate, Vec<f64>> {
        (0..days)
            .map(|offset| {
                let date = start + Duration::days(i64::from(offset));
                let level = self.level(base_price, date);
                let quotes = (0..self.competitors)
                    .map(|_| round_price(level * self.rng.gen_range(0.85..=1.25)))
                    .collect();
                (date, quotes)
            })
            .collect()
    }

    /// Historical price moves with an elasticity near `elasticity`.
    pub fn price_changes(&mut self, base_price: f64, elasticity: f64, samples: usize) -> Vec<PriceChangeSample> {
        (0..samples)
            .map(|_| {
                let change = self.rng.gen_range(-0.15..=0.15);
                let change = if change == 0.0 { 0.05 } else { change };
                let old_occupancy = self.rng.gen_range(45.0..=85.0);
                let response = elasticity * self.noise();
                let new_occupancy = (old_occupancy * (1.0 + change * response)).clamp(1.0, 100.0);
                PriceChangeSample::new(
                    base_price,
                    base_price * (1.0 + change),
                    old_occupancy,
                    new_occupancy,
                )
            })
            .collect()
    }

    /// A complete snapshot: 90 days of history before `as_of` and
    /// `horizon_days` of forward-looking market data.
    pub fn snapshot(
        &mut self,
        hotel_id: &str,
        as_of: NaiveDate,
        base_price: f64,
        total_rooms: u32,
        horizon_days: u32,
    ) -> HotelSnapshot {
        let history_start = as_of - Duration::days(90);
        let history = self.price_history(base_price, history_start, 90);
        let competitor_prices = self.competitor_quotes(base_price, history_start, 90 + horizon_days + 1);

        let mut snapshot = HotelSnapshot::new(hotel_id, as_of, base_price, total_rooms).with_history(history);
        snapshot.competitor_prices = competitor_prices;
        snapshot.price_changes = self.price_changes(base_price, -1.2, 8);

        for offset in 0..=horizon_days {
            let date = as_of + Duration::days(i64::from(offset));
            let level = self.level(base_price, date);
            // Bookings thin out with lead time
            let fill = (level / base_price * 0.7 * (1.0 - f64::from(offset) / 120.0).max(0.1) * self.noise())
                .clamp(0.0, 1.0);
            snapshot
                .booked_rooms
                .insert(date, (fill * f64::from(total_rooms)).round() as u32);
            snapshot
                .current_prices
                .insert(date, round_price(level * self.noise()));
            snapshot
                .competitor_availability
                .insert(date, self.rng.gen_range(0.2..=0.9));
        }
        snapshot
    }
}
