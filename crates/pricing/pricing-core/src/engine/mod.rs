//! Per-date price prediction and parallel range prediction.

mod request;

pub use request::{DateRequest, PreparedSnapshot};
pub use tokio_util::sync::CancellationToken;

use crate::confidence::confidence_score;
use crate::demand::{demand_level, demand_score, recommendation};
use crate::elasticity::optimize_price;
use crate::forecast::forecast_price;
use crate::insights::{market_insights, InsightSettings};
use crate::revenue::{forecast_month, forecast_year};
use crate::stats::{mean, round_price};
use crate::strategy::create_strategy;
use chrono::{Duration, NaiveDate};
use pricing_api::EngineConfig;
use pricing_spi::{
    BookingPace, HotelSnapshot, MonthlyForecast, PaceStatus, PredictionFactor, PredictionOutput,
    PriceRange, PriceStrategy, PricingError, RangePrediction, RangeSummary, Recommendation, Result,
};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Orchestrates strategy, time-series forecast, optimizer, demand, and
/// confidence for each stay date.
pub struct PricingEngine {
    config: EngineConfig,
    strategy: Box<dyn PriceStrategy>,
}

impl std::fmt::Debug for PricingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricingEngine")
            .field("strategy", &self.strategy.name())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl PricingEngine {
    /// Validate the configuration and build the selected strategy.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let strategy = create_strategy(&config.strategy);
        Ok(Self { config, strategy })
    }

    /// Validate the configuration and price with a caller-supplied strategy.
    ///
    /// The `strategy` section of `config` is ignored.
    pub fn with_strategy(config: EngineConfig, strategy: Box<dyn PriceStrategy>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, strategy })
    }

    pub fn with_defaults() -> Self {
        let config = EngineConfig::default();
        let strategy = create_strategy(&config.strategy);
        Self { config, strategy }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Horizon bounded to the configured range.
    pub fn clamp_horizon(&self, days: u32) -> u32 {
        self.config.horizon.clamp(days)
    }

    /// Predict the price for a single stay date.
    pub fn predict(&self, request: &DateRequest<'_>) -> Result<PredictionOutput> {
        let config = &self.config;
        let base_price = request.context.base_price;

        let score = demand_score(&request.demand, &config.demand);
        let mut context = request.context;
        context.demand_score = score;

        let estimate = self.strategy.estimate(&context)?;
        let time_series = forecast_price(
            request.history,
            request.days_ahead,
            base_price,
            &config.forecast,
            &config.trend,
        )?;

        let blend = &config.blend;
        let mut combined = round_price(estimate.price * blend.model_weight + time_series.forecast * blend.series_weight);
        if let Some(pace) = &request.booking_pace {
            combined = round_price(combined * pace.multiplier);
        }

        // Sub-unit base prices can round the blend down to zero
        let optimize = request.days_ahead <= blend.optimize_within_days && combined > 0.0;
        let optimization = match request.occupancy {
            Some(occupancy) if optimize => Some(optimize_price(
                combined,
                occupancy,
                request.total_rooms,
                request.elasticity,
                &config.optimizer,
            )?),
            _ => None,
        };

        let price_range = PriceRange::new(
            base_price * config.forecast.min_multiplier,
            base_price * config.forecast.max_multiplier,
        );
        let predicted_price = price_range.clamp(combined);
        let recommended_price = price_range.clamp(
            optimization
                .as_ref()
                .map(|o| o.optimal_price)
                .unwrap_or(combined),
        );

        let occupancy = request.occupancy.unwrap_or(0.0);
        let mut factors = estimate.factors;
        if let Some(factor) = request.booking_pace.as_ref().and_then(pace_factor) {
            factors.push(factor);
        }
        factors.sort_by_key(|f| std::cmp::Reverse(f.impact.unsigned_abs()));

        debug!(
            date = %request.date,
            strategy = self.strategy.name(),
            model_price = estimate.price,
            series_price = time_series.forecast,
            recommended_price,
            "predicted stay date"
        );

        Ok(PredictionOutput {
            date: request.date,
            predicted_price,
            recommended_price,
            confidence_score: confidence_score(
                &request.confidence,
                estimate.confidence_adjustment,
                request.days_ahead,
                &config.confidence,
            ),
            demand_level: demand_level(score, occupancy, &config.demand),
            demand_score: score,
            recommendation: recommendation(recommended_price, request.context.current_price, blend),
            price_range,
            factors,
            strategy: self.strategy.name().to_string(),
            time_series,
            optimization,
            booking_pace: request.booking_pace,
        })
    }

    /// Predict every date from `as_of` over the clamped horizon.
    pub fn predict_for_range(&self, snapshot: &HotelSnapshot, horizon_days: u32) -> Result<RangePrediction> {
        self.predict_for_range_with_cancel(snapshot, horizon_days, &CancellationToken::new())
    }

    /// Like [`predict_for_range`](Self::predict_for_range), checking `cancel`
    /// before each date. Output stays in date order.
    pub fn predict_for_range_with_cancel(
        &self,
        snapshot: &HotelSnapshot,
        horizon_days: u32,
        cancel: &CancellationToken,
    ) -> Result<RangePrediction> {
        let prepared = PreparedSnapshot::new(snapshot, &self.config)?;
        let horizon = self.clamp_horizon(horizon_days);
        let dates: Vec<_> = (0..horizon)
            .map(|offset| snapshot.as_of + Duration::days(i64::from(offset)))
            .collect();

        let predictions = dates
            .par_iter()
            .map(|date| {
                if cancel.is_cancelled() {
                    return Err(PricingError::Cancelled);
                }
                self.predict(&prepared.request_for(*date, &self.config))
            })
            .collect::<Result<Vec<_>>>();

        let predictions = match predictions {
            Ok(predictions) => predictions,
            Err(PricingError::Cancelled) => {
                warn!(hotel_id = %snapshot.hotel_id, horizon, "range prediction cancelled");
                return Err(PricingError::Cancelled);
            }
            Err(e) => return Err(e),
        };

        let summary = summarize(&predictions);
        info!(
            hotel_id = %snapshot.hotel_id,
            days = summary.total_days,
            avg_price = summary.avg_predicted_price,
            avg_confidence = summary.avg_confidence,
            "range prediction complete"
        );

        Ok(RangePrediction {
            hotel_id: snapshot.hotel_id.clone(),
            predictions,
            insights: self.insights(snapshot),
            summary,
        })
    }

    /// Market insights from history and competitor quotes observed up to `as_of`.
    pub fn insights(&self, snapshot: &HotelSnapshot) -> Vec<String> {
        let observed: BTreeMap<NaiveDate, Vec<f64>> = snapshot
            .competitor_prices
            .range(..=snapshot.as_of)
            .map(|(date, quotes)| (*date, quotes.clone()))
            .collect();
        market_insights(
            &snapshot.history,
            &observed,
            InsightSettings {
                insights: &self.config.insights,
                trend: &self.config.trend,
                seasonality: &self.config.seasonality,
            },
        )
    }

    pub fn forecast_revenue(&self, year: i32, total_rooms: u32, base_price: f64) -> Result<Vec<MonthlyForecast>> {
        forecast_year(year, total_rooms, base_price, &self.config.revenue)
    }

    pub fn forecast_revenue_month(
        &self,
        year: i32,
        month: u32,
        total_rooms: u32,
        base_price: f64,
        budget: Option<f64>,
    ) -> Result<MonthlyForecast> {
        forecast_month(year, month, total_rooms, base_price, budget, &self.config.revenue)
    }
}

fn pace_factor(pace: &BookingPace) -> Option<PredictionFactor> {
    let direction = match pace.pace {
        PaceStatus::OnTrack => return None,
        PaceStatus::Ahead => "ahead of",
        PaceStatus::Behind => "behind",
    };
    Some(PredictionFactor::new(
        "Booking Pace",
        ((pace.multiplier - 1.0) * 100.0).round() as i32,
        format!("Bookings {:.1}% {} historical pace", pace.deviation_pct.abs(), direction),
    ))
}

fn summarize(predictions: &[PredictionOutput]) -> RangeSummary {
    let count = |kind: Recommendation| predictions.iter().filter(|p| p.recommendation == kind).count();
    let prices: Vec<f64> = predictions.iter().map(|p| p.predicted_price).collect();
    let confidences: Vec<f64> = predictions.iter().map(|p| p.confidence_score).collect();

    RangeSummary {
        total_days: predictions.len(),
        avg_predicted_price: mean(&prices).unwrap_or(0.0),
        avg_confidence: mean(&confidences).unwrap_or(0.0),
        increase_recommendations: count(Recommendation::Increase),
        decrease_recommendations: count(Recommendation::Decrease),
        maintain_recommendations: count(Recommendation::Maintain),
    }
}
