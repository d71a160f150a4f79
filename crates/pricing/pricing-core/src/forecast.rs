//! Time-series forecast: EMA level plus trend extrapolation.

use crate::smoothing::ema;
use crate::stats::round_price;
use crate::trend::detect_trend;
use pricing_api::{ForecastConfig, TrendConfig};
use pricing_spi::{ensure_positive, prices, ForecastResult, PricePoint, PricingError, Result};

/// Forecast the price `days_ahead` days out.
///
/// Fewer than `min_points` observations return the base price with the
/// configured low confidence. The forecast is bounded by the base price
/// multipliers and confidence decays with the horizon.
pub fn forecast_price(
    points: &[PricePoint],
    days_ahead: u32,
    base_price: f64,
    config: &ForecastConfig,
    trend_config: &TrendConfig,
) -> Result<ForecastResult> {
    ensure_positive("base_price", base_price)?;

    if points.len() < config.min_points {
        return Ok(ForecastResult {
            forecast: base_price,
            confidence: config.insufficient_confidence,
        });
    }

    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.date);
    let all = prices(&sorted);
    let recent = &all[all.len().saturating_sub(config.lookback)..];

    let smoothed = ema(recent, config.ema_period)?;
    let latest = *smoothed
        .last()
        .ok_or_else(|| PricingError::invalid("points", "no prices after lookback"))?;

    let trend = detect_trend(recent, trend_config);
    let horizon = f64::from(days_ahead);
    let projected = round_price(latest + trend.velocity * horizon * latest);

    let time_decay = (1.0 - horizon / config.decay_horizon_days).max(config.min_time_decay);
    let confidence = (trend.confidence * time_decay).clamp(0.0, 1.0);

    let lower = base_price * config.min_multiplier;
    let upper = base_price * config.max_multiplier;

    Ok(ForecastResult {
        forecast: projected.clamp(lower, upper),
        confidence,
    })
}
