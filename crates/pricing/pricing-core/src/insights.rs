//! Human-readable market insights across trend, positioning, and volatility.

use crate::seasonality::detect_seasonality;
use crate::stats::{mean, std_dev};
use crate::trend::detect_trend;
use chrono::NaiveDate;
use pricing_api::{InsightConfig, SeasonalityConfig, TrendConfig};
use pricing_spi::{prices, PricePoint, TrendDirection};
use std::collections::BTreeMap;

/// Thresholds the insight generator reads.
#[derive(Debug, Clone, Copy)]
pub struct InsightSettings<'a> {
    pub insights: &'a InsightConfig,
    pub trend: &'a TrendConfig,
    pub seasonality: &'a SeasonalityConfig,
}

/// Produce insights in a fixed order: week-over-week, positioning,
/// competitor momentum, volatility, seasonality. Sections without enough
/// data are skipped.
pub fn market_insights(
    history: &[PricePoint],
    competitor_prices: &BTreeMap<NaiveDate, Vec<f64>>,
    settings: InsightSettings<'_>,
) -> Vec<String> {
    let mut sorted = history.to_vec();
    sorted.sort_by_key(|p| p.date);
    let own = prices(&sorted);
    let competitor_daily = daily_means(competitor_prices);

    let mut insights = Vec::new();
    insights.extend(week_over_week(&own, settings.insights));
    insights.extend(positioning(&own, &competitor_daily));
    insights.extend(competitor_momentum(&own, &competitor_daily, settings.trend));
    insights.extend(volatility(&own, settings.insights));
    if let Some(pattern) = detect_seasonality(&own, settings.seasonality) {
        insights.push(format!(
            "Detected a {}-day price cycle (strength {:.2})",
            pattern.period_days, pattern.amplitude
        ));
    }
    insights
}

/// Mean competitor price per date, in date order. Dates without quotes are skipped.
pub fn daily_means(competitor_prices: &BTreeMap<NaiveDate, Vec<f64>>) -> Vec<f64> {
    competitor_prices.values().filter_map(|quotes| mean(quotes)).collect()
}

fn week_over_week(own: &[f64], config: &InsightConfig) -> Option<String> {
    let week = config.week_days;
    if week == 0 || own.len() < week * 2 {
        return None;
    }
    let n = own.len();
    let current = mean(&own[n - week..])?;
    let previous = mean(&own[n - 2 * week..n - week])?;
    if previous == 0.0 {
        return None;
    }

    let change = (current - previous) / previous * 100.0;
    let message = if change > config.change_threshold_pct {
        format!("Your prices rose {:.1}% week over week", change)
    } else if change < -config.change_threshold_pct {
        format!("Your prices fell {:.1}% week over week", change.abs())
    } else {
        format!("Your prices are stable week over week ({:+.1}%)", change)
    };
    Some(message)
}

fn positioning(own: &[f64], competitor_daily: &[f64]) -> Option<String> {
    let latest = *own.last()?;
    let market = mean(competitor_daily)?;
    if market <= 0.0 {
        return None;
    }

    let gap = (latest - market) / market * 100.0;
    let message = if gap.abs() < 1.0 {
        format!("Priced in line with the competitor average ({:.0})", market)
    } else if gap > 0.0 {
        format!("Priced {:.1}% above the competitor average ({:.0})", gap, market)
    } else {
        format!("Priced {:.1}% below the competitor average ({:.0})", gap.abs(), market)
    };
    Some(message)
}

fn competitor_momentum(own: &[f64], competitor_daily: &[f64], config: &TrendConfig) -> Option<String> {
    let competitors = detect_trend(competitor_daily, config);
    let yours = detect_trend(own, config);
    if competitors.is_rising() && yours.direction == TrendDirection::Stable {
        Some("Competitors are raising prices while yours are flat - room to increase".to_string())
    } else {
        None
    }
}

fn volatility(own: &[f64], config: &InsightConfig) -> Option<String> {
    let average = mean(own)?;
    let spread = std_dev(own);
    if average > 0.0 && spread > average * config.volatility_ratio {
        Some(format!(
            "High price volatility: std dev {:.1} is {:.1}% of the mean",
            spread,
            spread / average * 100.0
        ))
    } else {
        None
    }
}
