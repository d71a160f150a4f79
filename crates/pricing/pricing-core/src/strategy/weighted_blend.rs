//! Weighted sum of normalized feature ratios.

use crate::stats::round_price;
use pricing_api::WeightedBlendConfig;
use pricing_spi::{
    ensure_percentage, ensure_positive, PredictionFactor, PredictionFactors, PriceStrategy,
    PricingContext, Result, StrategyEstimate,
};

/// Feature ratios around 1.0, in weight order.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FeatureRatios {
    historical: f64,
    competitor: f64,
    occupancy: f64,
    lead_time: f64,
    seasonality: f64,
    trend: f64,
}

impl FeatureRatios {
    fn from_factors(base_price: f64, factors: &PredictionFactors, config: &WeightedBlendConfig) -> Self {
        let lead_time = if factors.lead_time_days < config.short_lead_days {
            config.short_lead_factor
        } else if factors.lead_time_days < config.medium_lead_days {
            config.medium_lead_factor
        } else {
            config.long_lead_factor
        };

        Self {
            historical: factors.historical_avg / base_price,
            competitor: factors.competitor_avg / base_price,
            occupancy: config.occupancy_base + factors.occupancy / 100.0 * config.occupancy_span,
            lead_time,
            seasonality: factors.seasonality_factor,
            trend: 1.0 + factors.trend_velocity,
        }
    }

    fn all(&self) -> [f64; 6] {
        [
            self.historical,
            self.competitor,
            self.occupancy,
            self.lead_time,
            self.seasonality,
            self.trend,
        ]
    }
}

/// `round(base * Σ(ratio_i * weight_i) * event_impact)`.
pub fn ml_predict(base_price: f64, factors: &PredictionFactors, config: &WeightedBlendConfig) -> Result<f64> {
    ensure_positive("base_price", base_price)?;
    ensure_percentage("occupancy", factors.occupancy)?;

    let ratios = FeatureRatios::from_factors(base_price, factors, config);
    let blended: f64 = ratios
        .all()
        .iter()
        .zip(config.weights.all())
        .map(|(ratio, weight)| ratio * weight)
        .sum();

    Ok(round_price(base_price * blended * factors.event_impact))
}

/// Weighted deviation of each feature from neutral, largest first.
pub fn explain(base_price: f64, factors: &PredictionFactors, config: &WeightedBlendConfig) -> Result<Vec<PredictionFactor>> {
    ensure_positive("base_price", base_price)?;

    let ratios = FeatureRatios::from_factors(base_price, factors, config);
    let weights = &config.weights;
    let impact = |ratio: f64, weight: f64| ((ratio - 1.0) * weight * 100.0).round() as i32;

    let mut explained = vec![
        PredictionFactor::new(
            "Historical Average",
            impact(ratios.historical, weights.historical),
            format!("Historical average {:.0} vs base {:.0}", factors.historical_avg, base_price),
        ),
        PredictionFactor::new(
            "Competitor Pricing",
            impact(ratios.competitor, weights.competitor),
            format!("Competitor average {:.0}", factors.competitor_avg),
        ),
        PredictionFactor::new(
            "Occupancy",
            impact(ratios.occupancy, weights.occupancy),
            format!("{:.0}% occupancy", factors.occupancy),
        ),
        PredictionFactor::new(
            "Lead Time",
            impact(ratios.lead_time, weights.lead_time),
            format!("{} days until stay", factors.lead_time_days),
        ),
        PredictionFactor::new(
            "Seasonality",
            impact(ratios.seasonality, weights.seasonality),
            if ratios.seasonality >= 1.0 { "Peak season" } else { "Off-season" },
        ),
        PredictionFactor::new(
            "Price Trend",
            impact(ratios.trend, weights.trend),
            if factors.trend_velocity >= 0.0 { "Prices trending up" } else { "Prices trending down" },
        ),
    ];

    if factors.event_impact != 1.0 {
        explained.push(PredictionFactor::new(
            "Local Events",
            ((factors.event_impact - 1.0) * 100.0).round() as i32,
            "Events in area driving demand",
        ));
    }

    explained.sort_by_key(|f| std::cmp::Reverse(f.impact.abs()));
    Ok(explained)
}

/// The weighted blend behind the [`PriceStrategy`] contract.
#[derive(Debug, Clone, Default)]
pub struct WeightedBlend {
    config: WeightedBlendConfig,
}

impl WeightedBlend {
    pub fn new(config: WeightedBlendConfig) -> Self {
        Self { config }
    }
}

impl PriceStrategy for WeightedBlend {
    fn name(&self) -> &'static str {
        "weighted_blend"
    }

    fn estimate(&self, context: &PricingContext) -> Result<StrategyEstimate> {
        let price = ml_predict(context.base_price, &context.factors, &self.config)?;
        Ok(StrategyEstimate {
            price,
            factors: explain(context.base_price, &context.factors, &self.config)?,
            confidence_adjustment: 0.0,
        })
    }
}
