//! Chain of multiplicative pricing factors, each with an explanation.

use crate::stats::round_price;
use pricing_api::ChainConfig;
use pricing_spi::{
    ensure_positive, ChainInput, PredictionFactor, PriceRange, PriceStrategy, PricingContext,
    Result, StrategyEstimate,
};

/// Output of one pass through the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainPrediction {
    /// `round(current_price * Π multipliers)`
    pub predicted_price: f64,
    /// Predicted price clamped into `price_range`
    pub recommended_price: f64,
    pub price_range: PriceRange,
    /// Sorted by absolute impact, largest first
    pub factors: Vec<PredictionFactor>,
    /// Additive adjustment to the final confidence score
    pub confidence_adjustment: f64,
}

/// Accumulates the running multiplier and the explanation list.
struct Chain {
    multiplier: f64,
    confidence: f64,
    factors: Vec<PredictionFactor>,
}

impl Chain {
    fn new() -> Self {
        Self {
            multiplier: 1.0,
            confidence: 0.0,
            factors: Vec::new(),
        }
    }

    fn apply(&mut self, name: &str, factor: f64, description: impl Into<String>) {
        self.multiplier *= factor;
        self.factors
            .push(PredictionFactor::new(name, impact_of(factor), description));
    }
}

fn impact_of(factor: f64) -> i32 {
    ((factor - 1.0) * 100.0).round() as i32
}

/// Run the factor chain for one stay date.
pub fn predict_price(input: &ChainInput, config: &ChainConfig) -> Result<ChainPrediction> {
    ensure_positive("current_price", input.current_price)?;

    let mut chain = Chain::new();

    // Day of week
    if input.is_weekend {
        chain.apply("Day of Week", config.weekend_multiplier, "Weekend - higher demand expected");
    } else {
        chain.apply("Day of Week", 1.0, "Weekday - normal demand");
    }

    if input.is_holiday {
        chain.apply(
            "Holiday",
            config.holiday_multiplier,
            "Holiday period - significantly higher demand",
        );
        chain.confidence += config.holiday_confidence;
    }

    // Urgency
    let days = input.days_until_date;
    if days <= config.last_minute_days {
        chain.apply(
            "Last Minute",
            config.last_minute_multiplier,
            "Very close date - premium pricing opportunity",
        );
        chain.confidence += config.last_minute_confidence;
    } else if days <= config.short_notice_days {
        chain.apply(
            "Short Notice",
            config.short_notice_multiplier,
            "Within a week - moderate urgency premium",
        );
        chain.confidence += config.short_notice_confidence;
    } else if days > config.far_future_days {
        chain.apply(
            "Far Future",
            config.far_future_multiplier,
            "Far ahead booking - slight discount to encourage early bookings",
        );
        chain.confidence += config.far_future_confidence;
    }

    // Occupancy
    let occupancy = input.current_occupancy;
    if occupancy >= config.peak_occupancy {
        chain.apply(
            "High Occupancy",
            config.peak_occupancy_multiplier,
            format!("{:.0}% occupancy - premium pricing recommended", occupancy),
        );
    } else if occupancy >= config.good_occupancy {
        chain.apply(
            "Good Occupancy",
            config.good_occupancy_multiplier,
            format!("{:.0}% occupancy - moderate price increase", occupancy),
        );
    } else if occupancy < config.low_occupancy {
        chain.apply(
            "Low Occupancy",
            config.low_occupancy_multiplier,
            format!("{:.0}% occupancy - consider discounts to fill rooms", occupancy),
        );
    }

    // Competitor positioning; no market price means aligned
    let market_gap_pct = if input.competitor_avg_price > 0.0 {
        (input.current_price - input.competitor_avg_price) / input.competitor_avg_price * 100.0
    } else {
        0.0
    };
    if market_gap_pct > config.above_market_pct {
        chain.apply(
            "Competitor Pricing",
            config.above_market_multiplier,
            format!("{:.0}% above competitors - consider alignment", market_gap_pct),
        );
    } else if market_gap_pct < -config.below_market_pct {
        chain.apply(
            "Competitor Pricing",
            config.below_market_multiplier,
            format!("{:.0}% below competitors - room to increase", market_gap_pct.abs()),
        );
    } else {
        chain.apply("Competitor Pricing", 1.0, "Price aligned with market");
    }

    chain.apply(
        "Demand Level",
        1.0 + (input.demand_score - 0.5) * config.demand_sensitivity,
        format!("Demand score: {:.0}%", input.demand_score * 100.0),
    );

    // Seasonality always scales the price but is only listed when material
    let seasonality_impact = impact_of(input.seasonality_factor);
    chain.multiplier *= input.seasonality_factor;
    if seasonality_impact.abs() > config.seasonality_listing_threshold {
        chain.factors.push(PredictionFactor::new(
            "Seasonality",
            seasonality_impact,
            if seasonality_impact > 0 { "Peak season" } else { "Off-season" },
        ));
    }

    if input.event_factor > config.event_threshold {
        chain.apply("Local Events", input.event_factor, "Events in area driving demand");
    }

    let trend = input.price_history_trend.clamp(-1.0, 1.0);
    if trend.abs() > config.trend_threshold {
        chain.multiplier *= 1.0 + trend * config.trend_sensitivity;
        chain.factors.push(PredictionFactor::new(
            "Price Trend",
            (trend * config.trend_impact_scale).round() as i32,
            if trend > 0.0 { "Prices trending up" } else { "Prices trending down" },
        ));
    }

    let predicted_price = round_price(input.current_price * chain.multiplier);
    let price_range = PriceRange::new(
        round_price(input.current_price * config.min_multiplier),
        round_price(input.current_price * config.max_multiplier),
    );
    let recommended_price = price_range.clamp(predicted_price);

    let mut factors = chain.factors;
    factors.sort_by_key(|f| std::cmp::Reverse(f.impact.abs()));

    Ok(ChainPrediction {
        predicted_price,
        recommended_price,
        price_range,
        factors,
        confidence_adjustment: chain.confidence,
    })
}

/// The factor chain behind the [`PriceStrategy`] contract.
#[derive(Debug, Clone, Default)]
pub struct SequentialFactorChain {
    config: ChainConfig,
}

impl SequentialFactorChain {
    pub fn new(config: ChainConfig) -> Self {
        Self { config }
    }
}

impl PriceStrategy for SequentialFactorChain {
    fn name(&self) -> &'static str {
        "sequential_factor_chain"
    }

    fn estimate(&self, context: &PricingContext) -> Result<StrategyEstimate> {
        let prediction = predict_price(&context.chain_input(), &self.config)?;
        Ok(StrategyEstimate {
            price: prediction.recommended_price,
            factors: prediction.factors,
            confidence_adjustment: prediction.confidence_adjustment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekday() -> ChainInput {
        ChainInput {
            is_weekend: false,
            is_holiday: false,
            days_until_date: 14,
            current_occupancy: 60.0,
            current_price: 200.0,
            competitor_avg_price: 200.0,
            demand_score: 0.5,
            seasonality_factor: 1.0,
            event_factor: 1.0,
            price_history_trend: 0.0,
        }
    }

    fn factor<'a>(prediction: &'a ChainPrediction, name: &str) -> Option<&'a PredictionFactor> {
        prediction.factors.iter().find(|f| f.name == name)
    }

    #[test]
    fn test_neutral_input_keeps_price() {
        let prediction = predict_price(&weekday(), &ChainConfig::default()).unwrap();
        assert_eq!(prediction.predicted_price, 200.0);
        assert_eq!(prediction.recommended_price, 200.0);
        assert_eq!(prediction.price_range, PriceRange::new(140.0, 300.0));
        assert_eq!(prediction.confidence_adjustment, 0.0);
        assert_eq!(factor(&prediction, "Day of Week").unwrap().impact, 0);
        assert_eq!(
            factor(&prediction, "Competitor Pricing").unwrap().description,
            "Price aligned with market"
        );
    }

    #[test]
    fn test_weekend_holiday_last_minute() {
        let input = ChainInput {
            is_weekend: true,
            is_holiday: true,
            days_until_date: 2,
            ..weekday()
        };
        let prediction = predict_price(&input, &ChainConfig::default()).unwrap();
        // 1.15 * 1.25 * 1.20 = 1.725
        assert_eq!(prediction.predicted_price, 345.0);
        assert_eq!(prediction.recommended_price, 300.0);
        assert!((prediction.confidence_adjustment - 0.15).abs() < 1e-12);
        assert_eq!(factor(&prediction, "Holiday").unwrap().impact, 25);
        assert_eq!(factor(&prediction, "Last Minute").unwrap().impact, 20);
        assert_eq!(factor(&prediction, "Day of Week").unwrap().impact, 15);
    }

    #[test]
    fn test_far_future_lowers_confidence() {
        let input = ChainInput {
            days_until_date: 90,
            ..weekday()
        };
        let prediction = predict_price(&input, &ChainConfig::default()).unwrap();
        assert_eq!(prediction.predicted_price, 190.0);
        assert!((prediction.confidence_adjustment + 0.10).abs() < 1e-12);
        assert_eq!(factor(&prediction, "Far Future").unwrap().impact, -5);
    }

    #[test]
    fn test_occupancy_tiers() {
        let config = ChainConfig::default();
        let impact_at = |occupancy: f64| {
            let input = ChainInput {
                current_occupancy: occupancy,
                ..weekday()
            };
            let prediction = predict_price(&input, &config).unwrap();
            prediction
                .factors
                .iter()
                .find(|f| f.name.ends_with("Occupancy"))
                .map(|f| f.impact)
        };
        assert_eq!(impact_at(95.0), Some(30));
        assert_eq!(impact_at(80.0), Some(15));
        assert_eq!(impact_at(60.0), None);
        assert_eq!(impact_at(30.0), Some(-10));
    }

    #[test]
    fn test_competitor_positioning() {
        let config = ChainConfig::default();
        let above = predict_price(
            &ChainInput {
                competitor_avg_price: 150.0,
                ..weekday()
            },
            &config,
        )
        .unwrap();
        assert_eq!(factor(&above, "Competitor Pricing").unwrap().impact, -5);
        assert_eq!(above.predicted_price, 190.0);

        let below = predict_price(
            &ChainInput {
                competitor_avg_price: 250.0,
                ..weekday()
            },
            &config,
        )
        .unwrap();
        assert_eq!(factor(&below, "Competitor Pricing").unwrap().impact, 8);
        assert_eq!(below.predicted_price, 216.0);
    }

    #[test]
    fn test_seasonality_listed_only_when_material() {
        let config = ChainConfig::default();
        let mild = predict_price(
            &ChainInput {
                seasonality_factor: 1.05,
                ..weekday()
            },
            &config,
        )
        .unwrap();
        assert!(factor(&mild, "Seasonality").is_none());
        assert_eq!(mild.predicted_price, 210.0);

        let peak = predict_price(
            &ChainInput {
                seasonality_factor: 1.25,
                ..weekday()
            },
            &config,
        )
        .unwrap();
        assert_eq!(factor(&peak, "Seasonality").unwrap().impact, 25);
    }

    #[test]
    fn test_event_and_trend() {
        let input = ChainInput {
            event_factor: 1.2,
            price_history_trend: 0.5,
            ..weekday()
        };
        let prediction = predict_price(&input, &ChainConfig::default()).unwrap();
        assert_eq!(factor(&prediction, "Local Events").unwrap().impact, 20);
        assert_eq!(factor(&prediction, "Price Trend").unwrap().impact, 5);
        // 200 * 1.2 * 1.025 = 246
        assert_eq!(prediction.predicted_price, 246.0);
        assert_eq!(prediction.factors[0].name, "Local Events");
    }

    #[test]
    fn test_small_trend_ignored() {
        let input = ChainInput {
            price_history_trend: 0.05,
            event_factor: 1.02,
            ..weekday()
        };
        let prediction = predict_price(&input, &ChainConfig::default()).unwrap();
        assert!(factor(&prediction, "Price Trend").is_none());
        assert!(factor(&prediction, "Local Events").is_none());
        assert_eq!(prediction.predicted_price, 200.0);
    }

    #[test]
    fn test_recommended_within_range() {
        let config = ChainConfig::default();
        for occupancy in [0.0, 40.0, 80.0, 100.0] {
            for days in [0, 5, 30, 120] {
                let input = ChainInput {
                    current_occupancy: occupancy,
                    days_until_date: days,
                    is_weekend: true,
                    demand_score: 1.0,
                    ..weekday()
                };
                let prediction = predict_price(&input, &config).unwrap();
                assert!(prediction.price_range.contains(prediction.recommended_price));
            }
        }
    }

    #[test]
    fn test_invalid_price() {
        let input = ChainInput {
            current_price: 0.0,
            ..weekday()
        };
        assert!(predict_price(&input, &ChainConfig::default()).is_err());
    }
}
