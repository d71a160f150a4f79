//! Integration tests for the pricing facade

use chrono::{Duration, NaiveDate};
use pricing_facade::{
    create_strategy, predict_price, BlendStrategy, ChainConfig, CycleCorrelationDetector,
    EngineConfig, HotelSnapshot, PaceStatus, PredictionFactors, PreparedSnapshot, PricePoint,
    PricingContext, PricingEngine, PricingError, SeasonalityDetector, WeightedBlendConfig,
};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

fn context(current_price: f64) -> PricingContext {
    PricingContext {
        base_price: 150.0,
        current_price,
        factors: PredictionFactors {
            historical_avg: 150.0,
            competitor_avg: 180.0,
            occupancy: 80.0,
            lead_time_days: 2,
            seasonality_factor: 1.1,
            trend_velocity: 0.05,
            event_impact: 1.0,
        },
        is_weekend: false,
        is_holiday: false,
        demand_score: 0.5,
        price_history_trend: 0.0,
    }
}

fn snapshot_with_history() -> HotelSnapshot {
    let history = (1..=60)
        .map(|i| PricePoint::new(as_of() - Duration::days(i), 150.0).with_occupancy(70.0))
        .collect();
    HotelSnapshot::new("hotel-1", as_of(), 150.0, 40).with_history(history)
}

#[test]
fn test_weighted_blend_strategy_matches_ml_predict() {
    let strategy = create_strategy(&BlendStrategy::WeightedBlend(WeightedBlendConfig::default()));
    let estimate = strategy.estimate(&context(150.0)).unwrap();
    assert_eq!(strategy.name(), "weighted_blend");
    assert_eq!(estimate.price, 164.0);
    assert_eq!(estimate.confidence_adjustment, 0.0);
    assert!(!estimate.factors.is_empty());
}

#[test]
fn test_chain_strategy_uses_recommended_price() {
    let config = ChainConfig::default();
    let strategy = create_strategy(&BlendStrategy::SequentialFactorChain(config.clone()));
    let ctx = PricingContext {
        is_weekend: true,
        is_holiday: true,
        ..context(200.0)
    };

    let estimate = strategy.estimate(&ctx).unwrap();
    let direct = predict_price(&ctx.chain_input(), &config).unwrap();
    assert_eq!(estimate.price, direct.recommended_price);
    assert!(direct.price_range.contains(estimate.price));
    assert_eq!(estimate.confidence_adjustment, direct.confidence_adjustment);
}

#[test]
fn test_config_from_partial_json() {
    let config = EngineConfig::from_json(r#"{"strategy": {"kind": "sequential_factor_chain"}}"#).unwrap();
    let engine = PricingEngine::new(config).unwrap();
    assert_eq!(engine.strategy_name(), "sequential_factor_chain");
    assert_eq!(engine.config().blend.model_weight, 0.6);
}

#[test]
fn test_config_json_round_trip() {
    let config = EngineConfig::with_strategy(BlendStrategy::SequentialFactorChain(ChainConfig::default()));
    let json = config.to_json().unwrap();
    assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_invalid_config_is_rejected() {
    let malformed = EngineConfig::from_json("{not json");
    assert!(matches!(malformed, Err(PricingError::Config(_))));

    let out_of_range = EngineConfig::from_json(r#"{"confidence": {"floor": 1.5}}"#);
    assert!(matches!(out_of_range, Err(PricingError::Config(_))));
}

#[test]
fn test_seasonality_detector_trait_object() {
    let detector: Box<dyn SeasonalityDetector> = Box::new(CycleCorrelationDetector::default());
    let pattern = [100.0, 100.0, 100.0, 100.0, 130.0, 140.0, 110.0];
    let prices: Vec<f64> = (0..42).map(|i| pattern[i % 7]).collect();
    let found = detector.detect(&prices).unwrap();
    assert_eq!(found.period_days, 7);
    assert!(detector.detect(&[120.0; 42]).is_none());
}

#[test]
fn test_engine_predicts_single_date() {
    let engine = PricingEngine::default();
    let mut snapshot = snapshot_with_history();
    let target = as_of() + Duration::days(10);
    snapshot.booked_rooms.insert(target, 36);
    snapshot.competitor_prices.insert(target, vec![160.0, 170.0, 180.0]);

    let prepared = PreparedSnapshot::new(&snapshot, engine.config()).unwrap();
    let output = engine.predict(&prepared.request_for(target, engine.config())).unwrap();

    assert_eq!(output.date, target);
    let optimization = output.optimization.unwrap();
    assert!(optimization.reasoning.starts_with("High occupancy (90.0%)"));
    assert!(output.price_range.contains(output.recommended_price));
    assert!(output.recommended_price >= output.predicted_price);
    assert!(output.confidence_score >= 0.45 && output.confidence_score <= 0.96);
}

#[test]
fn test_booking_pace_behind_lowers_price() {
    let engine = PricingEngine::default();
    let target = as_of() + Duration::days(45);

    let mut baseline = snapshot_with_history();
    baseline.booked_rooms.insert(target, 5);
    let mut behind = baseline.clone();
    behind.pace_history.insert(target, vec![20.0, 20.0]);

    let predict = |snapshot: &HotelSnapshot| {
        let prepared = PreparedSnapshot::new(snapshot, engine.config()).unwrap();
        engine.predict(&prepared.request_for(target, engine.config())).unwrap()
    };
    let without_pace = predict(&baseline);
    let with_pace = predict(&behind);

    assert!(without_pace.booking_pace.is_none());
    assert_eq!(with_pace.booking_pace.unwrap().pace, PaceStatus::Behind);
    assert!(with_pace.predicted_price < without_pace.predicted_price);
}

#[test]
fn test_insights_from_snapshot() {
    let engine = PricingEngine::default();
    let mut snapshot = snapshot_with_history();
    for i in 1..=10 {
        snapshot
            .competitor_prices
            .insert(as_of() - Duration::days(i), vec![120.0, 130.0]);
    }
    let insights = engine.insights(&snapshot);
    assert_eq!(insights[0], "Your prices are stable week over week (+0.0%)");
    assert!(insights.contains(&"Priced 20.0% above the competitor average (125)".to_string()));
}

#[test]
fn test_revenue_forecast_year() {
    let engine = PricingEngine::default();
    let year = engine.forecast_revenue(2024, 40, 150.0).unwrap();
    assert_eq!(year.len(), 12);
    assert_eq!(year.iter().map(|m| m.days).sum::<u32>(), 366);
    assert!(year.iter().all(|m| m.predicted_revpar > 0.0));
    assert!(engine.forecast_revenue(2024, 0, 150.0).is_err());
}
