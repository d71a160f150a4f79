//! Basic example demonstrating hotel price prediction
//!
//! Run with: cargo run --example basic -p pricing-facade
//! Set RUST_LOG=pricing_core=debug to see per-date decisions.

use chrono::NaiveDate;
use pricing_facade::{
    optimize_price, BlendStrategy, ChainConfig, EngineConfig, MarketSimulator, OptimizerConfig,
    PricingEngine,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pricing_core=info".into()),
        )
        .init();

    println!("=== Hotel Pricing Basic Examples ===\n");

    let as_of = NaiveDate::from_ymd_opt(2024, 12, 16).ok_or("invalid date")?;
    let snapshot = MarketSimulator::new(2024).snapshot("demo-hotel", as_of, 180.0, 48, 30);

    // 1. Weighted blend over the next 30 days
    println!("1. Weighted blend");
    let engine = PricingEngine::default();
    let range = engine.predict_for_range(&snapshot, 30)?;
    for prediction in range.predictions.iter().take(7) {
        println!(
            "   {}  predicted {:>6.0}  recommended {:>6.0}  {:<9} {:<8} confidence {:.2}",
            prediction.date,
            prediction.predicted_price,
            prediction.recommended_price,
            prediction.demand_level,
            prediction.recommendation,
            prediction.confidence_score,
        );
    }
    println!(
        "   avg price {:.0}, avg confidence {:.2}, increase/decrease/maintain {}/{}/{}\n",
        range.summary.avg_predicted_price,
        range.summary.avg_confidence,
        range.summary.increase_recommendations,
        range.summary.decrease_recommendations,
        range.summary.maintain_recommendations,
    );

    // 2. Factor chain explanation for New Year's Eve
    println!("2. Sequential factor chain");
    let chain = PricingEngine::new(EngineConfig::with_strategy(
        BlendStrategy::SequentialFactorChain(ChainConfig::default()),
    ))?;
    let chain_range = chain.predict_for_range(&snapshot, 30)?;
    if let Some(nye) = chain_range
        .predictions
        .iter()
        .find(|p| p.date == NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(as_of))
    {
        println!("   {} recommended {:.0}", nye.date, nye.recommended_price);
        for factor in &nye.factors {
            println!("   {:>4}%  {:<20} {}", factor.impact, factor.name, factor.description);
        }
    }
    println!();

    // 3. Market insights
    println!("3. Market insights");
    for insight in &range.insights {
        println!("   - {}", insight);
    }
    println!();

    // 4. Standalone optimizer
    println!("4. Price optimizer");
    let result = optimize_price(200.0, 20.0, 50, -1.2, &OptimizerConfig::default())?;
    println!(
        "   200 at 20% occupancy -> {:.0} (expected occupancy {:.0}%, revenue {:.0})",
        result.optimal_price, result.expected_occupancy, result.expected_revenue
    );
    println!("   {}\n", result.reasoning);

    // 5. Revenue forecast
    println!("5. Revenue forecast 2025");
    for month in engine.forecast_revenue(2025, 48, 180.0)? {
        println!(
            "   {:>2}: occupancy {:>4.0}%  ADR {:>6.1}  revenue {:>9.0}  budget variance {:>+6.1}%{}",
            month.month,
            month.predicted_occupancy,
            month.predicted_adr,
            month.predicted_revenue,
            month.budget_variance_pct,
            if month.on_track { "" } else { "  (behind)" },
        );
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
