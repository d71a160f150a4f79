//! Price elasticity estimation and elasticity-driven price optimization.

use crate::stats::round_price;
use pricing_api::OptimizerConfig;
use pricing_spi::{
    ensure_percentage, ensure_positive, OptimizationResult, PriceChangeSample, PricingError,
    Result,
};
use tracing::debug;

/// Mean of `%Δoccupancy / %Δprice` over the usable samples.
///
/// Samples with no price change or zero starting occupancy carry no signal
/// and are skipped. With nothing usable the configured default is returned.
pub fn estimate_elasticity(samples: &[PriceChangeSample], config: &OptimizerConfig) -> Result<f64> {
    let mut total = 0.0;
    let mut valid = 0usize;

    for sample in samples {
        ensure_positive("old_price", sample.old_price)?;
        ensure_positive("new_price", sample.new_price)?;

        if sample.old_occupancy == 0.0 {
            debug!(?sample, "skipping price change with zero starting occupancy");
            continue;
        }
        let price_change_pct = (sample.new_price - sample.old_price) / sample.old_price * 100.0;
        if price_change_pct == 0.0 {
            continue;
        }
        let occupancy_change_pct =
            (sample.new_occupancy - sample.old_occupancy) / sample.old_occupancy * 100.0;

        total += occupancy_change_pct / price_change_pct;
        valid += 1;
    }

    if valid == 0 {
        return Ok(config.default_elasticity);
    }
    Ok(total / valid as f64)
}

/// Move the price toward the target occupancy, bounded by `max_change_pct`.
pub fn optimize_price(
    current_price: f64,
    current_occupancy: f64,
    total_rooms: u32,
    elasticity: f64,
    config: &OptimizerConfig,
) -> Result<OptimizationResult> {
    ensure_positive("current_price", current_price)?;
    ensure_percentage("current_occupancy", current_occupancy)?;
    if total_rooms == 0 {
        return Err(PricingError::invalid("total_rooms", "must be greater than zero"));
    }

    let rooms = f64::from(total_rooms);
    let target = config.target_occupancy;

    if (current_occupancy - target).abs() < config.near_target_band {
        return Ok(OptimizationResult {
            optimal_price: current_price,
            expected_occupancy: current_occupancy,
            expected_revenue: current_price * current_occupancy / 100.0 * rooms,
            reasoning: "Occupancy near target, maintaining price".to_string(),
        });
    }

    let elasticity = if elasticity == 0.0 || !elasticity.is_finite() {
        debug!(elasticity, fallback = config.default_elasticity, "degenerate elasticity");
        config.default_elasticity
    } else {
        elasticity
    };

    let gap = target - current_occupancy;
    let max_change = config.max_change_pct;
    let change_pct = (gap / elasticity).clamp(-max_change, max_change);

    let lower = current_price * (1.0 - max_change / 100.0);
    let upper = current_price * (1.0 + max_change / 100.0);
    let optimal_price = round_price(current_price * (1.0 + change_pct / 100.0)).clamp(lower, upper);

    let expected_occupancy = (current_occupancy + change_pct * elasticity).clamp(0.0, 100.0);
    let expected_revenue = optimal_price * expected_occupancy / 100.0 * rooms;

    let reasoning = if current_occupancy < target - config.reasoning_band {
        format!(
            "Low occupancy ({:.1}%) - reducing price to increase bookings",
            current_occupancy
        )
    } else if current_occupancy > target + config.reasoning_band {
        format!(
            "High occupancy ({:.1}%) - increasing price to maximize revenue",
            current_occupancy
        )
    } else {
        "Fine-tuning price to optimize revenue".to_string()
    };

    Ok(OptimizationResult {
        optimal_price,
        expected_occupancy,
        expected_revenue,
        reasoning,
    })
}
