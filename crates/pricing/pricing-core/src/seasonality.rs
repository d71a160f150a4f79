//! Seasonality detection implementations
//!
//! Scores each candidate cycle length by correlating adjacent,
//! non-overlapping windows of the series.

use crate::stats::pearson;
use pricing_api::SeasonalityConfig;
use pricing_spi::{SeasonalPattern, SeasonalityDetector};

/// Scores closer than this count as a tie.
const TIE_TOLERANCE: f64 = 1e-9;

/// Adjacent-cycle correlation detector
#[derive(Debug, Clone, Default)]
pub struct CycleCorrelationDetector {
    config: SeasonalityConfig,
}

impl CycleCorrelationDetector {
    pub fn new(config: SeasonalityConfig) -> Self {
        Self { config }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            config: SeasonalityConfig {
                threshold,
                ..SeasonalityConfig::default()
            },
        }
    }
}

impl SeasonalityDetector for CycleCorrelationDetector {
    fn detect(&self, prices: &[f64]) -> Option<SeasonalPattern> {
        detect_seasonality(prices, &self.config)
    }
}

/// Detect the strongest repeating cycle among the configured candidates.
///
/// Returns `None` below `min_points` or when the best score is under the
/// threshold. Ties go to the earlier candidate.
pub fn detect_seasonality(prices: &[f64], config: &SeasonalityConfig) -> Option<SeasonalPattern> {
    if prices.len() < config.min_points {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for &period in &config.candidate_periods {
        let score = cycle_score(prices, period);
        match best {
            Some((_, best_score)) if score <= best_score + TIE_TOLERANCE => {}
            _ => best = Some((period, score)),
        }
    }

    let (period, score) = best?;
    if score < config.threshold {
        return None;
    }
    Some(SeasonalPattern {
        period_days: period,
        amplitude: score.clamp(0.0, 1.0),
        phase: 0.0,
    })
}

/// Mean correlation between consecutive cycles of length `period`.
///
/// 0 when fewer than two full cycles fit.
pub fn cycle_score(prices: &[f64], period: usize) -> f64 {
    if period == 0 {
        return 0.0;
    }
    let cycles = prices.len() / period;
    if cycles < 2 {
        return 0.0;
    }

    let windows: Vec<&[f64]> = prices.chunks_exact(period).take(cycles).collect();
    // chunks_exact yields equal-length windows, so pearson cannot mismatch
    let total: f64 = windows
        .windows(2)
        .filter_map(|pair| pearson(pair[0], pair[1]).ok())
        .sum();
    total / (cycles - 1) as f64
}
