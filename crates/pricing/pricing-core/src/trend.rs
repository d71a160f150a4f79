//! Linear-regression trend detection.

use pricing_api::TrendConfig;
use pricing_spi::{TrendDirection, TrendResult};

/// Fit a least-squares line through the most recent points.
///
/// Fewer than `min_points` values yield [`TrendResult::insufficient`]. A
/// series with no variance has confidence 0 and a zero mean has velocity 0.
pub fn detect_trend(prices: &[f64], config: &TrendConfig) -> TrendResult {
    if prices.len() < config.min_points.max(2) {
        return TrendResult::insufficient();
    }

    let window = config.recent_window.clamp(1, prices.len());
    let recent = &prices[prices.len() - window..];
    if recent.len() < 2 {
        return TrendResult::insufficient();
    }
    let (slope, r_squared) = least_squares(recent);

    let mean_y = recent.iter().sum::<f64>() / recent.len() as f64;
    let velocity = if mean_y == 0.0 { 0.0 } else { slope / mean_y };
    let confidence = r_squared.clamp(0.0, 1.0);

    let direction = if velocity > config.velocity_threshold && confidence > config.confidence_threshold {
        TrendDirection::Up
    } else if velocity < -config.velocity_threshold && confidence > config.confidence_threshold {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    };

    TrendResult {
        direction,
        strength: (velocity.abs() * config.strength_scale).clamp(0.0, 1.0),
        velocity,
        confidence,
    }
}

/// Slope and R² of `y` regressed on `0..n`.
fn least_squares(y: &[f64]) -> (f64, f64) {
    let n = y.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (i, value) in y.iter().enumerate() {
        let dx = i as f64 - mean_x;
        sxy += dx * (value - mean_y);
        sxx += dx * dx;
    }
    if sxx == 0.0 {
        return (0.0, 0.0);
    }
    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let ss_total: f64 = y.iter().map(|v| (v - mean_y).powi(2)).sum();
    if ss_total == 0.0 {
        return (slope, 0.0);
    }
    let ss_residual: f64 = y
        .iter()
        .enumerate()
        .map(|(i, v)| (v - (slope * i as f64 + intercept)).powi(2))
        .sum();

    (slope, 1.0 - ss_residual / ss_total)
}
