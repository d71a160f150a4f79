//! Moving averages over a price series.

use pricing_spi::{PricingError, Result};

/// Trailing simple moving average.
///
/// Indices before `window - 1` carry the raw value so the output has the same
/// length as the input.
pub fn sma(prices: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(PricingError::invalid("window", "must be greater than zero"));
    }

    let mut smoothed = Vec::with_capacity(prices.len());
    let mut running = 0.0;
    for (i, price) in prices.iter().enumerate() {
        running += price;
        if i >= window {
            running -= prices[i - window];
        }
        if i + 1 < window {
            smoothed.push(*price);
        } else {
            smoothed.push(running / window as f64);
        }
    }
    Ok(smoothed)
}

/// Exponential moving average seeded with the first price.
///
/// `k = 2 / (period + 1)`.
pub fn ema(prices: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(PricingError::invalid("period", "must be greater than zero"));
    }
    let Some(&first) = prices.first() else {
        return Ok(Vec::new());
    };

    let k = 2.0 / (period as f64 + 1.0);
    let mut smoothed = Vec::with_capacity(prices.len());
    smoothed.push(first);
    let mut previous = first;
    for price in &prices[1..] {
        previous = price * k + previous * (1.0 - k);
        smoothed.push(previous);
    }
    Ok(smoothed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_warmup_uses_raw_values() {
        let result = sma(&[10.0, 20.0, 30.0, 40.0], 3).unwrap();
        assert_eq!(result.len(), 4);
        assert_eq!(result[0], 10.0);
        assert_eq!(result[1], 20.0);
        assert!((result[2] - 20.0).abs() < 1e-12);
        assert!((result[3] - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_sma_window_one_is_identity() {
        let prices = vec![120.0, 130.0, 125.0];
        assert_eq!(sma(&prices, 1).unwrap(), prices);
    }

    #[test]
    fn test_sma_zero_window() {
        assert!(matches!(
            sma(&[1.0, 2.0], 0),
            Err(PricingError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_ema_seed_is_first_price() {
        let prices = vec![150.0, 160.0, 155.0, 170.0];
        let result = ema(&prices, 7).unwrap();
        assert_eq!(result[0], prices[0]);
        assert_eq!(result.len(), prices.len());
    }

    #[test]
    fn test_ema_recurrence() {
        let result = ema(&[100.0, 200.0], 3).unwrap();
        // k = 0.5
        assert!((result[1] - 150.0).abs() < 1e-12);
    }

    #[test]
    fn test_ema_empty_and_zero_period() {
        assert!(ema(&[], 7).unwrap().is_empty());
        assert!(ema(&[1.0], 0).is_err());
    }
}
