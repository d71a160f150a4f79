//! Booking pace against historical bookings at the same lead time.

use crate::stats::mean;
use pricing_api::BookingPaceConfig;
use pricing_spi::{BookingPace, PaceStatus};

/// Compare current bookings with the historical mean at the same lead time.
pub fn analyze_booking_pace(current_bookings: f64, historical: &[f64], config: &BookingPaceConfig) -> BookingPace {
    let Some(average) = mean(historical) else {
        return BookingPace::on_track();
    };
    let deviation_pct = if average > 0.0 {
        (current_bookings - average) / average * 100.0
    } else {
        0.0
    };

    if deviation_pct > config.threshold_pct {
        BookingPace {
            pace: PaceStatus::Ahead,
            deviation_pct,
            multiplier: 1.0 + (deviation_pct / config.deviation_divisor).min(config.max_premium),
        }
    } else if deviation_pct < -config.threshold_pct {
        BookingPace {
            pace: PaceStatus::Behind,
            deviation_pct,
            multiplier: 1.0 - (deviation_pct.abs() / config.deviation_divisor).min(config.max_discount),
        }
    } else {
        BookingPace {
            pace: PaceStatus::OnTrack,
            deviation_pct,
            multiplier: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_history() {
        let pace = analyze_booking_pace(12.0, &[], &BookingPaceConfig::default());
        assert_eq!(pace, BookingPace::on_track());
    }

    #[test]
    fn test_ahead() {
        let pace = analyze_booking_pace(13.0, &[10.0, 10.0], &BookingPaceConfig::default());
        assert_eq!(pace.pace, PaceStatus::Ahead);
        assert!((pace.deviation_pct - 30.0).abs() < 1e-9);
        assert!((pace.multiplier - 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_ahead_is_capped() {
        let pace = analyze_booking_pace(30.0, &[10.0], &BookingPaceConfig::default());
        assert!((pace.multiplier - 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_behind() {
        let pace = analyze_booking_pace(8.0, &[10.0], &BookingPaceConfig::default());
        assert_eq!(pace.pace, PaceStatus::Behind);
        assert!((pace.multiplier - 0.9).abs() < 1e-9);

        let collapse = analyze_booking_pace(0.0, &[10.0], &BookingPaceConfig::default());
        assert!((collapse.multiplier - 0.88).abs() < 1e-9);
    }

    #[test]
    fn test_on_track_band() {
        let pace = analyze_booking_pace(11.0, &[10.0], &BookingPaceConfig::default());
        assert_eq!(pace.pace, PaceStatus::OnTrack);
        assert_eq!(pace.multiplier, 1.0);
    }

    #[test]
    fn test_zero_historical_average() {
        let pace = analyze_booking_pace(5.0, &[0.0, 0.0], &BookingPaceConfig::default());
        assert_eq!(pace.pace, PaceStatus::OnTrack);
        assert_eq!(pace.deviation_pct, 0.0);
    }
}
