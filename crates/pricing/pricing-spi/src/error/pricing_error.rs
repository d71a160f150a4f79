//! Pricing error types

use thiserror::Error;

/// Errors raised by the pricing engine.
///
/// Short or missing data is never an error: every operation degrades to a
/// documented low-confidence default instead. Only structurally invalid input
/// and cooperative cancellation surface here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Structurally invalid argument (non-positive price, zero rooms, ...)
    #[error("Invalid input '{name}': {reason}")]
    InvalidInput { name: String, reason: String },

    /// Parallel arrays with different lengths
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Batch prediction was cancelled by the caller
    #[error("Prediction batch cancelled")]
    Cancelled,

    /// Configuration could not be parsed or failed validation
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl PricingError {
    /// Shorthand for [`PricingError::InvalidInput`].
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Fail with [`PricingError::InvalidInput`] unless `value` is finite and strictly positive.
pub fn ensure_positive(name: &str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid(name, format!("must be positive, got {}", value)))
    }
}

/// Fail unless `value` is a percentage in `[0, 100]`.
pub fn ensure_percentage(name: &str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(PricingError::invalid(name, format!("must be within 0-100, got {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_input_error_message() {
        let error = PricingError::invalid("base_price", "must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid input 'base_price': must be positive"
        );
    }

    #[test]
    fn test_length_mismatch_message() {
        let error = PricingError::LengthMismatch { left: 3, right: 5 };
        assert_eq!(error.to_string(), "Length mismatch: 3 vs 5");
    }

    #[test]
    fn test_cancelled_message() {
        assert_eq!(PricingError::Cancelled.to_string(), "Prediction batch cancelled");
    }

    #[test]
    fn test_config_message() {
        let error = PricingError::Config("weights must be non-negative".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid configuration: weights must be non-negative"
        );
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("price", 120.0).is_ok());
        assert!(ensure_positive("price", 0.0).is_err());
        assert!(ensure_positive("price", -5.0).is_err());
        assert!(ensure_positive("price", f64::NAN).is_err());
        assert!(ensure_positive("price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_percentage() {
        assert!(ensure_percentage("occupancy", 0.0).is_ok());
        assert!(ensure_percentage("occupancy", 100.0).is_ok());
        assert!(ensure_percentage("occupancy", 100.5).is_err());
        assert!(ensure_percentage("occupancy", -1.0).is_err());
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error> = Box::new(PricingError::Cancelled);
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingError>();
    }

    #[test]
    fn test_error_can_be_boxed() {
        let boxed: Box<dyn Error + Send + Sync> =
            Box::new(PricingError::invalid("total_rooms", "must be greater than zero"));
        assert_eq!(
            boxed.to_string(),
            "Invalid input 'total_rooms': must be greater than zero"
        );
    }
}
