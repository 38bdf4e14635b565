//! Error types for the Vade Mecum engine

use thiserror::Error;

/// Main error type for engine operations.
///
/// Lookup and evaluation functions are total: a missing dataset, a missing
/// column or a query without matches is an absent result, never an error.
/// Errors only arise when constructing values that carry invariants, such
/// as a [`crate::sentencing::SentencingRange`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// Sentencing maximum below the minimum
    #[error("Invalid sentencing range: minimum {min} exceeds maximum {max}")]
    InvalidRange { min: f64, max: f64 },

    /// Negative penalty bound
    #[error("Negative penalty bound: {0}")]
    NegativeBound(f64),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_display() {
        let err = EngineError::InvalidRange { min: 4.0, max: 2.0 };
        assert_eq!(
            err.to_string(),
            "Invalid sentencing range: minimum 4 exceeds maximum 2"
        );
    }

    #[test]
    fn test_negative_bound_display() {
        let err = EngineError::NegativeBound(-1.5);
        assert_eq!(err.to_string(), "Negative penalty bound: -1.5");
    }
}
