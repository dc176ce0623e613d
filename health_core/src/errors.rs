//! # Error Types
//!
//! Every failure in health_core is a validation failure on an input domain.
//! The error carries the offending field, its value, and a human-readable
//! reason so callers can decide how to present it (abort, re-prompt, log).
//!
//! ## Example
//!
//! ```rust
//! use health_core::errors::{HealthError, HealthResult};
//!
//! fn validate_weight(weight_kg: f64) -> HealthResult<()> {
//!     if weight_kg <= 0.0 {
//!         return Err(HealthError::invalid_data(
//!             "weight_kg",
//!             weight_kg.to_string(),
//!             "Weight must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = validate_weight(-3.0).unwrap_err();
//! assert_eq!(err.message(), "Weight must be positive");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for health_core operations
pub type HealthResult<T> = Result<T, HealthError>;

/// Structured error type for health metric operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum HealthError {
    /// An input value is outside its accepted domain
    #[error("Invalid health data for '{field}': {value} - {reason}")]
    InvalidHealthData {
        field: String,
        value: String,
        reason: String,
    },
}

impl HealthError {
    /// Create an InvalidHealthData error
    pub fn invalid_data(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        let error = HealthError::InvalidHealthData {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        };
        tracing::debug!(%error, "rejected input");
        error
    }

    /// The human-readable reason, without field/value decoration
    pub fn message(&self) -> &str {
        match self {
            HealthError::InvalidHealthData { reason, .. } => reason,
        }
    }

    /// Name of the input that failed validation
    pub fn field(&self) -> &str {
        match self {
            HealthError::InvalidHealthData { field, .. } => field,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            HealthError::InvalidHealthData { .. } => "INVALID_HEALTH_DATA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = HealthError::invalid_data("bmi", "-1", "BMI cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidHealthData\""));
        let roundtrip: HealthError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_accessors() {
        let error = HealthError::invalid_data("gender", "x", "Gender must be 'm' or 'f'");
        assert_eq!(error.error_code(), "INVALID_HEALTH_DATA");
        assert_eq!(error.field(), "gender");
        assert_eq!(error.message(), "Gender must be 'm' or 'f'");
        assert_eq!(
            error.to_string(),
            "Invalid health data for 'gender': x - Gender must be 'm' or 'f'"
        );
    }
}
