//! # Error Types
//!
//! Structured error types for feeder_core. Every failure is local and
//! synchronous: the engine never retries and never substitutes a default,
//! because a silently wrong conductor size is a safety defect.
//!
//! ## Example
//!
//! ```rust
//! use feeder_core::errors::{CalcError, CalcResult};
//!
//! fn validate_distance(distance_ft: f64) -> CalcResult<()> {
//!     if distance_ft <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "distance_ft",
//!             distance_ft.to_string(),
//!             "Distance must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_distance(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for feeder_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for sizing operations.
///
/// Each variant carries enough context for a caller to report the problem
/// without re-running the calculation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive current, distance, voltage, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The short-circuit formula has no conductor constant for this gauge
    #[error("Unsupported gauge {gauge}: {reason}")]
    UnsupportedGauge { gauge: String, reason: String },

    /// Parallel-run escalation hit its bound without satisfying both constraints
    #[error("Wire search exhausted for {current_amps} A after {max_parallel_runs} parallel runs")]
    SearchExhausted {
        current_amps: f64,
        max_parallel_runs: u32,
    },

    /// A rating or gauge falls outside every breakpoint of a lookup table
    #[error("Table lookup miss in {table}: {value} is outside the codified range")]
    TableLookupMiss { table: String, value: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedGauge error
    pub fn unsupported_gauge(gauge: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::UnsupportedGauge {
            gauge: gauge.into(),
            reason: reason.into(),
        }
    }

    /// Create a SearchExhausted error
    pub fn search_exhausted(current_amps: f64, max_parallel_runs: u32) -> Self {
        CalcError::SearchExhausted {
            current_amps,
            max_parallel_runs,
        }
    }

    /// Create a TableLookupMiss error
    pub fn table_lookup_miss(table: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::TableLookupMiss {
            table: table.into(),
            value: value.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnsupportedGauge { .. } => "UNSUPPORTED_GAUGE",
            CalcError::SearchExhausted { .. } => "SEARCH_EXHAUSTED",
            CalcError::TableLookupMiss { .. } => "TABLE_LOOKUP_MISS",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject values that are not strictly positive (NaN included).
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("distance_ft", "-5", "Distance must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unsupported_gauge("700", "no C value").error_code(), "UNSUPPORTED_GAUGE");
        assert_eq!(CalcError::search_exhausted(9000.0, 10).error_code(), "SEARCH_EXHAUSTED");
        assert_eq!(CalcError::table_lookup_miss("grounding", "7000").error_code(), "TABLE_LOOKUP_MISS");
    }

    #[test]
    fn test_error_display() {
        let err = CalcError::search_exhausted(9000.0, 10);
        assert_eq!(err.to_string(), "Wire search exhausted for 9000 A after 10 parallel runs");
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("current_amps", 1.0).is_ok());
        assert!(require_positive("current_amps", 0.0).is_err());
        assert!(require_positive("current_amps", -3.0).is_err());
        assert!(require_positive("current_amps", f64::NAN).is_err());
    }
}
