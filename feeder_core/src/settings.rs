//! # Design Settings
//!
//! Defaults a caller may override: the voltage drop limit applied when a
//! feeder does not carry its own, and the parallel-run bound of the wire
//! search. Settings are plain data and are always passed in explicitly.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "code": "NEC 2023",
//!   "max_voltage_drop_percent": 2.0,
//!   "max_parallel_runs": 8
//! }
//! ```
//!
//! Missing keys take their defaults:
//!
//! ```rust
//! use feeder_core::settings::DesignSettings;
//!
//! let settings = DesignSettings::from_json_str(r#"{ "max_voltage_drop_percent": 2.0 }"#).unwrap();
//! assert_eq!(settings.max_voltage_drop_percent, 2.0);
//! assert_eq!(settings.max_parallel_runs, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// Default voltage drop limit for feeders (%)
pub const DEFAULT_MAX_VOLTAGE_DROP_PERCENT: f64 = 3.0;

/// Default bound on parallel-run escalation
pub const DEFAULT_MAX_PARALLEL_RUNS: u32 = 10;

/// Engine-wide design settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Electrical code edition the tables represent (informational)
    pub code: String,

    /// Voltage drop limit used when a feeder does not specify one (%)
    pub max_voltage_drop_percent: f64,

    /// Wire search gives up past this many parallel sets
    pub max_parallel_runs: u32,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            code: "NEC 2023".to_string(),
            max_voltage_drop_percent: DEFAULT_MAX_VOLTAGE_DROP_PERCENT,
            max_parallel_runs: DEFAULT_MAX_PARALLEL_RUNS,
        }
    }
}

impl DesignSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let settings: DesignSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate setting values.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("max_voltage_drop_percent", self.max_voltage_drop_percent)?;
        if self.max_voltage_drop_percent > 100.0 {
            return Err(CalcError::invalid_input(
                "max_voltage_drop_percent",
                self.max_voltage_drop_percent.to_string(),
                "Voltage drop limit cannot exceed 100%",
            ));
        }
        if self.max_parallel_runs == 0 {
            return Err(CalcError::invalid_input(
                "max_parallel_runs",
                "0",
                "At least one conductor set is required",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DesignSettings::default();
        assert_eq!(settings.max_voltage_drop_percent, 3.0);
        assert_eq!(settings.max_parallel_runs, 10);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = DesignSettings::from_json_str(r#"{ "max_parallel_runs": 4 }"#).unwrap();
        assert_eq!(settings.max_parallel_runs, 4);
        assert_eq!(settings.max_voltage_drop_percent, 3.0);
        assert_eq!(settings.code, "NEC 2023");
    }

    #[test]
    fn test_invalid_settings() {
        let err = DesignSettings::from_json_str(r#"{ "max_parallel_runs": 0 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = DesignSettings::from_json_str(r#"{ "max_voltage_drop_percent": -1.0 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = DesignSettings::from_json_str("not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
