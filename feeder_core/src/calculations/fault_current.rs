//! # Available Fault Current
//!
//! Short-circuit current (AIC) at the far end of a feeder by the
//! point-to-point method. The source current is either known (upstream
//! equipment) or derived from a transformer's kVA and impedance.
//!
//! The result never exceeds the source current: the multiplier
//! `1 / (1 + f)` is at most 1 for any non-negative length.
//!
//! ## Example
//!
//! ```rust
//! use feeder_core::calculations::fault_current::fault_current_from_upstream;
//! use feeder_core::conductors::Gauge;
//!
//! let at_panel = fault_current_from_upstream(22_000.0, 150.0, 1, 208.0, Gauge::Awg0000, true).unwrap();
//! assert!(at_panel < 22_000.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conductors::Gauge;
use crate::equations::point_to_point::{
    f_factor, multiplier, transformer_full_load_current, transformer_short_circuit_current, y_factor,
};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::phase::CircuitPhase;

/// Where the fault current at the start of the run comes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source")]
pub enum FaultSource {
    /// Known fault current at the upstream equipment
    Upstream { fault_current_a: f64 },
    /// Transformer secondary, infinite primary
    Transformer {
        kva: f64,
        power_factor: f64,
        percent_z: f64,
    },
}

/// Input for an available fault current calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Panel LP-1",
///   "source": { "source": "Transformer", "kva": 150.0, "power_factor": 100.0, "percent_z": 3.5 },
///   "length_ft": 40.0,
///   "parallel_sets": 1,
///   "line_voltage": 208.0,
///   "gauge": "4/0",
///   "phase": "3PH"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultCurrentInput {
    /// User label (e.g., panel name)
    pub label: String,

    pub source: FaultSource,

    /// Feeder length from the source (ft)
    pub length_ft: f64,

    /// Conductor sets in parallel
    pub parallel_sets: u32,

    /// Line voltage (V)
    pub line_voltage: f64,

    /// Feeder conductor size
    pub gauge: Gauge,

    pub phase: CircuitPhase,
}

/// Available fault current and its intermediate values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaultCurrentResult {
    /// Fault current at the start of the run (A)
    pub source_fault_current_a: f64,

    /// Point-to-point f factor
    pub f_factor: f64,

    /// Multiplier 1 / (1 + f)
    pub multiplier: f64,

    /// Fault current at the end of the run (A)
    pub available_fault_current_a: f64,
}

impl FaultCurrentResult {
    /// Available fault current in kA, as printed on equipment schedules
    pub fn available_ka(&self) -> f64 {
        self.available_fault_current_a / 1000.0
    }
}

/// Run the calculation described by `input`.
pub fn calculate(input: &FaultCurrentInput) -> CalcResult<FaultCurrentResult> {
    let is_three_phase = input.phase.is_three_phase();
    let source_current = match input.source {
        FaultSource::Upstream { fault_current_a } => fault_current_a,
        FaultSource::Transformer {
            kva,
            power_factor,
            percent_z,
        } => transformer_secondary_current(kva, power_factor, percent_z, input.line_voltage, is_three_phase)?,
    };
    attenuate(
        source_current,
        input.length_ft,
        input.parallel_sets,
        input.line_voltage,
        input.gauge,
        is_three_phase,
    )
}

/// Fault current at the end of a feeder fed from a known upstream fault current.
pub fn fault_current_from_upstream(
    utility_fault_current_a: f64,
    length_ft: f64,
    parallel_sets: u32,
    line_voltage: f64,
    gauge: Gauge,
    is_three_phase: bool,
) -> CalcResult<f64> {
    attenuate(utility_fault_current_a, length_ft, parallel_sets, line_voltage, gauge, is_three_phase)
        .map(|result| result.available_fault_current_a)
}

/// Fault current at the end of a feeder fed from a transformer secondary.
#[allow(clippy::too_many_arguments)]
pub fn fault_current_from_transformer(
    kva: f64,
    power_factor: f64,
    percent_z: f64,
    length_ft: f64,
    parallel_sets: u32,
    line_voltage: f64,
    gauge: Gauge,
    is_three_phase: bool,
) -> CalcResult<f64> {
    let source_current = transformer_secondary_current(kva, power_factor, percent_z, line_voltage, is_three_phase)?;
    attenuate(source_current, length_ft, parallel_sets, line_voltage, gauge, is_three_phase)
        .map(|result| result.available_fault_current_a)
}

fn transformer_secondary_current(
    kva: f64,
    power_factor: f64,
    percent_z: f64,
    line_voltage: f64,
    is_three_phase: bool,
) -> CalcResult<f64> {
    require_positive("kva", kva)?;
    require_positive("power_factor", power_factor)?;
    require_positive("percent_z", percent_z)?;
    require_positive("line_voltage", line_voltage)?;

    let full_load = transformer_full_load_current(kva, line_voltage, is_three_phase);
    Ok(transformer_short_circuit_current(full_load, power_factor, percent_z))
}

fn attenuate(
    source_current_a: f64,
    length_ft: f64,
    parallel_sets: u32,
    line_voltage: f64,
    gauge: Gauge,
    is_three_phase: bool,
) -> CalcResult<FaultCurrentResult> {
    require_positive("fault_current_a", source_current_a)?;
    require_positive("line_voltage", line_voltage)?;
    if !(length_ft >= 0.0 && length_ft.is_finite()) {
        return Err(CalcError::invalid_input(
            "length_ft",
            length_ft.to_string(),
            "Length cannot be negative",
        ));
    }
    if parallel_sets == 0 {
        return Err(CalcError::invalid_input(
            "parallel_sets",
            "0",
            "At least one conductor set is required",
        ));
    }

    let c = gauge.phase_conductor_constant();
    if c == 0.0 {
        return Err(CalcError::unsupported_gauge(
            gauge.label(),
            "No point-to-point conductor constant for this size",
        ));
    }

    let f = f_factor(y_factor(is_three_phase), length_ft, source_current_a, parallel_sets, c, line_voltage);
    let m = multiplier(f);
    let available = source_current_a / (1.0 + f);

    debug!(
        source_fault_current_a = source_current_a,
        f_factor = f,
        available_fault_current_a = available,
        "fault current attenuated"
    );

    Ok(FaultCurrentResult {
        source_fault_current_a: source_current_a,
        f_factor: f,
        multiplier: m,
        available_fault_current_a: available,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_returns_source() {
        let amps = fault_current_from_upstream(10_000.0, 0.0, 1, 480.0, Gauge::Awg4, true).unwrap();
        assert_eq!(amps, 10_000.0);
    }

    #[test]
    fn test_reference_case() {
        // 20 kA, 100 ft of 4/0, 480 V 3PH: f = 0.4785, M = 0.6763
        let amps = fault_current_from_upstream(20_000.0, 100.0, 1, 480.0, Gauge::Awg0000, true).unwrap();
        assert!((amps - 13_527.0).abs() < 5.0);
    }

    #[test]
    fn test_attenuation_only_reduces() {
        for length in [0.5, 10.0, 100.0, 1000.0] {
            for gauge in [Gauge::Awg12, Gauge::Awg1, Gauge::Kcmil500] {
                for three_phase in [true, false] {
                    let amps = fault_current_from_upstream(42_000.0, length, 2, 208.0, gauge, three_phase).unwrap();
                    assert!(amps < 42_000.0);
                    assert!(amps > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_longer_runs_attenuate_more() {
        let near = fault_current_from_upstream(35_000.0, 25.0, 1, 208.0, Gauge::Awg2, true).unwrap();
        let far = fault_current_from_upstream(35_000.0, 250.0, 1, 208.0, Gauge::Awg2, true).unwrap();
        assert!(far < near);
    }

    #[test]
    fn test_single_phase_attenuates_more() {
        let three = fault_current_from_upstream(10_000.0, 100.0, 1, 240.0, Gauge::Awg0, true).unwrap();
        let single = fault_current_from_upstream(10_000.0, 100.0, 1, 240.0, Gauge::Awg0, false).unwrap();
        assert!(single < three);
    }

    #[test]
    fn test_from_transformer() {
        // 500 kVA, 480 V 3PH: FLA = 601.4 A, I_SCA = 601.4 × 100 / 5 = 12028 A
        let at_terminals = fault_current_from_transformer(500.0, 100.0, 5.0, 0.0, 1, 480.0, Gauge::Kcmil500, true).unwrap();
        assert!((at_terminals - 12_028.0).abs() < 1.0);

        let downstream = fault_current_from_transformer(500.0, 100.0, 5.0, 50.0, 2, 480.0, Gauge::Kcmil500, true).unwrap();
        assert!(downstream < at_terminals);
    }

    #[test]
    fn test_unsupported_gauge() {
        let err = fault_current_from_upstream(10_000.0, 50.0, 1, 480.0, Gauge::Kcmil700, true).unwrap_err();
        assert!(matches!(err, CalcError::UnsupportedGauge { .. }));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(fault_current_from_upstream(0.0, 50.0, 1, 480.0, Gauge::Awg4, true).is_err());
        assert!(fault_current_from_upstream(10_000.0, -1.0, 1, 480.0, Gauge::Awg4, true).is_err());
        assert!(fault_current_from_upstream(10_000.0, 50.0, 0, 480.0, Gauge::Awg4, true).is_err());
        assert!(fault_current_from_upstream(10_000.0, 50.0, 1, 0.0, Gauge::Awg4, true).is_err());
        assert!(fault_current_from_transformer(150.0, 100.0, 0.0, 10.0, 1, 208.0, Gauge::Awg4, true).is_err());
    }

    #[test]
    fn test_calculate_from_json() {
        let json = r#"{
            "label": "Panel LP-1",
            "source": { "source": "Transformer", "kva": 150.0, "power_factor": 100.0, "percent_z": 3.5 },
            "length_ft": 40.0,
            "parallel_sets": 1,
            "line_voltage": 208.0,
            "gauge": "4/0",
            "phase": "3PH"
        }"#;
        let input: FaultCurrentInput = serde_json::from_str(json).unwrap();
        let result = calculate(&input).unwrap();

        let direct = fault_current_from_transformer(150.0, 100.0, 3.5, 40.0, 1, 208.0, Gauge::Awg0000, true).unwrap();
        assert_eq!(result.available_fault_current_a, direct);
        assert!(result.multiplier < 1.0);
        assert!((result.available_ka() * 1000.0 - direct).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let a = fault_current_from_upstream(65_000.0, 75.0, 3, 480.0, Gauge::Kcmil350, true).unwrap();
        let b = fault_current_from_upstream(65_000.0, 75.0, 3, 480.0, Gauge::Kcmil350, true).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
