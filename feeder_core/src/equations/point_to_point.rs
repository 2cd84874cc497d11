//! # Point-to-Point Short-Circuit Formulas
//!
//! Available fault current at the end of a feeder, attenuated from a known
//! source current by the feeder's length and conductor constant.
//!
//! ## Notation
//!
//! - `I` = Source fault current at the start of the run (A)
//! - `L` = Run length (ft)
//! - `n` = Parallel conductor sets
//! - `C` = Conductor constant for the gauge
//! - `V` = Line voltage
//! - `y` = 1.732 three-phase, 2.0 single-phase
//! - `f` = Attenuation factor
//! - `M` = Multiplier 1 / (1 + f)

use crate::phase::{SINGLE_PHASE_MULTIPLIER, SQRT_3};

/// Point-to-point `y` factor
#[inline]
pub fn y_factor(is_three_phase: bool) -> f64 {
    if is_three_phase {
        SQRT_3
    } else {
        SINGLE_PHASE_MULTIPLIER
    }
}

/// Attenuation factor.
///
/// ```text
/// f = y × L × I / (n × C × V)
/// ```
#[inline]
pub fn f_factor(y: f64, length_ft: f64, source_current_a: f64, parallel_sets: u32, phase_constant: f64, line_voltage: f64) -> f64 {
    y * length_ft * source_current_a / (parallel_sets as f64 * phase_constant * line_voltage)
}

/// Attenuation multiplier `M = 1 / (1 + f)`; `f ≥ 0` keeps it in (0, 1].
#[inline]
pub fn multiplier(f: f64) -> f64 {
    1.0 / (1.0 + f)
}

/// Transformer secondary full-load current.
///
/// ```text
/// I_FLA = kVA × 1000 / V / (y if three-phase, else 1)
/// ```
#[inline]
pub fn transformer_full_load_current(kva: f64, line_voltage: f64, is_three_phase: bool) -> f64 {
    let divisor = if is_three_phase { SQRT_3 } else { 1.0 };
    kva * 1000.0 / line_voltage / divisor
}

/// Infinite-bus secondary short-circuit current.
///
/// ```text
/// I_SCA = I_FLA × PF / %Z
/// ```
#[inline]
pub fn transformer_short_circuit_current(full_load_current_a: f64, power_factor: f64, percent_z: f64) -> f64 {
    full_load_current_a * power_factor / percent_z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_has_unit_multiplier() {
        let f = f_factor(1.732, 0.0, 25_000.0, 1, 15082.0, 480.0);
        assert_eq!(f, 0.0);
        assert_eq!(multiplier(f), 1.0);
    }

    #[test]
    fn test_f_factor_reference_case() {
        // 3PH, 100 ft of 4/0, 20 kA at 480 V:
        // f = 1.732 × 100 × 20000 / (1 × 15082 × 480) = 0.4785
        let f = f_factor(y_factor(true), 100.0, 20_000.0, 1, 15082.0, 480.0);
        assert!((f - 0.4785).abs() < 1e-3);
        assert!((multiplier(f) - 0.6763).abs() < 1e-3);
    }

    #[test]
    fn test_transformer_currents() {
        // 150 kVA at 208 V 3PH: 150000 / 208 / 1.732 ≈ 416.4 A
        let fla = transformer_full_load_current(150.0, 208.0, true);
        assert!((fla - 416.37).abs() < 0.1);
        // Single-phase divisor is 1
        let fla_1ph = transformer_full_load_current(50.0, 240.0, false);
        assert!((fla_1ph - 208.33).abs() < 0.01);

        let isca = transformer_short_circuit_current(fla, 100.0, 2.0);
        assert!((isca - fla * 50.0).abs() < 1e-9);
    }
}
