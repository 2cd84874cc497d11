//! # Voltage Drop Formulas
//!
//! DC-resistance voltage drop along a feeder run.
//!
//! ## Notation
//!
//! - `R` = Conductor resistance per foot (Ω/ft)
//! - `n` = Parallel conductor sets
//! - `I` = Current (A)
//! - `L` = One-way run length (ft)
//! - `k` = Phase multiplier (2.0 single-phase, 1.732 three-phase)
//! - `V` = System line voltage
//!
//! Reactance is ignored.

use crate::conductors::Gauge;

/// Voltage drop in volts.
///
/// ```text
/// VD = R / n × I × L × k
/// ```
///
/// # Arguments
/// * `gauge` - Conductor size
/// * `distance_ft` - One-way run length
/// * `parallel_runs` - Conductor sets in parallel (≥ 1)
/// * `current_amps` - Total current
/// * `phase_multiplier` - 2.0 or 1.732, supplied by the caller
#[inline]
pub fn voltage_drop(gauge: Gauge, distance_ft: f64, parallel_runs: u32, current_amps: f64, phase_multiplier: f64) -> f64 {
    gauge.resistance_per_ft() / parallel_runs as f64 * current_amps * distance_ft * phase_multiplier
}

/// Voltage drop as a percentage of system voltage.
///
/// ```text
/// VD% = VD / V × 100
/// ```
#[inline]
pub fn voltage_drop_percent(voltage_drop_volts: f64, line_voltage: f64) -> f64 {
    voltage_drop_volts / line_voltage * 100.0
}

/// Allowed drop in volts for a percentage limit.
#[inline]
pub fn allowed_drop_volts(max_percent: f64, line_voltage: f64) -> f64 {
    max_percent / 100.0 * line_voltage
}
