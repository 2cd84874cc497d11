//! # Wire Selection
//!
//! Finds the smallest conductor, possibly run as several parallel sets,
//! that satisfies both the voltage drop limit and the ampacity limit.
//!
//! ## Search order
//!
//! 1. Start at the smallest feeder size with the starting run count.
//! 2. Sweep sizes ascending. Any size failing voltage drop or ampacity
//!    (`ampacity ≥ round(I / n)`) is skipped.
//! 3. When the largest size fails, restart at the smallest size with one
//!    more parallel set.
//! 4. Past `max_parallel_runs` the search fails with `SearchExhausted`.
//!
//! ## Example
//!
//! ```rust
//! use feeder_core::calculations::wire::{select_wire, WireQuery};
//! use feeder_core::conductors::Gauge;
//!
//! // 20 A, 50 ft, single-phase 120 V, 5% allowed
//! let query = WireQuery::new(20.0, 50.0, 2.0, 6.0, 120.0);
//! let spec = select_wire(&query).unwrap();
//!
//! assert_eq!(spec.gauge, Gauge::Awg12);
//! assert_eq!(spec.parallel_runs, 1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conductors::Gauge;
use crate::equations::{voltage_drop, voltage_drop_percent};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::settings::DEFAULT_MAX_PARALLEL_RUNS;

/// Parameters for one wire search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireQuery {
    /// Current the conductor must carry (A)
    pub current_amps: f64,

    /// One-way run length (ft)
    pub distance_ft: f64,

    /// 2.0 single-phase, 1.732 three-phase
    pub phase_multiplier: f64,

    /// Allowed voltage drop (V)
    pub max_voltage_drop_volts: f64,

    /// System line voltage, used to report drop as a percentage (V)
    pub line_voltage: f64,

    /// Parallel sets to start the search at
    pub starting_parallel_runs: u32,

    /// Search bound on parallel sets
    pub max_parallel_runs: u32,
}

impl WireQuery {
    /// Create a query starting at a single run with the default run bound.
    pub fn new(current_amps: f64, distance_ft: f64, phase_multiplier: f64, max_voltage_drop_volts: f64, line_voltage: f64) -> Self {
        WireQuery {
            current_amps,
            distance_ft,
            phase_multiplier,
            max_voltage_drop_volts,
            line_voltage,
            starting_parallel_runs: 1,
            max_parallel_runs: DEFAULT_MAX_PARALLEL_RUNS,
        }
    }

    /// Start the search at `runs` parallel sets
    pub fn with_starting_runs(mut self, runs: u32) -> Self {
        self.starting_parallel_runs = runs;
        self
    }

    /// Bound the search at `runs` parallel sets
    pub fn with_max_parallel_runs(mut self, runs: u32) -> Self {
        self.max_parallel_runs = runs;
        self
    }

    /// Same query with a different run length
    pub fn with_distance(mut self, distance_ft: f64) -> Self {
        self.distance_ft = distance_ft;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("current_amps", self.current_amps)?;
        require_positive("distance_ft", self.distance_ft)?;
        require_positive("phase_multiplier", self.phase_multiplier)?;
        require_positive("max_voltage_drop_volts", self.max_voltage_drop_volts)?;
        require_positive("line_voltage", self.line_voltage)?;
        if self.starting_parallel_runs == 0 {
            return Err(CalcError::invalid_input(
                "starting_parallel_runs",
                "0",
                "At least one conductor set is required",
            ));
        }
        if self.starting_parallel_runs > self.max_parallel_runs {
            return Err(CalcError::invalid_input(
                "starting_parallel_runs",
                self.starting_parallel_runs.to_string(),
                format!("Exceeds the parallel-run bound of {}", self.max_parallel_runs),
            ));
        }
        Ok(())
    }
}

/// Selected conductor.
///
/// ## JSON Example
///
/// ```json
/// { "gauge": "3/0", "parallel_runs": 2, "voltage_drop_percent": 1.42 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireSpec {
    /// Conductor size of each set
    pub gauge: Gauge,

    /// Conductor sets in parallel (≥ 1)
    pub parallel_runs: u32,

    /// Voltage drop at the selected size (%)
    pub voltage_drop_percent: f64,
}

impl WireSpec {
    /// Whether this spec carries `current_amps`: ampacity ≥ round(I / n)
    pub fn carries(&self, current_amps: f64) -> bool {
        ampacity_ok(self.gauge, current_amps, self.parallel_runs)
    }
}

fn ampacity_ok(gauge: Gauge, current_amps: f64, parallel_runs: u32) -> bool {
    gauge.max_ampacity() >= (current_amps / parallel_runs as f64).round()
}

/// Select the smallest conductor satisfying voltage drop and ampacity.
pub fn select_wire(query: &WireQuery) -> CalcResult<WireSpec> {
    query.validate()?;

    let sizes = &Gauge::FEEDER_SIZES;
    let mut index = 0;
    let mut runs = query.starting_parallel_runs;

    while runs <= query.max_parallel_runs {
        let gauge = sizes[index];
        let drop_volts = voltage_drop(gauge, query.distance_ft, runs, query.current_amps, query.phase_multiplier);

        if drop_volts <= query.max_voltage_drop_volts && ampacity_ok(gauge, query.current_amps, runs) {
            return Ok(WireSpec {
                gauge,
                parallel_runs: runs,
                voltage_drop_percent: voltage_drop_percent(drop_volts, query.line_voltage),
            });
        }

        index += 1;
        if index == sizes.len() {
            index = 0;
            runs += 1;
            debug!(
                current_amps = query.current_amps,
                distance_ft = query.distance_ft,
                parallel_runs = runs,
                "largest conductor insufficient, adding a parallel set"
            );
        }
    }

    Err(CalcError::search_exhausted(query.current_amps, query.max_parallel_runs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::allowed_drop_volts;

    fn three_phase_480(current: f64, distance: f64, max_percent: f64) -> WireQuery {
        WireQuery::new(current, distance, 1.732, allowed_drop_volts(max_percent, 480.0), 480.0)
    }

    #[test]
    fn test_ampacity_exactly_met() {
        let spec = select_wire(&WireQuery::new(20.0, 50.0, 2.0, 100.0, 120.0)).unwrap();
        assert_eq!(spec.gauge, Gauge::Awg12);
        assert_eq!(spec.parallel_runs, 1);
        // 0.00198 × 20 × 50 × 2 = 3.96 V on 120 V
        assert!((spec.voltage_drop_percent - 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_voltage_drop_governs() {
        // 20 A, 1000 ft, 1PH 120 V, 3%: R must be ≤ 0.09 Ω/kft
        let query = WireQuery::new(20.0, 1000.0, 2.0, allowed_drop_volts(3.0, 120.0), 120.0);
        let spec = select_wire(&query).unwrap();
        assert_eq!(spec.gauge, Gauge::Awg000);
        assert_eq!(spec.parallel_runs, 1);
        assert!(spec.voltage_drop_percent <= 3.0);
    }

    #[test]
    fn test_ampacity_forces_parallel_sets() {
        // 800 A: 2 × 500 kcmil carries only 380 A per set, 3 sets need 267 A each
        let spec = select_wire(&three_phase_480(800.0, 100.0, 3.0)).unwrap();
        assert_eq!(spec.parallel_runs, 3);
        assert_eq!(spec.gauge, Gauge::Kcmil300);
    }

    #[test]
    fn test_voltage_drop_forces_parallel_sets() {
        // 100 A, 2000 ft, 3PH 208 V, 1%: needs 5 sets of 500 kcmil
        let query = WireQuery::new(100.0, 2000.0, 1.732, allowed_drop_volts(1.0, 208.0), 208.0);
        let spec = select_wire(&query).unwrap();
        assert_eq!(spec.parallel_runs, 5);
        assert_eq!(spec.gauge, Gauge::Kcmil500);
        assert!(spec.voltage_drop_percent <= 1.0);
    }

    #[test]
    fn test_starting_runs_respected() {
        let spec = select_wire(&three_phase_480(20.0, 50.0, 3.0).with_starting_runs(2)).unwrap();
        assert_eq!(spec.parallel_runs, 2);
        assert_eq!(spec.gauge, Gauge::Awg12);
    }

    #[test]
    fn test_search_exhausted() {
        let err = select_wire(&three_phase_480(10_000.0, 100.0, 3.0)).unwrap_err();
        assert_eq!(
            err,
            CalcError::SearchExhausted {
                current_amps: 10_000.0,
                max_parallel_runs: 10
            }
        );

        let err = select_wire(&three_phase_480(800.0, 100.0, 3.0).with_max_parallel_runs(2)).unwrap_err();
        assert_eq!(err.error_code(), "SEARCH_EXHAUSTED");
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(select_wire(&three_phase_480(0.0, 100.0, 3.0)).is_err());
        assert!(select_wire(&three_phase_480(100.0, -5.0, 3.0)).is_err());
        assert!(select_wire(&three_phase_480(100.0, 100.0, 0.0)).is_err());
        assert!(select_wire(&three_phase_480(100.0, 100.0, 3.0).with_starting_runs(0)).is_err());
        assert!(select_wire(&three_phase_480(100.0, 100.0, 3.0).with_starting_runs(11)).is_err());
    }

    #[test]
    fn test_gauge_monotonic_in_current() {
        let mut previous = Gauge::Awg12;
        for amps in 1..=380 {
            let spec = select_wire(&three_phase_480(amps as f64, 50.0, 5.0)).unwrap();
            assert_eq!(spec.parallel_runs, 1);
            assert!(spec.gauge >= previous, "{} A picked {} after {}", amps, spec.gauge, previous);
            previous = spec.gauge;
        }
    }

    #[test]
    fn test_results_satisfy_both_constraints() {
        for phase_multiplier in [2.0, 1.732] {
            for current in [15.0, 45.0, 100.0, 250.0, 600.0, 1200.0] {
                for distance in [10.0, 150.0, 400.0] {
                    let query = WireQuery::new(current, distance, phase_multiplier, allowed_drop_volts(3.0, 208.0), 208.0);
                    let spec = select_wire(&query).unwrap();
                    assert!(spec.parallel_runs >= 1);
                    assert!(spec.carries(current));
                    assert!(spec.voltage_drop_percent <= 3.0 + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let query = three_phase_480(437.5, 275.0, 2.0);
        let a = select_wire(&query).unwrap();
        let b = select_wire(&query).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.voltage_drop_percent.to_bits(), b.voltage_drop_percent.to_bits());
    }
}
