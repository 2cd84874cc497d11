//! # Conduit Selection
//!
//! Sizes a feeder's conductors and raceway from both the overcurrent device
//! rating (MOCP) and the actual load.
//!
//! ## Procedure
//!
//! 1. `by_mocp`: wire search at the MOCP over the real distance. Its run
//!    count is the minimum for everything after it.
//! 2. `by_load`: wire search at the load current, starting at that run count.
//! 3. `floor`: wire search at the MOCP over 1 ft, the smallest size the
//!    breaker alone demands.
//! 4. If `by_load` is smaller than `floor`, it is raised to the floor size.
//! 5. The conduit is sized from `by_mocp`, never from the load-driven wire.
//!
//! ## Example
//!
//! ```rust
//! use feeder_core::calculations::conduit::{select_conduit, ConduitQuery};
//! use feeder_core::conductors::{ConduitSize, Gauge};
//!
//! let query = ConduitQuery::new(50.0, 60.0, 20.0, 1.732, 100.0, 208.0, 4);
//! let spec = select_conduit(&query).unwrap();
//!
//! assert_eq!(spec.wire.gauge, Gauge::Awg6);
//! assert_eq!(spec.conduit_size, ConduitSize::ThreeQuarter);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::wire::{select_wire, WireQuery, WireSpec};
use crate::conductors::{conduit_size_for, ConduitSize};
use crate::equations::{voltage_drop, voltage_drop_percent};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::settings::DEFAULT_MAX_PARALLEL_RUNS;

/// Parameters for conductor and conduit selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConduitQuery {
    /// Actual load current (A)
    pub load_amps: f64,

    /// Overcurrent device rating (A)
    pub mocp_amps: f64,

    /// One-way run length (ft)
    pub distance_ft: f64,

    /// 2.0 single-phase, 1.732 three-phase
    pub phase_multiplier: f64,

    /// Allowed voltage drop (V)
    pub max_voltage_drop_volts: f64,

    /// System line voltage (V)
    pub line_voltage: f64,

    /// Current-carrying wires in the raceway (3 or 4)
    pub wire_count: u8,

    /// Search bound on parallel sets
    pub max_parallel_runs: u32,
}

impl ConduitQuery {
    pub fn new(
        load_amps: f64,
        mocp_amps: f64,
        distance_ft: f64,
        phase_multiplier: f64,
        max_voltage_drop_volts: f64,
        line_voltage: f64,
        wire_count: u8,
    ) -> Self {
        ConduitQuery {
            load_amps,
            mocp_amps,
            distance_ft,
            phase_multiplier,
            max_voltage_drop_volts,
            line_voltage,
            wire_count,
            max_parallel_runs: DEFAULT_MAX_PARALLEL_RUNS,
        }
    }

    /// Bound the wire searches at `runs` parallel sets
    pub fn with_max_parallel_runs(mut self, runs: u32) -> Self {
        self.max_parallel_runs = runs;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("load_amps", self.load_amps)?;
        require_positive("mocp_amps", self.mocp_amps)?;
        require_positive("distance_ft", self.distance_ft)?;
        require_positive("max_voltage_drop_volts", self.max_voltage_drop_volts)?;
        require_positive("line_voltage", self.line_voltage)?;
        if !matches!(self.wire_count, 3 | 4) {
            return Err(CalcError::invalid_input(
                "wire_count",
                self.wire_count.to_string(),
                "Wire count must be 3 or 4",
            ));
        }
        Ok(())
    }

    fn wire_query(&self, current_amps: f64) -> WireQuery {
        WireQuery::new(
            current_amps,
            self.distance_ft,
            self.phase_multiplier,
            self.max_voltage_drop_volts,
            self.line_voltage,
        )
        .with_max_parallel_runs(self.max_parallel_runs)
    }
}

/// Selected conductors and raceway.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConduitSpec {
    /// Conductors to install
    pub wire: WireSpec,

    /// Trade conduit size, from the MOCP-driven conductor
    pub conduit_size: ConduitSize,
}

/// Select conductors and conduit for a feeder.
pub fn select_conduit(query: &ConduitQuery) -> CalcResult<ConduitSpec> {
    query.validate()?;

    if query.load_amps > query.mocp_amps {
        warn!(
            load_amps = query.load_amps,
            mocp_amps = query.mocp_amps,
            "load exceeds overcurrent device rating"
        );
    }

    let by_mocp = select_wire(&query.wire_query(query.mocp_amps))?;
    let min_runs = by_mocp.parallel_runs;

    let by_load = select_wire(&query.wire_query(query.load_amps).with_starting_runs(min_runs))?;
    let floor = select_wire(
        &query
            .wire_query(query.mocp_amps)
            .with_distance(1.0)
            .with_starting_runs(min_runs),
    )?;

    let wire = if by_load.gauge < floor.gauge {
        // Drop is re-evaluated at the real distance for the raised size
        let runs = by_load.parallel_runs.max(floor.parallel_runs);
        let drop_volts = voltage_drop(floor.gauge, query.distance_ft, runs, query.load_amps, query.phase_multiplier);
        debug!(
            load_gauge = %by_load.gauge,
            floor_gauge = %floor.gauge,
            "load-sized conductor raised to breaker minimum"
        );
        WireSpec {
            gauge: floor.gauge,
            parallel_runs: runs,
            voltage_drop_percent: voltage_drop_percent(drop_volts, query.line_voltage),
        }
    } else {
        by_load
    };

    let conduit_size = conduit_size_for(by_mocp.gauge, query.wire_count)?;

    debug!(
        mocp_gauge = %by_mocp.gauge,
        wire_gauge = %wire.gauge,
        parallel_runs = wire.parallel_runs,
        conduit = %conduit_size,
        "conduit selected"
    );

    Ok(ConduitSpec { wire, conduit_size })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conductors::Gauge;
    use crate::equations::allowed_drop_volts;

    fn three_phase_208(load: f64, mocp: f64, distance: f64) -> ConduitQuery {
        ConduitQuery::new(load, mocp, distance, 1.732, allowed_drop_volts(3.0, 208.0), 208.0, 4)
    }

    #[test]
    fn test_short_run_clamped_to_breaker_size() {
        // Load alone would allow 8 AWG, the 60 A breaker needs 6 AWG
        let spec = select_conduit(&ConduitQuery::new(50.0, 60.0, 20.0, 1.732, 100.0, 208.0, 4)).unwrap();
        assert_eq!(spec.wire.gauge, Gauge::Awg6);
        assert_eq!(spec.wire.parallel_runs, 1);
        assert_eq!(spec.conduit_size, ConduitSize::ThreeQuarter);
    }

    #[test]
    fn test_clamped_drop_uses_real_distance() {
        let spec = select_conduit(&ConduitQuery::new(50.0, 60.0, 20.0, 1.732, 100.0, 208.0, 4)).unwrap();
        let expected = voltage_drop(Gauge::Awg6, 20.0, 1, 50.0, 1.732) / 208.0 * 100.0;
        assert!((spec.wire.voltage_drop_percent - expected).abs() < 1e-12);
    }

    #[test]
    fn test_long_run_load_governs() {
        // 50 A over 600 ft at 3% needs 2/0; breaker floor is only 6 AWG
        let spec = select_conduit(&three_phase_208(50.0, 60.0, 600.0)).unwrap();
        assert_eq!(spec.wire.gauge, Gauge::Awg00);
        assert_eq!(spec.conduit_size, ConduitSize::Two);
    }

    #[test]
    fn test_conduit_follows_mocp_gauge() {
        // MOCP over 300 ft needs 2/0, the 40 A load only 3 AWG
        let spec = select_conduit(&three_phase_208(40.0, 100.0, 300.0)).unwrap();
        assert_eq!(spec.wire.gauge, Gauge::Awg3);
        assert_eq!(spec.conduit_size, conduit_size_for(Gauge::Awg00, 4).unwrap());
    }

    #[test]
    fn test_three_wire_column() {
        let mut query = three_phase_208(40.0, 100.0, 300.0);
        query.wire_count = 3;
        let spec = select_conduit(&query).unwrap();
        assert_eq!(spec.wire.gauge, Gauge::Awg3);
        assert_eq!(spec.conduit_size, conduit_size_for(Gauge::Awg00, 3).unwrap());
        assert_eq!(spec.conduit_size, ConduitSize::OneAndHalf);
    }

    #[test]
    fn test_parallel_minimum_carries_over() {
        // 800 A breaker forces 3 sets; the lighter load keeps at least 3
        let query = ConduitQuery::new(500.0, 800.0, 100.0, 1.732, allowed_drop_volts(3.0, 480.0), 480.0, 4);
        let spec = select_conduit(&query).unwrap();
        assert!(spec.wire.parallel_runs >= 3);
        assert!(spec.wire.carries(500.0));
    }

    #[test]
    fn test_floor_invariant() {
        for mocp in [20.0, 60.0, 100.0, 225.0, 400.0] {
            for distance in [5.0, 50.0, 250.0] {
                let load = mocp * 0.6;
                let query = three_phase_208(load, mocp, distance);
                let spec = select_conduit(&query).unwrap();
                let by_mocp = select_wire(&query.wire_query(mocp)).unwrap();
                let floor = select_wire(
                    &query
                        .wire_query(mocp)
                        .with_distance(1.0)
                        .with_starting_runs(by_mocp.parallel_runs),
                )
                .unwrap();
                assert!(spec.wire.gauge >= floor.gauge, "MOCP {} at {} ft", mocp, distance);
                assert!(spec.wire.parallel_runs >= by_mocp.parallel_runs);
            }
        }
    }

    #[test]
    fn test_invalid_wire_count() {
        let mut query = three_phase_208(50.0, 60.0, 20.0);
        query.wire_count = 2;
        assert_eq!(select_conduit(&query).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_search_error_propagates() {
        let query = three_phase_208(5000.0, 6000.0, 100.0).with_max_parallel_runs(2);
        assert_eq!(select_conduit(&query).unwrap_err().error_code(), "SEARCH_EXHAUSTED");
    }
}
