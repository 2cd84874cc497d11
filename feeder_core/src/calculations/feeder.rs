//! # Feeder Calculation
//!
//! Complete sizing of one feeder: conductors and conduit, grounding
//! conductor, voltage drop, and the six drawing labels.
//!
//! ## Pipeline
//!
//! ```text
//! FeederInput → select_conduit → select_grounding → voltage drop → compose_labels → FeederResult
//! ```
//!
//! ## Example
//!
//! ```rust
//! use feeder_core::calculations::feeder::{calculate, FeederInput};
//! use feeder_core::phase::CircuitPhase;
//! use feeder_core::settings::DesignSettings;
//!
//! let input = FeederInput {
//!     label: "LP-1".to_string(),
//!     load_amps: 50.0,
//!     mocp_amps: 60.0,
//!     distance_ft: 20.0,
//!     line_voltage: 208.0,
//!     phase: CircuitPhase::Three,
//!     wire_count: 4,
//!     max_voltage_drop_percent: None,
//! };
//!
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//! assert_eq!(result.labels.conductors, "3/4\" C.; 4#6 CU.");
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use super::conduit::{select_conduit, ConduitQuery, ConduitSpec};
use super::grounding::select_grounding;
use crate::conductors::Gauge;
use crate::equations::{allowed_drop_volts, voltage_drop, voltage_drop_percent};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::labels::{compose_labels, FeederLabels, LabelInput};
use crate::phase::CircuitPhase;
use crate::settings::DesignSettings;

/// Input parameters for a feeder.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "LP-1",
///   "load_amps": 42.26,
///   "mocp_amps": 60.0,
///   "distance_ft": 150.0,
///   "line_voltage": 208.0,
///   "phase": "3PH",
///   "wire_count": 4,
///   "max_voltage_drop_percent": 2.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeederInput {
    /// User label (e.g., panel or equipment fed)
    pub label: String,

    /// Load current (A)
    pub load_amps: f64,

    /// Overcurrent device rating (A)
    pub mocp_amps: f64,

    /// One-way run length (ft)
    pub distance_ft: f64,

    /// System line voltage (V)
    pub line_voltage: f64,

    pub phase: CircuitPhase,

    /// Current-carrying wires in the raceway (3 or 4)
    pub wire_count: u8,

    /// Voltage drop limit (%); `None` uses the design settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_voltage_drop_percent: Option<f64>,
}

impl FeederInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("load_amps", self.load_amps)?;
        require_positive("mocp_amps", self.mocp_amps)?;
        require_positive("distance_ft", self.distance_ft)?;
        require_positive("line_voltage", self.line_voltage)?;
        if !matches!(self.wire_count, 3 | 4) {
            return Err(CalcError::invalid_input(
                "wire_count",
                self.wire_count.to_string(),
                "Wire count must be 3 or 4",
            ));
        }
        if let Some(percent) = self.max_voltage_drop_percent {
            require_positive("max_voltage_drop_percent", percent)?;
        }
        Ok(())
    }

    /// Effective voltage drop limit (%)
    pub fn voltage_drop_limit(&self, settings: &DesignSettings) -> f64 {
        self.max_voltage_drop_percent
            .unwrap_or(settings.max_voltage_drop_percent)
    }
}

/// Results of a feeder calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeederResult {
    /// Conductors and conduit
    pub conduit: ConduitSpec,

    /// Equipment grounding conductor
    pub grounding: Gauge,

    /// Voltage drop at load current (V)
    pub voltage_drop_volts: f64,

    /// Voltage drop at load current (%)
    pub voltage_drop_percent: f64,

    /// Drawing labels
    pub labels: FeederLabels,
}

/// Size a feeder.
pub fn calculate(input: &FeederInput, settings: &DesignSettings) -> CalcResult<FeederResult> {
    input.validate()?;
    settings.validate()?;

    let phase_multiplier = input.phase.multiplier();
    let max_drop_volts = allowed_drop_volts(input.voltage_drop_limit(settings), input.line_voltage);

    let query = ConduitQuery::new(
        input.load_amps,
        input.mocp_amps,
        input.distance_ft,
        phase_multiplier,
        max_drop_volts,
        input.line_voltage,
        input.wire_count,
    )
    .with_max_parallel_runs(settings.max_parallel_runs);

    let conduit = select_conduit(&query)?;
    let grounding = select_grounding(input.mocp_amps)?;

    let wire = conduit.wire;
    let drop_volts = voltage_drop(wire.gauge, input.distance_ft, wire.parallel_runs, input.load_amps, phase_multiplier);
    let drop_percent = voltage_drop_percent(drop_volts, input.line_voltage);

    let labels = compose_labels(&LabelInput {
        conduit,
        grounding,
        voltage_drop_percent: drop_percent,
        distance_ft: input.distance_ft,
        mocp_amps: input.mocp_amps,
        load_amps: input.load_amps,
        line_voltage: input.line_voltage,
        phase_count: input.phase.phase_count(),
        wire_count: input.wire_count,
    });

    info!(
        label = %input.label,
        conductors = %labels.conductors,
        grounding = %grounding,
        voltage_drop_percent = drop_percent,
        "feeder sized"
    );

    Ok(FeederResult {
        conduit,
        grounding,
        voltage_drop_volts: drop_volts,
        voltage_drop_percent: drop_percent,
        labels,
    })
}
