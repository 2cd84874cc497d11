//! # Electrical Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` / `*Query` - Input parameters (JSON-serializable)
//! - `*Result` / `*Spec` - Calculation results (JSON-serializable)
//! - a pure function returning `Result<_, CalcError>`
//!
//! ## Available Calculations
//!
//! - [`wire`] - Bounded conductor search (size and parallel sets)
//! - [`conduit`] - Conductors and raceway from MOCP and load
//! - [`grounding`] - Equipment grounding conductor
//! - [`feeder`] - Full feeder sizing with drawing labels
//! - [`fault_current`] - Available fault current (point-to-point)

pub mod conduit;
pub mod fault_current;
pub mod feeder;
pub mod grounding;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::settings::DesignSettings;

pub use conduit::{select_conduit, ConduitQuery, ConduitSpec};
pub use fault_current::{
    fault_current_from_transformer,
    fault_current_from_upstream,
    FaultCurrentInput,
    FaultCurrentResult,
    FaultSource,
};
pub use feeder::{FeederInput, FeederResult};
pub use grounding::select_grounding;
pub use wire::{select_wire, WireQuery, WireSpec};

/// Enum wrapper for all calculation types.
///
/// Lets a batch of heterogeneous calculations live in one JSON array.
///
/// ```json
/// [
///   { "type": "Feeder", "label": "LP-1", "load_amps": 50.0, "mocp_amps": 60.0,
///     "distance_ft": 20.0, "line_voltage": 208.0, "phase": "3PH", "wire_count": 4 },
///   { "type": "FaultCurrent", "label": "LP-1", "source": { "source": "Upstream", "fault_current_a": 22000.0 },
///     "length_ft": 20.0, "parallel_sets": 1, "line_voltage": 208.0, "gauge": "6", "phase": "3PH" }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Conductor, conduit and grounding sizing
    Feeder(FeederInput),
    /// Available fault current at the end of a run
    FaultCurrent(FaultCurrentInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Feeder(f) => &f.label,
            CalculationItem::FaultCurrent(f) => &f.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Feeder(_) => "Feeder",
            CalculationItem::FaultCurrent(_) => "FaultCurrent",
        }
    }

    /// Run the calculation.
    pub fn run(&self, settings: &DesignSettings) -> CalcResult<CalculationOutput> {
        match self {
            CalculationItem::Feeder(input) => feeder::calculate(input, settings).map(CalculationOutput::Feeder),
            CalculationItem::FaultCurrent(input) => {
                fault_current::calculate(input).map(CalculationOutput::FaultCurrent)
            }
        }
    }
}

/// Result of a [`CalculationItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Feeder(FeederResult),
    FaultCurrent(FaultCurrentResult),
}
