//! # Feeder Labels
//!
//! Formats a finished feeder calculation into the six annotation lines
//! placed on drawings. Downstream tooling parses these strings, so the
//! templates are fixed byte-for-byte, including the `\u{0081}` phase marker.
//!
//! ```text
//! 3/4" C.; 4#6 CU.
//! PLUS 1#10 CU. GND.
//! 20'; VD=0.4%
//! C. SIZED FOR 60A
//! W. SIZED FOR 60A
//! @208V-3\u{0081}-4W
//! ```
//!
//! Numbers print in shortest form: `150`, not `150.0`.

use serde::{Deserialize, Serialize};

use crate::calculations::conduit::ConduitSpec;
use crate::conductors::Gauge;

/// Phase marker used in the system label
pub const PHASE_MARKER: char = '\u{0081}';

/// Drops below this percentage print as "NEGL."
pub const NEGLIGIBLE_DROP_PERCENT: f64 = 0.1;

/// Runs longer than this report load current on the wire sizing line (ft)
pub const LONG_RUN_FT: f64 = 100.0;

/// Everything the label lines are built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelInput {
    pub conduit: ConduitSpec,
    pub grounding: Gauge,
    pub voltage_drop_percent: f64,
    pub distance_ft: f64,
    pub mocp_amps: f64,
    pub load_amps: f64,
    pub line_voltage: f64,
    pub phase_count: u8,
    pub wire_count: u8,
}

/// The six label lines of a feeder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeederLabels {
    /// Conduit and phase conductors, e.g. `[2]2-1/2" C.; 4#250 CU.`
    pub conductors: String,
    /// Grounding conductor, e.g. `PLUS 1#4 CU. GND.`
    pub grounding: String,
    /// Length and voltage drop, e.g. `150'; VD=1.8%`
    pub distance: String,
    /// `C. SIZED FOR {mocp}A`
    pub conduit_sizing: String,
    /// `W. SIZED FOR {amps}A`
    pub wire_sizing: String,
    /// `@{V}V-{phases}\u{0081}-{wires}W`
    pub system: String,
}

impl FeederLabels {
    /// Lines in drawing order
    pub fn lines(&self) -> [&str; 6] {
        [
            self.conductors.as_str(),
            self.grounding.as_str(),
            self.distance.as_str(),
            self.conduit_sizing.as_str(),
            self.wire_sizing.as_str(),
            self.system.as_str(),
        ]
    }
}

/// Round to one decimal place
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Shortest decimal form of a number
fn number(value: f64) -> String {
    format!("{}", value)
}

/// Voltage drop label: "NEGL." or the percent to one decimal
pub fn voltage_drop_label(voltage_drop_percent: f64) -> String {
    if voltage_drop_percent < NEGLIGIBLE_DROP_PERCENT {
        "NEGL.".to_string()
    } else {
        format!("{}%", number(round_tenth(voltage_drop_percent)))
    }
}

/// Compose the six label lines.
pub fn compose_labels(input: &LabelInput) -> FeederLabels {
    let wire = &input.conduit.wire;
    let conduit = input.conduit.conduit_size.label();

    let conductors = if wire.parallel_runs > 1 {
        format!(
            "[{}]{}\" C.; {}#{} CU.",
            wire.parallel_runs, conduit, input.wire_count, wire.gauge
        )
    } else {
        format!("{}\" C.; {}#{} CU.", conduit, input.wire_count, wire.gauge)
    };

    let wire_sizing_amps = if input.distance_ft > LONG_RUN_FT {
        round_tenth(input.load_amps)
    } else {
        input.mocp_amps
    };

    FeederLabels {
        conductors,
        grounding: format!("PLUS 1#{} CU. GND.", input.grounding),
        distance: format!(
            "{}'; VD={}",
            number(input.distance_ft),
            voltage_drop_label(input.voltage_drop_percent)
        ),
        conduit_sizing: format!("C. SIZED FOR {}A", number(input.mocp_amps)),
        wire_sizing: format!("W. SIZED FOR {}A", number(wire_sizing_amps)),
        system: format!(
            "@{}V-{}{}-{}W",
            number(input.line_voltage),
            input.phase_count,
            PHASE_MARKER,
            input.wire_count
        ),
    }
}
