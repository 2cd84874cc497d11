//! Trade Conduit Sizes
//!
//! Conduit size lookup for a given conductor size and number of
//! current-carrying wires in the raceway. Two tables exist: 3-wire
//! (single-phase 3W or three-phase 3W) and 4-wire (three-phase 4W).

use serde::{Deserialize, Serialize};

use super::gauge::Gauge;
use crate::errors::{CalcError, CalcResult};

/// Standard trade conduit size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConduitSize {
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "3/4")]
    ThreeQuarter,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "1-1/4")]
    OneAndQuarter,
    #[serde(rename = "1-1/2")]
    OneAndHalf,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "2-1/2")]
    TwoAndHalf,
    #[serde(rename = "3")]
    Three,
}

impl ConduitSize {
    /// Trade size label in inches, without the inch mark (e.g., "1-1/4")
    pub fn label(&self) -> &'static str {
        match self {
            ConduitSize::Half => "1/2",
            ConduitSize::ThreeQuarter => "3/4",
            ConduitSize::One => "1",
            ConduitSize::OneAndQuarter => "1-1/4",
            ConduitSize::OneAndHalf => "1-1/2",
            ConduitSize::Two => "2",
            ConduitSize::TwoAndHalf => "2-1/2",
            ConduitSize::Three => "3",
        }
    }
}

impl std::fmt::Display for ConduitSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

use ConduitSize::*;

/// (gauge, 3-wire size, 4-wire size), one row per feeder size
static CONDUIT_TABLE: [(Gauge, ConduitSize, ConduitSize); 17] = [
    (Gauge::Awg12, Half, Half),
    (Gauge::Awg10, Half, Half),
    (Gauge::Awg8, Half, ThreeQuarter),
    (Gauge::Awg6, ThreeQuarter, ThreeQuarter),
    (Gauge::Awg4, ThreeQuarter, One),
    (Gauge::Awg3, One, OneAndQuarter),
    (Gauge::Awg2, One, OneAndQuarter),
    (Gauge::Awg1, OneAndQuarter, OneAndQuarter),
    (Gauge::Awg0, OneAndQuarter, OneAndHalf),
    (Gauge::Awg00, OneAndHalf, Two),
    (Gauge::Awg000, OneAndHalf, Two),
    (Gauge::Awg0000, Two, Two),
    (Gauge::Kcmil250, Two, TwoAndHalf),
    (Gauge::Kcmil300, Two, TwoAndHalf),
    (Gauge::Kcmil350, TwoAndHalf, Three),
    (Gauge::Kcmil400, TwoAndHalf, Three),
    (Gauge::Kcmil500, Three, Three),
];

/// Look up the trade conduit size for `wire_count` conductors of `gauge`.
///
/// Only 3- and 4-wire raceways are tabulated. Grounding-only sizes
/// (700/800 kcmil) have no entry.
pub fn conduit_size_for(gauge: Gauge, wire_count: u8) -> CalcResult<ConduitSize> {
    let (_, three_wire, four_wire) = CONDUIT_TABLE
        .iter()
        .find(|(g, _, _)| *g == gauge)
        .ok_or_else(|| CalcError::table_lookup_miss("conduit", gauge.label()))?;

    match wire_count {
        3 => Ok(*three_wire),
        4 => Ok(*four_wire),
        other => Err(CalcError::invalid_input(
            "wire_count",
            other.to_string(),
            "Wire count must be 3 or 4",
        )),
    }
}
