//! Equipment Grounding Conductor Sizes
//!
//! Minimum copper equipment grounding conductor by overcurrent device
//! rating (NEC Table 250.122). A rating maps to the first breakpoint it
//! does not exceed.

use super::gauge::Gauge;
use crate::errors::{CalcError, CalcResult};

/// (maximum MOCP in amps, grounding conductor)
static GROUNDING_BREAKPOINTS: [(f64, Gauge); 18] = [
    (20.0, Gauge::Awg12),
    (60.0, Gauge::Awg10),
    (100.0, Gauge::Awg8),
    (200.0, Gauge::Awg6),
    (300.0, Gauge::Awg4),
    (400.0, Gauge::Awg3),
    (500.0, Gauge::Awg2),
    (600.0, Gauge::Awg1),
    (800.0, Gauge::Awg0),
    (1000.0, Gauge::Awg00),
    (1200.0, Gauge::Awg000),
    (1600.0, Gauge::Awg0000),
    (2000.0, Gauge::Kcmil250),
    (2500.0, Gauge::Kcmil350),
    (3000.0, Gauge::Kcmil400),
    (4000.0, Gauge::Kcmil500),
    (5000.0, Gauge::Kcmil700),
    (6000.0, Gauge::Kcmil800),
];

/// Largest MOCP the grounding table covers
pub const MAX_GROUNDING_MOCP_A: f64 = 6000.0;

/// Look up the grounding conductor for an overcurrent device rating.
pub fn grounding_size_for(mocp_amps: f64) -> CalcResult<Gauge> {
    GROUNDING_BREAKPOINTS
        .iter()
        .find(|(limit, _)| mocp_amps <= *limit)
        .map(|(_, gauge)| *gauge)
        .ok_or_else(|| CalcError::table_lookup_miss("grounding", mocp_amps.to_string()))
}
