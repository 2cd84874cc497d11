//! # Grounding Conductor Selection
//!
//! Minimum equipment grounding conductor for a feeder's overcurrent device.
//! The rating is rounded to the nearest whole amp before the table lookup.

use tracing::debug;

use crate::conductors::{grounding_size_for, Gauge};
use crate::errors::{require_positive, CalcResult};

/// Select the equipment grounding conductor for `mocp_amps`.
///
/// ```rust
/// use feeder_core::calculations::grounding::select_grounding;
/// use feeder_core::conductors::Gauge;
///
/// assert_eq!(select_grounding(100.0).unwrap(), Gauge::Awg8);
/// assert_eq!(select_grounding(225.0).unwrap(), Gauge::Awg4);
/// ```
pub fn select_grounding(mocp_amps: f64) -> CalcResult<Gauge> {
    require_positive("mocp_amps", mocp_amps)?;
    let gauge = grounding_size_for(mocp_amps.round())?;
    debug!(mocp_amps, grounding = %gauge, "grounding conductor selected");
    Ok(gauge)
}
