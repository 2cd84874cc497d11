//! # Conductor Tables
//!
//! Static, read-only engineering data keyed by conductor size. Nothing
//! here changes after compilation, so every lookup is safe to call from
//! any thread.
//!
//! ## Modules
//!
//! - [`gauge`] - Conductor sizes with resistance, ampacity and C values
//! - [`conduit`] - Trade conduit size by gauge and wire count
//! - [`grounding`] - Equipment grounding conductor by MOCP
//!
//! ## Example
//!
//! ```rust
//! use feeder_core::conductors::{conduit_size_for, grounding_size_for, Gauge};
//!
//! assert_eq!(Gauge::Awg6.max_ampacity(), 65.0);
//! assert_eq!(conduit_size_for(Gauge::Awg6, 4).unwrap().label(), "3/4");
//! assert_eq!(grounding_size_for(100.0).unwrap(), Gauge::Awg8);
//! ```

pub mod conduit;
pub mod gauge;
pub mod grounding;

pub use conduit::{conduit_size_for, ConduitSize};
pub use gauge::{ConductorProperties, Gauge};
pub use grounding::{grounding_size_for, MAX_GROUNDING_MOCP_A};
