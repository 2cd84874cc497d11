//! # feeder_core - Feeder Sizing Engine
//!
//! `feeder_core` sizes building electrical feeders: copper conductors
//! (including parallel sets), trade conduit, equipment grounding conductor,
//! voltage drop, available fault current, and the six annotation lines
//! placed on drawings. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Static Tables**: Code tables are compile-time data indexed by [`Gauge`]
//!
//! ## Quick Start
//!
//! ```rust
//! use feeder_core::calculations::feeder::{calculate, FeederInput};
//! use feeder_core::{CircuitPhase, DesignSettings};
//!
//! let input = FeederInput {
//!     label: "LP-1".to_string(),
//!     load_amps: 50.0,
//!     mocp_amps: 60.0,
//!     distance_ft: 20.0,
//!     line_voltage: 208.0,
//!     phase: CircuitPhase::Three,
//!     wire_count: 4,
//!     max_voltage_drop_percent: Some(3.0),
//! };
//!
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//! for line in result.labels.lines() {
//!     println!("{}", line);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Wire, conduit, grounding, feeder and fault current calculations
//! - [`conductors`] - Conductor, conduit fill and grounding tables
//! - [`equations`] - Voltage drop and point-to-point formulas with metadata
//! - [`labels`] - Drawing label formatting
//! - [`phase`] - Single/three-phase multipliers
//! - [`settings`] - Design defaults
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod conductors;
pub mod equations;
pub mod errors;
pub mod labels;
pub mod phase;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use conductors::Gauge;
pub use errors::{CalcError, CalcResult};
pub use phase::CircuitPhase;
pub use settings::DesignSettings;
