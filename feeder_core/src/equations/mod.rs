//! # Electrical Equations
//!
//! Every formula the sizing engine evaluates lives here, so the arithmetic
//! can be checked against its reference in one place.
//!
//! ## Modules
//!
//! - [`voltage_drop`] - Conductor voltage drop (volts and percent)
//! - [`point_to_point`] - Fault current attenuation and transformer fault current
//! - [`registry`] - Equation metadata for the EQUATIONS.md audit reference
//!
//! ## Units
//!
//! - Length: feet
//! - Resistance: ohms per foot
//! - Current: amps
//! - Voltage: volts (line-to-line for three-phase)

pub mod point_to_point;
pub mod registry;
pub mod voltage_drop;

pub use point_to_point::{
    f_factor,
    multiplier,
    transformer_full_load_current,
    transformer_short_circuit_current,
    y_factor,
};
pub use registry::{generate_equations_markdown, CodeReference, Equation, EquationCategory, EquationMetadata};
pub use voltage_drop::{allowed_drop_volts, voltage_drop, voltage_drop_percent};
