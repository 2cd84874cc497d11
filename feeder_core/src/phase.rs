//! # Circuit Phase
//!
//! Phase arrangement of a feeder and the multipliers that go with it.
//!
//! ```text
//! Single-phase (line-to-line or line-to-neutral): k = 2.0
//! Three-phase:                                    k = √3 ≈ 1.732
//! ```
//!
//! The same `k` appears in the voltage drop formula and as the point-to-point
//! `y` factor.

use serde::{Deserialize, Serialize};

/// √3 to the precision used on all existing calculations
pub const SQRT_3: f64 = 1.732;

/// Single-phase multiplier (out and back)
pub const SINGLE_PHASE_MULTIPLIER: f64 = 2.0;

/// Phase arrangement of a circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CircuitPhase {
    /// Single-phase, including line-to-neutral circuits
    #[serde(rename = "1PH")]
    Single,
    /// Three-phase
    #[default]
    #[serde(rename = "3PH")]
    Three,
}

impl CircuitPhase {
    /// Voltage drop / point-to-point multiplier
    pub fn multiplier(&self) -> f64 {
        match self {
            CircuitPhase::Single => SINGLE_PHASE_MULTIPLIER,
            CircuitPhase::Three => SQRT_3,
        }
    }

    /// Number of phases shown on the system label
    pub fn phase_count(&self) -> u8 {
        match self {
            CircuitPhase::Single => 1,
            CircuitPhase::Three => 3,
        }
    }

    pub fn is_three_phase(&self) -> bool {
        matches!(self, CircuitPhase::Three)
    }

    /// Create from a phase count (1 or 3)
    pub fn from_phase_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(CircuitPhase::Single),
            3 => Some(CircuitPhase::Three),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CircuitPhase::Single => "Single-phase",
            CircuitPhase::Three => "Three-phase",
        }
    }
}

impl std::fmt::Display for CircuitPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        assert_eq!(CircuitPhase::Single.multiplier(), 2.0);
        assert_eq!(CircuitPhase::Three.multiplier(), 1.732);
    }

    #[test]
    fn test_phase_count_roundtrip() {
        for phase in [CircuitPhase::Single, CircuitPhase::Three] {
            assert_eq!(CircuitPhase::from_phase_count(phase.phase_count()), Some(phase));
        }
        assert_eq!(CircuitPhase::from_phase_count(2), None);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&CircuitPhase::Three).unwrap(), "\"3PH\"");
        let parsed: CircuitPhase = serde_json::from_str("\"1PH\"").unwrap();
        assert_eq!(parsed, CircuitPhase::Single);
    }
}
