//! Copper Conductor Sizes
//!
//! Standard conductor size designations with their fixed electrical
//! properties: DC resistance, maximum ampacity, and the point-to-point
//! conductor constant "C".
//!
//! ## Ordering
//!
//! [`Gauge`] derives `Ord` in ascending cross-sectional area, so
//! `Gauge::Awg12 < Gauge::Awg0 < Gauge::Kcmil500`. The wire search walks
//! [`Gauge::FEEDER_SIZES`] in that order.
//!
//! ## Ampacity column
//!
//! Ampacities follow the 75°C copper column, with 12 and 10 AWG held to
//! their 20 A / 30 A overcurrent limits. Keep the numbers as they are:
//! existing drawings reproduce them.
//!
//! ## Sources
//!
//! - Resistance: NEC Chapter 9, Table 8 (uncoated copper, Ω/kft)
//! - Ampacity: NEC Table 310.16 with 240.4(D)
//! - C values: point-to-point method, three single conductors in steel conduit, 600 V

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Copper conductor size (AWG and kcmil)
///
/// Declaration order is the size order. Do not reorder variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gauge {
    /// 12 AWG
    #[serde(rename = "12")]
    Awg12,
    /// 10 AWG
    #[serde(rename = "10")]
    Awg10,
    /// 8 AWG
    #[serde(rename = "8")]
    Awg8,
    /// 6 AWG
    #[serde(rename = "6")]
    Awg6,
    /// 4 AWG
    #[serde(rename = "4")]
    Awg4,
    /// 3 AWG
    #[serde(rename = "3")]
    Awg3,
    /// 2 AWG
    #[serde(rename = "2")]
    Awg2,
    /// 1 AWG
    #[serde(rename = "1")]
    Awg1,
    /// 1/0 AWG
    #[serde(rename = "1/0")]
    Awg0,
    /// 2/0 AWG
    #[serde(rename = "2/0")]
    Awg00,
    /// 3/0 AWG
    #[serde(rename = "3/0")]
    Awg000,
    /// 4/0 AWG
    #[serde(rename = "4/0")]
    Awg0000,
    /// 250 kcmil
    #[serde(rename = "250")]
    Kcmil250,
    /// 300 kcmil
    #[serde(rename = "300")]
    Kcmil300,
    /// 350 kcmil
    #[serde(rename = "350")]
    Kcmil350,
    /// 400 kcmil
    #[serde(rename = "400")]
    Kcmil400,
    /// 500 kcmil
    #[serde(rename = "500")]
    Kcmil500,
    /// 700 kcmil (grounding conductor only)
    #[serde(rename = "700")]
    Kcmil700,
    /// 800 kcmil (grounding conductor only)
    #[serde(rename = "800")]
    Kcmil800,
}

/// Fixed properties of one conductor size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductorProperties {
    pub gauge: Gauge,
    /// DC resistance in ohms per 1000 ft
    pub resistance_per_kft: f64,
    /// Maximum ampacity in amps
    pub max_ampacity_a: f64,
    /// Point-to-point conductor constant C (0.0 = no value)
    pub phase_constant: f64,
}

const fn row(gauge: Gauge, resistance_per_kft: f64, max_ampacity_a: f64, phase_constant: f64) -> ConductorProperties {
    ConductorProperties {
        gauge,
        resistance_per_kft,
        max_ampacity_a,
        phase_constant,
    }
}

/// Conductor property table, indexed by `Gauge as usize`.
static CONDUCTOR_TABLE: [ConductorProperties; 19] = [
    row(Gauge::Awg12, 1.98, 20.0, 617.0),
    row(Gauge::Awg10, 1.24, 30.0, 981.0),
    row(Gauge::Awg8, 0.778, 50.0, 1557.0),
    row(Gauge::Awg6, 0.491, 65.0, 2425.0),
    row(Gauge::Awg4, 0.308, 85.0, 3806.0),
    row(Gauge::Awg3, 0.245, 100.0, 4774.0),
    row(Gauge::Awg2, 0.194, 115.0, 5907.0),
    row(Gauge::Awg1, 0.154, 130.0, 7293.0),
    row(Gauge::Awg0, 0.122, 150.0, 8925.0),
    row(Gauge::Awg00, 0.0967, 175.0, 10755.0),
    row(Gauge::Awg000, 0.0766, 200.0, 12844.0),
    row(Gauge::Awg0000, 0.0608, 230.0, 15082.0),
    row(Gauge::Kcmil250, 0.0515, 255.0, 16483.0),
    row(Gauge::Kcmil300, 0.0429, 285.0, 18177.0),
    row(Gauge::Kcmil350, 0.0367, 310.0, 19704.0),
    row(Gauge::Kcmil400, 0.0321, 335.0, 20566.0),
    row(Gauge::Kcmil500, 0.0258, 380.0, 22185.0),
    row(Gauge::Kcmil700, 0.0184, 460.0, 0.0),
    row(Gauge::Kcmil800, 0.0161, 490.0, 0.0),
];

impl Gauge {
    /// Every size in ascending order
    pub const ALL: [Gauge; 19] = [
        Gauge::Awg12,
        Gauge::Awg10,
        Gauge::Awg8,
        Gauge::Awg6,
        Gauge::Awg4,
        Gauge::Awg3,
        Gauge::Awg2,
        Gauge::Awg1,
        Gauge::Awg0,
        Gauge::Awg00,
        Gauge::Awg000,
        Gauge::Awg0000,
        Gauge::Kcmil250,
        Gauge::Kcmil300,
        Gauge::Kcmil350,
        Gauge::Kcmil400,
        Gauge::Kcmil500,
        Gauge::Kcmil700,
        Gauge::Kcmil800,
    ];

    /// Sizes the wire search may return, smallest first
    pub const FEEDER_SIZES: [Gauge; 17] = [
        Gauge::Awg12,
        Gauge::Awg10,
        Gauge::Awg8,
        Gauge::Awg6,
        Gauge::Awg4,
        Gauge::Awg3,
        Gauge::Awg2,
        Gauge::Awg1,
        Gauge::Awg0,
        Gauge::Awg00,
        Gauge::Awg000,
        Gauge::Awg0000,
        Gauge::Kcmil250,
        Gauge::Kcmil300,
        Gauge::Kcmil350,
        Gauge::Kcmil400,
        Gauge::Kcmil500,
    ];

    /// Get the full property row for this size
    pub fn properties(&self) -> &'static ConductorProperties {
        &CONDUCTOR_TABLE[*self as usize]
    }

    /// DC resistance in ohms per foot
    pub fn resistance_per_ft(&self) -> f64 {
        self.properties().resistance_per_kft / 1000.0
    }

    /// Maximum ampacity in amps
    pub fn max_ampacity(&self) -> f64 {
        self.properties().max_ampacity_a
    }

    /// Point-to-point conductor constant C
    pub fn phase_conductor_constant(&self) -> f64 {
        self.properties().phase_constant
    }

    /// Get the label used on drawings (e.g., "12", "1/0", "250")
    pub fn label(&self) -> &'static str {
        match self {
            Gauge::Awg12 => "12",
            Gauge::Awg10 => "10",
            Gauge::Awg8 => "8",
            Gauge::Awg6 => "6",
            Gauge::Awg4 => "4",
            Gauge::Awg3 => "3",
            Gauge::Awg2 => "2",
            Gauge::Awg1 => "1",
            Gauge::Awg0 => "1/0",
            Gauge::Awg00 => "2/0",
            Gauge::Awg000 => "3/0",
            Gauge::Awg0000 => "4/0",
            Gauge::Kcmil250 => "250",
            Gauge::Kcmil300 => "300",
            Gauge::Kcmil350 => "350",
            Gauge::Kcmil400 => "400",
            Gauge::Kcmil500 => "500",
            Gauge::Kcmil700 => "700",
            Gauge::Kcmil800 => "800",
        }
    }

    /// Get a descriptive name with units (e.g., "1/0 AWG", "250 kcmil")
    pub fn display_name(&self) -> String {
        if *self >= Gauge::Kcmil250 {
            format!("{} kcmil", self.label())
        } else {
            format!("{} AWG", self.label())
        }
    }
}

impl std::fmt::Display for Gauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Gauge {
    type Err = CalcError;

    /// Parse a drawing label; "AWG"/"kcmil"/"MCM" suffixes and a leading '#' are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s
            .trim()
            .trim_start_matches('#')
            .trim_end_matches("AWG")
            .trim_end_matches("kcmil")
            .trim_end_matches("MCM")
            .trim();
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.label() == cleaned)
            .ok_or_else(|| CalcError::invalid_input("gauge", s, "Unknown conductor size"))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for (i, gauge) in Gauge::ALL.iter().enumerate() {
            assert_eq!(CONDUCTOR_TABLE[i].gauge, *gauge);
        }
    }

    #[test]
    fn test_gauges_ascend_in_area() {
        // Larger conductors: lower resistance, higher ampacity
        for pair in Gauge::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].resistance_per_ft() > pair[1].resistance_per_ft());
            assert!(pair[0].max_ampacity() < pair[1].max_ampacity());
        }
    }

    #[test]
    fn test_known_properties() {
        assert_eq!(Gauge::Awg12.max_ampacity(), 20.0);
        assert_eq!(Gauge::Awg6.max_ampacity(), 65.0);
        assert!((Gauge::Awg12.resistance_per_ft() - 0.00198).abs() < 1e-9);
        assert_eq!(Gauge::Awg0000.phase_conductor_constant(), 15082.0);
        assert_eq!(Gauge::Kcmil800.phase_conductor_constant(), 0.0);
    }

    #[test]
    fn test_feeder_sizes() {
        assert_eq!(Gauge::FEEDER_SIZES.first(), Some(&Gauge::Awg12));
        assert_eq!(Gauge::FEEDER_SIZES.last(), Some(&Gauge::Kcmil500));
        assert!(!Gauge::FEEDER_SIZES.contains(&Gauge::Kcmil700));
        assert!(Gauge::FEEDER_SIZES.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_labels_and_parsing() {
        assert_eq!(Gauge::Awg00.label(), "2/0");
        assert_eq!(Gauge::Awg00.display_name(), "2/0 AWG");
        assert_eq!(Gauge::Kcmil350.display_name(), "350 kcmil");
        assert_eq!("1/0".parse::<Gauge>().unwrap(), Gauge::Awg0);
        assert_eq!("#12".parse::<Gauge>().unwrap(), Gauge::Awg12);
        assert_eq!("250 kcmil".parse::<Gauge>().unwrap(), Gauge::Kcmil250);
        assert_eq!("500MCM".parse::<Gauge>().unwrap(), Gauge::Kcmil500);
        assert!("14".parse::<Gauge>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Gauge::Awg000).unwrap();
        assert_eq!(json, "\"3/0\"");
        let parsed: Gauge = serde_json::from_str("\"300\"").unwrap();
        assert_eq!(parsed, Gauge::Kcmil300);
    }
}
