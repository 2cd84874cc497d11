//! # Equation Registry
//!
//! Central registry of every formula the sizing engine evaluates, with the
//! metadata needed for an audit trail (code reference, variables,
//! assumptions, implementing function).
//!
//! ## Usage
//!
//! ```rust
//! use feeder_core::equations::registry::Equation;
//!
//! let meta = Equation::VoltageDrop.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to an electrical code or standard method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// NFPA 70, National Electrical Code
    NEC { year: u16, section: &'static str },
    /// Point-to-point short-circuit calculation method
    PointToPoint,
    /// Ohm's law and basic circuit theory
    CircuitTheory,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::NEC { year, section } => format!("NEC {} {}", year, section),
            CodeReference::PointToPoint => "Point-to-Point Short-Circuit Method".to_string(),
            CodeReference::CircuitTheory => "Circuit Theory".to_string(),
        }
    }
}

// ============================================================================
// Categories, Variables, Metadata
// ============================================================================

/// Categories for grouping equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Conductor voltage drop
    VoltageDrop,
    /// Conductor selection checks
    DesignChecks,
    /// Available fault current
    ShortCircuit,
}

impl EquationCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::VoltageDrop => "Voltage Drop",
            EquationCategory::DesignChecks => "Design Checks",
            EquationCategory::ShortCircuit => "Short Circuit",
        }
    }
}

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// What this equation calculates
    pub description: &'static str,
    /// Plain-text formula
    pub formula_plain: &'static str,
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source file implementing the equation
    pub source_module: &'static str,
    /// Function implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the sizing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// VD = R / n × I × L × k
    VoltageDrop,
    /// VD% = VD / V × 100
    VoltageDropPercent,
    /// Ampacity ≥ round(I / n)
    AmpacityCheck,
    /// f = y × L × I / (n × C × V)
    PointToPointFactor,
    /// M = 1 / (1 + f)
    PointToPointMultiplier,
    /// I_FLA = kVA × 1000 / V / y
    TransformerFullLoadCurrent,
    /// I_SCA = I_FLA × PF / %Z
    TransformerShortCircuitCurrent,
}

/// Every registered equation, in document order
pub const ALL_EQUATIONS: [Equation; 7] = [
    Equation::VoltageDrop,
    Equation::VoltageDropPercent,
    Equation::AmpacityCheck,
    Equation::PointToPointFactor,
    Equation::PointToPointMultiplier,
    Equation::TransformerFullLoadCurrent,
    Equation::TransformerShortCircuitCurrent,
];

const VOLTAGE_DROP_MODULE: &str = "feeder_core/src/equations/voltage_drop.rs";
const POINT_TO_POINT_MODULE: &str = "feeder_core/src/equations/point_to_point.rs";

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::VoltageDrop => EquationMetadata {
                name: "Conductor Voltage Drop",
                description: "Resistive voltage drop along a feeder of parallel conductor sets.",
                formula_plain: "VD = R / n * I * L * k",
                reference: CodeReference::CircuitTheory,
                variables: vec![
                    Variable::new("R", "Conductor DC resistance", "ohm/ft"),
                    Variable::new("n", "Parallel conductor sets", "-"),
                    Variable::new("I", "Current", "A"),
                    Variable::new("L", "One-way run length", "ft"),
                    Variable::new("k", "Phase multiplier (2.0 1PH, 1.732 3PH)", "-"),
                ],
                assumptions: vec!["Reactance neglected", "Copper at table resistance"],
                category: EquationCategory::VoltageDrop,
                source_module: VOLTAGE_DROP_MODULE,
                source_function: "voltage_drop",
            },
            Equation::VoltageDropPercent => EquationMetadata {
                name: "Voltage Drop Percent",
                description: "Voltage drop relative to system line voltage.",
                formula_plain: "VD% = VD / V * 100",
                reference: CodeReference::NEC { year: 2023, section: "215.2(A)(2) Informational Note 2" },
                variables: vec![
                    Variable::new("VD", "Voltage drop", "V"),
                    Variable::new("V", "System line voltage", "V"),
                ],
                assumptions: vec![],
                category: EquationCategory::VoltageDrop,
                source_module: VOLTAGE_DROP_MODULE,
                source_function: "voltage_drop_percent",
            },
            Equation::AmpacityCheck => EquationMetadata {
                name: "Conductor Ampacity Check",
                description: "Each parallel set must carry its share of the current.",
                formula_plain: "Ampacity >= round(I / n)",
                reference: CodeReference::NEC { year: 2023, section: "Table 310.16" },
                variables: vec![
                    Variable::new("I", "Design current (MOCP or load)", "A"),
                    Variable::new("n", "Parallel conductor sets", "-"),
                ],
                assumptions: vec!["75 C column, 12/10 AWG limited to 20/30 A"],
                category: EquationCategory::DesignChecks,
                source_module: "feeder_core/src/calculations/wire.rs",
                source_function: "select_wire",
            },
            Equation::PointToPointFactor => EquationMetadata {
                name: "Point-to-Point f Factor",
                description: "Attenuation factor of fault current along a feeder.",
                formula_plain: "f = y * L * I / (n * C * V)",
                reference: CodeReference::PointToPoint,
                variables: vec![
                    Variable::new("y", "1.732 3PH, 2.0 1PH", "-"),
                    Variable::new("L", "Run length", "ft"),
                    Variable::new("I", "Fault current at start of run", "A"),
                    Variable::new("n", "Parallel conductor sets", "-"),
                    Variable::new("C", "Conductor constant", "-"),
                    Variable::new("V", "Line voltage", "V"),
                ],
                assumptions: vec!["Three single conductors in steel conduit"],
                category: EquationCategory::ShortCircuit,
                source_module: POINT_TO_POINT_MODULE,
                source_function: "f_factor",
            },
            Equation::PointToPointMultiplier => EquationMetadata {
                name: "Point-to-Point Multiplier",
                description: "Fraction of source fault current available at the end of the run.",
                formula_plain: "M = 1 / (1 + f)",
                reference: CodeReference::PointToPoint,
                variables: vec![Variable::new("f", "Attenuation factor", "-")],
                assumptions: vec![],
                category: EquationCategory::ShortCircuit,
                source_module: POINT_TO_POINT_MODULE,
                source_function: "multiplier",
            },
            Equation::TransformerFullLoadCurrent => EquationMetadata {
                name: "Transformer Full-Load Current",
                description: "Secondary full-load amps from the transformer rating.",
                formula_plain: "I_FLA = kVA * 1000 / V / y",
                reference: CodeReference::CircuitTheory,
                variables: vec![
                    Variable::new("kVA", "Transformer rating", "kVA"),
                    Variable::new("V", "Secondary line voltage", "V"),
                    Variable::new("y", "1.732 3PH, 1.0 1PH", "-"),
                ],
                assumptions: vec![],
                category: EquationCategory::ShortCircuit,
                source_module: POINT_TO_POINT_MODULE,
                source_function: "transformer_full_load_current",
            },
            Equation::TransformerShortCircuitCurrent => EquationMetadata {
                name: "Transformer Secondary Fault Current",
                description: "Infinite-bus fault current at the transformer secondary terminals.",
                formula_plain: "I_SCA = I_FLA * PF / %Z",
                reference: CodeReference::PointToPoint,
                variables: vec![
                    Variable::new("I_FLA", "Full-load current", "A"),
                    Variable::new("PF", "Power factor term", "-"),
                    Variable::new("%Z", "Transformer percent impedance", "%"),
                ],
                assumptions: vec!["Infinite primary source"],
                category: EquationCategory::ShortCircuit,
                source_module: POINT_TO_POINT_MODULE,
                source_function: "transformer_short_circuit_current",
            },
        }
    }

    /// Equations in one category, in document order
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .copied()
            .filter(|eq| eq.metadata().category == category)
            .collect()
    }

    /// Categories that have at least one equation, sorted
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut categories: Vec<EquationCategory> = ALL_EQUATIONS.iter().map(|eq| eq.metadata().category).collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

/// Render the EQUATIONS.md audit reference.
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Feedwire Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used by the feeder sizing engine, with its
reference, variables, and implementing function.

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in Equation::in_category(*category) {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!("**Source:** [`{}`]({})\n\n", meta.source_function, meta.source_module));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 7);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
        }

        assert!(Equation::PointToPointFactor.metadata().formula_plain.contains("n * C * V"));
    }

    #[test]
    fn test_code_reference_citation() {
        let nec = CodeReference::NEC { year: 2023, section: "Table 250.122" };
        assert_eq!(nec.citation(), "NEC 2023 Table 250.122");
    }

    #[test]
    fn test_categories() {
        let categories = Equation::all_categories();
        assert_eq!(categories.len(), 3);
        assert_eq!(Equation::in_category(EquationCategory::ShortCircuit).len(), 4);
    }

    #[test]
    fn test_markdown_generation() {
        let md = generate_equations_markdown();
        assert!(md.starts_with("# Feedwire Equations Reference"));
        assert!(md.contains("### Conductor Voltage Drop"));
        assert!(md.contains("## Short Circuit"));
        assert!(md.contains("**Total Equations:** 7"));
    }
}
