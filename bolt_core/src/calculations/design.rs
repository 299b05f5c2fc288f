//! # Reverse Sizing (Design)
//!
//! Selects the smallest standard metric coarse size whose tensile capacity
//! meets a required load times a safety factor.
//!
//! The scan walks [`StandardSize::ALL`] in ascending diameter order and
//! returns on the first fit, so the selection is guaranteed to be the
//! smallest qualifying size even when larger sizes also qualify. An
//! exhausted table is a normal outcome ([`DesignOutcome::NoFit`]), not an
//! error: the engine never extrapolates past M36.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use bolt_core::calculations::design::{self, DesignInput};
//! use bolt_core::materials::MaterialSpec;
//!
//! let input = DesignInput {
//!     label: "Base plate anchor".to_string(),
//!     required_load_n: 20_000.0,
//!     material: MaterialSpec::new(400.0),
//!     safety_factor: 1.5,
//! };
//!
//! let outcome = design::calculate(&input).unwrap();
//! let selection = outcome.selection().unwrap();
//! assert_eq!(selection.size.designation(), "M12");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{FastenerError, FastenerResult};
use crate::materials::MaterialSpec;
use crate::threads::StandardSize;
use crate::units::Newtons;

/// Default engineering margin applied to the required load
pub const DEFAULT_SAFETY_FACTOR: f64 = 1.5;

fn default_safety_factor() -> f64 {
    DEFAULT_SAFETY_FACTOR
}

/// Input parameters for reverse sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Base plate anchor",
///   "required_load_n": 20000.0,
///   "material": { "yield_strength_mpa": 400.0 },
///   "safety_factor": 1.5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignInput {
    /// User label for this selection (e.g., "Base plate anchor")
    #[serde(default)]
    pub label: String,

    /// Load the fastener must carry, in newtons
    pub required_load_n: f64,

    /// Fastener material (yield strength)
    pub material: MaterialSpec,

    /// Multiplicative margin on the required load (defaults to 1.5)
    #[serde(default = "default_safety_factor")]
    pub safety_factor: f64,
}

impl DesignInput {
    /// Validate input parameters.
    pub fn validate(&self) -> FastenerResult<()> {
        // Negated comparisons so NaN fails too
        if !(self.required_load_n > 0.0) {
            return Err(FastenerError::invalid_input(
                "required_load_n",
                self.required_load_n.to_string(),
                "Required load must be positive",
            ));
        }
        self.material.validate()?;
        if !(self.safety_factor >= 1.0) {
            return Err(FastenerError::invalid_input(
                "safety_factor",
                self.safety_factor.to_string(),
                "Safety factor must be at least 1",
            ));
        }
        Ok(())
    }

    /// Capacity the selected size must reach (N)
    pub fn target_capacity_n(&self) -> f64 {
        self.required_load_n * self.safety_factor
    }
}

/// A standard size that satisfies the factored load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeSelection {
    /// Selected standard size
    pub size: StandardSize,

    /// Tensile capacity of the selected size in newtons (unrounded)
    pub capacity_n: f64,
}

impl SizeSelection {
    /// Full label with pitch (e.g., "M12 (Pitch 1.75mm)")
    pub fn label(&self) -> &'static str {
        self.size.label()
    }

    /// Capacity rounded to whole newtons for presentation
    pub fn capacity_rounded_n(&self) -> f64 {
        self.capacity_n.round()
    }

    /// Capacity as a typed force
    pub fn capacity(&self) -> Newtons {
        Newtons(self.capacity_n)
    }
}

/// Outcome of a reverse-sizing pass.
///
/// ## JSON Serialization
///
/// Serializes with a "type" discriminator:
///
/// ```json
/// { "type": "Selected", "size": "M12", "capacity_n": 33706.61 }
/// { "type": "NoFit" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DesignOutcome {
    /// Smallest standard size whose capacity meets the factored load
    Selected(SizeSelection),
    /// No listed size is strong enough; a higher-strength material is needed
    NoFit,
}

impl DesignOutcome {
    /// Check whether a size was found
    pub fn is_fit(&self) -> bool {
        matches!(self, DesignOutcome::Selected(_))
    }

    /// The selection, if any
    pub fn selection(&self) -> Option<&SizeSelection> {
        match self {
            DesignOutcome::Selected(selection) => Some(selection),
            DesignOutcome::NoFit => None,
        }
    }
}

/// Select the smallest standard size for the given load.
///
/// Scans [`StandardSize::ALL`]; see [`calculate_with_table`] to supply a
/// different (still ascending) table.
pub fn calculate(input: &DesignInput) -> FastenerResult<DesignOutcome> {
    calculate_with_table(input, &StandardSize::ALL)
}

/// Select the smallest size from a caller-provided table.
///
/// The table must be in ascending diameter order; the first entry whose
/// capacity reaches `required_load * safety_factor` wins.
///
/// # Arguments
///
/// * `input` - Required load, material, and margin
/// * `table` - Candidate sizes, smallest first
///
/// # Returns
///
/// * `Ok(DesignOutcome::Selected)` - Smallest qualifying size and its capacity
/// * `Ok(DesignOutcome::NoFit)` - No table entry meets the factored load
/// * `Err(FastenerError)` - If inputs are invalid
pub fn calculate_with_table(
    input: &DesignInput,
    table: &[StandardSize],
) -> FastenerResult<DesignOutcome> {
    input.validate()?;

    let target_n = input.target_capacity_n();

    for size in table {
        let stress_area_mm2 = size.thread_spec().stress_area_mm2()?;
        let capacity_n = input.material.yield_strength_mpa * stress_area_mm2;

        if capacity_n >= target_n {
            return Ok(DesignOutcome::Selected(SizeSelection {
                size: *size,
                capacity_n,
            }));
        }
    }

    Ok(DesignOutcome::NoFit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(required_load_n: f64) -> DesignInput {
        DesignInput {
            label: "Test".to_string(),
            required_load_n,
            material: MaterialSpec::new(400.0),
            safety_factor: 1.5,
        }
    }

    /// Capacity of one size at 400 MPa, for cross-checking selections
    fn capacity_at_400(size: StandardSize) -> f64 {
        400.0 * size.thread_spec().stress_area_mm2().unwrap()
    }

    #[test]
    fn test_selects_m12_for_20kn() {
        // Target = 20000 * 1.5 = 30000 N. M10 at 400 MPa carries ~23196 N
        // and must fail the margin; M12 at ~33707 N is the first fit.
        assert!(capacity_at_400(StandardSize::M10) < 30_000.0);
        assert!(capacity_at_400(StandardSize::M12) >= 30_000.0);

        let outcome = calculate(&input(20_000.0)).unwrap();
        let selection = outcome.selection().unwrap();
        assert_eq!(selection.size, StandardSize::M12);
        assert_eq!(selection.label(), "M12 (Pitch 1.75mm)");
        assert!((selection.capacity_n - 33706.6).abs() < 0.5);
    }

    #[test]
    fn test_first_match_wins_over_larger_sizes() {
        // Tiny load: every size qualifies, so the scan must still return M6
        let outcome = calculate(&input(100.0)).unwrap();
        assert_eq!(outcome.selection().unwrap().size, StandardSize::M6);
    }

    #[test]
    fn test_no_fit_for_huge_load() {
        let outcome = calculate(&input(1e9)).unwrap();
        assert_eq!(outcome, DesignOutcome::NoFit);
        assert!(!outcome.is_fit());
        assert!(outcome.selection().is_none());
    }

    #[test]
    fn test_selection_monotone_in_load() {
        // Increasing required load never decreases the selected diameter
        let loads = [500.0, 2_000.0, 8_000.0, 20_000.0, 60_000.0, 150_000.0];
        let mut last_diameter = 0.0;
        for load in loads {
            let outcome = calculate(&input(load)).unwrap();
            let selection = outcome.selection().unwrap();
            assert!(
                selection.size.diameter_mm() >= last_diameter,
                "selection must not shrink as load grows"
            );
            last_diameter = selection.size.diameter_mm();
        }
    }

    #[test]
    fn test_safety_factor_default() {
        let parsed: DesignInput = serde_json::from_str(
            r#"{ "required_load_n": 20000.0,
                 "material": { "yield_strength_mpa": 400.0 } }"#,
        )
        .unwrap();
        assert_eq!(parsed.safety_factor, DEFAULT_SAFETY_FACTOR);
        assert_eq!(parsed.label, "");
    }

    #[test]
    fn test_safety_factor_below_one_rejected() {
        let mut bad = input(20_000.0);
        bad.safety_factor = 0.9;
        let err = calculate(&bad).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_positive_load_rejected() {
        assert!(calculate(&input(0.0)).is_err());
        assert!(calculate(&input(-500.0)).is_err());
        assert!(calculate(&input(f64::NAN)).is_err());
    }

    #[test]
    fn test_custom_table() {
        // Restricting the table changes the answer: with only large sizes
        // listed, a small load still picks the first (smallest) entry.
        let table = [StandardSize::M20, StandardSize::M24];
        let outcome = calculate_with_table(&input(5_000.0), &table).unwrap();
        assert_eq!(outcome.selection().unwrap().size, StandardSize::M20);

        let empty: [StandardSize; 0] = [];
        let outcome = calculate_with_table(&input(5_000.0), &empty).unwrap();
        assert_eq!(outcome, DesignOutcome::NoFit);
    }

    #[test]
    fn test_idempotence() {
        let i = input(20_000.0);
        let a = serde_json::to_string(&calculate(&i).unwrap()).unwrap();
        let b = serde_json::to_string(&calculate(&i).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = calculate(&input(20_000.0)).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"type\":\"Selected\""));
        assert!(json.contains("\"size\":\"M12\""));
        let roundtrip: DesignOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, roundtrip);

        let json = serde_json::to_string(&DesignOutcome::NoFit).unwrap();
        assert_eq!(json, "{\"type\":\"NoFit\"}");
    }
}
