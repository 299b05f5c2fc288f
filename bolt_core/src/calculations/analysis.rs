//! # Tensile Failure Analysis
//!
//! Computes the tensile failure load of a threaded fastener from its thread
//! geometry and material yield strength.
//!
//! ## Assumptions
//!
//! - Metric coarse (60-degree ISO) thread form
//! - Pure axial tension; yield governs (no shear, fatigue, or stripping)
//! - Consistent mm/MPa/N units throughout
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use bolt_core::calculations::analysis::{self, AnalysisInput};
//! use bolt_core::materials::MaterialSpec;
//!
//! let input = AnalysisInput {
//!     label: "B-1".to_string(),
//!     nominal_diameter_mm: 12.0,
//!     pitch_mm: 1.75,
//!     material: MaterialSpec::new(400.0),
//! };
//!
//! let result = analysis::calculate(&input).unwrap();
//!
//! println!("Stress area: {:.2} mm²", result.stress_area_mm2);
//! println!("Failure load: {:.2} N", result.failure_load_n);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::FastenerResult;
use crate::materials::MaterialSpec;
use crate::threads::ThreadSpec;
use crate::units::Newtons;

/// Input parameters for a tensile failure analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "nominal_diameter_mm": 12.0,
///   "pitch_mm": 1.75,
///   "material": { "yield_strength_mpa": 400.0 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// User label for this fastener (e.g., "B-1", "Flange bolt")
    #[serde(default)]
    pub label: String,

    /// Major (nominal) thread diameter in mm
    pub nominal_diameter_mm: f64,

    /// Thread pitch in mm
    pub pitch_mm: f64,

    /// Fastener material (yield strength)
    pub material: MaterialSpec,
}

impl AnalysisInput {
    /// Validate input parameters.
    pub fn validate(&self) -> FastenerResult<()> {
        self.thread_spec().validate()?;
        self.material.validate()?;
        Ok(())
    }

    /// Thread geometry for this input
    pub fn thread_spec(&self) -> ThreadSpec {
        ThreadSpec::new(self.nominal_diameter_mm, self.pitch_mm)
    }
}

/// Results from a tensile failure analysis.
///
/// `failure_load_n` is the unrounded, authoritative value; use
/// [`failure_load_rounded`](Self::failure_load_rounded) for presentation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "failure_load_n": 33706.61,
///   "stress_diameter_mm": 10.3582,
///   "stress_area_mm2": 84.27,
///   "yield_strength_mpa": 400.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Tensile failure load in newtons (unrounded)
    pub failure_load_n: f64,

    /// Tensile-stress diameter d_s (mm)
    pub stress_diameter_mm: f64,

    /// Tensile-stress area A_s (mm²)
    pub stress_area_mm2: f64,

    /// Yield strength used for the check (MPa)
    pub yield_strength_mpa: f64,
}

impl AnalysisResult {
    /// Failure load rounded to 2 decimals for presentation
    pub fn failure_load_rounded(&self) -> f64 {
        (self.failure_load_n * 100.0).round() / 100.0
    }

    /// Failure load as a typed force
    pub fn failure_load(&self) -> Newtons {
        Newtons(self.failure_load_n)
    }
}

/// Calculate the tensile failure load.
///
/// Pure function of its inputs: no side effects, no hidden state, same
/// inputs always produce the same result.
///
/// # Arguments
///
/// * `input` - Thread geometry and material
///
/// # Returns
///
/// * `Ok(AnalysisResult)` - Calculation results
/// * `Err(FastenerError)` - If the geometry or material is invalid
pub fn calculate(input: &AnalysisInput) -> FastenerResult<AnalysisResult> {
    input.validate()?;

    let thread = input.thread_spec();
    let stress_area_mm2 = thread.stress_area_mm2()?;
    let failure_load_n = input.material.yield_strength_mpa * stress_area_mm2;

    Ok(AnalysisResult {
        failure_load_n,
        stress_diameter_mm: thread.stress_diameter_mm(),
        stress_area_mm2,
        yield_strength_mpa: input.material.yield_strength_mpa,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m12_input() -> AnalysisInput {
        AnalysisInput {
            label: "Test M12".to_string(),
            nominal_diameter_mm: 12.0,
            pitch_mm: 1.75,
            material: MaterialSpec::new(400.0),
        }
    }

    #[test]
    fn test_m12_reference_values() {
        let result = calculate(&m12_input()).unwrap();

        // d_s = 12 - 0.938194 * 1.75 = 10.3582 mm
        assert!((result.stress_diameter_mm - 10.3582).abs() < 0.001);
        // A_s = (pi/4) * d_s² = 84.27 mm²
        assert!((result.stress_area_mm2 - 84.27).abs() < 0.01);
        // F = 400 * A_s = 33706.6 N
        assert!((result.failure_load_n - 33706.6).abs() < 0.5);
    }

    #[test]
    fn test_rounding_is_presentation_only() {
        let result = calculate(&m12_input()).unwrap();
        let rounded = result.failure_load_rounded();
        assert!((rounded - result.failure_load_n).abs() <= 0.005);
        // Rounded value has at most 2 decimals
        assert!(((rounded * 100.0).round() - rounded * 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_idempotence() {
        let input = m12_input();
        let a = serde_json::to_string(&calculate(&input).unwrap()).unwrap();
        let b = serde_json::to_string(&calculate(&input).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let mut input = m12_input();
        input.pitch_mm = 12.0; // d == p
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_invalid_material_rejected() {
        let mut input = m12_input();
        input.material = MaterialSpec::new(-400.0);
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_typed_force_accessor() {
        let result = calculate(&m12_input()).unwrap();
        assert_eq!(result.failure_load().0, result.failure_load_n);
    }

    #[test]
    fn test_serialization() {
        let input = m12_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: AnalysisInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.nominal_diameter_mm, roundtrip.nominal_diameter_mm);
        assert_eq!(input.material, roundtrip.material);

        // Label is optional on the wire
        let bare: AnalysisInput = serde_json::from_str(
            r#"{ "nominal_diameter_mm": 12.0, "pitch_mm": 1.75,
                 "material": { "yield_strength_mpa": 400.0 } }"#,
        )
        .unwrap();
        assert_eq!(bare.label, "");
    }
}
