//! Metric Coarse Thread Geometry
//!
//! Thread dimensions per ISO 261/262 coarse series, with the tensile-stress
//! area relation used for capacity checks.
//!
//! ## Tensile-Stress Area
//!
//! A threaded rod under tension fails across a reduced effective section,
//! not the full nominal circle. For 60-degree ISO coarse threads the
//! effective (stress) diameter is
//!
//! ```text
//! d_s = d - 0.938194 * p
//! A_s = (pi / 4) * d_s²
//! ```
//!
//! where `d` is the nominal diameter and `p` the pitch, both in mm. The
//! coefficient follows from the thread-angle geometry and is treated as a
//! fixed empirical constant here.

use serde::{Deserialize, Serialize};

use crate::errors::{FastenerError, FastenerResult};

/// Reduction from nominal to tensile-stress diameter, per millimeter of
/// pitch, for 60-degree ISO metric coarse threads.
pub const STRESS_DIAMETER_COEFFICIENT: f64 = 0.938194;

/// Thread geometry for a metric coarse fastener.
///
/// Invariant: `nominal_diameter_mm > pitch_mm > 0`. Anything else is
/// non-physical and is rejected by [`ThreadSpec::validate`] before any
/// area is computed.
///
/// ## JSON Example
///
/// ```json
/// { "nominal_diameter_mm": 12.0, "pitch_mm": 1.75 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreadSpec {
    /// Major (nominal) thread diameter in mm
    pub nominal_diameter_mm: f64,

    /// Axial distance between adjacent crests in mm
    pub pitch_mm: f64,
}

impl ThreadSpec {
    /// Create a new thread spec. Call [`validate`](Self::validate) before
    /// computing areas.
    pub fn new(nominal_diameter_mm: f64, pitch_mm: f64) -> Self {
        Self {
            nominal_diameter_mm,
            pitch_mm,
        }
    }

    /// Validate thread geometry.
    pub fn validate(&self) -> FastenerResult<()> {
        // Negated comparisons so NaN inputs fail too
        if !(self.nominal_diameter_mm > 0.0) {
            return Err(FastenerError::invalid_geometry(
                self.nominal_diameter_mm,
                self.pitch_mm,
                "Nominal diameter must be positive",
            ));
        }
        if !(self.pitch_mm > 0.0) {
            return Err(FastenerError::invalid_geometry(
                self.nominal_diameter_mm,
                self.pitch_mm,
                "Pitch must be positive",
            ));
        }
        if self.nominal_diameter_mm <= self.pitch_mm {
            return Err(FastenerError::invalid_geometry(
                self.nominal_diameter_mm,
                self.pitch_mm,
                "Nominal diameter must exceed pitch for a coarse thread",
            ));
        }
        Ok(())
    }

    /// Tensile-stress diameter d_s = d - 0.938194 p (mm)
    pub fn stress_diameter_mm(&self) -> f64 {
        self.nominal_diameter_mm - STRESS_DIAMETER_COEFFICIENT * self.pitch_mm
    }

    /// Tensile-stress area A_s = (pi/4) d_s² (mm²)
    ///
    /// Validates the geometry first; a valid spec always yields a strictly
    /// positive area.
    pub fn stress_area_mm2(&self) -> FastenerResult<f64> {
        self.validate()?;
        let ds = self.stress_diameter_mm();
        Ok(std::f64::consts::FRAC_PI_4 * ds * ds)
    }
}

impl std::fmt::Display for ThreadSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "M{} x {}", self.nominal_diameter_mm, self.pitch_mm)
    }
}

// ============================================================================
// STANDARD SIZE TABLE
// ============================================================================

/// Standard metric coarse bolt size (ISO 261 first-choice series).
///
/// Reverse sizing scans [`StandardSize::ALL`] and returns the first entry
/// whose capacity meets the factored load, so the array order is a
/// structural invariant: strictly ascending diameter, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardSize {
    /// M6 x 1.0
    M6,
    /// M8 x 1.25
    M8,
    /// M10 x 1.5
    M10,
    /// M12 x 1.75
    M12,
    /// M16 x 2.0
    M16,
    /// M20 x 2.5
    M20,
    /// M24 x 3.0
    M24,
    /// M30 x 3.5
    M30,
    /// M36 x 4.0
    M36,
}

impl StandardSize {
    /// All standard sizes in ascending diameter order.
    ///
    /// Reverse sizing iterates this array front to back and stops at the
    /// first fit; do not reorder.
    pub const ALL: [StandardSize; 9] = [
        StandardSize::M6,
        StandardSize::M8,
        StandardSize::M10,
        StandardSize::M12,
        StandardSize::M16,
        StandardSize::M20,
        StandardSize::M24,
        StandardSize::M30,
        StandardSize::M36,
    ];

    /// Get the (nominal diameter, coarse pitch) in mm
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            StandardSize::M6 => (6.0, 1.0),
            StandardSize::M8 => (8.0, 1.25),
            StandardSize::M10 => (10.0, 1.5),
            StandardSize::M12 => (12.0, 1.75),
            StandardSize::M16 => (16.0, 2.0),
            StandardSize::M20 => (20.0, 2.5),
            StandardSize::M24 => (24.0, 3.0),
            StandardSize::M30 => (30.0, 3.5),
            StandardSize::M36 => (36.0, 4.0),
        }
    }

    /// Nominal diameter in mm
    pub fn diameter_mm(&self) -> f64 {
        self.dimensions_mm().0
    }

    /// Coarse pitch in mm
    pub fn pitch_mm(&self) -> f64 {
        self.dimensions_mm().1
    }

    /// Thread geometry for this size
    pub fn thread_spec(&self) -> ThreadSpec {
        let (d, p) = self.dimensions_mm();
        ThreadSpec::new(d, p)
    }

    /// Short designation (e.g., "M12")
    pub fn designation(&self) -> &'static str {
        match self {
            StandardSize::M6 => "M6",
            StandardSize::M8 => "M8",
            StandardSize::M10 => "M10",
            StandardSize::M12 => "M12",
            StandardSize::M16 => "M16",
            StandardSize::M20 => "M20",
            StandardSize::M24 => "M24",
            StandardSize::M30 => "M30",
            StandardSize::M36 => "M36",
        }
    }

    /// Full label with pitch (e.g., "M12 (Pitch 1.75mm)")
    pub fn label(&self) -> &'static str {
        match self {
            StandardSize::M6 => "M6 (Pitch 1.0mm)",
            StandardSize::M8 => "M8 (Pitch 1.25mm)",
            StandardSize::M10 => "M10 (Pitch 1.5mm)",
            StandardSize::M12 => "M12 (Pitch 1.75mm)",
            StandardSize::M16 => "M16 (Pitch 2.0mm)",
            StandardSize::M20 => "M20 (Pitch 2.5mm)",
            StandardSize::M24 => "M24 (Pitch 3.0mm)",
            StandardSize::M30 => "M30 (Pitch 3.5mm)",
            StandardSize::M36 => "M36 (Pitch 4.0mm)",
        }
    }
}

impl std::fmt::Display for StandardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_diameter_m12() {
        let spec = ThreadSpec::new(12.0, 1.75);
        // d_s = 12 - 0.938194 * 1.75 = 10.3582
        assert!((spec.stress_diameter_mm() - 10.3582).abs() < 0.001);
    }

    #[test]
    fn test_stress_area_m12() {
        let spec = ThreadSpec::new(12.0, 1.75);
        // A_s = (pi/4) * 10.3582² = 84.27 mm²
        let area = spec.stress_area_mm2().unwrap();
        assert!((area - 84.27).abs() < 0.01);
    }

    #[test]
    fn test_stress_area_positive_for_valid_specs() {
        for size in StandardSize::ALL.iter() {
            let area = size.thread_spec().stress_area_mm2().unwrap();
            assert!(area > 0.0, "{} must have positive stress area", size);
        }
    }

    #[test]
    fn test_rejects_diameter_not_above_pitch() {
        // Degenerate: d == p must be rejected, not silently return an area
        let degenerate = ThreadSpec::new(1.5, 1.5);
        let err = degenerate.stress_area_mm2().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");

        let inverted = ThreadSpec::new(1.0, 1.5);
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(ThreadSpec::new(0.0, 1.0).validate().is_err());
        assert!(ThreadSpec::new(12.0, 0.0).validate().is_err());
        assert!(ThreadSpec::new(-12.0, 1.75).validate().is_err());
        assert!(ThreadSpec::new(f64::NAN, 1.75).validate().is_err());
    }

    #[test]
    fn test_table_is_strictly_ascending() {
        for pair in StandardSize::ALL.windows(2) {
            assert!(
                pair[0].diameter_mm() < pair[1].diameter_mm(),
                "size table must stay in ascending diameter order"
            );
        }
    }

    #[test]
    fn test_table_entries() {
        assert_eq!(StandardSize::M6.dimensions_mm(), (6.0, 1.0));
        assert_eq!(StandardSize::M12.dimensions_mm(), (12.0, 1.75));
        assert_eq!(StandardSize::M36.dimensions_mm(), (36.0, 4.0));
    }

    #[test]
    fn test_labels() {
        assert_eq!(StandardSize::M6.label(), "M6 (Pitch 1.0mm)");
        assert_eq!(StandardSize::M12.label(), "M12 (Pitch 1.75mm)");
        assert_eq!(StandardSize::M12.designation(), "M12");
        assert_eq!(StandardSize::M12.to_string(), "M12");
    }

    #[test]
    fn test_thread_spec_display() {
        let spec = StandardSize::M10.thread_spec();
        assert_eq!(spec.to_string(), "M10 x 1.5");
    }

    #[test]
    fn test_serialization() {
        let size = StandardSize::M16;
        let json = serde_json::to_string(&size).unwrap();
        let parsed: StandardSize = serde_json::from_str(&json).unwrap();
        assert_eq!(size, parsed);

        let spec = ThreadSpec::new(12.0, 1.75);
        let json = serde_json::to_string(&spec).unwrap();
        let parsed: ThreadSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, parsed);
    }
}
