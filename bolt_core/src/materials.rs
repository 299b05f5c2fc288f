//! Materials and Bolt Property Classes
//!
//! Yield-strength definitions for capacity checks. A [`MaterialSpec`] is
//! just a yield strength in MPa; [`PropertyClass`] provides the named
//! ISO 898-1 grades with their nominal minimum yield strengths so callers
//! do not have to memorize them.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::materials::{MaterialSpec, PropertyClass};
//!
//! // Directly from a yield strength
//! let custom = MaterialSpec::new(400.0);
//! assert!(custom.validate().is_ok());
//!
//! // Or from a named property class
//! let class_88 = PropertyClass::Class8_8.material();
//! assert_eq!(class_88.yield_strength_mpa, 640.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{FastenerError, FastenerResult};

/// Material strength for a fastener.
///
/// ## JSON Example
///
/// ```json
/// { "yield_strength_mpa": 640.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Yield strength in MPa (N/mm²)
    pub yield_strength_mpa: f64,
}

impl MaterialSpec {
    /// Create a material spec from a yield strength in MPa
    pub fn new(yield_strength_mpa: f64) -> Self {
        Self { yield_strength_mpa }
    }

    /// Validate the material definition.
    pub fn validate(&self) -> FastenerResult<()> {
        // Negated comparison so NaN fails too
        if !(self.yield_strength_mpa > 0.0) {
            return Err(FastenerError::invalid_input(
                "yield_strength_mpa",
                self.yield_strength_mpa.to_string(),
                "Yield strength must be positive",
            ));
        }
        Ok(())
    }
}

/// Bolt property class per ISO 898-1.
///
/// The class digits encode strength: "8.8" means 800 MPa nominal tensile
/// strength at a 0.8 yield ratio. Values below are the nominal minimum
/// yield strengths for sizes up to M16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PropertyClass {
    /// Low-carbon steel, 240 MPa yield
    #[serde(rename = "4.6")]
    Class4_6,
    /// Low-carbon steel, 420 MPa yield
    #[serde(rename = "5.8")]
    Class5_8,
    /// Quenched and tempered medium-carbon steel, 640 MPa yield
    #[default]
    #[serde(rename = "8.8")]
    Class8_8,
    /// Alloy steel, 940 MPa yield
    #[serde(rename = "10.9")]
    Class10_9,
    /// Alloy steel, 1100 MPa yield
    #[serde(rename = "12.9")]
    Class12_9,
}

impl PropertyClass {
    /// All property classes, weakest first, for UI selection
    pub const ALL: [PropertyClass; 5] = [
        PropertyClass::Class4_6,
        PropertyClass::Class5_8,
        PropertyClass::Class8_8,
        PropertyClass::Class10_9,
        PropertyClass::Class12_9,
    ];

    /// Nominal minimum yield strength in MPa
    pub fn yield_strength_mpa(&self) -> f64 {
        match self {
            PropertyClass::Class4_6 => 240.0,
            PropertyClass::Class5_8 => 420.0,
            PropertyClass::Class8_8 => 640.0,
            PropertyClass::Class10_9 => 940.0,
            PropertyClass::Class12_9 => 1100.0,
        }
    }

    /// Material spec carrying this class's yield strength
    pub fn material(&self) -> MaterialSpec {
        MaterialSpec::new(self.yield_strength_mpa())
    }

    /// Get display name (e.g., "8.8")
    pub fn display_name(&self) -> &'static str {
        match self {
            PropertyClass::Class4_6 => "4.6",
            PropertyClass::Class5_8 => "5.8",
            PropertyClass::Class8_8 => "8.8",
            PropertyClass::Class10_9 => "10.9",
            PropertyClass::Class12_9 => "12.9",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> FastenerResult<Self> {
        match s.trim().replace('_', ".").as_str() {
            "4.6" | "46" => Ok(PropertyClass::Class4_6),
            "5.8" | "58" => Ok(PropertyClass::Class5_8),
            "8.8" | "88" => Ok(PropertyClass::Class8_8),
            "10.9" | "109" => Ok(PropertyClass::Class10_9),
            "12.9" | "129" => Ok(PropertyClass::Class12_9),
            other => Err(FastenerError::invalid_input(
                "property_class",
                other,
                "Unknown property class",
            )),
        }
    }
}

impl std::fmt::Display for PropertyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
