//! # Transport Request/Response Contract
//!
//! Wire-facing types so any shell (CLI, web handler, MCP) stays thin: parse
//! a [`CalcRequest`], call [`CalcRequest::dispatch`], serialize the
//! [`CalcResponse`]. Field names and response shapes are flat, the way a
//! form-driven client sends them.
//!
//! Required fields depend on the mode; absences surface as `MissingField`
//! rather than silently defaulting. Only `mode` itself has a default
//! (analysis).
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::request::CalcRequest;
//!
//! let request = CalcRequest::from_json(
//!     r#"{ "mode": "design", "load": 20000.0, "yield_strength": 400.0 }"#,
//! ).unwrap();
//!
//! let response = request.dispatch().unwrap();
//! let json = response.to_json().unwrap();
//! assert!(json.contains("Recommended Size: M12 (Pitch 1.75mm)"));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::analysis::{self, AnalysisInput, AnalysisResult};
use crate::calculations::design::{self, DesignInput, DesignOutcome, DEFAULT_SAFETY_FACTOR};
use crate::errors::{FastenerError, FastenerResult};
use crate::materials::MaterialSpec;

/// Advisory shown when no standard size carries the factored load
pub const NO_FIT_RESULT_TEXT: &str = "Load too high for standard bolts!";
/// Follow-up advice for the no-fit case
pub const NO_FIT_DETAILS: &str = "Try a higher strength material.";

/// Calculation mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Forward: thread + material -> failure load
    #[default]
    Analysis,
    /// Reverse: required load + material -> smallest standard size
    Design,
}

impl Mode {
    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> FastenerResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "a" | "analysis" | "analyze" => Ok(Mode::Analysis),
            "d" | "design" | "size" => Ok(Mode::Design),
            other => Err(FastenerError::invalid_input(
                "mode",
                other,
                "Expected 'analysis' or 'design'",
            )),
        }
    }
}

/// A flat calculation request, as a thin transport delivers it.
///
/// All numeric fields are optional on the wire; [`dispatch`](Self::dispatch)
/// enforces which are required for the selected mode.
///
/// ## JSON Examples
///
/// ```json
/// { "diameter": 12.0, "pitch": 1.75, "yield_strength": 400.0 }
/// ```
///
/// ```json
/// { "mode": "design", "load": 20000.0, "yield_strength": 400.0, "safety_factor": 1.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CalcRequest {
    /// Calculation mode (defaults to analysis)
    #[serde(default)]
    pub mode: Mode,

    /// Material yield strength in MPa (required in both modes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_strength: Option<f64>,

    /// Nominal thread diameter in mm (analysis mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,

    /// Thread pitch in mm (analysis mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,

    /// Required load in N (design mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load: Option<f64>,

    /// Safety factor for design mode (defaults to 1.5 when omitted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_factor: Option<f64>,
}

impl CalcRequest {
    /// Parse a request from JSON.
    ///
    /// Type mismatches (e.g., a non-numeric diameter) surface as
    /// `InvalidInput`; malformed JSON surfaces as `SerializationError`.
    pub fn from_json(json: &str) -> FastenerResult<Self> {
        serde_json::from_str(json).map_err(|e| match e.classify() {
            serde_json::error::Category::Data => {
                FastenerError::invalid_input("request", json.trim(), e.to_string())
            }
            _ => FastenerError::SerializationError {
                reason: e.to_string(),
            },
        })
    }

    /// Run the calculation this request describes.
    pub fn dispatch(&self) -> FastenerResult<CalcResponse> {
        let yield_strength = require("yield_strength", self.yield_strength)?;
        let material = MaterialSpec::new(yield_strength);

        match self.mode {
            Mode::Analysis => {
                let input = AnalysisInput {
                    label: String::new(),
                    nominal_diameter_mm: require("diameter", self.diameter)?,
                    pitch_mm: require("pitch", self.pitch)?,
                    material,
                };
                let result = analysis::calculate(&input)?;
                Ok(CalcResponse::from_analysis(&result))
            }
            Mode::Design => {
                let input = DesignInput {
                    label: String::new(),
                    required_load_n: require("load", self.load)?,
                    material,
                    safety_factor: self.safety_factor.unwrap_or(DEFAULT_SAFETY_FACTOR),
                };
                let outcome = design::calculate(&input)?;
                Ok(CalcResponse::from_design(&outcome))
            }
        }
    }
}

fn require(field: &str, value: Option<f64>) -> FastenerResult<f64> {
    value.ok_or_else(|| FastenerError::missing_field(field))
}

/// A calculation response in its wire shape.
///
/// Untagged: the field set alone distinguishes the two forms.
///
/// ## JSON Examples
///
/// ```json
/// { "failure_load": 33706.61, "unit": "N" }
/// ```
///
/// ```json
/// { "result_text": "Recommended Size: M12 (Pitch 1.75mm)", "details": "Capacity: 33707 N" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalcResponse {
    /// Analysis: failure load rounded to 2 decimals
    Analysis { failure_load: f64, unit: String },
    /// Design: recommendation or no-fit advisory
    Design { result_text: String, details: String },
}

impl CalcResponse {
    /// Wire shape for an analysis result
    pub fn from_analysis(result: &AnalysisResult) -> Self {
        CalcResponse::Analysis {
            failure_load: result.failure_load_rounded(),
            unit: "N".to_string(),
        }
    }

    /// Wire shape for a design outcome
    pub fn from_design(outcome: &DesignOutcome) -> Self {
        match outcome {
            DesignOutcome::Selected(selection) => CalcResponse::Design {
                result_text: format!("Recommended Size: {}", selection.label()),
                details: format!("Capacity: {:.0} N", selection.capacity_n),
            },
            DesignOutcome::NoFit => CalcResponse::Design {
                result_text: NO_FIT_RESULT_TEXT.to_string(),
                details: NO_FIT_DETAILS.to_string(),
            },
        }
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> FastenerResult<String> {
        serde_json::to_string(self).map_err(|e| FastenerError::SerializationError {
            reason: e.to_string(),
        })
    }

    /// Serialize to pretty JSON (for terminal output)
    pub fn to_json_pretty(&self) -> FastenerResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FastenerError::SerializationError {
            reason: e.to_string(),
        })
    }
}
