//! # Fastener Calculations
//!
//! This module contains the two sizing calculations. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` / outcome - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<_, FastenerError>` - Pure calculation function
//!
//! Every calculation is a single pass over its own inputs and the immutable
//! size table: no shared mutable state, no blocking, no retries. Concurrent
//! invocations are safe without locking.
//!
//! ## Available Calculations
//!
//! - [`analysis`] - Tensile failure load of a given thread and material
//! - [`design`] - Smallest standard size meeting a required load with margin

pub mod analysis;
pub mod design;

// Re-export commonly used types
pub use analysis::{AnalysisInput, AnalysisResult};
pub use design::{DesignInput, DesignOutcome, SizeSelection};
