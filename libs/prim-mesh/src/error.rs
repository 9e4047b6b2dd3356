//! # Mesh Errors
//!
//! Error types for mesh generation.
//!
//! The generator is total over its clamped parameter domain: every
//! in-range numeric input produces a mesh, and out-of-range values are
//! clamped rather than rejected. Only input outside the numeric contract
//! altogether is refused.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A shape parameter was NaN or infinite.
    #[error("non-finite parameter: {parameter} = {value}")]
    NonFinite { parameter: &'static str, value: f64 },
}

impl MeshError {
    /// Creates a non-finite parameter error.
    pub fn non_finite(parameter: &'static str, value: f64) -> Self {
        Self::NonFinite { parameter, value }
    }
}
