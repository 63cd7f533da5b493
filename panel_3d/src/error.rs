//! Error types for the Panel3D viewer
//!
//! This module defines the error types used throughout the crate:
//! geometric domain errors, violated preconditions, shader build
//! diagnostics, and invalid resource accesses.

use std::fmt;
use crate::shader::{ShaderStage, ShadingMode};

/// Result type for Panel3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Panel3D errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Invalid geometric input (zero-length vector, parallel up/forward,
    /// non-positive aspect/near/far, degenerate extents)
    DomainError(String),

    /// Parameter outside its documented range (e.g. fov not in (0, 180))
    PreconditionViolation(String),

    /// A shader stage failed to compile. `log` is the compiler info log.
    ShaderCompileFailed {
        mode: ShadingMode,
        stage: ShaderStage,
        log: String,
    },

    /// A shader program failed to link. `log` is the linker info log.
    ShaderLinkFailed {
        mode: ShadingMode,
        log: String,
    },

    /// Invalid resource (light index, texture data, missing program, etc.)
    InvalidResource(String),

    /// Graphics backend error
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DomainError(msg) => write!(f, "Domain error: {}", msg),
            Error::PreconditionViolation(msg) => write!(f, "Precondition violation: {}", msg),
            Error::ShaderCompileFailed { mode, stage, log } => {
                write!(f, "Compile error in {:?} shader ({:?}): {}", stage, mode, log)
            }
            Error::ShaderLinkFailed { mode, log } => {
                write!(f, "Link error ({:?}): {}", mode, log)
            }
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
