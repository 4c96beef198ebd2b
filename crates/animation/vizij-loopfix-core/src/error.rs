//! Error types for clip editing operations.

use crate::ids::ClipId;

/// Errors surfaced by the loop blender, the keyframe clipper and clip stores.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LoopFixError {
    /// Required input missing or configuration out of range.
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Keyframes violate the curve ordering invariant.
    #[error("Invalid curve: {reason}")]
    InvalidCurve { reason: String },

    /// Clip handle not known to the store.
    #[error("Clip not found: {id:?}")]
    UnknownClip { id: ClipId },

    /// Host storage failure (IO, parse, persistence).
    #[error("Store error: {reason}")]
    Store { reason: String },
}

impl LoopFixError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn invalid_curve(reason: impl Into<String>) -> Self {
        Self::InvalidCurve {
            reason: reason.into(),
        }
    }

    pub fn store(reason: impl Into<String>) -> Self {
        Self::Store {
            reason: reason.into(),
        }
    }

    /// The source clip was not supplied by the caller.
    pub fn missing_source_clip() -> Self {
        Self::invalid_input("original animation clip is not assigned")
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LoopFixError>;
