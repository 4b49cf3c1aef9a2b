//! Error taxonomy for hull computations.
//!
//! Every component validates its own preconditions and returns immediately;
//! the entry point surfaces the originating error unchanged.

use thiserror::Error;

/// Errors produced by predicates, sorting, and hull construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullError {
    /// Empty collection, non-finite coordinates, or a violated relationship
    /// between inputs (e.g. a point below the pivot).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// An operation needing a triangle (or a triple window) got fewer points.
    #[error("not enough points: need at least {needed}, got {got}")]
    TooFewPoints { needed: usize, got: usize },

    /// No ray direction exists from the pivot to a point coinciding with it.
    #[error("angle undefined: point ({x}, {y}) coincides with the pivot")]
    AngleUndefined { x: f64, y: f64 },

    /// Hull method is not supported.
    #[error("hull method not implemented: {method}")]
    Unimplemented { method: String },
}

/// A specialized `Result` type for hull operations.
pub type Result<T> = std::result::Result<T, HullError>;

impl HullError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        HullError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn too_few(got: usize) -> Self {
        HullError::TooFewPoints { needed: 3, got }
    }

    /// `true` for `InvalidInput` and its angle-specific refinement `AngleUndefined`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            HullError::InvalidInput { .. } | HullError::AngleUndefined { .. }
        )
    }

    pub fn is_too_few_points(&self) -> bool {
        matches!(self, HullError::TooFewPoints { .. })
    }
}
