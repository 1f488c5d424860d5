//! Error handling for PanelKit
//!
//! Provides the failure taxonomy for layout solving:
//! - Invalid parameters (structural preconditions on inputs)
//! - Infeasible layouts (the requested shape cannot be tiled)
//! - Constraint violations (internal consistency cross-checks)
//!
//! All error types use `thiserror` for ergonomic error handling. Non-fatal
//! conditions (such as a supplied hypotenuse that disagrees with the
//! computed one) are not errors; they travel as notices on the summary
//! record.

use thiserror::Error;

/// Layout error type
///
/// Represents errors raised by the layout solvers. Every variant is fatal
/// for the request that produced it; nothing is retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A structural precondition on the inputs is violated.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The offending input field.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The derived spacing is negative or inconsistent with the requested
    /// counts; the shape cannot be tiled with the given thickness.
    #[error("Infeasible layout: {reason}")]
    Infeasible {
        /// Description of the infeasibility.
        reason: String,
    },

    /// An internal consistency check failed after derivation. Signals
    /// either an exceeded floating-point tolerance or a logic defect.
    #[error("{check} check failed: expected {expected}, got {actual} (tolerance {tolerance})")]
    ConstraintViolation {
        /// Which cross-check failed ("base length" or "slope length").
        check: String,
        /// The value the check required.
        expected: f64,
        /// The value actually obtained.
        actual: f64,
        /// The absolute tolerance applied.
        tolerance: f64,
    },
}

impl LayoutError {
    /// Shorthand for an [`LayoutError::InvalidParameter`] rejection.
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`LayoutError::Infeasible`] rejection.
    pub fn infeasible(reason: impl Into<String>) -> Self {
        Self::Infeasible {
            reason: reason.into(),
        }
    }
}

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
