//! Error types for component evaluation.

use bp_core::error::BpError;
use thiserror::Error;

/// Errors that can occur while evaluating a transfer function.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    /// A configuration value violates its domain constraint.
    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    /// A physical precondition failed at evaluation time.
    #[error("Precondition violated: {what}")]
    PreconditionViolated { what: &'static str },

    /// A computed value came out non-finite.
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<BpError> for ComponentError {
    fn from(e: BpError) -> Self {
        match e {
            BpError::NonFinite { what, .. } => ComponentError::InvalidParameter { what },
            BpError::OutOfRange { what, .. } => ComponentError::InvalidParameter { what },
        }
    }
}
