//! Error types for solver operations.

use bp_components::ComponentError;
use thiserror::Error;

/// Errors that can occur while iterating a network to a fixed point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: &'static str },

    /// The map cannot be evaluated at the current iterate. Reported by
    /// [`crate::fixed_point_solve`] as [`crate::StopReason::Diverged`].
    #[error("Iterate left the map's domain: {what}")]
    OutOfDomain { what: &'static str },

    #[error("Component error: {0}")]
    Component(#[from] ComponentError),

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;
