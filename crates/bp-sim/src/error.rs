//! Error types for pad stepping and braking runs.

use bp_components::ComponentError;
use bp_solver::SolverError;
use thiserror::Error;

/// Errors surfaced by a pad step or a braking run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A configuration or input value is outside its domain.
    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    /// A physical precondition failed during the step.
    #[error("Precondition violated: {what}")]
    PreconditionViolated { what: &'static str },

    /// The per-step fixed-point iteration did not settle.
    #[error("Convergence failed after {iterations} iterations (residual {residual:e})")]
    ConvergenceFailure { iterations: usize, residual: f64 },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Solver error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl SimError {
    /// Whether a smaller timestep might get past this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SimError::ConvergenceFailure { .. })
    }
}

impl From<ComponentError> for SimError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::InvalidParameter { what } => SimError::InvalidParameter { what },
            ComponentError::PreconditionViolated { what } => {
                SimError::PreconditionViolated { what }
            }
            ComponentError::NonPhysical { what } => SimError::NonPhysical { what },
        }
    }
}

impl From<SolverError> for SimError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::Component(c) => c.into(),
            SolverError::InvalidConfig { what } => SimError::InvalidParameter { what },
            SolverError::OutOfDomain { what } => SimError::PreconditionViolated { what },
            SolverError::Numeric { what } => SimError::Backend { message: what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_kinds_survive_solver_wrapping() {
        let solver_err: SolverError = ComponentError::PreconditionViolated { what: "cold" }.into();
        let sim_err: SimError = solver_err.into();
        assert_eq!(sim_err, SimError::PreconditionViolated { what: "cold" });
    }

    #[test]
    fn only_convergence_failure_is_retryable() {
        assert!(
            SimError::ConvergenceFailure {
                iterations: 100,
                residual: 1e-3
            }
            .is_retryable()
        );
        assert!(!SimError::InvalidParameter { what: "ratio" }.is_retryable());
    }
}
