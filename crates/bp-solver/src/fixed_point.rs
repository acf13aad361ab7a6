//! Damped fixed-point iteration `x <- x + omega * (g(x) - x)`.

use crate::error::{SolverError, SolverResult};
use nalgebra::DVector;
use tracing::{debug, warn};

/// Fixed-point solver configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedPointConfig {
    /// Maximum number of map evaluations
    pub max_iterations: usize,
    /// Converged once the largest change between iterates is at or below this
    pub tolerance: f64,
    /// Relaxation factor in (0, 1]; 1.0 is plain Gauss-Seidel substitution
    pub relaxation: f64,
}

impl Default for FixedPointConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
            relaxation: 1.0,
        }
    }
}

impl FixedPointConfig {
    pub fn validate(&self) -> SolverResult<()> {
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig {
                what: "max_iterations must be positive",
            });
        }
        if !(self.tolerance > 0.0) || !self.tolerance.is_finite() {
            return Err(SolverError::InvalidConfig {
                what: "tolerance must be positive",
            });
        }
        if !(self.relaxation > 0.0 && self.relaxation <= 1.0) {
            return Err(SolverError::InvalidConfig {
                what: "relaxation must be in (0, 1]",
            });
        }
        Ok(())
    }
}

/// Why the iteration stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Converged,
    MaxIterations,
    /// The map produced a non-finite iterate or could not be evaluated at one.
    Diverged,
}

/// Fixed-point iteration result.
#[derive(Clone, Debug)]
pub struct FixedPointResult {
    /// Last accepted iterate
    pub x: DVector<f64>,
    /// Largest absolute change at the last iteration
    pub residual: f64,
    /// Number of map evaluations
    pub iterations: usize,
    /// Residual after each iteration
    pub residual_history: Vec<f64>,
    pub stop_reason: StopReason,
}

impl FixedPointResult {
    pub fn converged(&self) -> bool {
        self.stop_reason == StopReason::Converged
    }
}

/// Iterate `map` from `x0` until successive iterates agree within tolerance.
///
/// Running out of iterations, hitting a non-finite iterate or `map` returning
/// [`SolverError::OutOfDomain`] is not an error: it is reported through
/// [`FixedPointResult::stop_reason`] so the caller can decide whether to cut
/// the step and retry. Any other error returned by `map` is propagated
/// unchanged.
pub fn fixed_point_solve<F>(
    x0: DVector<f64>,
    mut map: F,
    config: &FixedPointConfig,
) -> SolverResult<FixedPointResult>
where
    F: FnMut(&DVector<f64>) -> SolverResult<DVector<f64>>,
{
    config.validate()?;

    let mut x = x0;
    let mut residual = f64::INFINITY;
    let mut history = Vec::with_capacity(config.max_iterations);

    for iter in 1..=config.max_iterations {
        let gx = match map(&x) {
            Ok(gx) => gx,
            Err(SolverError::OutOfDomain { what }) => {
                warn!(iteration = iter, what, "fixed-point iterate left the map's domain");
                return Ok(FixedPointResult {
                    x,
                    residual,
                    iterations: iter,
                    residual_history: history,
                    stop_reason: StopReason::Diverged,
                });
            }
            Err(e) => return Err(e),
        };
        if gx.len() != x.len() {
            return Err(SolverError::Numeric {
                what: format!(
                    "map changed state length from {} to {}",
                    x.len(),
                    gx.len()
                ),
            });
        }

        let step = (&gx - &x) * config.relaxation;
        let x_new = &x + &step;

        if x_new.iter().any(|v| !v.is_finite()) {
            warn!(iteration = iter, "fixed-point iterate became non-finite");
            return Ok(FixedPointResult {
                x,
                residual,
                iterations: iter,
                residual_history: history,
                stop_reason: StopReason::Diverged,
            });
        }

        residual = step.amax();
        history.push(residual);
        x = x_new;
        debug!(iteration = iter, residual, "fixed-point iteration");

        if residual <= config.tolerance {
            return Ok(FixedPointResult {
                x,
                residual,
                iterations: iter,
                residual_history: history,
                stop_reason: StopReason::Converged,
            });
        }
    }

    warn!(
        max_iterations = config.max_iterations,
        residual, "fixed-point iteration did not converge"
    );
    Ok(FixedPointResult {
        x,
        residual,
        iterations: config.max_iterations,
        residual_history: history,
        stop_reason: StopReason::MaxIterations,
    })
}
