//! Pad state carried between steps and the per-step convergence report.

use crate::error::{SimError, SimResult};
use bp_core::units::{Force, Power, Temperature, n, w};
use bp_solver::{FixedPointResult, StopReason};

/// Thermal/mechanical state of one pad.
///
/// Only `temperature` (and the force used to seed the next loop) carries
/// over between steps; the rest is recomputed every step.
#[derive(Debug, Clone, PartialEq)]
pub struct PadState {
    pub temperature: Temperature,
    pub friction_coefficient: f64,
    /// Frictional heat absorbed by the pad
    pub heat_rate_pad: Power,
    /// Frictional heat absorbed by the track
    pub heat_rate_track: Power,
    /// Always `friction_coefficient * normal_force` of the same evaluation
    pub friction_force: Force,
    /// Convective loss of the last evaluation (<= 0)
    pub heat_rate_convection: Power,
    /// Conductive loss of the last evaluation (<= 0)
    pub heat_rate_conduction: Power,
}

impl PadState {
    /// Pad at rest at `temperature`, before any braking.
    pub fn initial(temperature: Temperature) -> Self {
        Self {
            temperature,
            friction_coefficient: 0.0,
            heat_rate_pad: w(0.0),
            heat_rate_track: w(0.0),
            friction_force: n(0.0),
            heat_rate_convection: w(0.0),
            heat_rate_conduction: w(0.0),
        }
    }
}

/// Outcome of one step's convergence loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceReport {
    pub converged: bool,
    pub iterations: usize,
    pub final_residual: f64,
    /// Largest change between successive iterates, per iteration
    pub residual_history: Vec<f64>,
    pub stop_reason: StopReason,
}

impl ConvergenceReport {
    /// `Err(ConvergenceFailure)` unless the loop converged.
    pub fn into_result(self) -> SimResult<Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(SimError::ConvergenceFailure {
                iterations: self.iterations,
                residual: self.final_residual,
            })
        }
    }
}

impl From<&FixedPointResult> for ConvergenceReport {
    fn from(r: &FixedPointResult) -> Self {
        Self {
            converged: r.converged(),
            iterations: r.iterations,
            final_residual: r.residual,
            residual_history: r.residual_history.clone(),
            stop_reason: r.stop_reason,
        }
    }
}
