//! Friction pad composite: per-step convergence of the thermal/force loop.

use crate::error::{SimError, SimResult};
use crate::network::PadNetwork;
use crate::params::{ExternalInputs, Parameters};
use crate::state::{ConvergenceReport, PadState};
use bp_core::units::{Time, k, n};
use bp_components::ComponentError;
use bp_solver::{SolverError, fixed_point_solve};
use nalgebra::DVector;
use tracing::{debug, warn};

/// Evaluate one timestep of a pad from `state`.
///
/// Pure: nothing is mutated. Returns the state of the last loop sweep (the
/// sweep at the accepted iterate when relaxed) together with the convergence
/// report. Running out of iterations, or a trial temperature the components
/// cannot evaluate, is not an error here; check
/// [`ConvergenceReport::converged`] (or call [`ConvergenceReport::into_result`])
/// before using the state as the next seed. A pad that is not hotter than
/// ambient at the start of the step is `PreconditionViolated`.
pub fn step(
    state: &PadState,
    params: &Parameters,
    inputs: &ExternalInputs,
) -> SimResult<(PadState, ConvergenceReport)> {
    let network = PadNetwork::from_parameters(params)?;
    step_network(&network, state, inputs)
}

pub(crate) fn step_network(
    network: &PadNetwork,
    state: &PadState,
    inputs: &ExternalInputs,
) -> SimResult<(PadState, ConvergenceReport)> {
    inputs.validate()?;
    network.check_seed(state.temperature, inputs)?;

    let base_temperature = state.temperature;
    let x0 = DVector::from_vec(vec![state.temperature.value, state.friction_force.value]);
    let mut last: Option<PadState> = None;

    let result = fixed_point_solve(
        x0,
        |x| {
            // An overshooting trial temperature is a loop failure, not a
            // property of the pad.
            let swept = network
                .sweep(base_temperature, k(x[0]), n(x[1]), inputs)
                .map_err(|e| match e {
                    ComponentError::PreconditionViolated { what } => {
                        SolverError::OutOfDomain { what }
                    }
                    other => SolverError::Component(other),
                })?;
            let next =
                DVector::from_vec(vec![swept.temperature.value, swept.friction_force.value]);
            last = Some(swept);
            Ok(next)
        },
        &network.solver,
    )?;

    // With relaxation the accepted iterate is not the last sweep's output.
    if result.converged() && network.solver.relaxation < 1.0 {
        last = Some(network.sweep(base_temperature, k(result.x[0]), n(result.x[1]), inputs)?);
    }

    let report = ConvergenceReport::from(&result);
    let new_state = last.ok_or(SimError::NonPhysical {
        what: "convergence loop produced no evaluation",
    })?;

    debug!(
        iterations = report.iterations,
        residual = report.final_residual,
        temperature_k = new_state.temperature.value,
        force_n = new_state.friction_force.value,
        "pad step"
    );
    Ok((new_state, report))
}

/// One brake pad: its configuration, validated network and current state.
///
/// Owns its state exclusively, so separate pads can be advanced on separate
/// threads.
#[derive(Debug, Clone)]
pub struct FrictionPad {
    params: Parameters,
    network: PadNetwork,
    state: PadState,
}

impl FrictionPad {
    /// Validate `params` and start the pad at rest at `initial_state`.
    pub fn new(params: Parameters, initial_state: PadState) -> SimResult<Self> {
        let network = PadNetwork::from_parameters(&params)?;
        if !initial_state.temperature.value.is_finite() {
            return Err(SimError::InvalidParameter {
                what: "initial pad temperature must be finite",
            });
        }
        Ok(Self {
            params,
            network,
            state: initial_state,
        })
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn state(&self) -> &PadState {
        &self.state
    }

    /// Nominal step size from the parameters.
    pub fn timestep(&self) -> Time {
        self.params.timestep
    }

    /// Explicit-update stability bound for the pad mass in `inputs`, if any
    /// loss path exists.
    pub fn stability_limit(&self, inputs: &ExternalInputs) -> Option<Time> {
        self.network
            .thermal
            .stability_limit(inputs.mass, self.network.loss_conductance())
    }

    /// Advance one nominal timestep.
    ///
    /// The new state is committed only if the loop converged; otherwise the
    /// pad is left untouched and `ConvergenceFailure` is returned.
    pub fn advance(&mut self, inputs: &ExternalInputs) -> SimResult<ConvergenceReport> {
        let (state, report) = step_network(&self.network, &self.state, inputs)?;
        self.commit(state, report)
    }

    /// Advance by `dt` instead of the nominal timestep (cutback retries).
    pub fn advance_by(
        &mut self,
        inputs: &ExternalInputs,
        dt: Time,
    ) -> SimResult<ConvergenceReport> {
        let network = self.network.with_timestep(dt)?;
        let (state, report) = step_network(&network, &self.state, inputs)?;
        self.commit(state, report)
    }

    fn commit(
        &mut self,
        state: PadState,
        report: ConvergenceReport,
    ) -> SimResult<ConvergenceReport> {
        if !report.converged {
            warn!(
                iterations = report.iterations,
                residual = report.final_residual,
                "pad step did not converge; state not committed"
            );
        }
        let report = report.into_result()?;
        self.state = state;
        Ok(report)
    }
}
