//! The pad's component network and one Gauss-Seidel sweep through it.

use crate::error::SimResult;
use crate::params::{ExternalInputs, Parameters};
use crate::state::PadState;
use bp_components::{
    ComponentResult, FrictionModel, HeatConduction, HeatConvection, HeatGeneration, HeatPath,
    HeatRates, TemperatureUpdate, friction_force,
};
use bp_core::units::{Force, Temperature, Time};
use bp_solver::FixedPointConfig;

/// Validated components of one pad, wired in evaluation order.
#[derive(Debug, Clone)]
pub struct PadNetwork {
    pub conduction: HeatConduction,
    pub convection: HeatConvection,
    pub generation: HeatGeneration,
    pub thermal: TemperatureUpdate,
    pub friction: FrictionModel,
    pub solver: FixedPointConfig,
}

impl PadNetwork {
    pub fn from_parameters(params: &Parameters) -> SimResult<Self> {
        let f = &params.friction;
        let friction = FrictionModel::new(
            f.steady_state,
            f.multiplication_factor_speed,
            f.multiplication_factor_temperature,
            f.parametric_factor_speed,
            f.parametric_factor_temperature,
            f.reference_temperature,
        )?;
        params.solver.validate()?;

        Ok(Self {
            conduction: HeatConduction::new(params.conduction_coefficient, params.contact_area)?,
            convection: HeatConvection::new(params.convective_coefficient, params.pad_area)?,
            generation: HeatGeneration::new(params.heat_rate_pad_ratio)?,
            thermal: TemperatureUpdate::new(params.heat_capacity, params.timestep)?,
            friction,
            solver: params.solver.clone(),
        })
    }

    /// Same network with a different temperature-update step.
    pub fn with_timestep(&self, timestep: Time) -> SimResult<Self> {
        Ok(Self {
            thermal: self.thermal.with_timestep(timestep)?,
            ..self.clone()
        })
    }

    /// Total loss conductance of the pad (W/K).
    pub fn loss_conductance(&self) -> f64 {
        self.conduction.conductance() + self.convection.conductance()
    }

    /// Physical preconditions on the pad's actual state at the start of a
    /// step. Trial temperatures inside the loop are not held to these.
    pub fn check_seed(
        &self,
        temperature: Temperature,
        inputs: &ExternalInputs,
    ) -> ComponentResult<()> {
        self.convection
            .heat_rate(temperature, inputs.ambient_temperature)
            .map(|_| ())
    }

    /// One pass: losses and generation at the current iterate, temperature
    /// update from the step's base temperature, then coefficient and force at
    /// the new temperature.
    pub fn sweep(
        &self,
        base_temperature: Temperature,
        temperature: Temperature,
        braking_force: Force,
        inputs: &ExternalInputs,
    ) -> ComponentResult<PadState> {
        let conduction = self
            .conduction
            .heat_rate(temperature, inputs.contact_temperature)?;
        let convection = self
            .convection
            .heat_rate(temperature, inputs.ambient_temperature)?;
        let split = self
            .generation
            .split(braking_force, inputs.surface_velocity)?;

        let rates = HeatRates {
            convection,
            conduction,
            generated: split.pad,
        };
        let new_temperature = self.thermal.advance(base_temperature, inputs.mass, rates)?;

        let mu = self
            .friction
            .coefficient(new_temperature, inputs.surface_velocity)?;
        let force = friction_force(mu, inputs.normal_force)?;

        Ok(PadState {
            temperature: new_temperature,
            friction_coefficient: mu,
            heat_rate_pad: split.pad,
            heat_rate_track: split.track,
            friction_force: force,
            heat_rate_convection: convection,
            heat_rate_conduction: conduction,
        })
    }
}
