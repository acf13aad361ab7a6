//! Scenario file schema.
//!
//! Plain SI numbers so files stay readable; every section falls back to the
//! library defaults when omitted.

use crate::error::{CliError, CliResult};
use bp_components::FrictionModel;
use bp_core::units::{j_per_kgk, k, kg, m2, mps, n, s, w_per_m2k};
use bp_sim::{BrakingOptions, ExternalInputs, PadState, Parameters};
use bp_solver::FixedPointConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    #[serde(default = "default_name")]
    pub name: String,
    /// Pad temperature before braking (K)
    #[serde(default = "default_initial_temperature")]
    pub initial_temperature_k: f64,
    #[serde(default)]
    pub pad: PadDef,
    #[serde(default)]
    pub friction: FrictionDef,
    #[serde(default)]
    pub solver: SolverDef,
    #[serde(default)]
    pub inputs: InputsDef,
    #[serde(default)]
    pub run: RunDef,
}

fn default_name() -> String {
    "scenario".to_string()
}

fn default_initial_temperature() -> f64 {
    320.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PadDef {
    pub heat_capacity_j_per_kgk: f64,
    pub convective_coefficient_w_per_m2k: f64,
    pub conduction_coefficient_w_per_m2k: f64,
    pub heat_rate_pad_ratio: f64,
    pub contact_area_m2: f64,
    pub pad_area_m2: f64,
    pub timestep_s: f64,
}

impl Default for PadDef {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            heat_capacity_j_per_kgk: p.heat_capacity.value,
            convective_coefficient_w_per_m2k: p.convective_coefficient.value,
            conduction_coefficient_w_per_m2k: p.conduction_coefficient.value,
            heat_rate_pad_ratio: p.heat_rate_pad_ratio,
            contact_area_m2: p.contact_area.value,
            pad_area_m2: p.pad_area.value,
            timestep_s: p.timestep.value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrictionDef {
    pub steady_state: f64,
    pub multiplication_factor_speed: f64,
    pub multiplication_factor_temperature: f64,
    pub parametric_factor_speed: f64,
    pub parametric_factor_temperature: f64,
    pub reference_temperature_k: f64,
}

impl Default for FrictionDef {
    fn default() -> Self {
        let f = Parameters::default().friction;
        Self {
            steady_state: f.steady_state,
            multiplication_factor_speed: f.multiplication_factor_speed,
            multiplication_factor_temperature: f.multiplication_factor_temperature,
            parametric_factor_speed: f.parametric_factor_speed,
            parametric_factor_temperature: f.parametric_factor_temperature,
            reference_temperature_k: f.reference_temperature.value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SolverDef {
    pub max_iterations: usize,
    pub tolerance: f64,
    pub relaxation: f64,
}

impl Default for SolverDef {
    fn default() -> Self {
        let c = FixedPointConfig::default();
        Self {
            max_iterations: c.max_iterations,
            tolerance: c.tolerance,
            relaxation: c.relaxation,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputsDef {
    pub normal_force_n: f64,
    /// Track speed at t = 0 (m/s)
    pub surface_velocity_mps: f64,
    /// Constant deceleration of the track (m/s^2); speed stops at zero
    pub deceleration_mps2: f64,
    pub ambient_temperature_k: f64,
    pub contact_temperature_k: f64,
    pub mass_kg: f64,
}

impl Default for InputsDef {
    fn default() -> Self {
        Self {
            normal_force_n: 500.0,
            surface_velocity_mps: 10.0,
            deceleration_mps2: 0.0,
            ambient_temperature_k: 300.0,
            contact_temperature_k: 300.0,
            mass_kg: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunDef {
    pub t_end_s: f64,
    pub record_every: usize,
    pub min_dt_s: f64,
    pub max_retries: usize,
}

impl Default for RunDef {
    fn default() -> Self {
        let o = BrakingOptions::default();
        Self {
            t_end_s: o.t_end,
            record_every: o.record_every,
            min_dt_s: o.min_dt,
            max_retries: o.max_retries,
        }
    }
}

pub fn load_yaml(path: &Path) -> CliResult<Scenario> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ScenarioRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&content)?)
}

impl Scenario {
    pub fn parameters(&self) -> CliResult<Parameters> {
        let f = &self.friction;
        let friction = FrictionModel::new(
            f.steady_state,
            f.multiplication_factor_speed,
            f.multiplication_factor_temperature,
            f.parametric_factor_speed,
            f.parametric_factor_temperature,
            k(f.reference_temperature_k),
        )?;
        let p = &self.pad;
        let params = Parameters {
            heat_capacity: j_per_kgk(p.heat_capacity_j_per_kgk),
            convective_coefficient: w_per_m2k(p.convective_coefficient_w_per_m2k),
            conduction_coefficient: w_per_m2k(p.conduction_coefficient_w_per_m2k),
            heat_rate_pad_ratio: p.heat_rate_pad_ratio,
            contact_area: m2(p.contact_area_m2),
            pad_area: m2(p.pad_area_m2),
            timestep: s(p.timestep_s),
            friction,
            solver: FixedPointConfig {
                max_iterations: self.solver.max_iterations,
                tolerance: self.solver.tolerance,
                relaxation: self.solver.relaxation,
            },
        };
        params.validate()?;
        Ok(params)
    }

    pub fn initial_state(&self) -> PadState {
        PadState::initial(k(self.initial_temperature_k))
    }

    /// Inputs for the step starting at `t`.
    pub fn inputs_at(&self, t: f64) -> ExternalInputs {
        let i = &self.inputs;
        let speed = (i.surface_velocity_mps - i.deceleration_mps2 * t).max(0.0);
        ExternalInputs {
            normal_force: n(i.normal_force_n),
            surface_velocity: mps(speed),
            ambient_temperature: k(i.ambient_temperature_k),
            contact_temperature: k(i.contact_temperature_k),
            mass: kg(i.mass_kg),
        }
    }

    pub fn braking_options(&self) -> BrakingOptions {
        BrakingOptions {
            t_end: self.run.t_end_s,
            record_every: self.run.record_every,
            min_dt: self.run.min_dt_s,
            max_retries: self.run.max_retries,
            ..Default::default()
        }
    }

    /// Check parameters, inputs at t = 0 and run options.
    pub fn validate(&self) -> CliResult<Parameters> {
        let params = self.parameters()?;
        self.inputs_at(0.0).validate()?;
        self.braking_options().validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_sim::SimError;

    const EMERGENCY_STOP: &str = r#"
name: emergency stop
initial_temperature_k: 330.0
pad:
  contact_area_m2: 0.01
  pad_area_m2: 0.01
  heat_rate_pad_ratio: 0.3
friction:
  steady_state: 0.4
  multiplication_factor_temperature: 0.001
  parametric_factor_temperature: 1.0
  reference_temperature_k: 300.0
inputs:
  normal_force_n: 800.0
  surface_velocity_mps: 20.0
  deceleration_mps2: 8.0
run:
  t_end_s: 2.5
  record_every: 10
"#;

    #[test]
    fn parse_with_defaults() {
        let scenario: Scenario = serde_yaml::from_str(EMERGENCY_STOP).unwrap();
        assert_eq!(scenario.name, "emergency stop");
        assert_eq!(scenario.pad.heat_rate_pad_ratio, 0.3);
        // omitted fields keep library defaults
        assert_eq!(scenario.pad.timestep_s, 0.01);
        assert_eq!(scenario.pad.heat_capacity_j_per_kgk, 1.0);
        assert_eq!(scenario.solver, SolverDef::default());
        assert_eq!(scenario.inputs.mass_kg, 2.0);
        assert_eq!(scenario.run.min_dt_s, 1e-6);
    }

    #[test]
    fn empty_document_is_the_default_scenario() {
        let scenario: Scenario = serde_yaml::from_str("{}").unwrap();
        assert_eq!(scenario.name, "scenario");
        let params = scenario.validate().unwrap();
        assert_eq!(params.heat_rate_pad_ratio, 0.5);
    }

    #[test]
    fn yaml_round_trip_into_parameters() {
        let scenario: Scenario = serde_yaml::from_str(EMERGENCY_STOP).unwrap();
        let text = serde_yaml::to_string(&scenario).unwrap();
        let back: Scenario = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, scenario);

        let params = back.parameters().unwrap();
        assert_eq!(params.contact_area.value, 0.01);
        assert_eq!(params.friction.steady_state, 0.4);
        assert_eq!(params.friction.reference_temperature.value, 300.0);
    }

    #[test]
    fn deceleration_stops_at_zero() {
        let scenario: Scenario = serde_yaml::from_str(EMERGENCY_STOP).unwrap();
        assert_eq!(scenario.inputs_at(0.0).surface_velocity.value, 20.0);
        assert_eq!(scenario.inputs_at(1.0).surface_velocity.value, 12.0);
        assert_eq!(scenario.inputs_at(3.0).surface_velocity.value, 0.0);
    }

    #[test]
    fn invalid_ratio_is_reported() {
        let scenario: Scenario =
            serde_yaml::from_str("pad:\n  heat_rate_pad_ratio: 1.0\n").unwrap();
        assert!(matches!(
            scenario.validate(),
            Err(CliError::Sim(SimError::InvalidParameter { .. }))
        ));
    }

    #[test]
    fn invalid_friction_is_reported() {
        let scenario: Scenario = serde_yaml::from_str("friction:\n  steady_state: 1.5\n").unwrap();
        assert!(matches!(scenario.validate(), Err(CliError::Component(_))));
    }

    #[test]
    fn emergency_stop_runs() {
        let scenario: Scenario = serde_yaml::from_str(EMERGENCY_STOP).unwrap();
        let params = scenario.validate().unwrap();
        let mut pad = bp_sim::FrictionPad::new(params, scenario.initial_state()).unwrap();

        let record = bp_sim::run_braking(
            &mut pad,
            |t, _| scenario.inputs_at(t),
            &scenario.braking_options(),
        )
        .unwrap();

        assert_eq!(record.steps, 250);
        assert!(pad.state().temperature.value > 330.0);
    }
}
