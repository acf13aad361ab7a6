//! Per-pad configuration and per-step inputs.

use crate::error::{SimError, SimResult};
use bp_components::FrictionModel;
use bp_core::units::{
    Area, Force, HeatTransferCoeff, Mass, SpecificHeat, Temperature, Time, Velocity, j_per_kgk,
    k, m2, s, w_per_m2k,
};
use bp_solver::FixedPointConfig;

/// Immutable configuration of one friction pad.
///
/// Fixed at construction of a [`crate::FrictionPad`] and validated once
/// there; [`crate::step`] validates it again since it takes it by reference.
#[derive(Debug, Clone)]
pub struct Parameters {
    /// Specific heat of the pad material
    pub heat_capacity: SpecificHeat,
    /// Convective coefficient of the exposed pad surface (> 0)
    pub convective_coefficient: HeatTransferCoeff,
    /// Contact conductance towards the clamped body (>= 0)
    pub conduction_coefficient: HeatTransferCoeff,
    /// Fraction of frictional heat absorbed by the pad, in (0, 1)
    pub heat_rate_pad_ratio: f64,
    /// Contact patch area (> 0)
    pub contact_area: Area,
    /// Area subject to convective loss (> 0)
    pub pad_area: Area,
    /// Step size of the temperature update
    pub timestep: Time,
    /// Friction coefficient fade model
    pub friction: FrictionModel,
    /// Per-step convergence loop settings
    pub solver: FixedPointConfig,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            heat_capacity: j_per_kgk(1.0),
            convective_coefficient: w_per_m2k(0.5),
            conduction_coefficient: w_per_m2k(1.0),
            heat_rate_pad_ratio: 0.5,
            contact_area: m2(1.0),
            pad_area: m2(1.0),
            timestep: s(0.01),
            friction: FrictionModel {
                steady_state: 0.45,
                multiplication_factor_speed: 0.0,
                multiplication_factor_temperature: 0.0,
                parametric_factor_speed: 0.0,
                parametric_factor_temperature: 0.0,
                reference_temperature: k(293.15),
            },
            solver: FixedPointConfig::default(),
        }
    }
}

impl Parameters {
    /// Same parameters with a different timestep.
    pub fn with_timestep(&self, timestep: Time) -> Self {
        Self {
            timestep,
            ..self.clone()
        }
    }

    /// Check every domain constraint. Nothing is clamped.
    pub fn validate(&self) -> SimResult<()> {
        // Component constructors own the per-field rules.
        crate::network::PadNetwork::from_parameters(self).map(|_| ())
    }
}

/// Inputs supplied by the surrounding simulation for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExternalInputs {
    /// Clamping force pressing the pad on the track (>= 0)
    pub normal_force: Force,
    /// Track speed relative to the pad
    pub surface_velocity: Velocity,
    pub ambient_temperature: Temperature,
    /// Temperature of the body the pad conducts into
    pub contact_temperature: Temperature,
    /// Pad mass (> 0)
    pub mass: Mass,
}

impl ExternalInputs {
    pub fn validate(&self) -> SimResult<()> {
        if !(self.normal_force.value >= 0.0) || !self.normal_force.value.is_finite() {
            return Err(SimError::InvalidParameter {
                what: "normal force must be non-negative",
            });
        }
        if !self.surface_velocity.value.is_finite() {
            return Err(SimError::InvalidParameter {
                what: "surface velocity must be finite",
            });
        }
        if !self.ambient_temperature.value.is_finite()
            || !self.contact_temperature.value.is_finite()
        {
            return Err(SimError::InvalidParameter {
                what: "boundary temperatures must be finite",
            });
        }
        if !(self.mass.value > 0.0) || !self.mass.value.is_finite() {
            return Err(SimError::InvalidParameter {
                what: "pad mass must be positive",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_core::units::{kg, mps, n};

    fn inputs() -> ExternalInputs {
        ExternalInputs {
            normal_force: n(500.0),
            surface_velocity: mps(10.0),
            ambient_temperature: k(300.0),
            contact_temperature: k(300.0),
            mass: kg(2.0),
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(Parameters::default().validate().is_ok());
        assert_eq!(Parameters::default().timestep.value, 0.01);
        assert_eq!(Parameters::default().heat_capacity.value, 1.0);
    }

    #[test]
    fn ratio_bounds_rejected() {
        for ratio in [0.0, 1.0] {
            let params = Parameters {
                heat_rate_pad_ratio: ratio,
                ..Default::default()
            };
            assert!(matches!(
                params.validate(),
                Err(SimError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn non_positive_areas_rejected() {
        let params = Parameters {
            pad_area: m2(0.0),
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = Parameters {
            contact_area: m2(-0.1),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn bad_solver_config_rejected() {
        let params = Parameters {
            solver: FixedPointConfig {
                max_iterations: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(SimError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn with_timestep_only_changes_dt() {
        let base = Parameters::default();
        let half = base.with_timestep(s(0.005));
        assert_eq!(half.timestep.value, 0.005);
        assert_eq!(half.heat_rate_pad_ratio, base.heat_rate_pad_ratio);
    }

    #[test]
    fn inputs_validation() {
        assert!(inputs().validate().is_ok());

        let bad_mass = ExternalInputs {
            mass: kg(0.0),
            ..inputs()
        };
        assert!(bad_mass.validate().is_err());

        let bad_force = ExternalInputs {
            normal_force: n(-1.0),
            ..inputs()
        };
        assert!(bad_force.validate().is_err());
    }
}
