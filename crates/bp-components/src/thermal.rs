//! Lumped pad temperature update.

use crate::common::{as_gain, as_loss, check_finite};
use crate::error::{ComponentError, ComponentResult};
use bp_core::units::{Mass, Power, SpecificHeat, Temperature, Time, k, s, w};

/// Heat rates acting on the pad during one step (W).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatRates {
    pub convection: Power,
    pub conduction: Power,
    pub generated: Power,
}

impl HeatRates {
    /// Losses forced to <= 0, generation forced to >= 0.
    ///
    /// Idempotent: normalizing an already normalized set is a no-op.
    pub fn normalized(&self) -> Self {
        Self {
            convection: w(as_loss(self.convection.value)),
            conduction: w(as_loss(self.conduction.value)),
            generated: w(as_gain(self.generated.value)),
        }
    }

    /// Net heat rate into the pad after sign normalization.
    pub fn net(&self) -> Power {
        let r = self.normalized();
        w(r.convection.value + r.conduction.value + r.generated.value)
    }
}

/// Forward-Euler update of the pad's lumped temperature.
///
/// ```text
/// T_new = T + q_net / (m * c) * dt
/// ```
///
/// Stable only while `dt` stays well below the thermal time constant
/// `m * c / G`, where `G` is the total loss conductance (see
/// [`TemperatureUpdate::stability_limit`]). Larger steps are not corrected
/// here.
#[derive(Debug, Clone)]
pub struct TemperatureUpdate {
    pub heat_capacity: SpecificHeat,
    pub timestep: Time,
}

impl TemperatureUpdate {
    pub fn new(heat_capacity: SpecificHeat, timestep: Time) -> ComponentResult<Self> {
        if !(heat_capacity.value > 0.0) || !heat_capacity.value.is_finite() {
            return Err(ComponentError::InvalidParameter {
                what: "heat capacity must be positive",
            });
        }
        if !(timestep.value > 0.0) || !timestep.value.is_finite() {
            return Err(ComponentError::InvalidParameter {
                what: "timestep must be positive",
            });
        }
        Ok(Self {
            heat_capacity,
            timestep,
        })
    }

    /// Same heat capacity, different step size.
    pub fn with_timestep(&self, timestep: Time) -> ComponentResult<Self> {
        Self::new(self.heat_capacity, timestep)
    }

    pub fn advance(
        &self,
        temperature: Temperature,
        mass: Mass,
        rates: HeatRates,
    ) -> ComponentResult<Temperature> {
        if !(mass.value > 0.0) || !mass.value.is_finite() {
            return Err(ComponentError::InvalidParameter {
                what: "pad mass must be positive",
            });
        }
        let thermal_mass = mass.value * self.heat_capacity.value;
        let dtemp = rates.net().value / thermal_mass * self.timestep.value;
        let t_new = check_finite(temperature.value + dtemp, "pad temperature")?;
        Ok(k(t_new))
    }

    /// Largest step for which the explicit update of a pure loss stays
    /// non-oscillating: `m * c / G`, with `G` the loss conductance in W/K.
    ///
    /// Returns `None` when there is no loss path (any step is stable).
    pub fn stability_limit(&self, mass: Mass, conductance: f64) -> Option<Time> {
        if conductance > 0.0 {
            Some(s(mass.value * self.heat_capacity.value / conductance))
        } else {
            None
        }
    }
}
