//! Friction coefficient with speed and temperature fade.

use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};
use bp_core::numeric::{ensure_non_negative, ensure_unit_interval};
use bp_core::units::{Temperature, Velocity, k};

/// Rational fade law for the pad friction coefficient.
///
/// ```text
///                            mu_ss
/// mu = ---------------------------------------------------------
///      (1 + m_v * max(v, 0)^p_v) * (1 + m_T * max(T - T_ref, 0)^p_T)
/// ```
///
/// Both fade terms are >= 1, so `mu` lies in `[0, mu_ss]` and never rises
/// with temperature. With both multiplication factors at zero the model
/// reduces to the constant `mu_ss`.
#[derive(Debug, Clone)]
pub struct FrictionModel {
    /// Coefficient before any fade, in [0, 1]. Equals `mu` at standstill and
    /// at or below `T_ref` only while the matching exponent is positive: with
    /// an exponent of 0 the term is the constant `1 + m` (`0^0 = 1`).
    pub steady_state: f64,
    /// Speed fade multiplier `m_v` (s/m)^p_v
    pub multiplication_factor_speed: f64,
    /// Temperature fade multiplier `m_T` (1/K)^p_T
    pub multiplication_factor_temperature: f64,
    /// Speed fade exponent `p_v`
    pub parametric_factor_speed: f64,
    /// Temperature fade exponent `p_T`
    pub parametric_factor_temperature: f64,
    /// Temperature below which no thermal fade applies
    pub reference_temperature: Temperature,
}

impl FrictionModel {
    pub fn new(
        steady_state: f64,
        multiplication_factor_speed: f64,
        multiplication_factor_temperature: f64,
        parametric_factor_speed: f64,
        parametric_factor_temperature: f64,
        reference_temperature: Temperature,
    ) -> ComponentResult<Self> {
        ensure_unit_interval(steady_state, "steady-state friction coefficient")?;
        ensure_non_negative(multiplication_factor_speed, "speed multiplication factor")?;
        ensure_non_negative(
            multiplication_factor_temperature,
            "temperature multiplication factor",
        )?;
        ensure_non_negative(parametric_factor_speed, "speed parametric factor")?;
        ensure_non_negative(
            parametric_factor_temperature,
            "temperature parametric factor",
        )?;
        if !reference_temperature.value.is_finite() {
            return Err(ComponentError::InvalidParameter {
                what: "reference temperature",
            });
        }
        Ok(Self {
            steady_state,
            multiplication_factor_speed,
            multiplication_factor_temperature,
            parametric_factor_speed,
            parametric_factor_temperature,
            reference_temperature,
        })
    }

    /// Coefficient that ignores speed and temperature.
    pub fn constant(coefficient: f64) -> ComponentResult<Self> {
        Self::new(coefficient, 0.0, 0.0, 0.0, 0.0, k(0.0))
    }

    pub fn coefficient(
        &self,
        temperature: Temperature,
        surface_velocity: Velocity,
    ) -> ComponentResult<f64> {
        let speed = surface_velocity.value.max(0.0);
        let excess = (temperature.value - self.reference_temperature.value).max(0.0);

        let speed_fade = fade(
            self.multiplication_factor_speed,
            speed,
            self.parametric_factor_speed,
        );
        let thermal_fade = fade(
            self.multiplication_factor_temperature,
            excess,
            self.parametric_factor_temperature,
        );

        let mu = check_finite(
            self.steady_state / (speed_fade * thermal_fade),
            "friction coefficient",
        )?;
        Ok(mu.clamp(0.0, self.steady_state))
    }
}

/// `1 + m * x^p`; a zero multiplier disables the term even where `x^p`
/// overflows.
fn fade(multiplier: f64, x: f64, exponent: f64) -> f64 {
    if multiplier == 0.0 {
        1.0
    } else {
        1.0 + multiplier * x.powf(exponent)
    }
}
