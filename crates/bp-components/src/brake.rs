//! Braking force from friction coefficient and clamping force.

use crate::error::ComponentResult;
use bp_core::numeric::{ensure_non_negative, ensure_unit_interval};
use bp_core::units::{Force, n};

/// Friction force `F = mu * N`.
///
/// `mu` must lie in [0, 1] and `N` must be non-negative.
pub fn friction_force(coefficient: f64, normal_force: Force) -> ComponentResult<Force> {
    ensure_unit_interval(coefficient, "friction coefficient")?;
    ensure_non_negative(normal_force.value, "normal force")?;
    Ok(n(coefficient * normal_force.value))
}
