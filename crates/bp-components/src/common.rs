//! Common utilities for component calculations.

use crate::error::{ComponentError, ComponentResult};
use bp_core::numeric::{Real, ensure_finite};

/// Ensure a computed value is finite, returning ComponentError if not.
pub fn check_finite(value: Real, what: &'static str) -> ComponentResult<Real> {
    ensure_finite(value, what).map_err(|_| ComponentError::NonPhysical { what })
}

/// Force a heat rate to read as a loss (<= 0) whatever its raw sign.
#[inline]
pub fn as_loss(rate: Real) -> Real {
    -rate.abs()
}

/// Force a heat rate to read as a gain (>= 0) whatever its raw sign.
#[inline]
pub fn as_gain(rate: Real) -> Real {
    rate.abs()
}
