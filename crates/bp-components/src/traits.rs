//! Core traits for component models.

use crate::error::ComponentResult;
use bp_core::units::{Power, Temperature};

/// A heat path between the pad and some boundary at a known temperature.
///
/// Sign convention: negative means heat leaves the pad.
///
/// Implementations are deterministic functions of parameters and the two
/// temperatures, so the pad can evaluate them in any order.
pub trait HeatPath: Send + Sync {
    /// Path name for diagnostics.
    fn name(&self) -> &str;

    /// Heat rate at the pad (W) for the given pad and boundary temperatures.
    fn heat_rate(&self, pad: Temperature, boundary: Temperature) -> ComponentResult<Power>;

    /// Thermal conductance (W/K) seen by the pad through this path.
    ///
    /// Used to estimate the explicit-Euler stability limit.
    fn conductance(&self) -> f64;
}
