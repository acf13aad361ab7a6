//! Frictional heat generation and its split between pad and track.

use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};
use bp_core::units::{Force, Power, Velocity, w};

/// Frictional heat rates produced by one braking force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSplit {
    /// braking force × surface velocity
    pub total: Power,
    /// Share absorbed by the pad
    pub pad: Power,
    /// Share absorbed by the track
    pub track: Power,
}

/// Splits the frictional power `F * v` between pad and track.
#[derive(Debug, Clone)]
pub struct HeatGeneration {
    /// Fraction of the generated heat absorbed by the pad, in (0, 1)
    pub pad_ratio: f64,
}

impl HeatGeneration {
    pub fn new(pad_ratio: f64) -> ComponentResult<Self> {
        if !(pad_ratio > 0.0 && pad_ratio < 1.0) {
            return Err(ComponentError::InvalidParameter {
                what: "heat rate pad ratio must be strictly between 0 and 1",
            });
        }
        Ok(Self { pad_ratio })
    }

    pub fn split(
        &self,
        braking_force: Force,
        surface_velocity: Velocity,
    ) -> ComponentResult<HeatSplit> {
        let total = check_finite(
            braking_force.value * surface_velocity.value,
            "generated heat rate",
        )?;
        // Take the remainder, then recover the pad share from it: one of the
        // two subtractions is exact (Sterbenz), so pad + track == total holds
        // bit for bit.
        let track = total - self.pad_ratio * total;
        let pad = total - track;
        Ok(HeatSplit {
            total: w(total),
            pad: w(pad),
            track: w(track),
        })
    }
}
