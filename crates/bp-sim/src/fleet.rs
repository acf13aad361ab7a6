//! Several pads advanced together, optionally in parallel.

use crate::error::{SimError, SimResult};
use crate::pad::FrictionPad;
use crate::params::ExternalInputs;
use crate::state::ConvergenceReport;
use rayon::prelude::*;

/// Independent pads of one vehicle. Pads share nothing, so each step can be
/// evaluated on any thread.
#[derive(Debug, Clone, Default)]
pub struct PadFleet(pub Vec<FrictionPad>);

impl PadFleet {
    pub fn new(pads: Vec<FrictionPad>) -> Self {
        Self(pads)
    }

    pub fn push(&mut self, pad: FrictionPad) {
        self.0.push(pad);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Advance every pad one nominal step with its own inputs.
    ///
    /// Each pad commits on its own; when one fails the others may already
    /// have advanced.
    ///
    /// # Arguments:
    /// * parallelize: whether to spread pads over the rayon pool
    pub fn advance(
        &mut self,
        inputs: &[ExternalInputs],
        parallelize: bool,
    ) -> SimResult<Vec<ConvergenceReport>> {
        if inputs.len() != self.0.len() {
            return Err(SimError::InvalidParameter {
                what: "one set of inputs per pad is required",
            });
        }
        if parallelize {
            self.0
                .par_iter_mut()
                .zip(inputs.par_iter())
                .map(|(pad, inp)| pad.advance(inp))
                .collect()
        } else {
            self.0
                .iter_mut()
                .zip(inputs)
                .map(|(pad, inp)| pad.advance(inp))
                .collect()
        }
    }

    /// Sum of the pads' friction forces.
    pub fn total_friction_force(&self) -> f64 {
        self.0.iter().map(|p| p.state().friction_force.value).sum()
    }
}
