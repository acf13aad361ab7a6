//! Braking run driver with timestep cutback.
//!
//! Not part of the per-step core: this is one possible caller policy for
//! `ConvergenceFailure` (shrink the step and retry), packaged so scenarios
//! and tests don't have to rewrite it.

use crate::error::{SimError, SimResult};
use crate::pad::FrictionPad;
use crate::params::ExternalInputs;
use crate::state::PadState;
use bp_core::units::s;
use tracing::{info, warn};

/// Options for a braking run.
#[derive(Clone, Debug)]
pub struct BrakingOptions {
    /// Final time (seconds)
    pub t_end: f64,
    /// Maximum number of accepted steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th accepted step
    pub record_every: usize,
    /// Smallest step a cutback may produce (seconds)
    pub min_dt: f64,
    /// Cutbacks allowed for a single step
    pub max_retries: usize,
    /// Step multiplier applied on each cutback, in (0, 1)
    pub cutback_factor: f64,
    /// Step multiplier applied after a successful step, >= 1
    pub grow_factor: f64,
}

impl Default for BrakingOptions {
    fn default() -> Self {
        Self {
            t_end: 1.0,
            max_steps: 100_000,
            record_every: 1,
            min_dt: 1e-6,
            max_retries: 8,
            cutback_factor: 0.5,
            grow_factor: 2.0,
        }
    }
}

impl BrakingOptions {
    pub fn validate(&self) -> SimResult<()> {
        if !(self.t_end >= 0.0) || !self.t_end.is_finite() {
            return Err(SimError::InvalidParameter {
                what: "t_end must be non-negative",
            });
        }
        if self.max_steps == 0 {
            return Err(SimError::InvalidParameter {
                what: "max_steps must be positive",
            });
        }
        if self.record_every == 0 {
            return Err(SimError::InvalidParameter {
                what: "record_every must be positive",
            });
        }
        if !(self.min_dt > 0.0) {
            return Err(SimError::InvalidParameter {
                what: "min_dt must be positive",
            });
        }
        if !(self.cutback_factor > 0.0 && self.cutback_factor < 1.0) {
            return Err(SimError::InvalidParameter {
                what: "cutback_factor must be in (0, 1)",
            });
        }
        if !(self.grow_factor >= 1.0) {
            return Err(SimError::InvalidParameter {
                what: "grow_factor must be >= 1",
            });
        }
        Ok(())
    }
}

/// Time history of a braking run.
#[derive(Clone, Debug)]
pub struct BrakingRecord {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// Pad state snapshots
    pub states: Vec<PadState>,
    /// Total cutbacks taken over the run
    pub cutbacks: usize,
    /// Accepted steps
    pub steps: usize,
}

/// Advance `pad` from t = 0 to `opts.t_end`.
///
/// `inputs_at(t, state)` supplies the external inputs for the step starting
/// at `t`. Steps start at the pad's nominal timestep; a step that fails to
/// converge is retried with a shorter one, and the step grows back towards
/// nominal after each success. Any other error ends the run.
pub fn run_braking<F>(
    pad: &mut FrictionPad,
    mut inputs_at: F,
    opts: &BrakingOptions,
) -> SimResult<BrakingRecord>
where
    F: FnMut(f64, &PadState) -> ExternalInputs,
{
    opts.validate()?;

    let nominal = pad.timestep().value;
    let mut dt = nominal;
    let mut t = 0.0;
    let mut step = 0;
    let mut cutbacks = 0;

    let mut t_record = vec![t];
    let mut x_record = vec![pad.state().clone()];

    info!(t_end = opts.t_end, dt = nominal, "braking run start");

    // Tolerance keeps float accumulation from forcing a sliver step at the end.
    while opts.t_end - t > 1e-12 * opts.t_end.max(1.0) && step < opts.max_steps {
        let inputs = inputs_at(t, pad.state());
        let mut h = dt.min(opts.t_end - t);
        let mut retries = 0;

        loop {
            match pad.advance_by(&inputs, s(h)) {
                Ok(_) => break,
                Err(e) if e.is_retryable() && retries < opts.max_retries => {
                    let next = h * opts.cutback_factor;
                    if next < opts.min_dt {
                        return Err(e);
                    }
                    warn!(t, dt = h, next_dt = next, "step failed to converge; cutting back");
                    h = next;
                    retries += 1;
                    cutbacks += 1;
                }
                Err(e) => return Err(e),
            }
        }

        t += h;
        step += 1;
        dt = (h * opts.grow_factor).min(nominal);

        if step % opts.record_every == 0 {
            t_record.push(t);
            x_record.push(pad.state().clone());
        }
    }

    // Always record final state
    if step % opts.record_every != 0 {
        t_record.push(t);
        x_record.push(pad.state().clone());
    }

    info!(
        steps = step,
        cutbacks,
        temperature_k = pad.state().temperature.value,
        "braking run finished"
    );

    Ok(BrakingRecord {
        t: t_record,
        states: x_record,
        cutbacks,
        steps: step,
    })
}
