//! Friction pad composite for multidisciplinary pod simulations.
//!
//! Provides:
//! - `Parameters` / `ExternalInputs`: explicit per-pad configuration and
//!   per-step inputs
//! - `step`: pure per-timestep evaluation converging the
//!   temperature -> coefficient -> force -> heat loop
//! - `FrictionPad`: a pad owning its state, committing converged steps only
//! - `PadFleet`: several independent pads, optionally stepped in parallel
//! - `run_braking`: a time loop with timestep cutback on non-convergence

pub mod error;
pub mod fleet;
pub mod network;
pub mod pad;
pub mod params;
pub mod run;
pub mod state;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use fleet::PadFleet;
pub use network::PadNetwork;
pub use pad::{FrictionPad, step};
pub use params::{ExternalInputs, Parameters};
pub use run::{BrakingOptions, BrakingRecord, run_braking};
pub use state::{ConvergenceReport, PadState};
