//! bp-components: transfer functions of the friction pad network.
//!
//! Provides the leaf models of the pad's thermal/mechanical loop:
//! - Conduction and convection heat loss (`HeatPath` implementations)
//! - Frictional heat generation and its pad/track split
//! - Lumped temperature update over one timestep
//! - Friction coefficient fade and the resulting brake force
//!
//! Every component is a deterministic function of its parameters and
//! inputs; state lives with the caller.
//!
//! # Example
//!
//! ```no_run
//! use bp_components::{HeatConvection, HeatGeneration, HeatPath, friction_force};
//! use bp_core::units::{k, m2, mps, n, w_per_m2k};
//!
//! let convection = HeatConvection::new(w_per_m2k(0.5), m2(0.01)).unwrap();
//! let loss = convection.heat_rate(k(350.0), k(300.0)).unwrap();
//!
//! let force = friction_force(0.4, n(500.0)).unwrap();
//! let split = HeatGeneration::new(0.5).unwrap().split(force, mps(10.0)).unwrap();
//!
//! println!("loss {} W, pad gain {} W", loss.value, split.pad.value);
//! ```

pub mod brake;
pub mod common;
pub mod conduction;
pub mod convection;
pub mod error;
pub mod friction;
pub mod generation;
pub mod thermal;
pub mod traits;

// Re-exports
pub use brake::friction_force;
pub use conduction::HeatConduction;
pub use convection::HeatConvection;
pub use error::{ComponentError, ComponentResult};
pub use friction::FrictionModel;
pub use generation::{HeatGeneration, HeatSplit};
pub use thermal::{HeatRates, TemperatureUpdate};
pub use traits::HeatPath;
