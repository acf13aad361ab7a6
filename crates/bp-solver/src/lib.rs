//! Fixed-point solver for cyclic component networks.
//!
//! The friction pad loop (temperature -> coefficient -> force -> heat ->
//! temperature) has no closed form inside a step. This crate resolves it with
//! a damped Gauss-Seidel style fixed-point iteration on a small state vector,
//! with an explicit tolerance and iteration cap.

pub mod error;
pub mod fixed_point;

pub use error::{SolverError, SolverResult};
pub use fixed_point::{FixedPointConfig, FixedPointResult, StopReason, fixed_point_solve};
