//! # trapcalc-core
//!
//! Core library for the trapcalc parallel integrator.
//! Approximates `∫ₐᵇ sqrt(1 + eˣ) dx` with the composite trapezoidal rule,
//! split into contiguous per-worker index ranges.

pub mod constants;
pub mod error;
pub mod integrand;
pub mod partition;
pub mod request;
pub mod trapezoid;

// Re-exports
pub use constants::{exit_codes, DEFAULT_TOLERANCE, EXPECTED_ARGS, MAX_BOUND, MIN_BOUND};
pub use error::IntegrationError;
pub use integrand::{exact_integral, integrand};
pub use partition::{partition, PartialSum, WorkerTask};
pub use request::IntegrationRequest;
pub use trapezoid::trapezoid_sequential;
