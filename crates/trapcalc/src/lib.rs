//! trapcalc library — application logic for the parallel integrator.

pub mod app;
pub mod config;
pub mod errors;
