//! # trapcalc-orchestration
//!
//! Worker execution, executor selection, and result reduction.

pub mod executor;
pub mod interfaces;
pub mod orchestrator;
pub mod registry;
pub mod selection;

pub use executor::{Executor, RayonExecutor, SequentialExecutor, ThreadExecutor};
pub use interfaces::{IntegrationReport, IntegrationResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_integrations, integrate};
pub use registry::{DefaultFactory, ExecutorFactory};
pub use selection::get_executors_to_run;
