//! Orchestration interfaces.

use std::time::Duration;

use trapcalc_core::{IntegrationError, IntegrationRequest, PartialSum};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the integral value.
    fn present_result(&self, request: &IntegrationRequest, report: &IntegrationReport);

    /// Present a comparison of several backends.
    fn present_comparison(&self, request: &IntegrationRequest, results: &[IntegrationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Outcome of a successful integration run.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationReport {
    /// Executor that produced the value.
    pub backend: String,
    /// Reduced integral value.
    pub value: f64,
    /// Per-worker partial sums, in worker order.
    pub partials: Vec<PartialSum>,
    /// Wall-clock time from partitioning to reduction.
    pub duration: Duration,
}

/// Result of a single backend run.
#[derive(Debug, Clone)]
pub struct IntegrationResult {
    /// Backend name.
    pub backend: String,
    /// The report or a structured error.
    pub outcome: Result<IntegrationReport, IntegrationError>,
    /// Run duration, including failed runs.
    pub duration: Duration,
}

impl IntegrationResult {
    /// Integral value, if the run succeeded.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.outcome.as_ref().ok().map(|report| report.value)
    }
}
