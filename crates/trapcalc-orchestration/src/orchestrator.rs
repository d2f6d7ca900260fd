//! Core orchestration: partition, run, join, reduce.

use std::sync::Arc;
use std::time::Instant;

use trapcalc_core::{partition, IntegrationError, IntegrationRequest, PartialSum};

use crate::executor::Executor;
use crate::interfaces::{IntegrationReport, IntegrationResult};

/// Fold partial sums in worker order into the final value.
#[must_use]
pub fn reduce(partials: &[PartialSum]) -> f64 {
    partials.iter().fold(0.0, |total, partial| total + partial.value)
}

/// Integrate `request` with the given executor.
///
/// The executor returns only after every worker has finished, so the
/// reduction below never races with a worker.
pub fn integrate(
    request: &IntegrationRequest,
    executor: &dyn Executor,
) -> Result<IntegrationReport, IntegrationError> {
    let start = Instant::now();

    if !request.is_evenly_divisible() {
        tracing::debug!(
            n = request.n,
            tn = request.tn,
            "n not divisible by tn, last worker absorbs the remainder"
        );
    }

    let tasks = partition(request);
    let partials = executor.run(&tasks)?;
    if partials.len() != tasks.len() {
        return Err(IntegrationError::Calculation(format!(
            "{} returned {} partial sums for {} workers",
            executor.name(),
            partials.len(),
            tasks.len()
        )));
    }

    let value = reduce(&partials);
    if !value.is_finite() {
        return Err(IntegrationError::Calculation(format!(
            "{} produced a non-finite integral ({value})",
            executor.name()
        )));
    }
    let duration = start.elapsed();
    tracing::debug!(backend = executor.name(), value, ?duration, "integration complete");

    Ok(IntegrationReport {
        backend: executor.name().to_string(),
        value,
        partials,
        duration,
    })
}

/// Run the request once per executor, one after another.
pub fn execute_integrations(
    request: &IntegrationRequest,
    executors: &[Arc<dyn Executor>],
) -> Vec<IntegrationResult> {
    executors
        .iter()
        .map(|executor| {
            let start = Instant::now();
            let outcome = integrate(request, executor.as_ref());
            IntegrationResult {
                backend: executor.name().to_string(),
                outcome,
                duration: start.elapsed(),
            }
        })
        .collect()
}

/// Check that every successful result agrees with the first one.
///
/// Values agree when they differ by at most `tolerance` relative to the
/// reference, with the scale floored at 1 so values near zero compare
/// absolutely.
pub fn analyze_comparison_results(
    results: &[IntegrationResult],
    tolerance: f64,
) -> Result<(), IntegrationError> {
    let mut valid = results
        .iter()
        .filter_map(|r| r.value().map(|value| (r.backend.as_str(), value)));

    let Some((reference_backend, reference)) = valid.next() else {
        return Err(IntegrationError::Calculation("no valid results".into()));
    };

    let scale = reference.abs().max(1.0);
    for (backend, value) in valid {
        if (value - reference).abs() > tolerance * scale {
            tracing::warn!(backend, value, reference_backend, reference, "backend mismatch");
            return Err(IntegrationError::Mismatch {
                backend: backend.to_string(),
                value,
                reference_backend: reference_backend.to_string(),
                reference,
            });
        }
    }

    Ok(())
}
