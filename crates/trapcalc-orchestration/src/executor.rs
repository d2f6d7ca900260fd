//! Strategies for running worker tasks concurrently.
//!
//! Every executor returns the partial sums in task order, so the reduction
//! done by the orchestrator does not depend on scheduling.

use std::io;
use std::thread::JoinHandle;

use rayon::prelude::*;

use trapcalc_core::{IntegrationError, PartialSum, WorkerTask};

/// Runs a set of worker tasks and hands back their partial sums.
pub trait Executor: Send + Sync {
    /// Run every task to completion and return the partials in task order.
    fn run(&self, tasks: &[WorkerTask]) -> Result<Vec<PartialSum>, IntegrationError>;

    /// Get the name of this executor.
    fn name(&self) -> &str;
}

/// One dedicated OS thread per task.
#[derive(Debug, Default)]
pub struct ThreadExecutor;

impl ThreadExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ThreadExecutor {
    /// Spawn one worker per task with `spawn`, then join every worker that
    /// was started, even when a later spawn or an earlier join fails.
    fn run_with<S>(tasks: &[WorkerTask], mut spawn: S) -> Result<Vec<PartialSum>, IntegrationError>
    where
        S: FnMut(WorkerTask) -> io::Result<JoinHandle<PartialSum>>,
    {
        let mut handles = Vec::with_capacity(tasks.len());
        let mut spawn_error = None;
        for &task in tasks {
            match spawn(task) {
                Ok(handle) => handles.push((task.worker, handle)),
                Err(e) => {
                    spawn_error = Some(IntegrationError::Worker(format!(
                        "failed to spawn worker {}: {e}",
                        task.worker
                    )));
                    break;
                }
            }
        }

        // Join barrier: every started worker finishes before anything is returned.
        let joined: Vec<Result<PartialSum, IntegrationError>> = handles
            .into_iter()
            .map(|(worker, handle)| {
                handle
                    .join()
                    .map_err(|_| IntegrationError::Worker(format!("worker {worker} panicked")))
            })
            .collect();

        if let Some(err) = spawn_error {
            return Err(err);
        }
        joined.into_iter().collect()
    }
}

impl Executor for ThreadExecutor {
    fn run(&self, tasks: &[WorkerTask]) -> Result<Vec<PartialSum>, IntegrationError> {
        Self::run_with(tasks, |task| {
            std::thread::Builder::new()
                .name(format!("trapcalc-worker-{}", task.worker))
                .spawn(move || {
                    tracing::debug!(worker = task.worker, start = task.start, end = task.end, "worker started");
                    task.partial_sum()
                })
        })
    }

    fn name(&self) -> &str {
        "threads"
    }
}

/// A dedicated rayon pool with one thread per task.
#[derive(Debug, Default)]
pub struct RayonExecutor;

impl RayonExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Executor for RayonExecutor {
    fn run(&self, tasks: &[WorkerTask]) -> Result<Vec<PartialSum>, IntegrationError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(tasks.len().max(1))
            .thread_name(|i| format!("trapcalc-rayon-{i}"))
            .build()
            .map_err(|e| IntegrationError::Worker(format!("failed to build rayon pool: {e}")))?;

        Ok(pool.install(|| {
            tasks
                .par_iter()
                .map(WorkerTask::partial_sum)
                .collect::<Vec<_>>()
        }))
    }

    fn name(&self) -> &str {
        "rayon"
    }
}

/// Runs every task on the calling thread.
#[derive(Debug, Default)]
pub struct SequentialExecutor;

impl SequentialExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SequentialExecutor {
    fn run(&self, tasks: &[WorkerTask]) -> Result<Vec<PartialSum>, IntegrationError> {
        Ok(tasks.iter().map(WorkerTask::partial_sum).collect())
    }

    fn name(&self) -> &str {
        "sequential"
    }
}
