//! Splitting `[0, n)` into contiguous per-worker ranges.

use std::ops::Range;

use crate::request::IntegrationRequest;

/// Everything one worker needs, passed by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkerTask {
    /// Zero-based worker index.
    pub worker: usize,
    /// First subinterval index (inclusive).
    pub start: u64,
    /// Last subinterval index (exclusive).
    pub end: u64,
    /// Step size `h`.
    pub step: f64,
    /// Lower integration bound `a`.
    pub lower: f64,
}

impl WorkerTask {
    /// Subinterval indices covered by this task.
    #[must_use]
    pub fn range(&self) -> Range<u64> {
        self.start..self.end
    }

    /// Number of subintervals covered by this task.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Whether this task has no subintervals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A worker's local result, handed back to the coordinator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialSum {
    /// Producing worker.
    pub worker: usize,
    /// First subinterval index (inclusive).
    pub start: u64,
    /// Last subinterval index (exclusive).
    pub end: u64,
    /// Sum of trapezoid areas over the range.
    pub value: f64,
}

/// Partition the `n` subintervals of `request` into `tn` contiguous tasks.
///
/// Worker `t` covers `[t * (n / tn), (t + 1) * (n / tn))`; the last worker
/// always ends at `n` and absorbs any remainder of the division.
#[must_use]
pub fn partition(request: &IntegrationRequest) -> Vec<WorkerTask> {
    let tn = request.tn as u64;
    let per_worker = request.n / tn;
    let step = request.step();
    let lower = request.lower();

    (0..request.tn)
        .map(|worker| {
            let t = worker as u64;
            let start = t * per_worker;
            let end = if worker == request.tn - 1 {
                request.n
            } else {
                (t + 1) * per_worker
            };
            WorkerTask {
                worker,
                start,
                end,
                step,
                lower,
            }
        })
        .collect()
}
