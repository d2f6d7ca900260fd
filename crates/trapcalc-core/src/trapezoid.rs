//! Composite trapezoidal kernel.

use crate::integrand::integrand;
use crate::partition::{PartialSum, WorkerTask};
use crate::request::IntegrationRequest;

/// Trapezoid sum over the subinterval indices `range`.
#[inline]
#[allow(clippy::cast_precision_loss)]
fn trapezoid_range(lower: f64, step: f64, range: std::ops::Range<u64>) -> f64 {
    let mut sum = 0.0;
    for i in range {
        let x_i = lower + i as f64 * step;
        let x_next = lower + (i + 1) as f64 * step;
        sum += (integrand(x_i) + integrand(x_next)) * step / 2.0;
    }
    sum
}

impl WorkerTask {
    /// Compute this worker's local sum. Touches no shared state.
    #[must_use]
    pub fn partial_sum(&self) -> PartialSum {
        let value = trapezoid_range(self.lower, self.step, self.range());
        tracing::trace!(worker = self.worker, start = self.start, end = self.end, value, "partial sum");
        PartialSum {
            worker: self.worker,
            start: self.start,
            end: self.end,
            value,
        }
    }
}

/// Single-threaded trapezoidal sum over all of `[0, n)`.
#[must_use]
pub fn trapezoid_sequential(request: &IntegrationRequest) -> f64 {
    trapezoid_range(request.lower(), request.step(), 0..request.n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrand::exact_integral;
    use crate::partition::partition;
    use approx::assert_relative_eq;

    fn request(a: i64, b: i64, n: u64, tn: usize) -> IntegrationRequest {
        IntegrationRequest::new(a, b, n, tn).unwrap()
    }

    #[test]
    fn single_subinterval_is_one_trapezoid() {
        let value = trapezoid_sequential(&request(0, 1, 1, 1));
        let expected = (integrand(0.0) + integrand(1.0)) / 2.0;
        assert_relative_eq!(value, expected);
    }

    #[test]
    fn zero_width_interval() {
        assert_eq!(trapezoid_sequential(&request(3, 3, 100, 4)), 0.0);
    }

    #[test]
    fn empty_task_contributes_nothing() {
        let task = WorkerTask {
            worker: 0,
            start: 5,
            end: 5,
            step: 0.1,
            lower: 0.0,
        };
        assert_eq!(task.partial_sum().value, 0.0);
    }

    #[test]
    fn partials_add_up_to_sequential() {
        let req = request(0, 1, 1000, 4);
        let total: f64 = partition(&req)
            .iter()
            .fold(0.0, |acc, task| acc + task.partial_sum().value);
        assert_relative_eq!(total, trapezoid_sequential(&req), max_relative = 1e-12);
    }

    #[test]
    fn close_to_exact() {
        let value = trapezoid_sequential(&request(0, 1, 1000, 1));
        assert_relative_eq!(value, exact_integral(0.0, 1.0), max_relative = 1e-7);
    }

    #[test]
    fn partial_sum_keeps_range() {
        let task = partition(&request(0, 1, 10, 2))[1];
        let partial = task.partial_sum();
        assert_eq!(partial.worker, 1);
        assert_eq!((partial.start, partial.end), (5, 10));
    }
}
