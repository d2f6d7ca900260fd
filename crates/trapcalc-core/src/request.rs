//! Integration request: the immutable input of a run.

use crate::constants::{MAX_BOUND, MIN_BOUND};
use crate::error::IntegrationError;

/// Immutable description of one integration run.
///
/// Bounds are integers in `[MIN_BOUND, MAX_BOUND]` with `a <= b`; outside
/// that domain `eˣ` quickly leaves the `f64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrationRequest {
    /// Lower bound.
    pub a: i64,
    /// Upper bound.
    pub b: i64,
    /// Number of subintervals.
    pub n: u64,
    /// Number of workers.
    pub tn: usize,
}

impl IntegrationRequest {
    /// Create a validated request.
    ///
    /// # Errors
    ///
    /// Returns `IntegrationError::InvalidRequest` if `n` or `tn` is zero, a
    /// bound lies outside `[MIN_BOUND, MAX_BOUND]`, or `a > b`.
    pub fn new(a: i64, b: i64, n: u64, tn: usize) -> Result<Self, IntegrationError> {
        if n == 0 {
            return Err(IntegrationError::InvalidRequest(
                "partition count n must be positive".into(),
            ));
        }
        if tn == 0 {
            return Err(IntegrationError::InvalidRequest(
                "worker count tn must be positive".into(),
            ));
        }
        for (name, bound) in [("a", a), ("b", b)] {
            if !(MIN_BOUND..=MAX_BOUND).contains(&bound) {
                return Err(IntegrationError::InvalidRequest(format!(
                    "bound {name} = {bound} outside [{MIN_BOUND}, {MAX_BOUND}]"
                )));
            }
        }
        if a > b {
            return Err(IntegrationError::InvalidRequest(format!(
                "lower bound {a} exceeds upper bound {b}"
            )));
        }
        Ok(Self { a, b, n, tn })
    }

    /// Lower bound as `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn lower(&self) -> f64 {
        self.a as f64
    }

    /// Upper bound as `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn upper(&self) -> f64 {
        self.b as f64
    }

    /// Step size `h = (b - a) / n`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step(&self) -> f64 {
        (self.upper() - self.lower()) / self.n as f64
    }

    /// Whether `n` splits evenly across the workers.
    #[must_use]
    pub fn is_evenly_divisible(&self) -> bool {
        self.n % self.tn as u64 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request() {
        let req = IntegrationRequest::new(0, 1, 1000, 4).unwrap();
        assert_eq!(req.n, 1000);
        assert_eq!(req.tn, 4);
        assert!(req.is_evenly_divisible());
    }

    #[test]
    fn step_size() {
        let req = IntegrationRequest::new(0, 2, 100, 4).unwrap();
        assert!((req.step() - 0.02).abs() < 1e-15);
        assert_eq!(req.lower(), 0.0);
        assert_eq!(req.upper(), 2.0);
    }

    #[test]
    fn zero_width_step_is_zero() {
        let req = IntegrationRequest::new(7, 7, 10, 2).unwrap();
        assert_eq!(req.step(), 0.0);
    }

    #[test]
    fn zero_partitions_rejected() {
        assert!(matches!(
            IntegrationRequest::new(0, 1, 0, 4),
            Err(IntegrationError::InvalidRequest(_))
        ));
    }

    #[test]
    fn zero_workers_rejected() {
        assert!(matches!(
            IntegrationRequest::new(0, 1, 10, 0),
            Err(IntegrationError::InvalidRequest(_))
        ));
    }

    #[test]
    fn bounds_outside_domain_rejected() {
        for (a, b) in [(-1, 1), (0, 51), (i64::MIN, i64::MAX), (0, 1000)] {
            assert!(
                matches!(
                    IntegrationRequest::new(a, b, 10, 2),
                    Err(IntegrationError::InvalidRequest(_))
                ),
                "[{a}, {b}] accepted"
            );
        }
    }

    #[test]
    fn domain_edges_accepted() {
        assert!(IntegrationRequest::new(MIN_BOUND, MAX_BOUND, 10, 2).is_ok());
        assert!(IntegrationRequest::new(MAX_BOUND, MAX_BOUND, 10, 2).is_ok());
    }

    #[test]
    fn reversed_bounds_rejected() {
        assert!(matches!(
            IntegrationRequest::new(5, 2, 10, 2),
            Err(IntegrationError::InvalidRequest(_))
        ));
    }

    #[test]
    fn uneven_split_detected() {
        let req = IntegrationRequest::new(0, 1, 10, 3).unwrap();
        assert!(!req.is_evenly_divisible());
    }
}
