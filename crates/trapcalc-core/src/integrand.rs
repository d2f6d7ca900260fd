//! The fixed integrand `f(x) = sqrt(1 + eˣ)` and its closed-form integral.

/// Evaluate `f(x) = sqrt(1 + eˣ)`.
#[inline]
#[must_use]
pub fn integrand(x: f64) -> f64 {
    (1.0 + x.exp()).sqrt()
}

/// Antiderivative of `f`: with `u = sqrt(1 + eˣ)`,
/// `F(x) = 2u + ln((u - 1) / (u + 1))`.
///
/// `u - 1` is computed as `eˣ / (u + 1)` so that large negative `x` does not
/// cancel to zero.
#[must_use]
pub fn antiderivative(x: f64) -> f64 {
    let u = integrand(x);
    let u_minus_one = x.exp() / (u + 1.0);
    2.0 * u + (u_minus_one / (u + 1.0)).ln()
}

/// Exact value of `∫ₐᵇ f(x) dx`, used as the reference for the approximation.
#[must_use]
pub fn exact_integral(a: f64, b: f64) -> f64 {
    antiderivative(b) - antiderivative(a)
}
