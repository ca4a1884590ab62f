//! Newton-Raphson square root.
//!
//! Solves f(t) = t² - x for t by iterating
//!   t_{n+1} = (t_n + x / t_n) / 2
//! starting from t_0 = x. The iteration converges quadratically once it is
//! close to the root; far from it each step roughly halves the estimate, so
//! the iteration bound has to cover the full exponent range of f64.

use super::{MAX_SQRT_ITERATIONS, SQRT_TOLERANCE};

/// Outcome of a square root computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtEstimate {
    /// The last iterate
    pub value: f64,
    /// Number of Newton steps taken
    pub iterations: usize,
    /// Whether the tolerance was met before the iteration bound
    pub converged: bool,
}

/// Newton-Raphson square root solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonSqrt {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Convergence tolerance, relative to the estimate
    pub tolerance: f64,
}

impl Default for NewtonSqrt {
    fn default() -> Self {
        Self::new()
    }
}

impl NewtonSqrt {
    /// Create a solver with the default tolerance and iteration bound.
    pub fn new() -> Self {
        Self {
            max_iterations: MAX_SQRT_ITERATIONS,
            tolerance: SQRT_TOLERANCE,
        }
    }

    /// Set the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Square root of `x`, best estimate.
    pub fn sqrt(&self, x: f64) -> f64 {
        self.estimate(x).value
    }

    /// Square root of `x` along with iteration statistics.
    ///
    /// `x` must be non-negative. Negative or NaN input yields NaN. Running
    /// out of iterations is not an error: the last iterate is returned with
    /// `converged` set to false.
    pub fn estimate(&self, x: f64) -> SqrtEstimate {
        debug_assert!(x.is_nan() || x >= 0.0, "square root of negative value {x}");

        if x.is_nan() || x < 0.0 {
            return SqrtEstimate {
                value: f64::NAN,
                iterations: 0,
                converged: false,
            };
        }

        // The update divides by t, which is undefined at zero
        if x == 0.0 {
            return SqrtEstimate {
                value: 0.0,
                iterations: 0,
                converged: true,
            };
        }

        if x.is_infinite() {
            return SqrtEstimate {
                value: f64::INFINITY,
                iterations: 0,
                converged: true,
            };
        }

        let mut t = x;
        for iter in 0..self.max_iterations {
            let next = 0.5 * (t + x / t);
            let diff = (next - t).abs();
            t = next;

            // Relative test: far below 1 an absolute step bound is met long
            // before t reaches the root.
            if diff <= self.tolerance * t {
                return SqrtEstimate {
                    value: t,
                    iterations: iter + 1,
                    converged: true,
                };
            }
        }

        SqrtEstimate {
            value: t,
            iterations: self.max_iterations,
            converged: false,
        }
    }
}

/// Square root of `x` using [`NewtonSqrt`] with default settings.
pub fn sqrt(x: f64) -> f64 {
    NewtonSqrt::new().sqrt(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sqrt_zero_is_exact() {
        assert_eq!(sqrt(0.0), 0.0);
        let est = NewtonSqrt::new().estimate(0.0);
        assert_eq!(est.iterations, 0);
        assert!(est.converged);
    }

    #[test]
    fn test_sqrt_known_values() {
        assert_abs_diff_eq!(sqrt(4.0), 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(sqrt(2.0), 1.41421356, epsilon = 1e-5);
        assert_abs_diff_eq!(sqrt(1.0), 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(sqrt(144.0), 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(sqrt(0.25), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_sqrt_squares_back() {
        for &x in &[1e-8, 0.001, 0.5, 3.0, 10.0, 99.0, 12345.678, 1e12] {
            let r = sqrt(x);
            assert!(
                ((r * r - x) / x.max(1.0)).abs() < 1e-5,
                "sqrt({x})^2 = {} is not close to {x}",
                r * r
            );
        }
    }

    #[test]
    fn test_sqrt_extreme_magnitudes_converge() {
        let solver = NewtonSqrt::new();

        let est = solver.estimate(1e300);
        assert!(est.converged);
        assert!((est.value / 1e150 - 1.0).abs() < 1e-9);

        let est = solver.estimate(1e-300);
        assert!(est.converged);
        assert!((est.value / 1e-150 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sqrt_small_values_are_relative_accurate() {
        for &x in &[1e-20, 1e-24, 2e-24, 1e-100, 5e-324] {
            let est = NewtonSqrt::new().estimate(x);
            assert!(est.converged, "sqrt({x}) did not converge");
            let expected = x.sqrt();
            assert!(
                ((est.value - expected) / expected).abs() < 1e-9,
                "sqrt({x}) = {} but expected {expected}",
                est.value
            );
        }
    }

    #[test]
    fn test_sqrt_iteration_bound_returns_best_estimate() {
        let solver = NewtonSqrt::new().with_max_iterations(3);
        let est = solver.estimate(1e6);
        assert!(!est.converged);
        assert_eq!(est.iterations, 3);
        // Still moving toward the root from above
        assert!(est.value > 1e3 && est.value < 1e6);
    }

    #[test]
    fn test_sqrt_loose_tolerance() {
        let tight = NewtonSqrt::new().estimate(2.0);
        let loose = NewtonSqrt::new().with_tolerance(1e-2).estimate(2.0);
        assert!(loose.iterations <= tight.iterations);
        assert_abs_diff_eq!(loose.value, 2.0f64.sqrt(), epsilon = 1e-2);
    }
}
