//! Quadratic root classification and computation.

use crate::error::{PrecisionError, Result};
use crate::input;

use super::NewtonSqrt;

/// Roots of a quadratic equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootResult {
    /// Zero discriminant: the single root -b / 2a
    RepeatedReal(f64),
    /// Positive discriminant: (-b - √D) / 2a and (-b + √D) / 2a, in that order
    TwoReal(f64, f64),
    /// Negative discriminant: roots re ± im·i, with im > 0
    ComplexPair { re: f64, im: f64 },
}

impl RootResult {
    /// Number of distinct roots (1 or 2).
    pub fn root_count(&self) -> usize {
        match self {
            RootResult::RepeatedReal(_) => 1,
            RootResult::TwoReal(..) | RootResult::ComplexPair { .. } => 2,
        }
    }

    /// Whether the roots are complex.
    pub fn is_complex(&self) -> bool {
        matches!(self, RootResult::ComplexPair { .. })
    }

    /// The real roots, in `x1`, `x2` order. Empty for a complex pair.
    pub fn real_roots(&self) -> Vec<f64> {
        match *self {
            RootResult::RepeatedReal(r) => vec![r],
            RootResult::TwoReal(r1, r2) => vec![r1, r2],
            RootResult::ComplexPair { .. } => Vec::new(),
        }
    }

    /// The conjugate roots as (real, imaginary) pairs, `+` first.
    pub fn conjugates(&self) -> Option<[(f64, f64); 2]> {
        match *self {
            RootResult::ComplexPair { re, im } => Some([(re, im), (re, -im)]),
            _ => None,
        }
    }
}

/// Coefficients of `ax² + bx + c = 0` with `a ≠ 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
}

impl Quadratic {
    /// Check the coefficients and build the equation.
    ///
    /// Fails if any coefficient is not finite or if `a` is zero.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        for (name, value) in [('a', a), ('b', b), ('c', c)] {
            if !value.is_finite() {
                return Err(PrecisionError::NonFiniteCoefficient { name });
            }
        }

        if a == 0.0 {
            return Err(PrecisionError::ZeroLeadingCoefficient);
        }

        Ok(Self { a, b, c })
    }

    /// Coefficients as `(a, b, c)`.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// b² - 4ac
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Solve with the default square root settings.
    pub fn solve(&self) -> Result<RootResult> {
        self.solve_with(&NewtonSqrt::new())
    }

    /// Solve using the given square root solver.
    pub fn solve_with(&self, newton: &NewtonSqrt) -> Result<RootResult> {
        let d = self.discriminant();
        if !d.is_finite() {
            return Err(PrecisionError::DiscriminantOverflow);
        }

        let two_a = 2.0 * self.a;

        // Exact comparison: the inputs are plain doubles and only an exact
        // zero is treated as a repeated root.
        let result = if d == 0.0 {
            RootResult::RepeatedReal(-self.b / two_a)
        } else if d > 0.0 {
            // q takes the branch where b and √D add without cancelling; the
            // other root follows from r1·r2 = c/a.
            let sqrt_d = newton.sqrt(d);
            let q = -0.5 * (self.b + sign(self.b) * sqrt_d);
            let (minus, plus) = if self.b >= 0.0 {
                (q / self.a, self.c / q)
            } else {
                (self.c / q, q / self.a)
            };
            RootResult::TwoReal(minus, plus)
        } else {
            let sqrt_neg_d = newton.sqrt(-d);
            RootResult::ComplexPair {
                re: -self.b / two_a,
                im: sqrt_neg_d / two_a.abs(),
            }
        };

        check_finite(result)
    }
}

/// Sign of `x`: `1.0` for zero and positive values, `-1.0` for negative.
pub fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn check_finite(result: RootResult) -> Result<RootResult> {
    let finite = match result {
        RootResult::RepeatedReal(r) => r.is_finite(),
        RootResult::TwoReal(r1, r2) => r1.is_finite() && r2.is_finite(),
        RootResult::ComplexPair { re, im } => re.is_finite() && im.is_finite(),
    };

    if finite {
        Ok(result)
    } else {
        Err(PrecisionError::RootOutOfRange)
    }
}

/// Solve `ax² + bx + c = 0`.
pub fn solve(a: f64, b: f64, c: f64) -> Result<RootResult> {
    Quadratic::new(a, b, c)?.solve()
}

/// Validate three coefficient strings and solve the equation they describe.
pub fn solve_text(a: &str, b: &str, c: &str) -> Result<RootResult> {
    let a = input::validate(a)?;
    let b = input::validate(b)?;
    let c = input::validate(c)?;
    solve(a, b, c)
}
