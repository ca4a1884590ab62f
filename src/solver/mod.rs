//! Quadratic equation solver.
//!
//! For `ax² + bx + c = 0` with `a ≠ 0` the discriminant
//!
//! ```text
//! D = b² - 4ac
//! ```
//!
//! decides the shape of the solution:
//!
//! - `D > 0`: two real roots `(-b ∓ √D) / 2a`
//! - `D = 0`: one repeated root `-b / 2a`
//! - `D < 0`: a conjugate pair `-b / 2a ± (√-D / |2a|)·i`
//!
//! Square roots come from a Newton-Raphson iteration rather than
//! [`f64::sqrt`], so the tolerance and iteration bound are explicit.
//!
//! Two real roots are computed as `q = -(b + sign(b)·√D) / 2`, `q / a` and
//! `c / q`, which avoids subtracting nearly equal values when `b² ≫ 4ac`.

mod newton;
mod roots;

pub use newton::{sqrt, NewtonSqrt, SqrtEstimate};
pub use roots::{sign, solve, solve_text, Quadratic, RootResult};

/// Convergence tolerance for the Newton square root.
pub const SQRT_TOLERANCE: f64 = 1e-10;

/// Maximum Newton steps per square root.
///
/// Starting from t = x, the estimate roughly halves per step until it nears
/// the root, which takes over a thousand steps for subnormal inputs.
pub const MAX_SQRT_ITERATIONS: usize = 2048;
