//! Coefficient input handling.
//!
//! Coefficients arrive as text typed by a user. Only plain decimal numbers
//! are accepted:
//!
//! ```text
//! coefficient = ['-'] digit+ ['.' digit+]
//! ```
//!
//! Scientific notation, signs other than a leading `-`, and special values
//! such as `inf` or `NaN` are refused with a
//! [`PrecisionError`](crate::error::PrecisionError).

mod validate;

pub use validate::{validate, validate_leading};

/// Largest accepted coefficient magnitude.
///
/// Keeps b² and 4ac finite for any pair of accepted coefficients.
pub const MAX_COEFFICIENT_MAGNITUDE: f64 = 1e150;
