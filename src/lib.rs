//! # Quadratic Core
//!
//! A solver for real quadratic equations `ax² + bx + c = 0`.
//!
//! This library provides:
//! - Strict validation of coefficient text (plain decimals only)
//! - Discriminant classification into two real, one repeated, or two complex roots
//! - A Newton-Raphson square root with explicit tolerance and iteration bound
//! - Canonical display lines for the roots
//!
//! ## Architecture
//!
//! - [`input`] - Coefficient text validation
//! - [`solver`] - Newton square root and root computation
//! - [`format`] - Number and root formatting
//! - [`error`] - The [`PrecisionError`] type
//! - [`shell`] - Interactive console session (CLI only)
//!
//! ## Usage
//!
//! ```
//! use quadratic_core::{format_roots, solve_text, RootResult};
//!
//! let roots = solve_text("1", "5", "4").unwrap();
//! assert_eq!(roots, RootResult::TwoReal(-4.0, -1.0));
//! assert_eq!(format_roots(&roots), vec!["x1 = -4", "x2 = -1"]);
//!
//! assert!(solve_text("0", "1", "1").is_err());
//! assert!(solve_text("1e2", "1", "1").is_err());
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! quadratic 1 2 10
//! x1 = -1 + 3i
//! x2 = -1 - 3i
//! ```

pub mod error;
pub mod format;
pub mod input;
pub mod solver;

#[cfg(feature = "cli")]
pub mod shell;

// Re-export main types for convenience
pub use error::{PrecisionError, Result};
pub use format::{format_roots, format_value};
pub use input::{validate, MAX_COEFFICIENT_MAGNITUDE};
pub use solver::{sign, solve, solve_text, sqrt, NewtonSqrt, Quadratic, RootResult};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::solve_equation;
