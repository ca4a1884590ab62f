//! WASM bindings for Quadratic Core.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { solve_equation } from 'quadratic_core';
//!
//! await init();
//!
//! try {
//!   const lines = solve_equation("1", "2", "10");
//!   // ["x1 = -1 + 3i", "x2 = -1 - 3i"]
//! } catch (message) {
//!   console.error(message);
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::format::format_roots;
use crate::solver::{solve_text, NewtonSqrt};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Solve `ax² + bx + c = 0` from coefficient text.
///
/// # Returns
/// The display lines (`x1 = ...`, optionally `x2 = ...`), or the error
/// message as a string if a coefficient is rejected.
#[wasm_bindgen]
pub fn solve_equation(a: &str, b: &str, c: &str) -> Result<Vec<String>, JsValue> {
    let result = solve_text(a, b, c).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(format_roots(&result))
}

/// Newton-Raphson square root with custom settings.
///
/// # Arguments
/// * `x` - Non-negative input
/// * `max_iterations` - Iteration bound (default: 2048)
/// * `tolerance` - Convergence tolerance (default: 1e-10)
#[wasm_bindgen]
pub fn sqrt_newton(x: f64, max_iterations: usize, tolerance: f64) -> f64 {
    NewtonSqrt::new()
        .with_max_iterations(max_iterations)
        .with_tolerance(tolerance)
        .sqrt(x)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
