//! Display formatting for roots.
//!
//! The output lines are the only thing a console user or a calling script
//! sees, so their shape is fixed:
//!
//! ```text
//! x1 = -2                   repeated root, no x2 line
//! x1 = -4                   two real roots
//! x2 = -1
//! x1 = -1 + 3i              complex pair
//! x2 = -1 - 3i
//! ```
//!
//! Real-root lines never contain the letter `i`.

use std::fmt;

use crate::solver::RootResult;

/// Format a number in its shortest decimal form.
///
/// Integral values have no fractional part (`5.0` → `"5"`), other values
/// use the shortest representation that parses back to the same `f64`
/// (`5.5` → `"5.5"`). Exponent notation is never used and negative zero
/// prints as `"0"`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Render roots as display lines, `x1` first.
pub fn format_roots(result: &RootResult) -> Vec<String> {
    match *result {
        RootResult::RepeatedReal(r) => vec![format!("x1 = {}", format_value(r))],
        RootResult::TwoReal(r1, r2) => vec![
            format!("x1 = {}", format_value(r1)),
            format!("x2 = {}", format_value(r2)),
        ],
        RootResult::ComplexPair { re, im } => {
            let re = format_value(re);
            let im = format_value(im);
            vec![
                format!("x1 = {} + {}i", re, im),
                format!("x2 = {} - {}i", re, im),
            ]
        }
    }
}

impl fmt::Display for RootResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_roots(self).join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(5.0), "5");
        assert_eq!(format_value(5.5), "5.5");
        assert_eq!(format_value(-2.0), "-2");
        assert_eq!(format_value(-0.25), "-0.25");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(1e20), "100000000000000000000");
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
        assert!(!format_value(1e-7).contains('e'));
    }

    #[test]
    fn test_format_two_real_roots() {
        let lines = format_roots(&solve(1.0, 5.0, 4.0).unwrap());
        assert_eq!(lines, vec!["x1 = -4", "x2 = -1"]);
    }

    #[test]
    fn test_format_repeated_root() {
        let lines = format_roots(&solve(1.0, 4.0, 4.0).unwrap());
        assert_eq!(lines, vec!["x1 = -2"]);

        let text = solve(1.0, 2.0, 1.0).unwrap().to_string();
        assert!(text.contains("x1 = -1"));
        assert!(!text.contains("x2 ="));
    }

    #[test]
    fn test_format_complex_roots() {
        let lines = format_roots(&solve(1.0, 2.0, 10.0).unwrap());
        assert_eq!(lines, vec!["x1 = -1 + 3i", "x2 = -1 - 3i"]);

        let lines = format_roots(&solve(1.0, 0.0, 4.0).unwrap());
        assert_eq!(lines, vec!["x1 = 0 + 2i", "x2 = 0 - 2i"]);
    }

    #[test]
    fn test_imaginary_marker_only_for_complex() {
        let cases = [
            (1.0, 5.0, 4.0),
            (1.0, 5.0, 6.0),
            (-2.0, 8.0, -6.0),
            (1.0, 4.0, 4.0),
            (4.0, 4.0, 1.0),
            (1.0, 0.0, -4.0),
            (3.0, 1.0, -1.0),
        ];
        for (a, b, c) in cases {
            let text = solve(a, b, c).unwrap().to_string();
            assert!(text.contains("x1 ="));
            assert!(!text.contains('i'), "unexpected imaginary marker in {text}");
        }

        for (a, b, c) in [(1.0, 2.0, 10.0), (2.0, 2.0, 5.0), (1.0, 0.0, 4.0)] {
            let text = solve(a, b, c).unwrap().to_string();
            assert!(text.contains('i'));
            assert!(text.contains("x2 ="));
        }
    }
}
