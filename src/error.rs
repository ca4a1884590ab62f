//! Error types for the quadratic solver.
//!
//! [`PrecisionError`] is the only error the core produces. It covers every
//! reason a coefficient or an equation cannot be solved to a meaningful
//! result: text the validator refuses, values that would overflow, and a
//! zero leading coefficient.

use thiserror::Error;

/// Result type alias using [`PrecisionError`].
pub type Result<T> = std::result::Result<T, PrecisionError>;

/// Unified error type for validation and solving.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrecisionError {
    // ============ Input Validation Errors ============
    /// Coefficient text written in scientific notation
    #[error("The value you entered is not allowed: '{input}' uses scientific notation")]
    ScientificNotation { input: String },

    /// Coefficient text that is not a plain decimal number
    #[error("The value you entered is not allowed: '{input}' is not a plain decimal number")]
    Malformed { input: String },

    /// Coefficient text whose value is too large to solve safely
    #[error("Not enough precision to calculate an accurate solution: '{input}' is out of range")]
    OutOfRange { input: String },

    // ============ Solver Errors ============
    /// A coefficient passed to the solver is NaN or infinite
    #[error("Not enough precision to calculate an accurate solution: coefficient '{name}' is not finite")]
    NonFiniteCoefficient { name: char },

    /// The leading coefficient is zero, so the equation is not quadratic
    #[error("Coefficient 'a' cannot be zero: the equation is not quadratic")]
    ZeroLeadingCoefficient,

    /// b² - 4ac does not fit in an f64
    #[error("Not enough precision to calculate an accurate solution: the discriminant overflows")]
    DiscriminantOverflow,

    /// A computed root is not finite
    #[error("Not enough precision to calculate an accurate solution: a root is out of range")]
    RootOutOfRange,
}

impl PrecisionError {
    /// Create a scientific notation error
    pub fn scientific_notation(input: impl Into<String>) -> Self {
        Self::ScientificNotation {
            input: input.into(),
        }
    }

    /// Create a malformed input error
    pub fn malformed(input: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(input: impl Into<String>) -> Self {
        Self::OutOfRange {
            input: input.into(),
        }
    }

    /// True for errors raised while reading coefficient text.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::ScientificNotation { .. } | Self::Malformed { .. } | Self::OutOfRange { .. }
        )
    }
}

/// Errors from the interactive session.
#[cfg(feature = "cli")]
#[derive(Error, Debug)]
pub enum SessionError {
    /// A one-shot solve failed
    #[error(transparent)]
    Precision(#[from] PrecisionError),

    /// Reading from or writing to the console failed
    #[error("Console I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = PrecisionError::ZeroLeadingCoefficient;
        assert!(e.to_string().contains("'a' cannot be zero"));

        let e = PrecisionError::malformed("abc");
        assert!(e.to_string().starts_with("The value you entered is not allowed"));
        assert!(e.is_input_error());

        let e = PrecisionError::scientific_notation("1e2");
        assert!(e.to_string().contains("'1e2'"));

        assert!(!PrecisionError::RootOutOfRange.is_input_error());
    }
}
