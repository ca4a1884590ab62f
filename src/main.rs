//! Quadratic - solve ax² + bx + c = 0 from the command line.
//!
//! # Usage
//!
//! ```bash
//! quadratic 1 5 4        # x1 = -4, x2 = -1
//! quadratic 1 2 10       # x1 = -1 + 3i, x2 = -1 - 3i
//! quadratic              # interactive prompts
//! ```

use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use quadratic_core::{
    format::{format_roots, format_value},
    input,
    shell::{self, SessionResult},
    solver::{NewtonSqrt, Quadratic},
};

/// Quadratic equation solver
#[derive(Parser, Debug)]
#[command(name = "quadratic", author, version, about, long_about = None)]
struct Args {
    /// Coefficients a, b and c; omit all three for interactive mode
    #[arg(value_name = "COEFFICIENT", num_args = 0..=3, allow_negative_numbers = true)]
    coefficients: Vec<String>,

    /// Print the discriminant and square root statistics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> SessionResult<()> {
    match args.coefficients.as_slice() {
        [] => {
            shell::run_console()?;
        }
        [a, b, c] => solve_once(a, b, c, args.verbose)?,
        _ => Args::command()
            .error(
                ErrorKind::WrongNumberOfValues,
                "expected three coefficients (a b c) or none",
            )
            .exit(),
    }

    Ok(())
}

fn solve_once(a: &str, b: &str, c: &str, verbose: bool) -> SessionResult<()> {
    let a = input::validate(a)?;
    let b = input::validate(b)?;
    let c = input::validate(c)?;

    let equation = Quadratic::new(a, b, c)?;
    let newton = NewtonSqrt::new();

    if verbose {
        let d = equation.discriminant();
        eprintln!("discriminant = {}", format_value(d));
        if d != 0.0 {
            let est = newton.estimate(d.abs());
            eprintln!(
                "sqrt(|D|) = {} after {} iterations (converged: {})",
                format_value(est.value),
                est.iterations,
                est.converged
            );
        }
    }

    let result = equation.solve_with(&newton)?;
    for line in format_roots(&result) {
        println!("{}", line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_name_matches_binary() {
        assert_eq!(Args::command().get_name(), "quadratic");
    }

    #[test]
    fn test_negative_coefficients_parse() {
        let args = Args::try_parse_from(["quadratic", "1", "-3", "-0.5"]).unwrap();
        assert_eq!(args.coefficients, vec!["1", "-3", "-0.5"]);
        assert!(!args.verbose);
    }

    #[test]
    fn test_error_reports_message() {
        let args = Args::try_parse_from(["quadratic", "1e2", "1", "1"]).unwrap();
        let err = run(&args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The value you entered is not allowed: '1e2' uses scientific notation"
        );

        let args = Args::try_parse_from(["quadratic", "0", "1", "1"]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("'a' cannot be zero"));
    }

    #[test]
    fn test_solve_once_succeeds() {
        assert!(solve_once("1", "5", "4", true).is_ok());
    }
}
