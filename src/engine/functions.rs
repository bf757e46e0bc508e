//! The unary scientific function set.
//!
//! One enum, one dispatch. Trigonometric functions take their argument
//! in degrees, matching desk-calculator convention, and convert to
//! radians internally. Domain violations are reported per function so
//! the caller can show a meaningful transient message.

use std::f64::consts::PI;
use std::str::FromStr;

use crate::engine::arithmetic::{MAX_MAGNITUDE, round_result, validate};
use crate::error::{CalcError, CalcResult};

/// A single-argument function applied to the current operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Square,
    Log10,
    Ln,
    Factorial,
    Abs,
    /// Replaces the operand with π (the argument is ignored).
    Pi,
    /// Replaces the operand with Euler's number (the argument is ignored).
    E,
}

impl FromStr for UnaryFunction {
    type Err = CalcError;

    fn from_str(name: &str) -> CalcResult<Self> {
        match name {
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            "sqrt" => Ok(Self::Sqrt),
            "square" | "sq" => Ok(Self::Square),
            "log" | "log10" => Ok(Self::Log10),
            "ln" => Ok(Self::Ln),
            "fact" | "factorial" => Ok(Self::Factorial),
            "abs" => Ok(Self::Abs),
            "pi" => Ok(Self::Pi),
            "e" => Ok(Self::E),
            other => Err(CalcError::UnknownFunction(other.to_string())),
        }
    }
}

impl UnaryFunction {
    /// Apply the function to `x` under the engine's numeric policy.
    ///
    /// `x` is assumed already validated by the caller; the result is
    /// validated (finite, in range) and rounded before it is returned.
    pub fn apply(self, x: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Sin => (x * PI / 180.0).sin(),
            Self::Cos => (x * PI / 180.0).cos(),
            Self::Tan => (x * PI / 180.0).tan(),
            Self::Sqrt => {
                if x < 0.0 {
                    return Err(CalcError::InvalidDomain("square root"));
                }
                x.sqrt()
            }
            Self::Square => x * x,
            Self::Log10 => {
                if x <= 0.0 {
                    return Err(CalcError::InvalidDomain("logarithm"));
                }
                x.log10()
            }
            Self::Ln => {
                if x <= 0.0 {
                    return Err(CalcError::InvalidDomain("natural log"));
                }
                x.ln()
            }
            Self::Factorial => factorial(x)?,
            Self::Abs => x.abs(),
            Self::Pi => PI,
            Self::E => std::f64::consts::E,
        };

        validate(result)?;
        Ok(round_result(result))
    }

    /// The history label for applying this function to the operand whose
    /// display text is `operand`.
    pub fn label(self, operand: &str) -> String {
        match self {
            Self::Sin => format!("sin({operand})"),
            Self::Cos => format!("cos({operand})"),
            Self::Tan => format!("tan({operand})"),
            Self::Sqrt => format!("√{operand}"),
            Self::Square => format!("{operand}²"),
            Self::Log10 => format!("log({operand})"),
            Self::Ln => format!("ln({operand})"),
            Self::Factorial => format!("{operand}!"),
            Self::Abs => format!("|{operand}|"),
            Self::Pi => "π".to_string(),
            Self::E => "e".to_string(),
        }
    }
}

/// Iterative factorial with an overflow check at every step, so large
/// inputs fail fast instead of silently losing precision.
fn factorial(x: f64) -> CalcResult<f64> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(CalcError::InvalidDomain("factorial"));
    }
    let n = x as u64;
    if n <= 1 {
        return Ok(1.0);
    }

    let mut result = 1.0_f64;
    for i in 2..=n {
        result *= i as f64;
        if result > MAX_MAGNITUDE {
            return Err(CalcError::Overflow);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt() {
        assert_eq!(UnaryFunction::Sqrt.apply(9.0).unwrap(), 3.0);
        assert_eq!(
            UnaryFunction::Sqrt.apply(-1.0),
            Err(CalcError::InvalidDomain("square root"))
        );
    }

    #[test]
    fn test_trig_in_degrees() {
        assert_eq!(UnaryFunction::Sin.apply(30.0).unwrap(), 0.5);
        assert_eq!(UnaryFunction::Cos.apply(60.0).unwrap(), 0.5);
        assert_eq!(UnaryFunction::Tan.apply(45.0).unwrap(), 1.0);
        assert_eq!(UnaryFunction::Sin.apply(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_logs_reject_non_positive() {
        assert_eq!(UnaryFunction::Log10.apply(100.0).unwrap(), 2.0);
        assert_eq!(UnaryFunction::Ln.apply(1.0).unwrap(), 0.0);
        assert_eq!(
            UnaryFunction::Log10.apply(0.0),
            Err(CalcError::InvalidDomain("logarithm"))
        );
        assert_eq!(
            UnaryFunction::Ln.apply(-3.0),
            Err(CalcError::InvalidDomain("natural log"))
        );
    }

    #[test]
    fn test_factorial_exact_small_values() {
        assert_eq!(UnaryFunction::Factorial.apply(0.0).unwrap(), 1.0);
        assert_eq!(UnaryFunction::Factorial.apply(1.0).unwrap(), 1.0);
        assert_eq!(UnaryFunction::Factorial.apply(5.0).unwrap(), 120.0);
        assert_eq!(UnaryFunction::Factorial.apply(10.0).unwrap(), 3628800.0);
    }

    #[test]
    fn test_factorial_domain_and_overflow() {
        assert_eq!(
            UnaryFunction::Factorial.apply(-1.0),
            Err(CalcError::InvalidDomain("factorial"))
        );
        assert_eq!(
            UnaryFunction::Factorial.apply(2.5),
            Err(CalcError::InvalidDomain("factorial"))
        );
        // 17! ~ 3.6e14 still fits, 18! ~ 6.4e15 trips the running check
        assert!(UnaryFunction::Factorial.apply(17.0).is_ok());
        assert_eq!(
            UnaryFunction::Factorial.apply(18.0),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_square_overflow() {
        assert_eq!(UnaryFunction::Square.apply(12.0).unwrap(), 144.0);
        assert_eq!(UnaryFunction::Square.apply(1e8), Err(CalcError::Overflow));
    }

    #[test]
    fn test_constants_ignore_argument() {
        assert_eq!(
            UnaryFunction::Pi.apply(42.0).unwrap(),
            round_result(std::f64::consts::PI)
        );
        assert_eq!(
            UnaryFunction::E.apply(0.0).unwrap(),
            round_result(std::f64::consts::E)
        );
    }

    #[test]
    fn test_tan_90_overflows_range() {
        // tan(90°) is astronomically large in floating point
        assert_eq!(UnaryFunction::Tan.apply(90.0), Err(CalcError::Overflow));
    }

    #[test]
    fn test_name_parsing() {
        assert_eq!("sqrt".parse::<UnaryFunction>().unwrap(), UnaryFunction::Sqrt);
        assert_eq!("log".parse::<UnaryFunction>().unwrap(), UnaryFunction::Log10);
        assert_eq!(
            "cbrt".parse::<UnaryFunction>(),
            Err(CalcError::UnknownFunction("cbrt".to_string()))
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(UnaryFunction::Sqrt.label("9"), "√9");
        assert_eq!(UnaryFunction::Square.label("5"), "5²");
        assert_eq!(UnaryFunction::Factorial.label("5"), "5!");
        assert_eq!(UnaryFunction::Pi.label("7"), "π");
    }
}
