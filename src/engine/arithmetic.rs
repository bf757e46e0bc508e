//! Binary operators and the pure evaluation function.
//!
//! All arithmetic goes through [`evaluate`], which enforces the engine's
//! numeric policy: operands and results must be finite and within
//! `±1e15`, and results are rounded to 8 decimal places to suppress
//! floating-point noise.

use std::fmt;

use crate::error::{CalcError, CalcResult};

/// Hard magnitude bound for every value flowing through the engine.
pub const MAX_MAGNITUDE: f64 = 1e15;

/// Rounding granularity: results are rounded to 8 decimal places.
const ROUND_SCALE: f64 = 1e8;

/// The four binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// The display symbol, as it appears in history expressions.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(c: char) -> CalcResult<Self> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            other => Err(CalcError::InvalidOperator(other)),
        }
    }
}

/// Check a value against the engine's numeric domain.
///
/// Finiteness is checked before the range bound; the order is part of
/// the engine's contract (a NaN reports `InvalidNumber`, never
/// `Overflow`).
pub fn validate(value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::InvalidNumber);
    }
    if value.abs() > MAX_MAGNITUDE {
        return Err(CalcError::Overflow);
    }
    Ok(value)
}

/// Round to 8 decimal places. Idempotent: re-rounding a rounded value
/// returns it unchanged.
pub fn round_result(value: f64) -> f64 {
    (value * ROUND_SCALE).round() / ROUND_SCALE
}

/// Apply `a op b` under the engine's validation and rounding policy.
pub fn evaluate(a: f64, b: f64, op: Operator) -> CalcResult<f64> {
    validate(a)?;
    validate(b)?;

    let result = match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
    };

    validate(result)?;
    Ok(round_result(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(evaluate(50.0, 3.0, Operator::Add).unwrap(), 53.0);
        assert_eq!(evaluate(10.0, 4.0, Operator::Sub).unwrap(), 6.0);
        assert_eq!(evaluate(6.0, 7.0, Operator::Mul).unwrap(), 42.0);
        assert_eq!(evaluate(1.0, 4.0, Operator::Div).unwrap(), 0.25);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            evaluate(5.0, 0.0, Operator::Div),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            evaluate(0.0, 0.0, Operator::Div),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            evaluate(-1e14, 0.0, Operator::Div),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_rounding_suppresses_float_noise() {
        // 0.1 + 0.2 is the classic 0.30000000000000004 case
        assert_eq!(evaluate(0.1, 0.2, Operator::Add).unwrap(), 0.3);
    }

    #[test]
    fn test_rounding_is_idempotent() {
        let r = evaluate(1.0, 3.0, Operator::Div).unwrap();
        assert_eq!(round_result(r), r);
        assert_eq!(r, 0.33333333);
    }

    #[test]
    fn test_result_overflow() {
        assert_eq!(
            evaluate(1e14, 100.0, Operator::Mul),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_operand_overflow_checked_before_use() {
        assert_eq!(
            evaluate(2e15, 0.0, Operator::Mul),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_nan_reports_invalid_number_not_overflow() {
        assert_eq!(
            evaluate(f64::NAN, 1.0, Operator::Add),
            Err(CalcError::InvalidNumber)
        );
        assert_eq!(
            evaluate(f64::INFINITY, 1.0, Operator::Add),
            Err(CalcError::InvalidNumber)
        );
    }

    #[test]
    fn test_operator_parsing() {
        assert_eq!(Operator::try_from('+').unwrap(), Operator::Add);
        assert_eq!(Operator::try_from('^'), Err(CalcError::InvalidOperator('^')));
        assert_eq!(Operator::Mul.to_string(), "*");
    }
}
