//! Crate-wide error type.
//!
//! Every failure is recoverable at the operation boundary: an error
//! aborts the current action without committing partial state, and the
//! caller decides how to surface it (the CLI prints it transiently).

use thiserror::Error;

/// Errors produced by the calculator engine and its helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// An operand failed to parse or is not a finite number.
    #[error("invalid number")]
    InvalidNumber,

    /// A value's magnitude exceeded the 1e15 working range.
    #[error("number too large")]
    Overflow,

    /// Division with a zero divisor.
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// An operator symbol outside `+ - * /`.
    #[error("invalid operator '{0}'")]
    InvalidOperator(char),

    /// Input outside a function's domain (negative sqrt, log of zero, ...).
    #[error("invalid input for {0}")]
    InvalidDomain(&'static str),

    /// Appending would push the operand buffer past its length limit.
    #[error("input too long")]
    InputTooLong,

    /// A function name the engine does not know.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// A unit name the converter does not know, or a category mismatch.
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
}

/// Result type alias for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;
