//! deskcalc: a scientific desk calculator engine.
//!
//! The core is an immediate-execution state machine ([`Calculator`]):
//! it consumes discrete user actions and evaluates on every operator
//! press, chaining left to right with no precedence, exactly like a
//! hardware four-function calculator. Around it sit pure helpers for
//! unit conversion, physical constants, finance, and statistics.

pub mod constants;
pub mod convert;
pub mod engine;
pub mod error;
pub mod finance;
pub mod stats;

pub use engine::{Action, Calculator, HistoryEntry, Operator, UnaryFunction};
pub use error::{CalcError, CalcResult};
