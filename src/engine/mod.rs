//! The expression-evaluation and input-state machine.
//!
//! This module is the calculator's core:
//! - Accumulate one operand at a time from digit/decimal events
//! - Evaluate immediately on each operator press, left to right
//! - Apply scientific functions, with domain guards
//! - Keep a memory register and a capped, newest-first history
//!
//! The core never renders: callers feed it [`Action`]s and read back
//! display text, the pending-operation label, and history entries.

mod action;
mod arithmetic;
mod functions;
mod history;
mod input;
mod machine;

pub use action::Action;
pub use arithmetic::{MAX_MAGNITUDE, Operator, evaluate, round_result, validate};
pub use functions::UnaryFunction;
pub use history::{HISTORY_CAP, History, HistoryEntry, Memory};
pub use input::{InputBuffer, MAX_INPUT_LEN};
pub use machine::{Calculator, format_number};
