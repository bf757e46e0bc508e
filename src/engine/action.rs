//! Inbound actions, as delivered by an event dispatcher (keyboard
//! handler, button grid, CLI tokenizer).

use crate::engine::arithmetic::Operator;
use crate::engine::functions::UnaryFunction;

/// One discrete user action against the calculator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// A digit key, `'0'..='9'`.
    Digit(char),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    Function(UnaryFunction),
    MemoryStore,
    MemoryRecall,
    MemoryClear,
    MemoryAdd,
    MemorySubtract,
    ClearHistory,
}
