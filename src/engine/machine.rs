//! The two-operand state machine.
//!
//! `Calculator` accumulates one operand at a time and evaluates
//! immediately on each operator press, chaining strictly left to right
//! with no precedence. This is deliberate desk-calculator UX: `2 + 3 *
//! 4` is `(2 + 3) * 4`, never `2 + 12`.
//!
//! Every operation validates before it mutates, so a failed action
//! leaves the machine exactly as it was.

use tracing::{debug, trace};

use crate::engine::action::Action;
use crate::engine::arithmetic::{self, MAX_MAGNITUDE, Operator};
use crate::engine::functions::UnaryFunction;
use crate::engine::history::{History, HistoryEntry, Memory};
use crate::engine::input::InputBuffer;
use crate::error::{CalcError, CalcResult};

/// A scientific desk calculator: input buffer, pending operation,
/// memory register, and a capped history log.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    buffer: InputBuffer,
    /// Left operand text once an operator has been chosen.
    previous: Option<String>,
    operator: Option<Operator>,
    history: History,
    memory: Memory,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    // -- inbound actions ---------------------------------------------------

    /// Dispatch one user action. Errors abort only that action.
    pub fn apply(&mut self, action: Action) -> CalcResult<()> {
        trace!(?action, "dispatch");
        match action {
            Action::Digit(d) => self.input_digit(d),
            Action::DecimalPoint => {
                self.buffer.push_decimal();
                Ok(())
            }
            Action::Operator(op) => self.input_operator(op),
            Action::Equals => self.equals(),
            Action::Clear => {
                self.clear();
                Ok(())
            }
            Action::Backspace => {
                self.buffer.backspace();
                Ok(())
            }
            Action::Function(f) => self.apply_function(f),
            Action::MemoryStore => self.memory_store(),
            Action::MemoryRecall => {
                self.memory_recall();
                Ok(())
            }
            Action::MemoryClear => {
                self.memory.clear();
                Ok(())
            }
            Action::MemoryAdd => self.memory_add(),
            Action::MemorySubtract => self.memory_subtract(),
            Action::ClearHistory => {
                self.history.clear();
                Ok(())
            }
        }
    }

    pub fn input_digit(&mut self, digit: char) -> CalcResult<()> {
        if !digit.is_ascii_digit() {
            return Err(CalcError::InvalidNumber);
        }
        self.buffer.push_digit(digit)
    }

    pub fn input_decimal(&mut self) {
        self.buffer.push_decimal();
    }

    pub fn backspace(&mut self) {
        self.buffer.backspace();
    }

    /// Handle an operator press.
    ///
    /// With no left operand pending, the current operand is promoted to
    /// the left slot. With a pending operator and a freshly typed right
    /// operand, the pending operation is evaluated first and its result
    /// becomes the new left operand. A second operator press without an
    /// intervening digit just replaces the pending operator.
    pub fn input_operator(&mut self, op: Operator) -> CalcResult<()> {
        let value = self.validated_operand()?;

        match (&self.previous, self.operator) {
            (None, _) => {
                self.previous = Some(self.buffer.text().to_string());
            }
            (Some(prev), Some(pending)) if !self.buffer.waiting() => {
                let left = parse_stored(prev)?;
                let result = arithmetic::evaluate(left, value, pending)?;
                let text = format_number(result);
                debug!(%pending, left, right = value, result, "chained evaluation");
                self.buffer.set(text.clone());
                self.previous = Some(text);
            }
            // Operator pressed again before any digit: replace only.
            _ => {}
        }

        self.buffer.set_waiting(true);
        self.operator = Some(op);
        Ok(())
    }

    /// The `=` action: evaluate the pending operation, record it in
    /// history, and leave the result as the current operand. No-op when
    /// nothing is pending.
    pub fn equals(&mut self) -> CalcResult<()> {
        let value = self.validated_operand()?;

        let (Some(prev), Some(op)) = (self.previous.clone(), self.operator) else {
            return Ok(());
        };

        let left = parse_stored(&prev)?;
        let result = arithmetic::evaluate(left, value, op)?;
        let expression = format!("{prev} {op} {}", format_number(value));
        debug!(%expression, result, "equals");

        self.history.record(expression, result);
        self.buffer.set(format_number(result));
        self.previous = None;
        self.operator = None;
        self.buffer.set_waiting(true);
        Ok(())
    }

    /// Apply a unary function to the current operand and record it.
    pub fn apply_function(&mut self, function: UnaryFunction) -> CalcResult<()> {
        let value = self.validated_operand()?;
        let result = function.apply(value)?;
        let label = function.label(self.buffer.text());
        debug!(%label, result, "function");

        self.history.record(label, result);
        self.buffer.set(format_number(result));
        self.buffer.set_waiting(true);
        Ok(())
    }

    /// Reset operand, pending operator, and waiting mode. Memory and
    /// history are untouched; they have their own clear actions.
    pub fn clear(&mut self) {
        self.buffer.reset();
        self.buffer.set_waiting(false);
        self.previous = None;
        self.operator = None;
    }

    // -- memory ------------------------------------------------------------

    pub fn memory_store(&mut self) -> CalcResult<()> {
        let value = self.buffer.value()?;
        self.memory.store(value);
        Ok(())
    }

    /// Load the register into the operand buffer; the next digit starts
    /// a fresh number.
    pub fn memory_recall(&mut self) {
        self.buffer.set(format_number(self.memory.recall()));
        self.buffer.set_waiting(true);
    }

    pub fn memory_clear(&mut self) {
        self.memory.clear();
    }

    pub fn memory_add(&mut self) -> CalcResult<()> {
        let value = self.buffer.value()?;
        self.memory.add(value);
        Ok(())
    }

    pub fn memory_subtract(&mut self) -> CalcResult<()> {
        let value = self.buffer.value()?;
        self.memory.subtract(value);
        Ok(())
    }

    // -- outbound queries --------------------------------------------------

    /// The text the display should show.
    pub fn display_value(&self) -> &str {
        self.buffer.text()
    }

    /// The pending-operation line above the main display: `"8 +"` while
    /// an operator is pending, `"0"` otherwise.
    pub fn history_label(&self) -> String {
        match (&self.previous, self.operator) {
            (Some(prev), Some(op)) => format!("{prev} {op}"),
            _ => "0".to_string(),
        }
    }

    pub fn memory_indicator(&self) -> bool {
        self.memory.is_set()
    }

    /// Recorded calculations, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Parse and domain-check the current operand. Finiteness is checked
    /// before the range bound.
    fn validated_operand(&self) -> CalcResult<f64> {
        let value = self.buffer.value()?;
        arithmetic::validate(value)
    }
}

/// Re-parse an operand the machine itself stored earlier.
fn parse_stored(text: &str) -> CalcResult<f64> {
    text.parse::<f64>().map_err(|_| CalcError::InvalidNumber)
}

/// Format a result for the operand buffer: plain integer when the value
/// is fractionless, otherwise a trimmed decimal. Results are already
/// rounded to 8 places, so `{:.8}` never truncates.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < MAX_MAGNITUDE {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{value:.8}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
