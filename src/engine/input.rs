//! Textual operand accumulation.
//!
//! `InputBuffer` owns the digits-and-decimal-point string the user is
//! currently typing. It knows nothing about operators; the state machine
//! asks it for a parsed value on every transition.

use crate::error::{CalcError, CalcResult};

/// Maximum number of characters in one operand.
pub const MAX_INPUT_LEN: usize = 15;

/// The operand currently being entered, as text.
///
/// The buffer is never empty: it holds `"0"` in its ground state. The
/// waiting-for-operand flag marks the mode where the next digit starts a
/// fresh number instead of extending the current one (set after an
/// operator, a function application, equals, or memory recall).
#[derive(Clone, Debug)]
pub struct InputBuffer {
    text: String,
    waiting: bool,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBuffer {
    pub fn new() -> Self {
        Self {
            text: "0".to_string(),
            waiting: false,
        }
    }

    /// The buffer contents, suitable for direct display.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn waiting(&self) -> bool {
        self.waiting
    }

    pub fn set_waiting(&mut self, waiting: bool) {
        self.waiting = waiting;
    }

    /// Replace the buffer contents, e.g. with a formatted result.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Reset to the ground state without touching the waiting flag.
    pub fn reset(&mut self) {
        self.text = "0".to_string();
    }

    /// Append one digit.
    ///
    /// In waiting mode the digit replaces the buffer and ends the mode.
    /// Otherwise it is appended, except that a lone `"0"` is replaced
    /// rather than extended. The length limit is checked before any
    /// mutation, so a rejected digit leaves the buffer untouched.
    pub fn push_digit(&mut self, digit: char) -> CalcResult<()> {
        debug_assert!(digit.is_ascii_digit());

        if self.waiting {
            self.text.clear();
            self.text.push(digit);
            self.waiting = false;
            return Ok(());
        }

        if self.text == "0" {
            self.text.clear();
            self.text.push(digit);
            return Ok(());
        }

        if self.text.len() + 1 > MAX_INPUT_LEN {
            return Err(CalcError::InputTooLong);
        }

        self.text.push(digit);
        Ok(())
    }

    /// Insert the decimal point.
    ///
    /// In waiting mode the buffer becomes `"0."`. A second decimal
    /// point, or one that would breach the length limit, is a silent
    /// no-op.
    pub fn push_decimal(&mut self) {
        if self.waiting {
            self.text = "0.".to_string();
            self.waiting = false;
        } else if !self.text.contains('.') && self.text.len() < MAX_INPUT_LEN {
            self.text.push('.');
        }
    }

    /// Remove the last character, falling back to `"0"` when only one
    /// character remains.
    pub fn backspace(&mut self) {
        if self.text.len() > 1 {
            self.text.pop();
        } else {
            self.text = "0".to_string();
        }
    }

    /// Parse the buffer as a number. A trailing decimal point parses
    /// fine ("3." is 3); range validation is the engine's business.
    pub fn value(&self) -> CalcResult<f64> {
        self.text
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidNumber)
    }
}
