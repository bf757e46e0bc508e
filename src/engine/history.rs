//! Calculation history and the memory register.

use std::time::SystemTime;

use serde::Serialize;

/// Maximum number of retained history entries.
pub const HISTORY_CAP: usize = 10;

/// One recorded calculation.
#[derive(Clone, Debug, Serialize)]
pub struct HistoryEntry {
    /// Human-readable form, e.g. `"50 + 3"` or `"√9"`.
    pub expression: String,
    pub result: f64,
    pub timestamp: SystemTime,
}

/// A newest-first log of calculations, hard-capped at [`HISTORY_CAP`].
///
/// The cap is enforced inside [`record`](History::record), so the
/// structure can never be observed above its bound.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a calculation. The newest entry lands at index 0; the
    /// oldest one is evicted once the cap is reached.
    pub fn record(&mut self, expression: impl Into<String>, result: f64) {
        self.entries.insert(
            0,
            HistoryEntry {
                expression: expression.into(),
                result,
                timestamp: SystemTime::now(),
            },
        );
        self.entries.truncate(HISTORY_CAP);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// The single memory register. Defaults to zero and survives engine
/// resets; only [`clear`](Memory::clear) empties it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Memory {
    value: f64,
}

impl Memory {
    pub fn store(&mut self, value: f64) {
        self.value = value;
    }

    pub fn recall(&self) -> f64 {
        self.value
    }

    pub fn add(&mut self, value: f64) {
        self.value += value;
    }

    pub fn subtract(&mut self, value: f64) {
        self.value -= value;
    }

    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    /// Whether the display should show the memory indicator.
    pub fn is_set(&self) -> bool {
        self.value != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut history = History::new();
        history.record("1 + 1", 2.0);
        history.record("2 + 2", 4.0);
        assert_eq!(history.entries()[0].expression, "2 + 2");
        assert_eq!(history.entries()[1].expression, "1 + 1");
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut history = History::new();
        for i in 0..11 {
            history.record(format!("{i} + 0"), i as f64);
        }
        assert_eq!(history.len(), 10);
        // The very first record is gone, the latest ten remain
        assert_eq!(history.entries()[0].expression, "10 + 0");
        assert_eq!(history.entries()[9].expression, "1 + 0");
        assert!(!history.entries().iter().any(|e| e.expression == "0 + 0"));
    }

    #[test]
    fn test_memory_register() {
        let mut memory = Memory::default();
        assert!(!memory.is_set());
        memory.store(5.0);
        memory.add(2.5);
        memory.subtract(1.0);
        assert_eq!(memory.recall(), 6.5);
        assert!(memory.is_set());
        memory.clear();
        assert_eq!(memory.recall(), 0.0);
        assert!(!memory.is_set());
    }
}
