//! High-score persistence behind a trait seam.
//!
//! The engine takes a `ScoreStore` at construction instead of reaching for
//! a process-wide singleton, keeping lifetime and test substitution
//! explicit. Real backends persist the single integer under
//! `constants::HIGH_SCORE_KEY`.

use std::cell::Cell;
use std::rc::Rc;

/// Single-integer persistent store for the high score.
pub trait ScoreStore {
    fn load(&self) -> u32;
    fn save(&mut self, value: u32);
}

/// In-memory store. Cloned handles share the same value, so tests and
/// demos can keep one handle and inspect what the engine persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore(Rc<Cell<u32>>);

impl MemoryScoreStore {
    pub fn with_value(value: u32) -> Self {
        Self(Rc::new(Cell::new(value)))
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.0.get()
    }

    fn save(&mut self, value: u32) {
        self.0.set(value);
    }
}
