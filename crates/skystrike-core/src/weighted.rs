//! Weighted random selection over optional payloads.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One spawn candidate: a relative weight plus an optional payload.
///
/// A missing payload disables the entry: its effective weight is 0 no
/// matter what weight is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedEntry<T> {
    pub weight: f32,
    pub payload: Option<T>,
}

impl<T> WeightedEntry<T> {
    pub fn new(weight: f32, payload: T) -> Self {
        Self {
            weight,
            payload: Some(payload),
        }
    }

    pub fn disabled(weight: f32) -> Self {
        Self {
            weight,
            payload: None,
        }
    }

    fn effective_weight(&self) -> f32 {
        if self.payload.is_some() {
            self.weight.max(0.0)
        } else {
            0.0
        }
    }
}

/// Draw one payload proportionally to weight.
///
/// If the total effective weight is zero, returns the first entry (in
/// priority order) that has a payload at all, a deterministic fallback,
/// or `None` when nothing is enabled. Otherwise a single uniform draw in
/// `[0, total)` walks the entries in order; each branch is guarded on a
/// strictly positive effective weight, so a zero-weight entry can never be
/// picked, and the last positive-weight entry is always reachable even if
/// floating-point rounding lets the draw fall through every interval test.
pub fn pick<'a, T, R: Rng>(entries: &'a [WeightedEntry<T>], rng: &mut R) -> Option<&'a T> {
    let total: f32 = entries.iter().map(WeightedEntry::effective_weight).sum();
    if total <= 0.0 {
        return entries.iter().find_map(|e| e.payload.as_ref());
    }

    let mut remaining = rng.gen_range(0.0..total);
    let mut last_positive = None;
    for entry in entries {
        let w = entry.effective_weight();
        if w <= 0.0 {
            continue;
        }
        last_positive = entry.payload.as_ref();
        if remaining < w {
            return entry.payload.as_ref();
        }
        remaining -= w;
    }
    last_positive
}
