//! Bounded gauge values
//!
//! A `BoundedValue` is a "current of maximum" pair as produced by value
//! template evaluation: health, resource pools, cooldown charges. The type
//! does not police `current` against `max` — producers may clamp or not —
//! it only derives a progress ratio and exposes the empty sentinel.

use serde::{Deserialize, Serialize};

/// A current/maximum pair with a derived progress ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedValue {
    pub current: i64,
    pub max: i64,
}

impl BoundedValue {
    /// Sentinel meaning "no value; skip rendering entirely"
    pub const EMPTY: BoundedValue = BoundedValue { current: 0, max: 0 };

    pub const fn new(current: i64, max: i64) -> Self {
        Self { current, max }
    }

    /// Whether this value is the empty sentinel
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Fill ratio as 0.0 (empty) to 1.0 (full); 0.0 when `max` is zero
    pub fn progress(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        (self.current as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    /// Fill ratio as a percentage (0.0 to 100.0)
    pub fn percent(&self) -> f32 {
        self.progress() * 100.0
    }
}
