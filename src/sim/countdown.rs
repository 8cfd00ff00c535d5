//! Countdown timer driven by frame time
//!
//! Used for both the movement tick and the bonus visibility window, so the
//! simulation cadence stays independent of the render rate.

use serde::{Deserialize, Serialize};

/// A resettable countdown measured in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    total: f32,
    remaining: f32,
}

impl Countdown {
    /// Start a full countdown of `total` seconds
    pub fn new(total: f32) -> Self {
        Self {
            total,
            remaining: total,
        }
    }

    /// Subtract elapsed frame time
    #[inline]
    pub fn update(&mut self, dt: f32) {
        self.remaining -= dt;
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Restore the full duration
    #[inline]
    pub fn reset(&mut self) {
        self.remaining = self.total;
    }

    pub fn total(&self) -> f32 {
        self.total
    }

    /// Seconds left; negative once overrun
    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}
