//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking.
///
/// The loop is frame-driven: each tick advances by whatever `dt` the
/// driver measured, so `elapsed_secs` is wall-clock-shaped rather than a
/// fixed multiple of the tick count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
