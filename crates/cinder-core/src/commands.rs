//! Player commands sent from the driver to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Fire a projectile from the camera along its forward vector.
    Fire,
    /// Serialize the full dynamic state to `path`, truncating any
    /// existing file.
    Save { path: PathBuf },
    /// Replace the full dynamic state from `path`. On failure the
    /// current state is left untouched.
    Load { path: PathBuf },
}
