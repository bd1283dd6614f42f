//! Events emitted by the simulation for UI and audio feedback.
//!
//! Drained into each tick's snapshot.

use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A hostile appeared on the spawn shell.
    Spawned { position: Vec3 },
    /// The player fired a projectile.
    Fired { position: Vec3, forward: Vec3 },
    /// A projectile outran its range and fizzled out.
    Fizzled { position: Vec3 },
    /// A projectile destroyed a hostile. `kills` is the running total.
    HostileDown { position: Vec3, kills: u32 },
    /// State written to the save file.
    Saved,
    /// State replaced from the save file.
    Loaded { hostiles: usize, projectiles: usize },
    /// The save file could not be loaded; state is unchanged.
    LoadFailed { reason: String },
}
