//! Dynamic simulation state and the per-tick snapshot views.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::entities::{Hostile, HostileKey, Projectile, ProjectileKey};
use crate::events::GameEvent;
use crate::types::SimTime;

/// The full dynamic state, mutated in place each tick.
///
/// Entities live in generation-tagged slot maps: removal is by key and
/// tolerates duplicates (a second removal of the same key is a no-op).
#[derive(Debug, Default)]
pub struct SimulationState {
    pub hostiles: SlotMap<HostileKey, Hostile>,
    pub projectiles: SlotMap<ProjectileKey, Projectile>,
    /// Running count of hostiles destroyed.
    pub kills: u32,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Complete visible state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub time: SimTime,
    pub kills: u32,
    pub hostiles: Vec<HostileView>,
    pub projectiles: Vec<ProjectileView>,
    pub camera: CameraView,
    /// Events raised during this tick, in order.
    pub events: Vec<GameEvent>,
}

/// A visible hostile.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HostileView {
    pub position: Vec3,
}

/// A visible projectile.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec3,
    pub forward: Vec3,
    /// Distance travelled from the spawn anchor.
    pub range_from_spawn: f32,
}

/// Camera pose at snapshot time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}
