//! Spawn scheduling system — emits hostiles on a randomized schedule.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use cinder_core::constants::{SPAWN_CAP, SPAWN_RADIUS_MAX, SPAWN_RADIUS_MIN};
use cinder_core::entities::Hostile;
use cinder_core::events::GameEvent;
use cinder_core::meta::MetaKey;
use cinder_core::state::SimulationState;

/// Spawn pacing state for one session.
#[derive(Debug, Clone)]
pub struct SpawnSchedule {
    /// Hostiles spawned so far this session.
    pub spawned: u32,
    /// Elapsed-time stamp of the previous spawn.
    pub last_spawn_secs: f32,
    /// Minimum seconds between spawns.
    pub interval_secs: f32,
}

impl SpawnSchedule {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            spawned: 0,
            last_spawn_secs: 0.0,
            interval_secs,
        }
    }

    /// Whether the session cap has been reached. Not an error — spawning
    /// just stops.
    pub fn cap_reached(&self) -> bool {
        self.spawned >= SPAWN_CAP
    }
}

/// Spawn at most one hostile per call: only when under the session cap
/// and strictly more than the configured interval has passed since the
/// previous spawn.
pub fn run(
    state: &mut SimulationState,
    schedule: &mut SpawnSchedule,
    rng: &mut ChaCha8Rng,
    elapsed_secs: f32,
    hostile_meta: MetaKey,
    events: &mut Vec<GameEvent>,
) {
    if schedule.cap_reached()
        || elapsed_secs - schedule.last_spawn_secs <= schedule.interval_secs
    {
        return;
    }
    schedule.last_spawn_secs = elapsed_secs;
    schedule.spawned += 1;

    let position = random_shell_position(rng);
    state.hostiles.insert(Hostile::new(hostile_meta, position));
    events.push(GameEvent::Spawned { position });
}

/// Draw a spawn point: radius uniform in [`SPAWN_RADIUS_MIN`,
/// `SPAWN_RADIUS_MAX`), two independent angles uniform in [0, 2π),
/// standard spherical-to-Cartesian mapping.
fn random_shell_position(rng: &mut ChaCha8Rng) -> Vec3 {
    use std::f32::consts::TAU;

    let r: f32 = rng.gen_range(SPAWN_RADIUS_MIN..SPAWN_RADIUS_MAX);
    let phi: f32 = rng.gen_range(0.0..TAU);
    let psi: f32 = rng.gen_range(0.0..TAU);
    Vec3::new(
        phi.cos() * psi.sin() * r,
        phi.sin() * r,
        phi.cos() * psi.cos() * r,
    )
}
