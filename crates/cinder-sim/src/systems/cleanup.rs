//! Cleanup system: batched removal of expired and destroyed entities.
//!
//! Runs after all flagging passes so that no pass ever removes entities
//! mid-iteration. Buffers may hold the same key more than once when a
//! single tick flags an entity twice; the second removal is a no-op.

use cinder_core::entities::{HostileKey, ProjectileKey};
use cinder_core::state::SimulationState;

pub fn run(
    state: &mut SimulationState,
    dead_projectiles: &mut Vec<ProjectileKey>,
    dead_hostiles: &mut Vec<HostileKey>,
) {
    for key in dead_projectiles.drain(..) {
        let _ = state.projectiles.remove(key);
    }
    for key in dead_hostiles.drain(..) {
        let _ = state.hostiles.remove(key);
    }
}
