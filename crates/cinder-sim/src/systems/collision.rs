//! Proximity collision system.
//!
//! Tests every (projectile, hostile) pair and queues both sides of a hit
//! for removal. A hostile can be struck by several projectiles in one
//! tick but dies — and scores — only once; duplicate queue entries are
//! harmless because removal is by generation-tagged key.

use cinder_core::entities::{Collider, HostileKey, ProjectileKey};
use cinder_core::events::GameEvent;
use cinder_core::state::SimulationState;

pub fn run(
    state: &mut SimulationState,
    dead_projectiles: &mut Vec<ProjectileKey>,
    dead_hostiles: &mut Vec<HostileKey>,
    events: &mut Vec<GameEvent>,
) {
    for (projectile_key, projectile) in &state.projectiles {
        for (hostile_key, hostile) in &state.hostiles {
            if !projectile.is_colliding_with(hostile) {
                continue;
            }
            dead_projectiles.push(projectile_key);

            if dead_hostiles.contains(&hostile_key) {
                continue;
            }
            dead_hostiles.push(hostile_key);
            state.kills += 1;
            events.push(GameEvent::HostileDown {
                position: hostile.position,
                kills: state.kills,
            });
        }
    }
}
