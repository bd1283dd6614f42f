//! Projectile integration system.
//!
//! Advances every projectile along its fixed forward direction and
//! queues range-expired ones for removal. Expired projectiles are not
//! removed here — the collision pass still sees them this tick, and the
//! cleanup pass drains the buffer.

use cinder_core::entities::ProjectileKey;
use cinder_core::events::GameEvent;
use cinder_core::state::SimulationState;

pub fn run(
    state: &mut SimulationState,
    dt: f32,
    dead_projectiles: &mut Vec<ProjectileKey>,
    events: &mut Vec<GameEvent>,
) {
    for (key, projectile) in &mut state.projectiles {
        projectile.advance(dt);
        if projectile.is_expired() {
            dead_projectiles.push(key);
            events.push(GameEvent::Fizzled {
                position: projectile.position,
            });
        }
    }
}
