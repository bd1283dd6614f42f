//! Snapshot system: builds the per-tick view of the current state.
//!
//! Read-only — never modifies the state.

use cinder_core::camera::CameraState;
use cinder_core::events::GameEvent;
use cinder_core::state::{CameraView, HostileView, ProjectileView, SimulationState, TickSnapshot};
use cinder_core::types::SimTime;

pub fn build(
    state: &SimulationState,
    time: &SimTime,
    camera: &CameraState,
    events: Vec<GameEvent>,
) -> TickSnapshot {
    TickSnapshot {
        time: *time,
        kills: state.kills,
        hostiles: state
            .hostiles
            .values()
            .map(|h| HostileView {
                position: h.position,
            })
            .collect(),
        projectiles: state
            .projectiles
            .values()
            .map(|p| ProjectileView {
                position: p.position,
                forward: p.forward(),
                range_from_spawn: p.range_from_spawn(),
            })
            .collect(),
        camera: CameraView {
            position: camera.position,
            yaw: camera.yaw,
            pitch: camera.pitch,
        },
        events,
    }
}
