//! Save/load: capturing and applying [`SaveRecord`]s, plus file I/O.
//!
//! The codec itself lives in `cinder_core::save`; this module bridges it
//! to the live state. Decoding is total before any mutation, so a failed
//! load leaves the current state untouched.

use std::fs;
use std::path::Path;

use slotmap::SlotMap;

use cinder_core::camera::CameraState;
use cinder_core::entities::{Hostile, Projectile};
use cinder_core::meta::MetaKey;
use cinder_core::save::{LoadError, SaveRecord};
use cinder_core::state::SimulationState;

/// Flatten the dynamic state into a save record.
pub fn capture(state: &SimulationState, camera: &CameraState) -> SaveRecord {
    SaveRecord {
        kills: state.kills,
        camera_position: camera.position,
        camera_angles: camera.angles(),
        hostiles: state.hostiles.values().map(|h| h.position).collect(),
        projectiles: state
            .projectiles
            .values()
            .map(|p| (p.position, p.forward()))
            .collect(),
    }
}

/// Replace the dynamic state and camera from a record.
///
/// Fresh collections are built and swapped in whole, with every entity
/// rebound to the caller's meta keys. Loaded projectiles anchor their
/// range clock to the restored camera position, since the record does
/// not persist spawn anchors.
pub fn apply(
    record: &SaveRecord,
    state: &mut SimulationState,
    camera: &mut CameraState,
    hostile_meta: MetaKey,
    projectile_meta: MetaKey,
) {
    camera.set_position(record.camera_position);
    camera.set_angles(record.camera_angles.0, record.camera_angles.1);

    let mut hostiles = SlotMap::with_key();
    for &position in &record.hostiles {
        hostiles.insert(Hostile::new(hostile_meta, position));
    }

    let mut projectiles = SlotMap::with_key();
    for &(position, forward) in &record.projectiles {
        projectiles.insert(Projectile::restore(
            projectile_meta,
            position,
            forward,
            camera.position,
        ));
    }

    state.hostiles = hostiles;
    state.projectiles = projectiles;
    state.kills = record.kills;
}

/// Write a record to `path`, truncating any existing file.
pub fn save_to_file(path: &Path, record: &SaveRecord) -> std::io::Result<()> {
    fs::write(path, record.to_text())
}

/// Read and decode a record from `path`.
pub fn load_from_file(path: &Path) -> Result<SaveRecord, LoadError> {
    let text = fs::read_to_string(path)?;
    SaveRecord::from_text(&text)
}
