//! Headless demo driver: runs a short scripted session against the
//! simulation loop and prints the final snapshot as JSON.

mod game_loop;

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use cinder_core::camera::CameraState;
use cinder_core::meta::{AssetHandle, MetaBundle, MetaStore};
use cinder_sim::engine::SimConfig;
use cinder_sim::input::{ButtonState, InputSample, InputTracker};

use game_loop::{spawn_sim_loop, LoopCommand};

fn main() {
    env_logger::init();

    // Register the shared visual bundles the entities reference. The
    // handles come from the external asset loaders; the simulation
    // treats them as opaque.
    let mut metas = MetaStore::new();
    let hostile_meta = metas.insert(MetaBundle {
        mesh: AssetHandle(1),
        shader: AssetHandle(2),
        textures: vec![AssetHandle(3)],
        scale: 1.0,
    });
    let projectile_meta = metas.insert(MetaBundle {
        mesh: AssetHandle(4),
        shader: AssetHandle(5),
        textures: vec![AssetHandle(6), AssetHandle(7)],
        scale: 0.1,
    });
    log::info!("registered {} meta bundles", metas.len());

    let latest_snapshot = Arc::new(Mutex::new(None));
    let commands = spawn_sim_loop(
        SimConfig::new(hostile_meta, projectile_meta),
        CameraState::default(),
        Arc::clone(&latest_snapshot),
    );

    let save_path = std::env::temp_dir().join("cinder_demo.sav");
    let mut tracker = InputTracker::new(&save_path);

    // Scripted session: fire a couple of shots, save, then load it back.
    // Buttons are raw levels; the tracker turns transitions into commands.
    let script = [
        InputSample {
            fire: ButtonState::Pressed,
            ..Default::default()
        },
        InputSample::default(),
        InputSample {
            fire: ButtonState::Pressed,
            ..Default::default()
        },
        InputSample::default(),
        InputSample {
            save: ButtonState::Pressed,
            ..Default::default()
        },
        InputSample::default(),
        InputSample {
            load: ButtonState::Pressed,
            ..Default::default()
        },
        InputSample::default(),
    ];
    for sample in script {
        for command in tracker.poll(sample) {
            let _ = commands.send(LoopCommand::Player(command));
        }
        thread::sleep(Duration::from_millis(500));
    }

    let _ = commands.send(LoopCommand::Shutdown);
    thread::sleep(Duration::from_millis(100));

    if let Some(snapshot) = latest_snapshot.lock().ok().and_then(|mut s| s.take()) {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("failed to serialize snapshot: {err}"),
        }
    }

    let _ = std::fs::remove_file(&save_path);
}
