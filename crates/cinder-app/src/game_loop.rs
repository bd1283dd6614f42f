//! Simulation loop thread — runs the engine at a fixed cadence.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest snapshot
//! is stored in shared state for polling by the driver.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use cinder_core::camera::CameraState;
use cinder_core::commands::PlayerCommand;
use cinder_core::constants::TICK_RATE;
use cinder_core::state::TickSnapshot;
use cinder_sim::engine::{SimConfig, SimulationEngine};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands accepted by the loop thread.
pub enum LoopCommand {
    Player(PlayerCommand),
    Shutdown,
}

/// Spawns the simulation loop in a new thread.
///
/// Returns the command sender for the driver to use.
pub fn spawn_sim_loop(
    config: SimConfig,
    camera: CameraState,
    latest_snapshot: Arc<Mutex<Option<TickSnapshot>>>,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("cinder-sim-loop".into())
        .spawn(move || {
            run_sim_loop(config, camera, cmd_rx, &latest_snapshot);
        })
        .expect("failed to spawn simulation loop thread");

    cmd_tx
}

/// The simulation loop. Runs until Shutdown command or channel disconnect.
fn run_sim_loop(
    config: SimConfig,
    mut camera: CameraState,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<TickSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let dt = 1.0 / TICK_RATE as f32;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Player(command)) => engine.queue_command(command),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick(dt, &mut camera);

        // 3. Surface this tick's events
        for event in &snapshot.events {
            log::info!("{event:?}");
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinder_core::meta::{AssetHandle, MetaBundle, MetaStore};

    #[test]
    fn loop_produces_snapshots_and_accepts_commands() {
        let mut metas = MetaStore::new();
        let hostile_meta = metas.insert(MetaBundle::new(AssetHandle(1), AssetHandle(2)));
        let projectile_meta = metas.insert(MetaBundle::new(AssetHandle(3), AssetHandle(4)));

        let latest = Arc::new(Mutex::new(None));
        let commands = spawn_sim_loop(
            SimConfig::new(hostile_meta, projectile_meta),
            CameraState::default(),
            Arc::clone(&latest),
        );

        commands
            .send(LoopCommand::Player(PlayerCommand::Fire))
            .unwrap();
        std::thread::sleep(Duration::from_millis(120));

        let snapshot = latest
            .lock()
            .unwrap()
            .clone()
            .expect("no snapshot produced");
        assert_eq!(snapshot.projectiles.len(), 1);
        assert!(snapshot.time.tick > 0);

        commands.send(LoopCommand::Shutdown).unwrap();
    }
}
