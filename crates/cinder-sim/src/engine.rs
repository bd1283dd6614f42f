//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the dynamic state, processes queued player
//! commands, runs all systems in a fixed order, and produces
//! `TickSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;
use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cinder_core::camera::CameraState;
use cinder_core::commands::PlayerCommand;
use cinder_core::constants::DEFAULT_SPAWN_INTERVAL_SECS;
use cinder_core::entities::{HostileKey, Projectile, ProjectileKey};
use cinder_core::events::GameEvent;
use cinder_core::meta::MetaKey;
use cinder_core::save::LoadError;
use cinder_core::state::{SimulationState, TickSnapshot};
use cinder_core::types::SimTime;

use crate::persistence;
use crate::systems;
use crate::systems::spawner::SpawnSchedule;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same spawn sequence.
    pub seed: u64,
    /// Minimum seconds between hostile spawns.
    pub spawn_interval_secs: f32,
    /// Meta bundle spawned hostiles reference.
    pub hostile_meta: MetaKey,
    /// Meta bundle fired projectiles reference.
    pub projectile_meta: MetaKey,
}

impl SimConfig {
    pub fn new(hostile_meta: MetaKey, projectile_meta: MetaKey) -> Self {
        Self {
            seed: 42,
            spawn_interval_secs: DEFAULT_SPAWN_INTERVAL_SECS,
            hostile_meta,
            projectile_meta,
        }
    }
}

/// The simulation engine. Owns the dynamic state and all sim-side
/// bookkeeping; the camera context is owned by the driver and threaded
/// through each tick.
pub struct SimulationEngine {
    state: SimulationState,
    time: SimTime,
    rng: ChaCha8Rng,
    schedule: SpawnSchedule,
    hostile_meta: MetaKey,
    projectile_meta: MetaKey,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
    dead_projectiles: Vec<ProjectileKey>,
    dead_hostiles: Vec<HostileKey>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: SimulationState::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            schedule: SpawnSchedule::new(config.spawn_interval_secs),
            hostile_meta: config.hostile_meta,
            projectile_meta: config.projectile_meta,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            dead_projectiles: Vec::new(),
            dead_hostiles: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick of `dt` seconds and return the
    /// resulting snapshot. Tick order: queued commands, spawning,
    /// projectile integration, collisions, batched removal.
    pub fn tick(&mut self, dt: f32, camera: &mut CameraState) -> TickSnapshot {
        self.process_commands(camera);
        self.run_systems(dt);
        self.time.advance(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(&self.state, &self.time, camera, events)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the dynamic state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Serialize the full dynamic state to `path`.
    pub fn save(&self, path: &Path, camera: &CameraState) -> std::io::Result<()> {
        let record = persistence::capture(&self.state, camera);
        persistence::save_to_file(path, &record)?;
        log::info!(
            "saved {} hostiles, {} projectiles, {} kills to {}",
            record.hostiles.len(),
            record.projectiles.len(),
            record.kills,
            path.display()
        );
        Ok(())
    }

    /// Replace the full dynamic state from `path`. On any failure the
    /// current state and camera are left untouched.
    pub fn load(&mut self, path: &Path, camera: &mut CameraState) -> Result<(), LoadError> {
        let record = persistence::load_from_file(path)?;
        persistence::apply(
            &record,
            &mut self.state,
            camera,
            self.hostile_meta,
            self.projectile_meta,
        );
        log::info!(
            "loaded {} hostiles, {} projectiles, {} kills from {}",
            record.hostiles.len(),
            record.projectiles.len(),
            record.kills,
            path.display()
        );
        Ok(())
    }

    /// Process all queued commands.
    fn process_commands(&mut self, camera: &mut CameraState) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, camera);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand, camera: &mut CameraState) {
        match command {
            PlayerCommand::Fire => {
                let projectile =
                    Projectile::fire(self.projectile_meta, camera.forward(), camera.position);
                self.events.push(GameEvent::Fired {
                    position: projectile.position,
                    forward: projectile.forward(),
                });
                self.state.projectiles.insert(projectile);
            }
            PlayerCommand::Save { path } => match self.save(&path, camera) {
                Ok(()) => self.events.push(GameEvent::Saved),
                Err(err) => log::warn!("save to {} failed: {err}", path.display()),
            },
            PlayerCommand::Load { path } => match self.load(&path, camera) {
                Ok(()) => self.events.push(GameEvent::Loaded {
                    hostiles: self.state.hostiles.len(),
                    projectiles: self.state.projectiles.len(),
                }),
                Err(err) => {
                    log::warn!("load from {} failed: {err}", path.display());
                    self.events.push(GameEvent::LoadFailed {
                        reason: err.to_string(),
                    });
                }
            },
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Scheduled spawning
        systems::spawner::run(
            &mut self.state,
            &mut self.schedule,
            &mut self.rng,
            self.time.elapsed_secs,
            self.hostile_meta,
            &mut self.events,
        );
        // 2. Projectile integration + range expiry flagging
        systems::movement::run(
            &mut self.state,
            dt,
            &mut self.dead_projectiles,
            &mut self.events,
        );
        // 3. Proximity collisions
        systems::collision::run(
            &mut self.state,
            &mut self.dead_projectiles,
            &mut self.dead_hostiles,
            &mut self.events,
        );
        // 4. Batched removal
        systems::cleanup::run(
            &mut self.state,
            &mut self.dead_projectiles,
            &mut self.dead_hostiles,
        );
    }

    /// Insert a hostile at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_hostile_at(&mut self, position: glam::Vec3) -> HostileKey {
        self.state
            .hostiles
            .insert(cinder_core::entities::Hostile::new(
                self.hostile_meta,
                position,
            ))
    }

    /// Insert a projectile with an explicit anchor and direction (for tests).
    #[cfg(test)]
    pub fn spawn_projectile(&mut self, forward: glam::Vec3, origin: glam::Vec3) -> ProjectileKey {
        self.state
            .projectiles
            .insert(Projectile::fire(self.projectile_meta, forward, origin))
    }

    /// Get a read-only reference to the spawn schedule (for tests).
    #[cfg(test)]
    pub fn schedule(&self) -> &SpawnSchedule {
        &self.schedule
    }
}
