//! Simulation constants and tuning parameters.

// --- Spawning ---

/// Maximum hostiles spawned per session. Spawning silently stops here.
pub const SPAWN_CAP: u32 = 13;

/// Minimum spawn shell radius (distance units).
pub const SPAWN_RADIUS_MIN: f32 = 2.0;

/// Maximum spawn shell radius (distance units).
pub const SPAWN_RADIUS_MAX: f32 = 6.0;

/// Default seconds between spawns.
pub const DEFAULT_SPAWN_INTERVAL_SECS: f32 = 1.0;

// --- Projectiles ---

/// Projectile speed (distance units per second).
pub const PROJECTILE_SPEED: f32 = 1.0;

/// Travel range from the spawn anchor beyond which a projectile expires.
/// Strictly greater-than: a projectile at exactly this range is still live.
pub const PROJECTILE_RANGE: f32 = 7.0;

// --- Collision ---

/// Proximity threshold for a hit. Strictly less-than.
pub const COLLISION_RADIUS: f32 = 1.0;

// --- Frame driver ---

/// Tick rate of the demo driver loop (Hz).
pub const TICK_RATE: u32 = 60;
