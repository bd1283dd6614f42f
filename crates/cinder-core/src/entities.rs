//! Simulation entities.
//!
//! Entities are lightweight data: a position plus a non-owning key into
//! the shared meta arena. Game logic lives in the sim crate's systems.

use glam::Vec3;
use slotmap::new_key_type;

use crate::constants::{COLLISION_RADIUS, PROJECTILE_RANGE, PROJECTILE_SPEED};
use crate::meta::MetaKey;

new_key_type! {
    /// Generation-tagged key of a live hostile.
    pub struct HostileKey;
    /// Generation-tagged key of a live projectile.
    pub struct ProjectileKey;
}

/// Anything with a world position that can be proximity-tested.
pub trait Collider {
    fn position(&self) -> Vec3;

    /// Strict proximity check: a hit at exactly [`COLLISION_RADIUS`] is a miss.
    fn is_colliding_with(&self, other: &impl Collider) -> bool
    where
        Self: Sized,
    {
        self.position().distance(other.position()) < COLLISION_RADIUS
    }
}

/// A hostile entity, spawned on a spherical shell around the origin.
#[derive(Debug, Clone, Copy)]
pub struct Hostile {
    pub position: Vec3,
    /// Shared visual bundle, owned by the meta store.
    pub meta: MetaKey,
}

impl Hostile {
    pub fn new(meta: MetaKey, position: Vec3) -> Self {
        Self { position, meta }
    }
}

impl Collider for Hostile {
    fn position(&self) -> Vec3 {
        self.position
    }
}

/// A projectile in flight.
///
/// Invariant: `position = spawn_position + forward * PROJECTILE_SPEED *
/// elapsed-since-fire`. The anchor and direction are fixed at creation.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    spawn_position: Vec3,
    forward: Vec3,
    pub position: Vec3,
    /// Shared visual bundle, owned by the meta store.
    pub meta: MetaKey,
}

impl Projectile {
    /// Fire a projectile from `origin` along `forward`.
    pub fn fire(meta: MetaKey, forward: Vec3, origin: Vec3) -> Self {
        Self {
            spawn_position: origin,
            forward,
            position: origin,
            meta,
        }
    }

    /// Rebuild a projectile from saved state. The save record carries no
    /// spawn anchor, so the caller supplies one (the restored camera
    /// position) and range expiry is measured from there.
    pub fn restore(meta: MetaKey, position: Vec3, forward: Vec3, anchor: Vec3) -> Self {
        Self {
            spawn_position: anchor,
            forward,
            position,
            meta,
        }
    }

    /// Advance along the fixed forward direction.
    pub fn advance(&mut self, dt: f32) {
        self.position += self.forward * PROJECTILE_SPEED * dt;
    }

    /// Euclidean distance travelled from the spawn anchor.
    pub fn range_from_spawn(&self) -> f32 {
        self.position.distance(self.spawn_position)
    }

    /// Whether the projectile has outrun its range. Strict: exactly
    /// [`PROJECTILE_RANGE`] is still live.
    pub fn is_expired(&self) -> bool {
        self.range_from_spawn() > PROJECTILE_RANGE
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn spawn_position(&self) -> Vec3 {
        self.spawn_position
    }
}

impl Collider for Projectile {
    fn position(&self) -> Vec3 {
        self.position
    }
}
