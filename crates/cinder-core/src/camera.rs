//! Camera context threaded through the tick.
//!
//! The input system (external) mutates this between ticks; the engine
//! reads it when firing and rewrites it on load. Orientation is the two
//! angles the save format persists: yaw (horizontal) and pitch
//! (vertical).

use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: Vec3,
    /// Horizontal angle, radians.
    pub yaw: f32,
    /// Vertical angle, radians.
    pub pitch: f32,
}

impl CameraState {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
        }
    }

    /// Unit forward vector derived from the angles.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        )
    }

    pub fn angles(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }

    pub fn set_angles(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}
