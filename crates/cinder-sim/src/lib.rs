//! Simulation engine for CINDER.
//!
//! Owns the dynamic state, runs the per-tick systems in a fixed order,
//! and produces `TickSnapshot`s for the driver.

pub mod engine;
pub mod input;
pub mod persistence;
pub mod systems;

pub use cinder_core as core;
pub use engine::SimulationEngine;
