//! Simulation engine for SKYGUARD.
//!
//! Owns the hecs ECS world, advances it one clamped step at a time,
//! and produces GameStateSnapshots for the host.

pub mod battery;
pub mod engine;
pub mod guidance;
pub mod ids;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skyguard_core as core;
