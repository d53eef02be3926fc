//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! They own no state; it all lives in components or is passed in.

pub mod cleanup;
pub mod fire_control;
pub mod intercept;
pub mod missile_kinematics;
pub mod movement;
pub mod snapshot;
pub mod wave_spawner;
