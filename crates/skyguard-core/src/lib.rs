//! Core types and definitions for the SKYGUARD air-defense simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geographic math, components, commands, state snapshots, events,
//! configuration, and constants. It has no dependency on the ECS or any
//! runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geo;
pub mod state;
pub mod types;

pub use error::{SimError, SimResult};
pub use types::{EntityId, LatLng, SimTime};
