//! SKYGUARD host application.
//!
//! Runs the simulation engine on its own thread, feeds it player commands
//! over a channel, and keeps the latest snapshot available to other threads.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod state;

pub use skyguard_core as core;
