//! State shared between the game loop thread and the rest of the host.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use skyguard_core::commands::PlayerCommand;
use skyguard_core::state::GameStateSnapshot;
use skyguard_core::types::LatLng;

/// Latest snapshot published by the game loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Messages sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to apply between ticks.
    Command(PlayerCommand),
    /// Move the area of interest (the host's view center).
    SetCenter(LatLng),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

pub type CommandSender = mpsc::Sender<GameLoopCommand>;

pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

/// Clone of the most recent snapshot, if any tick has completed.
pub fn latest(snapshot: &SharedSnapshot) -> Option<GameStateSnapshot> {
    snapshot.lock().ok().and_then(|lock| lock.clone())
}
