//! Player commands sent from the host to the simulation, and their outcomes.
//!
//! Commands apply immediately between ticks. Expected refusals (no target,
//! not enough funds) are outcomes, not errors.

use serde::{Deserialize, Serialize};

use crate::enums::TargetKind;
use crate::types::{EntityId, LatLng};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Spawning ---
    /// Place a target with explicit kinematics.
    SpawnTarget {
        kind: TargetKind,
        position: LatLng,
        heading_deg: f64,
        speed: f64,
    },
    /// Place a target of the given kind at a random point around the area center.
    SpawnRandom { kind: TargetKind },
    /// Spawn a random wave (one target, sometimes a drone swarm on top).
    SpawnWave,

    // --- Economy ---
    /// Build a battery at the given position.
    BuildBattery { position: LatLng },
    /// Upgrade a single battery.
    UpgradeBattery { battery: EntityId },
    /// Upgrade every battery for the price of one upgrade.
    UpgradeAllBatteries,

    // --- Fire control ---
    /// Fire at the target nearest to a point.
    FireManual { point: LatLng },
    /// Enable or disable automatic fire for all batteries.
    SetAutoEngage { enabled: bool },
    /// Enable or disable automatic fire for one battery.
    SetBatteryAutoEngage { battery: EntityId, enabled: bool },

    // --- Session ---
    /// Freeze the world: ticks stop advancing time until `Resume`.
    Pause,
    Resume,
    /// Clear all entities and counters.
    Reset,
}

/// Result of a build request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub enum BuildOutcome {
    Built { battery: EntityId, funds_left: u32 },
    InsufficientFunds { required: u32, available: u32 },
}

/// Result of an upgrade request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub enum UpgradeOutcome {
    Upgraded {
        battery: EntityId,
        level: u32,
        range_m: f64,
        reload_secs: f64,
    },
    UpgradedAll { count: usize },
    InsufficientFunds { required: u32, available: u32 },
    UnknownBattery { battery: EntityId },
    NoBatteries,
}

/// Result of a manual fire request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub enum FireOutcome {
    Launched {
        missile: EntityId,
        target: EntityId,
        /// Distance from the aim point to the acquired target (meters).
        distance_m: f64,
    },
    /// There is nothing to shoot at.
    NoTargets,
    /// The nearest target is beyond the acquisition radius.
    OutOfRange { nearest_m: f64 },
}

/// Result of applying any `PlayerCommand`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Spawned { targets: Vec<EntityId> },
    Build(BuildOutcome),
    Upgrade(UpgradeOutcome),
    Fire(FireOutcome),
    UnknownBattery { battery: EntityId },
    Applied,
}
