//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//! Every entity also carries a `LatLng` position component.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityId;

/// Creation stamp attached to every entity at spawn. Used to order
/// entities by age (oldest battery, oldest target first).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntityMeta {
    /// Simulation time at which the entity was created (seconds).
    pub created_secs: f64,
}

/// Hostile target state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub kind: TargetKind,
    /// Heading in degrees (0 = North, clockwise).
    pub heading_deg: f64,
    /// Ground speed (m/s).
    pub speed: f64,
    /// Remaining hit points. The target is removed in the tick this reaches 0.
    pub hit_points: u32,
}

/// Homing interceptor state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    /// Target being pursued. May stop resolving at any time.
    pub target: EntityId,
    /// Speed (m/s).
    pub speed: f64,
    /// Remaining time-to-live (seconds). At or below zero the missile is removed.
    pub ttl_secs: f64,
    /// Launching battery, if any (manual fire without batteries has none).
    pub source_battery: Option<EntityId>,
    pub mode: LaunchMode,
}

/// Cosmetic blast marker left by a hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub age_secs: f64,
    pub duration_secs: f64,
    pub radius_m: f64,
}

/// Player-owned launcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Battery {
    /// Engagement range for automatic fire (meters).
    pub range_m: f64,
    /// Cooldown between automatic launches (seconds).
    pub reload_secs: f64,
    /// Simulation time of the last automatic launch, if it ever fired.
    pub last_fire_secs: Option<f64>,
    /// Upgrade level, starting at 1.
    pub level: u32,
    /// Whether this battery takes part in auto-engage.
    pub auto_engage: bool,
}
