//! Game state snapshot — the complete visible state handed to the host after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{EntityId, LatLng, SimTime};

/// Complete read-only view of the world.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub auto_engage: bool,
    pub paused: bool,
    /// Area-of-interest center used by the last tick.
    pub center: LatLng,
    pub score: ScoreView,
    pub targets: Vec<TargetView>,
    pub missiles: Vec<MissileView>,
    pub explosions: Vec<ExplosionView>,
    pub batteries: Vec<BatteryView>,
    /// Events produced since the previous tick (empty for on-demand snapshots).
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub id: EntityId,
    pub kind: TargetKind,
    pub position: LatLng,
    pub heading_deg: f64,
    pub speed: f64,
    pub hit_points: u32,
    pub created_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub id: EntityId,
    pub target: EntityId,
    pub position: LatLng,
    pub speed: f64,
    pub ttl_secs: f64,
    pub mode: LaunchMode,
    /// Estimated seconds to reach the target at its current position, if it still exists.
    pub time_to_intercept_secs: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: EntityId,
    pub position: LatLng,
    pub age_secs: f64,
    pub duration_secs: f64,
    pub radius_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryView {
    pub id: EntityId,
    pub position: LatLng,
    pub range_m: f64,
    pub reload_secs: f64,
    pub level: u32,
    pub auto_engage: bool,
    /// Seconds until the battery may fire again (0 when ready).
    pub cooldown_remaining_secs: f64,
}

/// Running score and economy for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub funds: u32,
    pub hits: u32,
    pub kills: u32,
    pub missiles_launched: u32,
    pub missiles_expired: u32,
    pub targets_escaped: u32,
}
