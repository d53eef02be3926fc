//! Events emitted by the simulation for UI feedback and the host log.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Interceptor left the rail.
    MissileLaunched {
        missile: EntityId,
        target: EntityId,
        target_kind: TargetKind,
        battery: Option<EntityId>,
        mode: LaunchMode,
    },
    /// Interceptor reached its target.
    TargetHit {
        target: EntityId,
        kind: TargetKind,
        hit_points_left: u32,
        destroyed: bool,
        score_awarded: u32,
        funds_awarded: u32,
    },
    /// Interceptor ran out of time or lost its target.
    MissileExpired { missile: EntityId, target_lost: bool },
    /// Target left the area of interest.
    TargetEscaped { target: EntityId, kind: TargetKind },
    BatteryBuilt { battery: EntityId },
    BatteryUpgraded { battery: EntityId, level: u32 },
}
