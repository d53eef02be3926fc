//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Hostile target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// Manned aircraft: tough (three hits), wanders gently.
    Plane,
    /// Loitering drone: fragile, wanders erratically.
    Drone,
    /// Cruise missile: fast, flies a straight line.
    Cruise,
}

impl TargetKind {
    pub const ALL: [TargetKind; 3] = [TargetKind::Plane, TargetKind::Drone, TargetKind::Cruise];
}

/// How an interceptor was launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchMode {
    /// Player clicked near a target.
    Manual,
    /// Battery auto-engage picked the target.
    Auto,
}
