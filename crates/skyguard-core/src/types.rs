//! Fundamental geographic and simulation types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_ABS_LATITUDE, MAX_FRAME_SECS};

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether the planar approximation used by `geo::displace` holds here.
    /// Rejects non-finite values and points too close to the poles.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite() && self.lat.abs() < MAX_ABS_LATITUDE
    }
}

/// Opaque entity identifier, stable for the lifetime of the entity.
///
/// Never reused within a run: a removed entity's identifier resolves to
/// nothing rather than to a newer entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:x}", self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks run since the last reset.
    pub tick: u64,
    /// Elapsed simulation time in seconds (sum of every ticked dt).
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Clamp a wall-clock frame duration to a safe simulation step.
///
/// Large gaps (a stalled or backgrounded host) collapse to `MAX_FRAME_SECS`;
/// negative or non-finite durations become zero.
pub fn clamp_frame_dt(elapsed_secs: f64) -> f64 {
    if !elapsed_secs.is_finite() || elapsed_secs <= 0.0 {
        return 0.0;
    }
    elapsed_secs.min(MAX_FRAME_SECS)
}
