//! Guidance law for homing interceptors.
//!
//! Pure pursuit: every tick the missile points straight at the target's
//! current position. There is no lead and no heading memory, so a missile
//! against a stationary target flies a straight line.

use skyguard_core::geo;
use skyguard_core::types::LatLng;

/// Advance a missile at `from` toward `to` for `dt` seconds at `speed`.
///
/// The step is capped at the remaining distance so the missile never
/// overshoots the target's position within one tick.
///
/// `geo::bearing` and `geo::displace` share one local frame (Δlng scaled by
/// cos(lat)); steering with an unscaled bearing would bend the path.
pub fn pure_pursuit(from: LatLng, to: LatLng, speed: f64, dt: f64) -> LatLng {
    let remaining = geo::distance(from, to);
    let step = (speed * dt).min(remaining);
    if step <= 0.0 {
        return from;
    }
    geo::displace(from, step, geo::bearing(from, to))
}

/// Rough time for a missile at `speed` to cover the distance to a stationary point.
pub fn time_to_reach(from: LatLng, to: LatLng, speed: f64) -> f64 {
    if speed <= 0.0 {
        return f64::INFINITY;
    }
    geo::distance(from, to) / speed
}
