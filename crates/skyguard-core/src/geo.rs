//! Geographic math: great-circle distance and small-area planar displacement.
//!
//! `distance` is a proper haversine on a spherical Earth. `displace` and
//! `bearing` work in a local equirectangular frame (x = East, y = North, in
//! meters) anchored at the moving point. The frame is consistent between the
//! two, so a point displaced along `bearing(a, b)` by the planar range
//! lands on `b`. Errors grow with distance and with |latitude|; the frame is
//! unusable near the poles.

use glam::DVec2;

use crate::constants::{EARTH_RADIUS_M, METERS_PER_DEGREE};
use crate::types::LatLng;

/// Haversine distance between two points in meters.
pub fn distance(a: LatLng, b: LatLng) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).max(0.0).sqrt())
}

/// Move `point` by `meters` along `bearing_deg` (0 = North, clockwise).
pub fn displace(point: LatLng, meters: f64, bearing_deg: f64) -> LatLng {
    let theta = bearing_deg.to_radians();
    let offset = DVec2::new(theta.sin(), theta.cos()) * meters;
    let lng_scale = METERS_PER_DEGREE * point.lat.to_radians().cos();

    LatLng::new(
        point.lat + offset.y / METERS_PER_DEGREE,
        point.lng + offset.x / lng_scale,
    )
}

/// Offset of `to` relative to `from` in the local planar frame of `from`.
pub fn local_offset(from: LatLng, to: LatLng) -> DVec2 {
    let lng_scale = METERS_PER_DEGREE * from.lat.to_radians().cos();
    DVec2::new(
        (to.lng - from.lng) * lng_scale,
        (to.lat - from.lat) * METERS_PER_DEGREE,
    )
}

/// Bearing from `from` to `to` in degrees, in [0, 360).
pub fn bearing(from: LatLng, to: LatLng) -> f64 {
    let offset = local_offset(from, to);
    offset.x.atan2(offset.y).to_degrees().rem_euclid(360.0)
}
