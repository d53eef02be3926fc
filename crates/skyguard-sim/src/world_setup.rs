//! Entity spawn factories for populating the simulation world.
//!
//! Every entity gets an `EntityMeta` and a `LatLng` position alongside its
//! kind-specific component.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyguard_core::components::*;
use skyguard_core::constants::*;
use skyguard_core::enums::*;
use skyguard_core::geo;
use skyguard_core::types::LatLng;

use crate::battery;

/// Hit points a freshly spawned target of this kind starts with.
pub fn hit_points_for(kind: TargetKind) -> u32 {
    match kind {
        TargetKind::Plane => PLANE_HIT_POINTS,
        TargetKind::Drone => DRONE_HIT_POINTS,
        TargetKind::Cruise => CRUISE_HIT_POINTS,
    }
}

pub fn spawn_target(
    world: &mut World,
    kind: TargetKind,
    position: LatLng,
    heading_deg: f64,
    speed: f64,
    now_secs: f64,
) -> Entity {
    world.spawn((
        EntityMeta {
            created_secs: now_secs,
        },
        position,
        Target {
            kind,
            heading_deg: heading_deg.rem_euclid(360.0),
            speed,
            hit_points: hit_points_for(kind),
        },
    ))
}

/// Place a level-1 battery. Funds are the caller's concern.
pub fn spawn_battery(world: &mut World, position: LatLng, now_secs: f64) -> Entity {
    world.spawn((
        EntityMeta {
            created_secs: now_secs,
        },
        position,
        battery::new_battery(),
    ))
}

pub fn spawn_missile(world: &mut World, position: LatLng, missile: Missile, now_secs: f64) -> Entity {
    world.spawn((
        EntityMeta {
            created_secs: now_secs,
        },
        position,
        missile,
    ))
}

pub fn spawn_explosion(world: &mut World, position: LatLng, now_secs: f64) -> Entity {
    world.spawn((
        EntityMeta {
            created_secs: now_secs,
        },
        position,
        Explosion {
            age_secs: 0.0,
            duration_secs: EXPLOSION_DURATION_SECS,
            radius_m: EXPLOSION_RADIUS_M,
        },
    ))
}

/// Spawn radius around the area center for random targets of this kind (meters).
pub fn spawn_radius(kind: TargetKind) -> f64 {
    match kind {
        TargetKind::Plane => PLANE_SPAWN_RADIUS_M,
        TargetKind::Drone => DRONE_SPAWN_RADIUS_M,
        TargetKind::Cruise => CRUISE_SPAWN_RADIUS_M,
    }
}

/// Speed bounds for random targets of this kind (m/s).
pub fn speed_range(kind: TargetKind) -> (f64, f64) {
    match kind {
        TargetKind::Plane => PLANE_SPEED_RANGE,
        TargetKind::Drone => DRONE_SPEED_RANGE,
        TargetKind::Cruise => CRUISE_SPEED_RANGE,
    }
}

/// A point at a uniform distance in [0, radius) and uniform bearing from `center`.
pub fn random_point_around(rng: &mut ChaCha8Rng, center: LatLng, radius_m: f64) -> LatLng {
    let range = rng.gen_range(0.0..radius_m);
    let bearing = rng.gen_range(0.0..360.0);
    geo::displace(center, range, bearing)
}

/// Spawn a target of `kind` at a random spot near `center` with a random
/// heading and a kind-appropriate speed.
pub fn spawn_random(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: TargetKind,
    center: LatLng,
    now_secs: f64,
) -> Entity {
    let position = random_point_around(rng, center, spawn_radius(kind));
    let heading = rng.gen_range(0.0..360.0);
    let (min_speed, max_speed) = speed_range(kind);
    let speed = rng.gen_range(min_speed..=max_speed);
    spawn_target(world, kind, position, heading, speed, now_secs)
}

/// Starter scene: one battery at `center`, one inbound plane, one crossing drone.
/// The battery is free.
pub fn setup_demo(world: &mut World, center: LatLng, now_secs: f64) -> Vec<Entity> {
    vec![
        spawn_battery(world, center, now_secs),
        spawn_target(
            world,
            TargetKind::Plane,
            LatLng::new(50.6, 30.4),
            180.0,
            160.0,
            now_secs,
        ),
        spawn_target(
            world,
            TargetKind::Drone,
            LatLng::new(50.52, 30.7),
            90.0,
            40.0,
            now_secs,
        ),
    ]
}
