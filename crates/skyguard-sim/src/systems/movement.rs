//! Target motion system.
//!
//! Drones and planes wander: each tick they may jink by a random amount.
//! Cruise missiles hold their heading. Every target then advances along
//! its heading by speed * dt.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyguard_core::components::Target;
use skyguard_core::constants::*;
use skyguard_core::enums::TargetKind;
use skyguard_core::geo;
use skyguard_core::types::LatLng;

/// Move every target by one step of `dt` seconds.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, dt: f64) {
    for (_entity, (pos, target)) in world.query_mut::<(&mut LatLng, &mut Target)>() {
        if let Some((chance, max_turn)) = wander_params(target.kind) {
            if rng.gen_bool(chance) {
                let turn = rng.gen_range(-max_turn..=max_turn);
                target.heading_deg = (target.heading_deg + turn).rem_euclid(360.0);
            }
        }
        *pos = geo::displace(*pos, target.speed * dt, target.heading_deg);
    }
}

/// Per-tick turn probability and maximum turn (degrees) for a target kind.
fn wander_params(kind: TargetKind) -> Option<(f64, f64)> {
    match kind {
        TargetKind::Drone => Some((DRONE_TURN_CHANCE, DRONE_TURN_MAX_DEG)),
        TargetKind::Plane => Some((PLANE_TURN_CHANCE, PLANE_TURN_MAX_DEG)),
        TargetKind::Cruise => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn spawn(world: &mut World, kind: TargetKind, heading_deg: f64, speed: f64) -> hecs::Entity {
        world.spawn((
            LatLng::new(50.45, 30.52),
            Target {
                kind,
                heading_deg,
                speed,
                hit_points: 1,
            },
        ))
    }

    #[test]
    fn test_cruise_flies_straight() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let cruise = spawn(&mut world, TargetKind::Cruise, 90.0, 500.0);
        let start = *world.get::<&LatLng>(cruise).unwrap();

        for _ in 0..200 {
            run(&mut world, &mut rng, 0.05);
        }

        let heading = world.get::<&Target>(cruise).unwrap().heading_deg;
        assert_eq!(heading, 90.0);
        let end = *world.get::<&LatLng>(cruise).unwrap();
        // 200 ticks * 0.05 s * 500 m/s = 5 km due east
        assert!((end.lat - start.lat).abs() < 1e-9);
        assert!((geo::distance(start, end) - 5_000.0).abs() < 25.0);
    }

    #[test]
    fn test_drone_heading_wanders() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let drone = spawn(&mut world, TargetKind::Drone, 0.0, 40.0);

        // 2% per tick: after 1000 ticks a turn is all but certain.
        for _ in 0..1000 {
            run(&mut world, &mut rng, 0.05);
        }
        let heading = world.get::<&Target>(drone).unwrap().heading_deg;
        assert_ne!(heading, 0.0);
        assert!((0.0..360.0).contains(&heading));
    }

    #[test]
    fn test_stationary_target_stays_put() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let plane = spawn(&mut world, TargetKind::Plane, 45.0, 0.0);
        let start = *world.get::<&LatLng>(plane).unwrap();

        for _ in 0..100 {
            run(&mut world, &mut rng, 0.05);
        }
        assert_eq!(*world.get::<&LatLng>(plane).unwrap(), start);
    }

    #[test]
    fn test_zero_dt_does_not_move() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let cruise = spawn(&mut world, TargetKind::Cruise, 10.0, 600.0);
        let start = *world.get::<&LatLng>(cruise).unwrap();
        run(&mut world, &mut rng, 0.0);
        assert_eq!(*world.get::<&LatLng>(cruise).unwrap(), start);
    }
}
