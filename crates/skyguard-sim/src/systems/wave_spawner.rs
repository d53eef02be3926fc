//! Random wave composition.
//!
//! The wave timer lives in the host; this only decides what a wave holds
//! and puts it in the world.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyguard_core::constants::*;
use skyguard_core::enums::TargetKind;
use skyguard_core::types::LatLng;

use crate::world_setup;

/// Kind of the lead target for a uniform roll in [0, 1).
pub fn wave_kind(roll: f64) -> TargetKind {
    if roll < WAVE_DRONE_SHARE {
        TargetKind::Drone
    } else if roll < WAVE_PLANE_SHARE {
        TargetKind::Plane
    } else {
        TargetKind::Cruise
    }
}

/// Spawn one wave around `center`: a lead target, sometimes followed by a
/// drone swarm. Returns every entity spawned, lead first.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    center: LatLng,
    now_secs: f64,
) -> Vec<Entity> {
    let lead = wave_kind(rng.gen::<f64>());
    let mut spawned = vec![world_setup::spawn_random(world, rng, lead, center, now_secs)];

    if rng.gen_bool(WAVE_SWARM_CHANCE) {
        let swarm = rng.gen_range(WAVE_SWARM_MIN..=WAVE_SWARM_MAX);
        for _ in 0..swarm {
            spawned.push(world_setup::spawn_random(
                world,
                rng,
                TargetKind::Drone,
                center,
                now_secs,
            ));
        }
    }

    tracing::debug!(?lead, count = spawned.len(), "wave spawned");
    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use skyguard_core::components::Target;

    const CENTER: LatLng = LatLng {
        lat: 50.45,
        lng: 30.52,
    };

    #[test]
    fn test_wave_kind_thresholds() {
        assert_eq!(wave_kind(0.0), TargetKind::Drone);
        assert_eq!(wave_kind(0.39), TargetKind::Drone);
        assert_eq!(wave_kind(0.4), TargetKind::Plane);
        assert_eq!(wave_kind(0.84), TargetKind::Plane);
        assert_eq!(wave_kind(0.85), TargetKind::Cruise);
        assert_eq!(wave_kind(0.999), TargetKind::Cruise);
    }

    #[test]
    fn test_wave_sizes_and_swarms() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut swarms = 0;
        for _ in 0..500 {
            let wave = spawn_wave(&mut world, &mut rng, CENTER, 0.0);
            assert!(wave.len() == 1 || (3..=5).contains(&wave.len()));
            if wave.len() > 1 {
                swarms += 1;
                for extra in &wave[1..] {
                    assert_eq!(world.get::<&Target>(*extra).unwrap().kind, TargetKind::Drone);
                }
            }
        }
        // 12% of 500 is 60.
        assert!((25..=100).contains(&swarms), "swarms {swarms}");
    }

    #[test]
    fn test_wave_deterministic_for_seed() {
        let kinds = |seed| {
            let mut world = World::new();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let spawned: Vec<Entity> = (0..20)
                .flat_map(|_| spawn_wave(&mut world, &mut rng, CENTER, 0.0))
                .collect();
            spawned
                .into_iter()
                .map(|e| world.get::<&Target>(e).unwrap().kind)
                .collect::<Vec<_>>()
        };
        assert_eq!(kinds(9), kinds(9));
    }
}
