//! Cleanup system: removes spent missiles, destroyed targets, faded explosions,
//! and targets that left the area of interest.

use hecs::{Entity, World};

use skyguard_core::components::{Explosion, Missile, Target};
use skyguard_core::constants::AREA_OF_INTEREST_RADIUS_M;
use skyguard_core::events::SimEvent;
use skyguard_core::geo;
use skyguard_core::types::LatLng;

use crate::ids;
use crate::score::ScoreState;

/// Purge terminal entities and age explosions by `dt`.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    center: LatLng,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();

    // Missiles that hit, lost their target, or ran out of fuel.
    for (entity, missile) in world.query_mut::<&Missile>() {
        if missile.ttl_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    // Targets with no hit points left.
    for (entity, target) in world.query_mut::<&Target>() {
        if target.hit_points == 0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, explosion) in world.query_mut::<&mut Explosion>() {
        explosion.age_secs += dt;
        if explosion.age_secs >= explosion.duration_secs {
            despawn_buffer.push(entity);
        }
    }

    // Targets beyond the area of interest escape.
    for (entity, (pos, target)) in world.query_mut::<(&LatLng, &Target)>() {
        if target.hit_points > 0 && geo::distance(center, *pos) > AREA_OF_INTEREST_RADIUS_M {
            despawn_buffer.push(entity);
            score.targets_escaped += 1;
            let id = ids::entity_id(entity);
            tracing::debug!(target = %id, kind = ?target.kind, "target left the area");
            events.push(SimEvent::TargetEscaped {
                target: id,
                kind: target.kind,
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::enums::{LaunchMode, TargetKind};
    use skyguard_core::types::EntityId;

    const CENTER: LatLng = LatLng {
        lat: 50.45,
        lng: 30.52,
    };

    fn target_at(world: &mut World, pos: LatLng, hit_points: u32) -> Entity {
        world.spawn((
            pos,
            Target {
                kind: TargetKind::Plane,
                heading_deg: 0.0,
                speed: 150.0,
                hit_points,
            },
        ))
    }

    fn missile_with_ttl(world: &mut World, ttl_secs: f64) -> Entity {
        world.spawn((
            CENTER,
            Missile {
                target: EntityId(0),
                speed: 900.0,
                ttl_secs,
                source_battery: None,
                mode: LaunchMode::Manual,
            },
        ))
    }

    #[test]
    fn test_spent_missiles_removed() {
        let mut world = World::new();
        let mut buffer = Vec::new();
        let mut score = ScoreState::default();
        let mut events = Vec::new();
        let spent = missile_with_ttl(&mut world, -1.0);
        let live = missile_with_ttl(&mut world, 3.0);

        run(&mut world, CENTER, 0.05, &mut buffer, &mut score, &mut events);

        assert!(!world.contains(spent));
        assert!(world.contains(live));
    }

    #[test]
    fn test_dead_targets_removed_without_escape() {
        let mut world = World::new();
        let mut buffer = Vec::new();
        let mut score = ScoreState::default();
        let mut events = Vec::new();
        let dead = target_at(&mut world, CENTER, 0);

        run(&mut world, CENTER, 0.05, &mut buffer, &mut score, &mut events);

        assert!(!world.contains(dead));
        assert_eq!(score.targets_escaped, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_boundary_prune() {
        let mut world = World::new();
        let mut buffer = Vec::new();
        let mut score = ScoreState::default();
        let mut events = Vec::new();
        let far = target_at(&mut world, geo::displace(CENTER, 150_000.0, 45.0), 3);
        let near = target_at(&mut world, geo::displace(CENTER, 50_000.0, 45.0), 3);

        run(&mut world, CENTER, 0.05, &mut buffer, &mut score, &mut events);

        assert!(!world.contains(far));
        assert!(world.contains(near));
        assert_eq!(score.targets_escaped, 1);
        assert_eq!(
            events,
            vec![SimEvent::TargetEscaped {
                target: ids::entity_id(far),
                kind: TargetKind::Plane
            }]
        );
    }

    #[test]
    fn test_explosions_age_and_fade() {
        let mut world = World::new();
        let mut buffer = Vec::new();
        let mut score = ScoreState::default();
        let mut events = Vec::new();
        let explosion = world.spawn((
            CENTER,
            Explosion {
                age_secs: 0.0,
                duration_secs: 2.0,
                radius_m: 300.0,
            },
        ));

        run(&mut world, CENTER, 1.5, &mut buffer, &mut score, &mut events);
        assert!((world.get::<&Explosion>(explosion).unwrap().age_secs - 1.5).abs() < 1e-12);

        run(&mut world, CENTER, 0.5, &mut buffer, &mut score, &mut events);
        assert!(!world.contains(explosion));
    }
}
