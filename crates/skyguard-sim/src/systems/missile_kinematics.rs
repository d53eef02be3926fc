//! Missile kinematics system: pursuit steering, ttl countdown, target loss.

use std::collections::HashMap;

use hecs::{Entity, World};

use skyguard_core::components::{Missile, Target};
use skyguard_core::events::SimEvent;
use skyguard_core::types::LatLng;

use crate::guidance;
use crate::ids;
use crate::score::ScoreState;

/// Steer and advance every live missile by `dt` seconds.
///
/// A missile whose target no longer exists is marked for removal and left
/// where it is. A missile whose ttl runs out is marked for removal as a miss.
pub fn run(world: &mut World, dt: f64, score: &mut ScoreState, events: &mut Vec<SimEvent>) {
    let target_positions: HashMap<Entity, LatLng> = world
        .query::<(&Target, &LatLng)>()
        .iter()
        .map(|(entity, (_target, pos))| (entity, *pos))
        .collect();

    for (entity, (pos, missile)) in world.query_mut::<(&mut LatLng, &mut Missile)>() {
        if missile.ttl_secs <= 0.0 {
            continue;
        }

        let target_pos = ids::resolve(missile.target).and_then(|e| target_positions.get(&e));
        let Some(target_pos) = target_pos else {
            missile.ttl_secs = -1.0;
            score.missiles_expired += 1;
            tracing::debug!(missile = %ids::entity_id(entity), "missile lost its target");
            events.push(SimEvent::MissileExpired {
                missile: ids::entity_id(entity),
                target_lost: true,
            });
            continue;
        };

        *pos = guidance::pure_pursuit(*pos, *target_pos, missile.speed, dt);
        missile.ttl_secs -= dt;

        if missile.ttl_secs <= 0.0 {
            missile.ttl_secs = -1.0;
            score.missiles_expired += 1;
            tracing::debug!(missile = %ids::entity_id(entity), "missile timed out");
            events.push(SimEvent::MissileExpired {
                missile: ids::entity_id(entity),
                target_lost: false,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::enums::{LaunchMode, TargetKind};
    use skyguard_core::geo;

    fn spawn_target(world: &mut World, pos: LatLng) -> Entity {
        world.spawn((
            pos,
            Target {
                kind: TargetKind::Drone,
                heading_deg: 0.0,
                speed: 0.0,
                hit_points: 1,
            },
        ))
    }

    fn spawn_missile(world: &mut World, pos: LatLng, target: Entity, ttl_secs: f64) -> Entity {
        world.spawn((
            pos,
            Missile {
                target: ids::entity_id(target),
                speed: 900.0,
                ttl_secs,
                source_battery: None,
                mode: LaunchMode::Manual,
            },
        ))
    }

    #[test]
    fn test_missile_homes_and_burns_ttl() {
        let mut world = World::new();
        let mut score = ScoreState::default();
        let mut events = Vec::new();
        let origin = LatLng::new(50.45, 30.52);
        let target = spawn_target(&mut world, geo::displace(origin, 5_000.0, 60.0));
        let missile = spawn_missile(&mut world, origin, target, 35.0);

        run(&mut world, 0.05, &mut score, &mut events);

        let m = world.get::<&Missile>(missile).unwrap();
        assert!((m.ttl_secs - 34.95).abs() < 1e-9);
        let pos = *world.get::<&LatLng>(missile).unwrap();
        assert!((geo::distance(origin, pos) - 45.0).abs() < 0.5);
        assert!((geo::bearing(origin, pos) - 60.0).abs() < 1e-6);
        assert!(events.is_empty());
    }

    #[test]
    fn test_missile_self_terminates_on_target_loss() {
        let mut world = World::new();
        let mut score = ScoreState::default();
        let mut events = Vec::new();
        let origin = LatLng::new(50.45, 30.52);
        let target = spawn_target(&mut world, geo::displace(origin, 5_000.0, 0.0));
        let missile = spawn_missile(&mut world, origin, target, 35.0);
        world.despawn(target).unwrap();

        run(&mut world, 0.05, &mut score, &mut events);

        let m = world.get::<&Missile>(missile).unwrap();
        assert!(m.ttl_secs < 0.0);
        assert_eq!(*world.get::<&LatLng>(missile).unwrap(), origin);
        assert_eq!(score.missiles_expired, 1);
        assert_eq!(
            events,
            vec![SimEvent::MissileExpired {
                missile: ids::entity_id(missile),
                target_lost: true
            }]
        );
    }

    #[test]
    fn test_missile_expires_when_ttl_runs_out() {
        let mut world = World::new();
        let mut score = ScoreState::default();
        let mut events = Vec::new();
        let origin = LatLng::new(50.45, 30.52);
        let target = spawn_target(&mut world, geo::displace(origin, 50_000.0, 0.0));
        let missile = spawn_missile(&mut world, origin, target, 0.08);

        run(&mut world, 0.05, &mut score, &mut events);
        assert!(world.get::<&Missile>(missile).unwrap().ttl_secs > 0.0);
        run(&mut world, 0.05, &mut score, &mut events);
        assert!(world.get::<&Missile>(missile).unwrap().ttl_secs < 0.0);
        assert_eq!(score.missiles_expired, 1);

        // Already dead: later ticks leave it alone and report nothing new.
        run(&mut world, 0.05, &mut score, &mut events);
        assert_eq!(score.missiles_expired, 1);
        assert_eq!(events.len(), 1);
    }
}
