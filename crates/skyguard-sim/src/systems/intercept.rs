//! Intercept system: checks missile-target proximity and resolves hits.
//!
//! Every hit inside the threshold counts: there is no kill roll. A hit costs
//! the target one hit point and consumes the missile.

use hecs::{Entity, World};

use skyguard_core::components::{Missile, Target};
use skyguard_core::constants::HIT_THRESHOLD_M;
use skyguard_core::events::SimEvent;
use skyguard_core::geo;
use skyguard_core::types::{EntityId, LatLng};

use crate::ids;
use crate::score::ScoreState;
use crate::world_setup;

/// Run the intercept pass over all live missiles.
pub fn run(world: &mut World, now_secs: f64, score: &mut ScoreState, events: &mut Vec<SimEvent>) {
    let missiles: Vec<(Entity, LatLng, EntityId)> = world
        .query::<(&Missile, &LatLng)>()
        .iter()
        .filter(|(_, (missile, _))| missile.ttl_secs > 0.0)
        .map(|(entity, (missile, pos))| (entity, *pos, missile.target))
        .collect();

    for (missile_entity, missile_pos, target_id) in missiles {
        let Some(target_entity) = ids::resolve(target_id) else {
            continue;
        };
        // A target hit earlier in this pass may already be gone.
        let Ok(target_pos) = world.get::<&LatLng>(target_entity).map(|p| *p) else {
            continue;
        };
        if geo::distance(missile_pos, target_pos) >= HIT_THRESHOLD_M {
            continue;
        }

        let (kind, hit_points_left) = {
            let Ok(mut target) = world.get::<&mut Target>(target_entity) else {
                continue;
            };
            target.hit_points = target.hit_points.saturating_sub(1);
            (target.kind, target.hit_points)
        };
        let destroyed = hit_points_left == 0;

        if let Ok(mut missile) = world.get::<&mut Missile>(missile_entity) {
            missile.ttl_secs = -1.0;
        }
        world_setup::spawn_explosion(world, target_pos, now_secs);
        let (score_awarded, funds_awarded) = score.award_hit(kind);

        if destroyed {
            let _ = world.despawn(target_entity);
            score.kills += 1;
        }

        tracing::info!(
            target = %target_id,
            ?kind,
            hit_points_left,
            destroyed,
            score = score.score,
            funds = score.funds,
            "hit"
        );
        events.push(SimEvent::TargetHit {
            target: target_id,
            kind,
            hit_points_left,
            destroyed,
            score_awarded,
            funds_awarded,
        });
    }
}
