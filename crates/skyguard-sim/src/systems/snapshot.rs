//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only: the world is never modified here.

use std::collections::HashMap;

use hecs::{Entity, World};

use skyguard_core::components::*;
use skyguard_core::events::SimEvent;
use skyguard_core::state::*;
use skyguard_core::types::{LatLng, SimTime};

use crate::battery;
use crate::guidance;
use crate::ids;
use crate::score::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
/// Every collection is ordered by entity id.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    auto_engage: bool,
    paused: bool,
    center: LatLng,
    score: &ScoreState,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        auto_engage,
        paused,
        center,
        score: score.view(),
        targets: build_targets(world),
        missiles: build_missiles(world),
        explosions: build_explosions(world),
        batteries: build_batteries(world, time.elapsed_secs),
        events,
    }
}

fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&EntityMeta, &LatLng, &Target)>()
        .iter()
        .map(|(entity, (meta, pos, target))| TargetView {
            id: ids::entity_id(entity),
            kind: target.kind,
            position: *pos,
            heading_deg: target.heading_deg,
            speed: target.speed,
            hit_points: target.hit_points,
            created_secs: meta.created_secs,
        })
        .collect();
    targets.sort_by_key(|t| t.id);
    targets
}

fn build_missiles(world: &World) -> Vec<MissileView> {
    let target_positions: HashMap<Entity, LatLng> = world
        .query::<(&LatLng, &Target)>()
        .iter()
        .map(|(entity, (pos, _))| (entity, *pos))
        .collect();

    let mut missiles: Vec<MissileView> = world
        .query::<(&LatLng, &Missile)>()
        .iter()
        .map(|(entity, (pos, missile))| {
            let time_to_intercept_secs = ids::resolve(missile.target)
                .and_then(|e| target_positions.get(&e))
                .map(|target_pos| guidance::time_to_reach(*pos, *target_pos, missile.speed));
            MissileView {
                id: ids::entity_id(entity),
                target: missile.target,
                position: *pos,
                speed: missile.speed,
                ttl_secs: missile.ttl_secs,
                mode: missile.mode,
                time_to_intercept_secs,
            }
        })
        .collect();
    missiles.sort_by_key(|m| m.id);
    missiles
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    let mut explosions: Vec<ExplosionView> = world
        .query::<(&LatLng, &Explosion)>()
        .iter()
        .map(|(entity, (pos, explosion))| ExplosionView {
            id: ids::entity_id(entity),
            position: *pos,
            age_secs: explosion.age_secs,
            duration_secs: explosion.duration_secs,
            radius_m: explosion.radius_m,
        })
        .collect();
    explosions.sort_by_key(|x| x.id);
    explosions
}

fn build_batteries(world: &World, now_secs: f64) -> Vec<BatteryView> {
    let mut batteries: Vec<BatteryView> = world
        .query::<(&LatLng, &Battery)>()
        .iter()
        .map(|(entity, (pos, b))| BatteryView {
            id: ids::entity_id(entity),
            position: *pos,
            range_m: b.range_m,
            reload_secs: b.reload_secs,
            level: b.level,
            auto_engage: b.auto_engage,
            cooldown_remaining_secs: battery::cooldown_remaining(b, now_secs),
        })
        .collect();
    batteries.sort_by_key(|b| b.id);
    batteries
}
