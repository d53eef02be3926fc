//! Fire control: manual shots at the target nearest a point, and automatic
//! battery engagement by target priority.

use std::cmp::{Ordering, Reverse};

use hecs::{Entity, World};

use skyguard_core::commands::FireOutcome;
use skyguard_core::components::*;
use skyguard_core::constants::*;
use skyguard_core::enums::{LaunchMode, TargetKind};
use skyguard_core::events::SimEvent;
use skyguard_core::geo;
use skyguard_core::types::LatLng;

use crate::battery;
use crate::ids;
use crate::score::ScoreState;
use crate::world_setup;

/// Everything needed to put one interceptor in the air.
#[derive(Debug, Clone)]
pub struct Launch {
    pub origin: LatLng,
    pub target: Entity,
    pub target_kind: TargetKind,
    pub speed: f64,
    pub ttl_secs: f64,
    pub battery: Option<Entity>,
    pub mode: LaunchMode,
}

/// Engagement priority: higher is engaged first.
pub fn priority_for(kind: TargetKind) -> u8 {
    match kind {
        TargetKind::Cruise => 3,
        TargetKind::Plane => 2,
        TargetKind::Drone => 1,
    }
}

/// Spawn the interceptor described by `launch` and record it.
pub fn launch(
    world: &mut World,
    launch: Launch,
    now_secs: f64,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
) -> Entity {
    let target_id = ids::entity_id(launch.target);
    let battery_id = launch.battery.map(ids::entity_id);
    let missile = world_setup::spawn_missile(
        world,
        launch.origin,
        Missile {
            target: target_id,
            speed: launch.speed,
            ttl_secs: launch.ttl_secs,
            source_battery: battery_id,
            mode: launch.mode,
        },
        now_secs,
    );
    let missile_id = ids::entity_id(missile);
    score.missiles_launched += 1;

    tracing::info!(
        missile = %missile_id,
        target = %target_id,
        kind = ?launch.target_kind,
        mode = ?launch.mode,
        speed = launch.speed,
        "missile launched"
    );
    events.push(SimEvent::MissileLaunched {
        missile: missile_id,
        target: target_id,
        target_kind: launch.target_kind,
        battery: battery_id,
        mode: launch.mode,
    });
    missile
}

/// Fire at the target nearest to `point`.
///
/// Launches from the oldest battery, or from `center` when there are none.
pub fn fire_manual(
    world: &mut World,
    point: LatLng,
    center: LatLng,
    now_secs: f64,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
) -> FireOutcome {
    let nearest = live_targets(world)
        .into_iter()
        .map(|t| (geo::distance(point, t.position), t))
        .min_by(|a, b| a.0.total_cmp(&b.0));

    let Some((distance_m, target)) = nearest else {
        return FireOutcome::NoTargets;
    };
    if distance_m >= MANUAL_ACQUISITION_RADIUS_M {
        tracing::debug!(nearest_m = distance_m, "manual fire: nothing in reach");
        return FireOutcome::OutOfRange {
            nearest_m: distance_m,
        };
    }

    let source = oldest_battery(world);
    let missile = launch(
        world,
        Launch {
            origin: source.map(|(_, pos)| pos).unwrap_or(center),
            target: target.entity,
            target_kind: target.kind,
            speed: MANUAL_MISSILE_SPEED,
            ttl_secs: MANUAL_MISSILE_TTL_SECS,
            battery: source.map(|(entity, _)| entity),
            mode: LaunchMode::Manual,
        },
        now_secs,
        score,
        events,
    );

    FireOutcome::Launched {
        missile: ids::entity_id(missile),
        target: ids::entity_id(target.entity),
        distance_m,
    }
}

/// Automatic engagement: every ready battery with auto-engage on fires one
/// missile at the highest-priority target within its range.
pub fn run(world: &mut World, now_secs: f64, score: &mut ScoreState, events: &mut Vec<SimEvent>) {
    let targets = live_targets(world);
    if targets.is_empty() {
        return;
    }

    let mut ready: Vec<(f64, Entity, LatLng, f64, u32)> = world
        .query::<(&EntityMeta, &LatLng, &Battery)>()
        .iter()
        .filter(|(_, (_, _, b))| b.auto_engage && battery::can_fire(b, now_secs))
        .map(|(entity, (meta, pos, b))| (meta.created_secs, entity, *pos, b.range_m, b.level))
        .collect();
    ready.sort_by(|a, b| creation_order((a.0, a.1), (b.0, b.1)));

    for (_, battery_entity, battery_pos, range_m, level) in ready {
        let mut candidates: Vec<&TargetInfo> = targets
            .iter()
            .filter(|t| geo::distance(battery_pos, t.position) <= range_m)
            .collect();
        candidates.sort_by_key(|t| Reverse(priority_for(t.kind)));
        let Some(target) = candidates.first() else {
            continue;
        };

        launch(
            world,
            Launch {
                origin: battery_pos,
                target: target.entity,
                target_kind: target.kind,
                speed: battery::auto_missile_speed(level),
                ttl_secs: AUTO_MISSILE_TTL_SECS,
                battery: Some(battery_entity),
                mode: LaunchMode::Auto,
            },
            now_secs,
            score,
            events,
        );
        if let Ok(mut b) = world.get::<&mut Battery>(battery_entity) {
            b.last_fire_secs = Some(now_secs);
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TargetInfo {
    entity: Entity,
    position: LatLng,
    kind: TargetKind,
}

/// Targets with hit points left, oldest first.
fn live_targets(world: &World) -> Vec<TargetInfo> {
    let mut targets: Vec<(f64, TargetInfo)> = world
        .query::<(&EntityMeta, &LatLng, &Target)>()
        .iter()
        .filter(|(_, (_, _, t))| t.hit_points > 0)
        .map(|(entity, (meta, pos, t))| {
            (
                meta.created_secs,
                TargetInfo {
                    entity,
                    position: *pos,
                    kind: t.kind,
                },
            )
        })
        .collect();
    targets.sort_by(|a, b| creation_order((a.0, a.1.entity), (b.0, b.1.entity)));
    targets.into_iter().map(|(_, t)| t).collect()
}

fn oldest_battery(world: &World) -> Option<(Entity, LatLng)> {
    world
        .query::<(&EntityMeta, &LatLng, &Battery)>()
        .iter()
        .map(|(entity, (meta, pos, _))| (meta.created_secs, entity, *pos))
        .min_by(|a, b| creation_order((a.0, a.1), (b.0, b.1)))
        .map(|(_, entity, pos)| (entity, pos))
}

fn creation_order(a: (f64, Entity), b: (f64, Entity)) -> Ordering {
    a.0.total_cmp(&b.0)
        .then_with(|| a.1.to_bits().cmp(&b.1.to_bits()))
}
