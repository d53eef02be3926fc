//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, applies player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! so every rule can be tested deterministically from a seed.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyguard_core::commands::*;
use skyguard_core::components::Battery;
use skyguard_core::config::SimConfig;
use skyguard_core::enums::TargetKind;
use skyguard_core::events::SimEvent;
use skyguard_core::state::{GameStateSnapshot, ScoreView};
use skyguard_core::types::{EntityId, LatLng, SimTime};
use skyguard_core::{SimError, SimResult};

use crate::battery;
use crate::ids;
use crate::score::ScoreState;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    center: LatLng,
    auto_engage: bool,
    paused: bool,
    rng: ChaCha8Rng,
    config: SimConfig,
    score: ScoreState,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            center: config.center,
            auto_engage: config.auto_engage,
            paused: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            score: ScoreState::new(config.starting_funds),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Advance the simulation by `dt` seconds around `center` and return the
    /// resulting snapshot. Events raised since the previous tick are drained
    /// into it. While paused the world and clock stay frozen.
    pub fn tick(&mut self, dt: f64, center: LatLng) -> SimResult<GameStateSnapshot> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimError::InvalidTimeStep(dt));
        }
        validate_position(center)?;

        self.center = center;
        if !self.paused {
            self.time.advance(dt);
            self.run_systems(dt);
        }

        let events = std::mem::take(&mut self.events);
        Ok(self.build_snapshot(events))
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let now = self.time.elapsed_secs;

        // 1. Targets move
        systems::movement::run(&mut self.world, &mut self.rng, dt);

        // 2. Missiles steer toward their targets
        systems::missile_kinematics::run(&mut self.world, dt, &mut self.score, &mut self.events);

        // 3. Hits resolve
        systems::intercept::run(&mut self.world, now, &mut self.score, &mut self.events);

        // 4. Spent, destroyed, faded, and escaped entities leave the world
        systems::cleanup::run(
            &mut self.world,
            self.center,
            dt,
            &mut self.despawn_buffer,
            &mut self.score,
            &mut self.events,
        );

        // 5. Batteries pick new targets
        if self.auto_engage {
            systems::fire_control::run(&mut self.world, now, &mut self.score, &mut self.events);
        }
    }

    /// Read-only view of the current state. Pending events stay queued for
    /// the next tick.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.build_snapshot(Vec::new())
    }

    fn build_snapshot(&self, events: Vec<SimEvent>) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.auto_engage,
            self.paused,
            self.center,
            &self.score,
            events,
        )
    }

    // --- Spawning ---

    /// Insert a target with explicit kinematics.
    pub fn spawn_target(
        &mut self,
        kind: TargetKind,
        position: LatLng,
        heading_deg: f64,
        speed: f64,
    ) -> SimResult<EntityId> {
        validate_position(position)?;
        if !heading_deg.is_finite() {
            return Err(SimError::InvalidHeading(heading_deg));
        }
        if !speed.is_finite() || speed < 0.0 {
            return Err(SimError::InvalidSpeed(speed));
        }
        let entity = world_setup::spawn_target(
            &mut self.world,
            kind,
            position,
            heading_deg,
            speed,
            self.time.elapsed_secs,
        );
        Ok(ids::entity_id(entity))
    }

    /// Insert a target of `kind` at a random point around the area center.
    pub fn spawn_random(&mut self, kind: TargetKind) -> EntityId {
        let entity = world_setup::spawn_random(
            &mut self.world,
            &mut self.rng,
            kind,
            self.center,
            self.time.elapsed_secs,
        );
        ids::entity_id(entity)
    }

    /// Spawn one random wave around the area center.
    pub fn spawn_random_wave(&mut self) -> Vec<EntityId> {
        systems::wave_spawner::spawn_wave(
            &mut self.world,
            &mut self.rng,
            self.center,
            self.time.elapsed_secs,
        )
        .into_iter()
        .map(ids::entity_id)
        .collect()
    }

    /// Populate the starter scene around the area center. Returns the
    /// spawned ids, battery first.
    pub fn setup_demo(&mut self) -> Vec<EntityId> {
        world_setup::setup_demo(&mut self.world, self.center, self.time.elapsed_secs)
            .into_iter()
            .map(ids::entity_id)
            .collect()
    }

    // --- Economy ---

    pub fn build_battery(&mut self, position: LatLng) -> SimResult<BuildOutcome> {
        validate_position(position)?;
        let cost = self.config.battery_cost;
        if !self.score.try_spend(cost) {
            return Ok(BuildOutcome::InsufficientFunds {
                required: cost,
                available: self.score.funds,
            });
        }

        let entity = world_setup::spawn_battery(&mut self.world, position, self.time.elapsed_secs);
        let battery = ids::entity_id(entity);
        tracing::info!(%battery, lat = position.lat, lng = position.lng, funds = self.score.funds, "battery built");
        self.events.push(SimEvent::BatteryBuilt { battery });
        Ok(BuildOutcome::Built {
            battery,
            funds_left: self.score.funds,
        })
    }

    pub fn upgrade_battery(&mut self, id: EntityId) -> UpgradeOutcome {
        let Some(entity) = self.battery_entity(id) else {
            return UpgradeOutcome::UnknownBattery { battery: id };
        };
        let cost = self.config.upgrade_cost;
        if !self.score.try_spend(cost) {
            return UpgradeOutcome::InsufficientFunds {
                required: cost,
                available: self.score.funds,
            };
        }

        let Ok(mut b) = self.world.get::<&mut Battery>(entity) else {
            return UpgradeOutcome::UnknownBattery { battery: id };
        };
        battery::upgrade(&mut b);
        tracing::info!(battery = %id, level = b.level, range_m = b.range_m, reload_secs = b.reload_secs, "battery upgraded");
        self.events.push(SimEvent::BatteryUpgraded {
            battery: id,
            level: b.level,
        });
        UpgradeOutcome::Upgraded {
            battery: id,
            level: b.level,
            range_m: b.range_m,
            reload_secs: b.reload_secs,
        }
    }

    /// Upgrade every battery for the price of a single upgrade.
    pub fn upgrade_all_batteries(&mut self) -> UpgradeOutcome {
        let count = self.world.query::<&Battery>().iter().count();
        if count == 0 {
            return UpgradeOutcome::NoBatteries;
        }
        let cost = self.config.upgrade_cost;
        if !self.score.try_spend(cost) {
            return UpgradeOutcome::InsufficientFunds {
                required: cost,
                available: self.score.funds,
            };
        }

        for (entity, b) in self.world.query_mut::<&mut Battery>() {
            battery::upgrade(b);
            self.events.push(SimEvent::BatteryUpgraded {
                battery: ids::entity_id(entity),
                level: b.level,
            });
        }
        tracing::info!(count, funds = self.score.funds, "all batteries upgraded");
        UpgradeOutcome::UpgradedAll { count }
    }

    // --- Fire control ---

    /// Fire at the target nearest to `point`.
    pub fn fire_manual(&mut self, point: LatLng) -> SimResult<FireOutcome> {
        validate_position(point)?;
        Ok(systems::fire_control::fire_manual(
            &mut self.world,
            point,
            self.center,
            self.time.elapsed_secs,
            &mut self.score,
            &mut self.events,
        ))
    }

    pub fn set_auto_engage(&mut self, enabled: bool) {
        self.auto_engage = enabled;
        tracing::info!(enabled, "auto-engage toggled");
    }

    /// Toggle auto-engage on one battery. Returns false for an unknown id.
    pub fn set_battery_auto_engage(&mut self, id: EntityId, enabled: bool) -> bool {
        let Some(entity) = self.battery_entity(id) else {
            return false;
        };
        match self.world.get::<&mut Battery>(entity) {
            Ok(mut b) => {
                b.auto_engage = enabled;
                true
            }
            Err(_) => false,
        }
    }

    // --- Session ---

    /// Freeze or unfreeze the world. Commands still apply while paused.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            self.paused = paused;
            tracing::info!(paused, "pause toggled");
        }
    }

    /// Remove every entity and restore time, score, and funds to their
    /// starting values. The RNG stream continues.
    pub fn reset(&mut self) {
        // Despawn one by one: clearing the world would recycle entity
        // generations and let stale ids resolve again.
        let entities: Vec<Entity> = self.world.iter().map(|e| e.entity()).collect();
        for entity in entities {
            let _ = self.world.despawn(entity);
        }
        self.time = SimTime::default();
        self.center = self.config.center;
        self.auto_engage = self.config.auto_engage;
        self.paused = false;
        self.score = ScoreState::new(self.config.starting_funds);
        self.events.clear();
        tracing::info!("simulation reset");
    }

    /// Apply a player command immediately.
    pub fn apply(&mut self, command: PlayerCommand) -> SimResult<CommandOutcome> {
        let outcome = match command {
            PlayerCommand::SpawnTarget {
                kind,
                position,
                heading_deg,
                speed,
            } => CommandOutcome::Spawned {
                targets: vec![self.spawn_target(kind, position, heading_deg, speed)?],
            },
            PlayerCommand::SpawnRandom { kind } => CommandOutcome::Spawned {
                targets: vec![self.spawn_random(kind)],
            },
            PlayerCommand::SpawnWave => CommandOutcome::Spawned {
                targets: self.spawn_random_wave(),
            },
            PlayerCommand::BuildBattery { position } => {
                CommandOutcome::Build(self.build_battery(position)?)
            }
            PlayerCommand::UpgradeBattery { battery } => {
                CommandOutcome::Upgrade(self.upgrade_battery(battery))
            }
            PlayerCommand::UpgradeAllBatteries => {
                CommandOutcome::Upgrade(self.upgrade_all_batteries())
            }
            PlayerCommand::FireManual { point } => CommandOutcome::Fire(self.fire_manual(point)?),
            PlayerCommand::SetAutoEngage { enabled } => {
                self.set_auto_engage(enabled);
                CommandOutcome::Applied
            }
            PlayerCommand::SetBatteryAutoEngage { battery, enabled } => {
                if self.set_battery_auto_engage(battery, enabled) {
                    CommandOutcome::Applied
                } else {
                    CommandOutcome::UnknownBattery { battery }
                }
            }
            PlayerCommand::Pause => {
                self.set_paused(true);
                CommandOutcome::Applied
            }
            PlayerCommand::Resume => {
                self.set_paused(false);
                CommandOutcome::Applied
            }
            PlayerCommand::Reset => {
                self.reset();
                CommandOutcome::Applied
            }
        };
        Ok(outcome)
    }

    /// Parse a JSON-encoded command and apply it.
    pub fn apply_json(&mut self, json: &str) -> SimResult<CommandOutcome> {
        let command: PlayerCommand = serde_json::from_str(json)?;
        self.apply(command)
    }

    // --- Accessors ---

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Area-of-interest center from the last tick.
    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn auto_engage(&self) -> bool {
        self.auto_engage
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> ScoreView {
        self.score.view()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn battery_entity(&self, id: EntityId) -> Option<Entity> {
        ids::resolve(id).filter(|e| self.world.get::<&Battery>(*e).is_ok())
    }
}

fn validate_position(position: LatLng) -> SimResult<()> {
    if position.is_valid() {
        Ok(())
    } else {
        Err(SimError::InvalidPosition {
            lat: position.lat,
            lng: position.lng,
        })
    }
}
