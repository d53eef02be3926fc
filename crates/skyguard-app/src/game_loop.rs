//! Game loop thread: owns the simulation engine, applies commands between
//! ticks, and publishes a snapshot after each one.
//!
//! The engine is created inside the thread so nothing else can touch it.
//! Commands arrive via an `mpsc` channel.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use skyguard_core::state::ScoreView;
use skyguard_core::types::{clamp_frame_dt, SimTime};
use skyguard_sim::SimulationEngine;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::{CommandSender, GameLoopCommand, SharedSnapshot};

/// Final state of a finished session.
#[derive(Debug, Clone)]
pub struct GameLoopSummary {
    pub time: SimTime,
    pub score: ScoreView,
}

/// A running game loop thread.
pub struct GameLoopHandle {
    commands: CommandSender,
    thread: JoinHandle<GameLoopSummary>,
}

impl GameLoopHandle {
    /// Sender for commands to the loop.
    pub fn commands(&self) -> CommandSender {
        self.commands.clone()
    }

    /// Ask the loop to stop and wait for it.
    pub fn shutdown(self) -> Result<GameLoopSummary, AppError> {
        let _ = self.commands.send(GameLoopCommand::Shutdown);
        self.join()
    }

    /// Wait for the loop to finish on its own.
    pub fn join(self) -> Result<GameLoopSummary, AppError> {
        self.thread.join().map_err(|_| AppError::LoopPanicked)
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: AppConfig,
    latest_snapshot: SharedSnapshot,
) -> Result<GameLoopHandle, AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("skyguard-game-loop".into())
        .spawn(move || run_game_loop(&config, &cmd_rx, &latest_snapshot))
        .map_err(|source| AppError::Spawn {
            name: "game loop",
            source,
        })?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        thread,
    })
}

/// The game loop. Runs until the configured duration elapses, a Shutdown
/// command arrives, or the channel disconnects.
pub fn run_game_loop(
    config: &AppConfig,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) -> GameLoopSummary {
    let mut engine = SimulationEngine::new(config.sim.clone());
    if config.demo {
        engine.setup_demo();
    }
    let mut center = engine.center();
    let mut spawn_timer = 0.0;
    let frame = Duration::from_secs_f64(config.frame_secs);
    let mut last_frame = Instant::now();
    let mut next_frame = last_frame;

    tracing::info!(
        seed = config.sim.seed,
        realtime = config.realtime,
        duration_secs = ?config.duration_secs,
        "game loop started"
    );

    'frames: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Command(command)) => match engine.apply(command) {
                    Ok(outcome) => tracing::debug!(?outcome, "command applied"),
                    Err(e) => tracing::warn!(error = %e, "command rejected"),
                },
                Ok(GameLoopCommand::SetCenter(new_center)) => {
                    if new_center.is_valid() {
                        center = new_center;
                    } else {
                        tracing::warn!(?new_center, "ignoring invalid center");
                    }
                }
                Ok(GameLoopCommand::Shutdown) => break 'frames,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'frames,
            }
        }

        // 2. Work out this frame's step
        let now = Instant::now();
        let dt = if config.realtime {
            clamp_frame_dt((now - last_frame).as_secs_f64())
        } else {
            clamp_frame_dt(config.frame_secs)
        };
        last_frame = now;

        // 3. Wave timer (frozen while paused)
        if config.spawn_interval_secs > 0.0 && !engine.is_paused() {
            spawn_timer += dt;
            while spawn_timer >= config.spawn_interval_secs {
                spawn_timer -= config.spawn_interval_secs;
                engine.spawn_random_wave();
            }
        }

        // 4. Advance one tick (engine handles pause semantics internally)
        let snapshot = match engine.tick(dt, center) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!(error = %e, "tick failed");
                break;
            }
        };
        for event in &snapshot.events {
            tracing::trace!(?event, "sim event");
        }

        // 5. Publish the snapshot
        let elapsed = snapshot.time.elapsed_secs;
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if config.duration_secs.is_some_and(|limit| elapsed >= limit - 1e-9) {
            break;
        }

        // 6. Sleep until the next frame
        if engine.is_paused() && !config.realtime {
            // Nothing advances, so don't spin waiting for Resume
            std::thread::sleep(frame);
        } else if config.realtime {
            next_frame += frame;
            let now = Instant::now();
            if next_frame > now {
                std::thread::sleep(next_frame - now);
            } else if now - next_frame > frame * 2 {
                // Too far behind: resync instead of bursting to catch up
                next_frame = now;
            }
        }
    }

    let summary = GameLoopSummary {
        time: engine.time(),
        score: engine.score(),
    };
    tracing::info!(
        ticks = summary.time.tick,
        elapsed_secs = summary.time.elapsed_secs,
        score = summary.score.score,
        kills = summary.score.kills,
        "game loop stopped"
    );
    summary
}
