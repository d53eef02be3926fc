//! Host configuration, loaded from an optional JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use skyguard_core::config::SimConfig;
use skyguard_core::constants::{DEFAULT_SPAWN_INTERVAL_SECS, MAX_FRAME_SECS};
use skyguard_core::{SimError, SimResult};

/// Shortest non-zero wave interval accepted (seconds).
pub const MIN_SPAWN_INTERVAL_SECS: f64 = 0.01;

/// Everything the host needs to run a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Stop after this much simulated time. `None` runs until shutdown.
    pub duration_secs: Option<f64>,
    /// Step fed to each tick when not running in real time (seconds).
    pub frame_secs: f64,
    /// Interval between random waves (seconds). Zero disables the timer.
    pub spawn_interval_secs: f64,
    /// Pace ticks by the wall clock instead of running flat out.
    pub realtime: bool,
    /// Start with the demo scene.
    pub demo: bool,
    /// Read JSON player commands from stdin, one per line.
    pub stdin_commands: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            duration_secs: Some(60.0),
            frame_secs: MAX_FRAME_SECS,
            spawn_interval_secs: DEFAULT_SPAWN_INTERVAL_SECS,
            realtime: false,
            demo: true,
            stdin_commands: false,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> SimResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> SimResult<()> {
        self.sim.validate()?;
        if !self.frame_secs.is_finite() || self.frame_secs <= 0.0 {
            return Err(SimError::Config(format!(
                "frame_secs must be positive, got {}",
                self.frame_secs
            )));
        }
        if !self.spawn_interval_secs.is_finite() || self.spawn_interval_secs < 0.0 {
            return Err(SimError::Config(format!(
                "spawn_interval_secs must be zero or positive, got {}",
                self.spawn_interval_secs
            )));
        }
        if self.spawn_interval_secs > 0.0 && self.spawn_interval_secs < MIN_SPAWN_INTERVAL_SECS {
            return Err(SimError::Config(format!(
                "spawn_interval_secs must be 0 or at least {MIN_SPAWN_INTERVAL_SECS}, got {}",
                self.spawn_interval_secs
            )));
        }
        if let Some(duration) = self.duration_secs {
            if !duration.is_finite() || duration <= 0.0 {
                return Err(SimError::Config(format!(
                    "duration_secs must be positive, got {duration}"
                )));
            }
        }
        Ok(())
    }
}
