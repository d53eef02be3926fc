//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{SimError, SimResult};
use crate::types::LatLng;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Funds available at start and after a reset.
    pub starting_funds: u32,
    pub battery_cost: u32,
    pub upgrade_cost: u32,
    /// Initial area-of-interest center, used until the first tick supplies one.
    pub center: LatLng,
    /// Whether auto-engage starts enabled.
    pub auto_engage: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_funds: STARTING_FUNDS,
            battery_cost: BATTERY_COST,
            upgrade_cost: UPGRADE_COST,
            center: LatLng::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG),
            auto_engage: false,
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        if !self.center.is_valid() {
            return Err(SimError::Config(format!(
                "center ({}, {}) is outside the supported area",
                self.center.lat, self.center.lng
            )));
        }
        Ok(())
    }
}
