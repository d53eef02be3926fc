//! Simulation constants and tuning parameters.

// --- Geography ---

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per degree of latitude in the planar approximation.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Latitude limit beyond which positions are rejected (degrees).
pub const MAX_ABS_LATITUDE: f64 = 89.0;

/// Default area-of-interest center (Kyiv).
pub const DEFAULT_CENTER_LAT: f64 = 50.45;
pub const DEFAULT_CENTER_LNG: f64 = 30.52;

// --- Tick ---

/// Largest simulation step a driver may feed into one tick (seconds).
pub const MAX_FRAME_SECS: f64 = 0.05;

// --- World bounds ---

/// Targets farther than this from the area-of-interest center are pruned (meters).
pub const AREA_OF_INTEREST_RADIUS_M: f64 = 120_000.0;

// --- Targets ---

pub const PLANE_HIT_POINTS: u32 = 3;
pub const DRONE_HIT_POINTS: u32 = 1;
pub const CRUISE_HIT_POINTS: u32 = 1;

/// Per-tick probability that a drone changes heading.
pub const DRONE_TURN_CHANCE: f64 = 0.02;
/// Maximum drone heading change per turn (degrees, either side).
pub const DRONE_TURN_MAX_DEG: f64 = 60.0;

/// Per-tick probability that a plane changes heading.
pub const PLANE_TURN_CHANCE: f64 = 0.004;
/// Maximum plane heading change per turn (degrees, either side).
pub const PLANE_TURN_MAX_DEG: f64 = 20.0;

// --- Intercept ---

/// Missile-to-target range below which a hit is scored (meters).
pub const HIT_THRESHOLD_M: f64 = 250.0;

/// Radius of the explosion spawned on a hit (meters).
pub const EXPLOSION_RADIUS_M: f64 = 300.0;

/// Lifetime of an explosion (seconds).
pub const EXPLOSION_DURATION_SECS: f64 = 2.0;

// --- Rewards (score, funds) ---

pub const DRONE_REWARD: (u32, u32) = (5, 3);
pub const PLANE_REWARD: (u32, u32) = (20, 12);
pub const CRUISE_REWARD: (u32, u32) = (40, 25);

// --- Fire control ---

/// Manual fire locks the nearest target within this radius of the aim point (meters).
pub const MANUAL_ACQUISITION_RADIUS_M: f64 = 80_000.0;

/// Manually launched interceptor speed (m/s).
pub const MANUAL_MISSILE_SPEED: f64 = 900.0;

/// Manually launched interceptor lifetime (seconds).
pub const MANUAL_MISSILE_TTL_SECS: f64 = 35.0;

/// Automatic interceptor speed at level 0; each battery level adds `AUTO_MISSILE_SPEED_PER_LEVEL`.
pub const AUTO_MISSILE_BASE_SPEED: f64 = 800.0;
pub const AUTO_MISSILE_SPEED_PER_LEVEL: f64 = 80.0;

/// Automatically launched interceptor lifetime (seconds).
pub const AUTO_MISSILE_TTL_SECS: f64 = 30.0;

// --- Batteries ---

/// Engagement range of a freshly built battery (meters).
pub const BATTERY_BASE_RANGE_M: f64 = 20_000.0;

/// Reload time of a freshly built battery (seconds).
pub const BATTERY_BASE_RELOAD_SECS: f64 = 4.0;

/// Reload never drops below this, however many upgrades (seconds).
pub const BATTERY_MIN_RELOAD_SECS: f64 = 1.2;

pub const UPGRADE_RANGE_FACTOR: f64 = 1.25;
pub const UPGRADE_RELOAD_FACTOR: f64 = 0.85;

// --- Economy ---

pub const STARTING_FUNDS: u32 = 300;
pub const BATTERY_COST: u32 = 100;
pub const UPGRADE_COST: u32 = 200;

// --- Random spawning ---

/// Spawn radius around the area center per kind (meters).
pub const PLANE_SPAWN_RADIUS_M: f64 = 35_000.0;
pub const DRONE_SPAWN_RADIUS_M: f64 = 20_000.0;
pub const CRUISE_SPAWN_RADIUS_M: f64 = 45_000.0;

/// Speed ranges per kind (m/s).
pub const PLANE_SPEED_RANGE: (f64, f64) = (140.0, 220.0);
pub const DRONE_SPEED_RANGE: (f64, f64) = (20.0, 80.0);
pub const CRUISE_SPEED_RANGE: (f64, f64) = (300.0, 700.0);

/// Cumulative wave composition thresholds: drone below the first, plane below the second, else cruise.
pub const WAVE_DRONE_SHARE: f64 = 0.4;
pub const WAVE_PLANE_SHARE: f64 = 0.85;

/// Chance that a wave brings an extra drone swarm, and the swarm size bounds.
pub const WAVE_SWARM_CHANCE: f64 = 0.12;
pub const WAVE_SWARM_MIN: u32 = 2;
pub const WAVE_SWARM_MAX: u32 = 4;

/// Default interval between random waves in the host driver (seconds).
pub const DEFAULT_SPAWN_INTERVAL_SECS: f64 = 1.8;
