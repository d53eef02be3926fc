//! Battery rules: construction defaults, cooldown, and upgrades.

use skyguard_core::components::Battery;
use skyguard_core::constants::*;

/// A freshly built level-1 battery.
pub fn new_battery() -> Battery {
    Battery {
        range_m: BATTERY_BASE_RANGE_M,
        reload_secs: BATTERY_BASE_RELOAD_SECS,
        last_fire_secs: None,
        level: 1,
        auto_engage: true,
    }
}

/// Whether the reload period has elapsed since the last automatic launch.
pub fn can_fire(battery: &Battery, now_secs: f64) -> bool {
    cooldown_remaining(battery, now_secs) <= 0.0
}

/// Seconds until the battery may fire again.
pub fn cooldown_remaining(battery: &Battery, now_secs: f64) -> f64 {
    match battery.last_fire_secs {
        Some(last) => (battery.reload_secs - (now_secs - last)).max(0.0),
        None => 0.0,
    }
}

/// Improve range and reload. Repeatable without limit; reload floors at
/// `BATTERY_MIN_RELOAD_SECS`.
pub fn upgrade(battery: &mut Battery) {
    battery.level += 1;
    battery.range_m *= UPGRADE_RANGE_FACTOR;
    battery.reload_secs = (battery.reload_secs * UPGRADE_RELOAD_FACTOR).max(BATTERY_MIN_RELOAD_SECS);
}

/// Interceptor speed for an automatic launch from a battery of this level.
pub fn auto_missile_speed(level: u32) -> f64 {
    AUTO_MISSILE_BASE_SPEED + level as f64 * AUTO_MISSILE_SPEED_PER_LEVEL
}
