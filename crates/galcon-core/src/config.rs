//! Balance constants and map configuration.
//!
//! Every rule in the tick pipeline that depends on a tunable number reads it
//! from [`GameConfig`]. The defaults match the classic Galcon ruleset.

use serde::{Deserialize, Serialize};

/// Maximum distance a fleet travels in one tick.
pub const DEFAULT_MAX_FLEET_SPEED: f32 = 5.0;

/// Maximum strength a fleet can transfer or deal as damage in one tick.
pub const DEFAULT_MAX_ATTACK_SPEED: i32 = 3;

/// Default map width in world units.
pub const DEFAULT_MAP_WIDTH: u32 = 800;

/// Default map height in world units.
pub const DEFAULT_MAP_HEIGHT: u32 = 600;

/// Fastest production speed a generated planet can have.
pub const DEFAULT_MIN_PRODUCTION_SPEED: u32 = 1;

/// Slowest production speed a generated planet can have.
pub const DEFAULT_MAX_PRODUCTION_SPEED: u32 = 5;

/// Strength of each team's starting garrison.
pub const DEFAULT_INITIAL_STRENGTH: i32 = 10;

/// Configuration for a [`Game`](crate::game::Game).
///
/// # Example
///
/// ```
/// use galcon_core::config::GameConfig;
///
/// let config = GameConfig {
///     max_attack_speed: 5,
///     ..GameConfig::default()
/// };
/// assert_eq!(config.max_attack_speed, 5);
/// assert!((config.max_fleet_speed - 5.0).abs() < f32::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Distance a fleet covers per tick; also widens the docking radius.
    pub max_fleet_speed: f32,
    /// Cap on reinforcement transfer and combat damage per fleet per tick.
    pub max_attack_speed: i32,
    /// Map width used by initial placement.
    pub map_width: u32,
    /// Map height used by initial placement.
    pub map_height: u32,
    /// Lower bound (inclusive) for generated production speeds.
    pub min_production_speed: u32,
    /// Upper bound (inclusive) for generated production speeds.
    pub max_production_speed: u32,
    /// Starting garrison strength for every team.
    pub initial_strength: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_fleet_speed: DEFAULT_MAX_FLEET_SPEED,
            max_attack_speed: DEFAULT_MAX_ATTACK_SPEED,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            min_production_speed: DEFAULT_MIN_PRODUCTION_SPEED,
            max_production_speed: DEFAULT_MAX_PRODUCTION_SPEED,
            initial_strength: DEFAULT_INITIAL_STRENGTH,
        }
    }
}

impl GameConfig {
    /// Create a config with custom movement and attack caps, keeping the
    /// default map and production settings.
    #[must_use]
    pub fn with_speeds(max_fleet_speed: f32, max_attack_speed: i32) -> Self {
        Self {
            max_fleet_speed,
            max_attack_speed,
            ..Default::default()
        }
    }

    /// Inclusive production speed range, tolerant of swapped bounds.
    #[must_use]
    pub fn production_speed_range(&self) -> std::ops::RangeInclusive<u32> {
        let lo = self.min_production_speed.min(self.max_production_speed);
        let hi = self.min_production_speed.max(self.max_production_speed);
        lo..=hi
    }
}
