//! Entity and command model.
//!
//! This module provides the value types the tick pipeline operates over:
//! - [`FleetId`] / [`PlanetId`]: stable identifiers into the [`Arena`](crate::arena::Arena)
//! - [`Position`]: a 2D point with Euclidean distance
//! - [`Team`]: ownership, including the [`Team::Neutral`] sentinel
//! - [`Fleet`]: a group of ships, either garrisoning a planet or in transit
//! - [`Planet`]: a fixed production site that always owns one garrison fleet
//! - [`MoveCommand`]: a player's order to send a fleet to a planet
//!
//! # Ownership
//!
//! Planets never hold a fleet directly. A planet stores the [`FleetId`] of its
//! garrison, and capturing a planet rebinds that identifier. A planet's team is
//! therefore derived from the arena, see
//! [`Arena::planet_team`](crate::arena::Arena::planet_team).
//!
//! # Example
//!
//! ```
//! use galcon_core::entity::{Fleet, FleetId, Planet, PlanetId, Position, Team};
//!
//! let planet = Planet::new(PlanetId::new(0), Position::new(0.0, 0.0), 3, FleetId::new(0));
//! let fleet = Fleet::new(FleetId::new(1), Team::Red, Position::new(10.0, 0.0), 4, Some(planet.id));
//!
//! assert_eq!(planet.size(), 7.0);
//! assert!(fleet.can_dock(&planet, 5.0));
//! ```

pub mod status;

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use status::FleetStatus;

/// Ship count carried by a fleet.
///
/// Signed because combat subtracts both sides' damage before deciding who
/// survives; negative values never outlive the combat phase.
pub type Strength = i32;

/// Unique identifier for a fleet.
///
/// Fleet IDs are assigned monotonically by the arena and never reused, so a
/// fleet spawned in a tick can never collide with one removed in that tick.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FleetId(u64);

impl FleetId {
    /// Creates a new `FleetId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for FleetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FleetId({})", self.0)
    }
}

impl fmt::Display for FleetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FleetId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// Unique identifier for a planet.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlanetId(u64);

impl PlanetId {
    /// Creates a new `PlanetId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlanetId({})", self.0)
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PlanetId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// Owner of a fleet, and through its garrison, of a planet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Unowned. Neutral entities never act on their own.
    Neutral,
    /// Player one.
    Red,
    /// Player two.
    Blue,
    /// Player three.
    Green,
    /// Player four.
    Yellow,
}

impl Team {
    /// Every team, neutral first.
    pub const ALL: [Team; 5] = [
        Team::Neutral,
        Team::Red,
        Team::Blue,
        Team::Green,
        Team::Yellow,
    ];

    /// Returns `true` for [`Team::Neutral`].
    #[must_use]
    pub const fn is_neutral(self) -> bool {
        matches!(self, Self::Neutral)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => write!(f, "Neutral"),
            Self::Red => write!(f, "Red"),
            Self::Blue => write!(f, "Blue"),
            Self::Green => write!(f, "Green"),
            Self::Yellow => write!(f, "Yellow"),
        }
    }
}

/// A point on the map.
///
/// Positions are values: a moving fleet gets a new `Position` every tick.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(Vec2);

impl Position {
    /// Creates a position from coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Horizontal coordinate.
    #[must_use]
    pub fn x(self) -> f32 {
        self.0.x
    }

    /// Vertical coordinate.
    #[must_use]
    pub fn y(self) -> f32 {
        self.0.y
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Position) -> f32 {
        self.0.distance(other.0)
    }

    /// The underlying vector.
    #[must_use]
    pub const fn as_vec2(self) -> Vec2 {
        self.0
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<Position> for Vec2 {
    fn from(p: Position) -> Self {
        p.0
    }
}

/// A group of ships.
///
/// A fleet with a destination is in transit to, reinforcing, or attacking that
/// planet. A fleet without one is holding position, which in practice means it
/// is some planet's garrison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    /// Stable identifier.
    pub id: FleetId,
    /// Owner.
    pub team: Team,
    /// Current location.
    pub position: Position,
    /// Ship count.
    pub strength: Strength,
    /// Planet the fleet is heading for, if any.
    pub destination: Option<PlanetId>,
    /// Whether the pending destination was ordered as a split.
    pub split: bool,
    /// What happened to this fleet during the current tick.
    pub status: FleetStatus,
}

impl Fleet {
    /// Creates a fleet with no split order and a clear status.
    #[must_use]
    pub fn new(
        id: FleetId,
        team: Team,
        position: Position,
        strength: Strength,
        destination: Option<PlanetId>,
    ) -> Self {
        Self {
            id,
            team,
            position,
            strength,
            destination,
            split: false,
            status: FleetStatus::empty(),
        }
    }

    /// Builds an order sending this fleet to `destination`.
    #[must_use]
    pub fn move_to(&self, destination: PlanetId, split: bool) -> MoveCommand {
        MoveCommand::new(self.id, destination, split)
    }

    /// Returns `true` once the fleet is close enough to `planet` to reinforce
    /// or attack it.
    ///
    /// The threshold is `planet.size() + max_fleet_speed`, so a fleet moving at
    /// full speed docks one step before it could overshoot the planet.
    #[must_use]
    pub fn can_dock(&self, planet: &Planet, max_fleet_speed: f32) -> bool {
        self.position.distance_to(planet.position) < planet.size() + max_fleet_speed
    }

    /// Returns `true` if the fleet has been merged or destroyed this tick.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.status.is_removed()
    }
}

/// A planet: fixed position, produces ships for whoever holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Stable identifier.
    pub id: PlanetId,
    /// Location; planets never move.
    pub position: Position,
    /// Ticks between two produced ships.
    pub production_speed: u32,
    /// Ticks left until the next ship.
    pub remaining_until_new_ship: u32,
    /// The garrison. Always refers to a live fleet.
    pub defending_fleet: FleetId,
}

impl Planet {
    /// Creates a planet with a full production countdown.
    #[must_use]
    pub fn new(
        id: PlanetId,
        position: Position,
        production_speed: u32,
        defending_fleet: FleetId,
    ) -> Self {
        Self {
            id,
            position,
            production_speed,
            remaining_until_new_ship: production_speed,
            defending_fleet,
        }
    }

    /// Docking radius base: `production_speed + 4`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> f32 {
        (u64::from(self.production_speed) + 4) as f32
    }
}

/// A player's intent to redirect a fleet.
///
/// With `split` set and the fleet being a garrison, only half of it (rounded
/// up) departs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommand {
    /// Fleet receiving the order.
    pub fleet: FleetId,
    /// Planet to head for.
    pub destination: PlanetId,
    /// Send half of a garrison instead of all of it.
    pub split: bool,
}

impl MoveCommand {
    /// Creates a command.
    #[must_use]
    pub const fn new(fleet: FleetId, destination: PlanetId, split: bool) -> Self {
        Self {
            fleet,
            destination,
            split,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod id_tests {
        use super::*;

        #[test]
        fn ordering_follows_raw_value() {
            let mut ids = vec![FleetId::new(3), FleetId::new(1), FleetId::new(2)];
            ids.sort();
            assert_eq!(ids, vec![FleetId::new(1), FleetId::new(2), FleetId::new(3)]);
        }

        #[test]
        fn debug_and_display() {
            assert_eq!(format!("{:?}", FleetId::new(7)), "FleetId(7)");
            assert_eq!(format!("{}", PlanetId::new(9)), "9");
            assert_eq!(format!("{:?}", PlanetId::new(9)), "PlanetId(9)");
        }

        #[test]
        fn from_u64() {
            let id: PlanetId = 4u64.into();
            assert_eq!(id.as_u64(), 4);
        }
    }

    mod position_tests {
        use super::*;

        #[test]
        fn distance_is_euclidean() {
            let a = Position::new(0.0, 0.0);
            let b = Position::new(3.0, 4.0);
            assert!((a.distance_to(b) - 5.0).abs() < 1e-6);
            assert!((b.distance_to(a) - 5.0).abs() < 1e-6);
        }

        #[test]
        fn vec2_conversion() {
            let p = Position::from(Vec2::new(1.5, -2.0));
            assert_eq!(p.x(), 1.5);
            assert_eq!(p.y(), -2.0);
            assert_eq!(Vec2::from(p), Vec2::new(1.5, -2.0));
        }
    }

    mod planet_tests {
        use super::*;

        #[test]
        fn size_is_production_speed_plus_four() {
            let planet = Planet::new(PlanetId::new(0), Position::default(), 5, FleetId::new(0));
            assert_eq!(planet.size(), 9.0);

            let fast = Planet::new(PlanetId::new(1), Position::default(), 0, FleetId::new(1));
            assert_eq!(fast.size(), 4.0);
        }

        #[test]
        fn countdown_starts_full() {
            let planet = Planet::new(PlanetId::new(0), Position::default(), 6, FleetId::new(0));
            assert_eq!(planet.remaining_until_new_ship, 6);
        }
    }

    mod fleet_tests {
        use super::*;

        fn planet_at(x: f32, production_speed: u32) -> Planet {
            Planet::new(
                PlanetId::new(0),
                Position::new(x, 0.0),
                production_speed,
                FleetId::new(0),
            )
        }

        #[test]
        fn docking_threshold_is_strict() {
            // size 9 + speed 5 = 14
            let planet = planet_at(100.0, 5);
            let inside = Fleet::new(FleetId::new(1), Team::Red, Position::new(86.5, 0.0), 1, None);
            let edge = Fleet::new(FleetId::new(2), Team::Red, Position::new(86.0, 0.0), 1, None);

            assert!(inside.can_dock(&planet, 5.0));
            assert!(!edge.can_dock(&planet, 5.0));
        }

        #[test]
        fn docking_radius_grows_with_speed() {
            let planet = planet_at(20.0, 1);
            let fleet = Fleet::new(FleetId::new(1), Team::Red, Position::new(0.0, 0.0), 1, None);
            assert!(!fleet.can_dock(&planet, 5.0));
            assert!(fleet.can_dock(&planet, 16.0));
        }

        #[test]
        fn move_to_builds_command() {
            let fleet = Fleet::new(FleetId::new(3), Team::Blue, Position::default(), 8, None);
            let command = fleet.move_to(PlanetId::new(2), true);
            assert_eq!(command, MoveCommand::new(FleetId::new(3), PlanetId::new(2), true));
        }

        #[test]
        fn new_fleet_has_clear_status() {
            let fleet = Fleet::new(FleetId::new(3), Team::Blue, Position::default(), 8, None);
            assert!(fleet.status.is_empty());
            assert!(!fleet.split);
            assert!(!fleet.is_removed());
        }

        #[test]
        fn serialization_roundtrip() {
            let fleet = Fleet::new(
                FleetId::new(11),
                Team::Green,
                Position::new(4.0, 2.0),
                6,
                Some(PlanetId::new(1)),
            );
            let json = serde_json::to_string(&fleet).unwrap();
            let restored: Fleet = serde_json::from_str(&json).unwrap();
            assert_eq!(fleet, restored);
        }
    }

    mod team_tests {
        use super::*;

        #[test]
        fn only_neutral_is_neutral() {
            assert!(Team::Neutral.is_neutral());
            assert_eq!(Team::ALL.iter().filter(|t| t.is_neutral()).count(), 1);
        }

        #[test]
        fn display_format() {
            assert_eq!(format!("{}", Team::Red), "Red");
            assert_eq!(format!("{}", Team::Neutral), "Neutral");
        }
    }
}
