//! Arena: the authoritative entity collection.
//!
//! The Arena owns every fleet and planet in a game. It provides:
//! - Two ordered stores (`BTreeMap`) keyed by [`FleetId`] and [`PlanetId`]
//! - Fleet lifecycle management (spawn/despawn); planets are add-only
//! - Garrison lookups that resolve a planet's `defending_fleet` identifier
//! - The team-filtered views the tick pipeline iterates over
//!
//! # Determinism
//!
//! Identifiers are assigned monotonically and never reused. Iterating a
//! `BTreeMap` follows identifier order, so every phase visits entities in the
//! same sequence on every run and platform.
//!
//! # Example
//!
//! ```
//! use galcon_core::arena::Arena;
//! use galcon_core::entity::{Position, Team};
//!
//! let mut arena = Arena::new();
//! let (planet, garrison) = arena.spawn_home(Team::Red, Position::new(10.0, 20.0), 10, 3);
//!
//! assert_eq!(arena.planet_team(planet).unwrap(), Team::Red);
//! assert_eq!(arena.find_planet(garrison).map(|p| p.id), Some(planet));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::{Fleet, FleetId, Planet, PlanetId, Position, Strength, Team};
use crate::error::{GameError, Result};

/// Container for all fleets and planets of a game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    /// Next fleet identifier to hand out.
    next_fleet_id: u64,
    /// Next planet identifier to hand out.
    next_planet_id: u64,
    /// Live fleets in identifier order.
    fleets: BTreeMap<FleetId, Fleet>,
    /// Planets in identifier order. Never shrinks.
    planets: BTreeMap<PlanetId, Planet>,
    /// Number of completed ticks.
    tick: u64,
}

impl Arena {
    /// Creates an empty arena at tick 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a fleet and returns its identifier.
    pub fn spawn_fleet(
        &mut self,
        team: Team,
        position: Position,
        strength: Strength,
        destination: Option<PlanetId>,
    ) -> FleetId {
        let id = FleetId::new(self.next_fleet_id);
        self.next_fleet_id += 1;
        self.fleets
            .insert(id, Fleet::new(id, team, position, strength, destination));
        id
    }

    /// Hands out the next fleet identifier without inserting a fleet.
    ///
    /// Departures use this so a fleet has its final identifier while it is
    /// still staged outside the arena.
    pub fn reserve_fleet_id(&mut self) -> FleetId {
        let id = FleetId::new(self.next_fleet_id);
        self.next_fleet_id += 1;
        id
    }

    /// Inserts a fleet whose identifier came from [`Arena::reserve_fleet_id`].
    pub fn insert_fleet(&mut self, fleet: Fleet) {
        debug_assert!(fleet.id.as_u64() < self.next_fleet_id);
        self.fleets.insert(fleet.id, fleet);
    }

    /// Adds a planet garrisoned by an existing fleet.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownFleet`] if `garrison` is not in the arena.
    pub fn add_planet(
        &mut self,
        position: Position,
        production_speed: u32,
        garrison: FleetId,
    ) -> Result<PlanetId> {
        if !self.fleets.contains_key(&garrison) {
            return Err(GameError::UnknownFleet(garrison));
        }
        let id = PlanetId::new(self.next_planet_id);
        self.next_planet_id += 1;
        self.planets
            .insert(id, Planet::new(id, position, production_speed, garrison));
        Ok(id)
    }

    /// Spawns a garrison fleet and a planet around it at the same position.
    ///
    /// This is how every game starts: one such pair per team.
    pub fn spawn_home(
        &mut self,
        team: Team,
        position: Position,
        strength: Strength,
        production_speed: u32,
    ) -> (PlanetId, FleetId) {
        let fleet = self.spawn_fleet(team, position, strength, None);
        let id = PlanetId::new(self.next_planet_id);
        self.next_planet_id += 1;
        self.planets
            .insert(id, Planet::new(id, position, production_speed, fleet));
        (id, fleet)
    }

    /// Removes a fleet, returning it if it existed.
    ///
    /// Callers must not despawn a fleet that still garrisons a planet.
    pub fn despawn_fleet(&mut self, id: FleetId) -> Option<Fleet> {
        self.fleets.remove(&id)
    }

    /// Returns a fleet by identifier.
    #[must_use]
    pub fn fleet(&self, id: FleetId) -> Option<&Fleet> {
        self.fleets.get(&id)
    }

    /// Returns a mutable fleet by identifier.
    #[must_use]
    pub fn fleet_mut(&mut self, id: FleetId) -> Option<&mut Fleet> {
        self.fleets.get_mut(&id)
    }

    /// Returns a planet by identifier.
    #[must_use]
    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.get(&id)
    }

    /// Returns a mutable planet by identifier.
    #[must_use]
    pub fn planet_mut(&mut self, id: PlanetId) -> Option<&mut Planet> {
        self.planets.get_mut(&id)
    }

    /// Like [`Arena::fleet`], but a missing fleet is an error.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownFleet`].
    pub fn try_fleet(&self, id: FleetId) -> Result<&Fleet> {
        self.fleets.get(&id).ok_or(GameError::UnknownFleet(id))
    }

    /// Like [`Arena::fleet_mut`], but a missing fleet is an error.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownFleet`].
    pub fn try_fleet_mut(&mut self, id: FleetId) -> Result<&mut Fleet> {
        self.fleets.get_mut(&id).ok_or(GameError::UnknownFleet(id))
    }

    /// Like [`Arena::planet`], but a missing planet is an error.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownPlanet`].
    pub fn try_planet(&self, id: PlanetId) -> Result<&Planet> {
        self.planets.get(&id).ok_or(GameError::UnknownPlanet(id))
    }

    /// Like [`Arena::planet_mut`], but a missing planet is an error.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownPlanet`].
    pub fn try_planet_mut(&mut self, id: PlanetId) -> Result<&mut Planet> {
        self.planets.get_mut(&id).ok_or(GameError::UnknownPlanet(id))
    }

    /// Returns the garrison of a planet.
    ///
    /// # Errors
    ///
    /// [`GameError::UnknownPlanet`] if the planet does not exist,
    /// [`GameError::MissingGarrison`] if its garrison is not a live fleet.
    pub fn garrison(&self, planet: PlanetId) -> Result<&Fleet> {
        let fleet = self.try_planet(planet)?.defending_fleet;
        self.fleets
            .get(&fleet)
            .ok_or(GameError::MissingGarrison { planet, fleet })
    }

    /// Returns the garrison of a planet, mutably.
    ///
    /// # Errors
    ///
    /// Same as [`Arena::garrison`].
    pub fn garrison_mut(&mut self, planet: PlanetId) -> Result<&mut Fleet> {
        let fleet = self.try_planet(planet)?.defending_fleet;
        self.fleets
            .get_mut(&fleet)
            .ok_or(GameError::MissingGarrison { planet, fleet })
    }

    /// A planet's owner: the team of its garrison.
    ///
    /// # Errors
    ///
    /// Same as [`Arena::garrison`].
    pub fn planet_team(&self, planet: PlanetId) -> Result<Team> {
        Ok(self.garrison(planet)?.team)
    }

    /// Iterates fleet identifiers in ascending order.
    pub fn fleet_ids_sorted(&self) -> impl Iterator<Item = FleetId> + '_ {
        self.fleets.keys().copied()
    }

    /// Iterates fleets in identifier order.
    pub fn fleets_sorted(&self) -> impl Iterator<Item = &Fleet> + '_ {
        self.fleets.values()
    }

    /// Iterates fleets mutably in identifier order.
    pub fn fleets_sorted_mut(&mut self) -> impl Iterator<Item = &mut Fleet> + '_ {
        self.fleets.values_mut()
    }

    /// Iterates planet identifiers in ascending order.
    pub fn planet_ids_sorted(&self) -> impl Iterator<Item = PlanetId> + '_ {
        self.planets.keys().copied()
    }

    /// Iterates planets in identifier order.
    pub fn planets_sorted(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets.values()
    }

    /// Fleets owned by a player (any team but neutral).
    pub fn player_fleets(&self) -> impl Iterator<Item = &Fleet> + '_ {
        self.fleets.values().filter(|f| !f.team.is_neutral())
    }

    /// Planets whose garrison belongs to a player.
    ///
    /// Planets with a dangling garrison are skipped; see [`Arena::validate`].
    pub fn player_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets.values().filter(|p| {
            self.fleets
                .get(&p.defending_fleet)
                .is_some_and(|f| !f.team.is_neutral())
        })
    }

    /// Snapshot of player fleet identifiers, for phases that mutate while iterating.
    #[must_use]
    pub fn player_fleet_ids(&self) -> Vec<FleetId> {
        self.player_fleets().map(|f| f.id).collect()
    }

    /// Snapshot of player planet identifiers, for phases that mutate while iterating.
    #[must_use]
    pub fn player_planet_ids(&self) -> Vec<PlanetId> {
        self.player_planets().map(|p| p.id).collect()
    }

    /// The player planet garrisoned by `defender`, if any.
    #[must_use]
    pub fn find_planet(&self, defender: FleetId) -> Option<&Planet> {
        self.player_planets().find(|p| p.defending_fleet == defender)
    }

    /// Returns `true` if `fleet` garrisons any planet, neutral ones included.
    #[must_use]
    pub fn is_garrison(&self, fleet: FleetId) -> bool {
        self.planets.values().any(|p| p.defending_fleet == fleet)
    }

    /// Checks the structural invariants: every garrison is live and garrisons
    /// at most one planet, and every fleet destination names a planet.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in identifier order.
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::BTreeSet::new();
        for planet in self.planets.values() {
            let fleet = planet.defending_fleet;
            if !self.fleets.contains_key(&fleet) || !seen.insert(fleet) {
                return Err(GameError::MissingGarrison {
                    planet: planet.id,
                    fleet,
                });
            }
        }
        for fleet in self.fleets.values() {
            if let Some(destination) = fleet.destination {
                self.try_planet(destination)?;
            }
        }
        Ok(())
    }

    /// Number of live fleets.
    #[must_use]
    pub fn fleet_count(&self) -> usize {
        self.fleets.len()
    }

    /// Number of planets.
    #[must_use]
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    /// Number of completed ticks.
    #[must_use]
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Advances the tick counter by one.
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }
}
