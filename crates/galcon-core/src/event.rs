//! Tick events and the per-tick report.
//!
//! Phases record what they did as [`TickEvent`]s. Events never feed back into
//! the simulation; they exist for callers (replays, UIs, logging) that want to
//! know what a tick changed without diffing two arenas.

use serde::{Deserialize, Serialize};

use crate::entity::{FleetId, PlanetId, Strength, Team};

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickEvent {
    /// A garrison sent a fleet toward another planet.
    FleetDeparted {
        /// Planet the fleet left.
        origin: PlanetId,
        /// Planet the fleet is heading for.
        destination: PlanetId,
        /// The new fleet.
        fleet: FleetId,
        /// Ships in the new fleet.
        strength: Strength,
    },
    /// A docked friendly fleet moved strength into a garrison.
    Reinforced {
        /// Donating fleet.
        fleet: FleetId,
        /// Receiving planet.
        planet: PlanetId,
        /// Ships transferred.
        amount: Strength,
    },
    /// A fleet donated its last ship and dissolved into a garrison.
    FleetMerged {
        /// Dissolved fleet.
        fleet: FleetId,
        /// Planet it merged into.
        planet: PlanetId,
    },
    /// An attacker and a garrison exchanged fire.
    CombatResolved {
        /// Attacking fleet.
        attacker: FleetId,
        /// Defending garrison.
        defender: FleetId,
        /// Planet fought over.
        planet: PlanetId,
        /// Damage dealt by the attacker.
        attacker_damage: Strength,
        /// Damage dealt by the defender.
        defender_damage: Strength,
    },
    /// A planet changed hands.
    PlanetCaptured {
        /// Captured planet.
        planet: PlanetId,
        /// Previous owner.
        previous_owner: Team,
        /// New owner.
        new_owner: Team,
        /// The attacker, now garrison.
        garrison: FleetId,
    },
    /// A fleet was wiped out.
    FleetDestroyed {
        /// Destroyed fleet.
        fleet: FleetId,
        /// Planet it died at.
        planet: PlanetId,
    },
    /// A planet built a ship.
    ShipProduced {
        /// Producing planet.
        planet: PlanetId,
        /// Garrison receiving the ship.
        garrison: FleetId,
    },
}

impl TickEvent {
    /// Returns the planet this event happened at or originated from.
    #[must_use]
    pub const fn planet(&self) -> PlanetId {
        match self {
            Self::FleetDeparted { origin, .. } => *origin,
            Self::Reinforced { planet, .. }
            | Self::FleetMerged { planet, .. }
            | Self::CombatResolved { planet, .. }
            | Self::PlanetCaptured { planet, .. }
            | Self::FleetDestroyed { planet, .. }
            | Self::ShipProduced { planet, .. } => *planet,
        }
    }
}

/// Outcome of one [`Game::step`](crate::game::Game::step).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// The tick that was resolved (1 for the first call to `step`).
    pub tick: u64,
    /// Events in the order they happened.
    pub events: Vec<TickEvent>,
}

impl TickReport {
    /// Fleets created by departures this tick.
    #[must_use]
    pub fn departed(&self) -> Vec<FleetId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TickEvent::FleetDeparted { fleet, .. } => Some(*fleet),
                _ => None,
            })
            .collect()
    }

    /// Fleets removed this tick, merged or destroyed.
    #[must_use]
    pub fn removed(&self) -> Vec<FleetId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TickEvent::FleetMerged { fleet, .. } | TickEvent::FleetDestroyed { fleet, .. } => {
                    Some(*fleet)
                }
                _ => None,
            })
            .collect()
    }

    /// Planets that changed hands this tick.
    #[must_use]
    pub fn captures(&self) -> Vec<PlanetId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TickEvent::PlanetCaptured { planet, .. } => Some(*planet),
                _ => None,
            })
            .collect()
    }
}
