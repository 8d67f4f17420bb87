//! Error types for the tick engine.

use thiserror::Error;

use crate::entity::{FleetId, PlanetId};

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised while validating commands or resolving a tick.
///
/// Any error aborts the tick; [`Game::step`](crate::game::Game::step) keeps
/// the pre-tick state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A fleet reached the movement code without a destination.
    #[error("Fleet {0} should have a destination")]
    MissingDestination(FleetId),

    /// A command or reference named a fleet that is not in the arena.
    #[error("Fleet not found: {0}")]
    UnknownFleet(FleetId),

    /// A command or reference named a planet that is not in the arena.
    #[error("Planet not found: {0}")]
    UnknownPlanet(PlanetId),

    /// A planet's garrison identifier does not resolve to a live fleet.
    #[error("Planet {planet} has no live garrison (expected fleet {fleet})")]
    MissingGarrison {
        /// Planet with the dangling garrison.
        planet: PlanetId,
        /// Identifier the planet points at.
        fleet: FleetId,
    },
}
