//! Movement: fleets out of docking range close in on their destination.

use tracing::trace;

use crate::arena::Arena;
use crate::entity::{FleetId, Position};
use crate::error::{GameError, Result};

use super::{Phase, TickContext};

/// Moves every player fleet that has a destination it cannot dock at yet.
///
/// Fleets that can already dock, or have nowhere to go, stay put; the
/// reinforce and combat phases deal with them.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementPhase;

impl Phase for MovementPhase {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn run(&self, arena: &mut Arena, ctx: &mut TickContext<'_>) -> Result<()> {
        let max_speed = ctx.config.max_fleet_speed;
        for id in arena.player_fleet_ids() {
            let fleet = arena.try_fleet(id)?;
            let Some(destination) = fleet.destination else {
                continue;
            };
            if fleet.can_dock(arena.try_planet(destination)?, max_speed) {
                continue;
            }
            move_fleet(arena, id, max_speed)?;
        }
        Ok(())
    }
}

/// Advances a fleet one step along the straight line to its destination.
///
/// The step is `min(distance - destination.size, max_speed)`, so the fleet
/// never ends up inside the planet.
///
/// # Errors
///
/// [`GameError::MissingDestination`] if the fleet has no destination, which
/// means a phase let a holding fleet through. [`GameError::UnknownFleet`] /
/// [`GameError::UnknownPlanet`] for dangling identifiers.
pub fn move_fleet(arena: &mut Arena, id: FleetId, max_speed: f32) -> Result<()> {
    let fleet = arena.try_fleet(id)?;
    let destination = fleet
        .destination
        .ok_or(GameError::MissingDestination(id))?;
    let planet = arena.try_planet(destination)?;

    let from = fleet.position.as_vec2();
    let toward = planet.position.as_vec2() - from;
    let step = (toward.length() - planet.size()).min(max_speed).max(0.0);
    let next = Position::from(from + toward.normalize_or_zero() * step);

    trace!(fleet = %id, x = next.x(), y = next.y(), "fleet moved");
    arena.try_fleet_mut(id)?.position = next;
    Ok(())
}
