//! Command application: point fleets at the planets their owners chose.

use crate::arena::Arena;
use crate::error::Result;

use super::{Phase, TickContext};

/// Applies every [`MoveCommand`](crate::entity::MoveCommand) in order.
///
/// A later command for the same fleet overwrites an earlier one. No check is
/// made that the destination differs from where the fleet already is; the
/// [`ArrivalPhase`](super::ArrivalPhase) handles that case.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandPhase;

impl Phase for CommandPhase {
    fn name(&self) -> &'static str {
        "command"
    }

    fn run(&self, arena: &mut Arena, ctx: &mut TickContext<'_>) -> Result<()> {
        for command in ctx.commands {
            arena.try_planet(command.destination)?;
            let fleet = arena.try_fleet_mut(command.fleet)?;
            fleet.destination = Some(command.destination);
            fleet.split = command.split;
        }
        Ok(())
    }
}
