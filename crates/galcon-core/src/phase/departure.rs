//! Departure: garrisons with an order send ships out.

use tracing::debug;

use crate::arena::Arena;
use crate::entity::{Fleet, Strength};
use crate::error::Result;
use crate::event::TickEvent;

use super::{Phase, TickContext};

/// Stages a new fleet for every player planet whose garrison has an order.
///
/// The new fleet takes the whole garrison, or half of it rounded up when the
/// order was a split. Its strength is subtracted from the garrison right away,
/// but the fleet itself only enters the arena after the last phase, so it does
/// not move or fight in the tick it was created.
///
/// The garrison stays on its planet. Its order is consumed here, so one
/// command yields exactly one departure. An order that would send zero ships
/// is consumed without staging anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeparturePhase;

/// Ships leaving a garrison of `strength`.
#[must_use]
pub(crate) fn departing_strength(strength: Strength, split: bool) -> Strength {
    if split {
        // ceil(strength / 2) for non-negative strength
        (strength + 1) / 2
    } else {
        strength
    }
}

impl Phase for DeparturePhase {
    fn name(&self) -> &'static str {
        "departure"
    }

    fn run(&self, arena: &mut Arena, ctx: &mut TickContext<'_>) -> Result<()> {
        for planet_id in arena.player_planet_ids() {
            let origin = arena.try_planet(planet_id)?.position;
            let garrison = arena.garrison_mut(planet_id)?;

            let Some(destination) = garrison.destination else {
                continue;
            };
            if destination == planet_id {
                continue;
            }

            let strength = departing_strength(garrison.strength.max(0), garrison.split);
            let team = garrison.team;
            garrison.strength -= strength;
            garrison.destination = None;
            garrison.split = false;

            if strength == 0 {
                debug!(planet = %planet_id, "empty garrison, nothing departs");
                continue;
            }

            let id = arena.reserve_fleet_id();
            debug!(
                planet = %planet_id,
                destination = %destination,
                fleet = %id,
                strength,
                "fleet departed"
            );
            ctx.staged
                .push(Fleet::new(id, team, origin, strength, Some(destination)));
            ctx.events.push(TickEvent::FleetDeparted {
                origin: planet_id,
                destination,
                fleet: id,
                strength,
            });
        }
        Ok(())
    }
}
