//! Reinforcement: docked fleets feed friendly garrisons.

use tracing::trace;

use crate::arena::Arena;
use crate::entity::FleetStatus;
use crate::error::Result;
use crate::event::TickEvent;

use super::{Phase, TickContext};

/// Transfers strength from docked fleets into same-team garrisons.
///
/// Each fleet gives at most `max_attack_speed` ships per tick. A fleet that
/// runs dry is flagged [`FleetStatus::MERGED`]; one with ships left is flagged
/// [`FleetStatus::MERGING`] and keeps its destination, so it donates again
/// next tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReinforcePhase;

impl Phase for ReinforcePhase {
    fn name(&self) -> &'static str {
        "reinforce"
    }

    fn run(&self, arena: &mut Arena, ctx: &mut TickContext<'_>) -> Result<()> {
        let max_speed = ctx.config.max_fleet_speed;
        for id in arena.player_fleet_ids() {
            let fleet = arena.try_fleet(id)?;
            if fleet.is_removed() {
                continue;
            }
            let Some(destination) = fleet.destination else {
                continue;
            };
            let planet = arena.try_planet(destination)?;
            if planet.defending_fleet == id || !fleet.can_dock(planet, max_speed) {
                continue;
            }
            if arena.planet_team(destination)? != fleet.team {
                continue;
            }

            let amount = fleet.strength.min(ctx.config.max_attack_speed).max(0);
            arena.garrison_mut(destination)?.strength += amount;
            let fleet = arena.try_fleet_mut(id)?;
            fleet.strength -= amount;
            trace!(fleet = %id, planet = %destination, amount, "reinforced");

            if amount > 0 {
                ctx.events.push(TickEvent::Reinforced {
                    fleet: id,
                    planet: destination,
                    amount,
                });
            }
            if fleet.strength <= 0 {
                fleet.status.insert(FleetStatus::MERGED);
                ctx.events.push(TickEvent::FleetMerged {
                    fleet: id,
                    planet: destination,
                });
            } else {
                fleet.status.insert(FleetStatus::MERGING);
            }
        }
        Ok(())
    }
}
