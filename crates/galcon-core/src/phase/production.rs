//! Production: player planets build ships.

use tracing::trace;

use crate::arena::Arena;
use crate::error::Result;
use crate::event::TickEvent;

use super::{Phase, TickContext};

/// Counts every player planet down by one tick and adds a ship to its
/// garrison when the countdown runs out.
///
/// Neutral planets never produce. A planet captured this tick already
/// produces for its new owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductionPhase;

impl Phase for ProductionPhase {
    fn name(&self) -> &'static str {
        "production"
    }

    fn run(&self, arena: &mut Arena, ctx: &mut TickContext<'_>) -> Result<()> {
        for planet_id in arena.player_planet_ids() {
            let planet = arena.try_planet_mut(planet_id)?;
            planet.remaining_until_new_ship = planet.remaining_until_new_ship.saturating_sub(1);
            if planet.remaining_until_new_ship > 0 {
                continue;
            }
            planet.remaining_until_new_ship = planet.production_speed;

            let garrison = arena.garrison_mut(planet_id)?;
            garrison.strength += 1;
            trace!(planet = %planet_id, strength = garrison.strength, "ship produced");
            ctx.events.push(TickEvent::ShipProduced {
                planet: planet_id,
                garrison: garrison.id,
            });
        }
        Ok(())
    }
}
