//! Already-arrived correction.

use crate::arena::Arena;
use crate::error::Result;

use super::{Phase, TickContext};

/// Clears the order of any fleet told to go to the planet it already garrisons.
///
/// Without this a garrison ordered "home" would be treated as departing to
/// itself. Also clears the order a capturing fleet carries into the tick after
/// its capture.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrivalPhase;

impl Phase for ArrivalPhase {
    fn name(&self) -> &'static str {
        "arrival"
    }

    fn run(&self, arena: &mut Arena, _ctx: &mut TickContext<'_>) -> Result<()> {
        for id in arena.player_fleet_ids() {
            let Some(destination) = arena.try_fleet(id)?.destination else {
                continue;
            };
            if arena.try_planet(destination)?.defending_fleet != id {
                continue;
            }
            let fleet = arena.try_fleet_mut(id)?;
            fleet.destination = None;
            fleet.split = false;
        }
        Ok(())
    }
}
