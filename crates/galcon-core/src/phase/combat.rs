//! Combat: docked fleets fight hostile garrisons.

use tracing::debug;

use crate::arena::Arena;
use crate::entity::{FleetStatus, Strength};
use crate::error::Result;
use crate::event::TickEvent;

use super::{Phase, TickContext};

/// Resolves one exchange of fire per docked hostile fleet.
///
/// Both sides hit simultaneously for `min(own_strength, max_attack_speed)`.
/// Then, in order:
/// - a defender left at exactly 0 keeps 1 ship
/// - a defender below 0 is destroyed and the attacker becomes the garrison
/// - an attacker at or below 0 is destroyed
///
/// Several attackers on one planet fight one after another in fleet order,
/// each against whatever garrison the previous exchange left behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombatPhase;

/// Post-exchange strengths for an attacker `a` and defender `b`.
///
/// Returns `(attacker, defender, attacker_damage, defender_damage)`; the
/// defender is already clamped to 1 on an exact draw.
#[must_use]
pub(crate) fn exchange(
    a: Strength,
    b: Strength,
    max_attack_speed: Strength,
) -> (Strength, Strength, Strength, Strength) {
    let attacker_damage = a.min(max_attack_speed);
    let defender_damage = b.min(max_attack_speed);
    let mut defender = b - attacker_damage;
    if defender == 0 {
        defender = 1;
    }
    (a - defender_damage, defender, attacker_damage, defender_damage)
}

impl Phase for CombatPhase {
    fn name(&self) -> &'static str {
        "combat"
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
            if !fleet.can_dock(planet, max_speed) {
                continue;
            }
            let planet_position = planet.position;
            let defender = arena.garrison(destination)?;
            if defender.team == fleet.team {
                continue;
            }

            let defender_id = defender.id;
            let previous_owner = defender.team;
            let (attacker_left, defender_left, attacker_damage, defender_damage) =
                exchange(fleet.strength, defender.strength, ctx.config.max_attack_speed);

            arena.garrison_mut(destination)?.strength = defender_left;
            let attacker = arena.try_fleet_mut(id)?;
            attacker.strength = attacker_left;
            let new_owner = attacker.team;
            ctx.events.push(TickEvent::CombatResolved {
                attacker: id,
                defender: defender_id,
                planet: destination,
                attacker_damage,
                defender_damage,
            });

            if defender_left < 0 {
                debug_assert!(attacker_left > 0, "a capturing fleet always survives");
                attacker.position = planet_position;
                arena
                    .try_fleet_mut(defender_id)?
                    .status
                    .insert(FleetStatus::DESTROYED);
                arena.try_planet_mut(destination)?.defending_fleet = id;
                debug!(
                    planet = %destination,
                    from = %previous_owner,
                    to = %new_owner,
                    garrison = %id,
                    "planet captured"
                );
                ctx.events.push(TickEvent::FleetDestroyed {
                    fleet: defender_id,
                    planet: destination,
                });
                ctx.events.push(TickEvent::PlanetCaptured {
                    planet: destination,
                    previous_owner,
                    new_owner,
                    garrison: id,
                });
            }

            if attacker_left <= 0 {
                arena.try_fleet_mut(id)?.status.insert(FleetStatus::DESTROYED);
                debug!(fleet = %id, planet = %destination, "attacker destroyed");
                ctx.events.push(TickEvent::FleetDestroyed {
                    fleet: id,
                    planet: destination,
                });
            }
        }
        Ok(())
    }
}
