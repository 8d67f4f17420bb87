//! State hashing for determinism verification.
//!
//! Two arenas that went through the same ticks with the same commands must
//! hash identically. Floats are hashed by bit pattern.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::arena::Arena;
use crate::entity::{Fleet, Planet};

/// Compute a deterministic hash of arena state.
///
/// Covers the tick counter and every fleet and planet, in identifier order.
/// Per-tick fleet status is included as well.
#[must_use]
pub fn hash_arena(arena: &Arena) -> u64 {
    let mut hasher = DefaultHasher::new();

    arena.current_tick().hash(&mut hasher);

    arena.fleet_count().hash(&mut hasher);
    for fleet in arena.fleets_sorted() {
        hash_fleet(fleet, &mut hasher);
    }

    arena.planet_count().hash(&mut hasher);
    for planet in arena.planets_sorted() {
        hash_planet(planet, &mut hasher);
    }

    hasher.finish()
}

fn hash_fleet<H: Hasher>(fleet: &Fleet, hasher: &mut H) {
    fleet.id.hash(hasher);
    fleet.team.hash(hasher);
    fleet.position.x().to_bits().hash(hasher);
    fleet.position.y().to_bits().hash(hasher);
    fleet.strength.hash(hasher);
    fleet.destination.hash(hasher);
    fleet.split.hash(hasher);
    fleet.status.bits().hash(hasher);
}

fn hash_planet<H: Hasher>(planet: &Planet, hasher: &mut H) {
    planet.id.hash(hasher);
    planet.position.x().to_bits().hash(hasher);
    planet.position.y().to_bits().hash(hasher);
    planet.production_speed.hash(hasher);
    planet.remaining_until_new_ship.hash(hasher);
    planet.defending_fleet.hash(hasher);
}
