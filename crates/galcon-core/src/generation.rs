//! Seeded initial state.
//!
//! Every game starts with one home planet per team (neutral included), each
//! garrisoned by a fleet of [`GameConfig::initial_strength`] ships standing on
//! the planet. Placement and production speed are random; the randomness comes
//! from an explicit generator so the same seed always builds the same map.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::arena::Arena;
use crate::config::GameConfig;
use crate::entity::{Position, Team};

/// Builds a starting arena from `rng`.
///
/// Coordinates are whole numbers in `[0, map_width] x [0, map_height]`.
#[allow(clippy::cast_precision_loss)]
pub fn random_arena<R: Rng>(config: &GameConfig, rng: &mut R) -> Arena {
    let mut arena = Arena::new();
    for team in Team::ALL {
        let x = rng.gen_range(0..=config.map_width);
        let y = rng.gen_range(0..=config.map_height);
        let production_speed = rng.gen_range(config.production_speed_range());
        let (planet, fleet) = arena.spawn_home(
            team,
            Position::new(x as f32, y as f32),
            config.initial_strength,
            production_speed,
        );
        debug!(%team, %planet, %fleet, x, y, production_speed, "home planet placed");
    }
    arena
}

/// Builds a starting arena from a seed, using [`ChaCha8Rng`].
#[must_use]
pub fn seeded_arena(config: &GameConfig, seed: u64) -> Arena {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_arena(config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_home_per_team() {
        let arena = seeded_arena(&GameConfig::default(), 7);
        assert_eq!(arena.planet_count(), Team::ALL.len());
        assert_eq!(arena.fleet_count(), Team::ALL.len());

        let mut teams: Vec<_> = arena
            .planet_ids_sorted()
            .map(|p| arena.planet_team(p).unwrap())
            .collect();
        teams.sort();
        assert_eq!(teams, Team::ALL.to_vec());
        assert!(arena.validate().is_ok());
    }

    #[test]
    fn garrisons_stand_on_their_planet() {
        let config = GameConfig::default();
        let arena = seeded_arena(&config, 99);
        for planet in arena.planets_sorted() {
            let garrison = arena.garrison(planet.id).unwrap();
            assert_eq!(garrison.position, planet.position);
            assert_eq!(garrison.strength, config.initial_strength);
            assert_eq!(garrison.destination, None);
        }
    }

    #[test]
    fn placement_respects_bounds() {
        let config = GameConfig {
            map_width: 40,
            map_height: 30,
            min_production_speed: 2,
            max_production_speed: 4,
            ..GameConfig::default()
        };
        for seed in 0..20 {
            let arena = seeded_arena(&config, seed);
            for planet in arena.planets_sorted() {
                assert!((0.0..=40.0).contains(&planet.position.x()));
                assert!((0.0..=30.0).contains(&planet.position.y()));
                assert!((2..=4).contains(&planet.production_speed));
                assert_eq!(planet.remaining_until_new_ship, planet.production_speed);
            }
        }
    }

    #[test]
    fn same_seed_same_map() {
        let config = GameConfig::default();
        assert_eq!(seeded_arena(&config, 5), seeded_arena(&config, 5));
    }

    #[test]
    fn different_seeds_differ() {
        let config = GameConfig::default();
        assert_ne!(seeded_arena(&config, 5), seeded_arena(&config, 6));
    }
}
