//! Test fixtures and assertions.
//!
//! The standard fixture is a two-planet duel:
//! - Red home at (0, 0), production speed 5 (size 9)
//! - Blue home at (100, 0), production speed 5 (size 9)
//!
//! With [`test_config`] (speed 5, attack 3) a fleet docks at either planet
//! from 14 units away.

use crate::arena::Arena;
use crate::config::GameConfig;
use crate::entity::{Fleet, FleetId, MoveCommand, PlanetId, Position, Strength, Team};
use crate::error::Result;
use crate::event::TickEvent;
use crate::game::Game;
use crate::phase::{Phase, TickContext};

/// Two home planets facing each other.
#[derive(Debug, Clone)]
pub struct Duel {
    pub arena: Arena,
    pub red: PlanetId,
    pub blue: PlanetId,
    pub red_garrison: FleetId,
    pub blue_garrison: FleetId,
}

/// Builds the standard duel with the given garrison strengths.
pub fn duel(red_strength: Strength, blue_strength: Strength) -> Duel {
    let mut arena = Arena::new();
    let (red, red_garrison) = arena.spawn_home(Team::Red, Position::new(0.0, 0.0), red_strength, 5);
    let (blue, blue_garrison) =
        arena.spawn_home(Team::Blue, Position::new(100.0, 0.0), blue_strength, 5);
    Duel {
        arena,
        red,
        blue,
        red_garrison,
        blue_garrison,
    }
}

/// Fleet speed 5, attack speed 3.
pub fn test_config() -> GameConfig {
    GameConfig::with_speeds(5.0, 3)
}

/// Wraps the duel in a [`Game`].
pub fn duel_game(d: &Duel) -> Game {
    Game::from_arena(test_config(), d.arena.clone()).expect("duel arena is valid")
}

/// Runs a single phase and returns what it staged and recorded.
pub fn run_phase(
    phase: &dyn Phase,
    arena: &mut Arena,
    config: &GameConfig,
    commands: &[MoveCommand],
) -> Result<(Vec<Fleet>, Vec<TickEvent>)> {
    let mut ctx = TickContext::new(config, commands);
    phase.run(arena, &mut ctx)?;
    Ok((ctx.staged, ctx.events))
}

/// Strength of a live fleet.
pub fn strength_of(arena: &Arena, id: FleetId) -> Strength {
    arena
        .fleet(id)
        .unwrap_or_else(|| panic!("fleet {id} should be alive"))
        .strength
}

/// Sum of strength over every fleet of `team`.
pub fn team_strength(arena: &Arena, team: Team) -> i64 {
    arena
        .fleets_sorted()
        .filter(|f| f.team == team)
        .map(|f| i64::from(f.strength))
        .sum()
}

/// Checks the post-tick invariants:
/// - every planet has exactly one live garrison
/// - nothing flagged for removal survived assembly
/// - garrisons are never negative, everything else is strictly positive
pub fn assert_invariants(arena: &Arena) {
    arena.validate().expect("arena invariants hold");
    for fleet in arena.fleets_sorted() {
        assert!(!fleet.is_removed(), "fleet {} should have been removed", fleet.id);
        if arena.is_garrison(fleet.id) {
            assert!(fleet.strength >= 0, "garrison {} is negative", fleet.id);
        } else {
            assert!(fleet.strength > 0, "fleet {} has no ships", fleet.id);
            assert!(fleet.destination.is_some(), "fleet {} is adrift", fleet.id);
        }
    }
}
