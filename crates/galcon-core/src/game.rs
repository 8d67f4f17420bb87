//! The game: owns the arena and runs the tick pipeline.
//!
//! `Game::step` executes one tick:
//!
//! 1. **VALIDATE**: every command must name a live fleet and a planet
//! 2. **COPY**: the scratch arena is overwritten with the current state
//! 3. **PHASES**: the seven phases run over the scratch arena, in order
//! 4. **ASSEMBLE**: staged departures are inserted, merged and destroyed
//!    fleets are removed, the tick counter advances
//! 5. **SWAP**: the scratch arena becomes the current state
//!
//! A failure anywhere before the swap leaves the current state untouched.
//!
//! # Example
//!
//! ```
//! use galcon_core::config::GameConfig;
//! use galcon_core::game::Game;
//!
//! let mut game = Game::new(GameConfig::default(), 42);
//!
//! // Send every player's home garrison to the next player's home planet.
//! let planets: Vec<_> = game.player_planets().map(|p| (p.id, p.defending_fleet)).collect();
//! let commands: Vec<_> = planets
//!     .iter()
//!     .zip(planets.iter().cycle().skip(1))
//!     .map(|(&(_, fleet), &(target, _))| {
//!         game.fleet(fleet).unwrap().move_to(target, false)
//!     })
//!     .collect();
//!
//! let report = game.step(&commands).unwrap();
//! assert_eq!(report.tick, 1);
//! assert_eq!(report.departed().len(), planets.len());
//! ```

use std::fmt;

use tracing::{debug, warn};

use crate::arena::Arena;
use crate::config::GameConfig;
use crate::entity::{Fleet, FleetId, FleetStatus, MoveCommand, Planet, PlanetId};
use crate::error::Result;
use crate::event::TickReport;
use crate::generation::seeded_arena;
use crate::phase::{default_pipeline, Phase, TickContext};

/// A running game.
///
/// # Double Buffering
///
/// `Game` keeps two arenas. Each tick is resolved into `next`, a copy of
/// `current`; only a tick that completes is swapped in. Reusing `next`
/// across ticks keeps its allocations.
pub struct Game {
    /// Authoritative state.
    current: Arena,
    /// Scratch state for the tick in progress.
    next: Arena,
    /// Balance constants.
    config: GameConfig,
    /// The tick pipeline, in execution order.
    phases: Vec<Box<dyn Phase>>,
    /// Seed the map was generated from, if it was generated.
    seed: Option<u64>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("current", &self.current)
            .field("config", &self.config)
            .field(
                "phases",
                &self.phases.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Starts a game on a map generated from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use galcon_core::config::GameConfig;
    /// use galcon_core::game::Game;
    ///
    /// let game = Game::new(GameConfig::default(), 12345);
    /// assert_eq!(game.tick(), 0);
    /// assert_eq!(game.seed(), Some(12345));
    /// ```
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let arena = seeded_arena(&config, seed);
        let mut game = Self::from_parts(config, arena);
        game.seed = Some(seed);
        game
    }

    /// Starts a game on a prepared arena.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem [`Arena::validate`] finds.
    pub fn from_arena(config: GameConfig, arena: Arena) -> Result<Self> {
        arena.validate()?;
        Ok(Self::from_parts(config, arena))
    }

    fn from_parts(config: GameConfig, arena: Arena) -> Self {
        Self {
            next: arena.clone(),
            current: arena,
            config,
            phases: default_pipeline(),
            seed: None,
        }
    }

    /// Advances the game by one tick.
    ///
    /// Commands are applied in order; a later command for the same fleet
    /// overrides an earlier one. Ownership is not checked: any fleet can be
    /// ordered by any caller.
    ///
    /// # Errors
    ///
    /// - [`GameError::UnknownFleet`](crate::error::GameError::UnknownFleet) /
    ///   [`GameError::UnknownPlanet`](crate::error::GameError::UnknownPlanet)
    ///   if a command names something that does not exist
    /// - any invariant violation raised by a phase
    ///
    /// On error the game state is exactly what it was before the call.
    pub fn step(&mut self, commands: &[MoveCommand]) -> Result<TickReport> {
        let tick = self.current.current_tick() + 1;

        if let Err(err) = self.validate_commands(commands) {
            warn!(tick, error = %err, "rejected commands");
            return Err(err);
        }

        self.next.clone_from(&self.current);
        match Self::resolve(&self.phases, &mut self.next, &self.config, commands) {
            Ok(report) => {
                std::mem::swap(&mut self.current, &mut self.next);
                debug!(
                    tick = report.tick,
                    events = report.events.len(),
                    fleets = self.current.fleet_count(),
                    "tick resolved"
                );
                Ok(report)
            }
            Err(err) => {
                warn!(tick, error = %err, "tick aborted");
                Err(err)
            }
        }
    }

    fn validate_commands(&self, commands: &[MoveCommand]) -> Result<()> {
        for command in commands {
            self.current.try_fleet(command.fleet)?;
            self.current.try_planet(command.destination)?;
        }
        Ok(())
    }

    /// Runs the pipeline over `arena` and assembles the result.
    fn resolve(
        phases: &[Box<dyn Phase>],
        arena: &mut Arena,
        config: &GameConfig,
        commands: &[MoveCommand],
    ) -> Result<TickReport> {
        for fleet in arena.fleets_sorted_mut() {
            fleet.status = FleetStatus::empty();
        }

        let mut ctx = TickContext::new(config, commands);
        for phase in phases {
            phase.run(arena, &mut ctx)?;
        }

        for fleet in ctx.staged {
            arena.insert_fleet(fleet);
        }
        let removed: Vec<FleetId> = arena
            .fleets_sorted()
            .filter(|f| f.is_removed())
            .map(|f| f.id)
            .collect();
        for id in removed {
            debug_assert!(!arena.is_garrison(id), "removing a live garrison");
            arena.despawn_fleet(id);
        }

        arena.advance_tick();
        Ok(TickReport {
            tick: arena.current_tick(),
            events: ctx.events,
        })
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.current
    }

    /// Mutable access to the current state, for scenario setup.
    ///
    /// Avoid this between ticks of a running game; orders go through
    /// [`Game::step`].
    #[must_use]
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.current
    }

    /// Balance constants in use.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of completed ticks.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.current.current_tick()
    }

    /// Seed the map was generated from, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// All fleets, neutral included.
    pub fn fleets(&self) -> impl Iterator<Item = &Fleet> + '_ {
        self.current.fleets_sorted()
    }

    /// Fleets owned by players.
    pub fn player_fleets(&self) -> impl Iterator<Item = &Fleet> + '_ {
        self.current.player_fleets()
    }

    /// All planets, neutral included.
    pub fn planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.current.planets_sorted()
    }

    /// Planets owned by players.
    pub fn player_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.current.player_planets()
    }

    /// A fleet by identifier.
    #[must_use]
    pub fn fleet(&self, id: FleetId) -> Option<&Fleet> {
        self.current.fleet(id)
    }

    /// A planet by identifier.
    #[must_use]
    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.current.planet(id)
    }

    /// The player planet garrisoned by `defender`, if any.
    #[must_use]
    pub fn find_planet(&self, defender: FleetId) -> Option<&Planet> {
        self.current.find_planet(defender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Position, Team};
    use crate::error::GameError;
    use crate::event::TickEvent;
    use crate::tests::helpers::{duel, test_config};

    #[test]
    fn new_game_starts_at_tick_zero() {
        let game = Game::new(GameConfig::default(), 3);
        assert_eq!(game.tick(), 0);
        assert_eq!(game.planets().count(), Team::ALL.len());
        assert_eq!(game.player_planets().count(), Team::ALL.len() - 1);
        assert_eq!(game.player_fleets().count(), Team::ALL.len() - 1);
    }

    #[test]
    fn empty_step_advances_tick() {
        let d = duel(10, 3);
        let mut game = Game::from_arena(test_config(), d.arena).unwrap();
        let report = game.step(&[]).unwrap();
        assert_eq!(report.tick, 1);
        assert_eq!(game.tick(), 1);
    }

    #[test]
    fn from_arena_rejects_broken_state() {
        let mut d = duel(10, 3);
        d.arena.despawn_fleet(d.blue_garrison);
        let err = Game::from_arena(test_config(), d.arena).unwrap_err();
        assert_eq!(
            err,
            GameError::MissingGarrison {
                planet: d.blue,
                fleet: d.blue_garrison
            }
        );
    }

    #[test]
    fn unknown_fleet_leaves_state_untouched() {
        let d = duel(10, 3);
        let blue = d.blue;
        let mut game = Game::from_arena(test_config(), d.arena).unwrap();
        let before = game.arena().clone();

        let err = game
            .step(&[MoveCommand::new(FleetId::new(500), blue, false)])
            .unwrap_err();
        assert_eq!(err, GameError::UnknownFleet(FleetId::new(500)));
        assert_eq!(game.arena(), &before);
    }

    #[test]
    fn failing_phase_leaves_state_untouched() {
        struct Explode;
        impl Phase for Explode {
            fn name(&self) -> &'static str {
                "explode"
            }
            fn run(&self, arena: &mut Arena, _ctx: &mut TickContext<'_>) -> Result<()> {
                let id = arena.fleet_ids_sorted().next().unwrap_or(FleetId::new(0));
                Err(GameError::MissingDestination(id))
            }
        }

        let d = duel(10, 3);
        let (red_garrison, blue) = (d.red_garrison, d.blue);
        let mut game = Game::from_arena(test_config(), d.arena).unwrap();
        game.phases.push(Box::new(Explode));
        let before = game.arena().clone();

        let result = game.step(&[MoveCommand::new(red_garrison, blue, false)]);
        assert!(matches!(result, Err(GameError::MissingDestination(_))));
        assert_eq!(game.arena(), &before);
        assert_eq!(game.tick(), 0);
    }

    #[test]
    fn departures_join_the_arena_after_the_tick() {
        let d = duel(10, 3);
        let (red, red_garrison, blue) = (d.red, d.red_garrison, d.blue);
        let mut game = Game::from_arena(test_config(), d.arena).unwrap();

        let report = game
            .step(&[MoveCommand::new(red_garrison, blue, false)])
            .unwrap();
        let departed = report.departed();
        assert_eq!(departed.len(), 1);

        let fleet = game.fleet(departed[0]).unwrap();
        assert_eq!(fleet.strength, 10);
        // Staged fleets do not move in the tick they were created.
        assert_eq!(fleet.position, game.planet(red).unwrap().position);
        assert_eq!(game.fleet(red_garrison).unwrap().strength, 0);
        assert_eq!(game.find_planet(red_garrison).map(|p| p.id), Some(red));
    }

    #[test]
    fn merged_fleets_leave_the_arena() {
        let mut d = duel(10, 3);
        let donor = d
            .arena
            .spawn_fleet(Team::Red, Position::new(5.0, 0.0), 2, Some(d.red));
        let mut game = Game::from_arena(test_config(), d.arena).unwrap();

        let report = game.step(&[]).unwrap();
        assert!(game.fleet(donor).is_none());
        assert_eq!(report.removed(), vec![donor]);
        assert_eq!(game.fleet(d.red_garrison).unwrap().strength, 12);
    }

    #[test]
    fn status_is_cleared_each_tick() {
        let mut d = duel(10, 3);
        let donor = d
            .arena
            .spawn_fleet(Team::Red, Position::new(5.0, 0.0), 9, Some(d.red));
        let mut game = Game::from_arena(test_config(), d.arena).unwrap();

        game.step(&[]).unwrap();
        assert!(game.fleet(donor).unwrap().status.contains(FleetStatus::MERGING));
        game.arena_mut().fleet_mut(donor).unwrap().destination = None;
        game.step(&[]).unwrap();
        assert!(game.fleet(donor).unwrap().status.is_empty());
    }

    #[test]
    fn report_lists_capture() {
        let mut d = duel(10, 1);
        let raider = d
            .arena
            .spawn_fleet(Team::Red, Position::new(90.0, 0.0), 5, Some(d.blue));
        let blue = d.blue;
        let mut game = Game::from_arena(test_config(), d.arena).unwrap();

        let report = game.step(&[]).unwrap();
        assert_eq!(report.captures(), vec![blue]);
        assert!(report.events.contains(&TickEvent::PlanetCaptured {
            planet: blue,
            previous_owner: Team::Blue,
            new_owner: Team::Red,
            garrison: raider,
        }));
        assert_eq!(game.find_planet(raider).map(|p| p.id), Some(blue));
    }

    #[test]
    fn debug_lists_phase_names() {
        let game = Game::new(GameConfig::default(), 1);
        let text = format!("{game:?}");
        assert!(text.contains("departure"));
        assert!(text.contains("seed: Some(1)"));
    }
}
