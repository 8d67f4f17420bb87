//! The tick pipeline.
//!
//! A tick is a fixed sequence of phases. Each phase reads and mutates the
//! arena left behind by the previous one:
//!
//! 1. [`CommandPhase`]: apply move orders
//! 2. [`ArrivalPhase`]: drop orders that point a garrison at its own planet
//! 3. [`DeparturePhase`]: garrisons with an order stage a new fleet
//! 4. [`MovementPhase`]: fleets out of docking range fly toward their target
//! 5. [`ReinforcePhase`]: docked fleets feed friendly garrisons
//! 6. [`CombatPhase`]: docked fleets fight hostile garrisons
//! 7. [`ProductionPhase`]: player planets build ships
//!
//! # Invariants
//!
//! - Phases only ever visit player (non-neutral) fleets and planets.
//! - Phases never insert or remove fleets. Departures are staged in the
//!   [`TickContext`]; merged and destroyed fleets are flagged through
//!   [`FleetStatus`](crate::entity::FleetStatus). The game applies both after
//!   the last phase.
//! - A phase that fails aborts the tick.

mod arrival;
mod combat;
mod command;
mod departure;
mod movement;
mod production;
mod reinforce;

pub use arrival::ArrivalPhase;
pub use combat::CombatPhase;
pub use command::CommandPhase;
pub use departure::DeparturePhase;
pub use movement::{move_fleet, MovementPhase};
pub use production::ProductionPhase;
pub use reinforce::ReinforcePhase;

use crate::arena::Arena;
use crate::config::GameConfig;
use crate::entity::{Fleet, MoveCommand};
use crate::error::Result;
use crate::event::TickEvent;

/// Per-tick scratch state shared by all phases.
#[derive(Debug)]
pub struct TickContext<'a> {
    /// Balance constants.
    pub config: &'a GameConfig,
    /// Orders submitted for this tick, in submission order.
    pub commands: &'a [MoveCommand],
    /// Fleets created by departures, inserted after the last phase.
    pub staged: Vec<Fleet>,
    /// What happened so far.
    pub events: Vec<TickEvent>,
}

impl<'a> TickContext<'a> {
    /// Creates an empty context for one tick.
    #[must_use]
    pub fn new(config: &'a GameConfig, commands: &'a [MoveCommand]) -> Self {
        Self {
            config,
            commands,
            staged: Vec::new(),
            events: Vec::new(),
        }
    }
}

/// One step of the tick pipeline.
///
/// # Example
///
/// ```
/// use galcon_core::arena::Arena;
/// use galcon_core::error::Result;
/// use galcon_core::phase::{Phase, TickContext};
///
/// struct Noop;
///
/// impl Phase for Noop {
///     fn name(&self) -> &'static str {
///         "noop"
///     }
///
///     fn run(&self, _arena: &mut Arena, _ctx: &mut TickContext<'_>) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait Phase: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Runs the phase over the arena.
    ///
    /// # Errors
    ///
    /// Any [`GameError`](crate::error::GameError); the tick is abandoned.
    fn run(&self, arena: &mut Arena, ctx: &mut TickContext<'_>) -> Result<()>;
}

/// The standard seven-phase pipeline, in order.
#[must_use]
pub fn default_pipeline() -> Vec<Box<dyn Phase>> {
    vec![
        Box::new(CommandPhase),
        Box::new(ArrivalPhase),
        Box::new(DeparturePhase),
        Box::new(MovementPhase),
        Box::new(ReinforcePhase),
        Box::new(CombatPhase),
        Box::new(ProductionPhase),
    ]
}
