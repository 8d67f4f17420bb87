//! # Galcon Core
//!
//! Deterministic tick-resolution engine for a Galcon-style space conquest game.
//!
//! Players own planets, planets build ships, and ships fly between planets in
//! fleets to reinforce friends or capture enemies. This crate advances such a
//! game one discrete tick at a time. It does no rendering, I/O or networking:
//! callers hand [`Game::step`](game::Game::step) a list of move orders and get
//! back the new state plus a report of what happened.
//!
//! ## Architecture
//!
//! - **Entities**: [`Fleet`](entity::Fleet)s and [`Planet`](entity::Planet)s,
//!   stored by identifier in an [`Arena`](arena::Arena)
//! - **Phases**: command, arrival, departure, movement, reinforce, combat,
//!   production; see [`phase`]
//! - **Game**: owns the arena and runs the phases atomically
//!
//! ## Usage
//!
//! ```
//! use galcon_core::config::GameConfig;
//! use galcon_core::game::Game;
//!
//! let mut game = Game::new(GameConfig::default(), 42);
//! for _ in 0..10 {
//!     game.step(&[]).unwrap();
//! }
//! assert_eq!(game.tick(), 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod arena;
pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod game;
pub mod generation;
pub mod hash;
pub mod phase;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use arena::Arena;
pub use config::GameConfig;
pub use entity::{Fleet, FleetId, MoveCommand, Planet, PlanetId, Position, Team};
pub use error::{GameError, Result};
pub use event::{TickEvent, TickReport};
pub use game::Game;
