//! Per-tick fleet status flags.
//!
//! The pipeline never removes a fleet mid-tick. Phases mark fleets instead,
//! later phases skip marked fleets, and the final assembly step removes
//! everything flagged [`FleetStatus::MERGED`] or [`FleetStatus::DESTROYED`].

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// What happened to a fleet during the current tick.
    ///
    /// Cleared at the start of every tick.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct FleetStatus: u8 {
        /// Docked at a friendly planet and still donating strength.
        const MERGING = 1 << 0;
        /// Donated its last ship; removed at the end of the tick.
        const MERGED = 1 << 1;
        /// Lost a fight or was replaced as garrison; removed at the end of the tick.
        const DESTROYED = 1 << 2;
    }
}

impl FleetStatus {
    /// Returns `true` if the fleet leaves the arena at the end of the tick.
    #[must_use]
    pub fn is_removed(self) -> bool {
        self.intersects(Self::MERGED | Self::DESTROYED)
    }
}
