//! Game layer for Monpoke.
//!
//! Holds the data model of a match:
//! - Creatures with fixed attack power and depleting health
//! - Teams that own an ordered roster and one creature in the ring
//! - The match itself: both teams, whose turn it is, and whether it ended

mod creature;
mod invariants;
mod state;
mod team;

pub use creature::Creature;
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use state::{MatchPhase, MatchState, MAX_TEAMS};
pub use team::{Team, TeamId};
