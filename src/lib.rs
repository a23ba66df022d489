// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Monpoke: a text-command driven, two-team creature battle simulator.
//!
//! Each input line is one command. Teams are formed with `CREATE`, each side
//! puts a creature in the ring with `ICHOOSEYOU`, and the sides then trade
//! `ATTACK`s until one team has nothing left standing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Session (line feeding, halting)   │
//! ├─────────────────────────────────────┤
//! │ Parser → MatchController → Narration│
//! ├─────────────────────────────────────┤
//! │ MatchState ⊃ Team ⊃ Creature        │
//! └─────────────────────────────────────┘
//! ```

pub mod command;
pub mod controller;
pub mod error;
pub mod game;
pub mod narration;
pub mod session;

pub use command::{parse, Command};
pub use controller::MatchController;
pub use error::{MatchError, MatchResult, ParseError, Stat};
pub use game::{Creature, MatchPhase, MatchState, Team, TeamId};
pub use narration::{Event, Narration};
pub use session::{Entry, Session, SessionConfig, SessionEnd, Transcript};
