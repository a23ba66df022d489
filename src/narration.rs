//! Narrated results of executed commands.

use std::fmt;

use serde::Serialize;

/// One clause of a command's narration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// A creature joined a team.
    Assigned {
        /// Creature name.
        creature: String,
        /// Team name.
        team: String,
    },
    /// A creature was put in the ring.
    Entered {
        /// Creature name.
        creature: String,
    },
    /// One creature hit another.
    Attacked {
        /// Attacking creature name.
        attacker: String,
        /// Defending creature name.
        defender: String,
        /// Health removed from the defender.
        damage: i32,
    },
    /// A creature's health dropped below 1.
    Defeated {
        /// Creature name.
        creature: String,
    },
    /// A team won the match.
    Winner {
        /// Team name.
        team: String,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Assigned { creature, team } => {
                write!(f, "{creature} has been assigned to team {team}!")
            }
            Event::Entered { creature } => write!(f, "{creature} has entered the battle!"),
            Event::Attacked {
                attacker,
                defender,
                damage,
            } => write!(f, "{attacker} attacked {defender} for {damage} damage!"),
            Event::Defeated { creature } => write!(f, "{creature} has been defeated!"),
            Event::Winner { team } => write!(f, "{team} is the winner!"),
        }
    }
}

/// Everything a successful command reports, in order.
///
/// Renders as one line per event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Narration {
    events: Vec<Event>,
}

impl Narration {
    /// Append an event.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Events in order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Check if the narration declares a winner.
    #[must_use]
    pub fn declares_winner(&self) -> bool {
        self.events.iter().any(|e| matches!(e, Event::Winner { .. }))
    }
}

impl From<Event> for Narration {
    fn from(event: Event) -> Self {
        Self {
            events: vec![event],
        }
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{event}")?;
        }
        Ok(())
    }
}
