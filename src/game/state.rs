//! Match state management.

use crate::error::{MatchError, MatchResult};
use crate::game::{Creature, Team, TeamId};

/// Maximum number of teams in a match.
pub const MAX_TEAMS: usize = 2;

/// Coarse position of a match in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Fewer than two teams exist.
    Setup,
    /// Both teams exist but not both have a creature in the ring.
    Ready,
    /// Both teams have a creature in the ring.
    Combat,
    /// A winner has been declared. Terminal.
    Over,
}

/// Complete match state.
///
/// Teams are kept in creation order; a team's id is its position plus one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    teams: Vec<Team>,
    turn: TeamId,
    over: bool,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Create an empty match with team 1 on turn.
    #[must_use]
    pub fn new() -> Self {
        Self {
            teams: Vec::with_capacity(MAX_TEAMS),
            turn: 1,
            over: false,
        }
    }

    /// All teams in creation order.
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Number of teams created so far.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Id of the team whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> TeamId {
        self.turn
    }

    /// Check if a winner has been declared.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// Get a team by name.
    #[must_use]
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name() == name)
    }

    /// Get a mutable reference to a team by name.
    #[must_use]
    pub fn team_mut(&mut self, name: &str) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.name() == name)
    }

    /// The team whose turn it is.
    #[must_use]
    pub fn current_team(&self) -> Option<&Team> {
        self.teams.iter().find(|t| t.id() == self.turn)
    }

    /// The team whose turn it is, for mutation.
    #[must_use]
    pub fn current_team_mut(&mut self) -> Option<&mut Team> {
        let turn = self.turn;
        self.teams.iter_mut().find(|t| t.id() == turn)
    }

    /// The team waiting for its turn.
    #[must_use]
    pub fn other_team(&self) -> Option<&Team> {
        self.teams.iter().find(|t| t.id() != self.turn)
    }

    /// The team waiting for its turn, for mutation.
    #[must_use]
    pub fn other_team_mut(&mut self) -> Option<&mut Team> {
        let turn = self.turn;
        self.teams.iter_mut().find(|t| t.id() != turn)
    }

    /// Check whether a new team named `name` could still join.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::TooManyTeams`] if `name` is unknown and the match
    /// is full.
    pub fn check_team_slot(&self, name: &str) -> MatchResult<()> {
        if self.team(name).is_none() && self.teams.len() >= MAX_TEAMS {
            return Err(MatchError::TooManyTeams {
                team: name.to_string(),
            });
        }
        Ok(())
    }

    /// Get the team named `name`, creating it with the next id if unseen.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::TooManyTeams`] if `name` would be a third team.
    pub fn add_team(&mut self, name: &str) -> MatchResult<&mut Team> {
        self.check_team_slot(name)?;
        let index = match self.teams.iter().position(|t| t.name() == name) {
            Some(index) => index,
            None => {
                // At most MAX_TEAMS entries, so the id always fits.
                let id = TeamId::try_from(self.teams.len() + 1).unwrap_or(TeamId::MAX);
                tracing::info!(team = name, id, "team joined");
                self.teams.push(Team::new(name, id));
                self.teams.len() - 1
            }
        };
        Ok(&mut self.teams[index])
    }

    /// Hand the turn to the other team.
    pub fn switch_turn(&mut self) {
        self.turn = if self.turn == 1 { 2 } else { 1 };
    }

    /// Mark the match as over. Never reset.
    pub(crate) fn finish(&mut self) {
        self.over = true;
    }

    /// Find a creature by name across all teams.
    ///
    /// Teams are searched in creation order, then each roster in insertion
    /// order; the first match wins.
    #[must_use]
    pub fn find_creature(&self, name: &str) -> Option<&Creature> {
        self.teams
            .iter()
            .flat_map(Team::creatures)
            .find(|c| c.name() == name)
    }

    /// Check if both teams exist and at least one has a creature in the ring.
    #[must_use]
    pub fn combat_started(&self) -> bool {
        self.teams.len() == MAX_TEAMS && self.teams.iter().any(|t| t.active_name().is_some())
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        if self.over {
            MatchPhase::Over
        } else if self.teams.len() < MAX_TEAMS {
            MatchPhase::Setup
        } else if self.teams.iter().all(|t| t.active_name().is_some()) {
            MatchPhase::Combat
        } else {
            MatchPhase::Ready
        }
    }

    /// Name of the winning team once the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        if !self.over {
            return None;
        }
        self.other_team().map(Team::name)
    }
}
