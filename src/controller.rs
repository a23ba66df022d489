//! Command execution.
//!
//! The controller owns the [`MatchState`] and applies one [`Command`] at a
//! time. Every check runs before any mutation, so a rejected command leaves
//! the state exactly as it was.

use tracing::{debug, info};

use crate::command::{self, Command};
use crate::error::{MatchError, MatchResult};
use crate::game::{Creature, MatchState, Team};
use crate::narration::{Event, Narration};

/// Applies commands to a match and narrates the results.
#[derive(Debug, Clone, Default)]
pub struct MatchController {
    state: MatchState,
}

impl MatchController {
    /// Create a controller for a fresh match.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing state.
    #[must_use]
    pub fn with_state(state: MatchState) -> Self {
        Self { state }
    }

    /// Current match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Consume the controller, returning the match state.
    #[must_use]
    pub fn into_state(self) -> MatchState {
        self.state
    }

    /// Parse and execute one raw command line.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Parse`] for an unrecognized line, or any error
    /// from [`MatchController::execute`].
    pub fn execute_line(&mut self, line: &str) -> MatchResult<Narration> {
        let command = command::parse(line)?;
        self.execute(&command)
    }

    /// Execute one command.
    ///
    /// After the command succeeds, a winner is announced if the team now on
    /// turn has no creature left standing.
    ///
    /// # Errors
    ///
    /// Returns the [`MatchError`] describing why the command was rejected.
    pub fn execute(&mut self, command: &Command) -> MatchResult<Narration> {
        if self.state.is_over() {
            return Err(MatchError::MatchOver);
        }
        debug!(%command, turn = self.state.turn(), "executing command");

        let mut narration = match command {
            Command::Create {
                team,
                creature,
                health,
                attack,
            } => self.create(team, creature, *health, *attack)?,
            Command::Choose { creature } => self.choose(creature)?,
            Command::Attack => self.attack()?,
        };

        if let Some(winner) = self.winning_team() {
            info!(winner, "match decided");
            narration.push(Event::Winner {
                team: winner.to_string(),
            });
        }
        Ok(narration)
    }

    fn create(
        &mut self,
        team: &str,
        creature: &str,
        health: Option<i32>,
        attack: Option<i32>,
    ) -> MatchResult<Narration> {
        self.state.check_team_slot(team)?;
        let mon = Creature::from_operands(creature, health, attack, team)?;
        if let Some(existing) = self.state.team(team) {
            existing.check_unique(creature)?;
        }

        self.state.add_team(team)?.add_creature(mon)?;
        Ok(Event::Assigned {
            creature: creature.to_string(),
            team: team.to_string(),
        }
        .into())
    }

    fn choose(&mut self, creature: &str) -> MatchResult<Narration> {
        if self.state.team_count() < 2 {
            return Err(MatchError::NotEnoughTeams);
        }

        // Lookup spans every team so an unknown name is reported before
        // ownership.
        let found = self
            .state
            .find_creature(creature)
            .ok_or_else(|| MatchError::CreatureNotFound {
                creature: creature.to_string(),
            })?;
        let current = self.state.current_team().map(Team::name);
        if current != Some(found.team()) {
            return Err(MatchError::WrongTeam {
                creature: creature.to_string(),
            });
        }
        if found.is_defeated() {
            return Err(MatchError::CreatureDefeated {
                creature: creature.to_string(),
            });
        }

        if let Some(team) = self.state.current_team_mut() {
            team.set_active(creature);
        }
        self.state.switch_turn();
        Ok(Event::Entered {
            creature: creature.to_string(),
        }
        .into())
    }

    fn attack(&mut self) -> MatchResult<Narration> {
        let attacker = self
            .state
            .current_team()
            .and_then(Team::active_creature)
            .ok_or(MatchError::NoActiveCreature)?;
        if attacker.is_defeated() {
            return Err(MatchError::AttackerDefeated {
                creature: attacker.name().to_string(),
            });
        }
        let attacker_name = attacker.name().to_string();
        let damage = attacker.attack();

        let defender = self
            .state
            .other_team_mut()
            .and_then(Team::active_creature_mut)
            .ok_or(MatchError::NoDefender)?;
        defender.take_damage(damage);
        let defender_name = defender.name().to_string();
        let defeated = defender.health() < 1;

        self.state.switch_turn();
        if self.state.current_team().is_some_and(Team::is_defeated) {
            self.state.finish();
        }

        let mut narration = Narration::from(Event::Attacked {
            attacker: attacker_name,
            defender: defender_name.clone(),
            damage,
        });
        if defeated {
            narration.push(Event::Defeated {
                creature: defender_name,
            });
        }
        Ok(narration)
    }

    fn winning_team(&self) -> Option<&str> {
        let current = self.state.current_team()?;
        if !current.is_defeated() {
            return None;
        }
        self.state.other_team().map(Team::name)
    }
}
