//! Match invariants - sanity checks that detect bugs.
//!
//! The controller should never produce a state that violates these. They are
//! used by tests and the fuzz targets.

use std::collections::HashSet;

use crate::game::{MatchState, MAX_TEAMS};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all match invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &MatchState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut push = |message: String| violations.push(InvariantViolation { message });

    if state.team_count() > MAX_TEAMS {
        push(format!(
            "Match has {} teams > max {MAX_TEAMS}",
            state.team_count()
        ));
    }

    let mut team_names = HashSet::new();
    for (index, team) in state.teams().iter().enumerate() {
        if usize::from(team.id()) != index + 1 {
            push(format!(
                "Team {} created at position {index} has id {}",
                team.name(),
                team.id()
            ));
        }
        if !team_names.insert(team.name()) {
            push(format!("Team name {} appears twice", team.name()));
        }

        let mut creature_names = HashSet::new();
        for creature in team.creatures() {
            if !creature_names.insert(creature.name()) {
                push(format!(
                    "Team {} has two creatures named {}",
                    team.name(),
                    creature.name()
                ));
            }
            if creature.team() != team.name() {
                push(format!(
                    "Creature {} on team {} claims owner {}",
                    creature.name(),
                    team.name(),
                    creature.team()
                ));
            }
            if creature.attack() < 1 {
                push(format!(
                    "Creature {} has attack {} < 1",
                    creature.name(),
                    creature.attack()
                ));
            }
        }

        if let Some(active) = team.active_name() {
            if team.creature(active).is_none() {
                push(format!(
                    "Team {} has unknown active creature {active}",
                    team.name()
                ));
            }
        }
    }

    if state.team_count() == MAX_TEAMS && state.current_team().is_none() {
        push(format!("Turn id {} names no team", state.turn()));
    }

    if state.is_over() && !state.current_team().is_some_and(crate::game::Team::is_defeated) {
        push("Match is over but the team on turn is not defeated".to_string());
    }

    violations
}

/// Assert all match invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &MatchState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Match invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &MatchState) {}
