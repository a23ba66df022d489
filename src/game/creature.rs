//! Creature state.

use crate::error::{MatchError, MatchResult, Stat};

/// A single combatant owned by one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    name: String,
    health: i32,
    attack: i32,
    team: String,
}

impl Creature {
    /// Create a creature with its starting health and attack power.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidCreature`] if either stat is below 1.
    /// Health is checked first.
    pub fn new(
        name: impl Into<String>,
        health: i32,
        attack: i32,
        team: impl Into<String>,
    ) -> MatchResult<Self> {
        Self::from_operands(name, Some(health), Some(attack), team)
    }

    /// Create a creature from parsed operands, where `None` marks a
    /// non-numeric token.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidCreature`] if either operand is missing or
    /// below 1.
    pub fn from_operands(
        name: impl Into<String>,
        health: Option<i32>,
        attack: Option<i32>,
        team: impl Into<String>,
    ) -> MatchResult<Self> {
        let health = require_positive(Stat::Health, health)?;
        let attack = require_positive(Stat::Attack, attack)?;
        Ok(Self {
            name: name.into(),
            health,
            attack,
            team: team.into(),
        })
    }

    /// Creature name, unique within its team.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remaining health. Zero or below means defeated.
    #[must_use]
    pub const fn health(&self) -> i32 {
        self.health
    }

    /// Damage dealt by each attack.
    #[must_use]
    pub const fn attack(&self) -> i32 {
        self.attack
    }

    /// Name of the owning team.
    #[must_use]
    pub fn team(&self) -> &str {
        &self.team
    }

    /// Check if this creature has no health left.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Subtract `amount` from health. Health is not floored at zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }
}

fn require_positive(stat: Stat, value: Option<i32>) -> MatchResult<i32> {
    match value {
        Some(v) if v >= 1 => Ok(v),
        _ => Err(MatchError::InvalidCreature { stat, value }),
    }
}
