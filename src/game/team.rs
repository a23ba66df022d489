//! Team rosters.

use crate::error::{MatchError, MatchResult};
use crate::game::Creature;

/// Identifier for a team: 1 for the first team created, 2 for the second.
pub type TeamId = u8;

/// A named roster of creatures with at most one in the ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: String,
    id: TeamId,
    creatures: Vec<Creature>,
    active: Option<String>,
}

impl Team {
    /// Create an empty team.
    #[must_use]
    pub fn new(name: impl Into<String>, id: TeamId) -> Self {
        Self {
            name: name.into(),
            id,
            creatures: Vec::new(),
            active: None,
        }
    }

    /// Team name, unique within a match.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Team id, assigned in creation order.
    #[must_use]
    pub const fn id(&self) -> TeamId {
        self.id
    }

    /// Roster in insertion order.
    #[must_use]
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Name of the creature currently in the ring, if any.
    #[must_use]
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Look up an owned creature by name.
    #[must_use]
    pub fn creature(&self, name: &str) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.name() == name)
    }

    /// Look up an owned creature by name for mutation.
    #[must_use]
    pub fn creature_mut(&mut self, name: &str) -> Option<&mut Creature> {
        self.creatures.iter_mut().find(|c| c.name() == name)
    }

    /// The creature currently in the ring, if one was chosen.
    #[must_use]
    pub fn active_creature(&self) -> Option<&Creature> {
        self.active.as_deref().and_then(|name| self.creature(name))
    }

    /// The creature currently in the ring, for mutation.
    #[must_use]
    pub fn active_creature_mut(&mut self) -> Option<&mut Creature> {
        let name = self.active.clone()?;
        self.creature_mut(&name)
    }

    /// Append a creature to the roster.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::DuplicateCreature`] if the roster already holds a
    /// creature with the same name.
    pub fn add_creature(&mut self, creature: Creature) -> MatchResult<()> {
        self.check_unique(creature.name())?;
        self.creatures.push(creature);
        Ok(())
    }

    /// Fail if `name` is already on the roster.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::DuplicateCreature`] on a name collision.
    pub fn check_unique(&self, name: &str) -> MatchResult<()> {
        if self.creature(name).is_some() {
            return Err(MatchError::DuplicateCreature {
                team: self.name.clone(),
                creature: name.to_string(),
            });
        }
        Ok(())
    }

    /// Put an owned creature in the ring.
    ///
    /// Returns `false` and leaves the team unchanged if no owned creature has
    /// that name.
    pub fn set_active(&mut self, name: &str) -> bool {
        if self.creature(name).is_none() {
            return false;
        }
        self.active = Some(name.to_string());
        true
    }

    /// Check if every owned creature has no health left.
    ///
    /// An empty roster counts as defeated.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.creatures.iter().all(Creature::is_defeated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mon(name: &str, health: i32) -> Creature {
        Creature::new(name, health, 2, "Rocket").unwrap()
    }

    #[test]
    fn test_team_creation() {
        let team = Team::new("Rocket", 1);
        assert_eq!(team.name(), "Rocket");
        assert_eq!(team.id(), 1);
        assert!(team.creatures().is_empty());
        assert!(team.active_name().is_none());
        assert!(team.active_creature().is_none());
    }

    #[test]
    fn test_add_creature_keeps_order() {
        let mut team = Team::new("Rocket", 1);
        team.add_creature(mon("Spreekachu", 1)).unwrap();
        team.add_creature(mon("Snorflax", 1)).unwrap();
        let names: Vec<_> = team.creatures().iter().map(Creature::name).collect();
        assert_eq!(names, ["Spreekachu", "Snorflax"]);
        assert_eq!(team.creatures()[0].team(), "Rocket");
    }

    #[test]
    fn test_duplicate_creature_rejected() {
        let mut team = Team::new("Rocket", 1);
        team.add_creature(mon("Meekachu", 1)).unwrap();
        let err = team.add_creature(mon("Meekachu", 3)).unwrap_err();
        assert!(matches!(err, MatchError::DuplicateCreature { .. }));
        assert_eq!(team.creatures().len(), 1);
    }

    #[test]
    fn test_active_creature() {
        let mut team = Team::new("Rocket", 1);
        team.add_creature(mon("Meekachu", 1)).unwrap();
        assert!(!team.set_active("Flonyx"));
        assert!(team.active_name().is_none());

        assert!(team.set_active("Meekachu"));
        assert_eq!(team.active_creature().map(Creature::name), Some("Meekachu"));
    }

    #[test]
    fn test_is_defeated_only_when_all_down() {
        let mut team = Team::new("Rocket", 1);
        team.add_creature(mon("Meekachu", 2)).unwrap();
        team.add_creature(mon("Snorflax", 2)).unwrap();
        assert!(!team.is_defeated());

        team.creature_mut("Meekachu").unwrap().take_damage(2);
        assert!(!team.is_defeated());

        team.creature_mut("Snorflax").unwrap().take_damage(3);
        assert!(team.is_defeated());
    }
}
