//! Error types for parsing and executing match commands.

use std::fmt;

/// Creature statistic named in a construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    /// Starting health.
    Health,
    /// Attack power.
    Attack,
}

impl Stat {
    /// Short label used in user-facing messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Stat::Health => "HP",
            Stat::Attack => "AP",
        }
    }
}

/// A raw line that matches no command grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line contains no tokens.
    Empty,
    /// The first token is not a known verb.
    UnknownVerb(String),
    /// A required operand is absent.
    MissingOperand {
        /// Verb being parsed.
        verb: &'static str,
        /// Name of the missing operand.
        operand: &'static str,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Empty command"),
            ParseError::UnknownVerb(verb) => write!(f, "Unrecognized command: {verb}"),
            ParseError::MissingOperand { verb, operand } => {
                write!(f, "{verb} is missing its {operand}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Reasons a command is rejected by the controller.
///
/// A rejected command leaves the match state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Health or attack below 1 (or not a number) at creation.
    InvalidCreature {
        /// Offending statistic.
        stat: Stat,
        /// Parsed value, `None` when the operand was not numeric.
        value: Option<i32>,
    },
    /// A team already has a creature with this name.
    DuplicateCreature {
        /// Team that owns the existing creature.
        team: String,
        /// Creature name.
        creature: String,
    },
    /// A third distinct team name was introduced.
    TooManyTeams {
        /// Rejected team name.
        team: String,
    },
    /// CHOOSE before both teams exist.
    NotEnoughTeams,
    /// CHOOSE named a creature that no team owns.
    CreatureNotFound {
        /// Requested creature name.
        creature: String,
    },
    /// CHOOSE named a creature owned by the team not on turn.
    WrongTeam {
        /// Requested creature name.
        creature: String,
    },
    /// CHOOSE named a creature with no health left.
    CreatureDefeated {
        /// Requested creature name.
        creature: String,
    },
    /// ATTACK before the acting team chose a creature.
    NoActiveCreature,
    /// ATTACK with an active creature that has no health left.
    AttackerDefeated {
        /// Active creature name.
        creature: String,
    },
    /// ATTACK before the opposing team chose a creature.
    NoDefender,
    /// Any command after a winner was declared.
    MatchOver,
    /// The raw line could not be parsed.
    Parse(ParseError),
}

impl MatchError {
    /// Stable machine-readable code for this error kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            MatchError::InvalidCreature { .. } => "invalid_creature",
            MatchError::DuplicateCreature { .. } => "duplicate_creature",
            MatchError::TooManyTeams { .. } => "too_many_teams",
            MatchError::NotEnoughTeams => "not_enough_teams",
            MatchError::CreatureNotFound { .. } => "creature_not_found",
            MatchError::WrongTeam { .. } => "wrong_team",
            MatchError::CreatureDefeated { .. } => "creature_defeated",
            MatchError::NoActiveCreature => "no_active_creature",
            MatchError::AttackerDefeated { .. } => "attacker_defeated",
            MatchError::NoDefender => "no_defender",
            MatchError::MatchOver => "match_over",
            MatchError::Parse(_) => "parse_failure",
        }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidCreature { stat, .. } => {
                write!(f, "MonPoke must be initialized with 1 or greater {}", stat.label())
            }
            MatchError::DuplicateCreature { team, creature } => {
                write!(f, "Team {team} already has a Mon named {creature}")
            }
            MatchError::TooManyTeams { team } => {
                write!(f, "Team {team} may not join, the match already has two teams")
            }
            MatchError::NotEnoughTeams => {
                write!(f, "You may not choose a Mon until another team arrives")
            }
            MatchError::CreatureNotFound { creature } => {
                write!(f, "There is no Mon named {creature}")
            }
            MatchError::WrongTeam { .. } => write!(f, "You may not choose the other team's Monpoke"),
            MatchError::CreatureDefeated { .. } => write!(f, "You may not choose a defeated Mon"),
            MatchError::NoActiveCreature => {
                write!(f, "You must choose a Mon before trying to attack")
            }
            MatchError::AttackerDefeated { .. } => {
                write!(f, "You may not attack with a defeated Mon")
            }
            MatchError::NoDefender => {
                write!(f, "You may not attack until the other team has chosen a Mon")
            }
            MatchError::MatchOver => write!(f, "The match is already over"),
            MatchError::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for MatchError {
    fn from(e: ParseError) -> Self {
        MatchError::Parse(e)
    }
}

/// Result type for controller operations.
pub type MatchResult<T> = Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_creature_messages() {
        let err = MatchError::InvalidCreature {
            stat: Stat::Health,
            value: Some(0),
        };
        assert_eq!(err.to_string(), "MonPoke must be initialized with 1 or greater HP");

        let err = MatchError::InvalidCreature {
            stat: Stat::Attack,
            value: None,
        };
        assert_eq!(err.to_string(), "MonPoke must be initialized with 1 or greater AP");
    }

    #[test]
    fn test_parse_error_wraps_with_source() {
        use std::error::Error;

        let err = MatchError::from(ParseError::UnknownVerb("DANCE".to_string()));
        assert_eq!(err.code(), "parse_failure");
        assert_eq!(err.to_string(), "Unrecognized command: DANCE");
        assert!(err.source().is_some());
        assert!(MatchError::NoDefender.source().is_none());
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            MatchError::NotEnoughTeams,
            MatchError::NoActiveCreature,
            MatchError::NoDefender,
            MatchError::MatchOver,
            MatchError::WrongTeam {
                creature: "x".to_string(),
            },
            MatchError::CreatureDefeated {
                creature: "x".to_string(),
            },
        ];
        let mut codes: Vec<_> = errors.iter().map(MatchError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
